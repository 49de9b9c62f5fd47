use std::io::Write;

use super::{practice_line, summary_narrative, OutputWriter, RoiReport};
use crate::errors::Result;
use crate::formatting::{format_currency, format_months, format_number, format_percent};
use crate::sweep::SweepReport;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, cells: &[&str]) -> Result<()> {
        writeln!(self.writer, "| {} |", cells.join(" | "))?;
        Ok(())
    }

    fn write_summary(&mut self, report: &RoiReport) -> Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", practice_line(&report.inputs))?;
        writeln!(self.writer)?;
        self.write_row(&["Metric", "Value"])?;
        self.write_row(&["--------", "-------"])?;
        self.write_row(&["3-Year ROI", &format_percent(m.roi.roi_vs_current_percent)])?;
        self.write_row(&[
            "ROI vs Competitor",
            &format_percent(m.roi.roi_vs_competitor_percent),
        ])?;
        self.write_row(&["Net 3-Year Gain", &format_currency(m.roi.net_gain_3_year)])?;
        self.write_row(&["Payback (months)", &format_months(m.roi.payback_months)])?;
        self.write_row(&[
            "Provider Hours Saved",
            &format_number(m.time.total_hours_saved_3_year),
        ])?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, report: &RoiReport) -> Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "## 3-Year Cost Comparison")?;
        writeln!(self.writer)?;
        self.write_row(&["", "Medipyxis", "Current Stack", "Competitor"])?;
        self.write_row(&["---", "---:", "---:", "---:"])?;
        self.write_row(&[
            "Startup Cost",
            &format_currency(m.product.startup_cost),
            &format_currency(0.0),
            &format_currency(m.competitor.implementation_cost),
        ])?;
        self.write_row(&[
            "Monthly / User",
            &format_currency(report.inputs.product_monthly_price_per_provider),
            &format_currency(m.current_stack.monthly_per_user),
            &format_currency(m.competitor.monthly_per_user),
        ])?;
        self.write_row(&[
            "3-Year Total",
            &format_currency(m.product.three_year_cost),
            &format_currency(m.current_stack.three_year_cost),
            &format_currency(m.competitor.three_year_cost),
        ])?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Current Tool Stack")?;
        writeln!(self.writer)?;
        self.write_row(&["Tool", "$/user/mo", "Replaced by competitor"])?;
        self.write_row(&["---", "---:", "---"])?;
        for (category, cost) in report.inputs.legacy_tool_costs.iter() {
            self.write_row(&[
                category.label(),
                &format_currency(cost),
                if category.replaced_by_competitor() {
                    "yes"
                } else {
                    "no"
                },
            ])?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_per_provider(&mut self, report: &RoiReport) -> Result<()> {
        let p = &report.metrics.per_provider;
        writeln!(self.writer, "## Per Provider (3 years)")?;
        writeln!(self.writer)?;
        self.write_row(&["Benefit", "Value"])?;
        self.write_row(&["---", "---:"])?;
        self.write_row(&["Software Savings", &format_currency(p.software_savings_3_year)])?;
        self.write_row(&["Time Savings", &format_currency(p.time_savings_3_year)])?;
        self.write_row(&["Revenue Gain", &format_currency(p.revenue_gain_3_year)])?;
        self.write_row(&[
            "**Total**",
            &format!("**{}**", format_currency(p.total_benefit_3_year)),
        ])?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> Result<()> {
        self.write_header("Medipyxis ROI Report")?;
        self.write_summary(report)?;
        self.write_scenarios(report)?;
        self.write_per_provider(report)?;
        writeln!(self.writer, "{}", summary_narrative(report))?;
        Ok(())
    }

    fn write_sweep(&mut self, sweep: &SweepReport) -> Result<()> {
        self.write_header(&format!("Medipyxis ROI Sweep: {}", sweep.input.label()))?;
        self.write_row(&[
            sweep.input.label(),
            "ROI vs Current",
            "ROI vs Competitor",
            "Net 3-Year Gain",
            "Payback (months)",
        ])?;
        self.write_row(&["---:", "---:", "---:", "---:", "---:"])?;
        for point in &sweep.points {
            let roi = &point.metrics.roi;
            self.write_row(&[
                &sweep.input.format_value(point.value),
                &format_percent(roi.roi_vs_current_percent),
                &format_percent(roi.roi_vs_competitor_percent),
                &format_currency(roi.net_gain_3_year),
                &format_months(roi.payback_months),
            ])?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoiInputs, ToolCategory};
    use crate::sweep::{sweep, SweepInput};

    #[test]
    fn test_markdown_report_sections() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_report(&RoiReport::new(RoiInputs::default()))
            .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("# Medipyxis ROI Report\n"));
        assert!(output.contains("## Executive Summary"));
        assert!(output.contains("| 3-Year Total | $115,000 | $180,000 | $515,500 |"));
        assert!(output.contains("| CRM/BD | $150 | yes |"));
        assert!(output.contains("| EHR System | $300 | no |"));
        assert_eq!(
            output.matches("| yes |").count(),
            ToolCategory::ALL
                .iter()
                .filter(|c| c.replaced_by_competitor())
                .count()
        );
    }

    #[test]
    fn test_sweep_rows_show_value_used() {
        let mut buf = Vec::new();
        let report = sweep(&RoiInputs::default(), SweepInput::Price, Some(4));
        MarkdownWriter::new(&mut buf).write_sweep(&report).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("| $325 |"));
        assert!(output.contains("| $475 |"));
        assert!(!output.contains("333.3"));
    }
}
