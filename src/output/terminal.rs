use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

use super::{practice_line, summary_narrative, OutputWriter, RoiReport};
use crate::core::{RoiMetrics, ToolCategory};
use crate::errors::Result;
use crate::formatting::{
    format_currency, format_months, format_number, format_percent, formatter_for,
    FormattingConfig, OutputFormatter,
};
use crate::policy::COMPETITOR_REPLACED_TOOLS;
use crate::sweep::SweepReport;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 16;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
    style: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatting,
            style: formatter_for(formatting),
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        if self.formatting.color.should_use_color() {
            table.load_preset(UTF8_FULL);
        } else {
            table.load_preset(ASCII_FULL);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn write_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{}", self.style.header(title))?;
        writeln!(self.writer, "{}", self.style.header(&"=".repeat(title.len())))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_headline(&mut self, report: &RoiReport) -> Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "{}", practice_line(&report.inputs))?;
        writeln!(self.writer)?;
        let rows = [
            ("3-Year ROI", format_percent(m.roi.roi_vs_current_percent)),
            ("Net 3-Year Gain", format_currency(m.roi.net_gain_3_year)),
            ("Payback (months)", format_months(m.roi.payback_months)),
            ("Hours Saved (3yr)", format_number(m.time.total_hours_saved_3_year)),
        ];
        for (label, value) in rows {
            writeln!(self.writer, "  {:<20} {}", label, self.style.gain(&value))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_bars(&mut self, metrics: &RoiMetrics) -> Result<()> {
        writeln!(self.writer, "{}", self.style.dim("3-Year Total Cost"))?;
        let values = metrics.three_year_costs();
        let max = values.iter().copied().fold(0.0, f64::max);
        let labels = ["Medipyxis", "Current Stack", "Competitor"];

        for (idx, (label, value)) in labels.iter().zip(values).enumerate() {
            let bar = comparison_bar(value, max, BAR_WIDTH);
            let painted = match idx {
                0 => self.style.product(&bar),
                1 => self.style.current_stack(&bar),
                _ => self.style.competitor(&bar),
            };
            writeln!(
                self.writer,
                "  {:<width$} {} {}",
                label,
                painted,
                format_currency(value),
                width = LABEL_WIDTH
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenario_table(&mut self, report: &RoiReport) -> Result<()> {
        let m = &report.metrics;
        let kept_tools = ToolCategory::ALL.len() - COMPETITOR_REPLACED_TOOLS;
        let mut table = self.new_table();
        table.set_header(vec!["", "Medipyxis", "Current Stack", "Competitor"]);

        let rows = vec![
            (
                "Startup Cost",
                format_currency(m.product.startup_cost),
                format_currency(0.0),
                format_currency(m.competitor.implementation_cost),
            ),
            (
                "Monthly / User",
                format_currency(report.inputs.product_monthly_price_per_provider),
                format_currency(m.current_stack.monthly_per_user),
                format_currency(m.competitor.monthly_per_user),
            ),
            (
                "Monthly Total",
                format_currency(m.product.monthly_total),
                format_currency(m.current_stack.monthly_total),
                format_currency(m.competitor.monthly_total),
            ),
            (
                "Tools Still Needed",
                "None".to_string(),
                format!("{} tools", ToolCategory::ALL.len()),
                format!(
                    "{} tools (+{}/user)",
                    kept_tools,
                    format_currency(m.competitor.additional_tools_cost)
                ),
            ),
            (
                "3-Year Total",
                format_currency(m.product.three_year_cost),
                format_currency(m.current_stack.three_year_cost),
                format_currency(m.competitor.three_year_cost),
            ),
            (
                "Revenue Recovered",
                format_currency(m.revenue.total_additional_3_year),
                "-".to_string(),
                "-".to_string(),
            ),
        ];

        for (label, product, current, competitor) in rows {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(product).set_alignment(CellAlignment::Right),
                Cell::new(current).set_alignment(CellAlignment::Right),
                Cell::new(competitor).set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_per_provider(&mut self, metrics: &RoiMetrics) -> Result<()> {
        let p = &metrics.per_provider;
        writeln!(self.writer, "{}", self.style.header("Per Provider (3 years)"))?;
        let rows = [
            ("Software Savings", p.software_savings_3_year),
            ("Time Savings", p.time_savings_3_year),
            ("Revenue Gain", p.revenue_gain_3_year),
        ];
        for (label, value) in rows {
            writeln!(self.writer, "  {:<20} {}", label, format_currency(value))?;
        }
        writeln!(
            self.writer,
            "  {:<20} {}",
            "Total Benefit",
            self.style.gain(&format_currency(p.total_benefit_3_year))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> Result<()> {
        self.write_header("Medipyxis ROI Calculator")?;
        self.write_headline(report)?;
        self.write_cost_bars(&report.metrics)?;
        self.write_scenario_table(report)?;
        self.write_per_provider(&report.metrics)?;
        writeln!(self.writer, "{}", summary_narrative(report))?;
        Ok(())
    }

    fn write_sweep(&mut self, sweep: &SweepReport) -> Result<()> {
        self.write_header(&format!("Sweep: {}", sweep.input.label()))?;
        let mut table = self.new_table();
        table.set_header(vec![
            sweep.input.label(),
            "ROI vs Current",
            "ROI vs Competitor",
            "Net 3-Year Gain",
            "Payback (months)",
        ]);

        for point in &sweep.points {
            let m = &point.metrics;
            table.add_row(vec![
                Cell::new(sweep.input.format_value(point.value)),
                Cell::new(format_percent(m.roi.roi_vs_current_percent))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_percent(m.roi.roi_vs_competitor_percent))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_currency(m.roi.net_gain_3_year))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_months(m.roi.payback_months))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// A bar `width` cells long at `max`, scaled linearly below it.
pub fn comparison_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}
