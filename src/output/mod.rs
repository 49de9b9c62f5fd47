//! Report rendering: the presentation side of the calculator.
//!
//! Writers consume the engine's output plus the raw inputs and own all
//! formatting. Nothing here feeds back into a computation.

mod json;
mod markdown;
mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::{comparison_bar, TerminalWriter};

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::core::{RoiInputs, RoiMetrics};
use crate::engine::compute_roi;
use crate::errors::Result;
use crate::formatting::{format_currency, format_months, format_number, format_percent, FormattingConfig};
use crate::sweep::SweepReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

/// One calculation: the inputs shown to the user and what they produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoiReport {
    pub inputs: RoiInputs,
    pub metrics: RoiMetrics,
}

impl RoiReport {
    pub fn new(inputs: RoiInputs) -> Self {
        Self {
            metrics: compute_roi(&inputs),
            inputs,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RoiReport) -> Result<()>;
    fn write_sweep(&mut self, sweep: &SweepReport) -> Result<()>;
    /// Push buffered output to its destination, surfacing write failures.
    fn flush(&mut self) -> Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// Payback within a year is called out as quick in the narrative.
const QUICK_PAYBACK_MONTHS: f64 = 12.0;

/// The closing paragraph of the report.
pub fn summary_narrative(report: &RoiReport) -> String {
    let m = &report.metrics;
    let payback = match m.roi.payback_months {
        Some(months) => format!(
            "The {} startup investment pays back in {}{} months.",
            format_currency(m.product.startup_cost),
            if months <= QUICK_PAYBACK_MONTHS { "just " } else { "" },
            format_months(m.roi.payback_months)
        ),
        None => format!(
            "At these inputs the {} startup investment does not pay back.",
            format_currency(m.product.startup_cost)
        ),
    };

    format!(
        "Medipyxis delivers a {} ROI over 3 years. By consolidating 8 tools into one platform, \
         saving {} provider hours on documentation, and cutting denial rates from {}% to under 1%, \
         your total benefit is {}. {} Compared to building on the competitor platform (which only \
         replaces 2 of 8 tools and costs {} over 3 years), Medipyxis saves you an additional {}.",
        format_percent(m.roi.roi_vs_current_percent),
        format_number(m.time.total_hours_saved_3_year),
        format_number(report.inputs.current_denial_rate_percent),
        format_currency(m.roi.net_gain_3_year),
        payback,
        format_currency(m.competitor.three_year_cost),
        format_currency(m.savings_vs_competitor),
    )
}

/// Human-readable practice description; the only place clinic count shows.
pub fn practice_line(inputs: &RoiInputs) -> String {
    let plural = |n: u32, word: &str| {
        if n == 1 {
            format!("{n} {word}")
        } else {
            format!("{n} {word}s")
        }
    };
    format!(
        "{}, {}, {}",
        plural(inputs.provider_count, "provider"),
        plural(inputs.clinic_count, "clinic location"),
        if inputs.solo_practice {
            "solo practice"
        } else {
            "group practice"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts writes into a buffer it can never deliver.
    struct UndeliverableSink;

    impl Write for UndeliverableSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_flush_failure_is_reported_for_every_format() {
        for format in [OutputFormat::Terminal, OutputFormat::Json, OutputFormat::Markdown] {
            let mut writer =
                create_writer(format, Box::new(UndeliverableSink), FormattingConfig::plain());
            writer
                .write_report(&RoiReport::new(RoiInputs::default()))
                .unwrap();
            let err = writer.flush().unwrap_err();
            assert!(err.to_string().contains("disk full"), "{format:?}: {err}");
        }
    }

    #[test]
    fn test_narrative_mentions_headline_figures() {
        let text = summary_narrative(&RoiReport::new(RoiInputs::default()));
        assert!(text.contains("2,869% ROI"));
        assert!(text.contains("$3.30M"));
        assert!(text.contains("from 21% to under 1%"));
        assert!(text.contains("pays back in just 0.3 months"));
        assert!(text.contains("$515,500"));
    }

    #[test]
    fn test_narrative_drops_just_for_slow_payback() {
        // Software savings alone: 47,000 over 3 years against a 25,000 startup.
        let inputs = RoiInputs {
            current_denial_rate_percent: 1.0,
            daily_doc_hours_per_provider: 0.0,
            product_monthly_price_per_provider: 600.0,
            ..RoiInputs::default()
        };
        let report = RoiReport::new(inputs);
        let months = report.metrics.roi.payback_months.unwrap();
        assert!(months > QUICK_PAYBACK_MONTHS, "payback {months}");

        let text = summary_narrative(&report);
        assert!(text.contains(&format!("pays back in {} months", format_months(Some(months)))));
        assert!(!text.contains("just"));
    }

    #[test]
    fn test_practice_line_pluralizes() {
        assert_eq!(
            practice_line(&RoiInputs::default()),
            "5 providers, 1 clinic location, group practice"
        );
        let solo = RoiInputs {
            provider_count: 1,
            clinic_count: 2,
            solo_practice: true,
            ..RoiInputs::default()
        };
        assert_eq!(practice_line(&solo), "1 provider, 2 clinic locations, solo practice");
    }
}
