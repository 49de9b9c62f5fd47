use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{parse_tool_cost, InputOverrides};
use crate::core::ToolCategory;
use crate::formatting::ColorMode;
use crate::output::OutputFormat;
use crate::sweep::SweepInput;

#[derive(Parser, Debug)]
#[command(name = "medipyxis-roi")]
#[command(about = "ROI calculator: Medipyxis vs. your current tool stack vs. a competitor platform", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the 3-year comparison for one scenario
    Calculate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Recompute across one input's whole slider range
    Sweep {
        /// Input to vary
        #[arg(value_enum)]
        input: SweepInput,

        /// Evenly spaced points instead of every slider step
        #[arg(long)]
        steps: Option<usize>,

        #[command(flatten)]
        scenario: ScenarioArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check a scenario file and report every problem
    Validate {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Write a default scenario file to the current directory
    Init {
        /// Force overwrite existing scenario
        #[arg(short, long)]
        force: bool,
    },
}

/// Where the scenario comes from, plus per-value replacements.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Scenario file (defaults to the nearest .medipyxis-roi.toml)
    #[arg(short, long, env = "MEDIPYXIS_ROI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of providers (1-50)
    #[arg(long, allow_negative_numbers = true)]
    pub providers: Option<i64>,

    /// Number of clinic locations (1-20); display only
    #[arg(long, allow_negative_numbers = true)]
    pub clinics: Option<i64>,

    /// Solo practice (one provider, lower startup cost); --solo=false to clear
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub solo: Option<bool>,

    /// Annual revenue per provider in dollars (250000-2000000)
    #[arg(long)]
    pub revenue: Option<f64>,

    /// Current claim denial rate in percent (5-35)
    #[arg(long = "denial-rate")]
    pub denial_rate: Option<f64>,

    /// Daily documentation hours per provider (1-5)
    #[arg(long = "doc-hours")]
    pub doc_hours: Option<f64>,

    /// Medipyxis monthly price per provider in dollars (200-600)
    #[arg(long)]
    pub price: Option<f64>,

    /// Monthly per-user cost of a current tool, e.g. --tool-cost ehr=275 (repeatable)
    #[arg(long = "tool-cost", value_parser = parse_tool_cost)]
    pub tool_costs: Vec<(ToolCategory, f64)>,
}

impl ScenarioArgs {
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            providers: self.providers,
            clinics: self.clinics,
            solo: self.solo,
            annual_revenue_per_provider: self.revenue,
            denial_rate_percent: self.denial_rate,
            daily_doc_hours: self.doc_hours,
            price_per_provider: self.price,
            tool_costs: self.tool_costs.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plain output (no colors, ASCII tables)
    #[arg(long)]
    pub plain: bool,

    /// When to color terminal output; NO_COLOR and CLICOLOR apply when unset
    #[arg(long, value_enum, conflicts_with = "plain")]
    pub color: Option<ColorMode>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
