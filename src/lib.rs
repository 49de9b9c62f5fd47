// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod policy;
pub mod state;
pub mod sweep;

// Re-export commonly used types
pub use crate::core::{
    CompetitorScenario, CurrentStackScenario, LegacyToolCosts, PerProviderBreakdown,
    ProductScenario, RevenueRecovery, RoiInputs, RoiMetrics, RoiSummary, TimeSavings,
    ToolCategory,
};

pub use crate::engine::{compute_roi, compute_roi_with_policy, payback_period};

pub use crate::policy::PricingPolicy;

pub use crate::state::{CalculatorState, ControlRange};

pub use crate::config::{load_config, validate_config, RoiConfig};

pub use crate::errors::{ErrorCode, RoiError};

pub use crate::output::{create_writer, OutputFormat, OutputWriter, RoiReport};

pub use crate::sweep::{sweep, SweepInput, SweepReport};
