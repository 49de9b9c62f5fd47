pub mod metrics;
pub mod tools;

use serde::{Deserialize, Serialize};

pub use metrics::{
    CompetitorScenario, CurrentStackScenario, PerProviderBreakdown, ProductScenario,
    RevenueRecovery, RoiMetrics, RoiSummary, TimeSavings,
};
pub use tools::{LegacyToolCosts, ToolCategory};

/// Evaluation horizon used by every 3-year figure.
pub const HORIZON_YEARS: f64 = 3.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const HORIZON_MONTHS: f64 = 36.0;

/// The user-adjustable input configuration of the calculator.
///
/// Plain data: the engine never mutates or validates it. Range enforcement
/// belongs to [`crate::state::CalculatorState`] and
/// [`crate::config::validation`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub provider_count: u32,
    /// Display only; no formula reads it.
    pub clinic_count: u32,
    pub solo_practice: bool,
    pub annual_revenue_per_provider: f64,
    pub current_denial_rate_percent: f64,
    pub daily_doc_hours_per_provider: f64,
    pub product_monthly_price_per_provider: f64,
    pub legacy_tool_costs: LegacyToolCosts,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            provider_count: 5,
            clinic_count: 1,
            solo_practice: false,
            annual_revenue_per_provider: 750_000.0,
            current_denial_rate_percent: 21.0,
            daily_doc_hours_per_provider: 2.5,
            product_monthly_price_per_provider: 500.0,
            legacy_tool_costs: LegacyToolCosts::default(),
        }
    }
}

impl RoiInputs {
    pub fn providers(&self) -> f64 {
        f64::from(self.provider_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calculator_page() {
        let inputs = RoiInputs::default();
        assert_eq!(inputs.provider_count, 5);
        assert_eq!(inputs.clinic_count, 1);
        assert!(!inputs.solo_practice);
        assert_eq!(inputs.annual_revenue_per_provider, 750_000.0);
        assert_eq!(inputs.current_denial_rate_percent, 21.0);
        assert_eq!(inputs.daily_doc_hours_per_provider, 2.5);
        assert_eq!(inputs.product_monthly_price_per_provider, 500.0);
    }

    #[test]
    fn test_inputs_serialize_tool_costs_by_key() {
        let json = serde_json::to_value(RoiInputs::default()).unwrap();
        assert_eq!(json["legacy_tool_costs"]["ehr"], 300.0);
        assert_eq!(json["legacy_tool_costs"]["analytics"], 75.0);
    }
}
