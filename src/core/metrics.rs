//! The derived-metrics record produced by the ROI engine.
//!
//! Every figure is a raw dollar, hour, or percent amount. Currency and
//! rounding are applied by [`crate::formatting`] only.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductScenario {
    pub startup_cost: f64,
    pub monthly_total: f64,
    pub three_year_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentStackScenario {
    pub monthly_per_user: f64,
    pub monthly_total: f64,
    pub three_year_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitorScenario {
    /// One-time custom development before go-live.
    pub implementation_cost: f64,
    /// Per-user cost of the tools the competitor does not replace.
    pub additional_tools_cost: f64,
    pub monthly_per_user: f64,
    pub monthly_total: f64,
    pub three_year_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSavings {
    pub hours_saved_per_provider_per_year: f64,
    pub total_hours_saved_3_year: f64,
    pub value_3_year: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecovery {
    /// Percentage points of denial rate removed.
    pub denial_rate_improvement_percent: f64,
    pub additional_per_provider_per_year: f64,
    pub total_additional_3_year: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub total_benefits_3_year: f64,
    pub net_gain_3_year: f64,
    pub roi_vs_current_percent: f64,
    pub roi_vs_competitor_percent: f64,
    pub monthly_benefit: f64,
    /// `None` when the monthly benefit is not positive; the startup cost is
    /// never recovered in that case.
    pub payback_months: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerProviderBreakdown {
    pub software_savings_3_year: f64,
    pub time_savings_3_year: f64,
    pub revenue_gain_3_year: f64,
    pub total_benefit_3_year: f64,
}

/// Full result of one engine run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub product: ProductScenario,
    pub current_stack: CurrentStackScenario,
    pub competitor: CompetitorScenario,
    pub savings_vs_current: f64,
    pub savings_vs_competitor: f64,
    pub time: TimeSavings,
    pub revenue: RevenueRecovery,
    pub roi: RoiSummary,
    pub per_provider: PerProviderBreakdown,
}

impl RoiMetrics {
    /// 3-year costs in display order: product, current stack, competitor.
    pub fn three_year_costs(&self) -> [f64; 3] {
        [
            self.product.three_year_cost,
            self.current_stack.three_year_cost,
            self.competitor.three_year_cost,
        ]
    }

    pub fn pays_back(&self) -> bool {
        self.roi.payback_months.is_some()
    }
}
