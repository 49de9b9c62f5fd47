//! Fixed pricing and productivity assumptions behind every comparison.
//!
//! None of these are user-adjustable. [`PricingPolicy`] exists so the engine
//! reads them from one value instead of scattered literals.

use serde::{Deserialize, Serialize};

/// Competitor per-user monthly license ceiling.
pub const COMPETITOR_LICENSE_CEILING: f64 = 700.0;
/// Competitor one-time implementation (custom development) cost.
pub const COMPETITOR_UPFRONT: f64 = 250_000.0;
/// Number of the 8 tool categories the competitor replaces.
pub const COMPETITOR_REPLACED_TOOLS: usize = 2;
pub const STARTUP_STANDARD: f64 = 25_000.0;
pub const STARTUP_SOLO: f64 = 5_000.0;
/// Denial rate, in percent, achieved with the product.
pub const PRODUCT_DENIAL_RATE: f64 = 1.0;
/// Fraction of daily documentation time removed.
pub const DOC_TIME_REDUCTION: f64 = 0.70;
/// Fully-loaded value of one provider hour.
pub const PROVIDER_HOURLY_RATE: f64 = 150.0;
pub const WORKING_DAYS_PER_YEAR: f64 = 250.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub competitor_license_ceiling: f64,
    pub competitor_upfront: f64,
    pub startup_standard: f64,
    pub startup_solo: f64,
    pub product_denial_rate_percent: f64,
    pub doc_time_reduction: f64,
    pub provider_hourly_rate: f64,
    pub working_days_per_year: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            competitor_license_ceiling: COMPETITOR_LICENSE_CEILING,
            competitor_upfront: COMPETITOR_UPFRONT,
            startup_standard: STARTUP_STANDARD,
            startup_solo: STARTUP_SOLO,
            product_denial_rate_percent: PRODUCT_DENIAL_RATE,
            doc_time_reduction: DOC_TIME_REDUCTION,
            provider_hourly_rate: PROVIDER_HOURLY_RATE,
            working_days_per_year: WORKING_DAYS_PER_YEAR,
        }
    }
}

impl PricingPolicy {
    pub fn startup_cost(&self, solo_practice: bool) -> f64 {
        if solo_practice {
            self.startup_solo
        } else {
            self.startup_standard
        }
    }
}
