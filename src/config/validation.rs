//! Boundary validation of scenario values, accumulating every error.
//!
//! Uses stillwater's `Validation` so one run reports all problems in a
//! scenario instead of stopping at the first. A successful validation yields
//! the [`RoiInputs`] the engine consumes.
//!
//! # Example
//!
//! ```rust
//! use medipyxis_roi::config::{validate_config, RoiConfig};
//!
//! let validation = validate_config(&RoiConfig::default());
//! assert!(validation.is_success());
//! ```

use stillwater::{NonEmptyVec, Validation};

use super::RoiConfig;
use crate::core::RoiInputs;
use crate::errors::RoiError;
use crate::state::{ControlRange, ANNUAL_REVENUE, CLINICS, DENIAL_RATE, DOC_HOURS, PRODUCT_PRICE, PROVIDERS};

pub type RoiValidation<T> = Validation<T, NonEmptyVec<RoiError>>;

/// Validate a scenario and convert it to engine inputs.
pub fn validate_config(config: &RoiConfig) -> RoiValidation<RoiInputs> {
    let mut errors = Vec::new();

    let providers = config.effective_providers();
    check_range(&mut errors, "practice.providers", providers as f64, &PROVIDERS);
    check_range(&mut errors, "practice.clinics", config.practice.clinics as f64, &CLINICS);
    if config.practice.solo && providers != 1 {
        errors.push(RoiError::constraint(
            "practice.providers",
            format!("a solo practice has exactly 1 provider, got {providers}"),
        ));
    }

    let financials = &config.financials;
    check_range(
        &mut errors,
        "financials.annual_revenue_per_provider",
        financials.annual_revenue_per_provider,
        &ANNUAL_REVENUE,
    );
    check_range(
        &mut errors,
        "financials.denial_rate_percent",
        financials.denial_rate_percent,
        &DENIAL_RATE,
    );
    check_range(
        &mut errors,
        "financials.daily_doc_hours",
        financials.daily_doc_hours,
        &DOC_HOURS,
    );
    check_range(
        &mut errors,
        "pricing.price_per_provider",
        config.pricing.price_per_provider,
        &PRODUCT_PRICE,
    );

    for (category, cost) in config.legacy_tools.iter() {
        if !cost.is_finite() || cost < 0.0 {
            errors.push(RoiError::invalid_amount(
                format!("legacy_tools.{}", category.key()),
                cost,
            ));
        }
    }

    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(RoiInputs {
            provider_count: providers as u32,
            clinic_count: config.practice.clinics as u32,
            solo_practice: config.practice.solo,
            annual_revenue_per_provider: financials.annual_revenue_per_provider,
            current_denial_rate_percent: financials.denial_rate_percent,
            daily_doc_hours_per_provider: financials.daily_doc_hours,
            product_monthly_price_per_provider: config.pricing.price_per_provider,
            legacy_tool_costs: config.legacy_tools,
        }),
    }
}

/// Fail-fast wrapper returning every error as a plain vector.
pub fn validate_config_result(config: &RoiConfig) -> Result<RoiInputs, Vec<RoiError>> {
    match validate_config(config) {
        Validation::Success(inputs) => Ok(inputs),
        Validation::Failure(errors) => Err(errors.into_iter().collect()),
    }
}

/// One error per line, for terminal display.
pub fn format_validation_errors(errors: &[RoiError]) -> String {
    let mut out = format!("Scenario has {} error(s):\n", errors.len());
    for error in errors {
        out.push_str(&format!("  - {error}\n"));
    }
    out
}

fn check_range(errors: &mut Vec<RoiError>, field: &str, value: f64, range: &ControlRange) {
    if !value.is_finite() || !range.contains(value) {
        errors.push(RoiError::out_of_range(field, value, range.min, range.max));
    }
}
