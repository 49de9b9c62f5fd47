//! The ROI engine: one pure function from inputs to metrics.
//!
//! Evaluation order and grouping of every expression are fixed so that
//! results match the calculator page exactly under identical inputs. Do not
//! reassociate the arithmetic below.

use crate::core::{
    CompetitorScenario, CurrentStackScenario, PerProviderBreakdown, ProductScenario,
    RevenueRecovery, RoiInputs, RoiMetrics, RoiSummary, TimeSavings, HORIZON_MONTHS,
    HORIZON_YEARS, MONTHS_PER_YEAR,
};
use crate::policy::PricingPolicy;

/// Compute every metric with the standard pricing policy.
///
/// # Example
///
/// ```rust
/// use medipyxis_roi::{compute_roi, RoiInputs};
///
/// let metrics = compute_roi(&RoiInputs::default());
/// assert_eq!(metrics.product.three_year_cost, 115_000.0);
/// assert_eq!(metrics.current_stack.three_year_cost, 180_000.0);
/// ```
pub fn compute_roi(inputs: &RoiInputs) -> RoiMetrics {
    compute_roi_with_policy(inputs, &PricingPolicy::default())
}

/// Compute every metric against an explicit policy.
///
/// Inputs are taken as given. A provider count of zero yields non-finite
/// per-provider figures; callers reject it before getting here.
pub fn compute_roi_with_policy(inputs: &RoiInputs, policy: &PricingPolicy) -> RoiMetrics {
    let providers = inputs.providers();

    let product = product_scenario(inputs, policy, providers);
    let current_stack = current_stack_scenario(inputs, providers);
    let competitor = competitor_scenario(inputs, policy, providers);

    let savings_vs_current = current_stack.three_year_cost - product.three_year_cost;
    let savings_vs_competitor = competitor.three_year_cost - product.three_year_cost;

    let time = time_savings(inputs, policy, providers);
    let revenue = revenue_recovery(inputs, policy, providers);

    let total_benefits_3_year = savings_vs_current + time.value_3_year + revenue.total_additional_3_year;
    let roi_vs_current_percent = (total_benefits_3_year / product.three_year_cost) * 100.0;
    let roi_vs_competitor_percent = ((savings_vs_competitor
        + time.value_3_year
        + revenue.total_additional_3_year)
        / product.three_year_cost)
        * 100.0;

    let monthly_benefit = (savings_vs_current + time.value_3_year + revenue.total_additional_3_year)
        / HORIZON_MONTHS;
    let payback_months = payback_period(product.startup_cost, monthly_benefit);
    tracing::trace!(
        providers,
        roi_vs_current_percent,
        monthly_benefit,
        "roi computed"
    );

    let software_savings_3_year = savings_vs_current / providers;
    let revenue_gain_3_year = revenue.additional_per_provider_per_year * HORIZON_YEARS;
    let time_savings_3_year =
        time.hours_saved_per_provider_per_year * HORIZON_YEARS * policy.provider_hourly_rate;

    RoiMetrics {
        product,
        current_stack,
        competitor,
        savings_vs_current,
        savings_vs_competitor,
        time,
        revenue,
        roi: RoiSummary {
            total_benefits_3_year,
            net_gain_3_year: total_benefits_3_year,
            roi_vs_current_percent,
            roi_vs_competitor_percent,
            monthly_benefit,
            payback_months,
        },
        per_provider: PerProviderBreakdown {
            software_savings_3_year,
            time_savings_3_year,
            revenue_gain_3_year,
            total_benefit_3_year: software_savings_3_year + revenue_gain_3_year + time_savings_3_year,
        },
    }
}

/// Months until the startup cost is recovered.
///
/// `None` when the monthly benefit is zero or negative, or when the quotient
/// is not finite.
pub fn payback_period(startup_cost: f64, monthly_benefit: f64) -> Option<f64> {
    if monthly_benefit > 0.0 {
        Some(startup_cost / monthly_benefit).filter(|months| months.is_finite())
    } else {
        None
    }
}

fn product_scenario(inputs: &RoiInputs, policy: &PricingPolicy, providers: f64) -> ProductScenario {
    let startup_cost = policy.startup_cost(inputs.solo_practice);
    let monthly_total = providers * inputs.product_monthly_price_per_provider;

    ProductScenario {
        startup_cost,
        monthly_total,
        three_year_cost: startup_cost + monthly_total * MONTHS_PER_YEAR * HORIZON_YEARS,
    }
}

fn current_stack_scenario(inputs: &RoiInputs, providers: f64) -> CurrentStackScenario {
    let monthly_per_user = inputs.legacy_tool_costs.monthly_per_user();
    let monthly_total = monthly_per_user * providers;

    CurrentStackScenario {
        monthly_per_user,
        monthly_total,
        three_year_cost: monthly_total * MONTHS_PER_YEAR * HORIZON_YEARS,
    }
}

fn competitor_scenario(
    inputs: &RoiInputs,
    policy: &PricingPolicy,
    providers: f64,
) -> CompetitorScenario {
    let additional_tools_cost = inputs.legacy_tool_costs.not_replaced_by_competitor();
    let monthly_per_user = policy.competitor_license_ceiling + additional_tools_cost;
    let monthly_total = monthly_per_user * providers;

    CompetitorScenario {
        implementation_cost: policy.competitor_upfront,
        additional_tools_cost,
        monthly_per_user,
        monthly_total,
        three_year_cost: policy.competitor_upfront
            + monthly_total * MONTHS_PER_YEAR * HORIZON_YEARS,
    }
}

fn time_savings(inputs: &RoiInputs, policy: &PricingPolicy, providers: f64) -> TimeSavings {
    let hours_saved_per_provider_per_year = inputs.daily_doc_hours_per_provider
        * policy.doc_time_reduction
        * policy.working_days_per_year;
    let total_hours_saved_3_year = hours_saved_per_provider_per_year * providers * HORIZON_YEARS;

    TimeSavings {
        hours_saved_per_provider_per_year,
        total_hours_saved_3_year,
        value_3_year: total_hours_saved_3_year * policy.provider_hourly_rate,
    }
}

fn revenue_recovery(inputs: &RoiInputs, policy: &PricingPolicy, providers: f64) -> RevenueRecovery {
    let improvement_fraction =
        (inputs.current_denial_rate_percent - policy.product_denial_rate_percent) / 100.0;
    let additional_per_provider_per_year = inputs.annual_revenue_per_provider * improvement_fraction;

    RevenueRecovery {
        denial_rate_improvement_percent: improvement_fraction * 100.0,
        additional_per_provider_per_year,
        total_additional_3_year: additional_per_provider_per_year * providers * HORIZON_YEARS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LegacyToolCosts, ToolCategory};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_reference_scenario_costs() {
        let m = compute_roi(&RoiInputs::default());

        assert_eq!(m.current_stack.monthly_per_user, 1000.0);
        assert_eq!(m.current_stack.monthly_total, 5000.0);
        assert_eq!(m.current_stack.three_year_cost, 180_000.0);

        assert_eq!(m.product.startup_cost, 25_000.0);
        assert_eq!(m.product.monthly_total, 2500.0);
        assert_eq!(m.product.three_year_cost, 115_000.0);

        assert_eq!(m.competitor.additional_tools_cost, 775.0);
        assert_eq!(m.competitor.monthly_per_user, 1475.0);
        assert_eq!(m.competitor.monthly_total, 7375.0);
        assert_eq!(m.competitor.three_year_cost, 515_500.0);

        assert_eq!(m.savings_vs_current, 65_000.0);
        assert_eq!(m.savings_vs_competitor, 400_500.0);
    }

    #[test]
    fn test_reference_scenario_benefits() {
        let m = compute_roi(&RoiInputs::default());

        assert!(approx_eq(m.time.hours_saved_per_provider_per_year, 437.5));
        assert!(approx_eq(m.time.total_hours_saved_3_year, 6562.5));
        assert!(approx_eq(m.time.value_3_year, 984_375.0));

        assert!(approx_eq(m.revenue.denial_rate_improvement_percent, 20.0));
        assert!(approx_eq(m.revenue.additional_per_provider_per_year, 150_000.0));
        assert!(approx_eq(m.revenue.total_additional_3_year, 2_250_000.0));

        assert!(approx_eq(m.roi.total_benefits_3_year, 3_299_375.0));
        assert_eq!(m.roi.net_gain_3_year, m.roi.total_benefits_3_year);
        assert!((m.roi.roi_vs_current_percent - 2869.02).abs() < 0.01);

        let payback = m.roi.payback_months.unwrap();
        assert!((payback - 0.2728).abs() < 0.001);
    }

    #[test]
    fn test_roi_vs_competitor_uses_competitor_savings() {
        let m = compute_roi(&RoiInputs::default());
        let expected = (400_500.0 + m.time.value_3_year + m.revenue.total_additional_3_year)
            / 115_000.0
            * 100.0;
        assert!(approx_eq(m.roi.roi_vs_competitor_percent, expected));
        assert!(m.roi.roi_vs_competitor_percent > m.roi.roi_vs_current_percent);
    }

    #[test]
    fn test_per_provider_breakdown() {
        let m = compute_roi(&RoiInputs::default());
        assert!(approx_eq(m.per_provider.software_savings_3_year, 13_000.0));
        assert!(approx_eq(m.per_provider.revenue_gain_3_year, 450_000.0));
        assert!(approx_eq(m.per_provider.time_savings_3_year, 196_875.0));
        assert!(approx_eq(m.per_provider.total_benefit_3_year, 659_875.0));
    }

    #[test]
    fn test_solo_practice_uses_solo_startup() {
        let inputs = RoiInputs {
            provider_count: 1,
            solo_practice: true,
            ..RoiInputs::default()
        };
        let m = compute_roi(&inputs);
        assert_eq!(m.product.startup_cost, 5_000.0);
        assert_eq!(m.product.three_year_cost, 5_000.0 + 500.0 * 36.0);
    }

    #[test]
    fn test_clinic_count_does_not_affect_metrics() {
        let one = compute_roi(&RoiInputs::default());
        let many = compute_roi(&RoiInputs {
            clinic_count: 20,
            ..RoiInputs::default()
        });
        assert_eq!(one, many);
    }

    #[test]
    fn test_replaced_tools_do_not_change_competitor_cost() {
        let base = compute_roi(&RoiInputs::default());
        let costs = LegacyToolCosts::default()
            .with(ToolCategory::Crm, 900.0)
            .with(ToolCategory::Analytics, 900.0);
        let m = compute_roi(&RoiInputs {
            legacy_tool_costs: costs,
            ..RoiInputs::default()
        });
        assert_eq!(m.competitor, base.competitor);
        assert!(m.current_stack.three_year_cost > base.current_stack.three_year_cost);
    }

    #[test]
    fn test_zero_monthly_benefit_has_no_payback() {
        assert_eq!(payback_period(25_000.0, 0.0), None);
        assert_eq!(payback_period(25_000.0, -10.0), None);
        assert_eq!(payback_period(25_000.0, f64::MIN_POSITIVE), None);
        assert_eq!(payback_period(25_000.0, 1000.0), Some(25.0));
    }

    #[test]
    fn test_degenerate_inputs_report_no_payback() {
        // No legacy spend, no denial gap, no documentation time: only the
        // product's own cost remains, so benefits are negative.
        let inputs = RoiInputs {
            legacy_tool_costs: LegacyToolCosts {
                ehr: 0.0,
                scheduling: 0.0,
                crm: 0.0,
                billing: 0.0,
                hr: 0.0,
                lms: 0.0,
                inventory: 0.0,
                analytics: 0.0,
            },
            current_denial_rate_percent: 1.0,
            daily_doc_hours_per_provider: 0.0,
            ..RoiInputs::default()
        };
        let m = compute_roi(&inputs);
        assert!(m.roi.monthly_benefit < 0.0);
        assert!(!m.pays_back());
    }

    #[test]
    fn test_custom_policy_changes_startup() {
        let policy = PricingPolicy {
            startup_standard: 50_000.0,
            ..PricingPolicy::default()
        };
        let m = compute_roi_with_policy(&RoiInputs::default(), &policy);
        assert_eq!(m.product.three_year_cost, 140_000.0);
    }
}
