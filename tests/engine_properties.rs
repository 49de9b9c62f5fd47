//! Property-based tests for the ROI engine
//!
//! These hold for every input inside the calculator's control ranges:
//! - Scenario costs are never negative
//! - The current stack cost is the plain sum of the eight tools
//! - ROI falls as the product price rises
//! - Payback grows with startup cost at a fixed monthly benefit
//! - The solo toggle pins and restores the provider count
//! - Recomputation is bit-for-bit deterministic

use medipyxis_roi::{
    compute_roi, payback_period, CalculatorState, LegacyToolCosts, RoiInputs, ToolCategory,
};
use proptest::prelude::*;

fn tool_costs() -> impl Strategy<Value = LegacyToolCosts> {
    prop::array::uniform8(0.0f64..2_000.0).prop_map(|values| {
        let mut costs = LegacyToolCosts::default();
        for (category, value) in ToolCategory::ALL.iter().zip(values) {
            costs.set(*category, value);
        }
        costs
    })
}

fn valid_inputs() -> impl Strategy<Value = RoiInputs> {
    (
        1u32..=50,
        1u32..=20,
        any::<bool>(),
        250_000.0f64..=2_000_000.0,
        5.0f64..=35.0,
        1.0f64..=5.0,
        200.0f64..=600.0,
        tool_costs(),
    )
        .prop_map(
            |(providers, clinics, solo, revenue, denial, hours, price, costs)| RoiInputs {
                provider_count: if solo { 1 } else { providers },
                clinic_count: clinics,
                solo_practice: solo,
                annual_revenue_per_provider: revenue,
                current_denial_rate_percent: denial,
                daily_doc_hours_per_provider: hours,
                product_monthly_price_per_provider: price,
                legacy_tool_costs: costs,
            },
        )
}

proptest! {
    #[test]
    fn prop_three_year_costs_are_non_negative(inputs in valid_inputs()) {
        let m = compute_roi(&inputs);
        prop_assert!(m.product.three_year_cost >= 0.0);
        prop_assert!(m.current_stack.three_year_cost >= 0.0);
        prop_assert!(m.competitor.three_year_cost >= 0.0);
    }

    #[test]
    fn prop_current_stack_is_sum_of_tools_in_any_order(
        costs in tool_costs(),
        order in Just(ToolCategory::ALL.to_vec()).prop_shuffle()
    ) {
        let inputs = RoiInputs { legacy_tool_costs: costs, ..RoiInputs::default() };
        let shuffled_sum = order.iter().fold(0.0, |acc, c| acc + costs.get(*c));
        let m = compute_roi(&inputs);
        prop_assert!((m.current_stack.monthly_per_user - shuffled_sum).abs() <= 1e-9 * shuffled_sum.max(1.0));
    }

    #[test]
    fn prop_roi_falls_as_price_rises(
        inputs in valid_inputs(),
        low_step in 0u32..16,
        gap in 1u32..=16
    ) {
        let high_step = (low_step + gap).min(16);
        prop_assume!(high_step > low_step);
        let at = |step: u32| RoiInputs {
            product_monthly_price_per_provider: 200.0 + 25.0 * f64::from(step),
            ..inputs
        };
        let cheaper = compute_roi(&at(low_step));
        let pricier = compute_roi(&at(high_step));
        prop_assert!(cheaper.roi.roi_vs_current_percent > pricier.roi.roi_vs_current_percent);
    }

    #[test]
    fn prop_payback_grows_with_startup_cost(
        startup in 1_000.0f64..100_000.0,
        extra in 1.0f64..50_000.0,
        monthly_benefit in 1.0f64..1_000_000.0
    ) {
        let small = payback_period(startup, monthly_benefit).unwrap();
        let large = payback_period(startup + extra, monthly_benefit).unwrap();
        prop_assert!(large > small);
    }

    #[test]
    fn prop_solo_toggle_pins_then_restores_providers(providers in 1u32..=50) {
        let mut state = CalculatorState::new();
        state.set_provider_count(providers);

        state.set_solo_practice(true);
        prop_assert_eq!(state.inputs().provider_count, 1);
        prop_assert_eq!(state.metrics().product.startup_cost, 5_000.0);

        state.set_solo_practice(false);
        prop_assert_eq!(state.inputs().provider_count, providers);
        prop_assert_eq!(state.metrics().product.startup_cost, 25_000.0);
    }

    #[test]
    fn prop_recompute_is_bit_identical(inputs in valid_inputs()) {
        let first = serde_json::to_string(&compute_roi(&inputs)).unwrap();
        let second = serde_json::to_string(&compute_roi(&inputs)).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(compute_roi(&inputs), compute_roi(&inputs));
    }

    #[test]
    fn prop_payback_defined_iff_benefit_positive(inputs in valid_inputs()) {
        // An expensive product on a cheap stack can lose money overall.
        let m = compute_roi(&inputs);
        prop_assert_eq!(m.pays_back(), m.roi.monthly_benefit > 0.0);
        if let Some(months) = m.roi.payback_months {
            prop_assert!(months.is_finite() && months > 0.0);
        }
    }
}
