//! Mutable calculator state with the behavior of the page's input controls.
//!
//! Every setter clamps into the control's range and snaps to its step, so the
//! [`RoiInputs`] handed to the engine always lie inside the documented domain.
//! The solo-practice toggle pins the provider count to one and remembers the
//! count it replaced.

use crate::core::{RoiInputs, RoiMetrics, ToolCategory};
use crate::engine::compute_roi;
use tracing::{debug, trace};

/// Bounds and granularity of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Snap to the nearest step counted from `min`, then clamp.
    pub fn apply(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Every reachable slider position, low to high.
    pub fn positions(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

pub const PROVIDERS: ControlRange = ControlRange::new(1.0, 50.0, 1.0);
pub const CLINICS: ControlRange = ControlRange::new(1.0, 20.0, 1.0);
pub const PRODUCT_PRICE: ControlRange = ControlRange::new(200.0, 600.0, 25.0);
pub const ANNUAL_REVENUE: ControlRange = ControlRange::new(250_000.0, 2_000_000.0, 50_000.0);
pub const DENIAL_RATE: ControlRange = ControlRange::new(5.0, 35.0, 1.0);
pub const DOC_HOURS: ControlRange = ControlRange::new(1.0, 5.0, 0.5);

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    inputs: RoiInputs,
    /// Provider count in effect before solo mode was switched on.
    providers_before_solo: u32,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        let inputs = RoiInputs::default();
        Self {
            providers_before_solo: inputs.provider_count,
            inputs,
        }
    }

    /// Start from arbitrary inputs, pulling every field through its control.
    pub fn from_inputs(inputs: &RoiInputs) -> Self {
        let mut state = Self::new();
        state.set_provider_count(inputs.provider_count);
        state.set_clinic_count(inputs.clinic_count);
        state.set_annual_revenue_per_provider(inputs.annual_revenue_per_provider);
        state.set_current_denial_rate_percent(inputs.current_denial_rate_percent);
        state.set_daily_doc_hours_per_provider(inputs.daily_doc_hours_per_provider);
        state.set_product_monthly_price_per_provider(inputs.product_monthly_price_per_provider);
        for (category, cost) in inputs.legacy_tool_costs.iter() {
            state.set_legacy_tool_cost(category, cost);
        }
        state.set_solo_practice(inputs.solo_practice);
        state
    }

    pub fn inputs(&self) -> RoiInputs {
        self.inputs
    }

    /// Recompute from scratch; nothing is cached between calls.
    pub fn metrics(&self) -> RoiMetrics {
        compute_roi(&self.inputs)
    }

    pub fn is_solo_practice(&self) -> bool {
        self.inputs.solo_practice
    }

    /// Ignored while solo practice is on; the provider slider is disabled.
    pub fn set_provider_count(&mut self, count: u32) {
        if self.inputs.solo_practice {
            debug!(count, "provider count locked to 1 in solo practice mode");
            return;
        }
        self.inputs.provider_count = PROVIDERS.apply(f64::from(count)) as u32;
        trace!(providers = self.inputs.provider_count, "providers updated");
    }

    pub fn set_clinic_count(&mut self, count: u32) {
        self.inputs.clinic_count = CLINICS.apply(f64::from(count)) as u32;
    }

    pub fn set_solo_practice(&mut self, solo: bool) {
        if solo == self.inputs.solo_practice {
            return;
        }
        if solo {
            self.providers_before_solo = self.inputs.provider_count;
            self.inputs.provider_count = 1;
        } else {
            self.inputs.provider_count = self.providers_before_solo;
        }
        self.inputs.solo_practice = solo;
        debug!(
            solo,
            providers = self.inputs.provider_count,
            "solo practice toggled"
        );
    }

    pub fn toggle_solo_practice(&mut self) {
        self.set_solo_practice(!self.inputs.solo_practice);
    }

    pub fn set_annual_revenue_per_provider(&mut self, revenue: f64) {
        update(&mut self.inputs.annual_revenue_per_provider, revenue, &ANNUAL_REVENUE);
    }

    pub fn set_current_denial_rate_percent(&mut self, rate: f64) {
        update(&mut self.inputs.current_denial_rate_percent, rate, &DENIAL_RATE);
    }

    pub fn set_daily_doc_hours_per_provider(&mut self, hours: f64) {
        update(&mut self.inputs.daily_doc_hours_per_provider, hours, &DOC_HOURS);
    }

    pub fn set_product_monthly_price_per_provider(&mut self, price: f64) {
        update(
            &mut self.inputs.product_monthly_price_per_provider,
            price,
            &PRODUCT_PRICE,
        );
    }

    /// Tool costs are free-form numeric fields; only negatives are clamped.
    pub fn set_legacy_tool_cost(&mut self, category: ToolCategory, cost: f64) {
        if !cost.is_finite() {
            return;
        }
        self.inputs.legacy_tool_costs.set(category, cost.max(0.0));
    }
}

fn update(field: &mut f64, value: f64, range: &ControlRange) {
    if value.is_finite() {
        *field = range.apply(value);
    }
}
