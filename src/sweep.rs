//! Sensitivity sweeps: drag one slider end to end, recomputing at each stop.

use clap::ValueEnum;
use serde::Serialize;

use crate::core::{RoiInputs, RoiMetrics};
use crate::engine::compute_roi;
use crate::formatting::{format_currency, format_number};
use crate::state::{ControlRange, ANNUAL_REVENUE, DENIAL_RATE, DOC_HOURS, PRODUCT_PRICE, PROVIDERS};

/// Inputs that have a slider and can therefore be swept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SweepInput {
    /// Provider count, 1-50
    Providers,
    /// Annual revenue per provider, $250K-$2M
    Revenue,
    /// Current denial rate, 5-35%
    DenialRate,
    /// Daily documentation hours per provider, 1-5
    DocHours,
    /// Medipyxis monthly price per provider, $200-$600
    Price,
}

impl SweepInput {
    pub fn range(self) -> ControlRange {
        match self {
            SweepInput::Providers => PROVIDERS,
            SweepInput::Revenue => ANNUAL_REVENUE,
            SweepInput::DenialRate => DENIAL_RATE,
            SweepInput::DocHours => DOC_HOURS,
            SweepInput::Price => PRODUCT_PRICE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SweepInput::Providers => "Providers",
            SweepInput::Revenue => "Annual Revenue / Provider",
            SweepInput::DenialRate => "Current Denial Rate (%)",
            SweepInput::DocHours => "Daily Doc Time / Provider (h)",
            SweepInput::Price => "Medipyxis Price / Provider",
        }
    }

    /// The value of this input in `inputs`.
    pub fn value_in(self, inputs: &RoiInputs) -> f64 {
        match self {
            SweepInput::Providers => inputs.providers(),
            SweepInput::Revenue => inputs.annual_revenue_per_provider,
            SweepInput::DenialRate => inputs.current_denial_rate_percent,
            SweepInput::DocHours => inputs.daily_doc_hours_per_provider,
            SweepInput::Price => inputs.product_monthly_price_per_provider,
        }
    }

    /// Display form of a value of this input.
    pub fn format_value(self, value: f64) -> String {
        match self {
            SweepInput::Revenue | SweepInput::Price => format_currency(value),
            SweepInput::DocHours => format!("{value:.1}"),
            SweepInput::Providers | SweepInput::DenialRate => format_number(value),
        }
    }

    /// Copy of `base` with only this input moved to `value`, snapped to the
    /// slider. A solo practice keeps its single provider.
    fn apply(self, base: &RoiInputs, value: f64) -> RoiInputs {
        let snapped = self.range().apply(value);
        let mut inputs = *base;
        match self {
            SweepInput::Providers if base.solo_practice => {}
            SweepInput::Providers => inputs.provider_count = snapped as u32,
            SweepInput::Revenue => inputs.annual_revenue_per_provider = snapped,
            SweepInput::DenialRate => inputs.current_denial_rate_percent = snapped,
            SweepInput::DocHours => inputs.daily_doc_hours_per_provider = snapped,
            SweepInput::Price => inputs.product_monthly_price_per_provider = snapped,
        }
        inputs
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// The swept input's value actually used for this point.
    pub value: f64,
    pub inputs: RoiInputs,
    pub metrics: RoiMetrics,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepReport {
    pub input: SweepInput,
    pub base: RoiInputs,
    pub points: Vec<SweepPoint>,
}

/// Requested stops: every slider step, or `steps` evenly spaced points
/// between the ends (at least two). Stops are snapped when applied.
pub fn sweep_values(input: SweepInput, steps: Option<usize>) -> Vec<f64> {
    let range = input.range();
    match steps {
        None => range.positions(),
        Some(n) => {
            let n = n.max(2);
            let span = range.max - range.min;
            (0..n)
                .map(|i| range.min + span * i as f64 / (n - 1) as f64)
                .collect()
        }
    }
}

/// Recompute the metrics at each stop, holding every other input exactly as
/// given in `base`.
///
/// Stops that snap to the same slider position are reported once.
pub fn sweep(base: &RoiInputs, input: SweepInput, steps: Option<usize>) -> SweepReport {
    let mut points: Vec<SweepPoint> = Vec::new();
    for requested in sweep_values(input, steps) {
        let inputs = input.apply(base, requested);
        let value = input.value_in(&inputs);
        if points.last().is_some_and(|p| p.value == value) {
            continue;
        }
        points.push(SweepPoint {
            value,
            inputs,
            metrics: compute_roi(&inputs),
        });
    }

    tracing::debug!(?input, points = points.len(), "sweep complete");
    SweepReport {
        input,
        base: *base,
        points,
    }
}
