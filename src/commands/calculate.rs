use anyhow::Result;

use super::{resolve_inputs, with_output_writer};
use crate::cli::{OutputArgs, ScenarioArgs};
use crate::output::RoiReport;

pub fn handle_calculate(scenario: &ScenarioArgs, output: &OutputArgs) -> Result<()> {
    let inputs = resolve_inputs(scenario)?;
    let report = RoiReport::new(inputs);

    tracing::info!(
        roi_vs_current = report.metrics.roi.roi_vs_current_percent,
        payback_months = ?report.metrics.roi.payback_months,
        "calculated"
    );
    if report.metrics.roi.payback_months.is_none() {
        tracing::warn!("monthly benefit is not positive; startup cost is never recovered");
    }

    with_output_writer(output, |writer| writer.write_report(&report))
}
