use anyhow::{bail, Result};

use super::{resolve_inputs, with_output_writer};
use crate::cli::{OutputArgs, ScenarioArgs};
use crate::sweep::{sweep, SweepInput};

pub fn handle_sweep(
    input: SweepInput,
    steps: Option<usize>,
    scenario: &ScenarioArgs,
    output: &OutputArgs,
) -> Result<()> {
    if steps == Some(0) {
        bail!("--steps must be at least 1");
    }

    let base = resolve_inputs(scenario)?;
    if input == SweepInput::Providers && base.solo_practice {
        tracing::warn!("solo practice pins providers to 1; every point is identical");
    }

    let report = sweep(&base, input, steps);
    with_output_writer(output, |writer| writer.write_sweep(&report))
}
