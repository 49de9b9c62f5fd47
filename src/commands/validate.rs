use anyhow::{bail, Result};

use super::resolve_scenario;
use crate::cli::ScenarioArgs;
use crate::config::validation::format_validation_errors;
use crate::config::validate_config_result;
use crate::output::practice_line;

/// Print every problem in the scenario; fail when there is at least one.
pub fn handle_validate(scenario: &ScenarioArgs) -> Result<()> {
    let (config, source) = resolve_scenario(scenario)?;

    match validate_config_result(&config) {
        Ok(inputs) => {
            println!("Scenario OK: {source}");
            println!("  {}", practice_line(&inputs));
            Ok(())
        }
        Err(errors) => {
            eprint!("{}", format_validation_errors(&errors));
            bail!("{} validation error(s) in {}", errors.len(), source)
        }
    }
}
