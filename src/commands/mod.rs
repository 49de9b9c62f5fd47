//! Command handlers behind the CLI subcommands.
//!
//! Side effects (file discovery, stdout, output files) live here; everything
//! they call into is pure.

pub mod calculate;
pub mod init;
pub mod sweep;
pub mod validate;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::cli::{OutputArgs, ScenarioArgs};
use crate::config::validation::format_validation_errors;
use crate::config::{load_config, validate_config_result, ConfigSource, RoiConfig};
use crate::core::RoiInputs;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::output::{create_writer, OutputWriter};

/// Load the scenario, apply command-line overrides, and validate.
pub fn resolve_scenario(args: &ScenarioArgs) -> Result<(RoiConfig, ConfigSource)> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(args.config.as_deref(), &cwd).map_err(|e| {
        let hint = if e.is_user_fixable() {
            "Scenario file needs fixing"
        } else {
            "Could not read scenario"
        };
        anyhow::Error::new(e).context(hint)
    })?;
    tracing::info!(source = %loaded.source, "scenario loaded");

    let overrides = args.overrides();
    if !overrides.is_empty() {
        tracing::debug!(?overrides, "applying command-line overrides");
    }
    Ok((loaded.config.with_overrides(&overrides), loaded.source))
}

pub fn resolve_inputs(args: &ScenarioArgs) -> Result<RoiInputs> {
    let (config, source) = resolve_scenario(args)?;
    validate_config_result(&config).map_err(|errors| {
        anyhow::anyhow!(
            "{}(scenario: {})",
            format_validation_errors(&errors),
            source
        )
    })
}

/// `--plain` wins, then an explicit `--color`, then the environment.
pub fn formatting_config(plain: bool, color: Option<ColorMode>) -> FormattingConfig {
    match (plain, color) {
        (true, _) => FormattingConfig::plain(),
        (false, Some(mode)) => FormattingConfig::new(mode),
        (false, None) => FormattingConfig::from_env(),
    }
}

/// Run `render` against stdout or the requested file.
pub fn with_output_writer(
    args: &OutputArgs,
    render: impl FnOnce(&mut dyn OutputWriter) -> crate::errors::Result<()>,
) -> Result<()> {
    // Files never get color codes.
    let formatting = if args.output.is_some() {
        FormattingConfig::plain()
    } else {
        formatting_config(args.plain, args.color)
    };

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(open_output(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = create_writer(args.format, sink, formatting);
    render(writer.as_mut()).context("Failed to write report")?;
    writer.flush().context("Failed to write report")?;
    Ok(())
}

fn open_output(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create output file {}", path.display()))
}
