use anyhow::Result;
use medipyxis_roi::cli::{parse_args, Commands};
use medipyxis_roi::commands;
use medipyxis_roi::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = parse_args();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Calculate { scenario, output } => {
            commands::calculate::handle_calculate(&scenario, &output)
        }
        Commands::Sweep {
            input,
            steps,
            scenario,
            output,
        } => commands::sweep::handle_sweep(input, steps, &scenario, &output),
        Commands::Validate { scenario } => commands::validate::handle_validate(&scenario),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
