use anyhow::{Context, Result};
use log::{debug, info, LevelFilter};

use simulation_common::{CommandLineOverride, SimulationConfig, DIRECTIVE_FILE};

fn main() -> Result<()> {
    // -debug has to be known before the logger starts; the -f override is applied later,
    // after the directive file, so the command line still wins.
    let overrides = CommandLineOverride::from_args(std::env::args_os());
    init_logger(overrides.debug);

    info!("Starting MD setup...");
    debug!("Command line overrides: {:?}", overrides);

    let config = SimulationConfig::initialize(DIRECTIVE_FILE, &overrides)
        .context("Setup failed")?;

    info!(
        "Loaded {} atoms from {} (cubic box length {:.6}).",
        config.atom_count,
        config.coordinate_file.display(),
        config.box_length
    );
    Ok(())
}

/// Logs to stdout at `info` by default. `RUST_LOG` still applies; `-debug` lowers the
/// default level to `debug`.
fn init_logger(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Stdout);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
