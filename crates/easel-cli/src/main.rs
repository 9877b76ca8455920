//! Easel CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use easel_cli::{Args, error_adapter::render_report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);

    info!(showcase:? = args.showcase; "Starting Easel");
    debug!(args:?; "Parsed arguments");

    match easel_cli::run(&args) {
        Ok(()) => info!(output = args.output; "Completed successfully"),
        Err(err) => {
            error!("{}", render_report(&err));
            process::exit(1);
        }
    }
}

/// Starts `env_logger` at `level`; unknown level names log warnings only.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', logging warnings only");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .format_target(false)
        .init();
}
