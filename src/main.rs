//! config-shard-validator - config-updater sharding checks
//!
//! Verifies that every CI operator configuration and Prow job configuration
//! in a release repository is picked up by exactly one auto-updating config
//! map, the one its file name says it belongs to, and that jobs injecting a
//! CI operator config through `CONFIG_SPEC` read it from that same map.

use clap::Parser;

mod check;
mod cli;
mod commands;
mod config;
mod error;
mod glob;
mod inventory;
mod layout;
mod logging;
mod naming;
mod path_utils;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let options = match cli.validate() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: Invalid options: {e}");
            std::process::exit(1);
        }
    };

    logging::init(options.log_level);

    if let Err(e) = commands::validate::run(&options) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
