//! Stencil's main application entry point.
//! Parses command-line arguments, resolves the configuration, and runs one
//! generation invocation.

use clap::Parser;
use log::debug;
use stencil::cli::{build_resource, Args};
use stencil::config::{config_as_text, get_config};
use stencil::error::{default_error_handler, Result};
use stencil::logger::init_logger;
use stencil::runner::Runner;

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// One invocation, strictly in order: configuration resolution, resource
/// construction, replacer selection, then the generation commands.
fn run(args: Args) -> Result<()> {
    let config = get_config(&args.config);
    debug!("Resolved configuration:\n{}", config_as_text(&config));

    let resource = build_resource(&args)?;
    let runner = Runner::new(config, resource)?;
    runner.run()
}
