#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::IsTerminal;

use jsgen_cli::args::CliArgs;
use jsgen_cli::{driver, reporter::Reporter};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

fn main() {
    // Initialize tracing if JSGEN_LOG or RUST_LOG is set.
    // Supports JSGEN_LOG_FORMAT=tree|json|text.
    jsgen_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();

    if let Err(err) = driver::run(&args) {
        let pretty = args
            .pretty
            .unwrap_or_else(|| std::io::stderr().is_terminal());
        colored::control::set_override(pretty);
        eprint!("{}", Reporter::new(pretty).render(&err));
        std::process::exit(EXIT_FAILURE);
    }

    std::process::exit(EXIT_SUCCESS);
}
