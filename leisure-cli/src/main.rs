//! Entry point for the `leisure` binary.
#![forbid(unsafe_code)]

use env_logger::Env;
use leisure_cli::CliError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    match leisure_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
