//! Entry point for the `data-veda` binary.
#![forbid(unsafe_code)]

use env_logger::Env;
use veda_cli::CliError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = veda_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("data-veda: {err}");
        std::process::exit(1);
    }
}
