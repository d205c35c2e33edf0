use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod library;
mod run_log;
mod runtime;

#[cfg(test)]
mod test_support;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    let settings = config::Settings::load_or_default();

    match runtime::run(&args, &settings) {
        Ok(summary) => {
            log::info!(
                "copied {}, duplicates {}, failed {}",
                summary.copied,
                summary.duplicates,
                summary.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("FATAL_ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
