//! `swept`: evaluates curves and builds swept surfaces from the command line.

mod cli;
mod commands;
mod input;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cli::parse(args).and_then(commands::run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("swept error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
