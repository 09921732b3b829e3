//! Runs the merge sort and bubble sort sample scripts.

use std::process::ExitCode;

use clap::Parser;
use textbook_sorts::cli::{run, Cli};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the script output
    textbook_sorts::init_tracing("warn");

    match run(Cli::parse()) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
