//! Command-line surface of the `textbook-sorts` binary.
//!
//! Parsing lives here rather than in `main.rs` so the commands can be driven
//! from tests; `run` returns what the binary prints.

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::input::parse_sequence;
use crate::sample::Script;

#[derive(Parser, Debug)]
#[command(name = "textbook-sorts", version, about = "Textbook merge sort and bubble sort")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge sort the sample (or given) list and print it
    MergeSort(RunArgs),
    /// Bubble sort the sample (or given) list and print it
    BubbleSort(RunArgs),
    /// Run both sample scripts, merge sort first
    All {
        /// Print time and space complexity after each result
        #[arg(long)]
        analyze: bool,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Integers to sort instead of the sample, e.g. "5,2,8" or "[5, 2, 8]"
    #[arg(long)]
    pub input: Option<String>,

    /// Print time and space complexity after the result
    #[arg(long)]
    pub analyze: bool,
}

/// Runs one script and returns its output lines.
pub fn run_script(script: Script, input: Option<&str>, analyze: bool) -> Result<Vec<String>> {
    let data = match input {
        Some(text) => parse_sequence(text)?,
        None => script.sample_input(),
    };
    let mut lines = vec![script.run(data)];
    if analyze {
        lines.push(script.complexity().report());
    }
    Ok(lines)
}

pub fn run(cli: Cli) -> Result<Vec<String>> {
    match cli.command {
        Command::MergeSort(args) => run_script(Script::MergeSort, args.input.as_deref(), args.analyze),
        Command::BubbleSort(args) => run_script(Script::BubbleSort, args.input.as_deref(), args.analyze),
        Command::All { analyze } => {
            let mut lines = Vec::new();
            for script in Script::ALL {
                lines.extend(run_script(script, None, analyze)?);
            }
            Ok(lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let argv = std::iter::once("textbook-sorts").chain(args.iter().copied());
        run(Cli::try_parse_from(argv).expect("arguments should parse"))
    }

    #[test]
    fn sample_commands() {
        assert_eq!(run_args(&["merge-sort"]).unwrap(), vec!["[1, 2, 3, 4, 5, 6, 8]"]);
        assert_eq!(
            run_args(&["bubble-sort"]).unwrap(),
            vec!["Sorted array: [11, 12, 22, 25, 34, 64, 90]"]
        );
    }

    #[test]
    fn all_runs_merge_then_bubble() {
        let lines = run_args(&["all", "--analyze"]).unwrap();
        assert_eq!(
            lines,
            vec![
                "[1, 2, 3, 4, 5, 6, 8]",
                "Time: O(n log n)\nSpace: O(n)",
                "Sorted array: [11, 12, 22, 25, 34, 64, 90]",
                "Time: O(n^2)\nSpace: O(1)",
            ]
        );
    }

    #[test]
    fn custom_input() {
        assert_eq!(
            run_args(&["bubble-sort", "--input", "[3, 3, 1, 2, 3]"]).unwrap(),
            vec!["Sorted array: [1, 2, 3, 3, 3]"]
        );
    }

    #[test]
    fn malformed_input_is_an_error() {
        match run_args(&["merge-sort", "--input", "[1, x]"]) {
            Err(SortError::InvalidElement { position, token }) => {
                assert_eq!(position, 1);
                assert_eq!(token, "x");
            }
            other => panic!("expected InvalidElement, got {:?}", other),
        }
        assert!(matches!(
            run_args(&["bubble-sort", "--input", "[1, 2"]),
            Err(SortError::UnbalancedBrackets(_))
        ));
    }
}
