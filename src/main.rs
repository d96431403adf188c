//! pagesim command line front end.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use pagesim::common::config::DEFAULT_FRAMES;
use pagesim::input::{parse_capacity, parse_references, read_references};
use pagesim::report::ComparisonReport;
use pagesim::{simulate_and_compare, Error, FrameCapacity, Policy};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Compare FIFO, LRU and Optimal page replacement",
    long_about = None,
)]
struct Cli {
    /// Page references, separated by spaces or commas (e.g. "7 0 1 2 0 3").
    #[arg(short, long, conflicts_with = "pages_file")]
    pages: Option<String>,

    /// File containing the page references.
    #[arg(long, conflicts_with = "pages")]
    pages_file: Option<PathBuf>,

    /// Number of memory frames [default: 3].
    #[arg(short, long, value_parser = parse_capacity)]
    frames: Option<FrameCapacity>,

    /// Only print the table for this policy (fifo, lru, optimal).
    #[arg(long)]
    policy: Option<Policy>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log more (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Simulate and render the output the CLI prints.
fn run(cli: &Cli) -> Result<String> {
    let references = match (&cli.pages, &cli.pages_file) {
        (Some(text), _) => parse_references(text)?,
        (None, Some(path)) => read_references(path)
            .with_context(|| format!("failed to load references from {}", path.display()))?,
        (None, None) => return Err(Error::EmptyInput.into()),
    };
    let capacity = match cli.frames {
        Some(capacity) => capacity,
        None => FrameCapacity::new(DEFAULT_FRAMES)?,
    };
    info!("{} references, {}", references.len(), capacity);

    let result = simulate_and_compare(&references, capacity.get())?;

    let output = match cli.format {
        Format::Text => ComparisonReport::new(&result).only(cli.policy).to_string(),
        Format::Json => format!("{}\n", serde_json::to_string_pretty(&result)?),
    };
    Ok(output)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pagesim").chain(args.iter().copied())).unwrap()
    }

    // ========================================================================
    // Argument parsing
    // ========================================================================

    #[test]
    fn test_pages_and_pages_file_conflict() {
        let result = Cli::try_parse_from(["pagesim", "--pages", "1 2", "--pages-file", "refs.txt"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_frames_parsed_through_capacity() {
        assert_eq!(cli(&["-f", "4"]).frames.map(|c| c.get()), Some(4));
        assert!(cli(&[]).frames.is_none());

        assert!(Cli::try_parse_from(["pagesim", "--frames", "0"]).is_err());
        assert!(Cli::try_parse_from(["pagesim", "--frames", "abc"]).is_err());
    }

    #[test]
    fn test_policy_and_format_parsing() {
        let parsed = cli(&["--policy", "lru", "--format", "json"]);
        assert_eq!(parsed.policy, Some(Policy::Lru));
        assert_eq!(parsed.format, Format::Json);

        assert_eq!(cli(&[]).policy, None);
        assert_eq!(cli(&[]).format, Format::Text);
        assert!(Cli::try_parse_from(["pagesim", "--policy", "clock"]).is_err());
    }

    // ========================================================================
    // run
    // ========================================================================

    #[test]
    fn test_run_without_references() {
        let err = run(&cli(&["-f", "3"])).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::EmptyInput)));
    }

    #[test]
    fn test_run_uses_default_frames() {
        let output = run(&cli(&["-p", "1 2 3 4"])).unwrap();
        assert!(output.contains(&format!("Frames: {}", DEFAULT_FRAMES)));
    }

    #[test]
    fn test_run_policy_filters_tables_only() {
        let output = run(&cli(&["-p", "1 2 1 3", "-f", "2", "--policy", "optimal"])).unwrap();

        assert!(output.contains("Optimal (2 frames)"));
        assert!(!output.contains("FIFO (2 frames)"));
        assert!(!output.contains("LRU (2 frames)"));
        assert!(output.contains("  FIFO"));
        assert!(output.contains("  LRU"));
    }

    #[test]
    fn test_run_json_output() {
        let output = run(&cli(&["-p", "1,2,1", "-f", "2", "--format", "json"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["capacity"], 2);
        assert_eq!(json["best"], "FIFO");
    }

    #[test]
    fn test_run_bad_reference() {
        let err = run(&cli(&["-p", "1 x"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidReference { position: 2, .. })
        ));
    }
}
