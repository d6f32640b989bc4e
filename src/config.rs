//! Command-line configuration

use crate::error::AppError;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Input shown when nothing is given on the command line
pub const DEFAULT_INPUT: &str = "{()}[]";

/// Default delay between steps during autoplay
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Interactive terminal visualizer
    #[default]
    Tui,
    /// Print the trace as text and exit
    Plain,
    /// Print the trace as JSON and exit
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bracketty", version, about = "Step-by-step bracket matching visualizer")]
pub struct Cli {
    /// Bracket string to evaluate
    #[arg(conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the bracket string from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputMode::Tui)]
    pub mode: OutputMode,

    /// Milliseconds between steps during autoplay
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: String,
    pub mode: OutputMode,
    pub interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        if cli.interval_ms == 0 {
            return Err(AppError::InvalidInterval);
        }

        let input = match (cli.input, cli.file) {
            (Some(input), _) => input,
            (None, Some(path)) => {
                let contents = fs::read_to_string(&path)
                    .map_err(|source| AppError::ReadInput { path, source })?;
                contents.trim_end_matches(&['\r', '\n'][..]).to_string()
            }
            (None, None) => DEFAULT_INPUT.to_string(),
        };

        Ok(Config {
            input,
            mode: cli.mode,
            interval: Duration::from_millis(cli.interval_ms),
            log_file: cli.log_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: DEFAULT_INPUT.to_string(),
            mode: OutputMode::Tui,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, AppError> {
        let cli = Cli::try_parse_from(std::iter::once("bracketty").chain(args.iter().copied()))
            .expect("arguments should parse");
        Config::from_cli(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_positional_input_and_mode() {
        let config = parse(&["(]", "--mode", "json", "--interval-ms", "250"]).unwrap();
        assert_eq!(config.input, "(]");
        assert_eq!(config.mode, OutputMode::Json);
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            parse(&["--interval-ms", "0"]),
            Err(AppError::InvalidInterval)
        ));
    }

    #[test]
    fn test_input_conflicts_with_file() {
        let result = Cli::try_parse_from(["bracketty", "()", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    fn write_input_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bracketty-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("temp file should be writable");
        path
    }

    #[test]
    fn test_file_input_trims_trailing_newlines() {
        let crlf = write_input_file("crlf.txt", "(]\r\n");
        let config = parse(&["--file", crlf.to_str().unwrap()]).unwrap();
        assert_eq!(config.input, "(]");

        let blank_lines = write_input_file("lf.txt", "()\n\n");
        let config = parse(&["--file", blank_lines.to_str().unwrap()]).unwrap();
        assert_eq!(config.input, "()");

        let _ = fs::remove_file(crlf);
        let _ = fs::remove_file(blank_lines);
    }

    #[test]
    fn test_file_input_keeps_inner_whitespace() {
        let path = write_input_file("inner.txt", " ( a ) \n");
        let config = parse(&["-f", path.to_str().unwrap()]).unwrap();
        assert_eq!(config.input, " ( a ) ");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse(&["--file", "/nonexistent/bracketty-input.txt"]).unwrap_err();
        assert!(err.to_string().contains("bracketty-input.txt"));
    }
}
