//! CLI entry point: pick a text, flatten it, hand it to the terminal
//! frontend, and turn the verdict into an exit status.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lavarun::frontend::{term::TermFrontend, Frontend};
use lavarun::params;

/// Outrun the lava by typing fast.
#[derive(Debug, Parser)]
#[command(name = "lavarun", version, about)]
struct Args {
    /// Path to a text file to play; the built-in text if omitted.
    #[arg(long = "text", value_name = "PATH")]
    path: Option<PathBuf>,
}

/// Collapse a text into the single line the game runs along: every line
/// trimmed, lines joined with single spaces.
fn flatten(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

fn load_text(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => Ok(params::DEFAULT_TEXT.to_string()),
    }
}

fn main() -> ExitCode {
    // quiet unless LAVARUN_LOG is set; logs go to stderr, so redirect it
    // somewhere the game isn't drawing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("LAVARUN_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = match load_text(args.path.as_ref()) {
        Ok(text) => flatten(&text),
        Err(err) => {
            eprintln!("cannot open text file: {err}");
            return ExitCode::from(2);
        }
    };

    let mut frontend = TermFrontend;
    match frontend.run(&text) {
        Ok(true) => {
            info!("player won");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            info!("player lost");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("game aborted: {err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::flatten;

    #[test]
    fn flatten_joins_trimmed_lines() {
        assert_eq!(
            flatten("  one line\nanother line  \n\tthird"),
            "one line another line third"
        );
    }

    #[test]
    fn flatten_keeps_single_lines_alone() {
        assert_eq!(flatten("already flat"), "already flat");
    }
}
