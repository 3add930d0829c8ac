use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::CodecLimits;
use deckcode_tools::{decode_code, format_deck_pretty, format_inspect_report, inspect_code};

#[derive(Parser)]
#[command(
    name = "deckcode-tools",
    version,
    about = "deck code inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode deck codes into structured output.
    Decode {
        /// Deck codes to decode.
        codes: Vec<String>,
        /// File with one deck code per line.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Disable hero, card and code length limits.
        #[arg(long)]
        unlimited: bool,
    },
    /// Inspect header fields and region sizes of a deck code.
    Inspect {
        /// Deck code to inspect.
        code: String,
        /// Disable hero, card and code length limits.
        #[arg(long)]
        unlimited: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Decode {
            codes,
            input,
            format,
            unlimited,
        } => {
            let mut codes = codes;
            if let Some(path) = &input {
                codes.extend(read_codes(path)?);
            }
            if codes.is_empty() {
                bail!("no deck codes given");
            }
            let (wire_limits, limits) = select_limits(unlimited);

            let mut failed = 0usize;
            for code in &codes {
                let output = decode_code(code, &wire_limits, &limits);
                if !output.is_ok() {
                    failed += 1;
                }
                match format {
                    DecodeFormat::Json => {
                        let json =
                            serde_json::to_string_pretty(&output).context("serialize json")?;
                        println!("{json}");
                    }
                    DecodeFormat::Pretty => match (&output.deck, &output.error) {
                        (Some(deck), _) => println!("{}", format_deck_pretty(deck)),
                        (None, Some(error)) => {
                            println!("{code}: {} ({})", error.message, error.kind);
                        }
                        (None, None) => {}
                    },
                }
            }
            if failed > 0 {
                tracing::warn!(failed, total = codes.len(), "some deck codes failed");
                bail!("{failed} of {} deck codes failed to decode", codes.len());
            }
        }
        Command::Inspect { code, unlimited } => {
            let (wire_limits, limits) = select_limits(unlimited);
            let report = inspect_code(code.trim(), &wire_limits, &limits)?;
            print!("{}", format_inspect_report(&report));
        }
    }
    Ok(())
}

fn select_limits(unlimited: bool) -> (wire::Limits, CodecLimits) {
    if unlimited {
        (wire::Limits::unlimited(), CodecLimits::unlimited())
    } else {
        (wire::Limits::default(), CodecLimits::default())
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_codes(path: &PathBuf) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read codes {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_accepts_unlimited() {
        let args = ["deckcode-tools", "inspect", "--unlimited", "ADCIAEAAQ__"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Inspect { code, unlimited } => {
                assert_eq!(code, "ADCIAEAAQ__");
                assert!(unlimited);
            }
            Command::Decode { .. } => panic!("expected inspect"),
        }
    }

    #[test]
    fn select_limits_follows_flag() {
        assert_eq!(select_limits(true), (wire::Limits::unlimited(), CodecLimits::unlimited()));
        assert_eq!(select_limits(false), (wire::Limits::default(), CodecLimits::default()));
    }
}
