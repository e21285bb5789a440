//! Curio listing extraction CLI.
//!
//! Extracts structured field suggestions from a listing description and
//! prints them as JSON.
//!
//! Usage:
//!   cargo run --bin curio-suggest -- --text "walnut coffee table, circa 1958"
//!   cargo run --bin curio-suggest -- --local < listing.txt

use std::env;
use std::io::Read;

use curio_assist::{ExtractionEngine, ExtractionMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default)]
struct Args {
    text: Option<String>,
    local: bool,
    prefill_description: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--text" | "-t" => {
                i += 1;
                if i < args.len() {
                    result.text = Some(args[i].clone());
                }
            }
            "--local" | "-l" => {
                result.local = true;
            }
            "--prefill-description" | "-p" => {
                result.prefill_description = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                if result.text.is_none() && !other.starts_with('-') {
                    result.text = Some(other.to_string());
                }
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!(
        r#"
Curio Listing Extraction

Usage: cargo run --bin curio-suggest -- [OPTIONS] [TEXT]

Reads a listing description from --text, a positional argument, or
stdin, and prints field suggestions as JSON.

Options:
  -t, --text <TEXT>           Listing text to analyze
  -l, --local                 Deterministic extraction only, no model calls
  -p, --prefill-description   Copy the listing text into the description
                              suggestion when none was produced
  -h, --help                  Print help

Environment Variables:
  ANTHROPIC_API_KEY          API credential; when unset, extraction runs locally
  CURIO_ASSIST_URL           API base URL (default: https://api.anthropic.com)
  CURIO_ASSIST_MODEL         Generation model (default: claude-sonnet-4-20250514)
  CURIO_ASSIST_MAX_TOKENS    Response token ceiling (default: 2000)
  CURIO_ASSIST_TIMEOUT_SECS  Request timeout (default: 60)

Examples:
  cargo run --bin curio-suggest -- --text "walnut coffee table, circa 1958"
  cargo run --bin curio-suggest -- --local < listing.txt
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "curio_assist=warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let text = text.trim();

    if text.is_empty() {
        eprintln!("No listing text given. See --help.");
        std::process::exit(1);
    }

    let mode = if args.local {
        ExtractionMode::Local
    } else {
        ExtractionMode::External
    };

    let engine = ExtractionEngine::from_env();
    let result = engine.extract(text, args.prefill_description, mode).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
