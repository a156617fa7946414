//! `sift` CLI — run a filter expression over JSON from a file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Pick a field out of piped JSON
//! echo '{"user":{"name":"Ada"}}' | sift '.user.name'
//!
//! # Read the input from a file
//! sift '.items[0]' data.json
//!
//! # Slices, arithmetic, pipes, construction
//! echo '{"xs":[1,2,3,4]}' | sift '{head: .xs[:2], n: .xs | length}'
//!
//! # Single-line output
//! sift -c '.xs[1:]' data.json
//!
//! # Show the parsed filter instead of evaluating
//! sift --ast '.a[0].b | length'
//! ```
//!
//! Output is pretty-printed JSON by default. Errors (bad filter, bad JSON,
//! evaluation failures) go to stderr and exit non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use sift_core::{json, printer, Filter};
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "sift", version, about = "jq-style JSON query tool")]
struct Cli {
    /// Filter expression, e.g. '.items[0].name'
    filter: String,

    /// Input file (reads from stdin if omitted)
    file: Option<String>,

    /// Output on a single line instead of pretty-printing
    #[arg(short, long)]
    compact: bool,

    /// Print the parsed filter's canonical form and exit without reading input
    #[arg(long)]
    ast: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = Filter::compile(&cli.filter)
        .with_context(|| format!("invalid filter '{}'", cli.filter))?;

    if cli.ast {
        println!("{filter}");
        return Ok(());
    }

    let input = read_input(cli.file.as_deref())?;
    let value = json::from_str(&input).context("failed to parse input JSON")?;
    let result = filter
        .evaluate(&value)
        .with_context(|| format!("filter '{}' failed", cli.filter))?;

    if cli.compact {
        println!("{}", printer::compact(&result));
    } else {
        println!("{}", printer::pretty(&result));
    }
    Ok(())
}

/// Read the whole input: from the named file, or stdin when no file is given.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
