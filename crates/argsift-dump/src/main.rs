use anyhow::{Context, Result};
use argsift::{Argv, Parsed};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "argsift-dump")]
#[command(
    version,
    about = "Show how a list of arguments is classified",
    long_about = "Show how a list of arguments is classified.\n\n\
                  Everything after `--` is classified, e.g.\n  \
                  argsift-dump --format json -- -vo out.txt input.txt"
)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Arguments to classify
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One tab-separated line per entry
    Text,
    /// The classification result as a JSON object
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    tracing::debug!(count = cli.args.len(), "classifying arguments");
    let parsed = Argv::new(cli.args).parse();

    let out = match cli.format {
        Format::Text => render_text(&parsed)?,
        Format::Json => render_json(&parsed, cli.pretty)?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn render_text(parsed: &Parsed) -> Result<String> {
    let mut out = String::new();
    for arg in parsed.positionals() {
        writeln!(out, "pos\t{arg}")?;
    }
    for pair in parsed.options() {
        writeln!(out, "opt\t{}\t{}", pair.name, pair.value)?;
    }
    for arg in parsed.rest() {
        writeln!(out, "rest\t{arg}")?;
    }
    Ok(out)
}

fn render_json(parsed: &Parsed, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(parsed)
    } else {
        serde_json::to_string(parsed)
    }
    .context("failed to serialize classification")?;
    json.push('\n');
    Ok(json)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
