//! `qjson` CLI — read and write values inside JSON documents by path.
//!
//! ## Usage
//!
//! ```sh
//! # Print the value at a path (stdin → stdout)
//! echo '{"menu":{"id":"file"}}' | qjson get menu.id
//!
//! # Read from a file, index into lists with brackets
//! qjson get 'menu.popup.menuitem[0].value' -i menu.json
//!
//! # Write a value, creating missing structure, and save the result
//! qjson set 'menu.popup.menuitem[3].value' '"Save"' -i menu.json -o menu.json
//!
//! # Start from an empty document
//! qjson set 'tags[2]' 'three' < /dev/null
//!
//! # Build the sample menu document from scratch
//! qjson demo
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v` / `-vv`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qjson_core::{path, query, update, Path, Value};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qjson",
    version,
    about = "Query and update JSON documents by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value found at PATH
    Get {
        /// Path such as `menu.popup.menuitem[0].value` (empty for the root)
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Write VALUE at PATH and print the updated document
    Set {
        /// Path such as `menu.popup.menuitem[0].value` (empty for the root)
        path: String,
        /// JSON value to store; text that is not valid JSON is stored as a string
        value: String,
        /// Input file (reads from stdin if omitted; empty input starts a new document)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print the replaced value to stderr
        #[arg(long)]
        previous: bool,
    },
    /// Build the sample menu document from scratch and print it
    Demo {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Get { path, input } => {
            let path = parse_path(&path)?;
            let doc = read_document(input.as_deref())?
                .context("No input document: the input is empty")?;
            let found = query(&doc, &path).with_context(|| format!("Failed to query `{path}`"))?;
            let rendered = render(found, cli.compact)?;
            write_output(None, &rendered)?;
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            previous,
        } => {
            let path = parse_path(&path)?;
            let mut doc = read_document(input.as_deref())?;
            let terminal = parse_value(&value);
            let replaced = update(&mut doc, &path, terminal)
                .with_context(|| format!("Failed to update `{path}`"))?;
            info!(%path, replaced = replaced.is_some(), "updated document");

            if previous {
                match &replaced {
                    Some(old) => eprint!("{}", render(old, true)?),
                    None => eprintln!("(none)"),
                }
            }
            let rendered = render(&doc.unwrap_or_default(), cli.compact)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Demo { output } => {
            let doc = build_menu().context("Failed to build the sample menu document")?;
            let rendered = render(&doc, cli.compact)?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. An explicit `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_path(raw: &str) -> Result<Path> {
    Path::parse(raw).with_context(|| format!("Invalid path: {raw:?}"))
}

/// Interpret a command-line value: JSON when it parses, a plain string otherwise.
fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => {
            debug!(raw, "value is not JSON, storing as string");
            Value::String(raw.to_string())
        }
    }
}

/// The menu sample: every node below the root is created by `update`.
fn build_menu() -> qjson_core::Result<Value> {
    let items = [
        ("New", "CreateNewDoc()"),
        ("Open", "OpenDoc()"),
        ("Close", "CloseDoc()"),
    ];

    let mut doc = None;
    update(&mut doc, &path!["menu", "id"], Value::from("file"))?;
    update(&mut doc, &path!["menu", "value"], Value::from("File"))?;
    for (i, (value, onclick)) in items.into_iter().enumerate() {
        let item = path!["menu", "popup", "menuitem", i];
        update(&mut doc, &item.clone().key("value"), Value::from(value))?;
        update(&mut doc, &item.key("onclick"), Value::from(onclick))?;
    }
    Ok(doc.unwrap_or_default())
}

/// Read and decode the input document. Blank input yields `None`.
fn read_document(path: Option<&str>) -> Result<Option<Value>> {
    let text = read_input(path)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    let doc = serde_json::from_str(&text).context("Failed to parse input as JSON")?;
    Ok(Some(doc))
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let mut text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    text.push('\n');
    Ok(text)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
