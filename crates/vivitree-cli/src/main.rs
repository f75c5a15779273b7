//! `vtree` CLI — inspect and edit auto-vivifying JSON trees.
//!
//! Paths are dot-separated child names (`server.tls.cert`).
//!
//! ## Usage
//!
//! ```sh
//! # Re-emit a document in canonical form (stdin → stdout)
//! echo '{"a":{"x":1,"__data":5}}' | vtree normalize
//!
//! # Pretty-print from file to file
//! vtree normalize --pretty -i config.json -o config.out.json
//!
//! # Read a value without creating anything
//! vtree get server.port -i config.json
//!
//! # Set a value, creating every missing node on the way
//! vtree set server.tls.enabled true -i config.json -o config.json
//!
//! # Drop a subtree
//! vtree remove server.legacy -i config.json
//!
//! # Outline of names and values
//! vtree list -i config.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;
use tracing::Level;
use vivitree_core::encoder::encode_json;
use vivitree_core::{fsio, Converter, JsonFormat, TreeNode, Value};

#[derive(Parser)]
#[command(
    name = "vtree",
    version,
    about = "Inspect and edit auto-vivifying JSON trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log converter activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Document format
    #[arg(long, global = true, default_value = JsonFormat::ID)]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a document and export it again in canonical form
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the value at a path without creating nodes
    Get {
        /// Dot-separated path
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Set the value at a path, creating missing nodes
    Set {
        /// Dot-separated path
        path: String,
        /// New value, parsed as JSON or taken as a plain string
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Remove the subtree at a path
    Remove {
        /// Dot-separated path
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print an indented outline of names and values
    List {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = cli.format.as_str();

    match cli.command {
        Commands::Normalize {
            input,
            output,
            pretty,
        } => {
            let mut converter = converter(pretty);
            let tree = load_tree(&mut converter, input.as_deref(), format)?;
            let text = converter
                .export(&tree, format)
                .context("Failed to export tree")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Get { path, input } => {
            let mut converter = converter(false);
            let tree = load_tree(&mut converter, input.as_deref(), format)?;
            let steps = parse_path(&path)?;
            let node = tree
                .get_path(&steps)
                .with_context(|| format!("No node at path: {}", path))?;
            let shown = match node.value() {
                Some(value) => value.clone(),
                None if node.has_children() => node.to_structure(),
                None => anyhow::bail!("Node has no value: {}", path),
            };
            println!("{}", encode_json(&shown, false)?);
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            pretty,
        } => {
            let mut converter = converter(pretty);
            let mut tree = load_tree(&mut converter, input.as_deref(), format)?;
            let steps = parse_path(&path)?;
            tree.access_path(&steps).set_value(parse_value(&value));
            let text = converter
                .export(&tree, format)
                .context("Failed to export tree")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Remove {
            path,
            input,
            output,
            pretty,
        } => {
            let mut converter = converter(pretty);
            let mut tree = load_tree(&mut converter, input.as_deref(), format)?;
            let steps = parse_path(&path)?;
            let (name, parent) = steps.split_last().context("Path must not be empty")?;
            let removed = tree
                .get_path(parent)
                .is_some_and(|node| node.exists(name));
            if removed {
                tree.access_path(parent).remove(name);
            } else {
                tracing::warn!(path = %path, "nothing to remove");
            }
            let text = converter
                .export(&tree, format)
                .context("Failed to export tree")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::List { input } => {
            let mut converter = converter(false);
            let tree = load_tree(&mut converter, input.as_deref(), format)?;
            let mut out = String::new();
            outline(&tree, 0, &mut out)?;
            print!("{}", out);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn converter(pretty: bool) -> Converter {
    let mut converter = Converter::new();
    if pretty {
        converter.register(JsonFormat::pretty());
    }
    converter
}

/// Import the input into a fresh tree. Blank input gives an empty tree so
/// `set` can start a document from nothing.
fn load_tree(converter: &mut Converter, input: Option<&str>, format: &str) -> Result<TreeNode> {
    let content = read_input(input)?;
    let mut tree = TreeNode::new();
    if content.trim().is_empty() {
        return Ok(tree);
    }
    converter
        .import(&content, &mut tree, format)
        .context("Failed to import document")?;
    Ok(tree)
}

/// Split a dot-separated path. Empty segments are rejected.
fn parse_path(path: &str) -> Result<Vec<&str>> {
    let steps: Vec<&str> = path.split('.').collect();
    if steps.iter().any(|step| step.is_empty()) {
        anyhow::bail!("Invalid path: '{}' (empty segment)", path);
    }
    Ok(steps)
}

/// JSON when it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::String(raw.to_string()),
    }
}

fn outline(node: &TreeNode, depth: usize, out: &mut String) -> Result<()> {
    for (name, child) in node.iter() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(name);
        if let Some(value) = child.value() {
            out.push_str(" = ");
            out.push_str(&encode_json(value, false)?);
        }
        out.push('\n');
        outline(child, depth + 1, out)?;
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    fsio::read_source(path.map(Path::new)).with_context(|| match path {
        Some(path) => format!("Failed to read file: {}", path),
        None => "Failed to read from stdin".to_string(),
    })
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    fsio::write_sink(path.map(Path::new), content).with_context(|| match path {
        Some(path) => format!("Failed to write file: {}", path),
        None => "Failed to write to stdout".to_string(),
    })
}
