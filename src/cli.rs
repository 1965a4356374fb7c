use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::batch::{run_batch, BatchOptions};
use crate::config::{Config, ConfigError};
use crate::input::{parse_values, InputError};
use crate::output::{render_with_style, RenderStyle};
use crate::tree::{build, Tree};

/// bintree - build and draw binary trees from integer lists
#[derive(Parser)]
#[command(name = "bintree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Connector style, overriding bintree.toml
    #[arg(long, value_enum, global = true)]
    style: Option<RenderStyle>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the tree built from 1..=7
    Demo,

    /// Build a tree from a comma-separated list and describe it
    Show {
        /// Values, e.g. "1,2,3,4,5"
        #[arg(value_name = "VALUES", allow_hyphen_values = true)]
        values: String,
    },

    /// Render every value file under a path into .tree files
    Batch {
        /// Input file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output directory (default: trees/, or [batch] output in bintree.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read lists interactively, one tree per line
    Repl,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        init_logging(self.verbose);

        // only batch needs a readable bintree.toml; the rest fall back to defaults
        let strict = matches!(self.command, Commands::Batch { .. });
        let config = if strict || self.style.is_none() {
            settle_config(Config::discover(), strict)?
        } else {
            Config::default()
        };
        let style = self.style.unwrap_or(config.style);

        match self.command {
            Commands::Demo => {
                println!("{}", describe(&build(1..=7), style));
                Ok(())
            }
            Commands::Show { values } => {
                let values = parse_values(&values)?;
                println!("{}", describe(&build(values), style));
                Ok(())
            }
            Commands::Batch { path, output } => {
                let options = BatchOptions {
                    style,
                    extension: config.extension.clone(),
                    output_dir: output.unwrap_or_else(|| config.output_dir.clone()),
                };
                batch(&path, &options)
            }
            Commands::Repl => repl(style),
        }
    }
}

fn settle_config(
    discovered: Result<Config, ConfigError>,
    strict: bool,
) -> Result<Config, ConfigError> {
    match discovered {
        Ok(config) => {
            match &config.source {
                Some(path) => debug!("Using config at {:?}", path),
                None => debug!("No bintree.toml found, using defaults"),
            }
            Ok(config)
        }
        Err(e) if !strict => {
            warn!("Ignoring bintree.toml: {}", e);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn batch(path: &Path, options: &BatchOptions) -> Result<(), Box<dyn std::error::Error>> {
    info!("Rendering trees from {:?}", path);
    let report = run_batch(path, options)?;

    for output in &report.outputs {
        println!("  -> {:?}", output);
    }
    println!(
        "Generated {} trees in {} files ({} lines skipped, {} files unreadable)",
        report.trees,
        report.outputs.len(),
        report.skipped,
        report.unreadable
    );

    Ok(())
}

fn repl(style: RenderStyle) -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = DefaultEditor::new()?;
    println!("Enter comma-separated integers, or 'quit' to exit");

    loop {
        match editor.readline("bintree> ") {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    debug!("History not updated: {}", e);
                }
                match evaluate_line(&line, style) {
                    LineOutcome::Quit => break,
                    LineOutcome::Described(text) => println!("{text}"),
                    LineOutcome::Invalid(e) => println!("invalid input: {e}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Result of one interactive line
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    Described(String),
    Invalid(InputError),
    Quit,
}

pub fn evaluate_line(line: &str, style: RenderStyle) -> LineOutcome {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return LineOutcome::Quit;
    }

    match parse_values(trimmed) {
        Ok(values) => LineOutcome::Described(describe(&build(values), style)),
        Err(e) => LineOutcome::Invalid(e),
    }
}

/// Rendering followed by preorder, depth, size and completeness
pub fn describe(tree: &Tree<i64>, style: RenderStyle) -> String {
    let drawing = if tree.is_empty() {
        "(empty tree)".to_string()
    } else {
        render_with_style(tree, style)
    };

    let preorder = tree
        .preorder()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n\npreorder: [{}]\ndepth: {}\nsize: {}\ncomplete: {}",
        drawing,
        preorder,
        tree.depth(),
        tree.size(),
        if tree.is_complete() { "yes" } else { "no" }
    )
}
