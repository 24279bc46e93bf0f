//! tstree - command-line entrypoint.
//!
//! Loads configuration, initializes logging from it, builds a ternary search
//! tree from a word list, and answers lookup and completion queries.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tstree_lib::config::{self, ConfigLoader, LogConfig, OutputFormat, TstreeConfig};
use tstree_lib::data_structures::TernarySearchTree;
use tstree_lib::dictionary;
use tstree_lib::error::{
    report_error, set_error_reporter, ErrorContext, TracingErrorReporter, TstreeError,
    TstreeResult,
};

/// Command line arguments for tstree.
#[derive(Parser, Debug)]
#[clap(name = "tstree", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load (overrides dictionary.path)
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether each key is stored
    Contains {
        /// Keys to test
        #[clap(required = true)]
        keys: Vec<String>,
    },

    /// Show the node a key leads to
    Search {
        /// Key to look up
        key: String,
    },

    /// List stored keys starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions (defaults to query.max_results)
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// List every stored key in order
    List,

    /// Print entry count and tree height
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct ContainsReport<'a> {
    key: &'a str,
    contained: bool,
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    key: &'a str,
    found: bool,
    terminal: bool,
    line: Option<usize>,
}

#[derive(Debug, Serialize)]
struct Entry {
    key: String,
    line: Option<usize>,
}

#[derive(Debug, Serialize)]
struct Stats {
    entries: usize,
    height: usize,
}

/// Initialize the logging system from the `log` section of the configuration.
fn init_logging(log: &LogConfig) -> TstreeResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.map_err(|e| TstreeError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Prints `value` as JSON, or as the text produced by `plain`.
fn emit<S, F>(format: OutputFormat, value: &S, plain: F) -> TstreeResult<()>
where
    S: Serialize,
    F: FnOnce(&S) -> String,
{
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Plain => plain(value),
    };
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn load_tree(
    path: Option<&Path>,
    settings: &TstreeConfig,
) -> TstreeResult<TernarySearchTree<usize>> {
    Ok(dictionary::load_configured(path, &settings.dictionary)?)
}

fn run(args: Args) -> TstreeResult<()> {
    let global = config::get_global_config();
    let settings = global.get();
    let format = settings.query.output;

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = config::to_toml(&TstreeConfig::default())?;
            std::fs::write(&output, toml)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Contains { keys } => {
            let tree = load_tree(args.dictionary.as_deref(), settings)?;
            let reports: Vec<ContainsReport<'_>> = keys
                .iter()
                .map(|key| ContainsReport {
                    key,
                    contained: tree.contains(key),
                })
                .collect();
            emit(format, &reports, |reports| {
                reports
                    .iter()
                    .map(|r| format!("{}\t{}", r.key, r.contained))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::Search { key } => {
            let tree = load_tree(args.dictionary.as_deref(), settings)?;
            let node = tree.search(&key);
            let report = SearchReport {
                key: &key,
                found: node.is_some(),
                terminal: node.is_some_and(|n| n.is_terminal()),
                line: node.and_then(|n| n.payload()).copied(),
            };
            emit(format, &report, |r| match (r.found, r.line) {
                (false, _) => format!("{}: not found", r.key),
                (true, None) => format!("{}: prefix only", r.key),
                (true, Some(line)) => format!("{}: stored (line {})", r.key, line),
            })
        }
        Command::Complete { prefix, limit } => {
            let tree = load_tree(args.dictionary.as_deref(), settings)?;
            let limit = limit.unwrap_or(settings.query.max_results);
            let matches = tree.partial_match(&prefix);
            debug!(prefix = %prefix, total = matches.len(), limit, "completed prefix");

            let entries: Vec<Entry> = matches
                .into_iter()
                .take(limit)
                .map(|(key, node)| Entry {
                    key,
                    line: node.payload().copied(),
                })
                .collect();
            emit(format, &entries, |entries| plain_keys(entries))
        }
        Command::List => {
            let tree = load_tree(args.dictionary.as_deref(), settings)?;
            let mut entries = Vec::with_capacity(tree.len());
            tree.traverse(|key, node| {
                entries.push(Entry {
                    key: key.to_string(),
                    line: node.payload().copied(),
                })
            });
            emit(format, &entries, |entries| plain_keys(entries))
        }
        Command::Stats => {
            let tree = load_tree(args.dictionary.as_deref(), settings)?;
            let stats = Stats {
                entries: tree.len(),
                height: tree.height(),
            };
            emit(format, &stats, |s| {
                format!("entries\t{}\nheight\t{}", s.entries, s.height)
            })
        }
    }
}

fn plain_keys(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| e.key.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    // An explicit --config must exist; the default location is optional
    let config_path = args.config.clone().or_else(|| {
        let default = PathBuf::from(config::DEFAULT_CONFIG_PATH);
        default.exists().then_some(default)
    });
    let loaded = match ConfigLoader::new(config_path.as_deref(), config::ENV_PREFIX).load() {
        Ok(loaded) => loaded,
        Err(e) => {
            // Logging is not up yet, so this falls back to stderr
            report_error(&ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&loaded.log) {
        report_error(&ErrorContext::new(e, "logging"));
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));
    config::init_global_config(loaded);

    let command = format!("{:?}", args.command);
    if let Err(e) = run(args) {
        report_error(&ErrorContext::new(e, "cli").with_details(command));
        process::exit(1);
    }
}
