//! nsel - node selector label tool
//!
//! Converts node selectors between their JSON object form and `key:value`
//! tokens, and drives the multi-select editor from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nsel_observe::{LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone, init_logger};
use tracing::debug;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "nsel")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log filter (e.g. "warn", "nsel_editor=debug,info")
    #[arg(long, default_value = "warn", env = "NSEL_LOG")]
    log_level: LoggerLevel,

    /// Log output: text, json or journald
    #[arg(long, default_value = "text")]
    log_format: LoggerFormat,

    /// Timestamp offset for log lines: utc or local
    #[arg(long, default_value = "utc")]
    log_tz: LoggerTimeZone,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the display tokens of a selector given as a JSON object
    Encode {
        /// Selector, e.g. '{"disk":"ssd"}'
        labels: String,
    },

    /// Rebuild a selector from display tokens
    Decode {
        /// Tokens in selection order; later tokens win on repeated keys
        tokens: Vec<String>,

        /// Print dropped tokens and overwritten keys as well
        #[arg(long)]
        report: bool,
    },

    /// Apply toggles to a selector through the editor and print the final view
    Edit {
        /// Starting selector as a JSON object
        #[arg(long, default_value = "{}")]
        labels: String,

        /// Catalog option (repeatable)
        #[arg(long = "catalog")]
        catalog: Vec<String>,

        /// Node labels as a JSON object (repeatable); adds the node's labels to the catalog
        #[arg(long = "node")]
        nodes: Vec<String>,

        /// Token to select or deselect (repeatable, applied in order)
        #[arg(long = "toggle")]
        toggles: Vec<String>,
    },

    /// Check whether a node is a candidate for a selector
    Match {
        /// Selector as a JSON object
        #[arg(long)]
        selector: String,

        /// Node labels as a JSON object
        #[arg(long)]
        node: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = LoggerConfig {
        level: cli.log_level,
        format: cli.log_format,
        tz: cli.log_tz,
        ..Default::default()
    };
    init_logger(&cfg)?;
    debug!(command = ?cli.command, "starting");

    let out = match cli.command {
        Commands::Encode { labels } => commands::encode(&labels)?,
        Commands::Decode { tokens, report } => commands::decode(&tokens, report)?,
        Commands::Edit {
            labels,
            catalog,
            nodes,
            toggles,
        } => commands::edit(&labels, &catalog, &nodes, &toggles)?,
        Commands::Match { selector, node } => commands::matches(&selector, &node)?,
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
