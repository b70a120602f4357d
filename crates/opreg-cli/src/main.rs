//! opreg CLI - list, describe, and verify the primitive operator catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use opreg_cli::Format;
use opreg_core::Category;

#[derive(Parser)]
#[command(name = "opreg")]
#[command(about = "Inspect the primitive operator catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List operators, exported ones by default
    List {
        /// Only list operators from this category (e.g. nn, math, quant)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<Category>,

        /// Include internal operators that are registered but not exported
        #[arg(short, long)]
        all: bool,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show an operator's inputs, outputs, and attributes
    Show {
        /// Operator name, case-sensitive
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Assemble the catalog and verify that every exported name resolves
    Check {
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = opreg_operators::catalog().context("Failed to assemble operator catalog")?;

    let output = match cli.command {
        Commands::List {
            category,
            all,
            format,
        } => {
            let rows = opreg_cli::list_operators(catalog, category, all);
            tracing::debug!(rows = rows.len(), ?category, all, "listing operators");
            opreg_cli::render_list(&rows, format)?
        }
        Commands::Show { name, format } => {
            let report = opreg_cli::describe(catalog, &name)?;
            opreg_cli::render_report(&report, format)?
        }
        Commands::Check { format } => {
            let report = opreg_cli::check(catalog)?;
            opreg_cli::render_check(&report, format)?
        }
    };

    print!("{output}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
