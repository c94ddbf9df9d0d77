//! SRS Reader CLI
//!
//! Command-line tool for inspecting and exporting Solar Region Summary reports.

use clap::{Parser, Subcommand, ValueEnum};
use srs_core::{export, read_srs, SrsTable};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "srs-cli")]
#[command(about = "Solar Region Summary reader", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report and print a summary with the first rows
    Parse {
        /// Path to the SRS text file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the merged table
    Show {
        /// Path to the SRS text file
        #[arg(short, long)]
        file: PathBuf,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Columns to display (comma-separated)
        #[arg(short, long)]
        columns: Option<String>,
    },

    /// Print the report metadata
    Meta {
        /// Path to the SRS text file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Export the merged table to a file
    Export {
        /// Path to the SRS text file
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> srs_core::Result<()> {
    match command {
        Commands::Parse { file } => cmd_parse(&file),
        Commands::Show {
            file,
            limit,
            columns,
        } => cmd_show(&file, limit, columns),
        Commands::Meta { file } => cmd_meta(&file),
        Commands::Export {
            file,
            format,
            output,
        } => cmd_export(&file, format, &output),
    }
}

fn print_rows(table: &SrsTable, columns: &[&srs_core::Column], limit: usize) {
    let header: Vec<String> = columns
        .iter()
        .map(|c| match c.unit {
            Some(unit) => format!("{} [{}]", c.name, unit),
            None => c.name.clone(),
        })
        .collect();
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    for row in 0..table.row_count().min(limit) {
        let values: Vec<String> = columns
            .iter()
            .map(|col| col.get(row).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        println!("{}", values.join("\t"));
    }

    if table.row_count() > limit {
        println!("... ({} more rows)", table.row_count() - limit);
    }
}

fn cmd_parse(file: &Path) -> srs_core::Result<()> {
    let table = read_srs(file)?;

    println!("File: {}", file.display());
    println!("Columns: {}", table.column_count());
    println!("Rows: {}", table.row_count());
    if table.dropped_rows > 0 {
        println!("Dropped rows: {}", table.dropped_rows);
    }
    println!();

    let columns: Vec<&srs_core::Column> = table.columns.iter().collect();
    print_rows(&table, &columns, 10);

    if !table.issues.is_empty() {
        println!("\nData issues ({}):", table.issues.len());
        for issue in &table.issues {
            println!("  - {}", issue);
        }
    }

    Ok(())
}

fn cmd_show(file: &Path, limit: Option<usize>, columns: Option<String>) -> srs_core::Result<()> {
    let table = read_srs(file)?;

    // Filter columns if specified
    let col_filter: Option<Vec<&str>> = columns.as_ref().map(|c| c.split(',').collect());

    let display_cols: Vec<&srs_core::Column> = match &col_filter {
        Some(filter) => {
            for name in filter {
                if table.column(name).is_none() {
                    return Err(srs_core::Error::MissingColumn(name.to_string()));
                }
            }
            table
                .columns
                .iter()
                .filter(|c| filter.contains(&c.name.as_str()))
                .collect()
        }
        None => table.columns.iter().collect(),
    };

    print_rows(&table, &display_cols, limit.unwrap_or(table.row_count()));
    Ok(())
}

fn cmd_meta(file: &Path) -> srs_core::Result<()> {
    let table = read_srs(file)?;

    if table.meta.is_empty() {
        println!("No metadata available.");
        return Ok(());
    }

    for (key, value) in table.meta.iter() {
        println!("{}: {}", key, value);
    }
    if let Some(issued) = table.meta.issued() {
        println!("Issued (parsed): {}", issued);
    }

    Ok(())
}

fn cmd_export(file: &Path, format: ExportFormat, output: &Path) -> srs_core::Result<()> {
    let table = read_srs(file)?;

    // Render fully before touching the output path
    let mut buf = Vec::new();
    match format {
        ExportFormat::Csv => export::write_csv(&table, &mut buf)?,
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(&export::to_json(&table))?;
            writeln!(buf, "{}", json)?;
        }
    }
    std::fs::write(output, buf)?;

    println!("Exported {} rows to {}", table.row_count(), output.display());

    Ok(())
}
