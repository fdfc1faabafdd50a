//! Cellgrid - a command-line spreadsheet backed by a snapshot file

mod config;

use anyhow::{Context, Result, bail};
use cellgrid_core::{CellRef, Document, EditOutcome, JsonFileStore, MemoryStore};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(author, version, about = "Command-line spreadsheet with a small formula engine")]
struct Cli {
    /// Snapshot file to load and save (overrides the config file)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Config file (default: <config dir>/cellgrid/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep the grid in memory only; nothing is loaded or saved
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit a cell: a literal value, or a formula starting with '='
    Set {
        /// Cell identifier, e.g. B12
        cell: String,

        /// Raw cell text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Print a cell's value
    Get {
        /// Cell identifier, e.g. B12
        cell: String,
    },

    /// Evaluate a formula without storing the result
    Eval {
        /// Formula, e.g. "=SUM(A1:A10)" (the '=' is optional)
        formula: String,
    },

    /// Write the grid as CSV
    Export {
        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load cell values from a CSV file
    Import {
        /// Input CSV file
        input: PathBuf,
    },

    /// List every non-empty cell
    Cells,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let (config, warnings) = config::load_config(cli.config.as_deref());
    for warning in warnings {
        log::warn!("{}", warning);
    }

    let mut doc = open_document(&cli, config.snapshot)?;
    doc.rows = config.rows;

    match cli.command {
        Commands::Set { cell, text } => set_cell(&mut doc, &cell, &text),
        Commands::Get { cell } => get_cell(&doc, &cell),
        Commands::Eval { formula } => Ok(eval_formula(&doc, &formula)),
        Commands::Export { output } => export(&doc, output.as_deref()),
        Commands::Import { input } => import(&mut doc, &input),
        Commands::Cells => list_cells(&doc),
    }
}

fn open_document(cli: &Cli, configured: Option<PathBuf>) -> Result<Document> {
    if cli.ephemeral {
        return Ok(Document::open(MemoryStore::new())?);
    }

    let Some(path) = cli.snapshot.clone().or(configured) else {
        log::warn!("No snapshot location available, changes will not be saved");
        return Ok(Document::open(MemoryStore::new())?);
    };

    log::debug!("Using snapshot {}", path.display());
    Document::open(JsonFileStore::new(&path))
        .with_context(|| format!("Failed to open snapshot {}", path.display()))
}

fn parse_cell(cell: &str) -> Result<CellRef> {
    match CellRef::parse(cell) {
        Some(cell_ref) => Ok(cell_ref),
        None => bail!("Invalid cell reference: {}", cell),
    }
}

fn set_cell(doc: &mut Document, cell: &str, text: &str) -> Result<ExitCode> {
    doc.set_display(|cell_ref: CellRef, shown: &str| println!("{}: {}", cell_ref, shown));

    match doc.apply_edit(cell, text)? {
        EditOutcome::Stored(_) | EditOutcome::Computed(_) => {}
        EditOutcome::Ignored(err) => eprintln!("Formula ignored, {} unchanged: {}", cell, err),
    }
    Ok(ExitCode::SUCCESS)
}

fn get_cell(doc: &Document, cell: &str) -> Result<ExitCode> {
    let cell_ref = parse_cell(cell)?;
    println!("{}", doc.get_cell_display(&cell_ref));
    Ok(ExitCode::SUCCESS)
}

fn eval_formula(doc: &Document, formula: &str) -> ExitCode {
    match doc.evaluate(formula) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("#ERR: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn export(doc: &Document, output: Option<&Path>) -> Result<ExitCode> {
    match output {
        Some(path) => {
            doc.write_csv(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(doc.export_csv_string().as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn import(doc: &mut Document, input: &Path) -> Result<ExitCode> {
    let count = doc
        .import_csv(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;
    eprintln!("Imported {} fields from {}", count, input.display());
    Ok(ExitCode::SUCCESS)
}

fn list_cells(doc: &Document) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    for (cell_ref, value) in doc.store().iter() {
        writeln!(stdout, "{}: {}", cell_ref, value)?;
    }
    Ok(ExitCode::SUCCESS)
}
