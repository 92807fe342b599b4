//! gridtex CLI - Render merged spreadsheet ranges as LaTeX tables

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gridtex::core::range::cell_name;
use gridtex::sheet::loader::{load_csv_with_delimiter, read_csv};
use gridtex::{
    render_selection, render_tabular, parse_range, MergeRegion, Position, RenderConfig,
    SelectionRect, Workbook,
};

const STDIN_SHEET: &str = "stdin";

#[derive(Parser)]
#[command(name = "gridtex")]
#[command(version)]
#[command(about = "Render merged spreadsheet ranges as LaTeX tables", long_about = None)]
struct Cli {
    /// CSV files to load, one sheet each (named after the file stem); reads stdin if none
    inputs: Vec<PathBuf>,

    /// Range to render, e.g. A1:E6 (defaults to the sheet's populated extent)
    #[arg(short, long)]
    range: Option<String>,

    /// Sheet to render (defaults to the first input)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Merged region, e.g. A1:B2 (repeatable)
    #[arg(short, long = "merge")]
    merges: Vec<String>,

    /// Table caption
    #[arg(short, long)]
    caption: Option<String>,

    /// Table label
    #[arg(short, long)]
    label: Option<String>,

    /// Float position: h, htbp, t, b, p or H
    #[arg(short, long)]
    position: Option<Position>,

    /// Omit vertical rules and the top rule
    #[arg(long)]
    no_borders: bool,

    /// Show formula text instead of computed values where both exist
    #[arg(long)]
    formulas: bool,

    /// Emit only the tabular environment, without the table float
    #[arg(long)]
    tabular_only: bool,

    /// Field delimiter for CSV input
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// TOML render config; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_workbook(inputs: &[PathBuf], delimiter: u8) -> Result<(Workbook, String)> {
    let mut book = Workbook::new();

    if inputs.is_empty() {
        let sheet = read_csv(io::stdin().lock(), delimiter).context("reading CSV from stdin")?;
        book.insert(STDIN_SHEET, sheet);
        return Ok((book, STDIN_SHEET.to_string()));
    }

    for path in inputs {
        let sheet = load_csv_with_delimiter(path, delimiter)
            .with_context(|| format!("loading {}", path.display()))?;
        book.insert(sheet_name(path), sheet);
    }
    Ok((book, sheet_name(&inputs[0])))
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => RenderConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }
    let (book, first_sheet) = load_workbook(&cli.inputs, cli.delimiter as u8)?;

    let sheet_name = cli.sheet.or(config.sheet.clone()).unwrap_or(first_sheet);
    let show_cached_values = !cli.formulas && config.show_cached_values.unwrap_or(true);
    let view = book.view(&sheet_name, show_cached_values)?;

    let mut merges: Vec<MergeRegion> = view.merges().to_vec();
    merges.extend(config.merge_regions()?);
    for expr in &cli.merges {
        merges.push(MergeRegion::from_range(expr)?);
    }

    let rect: SelectionRect = match cli.range.or(config.range.clone()) {
        Some(expr) => parse_range(&expr)?,
        None => {
            let (max_row, max_col) = book
                .sheet(&sheet_name)?
                .extent()
                .with_context(|| format!("sheet '{}' is empty and no range was given", sheet_name))?;
            SelectionRect::new(1, max_row, 1, max_col)?
        }
    };
    debug!(
        sheet = %sheet_name,
        range = %rect,
        last_cell = %cell_name(rect.max_row(), rect.max_col()),
        merges = merges.len(),
        "rendering"
    );

    let mut options = config.table_options();
    if let Some(caption) = cli.caption {
        options.caption = caption;
    }
    if let Some(label) = cli.label {
        options.label = label;
    }
    if let Some(position) = cli.position {
        options.position = position;
    }
    if cli.no_borders {
        options.add_borders = false;
    }

    let latex = if cli.tabular_only {
        render_tabular(&view, &merges, &rect, options.add_borders)?
    } else {
        render_selection(&view, &merges, &rect, &options)?
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            writeln!(file, "{}", latex)?;
            eprintln!("✓ Output written to: {}", path.display());
        }
        None => {
            println!("{}", latex);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
