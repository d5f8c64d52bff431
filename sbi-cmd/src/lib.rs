//! Command implementations for SBI CLI.
//!
//! Each subcommand loads the inventory once, wraps it in a
//! [`ReactiveController`](sbi_map::controller::ReactiveController) and plays
//! the part of the rendering surface: it builds a request, calls the core
//! and writes what comes back.

use anyhow::Context;
use clap::{Args, Subcommand};
use sbi_cdb::dataset::BridgeDataset;
use sbi_cdb::format::{ColumnNames, SourceFormat};
use std::path::{Path, PathBuf};

pub mod render;
pub mod summary;

/// Where the inventory export lives and how to read it.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the bridge inventory export (.csv, or .csv.gz)
    #[arg(short = 's', long)]
    pub source: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// Text encoding label of the export
    #[arg(long, default_value = "windows-1250")]
    pub encoding: String,

    /// Observation year for exports without an observation-year column
    #[arg(long, default_value_t = 2021)]
    pub snapshot_year: i32,

    /// Header of the observation-year column in multi-year exports
    #[arg(long, default_value = "rok")]
    pub year_column: String,
}

impl SourceArgs {
    pub fn format(&self) -> anyhow::Result<SourceFormat> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        Ok(SourceFormat {
            delimiter: self.delimiter as u8,
            encoding: self.encoding.clone(),
            columns: ColumnNames {
                observation_year: self.year_column.clone(),
                ..ColumnNames::default()
            },
            snapshot_year: self.snapshot_year,
        })
    }

    /// Read and normalize the export.
    pub fn load(&self) -> anyhow::Result<BridgeDataset> {
        let format = self.format()?;
        sbi_cdb::loader::load_path(&self.source, &format)
            .with_context(|| format!("Failed to load {}", self.source.display()))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print record counts and the condition breakdown of the inventory
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Only summarize this observation year
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },

    /// Filter the inventory and write the map payload as JSON
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Road classes to show (canonical names, comma separated; all if omitted)
        #[arg(short = 'r', long, value_delimiter = ',')]
        road_class: Vec<String>,

        /// Condition labels to show (canonical names, comma separated; all if omitted)
        #[arg(short = 'c', long, value_delimiter = ',')]
        condition: Vec<String>,

        /// Observation year to show (all years if omitted)
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Zoom of the viewport the map was last left at
        #[arg(long)]
        zoom: Option<f64>,

        /// Center latitude of the viewport the map was last left at
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Center longitude of the viewport the map was last left at
        #[arg(long, requires = "lat")]
        lon: Option<f64>,

        /// Output path (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Answer a JSON map request read from a file
    Respond {
        #[command(flatten)]
        source: SourceArgs,

        /// Path to the request JSON
        #[arg(long)]
        request: PathBuf,

        /// Output path (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { source, year } => summary::run_summary(&source, year),
        Command::Render {
            source,
            road_class,
            condition,
            year,
            zoom,
            lat,
            lon,
            output,
            pretty,
        } => {
            let facets = render::Facets {
                road_classes: road_class,
                conditions: condition,
                year,
                zoom,
                lat,
                lon,
            };
            render::run_render(&source, &facets, output.as_deref(), pretty)
        }
        Command::Respond {
            source,
            request,
            output,
            pretty,
        } => render::run_respond(&source, &request, output.as_deref(), pretty),
    }
}

/// Write `contents` to `output`, or to stdout when no path is given.
pub(crate) fn write_output(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", contents.len(), path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
