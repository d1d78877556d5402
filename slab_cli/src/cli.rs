//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use slab_core::{BarSize, SupportCondition};

/// One-way reinforced concrete slab designer (ACI 318-14)
#[derive(Parser)]
#[command(name = "slab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Design a slab and print the report
    Design(DesignArgs),

    /// List the standard reinforcing bar sizes
    Bars(BarsArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text design report
    Text,
    /// DesignResult as pretty JSON
    Json,
}

/// Inputs for `slab design`.
///
/// Values come from `--input` when given; any flag set on the command line
/// overrides the file. Unset values fall back to the defaults shown.
#[derive(Args)]
pub struct DesignArgs {
    /// JSON file with a full design input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Clear span in mm [default: 3500]
    #[arg(long)]
    pub span: Option<f64>,

    /// Support condition [default: simply-supported]
    #[arg(long)]
    pub support: Option<SupportCondition>,

    /// Concrete f'c in MPa [default: 28]
    #[arg(long)]
    pub fc: Option<f64>,

    /// Steel fy in MPa [default: 420]
    #[arg(long)]
    pub fy: Option<f64>,

    /// Concrete density in kN/m³ [default: 25]
    #[arg(long)]
    pub density: Option<f64>,

    /// Clear cover in mm [default: 20]
    #[arg(long)]
    pub cover: Option<f64>,

    /// Superimposed dead load in kN/m² [default: 1.5]
    #[arg(long)]
    pub dead: Option<f64>,

    /// Live load in kN/m² [default: 3.0]
    #[arg(long)]
    pub live: Option<f64>,

    /// Main bar size, e.g. "#13" [default: #13]
    #[arg(long)]
    pub main_bar: Option<BarSize>,

    /// Shrinkage bar size, e.g. "#10" [default: #13]
    #[arg(long)]
    pub shrinkage_bar: Option<BarSize>,

    /// Thickness override in mm (code minimum is used when omitted)
    #[arg(long)]
    pub thickness: Option<f64>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the text report to this file (or a dated file in this directory)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Also write the reinforcement table as CSV (file or directory)
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Args)]
pub struct BarsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}
