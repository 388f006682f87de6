//! Command-line interface for snp-finder.
//!
//! This module implements the CLI using clap:
//!
//! - **(default)**: Scan a raw genotype file for known trait markers
//! - **catalog**: List, show, or export the embedded marker catalog
//!
//! ## Usage
//!
//! ```text
//! # Scan a 23andMe export
//! snp-finder genome_John_Doe_v5.txt
//!
//! # Prompt for the file location
//! snp-finder
//!
//! # Only report eye and hair markers, as JSON
//! snp-finder genome.txt --category eyes --category hair --format json
//!
//! # Browse the catalog
//! snp-finder catalog list --category alzheimers
//! snp-finder catalog show rs429358
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod render;
pub mod scan;

#[derive(Parser)]
#[command(name = "snp-finder")]
#[command(version)]
#[command(about = "Report catalogued trait-associated SNP genotypes found in raw DNA data")]
#[command(
    long_about = "snp-finder scans a raw genotype export (23andMe, AncestryDNA or any tab-delimited rsid-per-line file) for known single-nucleotide polymorphisms.\n\nEach catalogued marker whose genotype is present in the file is reported with its trait category, a short description, and its SNPedia page."
)]
#[command(subcommand_precedence_over_arg = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub scan: scan::ScanArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the embedded marker catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
