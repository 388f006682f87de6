//! # snp-finder
//!
//! A library for spotting known trait-associated SNP genotypes in raw DNA data.
//!
//! Consumer genotyping services (23andMe, AncestryDNA, ...) let customers
//! download their raw data: hundreds of thousands of lines, one SNP per line.
//! Most of it means little on its own, but a few hundred loci have
//! well-studied associations with traits such as eye colour, lactose
//! tolerance or Alzheimer's risk.
//!
//! `snp-finder` checks a raw export against an embedded catalog of such
//! markers and reports every catalogued genotype the file contains.
//!
//! ## Features
//!
//! - **Embedded catalog**: ~240 genotype associations over fifteen trait categories
//! - **Format tolerant**: Recognises `(A;G)`, `AG`, `A/G` and tab-separated alleles
//! - **Deterministic**: Results always follow catalog order
//!
//! ## Example
//!
//! ```rust
//! use snp_finder::{MarkerCatalog, ScanEngine};
//! use snp_finder::parsing::genotype_file::parse_genotype_text;
//!
//! let catalog = MarkerCatalog::embedded();
//!
//! let records = parse_genotype_text("rs12913832\t15\t28365618\tAA\n");
//!
//! let engine = ScanEngine::new(catalog);
//! for m in engine.scan(&records) {
//!     println!("{}: {}", m.marker.category, m.marker.description);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Embedded marker catalog
//! - [`core`]: Marker, category, record and genotype types
//! - [`matching`]: Scan engine
//! - [`parsing`]: Raw genotype file loader
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::catalog::store::MarkerCatalog;
pub use crate::core::marker::MarkerDefinition;
pub use crate::core::record::RecordSet;
pub use crate::core::types::Category;
pub use crate::matching::engine::{MatchResult, ScanEngine};
