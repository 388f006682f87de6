//! Marker detection against raw genotype records.
//!
//! - [`detect_marker`](engine::detect_marker): Check one marker against one record line
//! - [`ScanEngine`](engine::ScanEngine): Check the whole catalog against a record set
//! - [`MatchResult`](engine::MatchResult): A detected marker with the format that matched
//!
//! ## Matching Algorithm
//!
//! For each catalog marker, in catalog order:
//!
//! 1. **Identifier lookup**: Skip the marker if no record carries its identifier
//! 2. **Identifier check**: The record line must contain the identifier
//! 3. **Format search**: The first expanded genotype format found in the line wins
//!
//! Identifier presence alone never produces a match; one of the accepted
//! genotypes must appear as well.
//!
//! ## Example
//!
//! ```rust
//! use snp_finder::{MarkerCatalog, RecordSet, ScanEngine};
//!
//! let catalog = MarkerCatalog::embedded();
//! let records: RecordSet = [("rs4680", "rs4680\t22\t19951271\tGG")].into_iter().collect();
//!
//! let engine = ScanEngine::new(catalog);
//! for m in engine.scan(&records) {
//!     println!("{}: {} ({:?})", m.marker.category, m.marker.identifier, m.matched_format);
//! }
//! ```

pub mod engine;
