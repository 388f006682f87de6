//! Core data types for trait marker detection.
//!
//! - [`Category`]: The closed set of trait groupings
//! - [`MarkerDefinition`]: A known SNP genotype and the trait it is associated with
//! - [`RecordSet`]: Raw genotype lines keyed by marker identifier
//! - [`genotype`]: Expansion of canonical genotypes into source-specific formats
//!
//! ## Genotype Formats
//!
//! The same genotype is written differently depending on where a file came from:
//!
//! | Source      | Heterozygous A/G |
//! |-------------|------------------|
//! | SNPedia     | (A;G)            |
//! | 23andMe     | AG               |
//! | Generic     | A/G              |
//! | AncestryDNA | A`<TAB>`G        |
//!
//! Matching is a substring search for any of these renderings.

pub mod genotype;
pub mod marker;
pub mod record;
pub mod types;

pub use marker::MarkerDefinition;
pub use record::RecordSet;
pub use types::Category;
