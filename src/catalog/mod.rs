//! Trait marker catalog.
//!
//! The catalog holds every known SNP genotype association, grouped by trait
//! category. It is compiled into the binary as a static table and turned
//! into [`MarkerDefinition`](crate::core::MarkerDefinition)s once per process.
//!
//! ## Embedded Catalog
//!
//! The table covers fifteen categories, from Alzheimer's Disease to
//! Addiction Risk. Most loci appear more than once, with one row per
//! genotype of interest. A few use non-standard encodings:
//!
//! - **rs333**: CCR5 delta32, written as a deletion-length code
//! - **rs1799752**: ACE insertion/deletion, `D;D`
//!
//! ## Example
//!
//! ```rust
//! use snp_finder::MarkerCatalog;
//!
//! let catalog = MarkerCatalog::embedded();
//!
//! for marker in catalog.get("rs429358") {
//!     println!("{marker}");
//! }
//!
//! // Export to JSON
//! let json = catalog.to_json().unwrap();
//! ```

pub mod data;
pub mod store;
