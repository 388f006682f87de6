//! Loader for raw genotype files.
//!
//! Consumer genotyping services export one SNP per line, tab delimited, with
//! the marker identifier in the first column:
//!
//! | Source      | Example line                          |
//! |-------------|---------------------------------------|
//! | 23andMe     | `rs4680  22  19951271  AG`            |
//! | AncestryDNA | `rs4680  22  19951271  A  G`          |
//!
//! Only lines starting with `rs` are kept; each is stored whole and later
//! searched for genotype formats.
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_finder::parsing::genotype_file::parse_genotype_file;
//! use std::path::Path;
//!
//! let records = parse_genotype_file(Path::new("genome.txt")).unwrap();
//! println!("{} records", records.len());
//! ```

pub mod genotype_file;
