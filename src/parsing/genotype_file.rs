use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::record::RecordSet;

/// Prefix of the record lines kept from a genotype file
pub const MARKER_PREFIX: &str = "rs";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found at {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load a raw genotype file into a record set
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file cannot be opened, or
/// `LoadError::Read` if reading fails or the content is not valid UTF-8.
pub fn parse_genotype_file(path: &Path) -> Result<RecordSet, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_genotype_text(&content))
}

/// Parse raw genotype text.
///
/// Keeps lines starting with `rs` (indented lines do not count), keyed by
/// the text before the first tab. Comments, headers and other lines are
/// skipped. When an identifier repeats, the last line wins.
pub fn parse_genotype_text(text: &str) -> RecordSet {
    let mut records = RecordSet::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        if !line.starts_with(MARKER_PREFIX) {
            skipped += 1;
            continue;
        }

        let line = line.trim();
        let identifier = line.split('\t').next().unwrap_or(line);
        records.insert(identifier, line);
    }

    debug!(
        "Loaded {} records ({skipped} other lines skipped)",
        records.len()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_23andme_text() {
        let text = "\
# This data file generated by 23andMe
# rsid\tchromosome\tposition\tgenotype
rs548049170\t1\t69869\tTT
rs13328684\t1\t74792\t--

i713426\t1\t726912\tAA
rs9283150\t1\t565508\tAA
";
        let records = parse_genotype_text(text);
        assert_eq!(records.len(), 3);
        assert_eq!(records.get("rs9283150"), Some("rs9283150\t1\t565508\tAA"));
        assert!(!records.contains("i713426"));
    }

    #[test]
    fn test_parse_ancestry_text() {
        let text = "rsid\tchromosome\tposition\tallele1\tallele2\r\nrs4477212\t1\t82154\tT\tT\r\n";
        let records = parse_genotype_text(text);
        // The "rsid" header shares the prefix and is kept like any record
        assert_eq!(records.len(), 2);
        assert!(records.contains("rsid"));
        assert_eq!(records.get("rs4477212"), Some("rs4477212\t1\t82154\tT\tT"));
    }

    #[test]
    fn test_parse_duplicate_identifier_last_wins() {
        let text = "rs1\t1\t10\tAA\nrs1\t1\t10\tAG\n";
        let records = parse_genotype_text(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records.get("rs1"), Some("rs1\t1\t10\tAG"));
    }

    #[test]
    fn test_parse_indented_line_skipped() {
        let text = "   rs4680\t22\t19951271\tAG\n\trs1815739\t11\t66328095\tCT\nrs6265\t11\t27679916\tCC  \n";
        let records = parse_genotype_text(text);
        assert_eq!(records.len(), 1);
        assert!(!records.contains("rs4680"));
        assert_eq!(records.get("rs6265"), Some("rs6265\t11\t27679916\tCC"));
    }

    #[test]
    fn test_parse_line_without_tab() {
        let records = parse_genotype_text("rs12345 (A;G)\n");
        assert_eq!(records.get("rs12345 (A;G)"), Some("rs12345 (A;G)"));
    }

    #[test]
    fn test_parse_file() {
        let file = create_test_file(b"rs4680\t22\t19951271\tAG\n");
        let records = parse_genotype_file(file.path()).unwrap();
        assert_eq!(records.get("rs4680"), Some("rs4680\t22\t19951271\tAG"));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_genotype_file(Path::new("/nonexistent/genome.txt")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "File not found at /nonexistent/genome.txt");
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let file = create_test_file(b"rs4680\t22\t19951271\t\xff\xfe\n");
        let err = parse_genotype_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
