use serde::Serialize;
use tracing::debug;

use crate::catalog::store::MarkerCatalog;
use crate::core::marker::MarkerDefinition;
use crate::core::record::RecordSet;

/// A catalog marker found in the input, with the literal format that matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    /// The matched marker
    pub marker: &'a MarkerDefinition,

    /// Format string found in the record line (e.g. "C\tT"), not the
    /// canonical genotype
    pub matched_format: String,
}

/// Check a single record line for a marker.
///
/// Returns the first of the marker's formats, in generation order, that
/// occurs in `line`. Returns `None` when the identifier itself does not
/// occur in the line, or when none of the accepted genotypes do.
///
/// # Examples
///
/// ```
/// use snp_finder::core::{Category, MarkerDefinition};
/// use snp_finder::matching::engine::detect_marker;
///
/// let marker = MarkerDefinition::new("rs4680", "A;G", Category::Intelligence);
/// assert_eq!(detect_marker(&marker, "rs4680\t22\t19951271\tAG"), Some("AG"));
/// assert_eq!(detect_marker(&marker, "rs4680\t22\t19951271\tGG"), None);
/// ```
pub fn detect_marker<'m>(marker: &'m MarkerDefinition, line: &str) -> Option<&'m str> {
    if !line.contains(marker.identifier.as_str()) {
        return None;
    }

    marker
        .match_formats()
        .iter()
        .find(|format| line.contains(format.as_str()))
        .map(String::as_str)
}

/// The scan engine
pub struct ScanEngine<'a> {
    catalog: &'a MarkerCatalog,
}

impl<'a> ScanEngine<'a> {
    pub fn new(catalog: &'a MarkerCatalog) -> Self {
        Self { catalog }
    }

    /// Find every catalog marker present in the records.
    ///
    /// Results follow catalog order, not input order. Each marker is checked
    /// independently, so two markers on the same identifier can both match.
    pub fn scan(&self, records: &RecordSet) -> Vec<MatchResult<'a>> {
        let mut results = Vec::new();
        let mut evaluated = 0usize;

        for marker in self.catalog.iter() {
            let Some(line) = records.get(&marker.identifier) else {
                continue;
            };
            evaluated += 1;

            if let Some(format) = detect_marker(marker, line) {
                debug!(
                    "{} ({}) matched {:?}",
                    marker.identifier, marker.category, format
                );
                results.push(MatchResult {
                    marker,
                    matched_format: format.to_string(),
                });
            }
        }

        debug!(
            "Evaluated {evaluated} of {} markers against {} records, {} matched",
            self.catalog.len(),
            records.len(),
            results.len()
        );

        results
    }
}
