use serde::Serialize;

use crate::core::genotype::expand_formats;
use crate::core::types::Category;

/// Base URL for per-marker reference pages
pub const SNPEDIA_BASE_URL: &str = "https://www.snpedia.com/index.php/";

/// A known association between a SNP genotype and a trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerDefinition {
    /// Locus identifier (e.g. "rs429358")
    pub identifier: String,

    /// Canonical genotypes accepted for this association (e.g. "C;T").
    /// Never empty, and no entry is empty.
    pub accepted_genotypes: Vec<String>,

    /// Trait category
    pub category: Category,

    /// Description of the association
    pub description: String,

    // === Pre-computed for fast matching (populated on construction) ===
    /// Every textual format of every accepted genotype, in generation order
    #[serde(skip)]
    match_formats: Vec<String>,
}

impl MarkerDefinition {
    /// Create a definition accepting a single genotype, with the default
    /// description for its category.
    ///
    /// Genotypes must not be empty (checked in debug builds).
    pub fn new(
        identifier: impl Into<String>,
        genotype: impl Into<String>,
        category: Category,
    ) -> Self {
        let genotype = genotype.into();
        debug_assert!(!genotype.is_empty(), "empty genotype for {category}");
        let match_formats = expand_formats(&genotype);
        Self {
            identifier: identifier.into(),
            accepted_genotypes: vec![genotype],
            category,
            description: format!("Variant associated with {category}"),
            match_formats,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Accept an additional genotype for the same association
    #[must_use]
    pub fn with_genotype(mut self, genotype: impl Into<String>) -> Self {
        let genotype = genotype.into();
        debug_assert!(!genotype.is_empty(), "empty genotype for {}", self.category);
        self.match_formats.extend(expand_formats(&genotype));
        self.accepted_genotypes.push(genotype);
        self
    }

    /// All formats searched for in a record line, in the order they are tried
    pub fn match_formats(&self) -> &[String] {
        &self.match_formats
    }

    /// SNPedia page for this marker
    pub fn url(&self) -> String {
        format!("{SNPEDIA_BASE_URL}{}", self.identifier)
    }
}

impl std::fmt::Display for MarkerDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Marker[{}]({}) - {}>",
            self.identifier, self.category, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_description() {
        let marker = MarkerDefinition::new("rs7570682", "A;A", Category::Bipolar);
        assert_eq!(
            marker.description,
            "Variant associated with Bipolar Disorder"
        );
    }

    #[test]
    fn test_explicit_description() {
        let marker = MarkerDefinition::new("rs429358", "C;C", Category::Alzheimers)
            .with_description("APOE4 homozygous");
        assert_eq!(marker.description, "APOE4 homozygous");
    }

    #[test]
    fn test_match_formats_flatten_in_order() {
        let marker =
            MarkerDefinition::new("rs4680", "A;A", Category::Intelligence).with_genotype("g;g");
        assert_eq!(
            marker.match_formats(),
            ["(A;A)", "AA", "A/A", "A\tA", "(G;G)", "GG", "G/G", "G\tG"]
        );
        assert_eq!(marker.accepted_genotypes, ["A;A", "g;g"]);
    }

    #[test]
    fn test_match_formats_keep_duplicates() {
        let marker =
            MarkerDefinition::new("rs1", "C;C", Category::Autism).with_genotype("C;C");
        assert_eq!(marker.match_formats().len(), 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty genotype")]
    fn test_empty_genotype_rejected() {
        let _ = MarkerDefinition::new("rs1", "", Category::Autism);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty genotype")]
    fn test_empty_additional_genotype_rejected() {
        let _ = MarkerDefinition::new("rs1", "A;A", Category::Autism).with_genotype("");
    }

    #[test]
    fn test_url_and_display() {
        let marker = MarkerDefinition::new("rs333", "46373456", Category::Immunity);
        assert_eq!(marker.url(), "https://www.snpedia.com/index.php/rs333");
        assert_eq!(
            marker.to_string(),
            "<Marker[rs333](Immunity) - Variant associated with Immunity>"
        );
    }

    #[test]
    fn test_serialize_skips_formats() {
        let marker = MarkerDefinition::new("rs6265", "C;C", Category::Depression);
        let json = serde_json::to_value(&marker).unwrap();
        assert_eq!(json["category"], "Depression");
        assert_eq!(json["accepted_genotypes"][0], "C;C");
        assert!(json.get("match_formats").is_none());
    }
}
