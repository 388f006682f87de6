use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::catalog::data::MARKER_TABLE;
use crate::core::marker::MarkerDefinition;
use crate::core::types::Category;

/// Catalog version stamped on exports
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize)]
pub struct CatalogData<'a> {
    pub version: &'a str,
    pub created_at: String,
    pub markers: &'a [MarkerDefinition],
}

/// The marker catalog with an identifier index
#[derive(Debug)]
pub struct MarkerCatalog {
    /// All known markers, in report order
    markers: Vec<MarkerDefinition>,

    /// Index: identifier -> indices of markers using it
    identifier_to_markers: HashMap<String, Vec<usize>>,
}

impl MarkerCatalog {
    /// Build a catalog from an explicit list of definitions
    pub fn from_definitions(markers: Vec<MarkerDefinition>) -> Self {
        let mut identifier_to_markers: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, marker) in markers.iter().enumerate() {
            identifier_to_markers
                .entry(marker.identifier.clone())
                .or_default()
                .push(index);
        }

        Self {
            markers,
            identifier_to_markers,
        }
    }

    /// The embedded catalog, built on first use and shared for the whole process
    pub fn embedded() -> &'static MarkerCatalog {
        static EMBEDDED: OnceLock<MarkerCatalog> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            Self::from_definitions(
                MARKER_TABLE
                    .iter()
                    .map(|entry| entry.to_definition())
                    .collect(),
            )
        })
    }

    /// Iterate over all markers in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, MarkerDefinition> {
        self.markers.iter()
    }

    /// All markers sharing an identifier, in catalog order
    pub fn get(&self, identifier: &str) -> Vec<&MarkerDefinition> {
        self.identifier_to_markers
            .get(identifier)
            .map(|indices| indices.iter().map(|&idx| &self.markers[idx]).collect())
            .unwrap_or_default()
    }

    /// Markers of any of the given categories, in catalog order.
    /// An empty slice selects every marker.
    pub fn in_categories<'s>(
        &'s self,
        categories: &'s [Category],
    ) -> impl Iterator<Item = &'s MarkerDefinition> + 's {
        self.markers
            .iter()
            .filter(move |m| categories.is_empty() || categories.contains(&m.category))
    }

    /// Number of distinct identifiers
    pub fn identifier_count(&self) -> usize {
        self.identifier_to_markers.len()
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let data = CatalogData {
            version: CATALOG_VERSION,
            created_at: chrono::Utc::now().to_rfc3339(),
            markers: &self.markers,
        };
        serde_json::to_string_pretty(&data)
    }

    /// Number of markers in catalog
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl<'a> IntoIterator for &'a MarkerCatalog {
    type Item = &'a MarkerDefinition;
    type IntoIter = std::slice::Iter<'a, MarkerDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = MarkerCatalog::embedded();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), MARKER_TABLE.len());
        assert!(catalog.identifier_count() < catalog.len());
    }

    #[test]
    fn test_embedded_catalog_is_shared() {
        assert!(std::ptr::eq(
            MarkerCatalog::embedded(),
            MarkerCatalog::embedded()
        ));
    }

    #[test]
    fn test_embedded_order_follows_table() {
        let catalog = MarkerCatalog::embedded();
        for (marker, entry) in catalog.iter().zip(MARKER_TABLE) {
            assert_eq!(marker.identifier, entry.identifier);
            assert_eq!(marker.accepted_genotypes, [entry.genotype]);
        }
    }

    #[test]
    fn test_get_by_identifier() {
        let catalog = MarkerCatalog::embedded();

        let apoe = catalog.get("rs429358");
        assert_eq!(apoe.len(), 2);
        assert_eq!(apoe[0].accepted_genotypes, ["C;C"]);
        assert_eq!(apoe[1].accepted_genotypes, ["C;T"]);
        assert!(apoe.iter().all(|m| m.category == Category::Alzheimers));

        assert!(catalog.get("rs0").is_empty());
    }

    #[test]
    fn test_same_identifier_across_categories() {
        let catalog = MarkerCatalog::embedded();
        let categories: Vec<Category> = catalog
            .get("rs16891982")
            .iter()
            .map(|m| m.category)
            .collect();
        assert_eq!(categories, [Category::Eyes, Category::Hair]);
    }

    #[test]
    fn test_in_categories() {
        let catalog = MarkerCatalog::embedded();
        let immunity: Vec<_> = catalog.in_categories(&[Category::Immunity]).collect();
        assert_eq!(immunity.len(), 6);
        assert_eq!(immunity[0].identifier, "rs333");

        assert_eq!(catalog.in_categories(&[]).count(), catalog.len());
    }

    #[test]
    fn test_in_categories_keeps_catalog_order() {
        let catalog = MarkerCatalog::from_definitions(vec![
            MarkerDefinition::new("rs1", "A;A", Category::Eyes),
            MarkerDefinition::new("rs2", "A;A", Category::Anxiety),
            MarkerDefinition::new("rs3", "A;A", Category::Hair),
            MarkerDefinition::new("rs4", "A;A", Category::Eyes),
        ]);
        let ids: Vec<&str> = catalog
            .in_categories(&[Category::Hair, Category::Eyes])
            .map(|m| m.identifier.as_str())
            .collect();
        assert_eq!(ids, ["rs1", "rs3", "rs4"]);
    }

    #[test]
    fn test_from_definitions() {
        let catalog = MarkerCatalog::from_definitions(vec![
            MarkerDefinition::new("rs1322784", "C;C", Category::Autism),
            MarkerDefinition::new("rs1322784", "C;T", Category::Autism),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.identifier_count(), 1);
        assert_eq!(catalog.get("rs1322784").len(), 2);
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = MarkerCatalog::embedded();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"markers\""));
        assert!(json.contains("rs429358"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["markers"].as_array().unwrap().len(), catalog.len());
    }
}
