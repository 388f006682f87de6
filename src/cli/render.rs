//! Presentation of scan results.

use colored::Color;
use serde::Serialize;

use crate::core::genotype::display_genotype;
use crate::core::types::Category;
use crate::matching::engine::MatchResult;

/// Color for categories missing from [`CATEGORY_COLORS`]
pub const DEFAULT_COLOR: Color = Color::White;

/// Report color per category, chosen to stay readable on a dark background
pub const CATEGORY_COLORS: &[(Category, Color)] = &[
    (Category::Alzheimers, Color::Yellow),
    (Category::Autism, Color::Green),
    (Category::Bipolar, Color::Magenta),
    (Category::Immunity, Color::Red),
    (Category::Intelligence, Color::Cyan),
    (Category::Longevity, Color::Blue),
    (Category::Metabolism, Color::White),
    (Category::Muscle, Color::BrightBlack),
    (Category::Ocd, Color::BrightMagenta),
    (Category::Schizophrenia, Color::BrightYellow),
    (Category::Eyes, Color::BrightBlue),
    (Category::Hair, Color::BrightRed),
    (Category::Anxiety, Color::BrightCyan),
    (Category::Depression, Color::BrightGreen),
    (Category::Addiction, Color::BrightWhite),
];

#[must_use]
pub fn category_color(category: Category) -> Color {
    CATEGORY_COLORS
        .iter()
        .find(|(c, _)| *c == category)
        .map_or(DEFAULT_COLOR, |(_, color)| *color)
}

/// One reported match, flattened for JSON and TSV output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow<'a> {
    pub category: Category,
    pub identifier: &'a str,
    pub genotype: String,
    pub matched_format: &'a str,
    pub description: &'a str,
    pub url: String,
}

impl<'a> ReportRow<'a> {
    pub fn from_match(result: &'a MatchResult<'_>) -> Self {
        Self {
            category: result.marker.category,
            identifier: &result.marker.identifier,
            genotype: display_genotype(&result.matched_format),
            matched_format: &result.matched_format,
            description: &result.marker.description,
            url: result.marker.url(),
        }
    }

    pub const TSV_HEADER: &'static str =
        "category\tidentifier\tgenotype\tmatched_format\tdescription\turl";

    /// Tab-separated row. The matched format is escaped since it may itself
    /// hold a tab.
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.category,
            self.identifier,
            self.genotype,
            self.matched_format.escape_default(),
            self.description,
            self.url
        )
    }
}

/// Single-line text report for a match, without color
#[must_use]
pub fn format_match(result: &MatchResult<'_>) -> String {
    let row = ReportRow::from_match(result);
    format!(
        "{}: {} genotype {} | {} | {}",
        row.category, row.identifier, row.genotype, row.description, row.url
    )
}
