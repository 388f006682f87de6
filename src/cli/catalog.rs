use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::catalog::store::MarkerCatalog;
use crate::cli::render::category_color;
use crate::cli::OutputFormat;
use crate::core::marker::MarkerDefinition;
use crate::core::types::Category;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all markers in the catalog
    List {
        /// Filter by category (can be repeated)
        #[arg(short, long, value_enum)]
        category: Vec<Category>,
    },

    /// Show every catalog entry for a marker identifier
    Show {
        /// Marker identifier (e.g. "rs429358")
        #[arg(required = true)]
        identifier: String,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the identifier is unknown or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = MarkerCatalog::embedded();

    if verbose {
        eprintln!(
            "Loaded catalog with {} markers over {} identifiers",
            catalog.len(),
            catalog.identifier_count()
        );
    }

    match args.command {
        CatalogCommands::List { category } => run_list(catalog, &category, format),
        CatalogCommands::Show { identifier } => run_show(catalog, &identifier, format),
        CatalogCommands::Export { output } => run_export(catalog, &output),
    }
}

fn run_list(
    catalog: &MarkerCatalog,
    categories: &[Category],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let filtered: Vec<&MarkerDefinition> = catalog.in_categories(categories).collect();

    match format {
        OutputFormat::Text => {
            let id_width = filtered
                .iter()
                .map(|m| m.identifier.len())
                .max()
                .unwrap_or(10)
                .max(10);
            let category_width = filtered
                .iter()
                .map(|m| m.category.name().len())
                .max()
                .unwrap_or(8)
                .max(8);

            println!("Marker Catalog ({} markers)\n", filtered.len());
            println!(
                "{:<id_w$} {:<8} {:<cat_w$} Description",
                "Identifier",
                "Genotype",
                "Category",
                id_w = id_width,
                cat_w = category_width,
            );
            println!("{}", "-".repeat(id_width + category_width + 40));

            for marker in &filtered {
                let line = format!(
                    "{:<id_w$} {:<8} {:<cat_w$} {}",
                    marker.identifier,
                    marker.accepted_genotypes.join(","),
                    marker.category.name(),
                    marker.description,
                    id_w = id_width,
                    cat_w = category_width,
                );
                println!("{}", line.color(category_color(marker.category)));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("identifier\tgenotypes\tcategory\tdescription\turl");
            for marker in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    marker.identifier,
                    marker.accepted_genotypes.join(","),
                    marker.category,
                    marker.description,
                    marker.url()
                );
            }
        }
    }

    Ok(())
}

fn run_show(catalog: &MarkerCatalog, identifier: &str, format: OutputFormat) -> anyhow::Result<()> {
    let markers = catalog.get(identifier);
    if markers.is_empty() {
        anyhow::bail!("Marker '{identifier}' not found in catalog");
    }

    match format {
        OutputFormat::Text => {
            println!("Marker: {identifier}");
            println!("SNPedia: {}\n", markers[0].url());
            for marker in &markers {
                println!(
                    "{}",
                    format!(
                        "{} | {} | {}",
                        marker.accepted_genotypes.join(","),
                        marker.category,
                        marker.description
                    )
                    .color(category_color(marker.category))
                );
                let formats: Vec<String> = marker
                    .match_formats()
                    .iter()
                    .map(|f| format!("{f:?}"))
                    .collect();
                println!("   Matches: {}", formats.join(" "));
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = markers
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "identifier": m.identifier,
                        "accepted_genotypes": m.accepted_genotypes,
                        "category": m.category,
                        "description": m.description,
                        "match_formats": m.match_formats(),
                        "url": m.url(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("identifier\tgenotypes\tcategory\tdescription");
            for marker in &markers {
                println!(
                    "{}\t{}\t{}\t{}",
                    marker.identifier,
                    marker.accepted_genotypes.join(","),
                    marker.category,
                    marker.description
                );
            }
        }
    }

    Ok(())
}

fn run_export(catalog: &MarkerCatalog, output: &Path) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write catalog to {}", output.display()))?;

    println!(
        "Exported {} markers to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
