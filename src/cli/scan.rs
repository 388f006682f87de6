use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::catalog::store::MarkerCatalog;
use crate::cli::render::{category_color, format_match, ReportRow};
use crate::cli::OutputFormat;
use crate::core::types::Category;
use crate::matching::engine::{MatchResult, ScanEngine};
use crate::parsing::genotype_file::parse_genotype_file;

/// Prompt shown when no input file is given on the command line
pub const INPUT_PROMPT: &str = "Enter DNA data file location: ";

#[derive(Args)]
pub struct ScanArgs {
    /// Raw genotype file (23andMe, AncestryDNA, or any tab-delimited rsid file).
    /// Prompts for a path when omitted.
    pub input: Option<PathBuf>,

    /// Only report markers of these categories (can be repeated)
    #[arg(short, long, value_enum)]
    pub category: Vec<Category>,
}

/// Execute the scan
///
/// # Errors
///
/// Returns an error if no path is given, or the file cannot be opened or read.
/// Nothing is printed on stdout in that case.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat) -> anyhow::Result<()> {
    let path = match args.input {
        Some(path) => path,
        None => prompt_for_path(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let records = parse_genotype_file(&path)?;
    info!("Loaded {} records from {}", records.len(), path.display());

    let catalog = MarkerCatalog::embedded();
    let matches: Vec<MatchResult<'_>> = ScanEngine::new(catalog)
        .scan(&records)
        .into_iter()
        .filter(|m| args.category.is_empty() || args.category.contains(&m.marker.category))
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&matches),
        OutputFormat::Json => print_json_results(&matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

/// Ask for the genotype file location on the terminal.
/// The caller passes stderr so that stdout only ever carries results.
fn prompt_for_path(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<PathBuf> {
    write!(output, "{INPUT_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        anyhow::bail!("No input file given");
    }
    Ok(PathBuf::from(path))
}

fn print_text_results(matches: &[MatchResult<'_>]) {
    if matches.is_empty() {
        println!(
            "{}",
            "No matching genetic variants found in the provided data.".yellow()
        );
        return;
    }

    println!(
        "\n{}",
        format!("Found {} genetic variants:", matches.len()).white()
    );
    for result in matches {
        let color = category_color(result.marker.category);
        println!("{}", format_match(result).color(color));
        println!();
    }
}

fn print_json_results(matches: &[MatchResult<'_>]) -> anyhow::Result<()> {
    let output: Vec<ReportRow<'_>> = matches.iter().map(ReportRow::from_match).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult<'_>]) {
    println!("{}", ReportRow::TSV_HEADER);
    for result in matches {
        println!("{}", ReportRow::from_match(result).to_tsv());
    }
}
