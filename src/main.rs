use clap::Parser;
use tracing_subscriber::EnvFilter;

use snp_finder::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("snp_finder=debug,info")
    } else {
        EnvFilter::new("snp_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(cli::Commands::Catalog(args)) => {
            cli::catalog::run(args, cli.format, cli.verbose)?;
        }
        None => {
            cli::scan::run(cli.scan, cli.format)?;
        }
    }

    Ok(())
}
