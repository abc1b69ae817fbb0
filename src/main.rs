use clap::Parser;
use contig_finder::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag, unless RUST_LOG overrides it
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("contig_finder=debug,info")
        } else {
            EnvFilter::new("contig_finder=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::search::run(cli.search, cli.format, cli.verbose)?;

    Ok(())
}
