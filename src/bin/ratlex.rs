use clap::Parser;
use ratlex::{batch::BatchProcessor, config::RatlexConfig, report, RatlexResult};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Tokenize source files into token reports", long_about = None)]
struct Cli {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "ratlex.json")]
    config: PathBuf,

    /// Directory for the reports (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Do not print token listings to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

/// Returns whether every file was processed.
async fn run(cli: Cli) -> RatlexResult<bool> {
    let mut config = RatlexConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.output_dir {
        config.batch.output_dir = Some(dir);
    }
    if cli.quiet {
        config.batch.echo = false;
    }

    info!("config loaded.");
    debug!("config: {:?}", config);

    let processor = BatchProcessor::new(config);
    let summary = processor.run(cli.files).await;

    let config = processor.config();
    for outcome in summary.outcomes() {
        match outcome {
            Ok(file) if config.batch.echo => {
                print!(
                    "{}",
                    report::console_listing(&file.input, &file.tokens, &config.report)
                );
            }
            Ok(_) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    info!(
        succeeded = summary.succeeded().count(),
        failed = summary.failed().count(),
        "batch finished"
    );

    Ok(!summary.has_failures())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
