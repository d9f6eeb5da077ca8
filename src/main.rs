use anyhow::Result;
use clap::Parser;
use dompare::areas::comparison::Comparison;
use dompare::artifacts::walk::exclusion::ExclusionSet;
use dompare::artifacts::walk::request::CompareRequest;
use dompare::commands::serve::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dompare",
    version = "0.1.0",
    about = "Diff two directories recursively and browse the result",
    long_about = "This command compares every text file found under the same relative path \
    in both directories and serves a side-by-side HTML report of the differences. \
    Files that exist only in one of the directories are skipped, and so are binary files \
    and symlinks.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "Path to the first directory")]
    dir1: PathBuf,
    #[arg(index = 2, help = "Path to the second directory")]
    dir2: PathBuf,
    #[arg(long, default_value = DEFAULT_HOST, help = "Host to bind")]
    host: String,
    #[arg(long, default_value_t = DEFAULT_PORT, help = "Port to listen on")]
    port: u16,
    #[arg(short, long, help = "Show detailed information")]
    verbose: bool,
    #[arg(
        long = "exclude-dot",
        help = "Ignore all hidden folders and files beginning with ."
    )]
    exclude_dot: bool,
    #[arg(
        long = "show-same",
        help = "Show files without differences in the report"
    )]
    show_same: bool,
    #[arg(
        short,
        long,
        num_args = 1..,
        help = "Ignore paths containing any of these names"
    )]
    exclude: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stdout)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::info!("Running, please wait...");

    let request = CompareRequest::new(&cli.dir1, &cli.dir2)?
        .with_exclusions(ExclusionSet::new(cli.exclude))
        .ignore_dot(cli.exclude_dot)
        .show_same(cli.show_same);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut comparison = Comparison::new(request, Box::new(std::io::stdout()))?;

    // the report is dropped, and its directory removed, on every return below
    let cancelled = comparison.cancel_flag();
    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancelled.store(true, Ordering::SeqCst);
        }
    });

    comparison.compare()?;

    let config = ServerConfig::new(cli.host, cli.port);
    runtime.block_on(comparison.serve(&config))?;

    Ok(())
}
