use clap::Parser;
use hopcount::abstractions::{ReqwestFetcher, SystemEnvInfo};
use hopcount::api::BreweryApi;
use hopcount::bench::run_comparison;
use hopcount::config::{self, Config};
use hopcount::report::{write_summary, RunSummary};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Count breweries per U.S. state and compare concurrent vs serial fetching
#[derive(Parser)]
#[command(name = "hopcount")]
#[command(
    about = "Count breweries per U.S. state and compare concurrent vs serial fetch timing",
    long_about = None
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// State identifiers to count (lowercase, underscores), comma separated
    #[arg(long, value_delimiter = ',', default_value = config::DEFAULT_STATES)]
    states: Vec<String>,

    /// Base URL of the brewery directory listing endpoint
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Path of the run summary artifact
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            base_url: self.base_url,
            per_page: config::MAX_PER_PAGE,
            timeout: Duration::from_secs(self.timeout),
            output: self.output,
            states: self.states,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=trace,reqwest=trace", // -vvv shows everything including dependencies
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .init();

    debug!("hopcount started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config();

    let fetcher = Arc::new(ReqwestFetcher::new(config.timeout)?);
    let api = BreweryApi::new(&config, fetcher);

    let comparison = run_comparison(&api, &config.states).await;

    println!(
        "brewery counts (async), retrieved in {:.2} seconds:",
        comparison.concurrent_elapsed.as_secs_f64()
    );
    for count in &comparison.concurrent {
        println!("  {} -> {}", count.state, count.brewery_count);
    }

    println!(
        "brewery counts (serial), retrieved in {:.2} seconds:",
        comparison.serial_elapsed.as_secs_f64()
    );
    for count in &comparison.serial {
        println!("  {} -> {}", count.state, count.brewery_count);
    }

    println!("{}", comparison.summary());

    let summary = RunSummary::new(comparison.summary(), &SystemEnvInfo);
    write_summary(&config.output, &summary)?;
    println!("Run summary written to {}", config.output.display());

    Ok(())
}
