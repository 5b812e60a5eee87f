use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_check::config::{CheckerConfig, DEFAULT_REQUEST_TIMEOUT_MS};
use release_check::update::checker::UpdateChecker;

#[derive(Parser)]
#[command(name = "release-check")]
#[command(version, about = "Check GitHub Releases for a newer version")]
struct Cli {
    /// Locally installed version, compared verbatim against the release tag
    #[arg(long)]
    current: String,

    /// Repository web URL, e.g. https://github.com/owner/repo
    #[arg(long)]
    repo: String,

    /// HTTP request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
    timeout: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CheckerConfig {
        request_timeout: cli.timeout,
        ..Default::default()
    };
    let checker = UpdateChecker::new(&config);
    let outcome = checker.check(&cli.current, &cli.repo).await?;

    if outcome.update_available {
        println!("Update available: {}", outcome.remote_version);
    } else if outcome.remote_version.is_empty() {
        println!("No release information available");
    } else {
        println!("Up to date: {}", outcome.remote_version);
    }

    Ok(())
}
