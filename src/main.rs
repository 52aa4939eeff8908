use anyhow::Result;
use clap::Parser;
use medium_pub_rs::app::{self, Cli};
use medium_pub_rs::config::{self, Config};
use medium_pub_rs::{MediumClient, StdinConfirmation};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    config::load_env_file();
    let client = MediumClient::new(Config::from_env()?)?;

    let mut confirmation = StdinConfirmation::stdin();
    let mut stdout = std::io::stdout().lock();
    app::run(&cli.file, &client, &mut confirmation, &mut stdout).await?;

    Ok(())
}
