use std::process;

use clap::Parser;
use deploy_scripts::{cli::Cli, constants::DEFAULT_LOG_FILTER, errors::ScriptError};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli { command } = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version`
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    command
        .run()
        .await
        .inspect_err(|e| error!("deployment failed: {e}"))
}
