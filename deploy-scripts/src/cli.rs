//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, print_plan},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_RPC_URL, DEFAULT_VERIFY_COMMAND, NUM_VERIFY_CONFIRMATIONS,
    },
    errors::ScriptError,
};

/// Deploy the licensing contracts: a treasury, a license token, and a usage fee
/// collector
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Deploy(DeployArgs),
    /// Print the deployment plan without connecting to a network
    Plan,
}

impl Command {
    pub async fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args).await,
            Command::Plan => print_plan(),
        }
    }
}

/// Deploy the Treasury, then the LicenseToken and UsageFeeCollector wired to it.
///
/// On networks other than `hardhat` and `localhost`, the deployments are awaited
/// for additional confirmations and source verification commands are printed.
#[derive(Args)]
pub struct DeployArgs {
    /// Private key of the deployer
    #[arg(long = "pkey", env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Name of the network, derived from the chain ID if not given
    #[arg(short, long, env = "NETWORK")]
    pub network: Option<String>,

    /// Address receiving treasury revenue, defaults to the deployer.
    /// Set this for any production deployment.
    #[arg(long, env = "REVENUE_RECIPIENT")]
    pub revenue_recipient: Option<String>,

    /// Directory containing Hardhat or Foundry compilation artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Confirmations to wait for on persistent networks before verification
    #[arg(long, default_value_t = NUM_VERIFY_CONFIRMATIONS)]
    pub confirmations: u64,

    /// Fail if submitting a deployment, or waiting for it to be mined or
    /// confirmed, takes longer than this many seconds
    #[arg(long)]
    pub wait_timeout_secs: Option<u64>,

    /// Verification tool invocation used in the printed verification commands
    #[arg(long, default_value = DEFAULT_VERIFY_COMMAND)]
    pub verify_command: String,

    /// Also print the deployment summary as a line of JSON
    #[arg(long)]
    pub json: bool,
}
