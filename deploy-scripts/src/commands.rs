//! Implementations of the deploy script commands

use std::{io, time::Duration};

use tracing::info;

use crate::{
    artifacts::ArtifactSet,
    cli::DeployArgs,
    deployer::RpcDeployer,
    errors::ScriptError,
    orchestrator::{deploy_all, DeployConfig},
    plan::DeploymentPlan,
    report::Report,
    utils::{parse_address, setup_client},
};

pub async fn deploy(args: DeployArgs) -> Result<(), ScriptError> {
    let plan = DeploymentPlan::licensing();
    plan.validate()?;

    // Load every artifact up front so that a missing one can't leave the
    // deployment half-finished
    let artifacts = ArtifactSet::load(&args.artifacts_dir, plan.contracts())?;

    let revenue_recipient = args
        .revenue_recipient
        .as_deref()
        .map(parse_address)
        .transpose()?;

    let (provider, signer_address) = setup_client(&args.priv_key, &args.rpc_url)?;
    let deployer = RpcDeployer::new(provider, signer_address, args.network, artifacts);

    let config = DeployConfig {
        revenue_recipient,
        confirmations: args.confirmations,
        wait_timeout: args.wait_timeout_secs.map(Duration::from_secs),
        verify_command: args.verify_command,
    };

    let mut report = Report::new(io::stdout());
    let summary = deploy_all(&plan, &config, &deployer, &mut report).await?;
    info!("deployed {} contracts to {}", summary.contracts.len(), summary.network);

    if args.json {
        report.json(&summary)?;
    }

    Ok(())
}

pub fn print_plan() -> Result<(), ScriptError> {
    let plan = DeploymentPlan::licensing();
    plan.validate()?;

    Report::new(io::stdout()).plan(&plan)
}
