//! Execution of a deployment plan
//!
//! Steps run strictly in plan order; each deployment must be mined before the
//! next is submitted, since later constructor arguments depend on earlier
//! addresses. Any failure aborts the run without deploying the remaining steps.

use std::{io::Write, time::Duration};

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::{
    constants::{DEFAULT_VERIFY_COMMAND, NUM_VERIFY_CONFIRMATIONS},
    deployer::Deployer,
    errors::ScriptError,
    network::NetworkKind,
    plan::DeploymentPlan,
    report::{verification_command, Report},
    types::{DeployedInstance, DeploymentSummary},
    utils::with_timeout,
};

/// Options controlling a deployment run
#[derive(Clone, Debug)]
pub struct DeployConfig {
    /// The treasury's revenue recipient, the deployer if unset
    pub revenue_recipient: Option<Address>,
    /// The confirmation depth awaited on persistent networks
    pub confirmations: u64,
    /// The longest any single submission or wait may take, unbounded if unset
    pub wait_timeout: Option<Duration>,
    /// The verification tool invocation that verification commands start with
    pub verify_command: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            revenue_recipient: None,
            confirmations: NUM_VERIFY_CONFIRMATIONS,
            wait_timeout: None,
            verify_command: DEFAULT_VERIFY_COMMAND.to_string(),
        }
    }
}

/// Deploy every contract in `plan`, reporting progress to `report`
pub async fn deploy_all<D: Deployer, W: Write>(
    plan: &DeploymentPlan,
    config: &DeployConfig,
    deployer: &D,
    report: &mut Report<W>,
) -> Result<DeploymentSummary, ScriptError> {
    plan.validate()?;

    let network = deployer.network_name().await?;
    let deployer_address = deployer
        .signers()
        .await?
        .first()
        .copied()
        .ok_or_else(|| {
            ScriptError::ClientInitialization("no signing identities available".to_string())
        })?;
    let balance = deployer.balance_of(deployer_address).await?;
    report.account(deployer_address, balance, &network)?;

    let revenue_recipient = config.revenue_recipient.unwrap_or_else(|| {
        warn!("no revenue recipient configured, defaulting to the deployer {deployer_address}");
        deployer_address
    });

    let mut deployed: Vec<DeployedInstance> = Vec::with_capacity(plan.steps.len());
    for step in &plan.steps {
        report.deploying(step.contract)?;
        let args = step.resolve_args(revenue_recipient, &deployed)?;

        let waiting_for = format!("{} deployment to be submitted", step.contract);
        let tx_hash = with_timeout(
            deployer.submit_deployment(step.contract, &args),
            config.wait_timeout,
            &waiting_for,
        )
        .await?;
        info!("submitted {} deployment in {tx_hash:#x}", step.contract);

        let waiting_for = format!("{} deployment to be mined", step.contract);
        let address =
            with_timeout(deployer.await_mined(tx_hash), config.wait_timeout, &waiting_for).await?;

        let instance = DeployedInstance {
            name: step.contract,
            address,
            tx_hash,
            constructor_args: args,
        };
        report.deployed(&instance)?;
        deployed.push(instance);
    }

    report.summary(&network, &deployed)?;

    let mut verification_commands = Vec::new();
    if NetworkKind::from_name(&network).requires_confirmations() {
        report.waiting_for_confirmations()?;
        for contract in &plan.confirmation_order {
            let instance = deployed
                .iter()
                .find(|instance| instance.name == *contract)
                .ok_or_else(|| {
                    ScriptError::InvalidPlan(format!("{contract} was never deployed"))
                })?;

            let waiting_for = format!("{} confirmations of {}", config.confirmations, contract);
            with_timeout(
                deployer.await_confirmations(instance.tx_hash, config.confirmations),
                config.wait_timeout,
                &waiting_for,
            )
            .await?;
            info!("{contract} deployment has {} confirmations", config.confirmations);
        }

        verification_commands = deployed
            .iter()
            .map(|instance| verification_command(&config.verify_command, &network, instance))
            .collect();
        report.verification_commands(&verification_commands)?;
    }

    Ok(DeploymentSummary {
        network,
        contracts: deployed,
        verification_commands,
    })
}
