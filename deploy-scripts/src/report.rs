//! The human-readable deployment report, and its structured counterpart

use std::io::Write;

use alloy::primitives::{Address, U256};

use crate::{
    errors::ScriptError,
    plan::DeploymentPlan,
    types::{DeployedInstance, DeploymentSummary, LicensingContract},
};

/// Writes deployment progress and results to a line-oriented sink
pub struct Report<W: Write> {
    /// The sink to write to
    out: W,
}

impl<W: Write> Report<W> {
    /// Create a report writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the report, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Describe the steps of a deployment plan
    pub fn plan(&mut self, plan: &DeploymentPlan) -> Result<(), ScriptError> {
        writeln!(self.out, "Deployment plan:")?;
        for (i, step) in plan.steps.iter().enumerate() {
            let args = step.args.iter().map(ToString::to_string).collect::<Vec<_>>();
            writeln!(self.out, "  {}. {}({})", i + 1, step.contract, args.join(", "))?;
        }

        let order = plan
            .confirmation_order
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        writeln!(self.out, "Confirmation order on persistent networks: {}", order.join(", "))?;
        Ok(())
    }

    /// Report the deploying account and the network
    pub fn account(
        &mut self,
        deployer: Address,
        balance: U256,
        network: &str,
    ) -> Result<(), ScriptError> {
        writeln!(self.out, "Deploying contracts with the account: {}", deployer)?;
        writeln!(self.out, "Account balance: {}", balance)?;
        writeln!(self.out, "Network: {}", network)?;
        Ok(())
    }

    /// Report that a contract is about to be deployed
    pub fn deploying(&mut self, contract: LicensingContract) -> Result<(), ScriptError> {
        writeln!(self.out, "\nDeploying {}...", contract)?;
        Ok(())
    }

    /// Report that a contract has been deployed
    pub fn deployed(&mut self, instance: &DeployedInstance) -> Result<(), ScriptError> {
        writeln!(self.out, "{} deployed to: {}", instance.name, instance.address)?;
        Ok(())
    }

    /// Report the network and the address of every deployed contract
    pub fn summary(
        &mut self,
        network: &str,
        deployed: &[DeployedInstance],
    ) -> Result<(), ScriptError> {
        writeln!(self.out, "\n=== Deployment Summary ===")?;
        writeln!(self.out, "Network: {}", network)?;
        for instance in deployed {
            writeln!(self.out, "{}: {}", instance.name, instance.address)?;
        }
        writeln!(self.out, "\nSave these addresses for verification and integration!")?;
        Ok(())
    }

    /// Report that the script is waiting on block confirmations
    pub fn waiting_for_confirmations(&mut self) -> Result<(), ScriptError> {
        writeln!(self.out, "\nWaiting for block confirmations...")?;
        Ok(())
    }

    /// Report the commands with which to verify the deployed contracts
    pub fn verification_commands(&mut self, commands: &[String]) -> Result<(), ScriptError> {
        writeln!(self.out, "\n=== Verification Commands ===")?;
        for command in commands {
            writeln!(self.out, "{}", command)?;
        }
        Ok(())
    }

    /// Write the summary as a single line of JSON
    pub fn json(&mut self, summary: &DeploymentSummary) -> Result<(), ScriptError> {
        let json =
            serde_json::to_string(summary).map_err(|e| ScriptError::Output(e.to_string()))?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }
}

/// Build the command verifying `instance`'s source on `network`
///
/// Constructor arguments are quoted and appear in constructor signature order.
pub fn verification_command(prefix: &str, network: &str, instance: &DeployedInstance) -> String {
    let mut command = format!("{} --network {} {}", prefix, network, instance.address);
    for arg in &instance.constructor_args {
        command.push_str(&format!(" \"{}\"", arg));
    }

    command
}
