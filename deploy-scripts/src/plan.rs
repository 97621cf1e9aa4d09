//! The ordered deployment plan for the licensing contracts
//!
//! The dependency graph between contracts is expressed as data: each step names
//! a contract and the roles of its constructor arguments, which may refer to the
//! address of a contract deployed by an earlier step.

use std::fmt::{self, Display};

use alloy::primitives::Address;

use crate::{
    errors::ScriptError,
    types::{DeployedInstance, LicensingContract},
};

/// The role of a single constructor argument
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstructorArg {
    /// The configured revenue recipient
    RevenueRecipient,
    /// The address of a contract deployed earlier in the plan
    AddressOf(LicensingContract),
}

impl Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorArg::RevenueRecipient => write!(f, "revenue recipient"),
            ConstructorArg::AddressOf(contract) => write!(f, "address of {}", contract),
        }
    }
}

/// A single contract deployment within the plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentStep {
    /// The contract to deploy
    pub contract: LicensingContract,
    /// The constructor arguments, in constructor signature order
    pub args: Vec<ConstructorArg>,
}

impl DeploymentStep {
    /// Create a step deploying `contract` with the given constructor arguments
    pub fn new(contract: LicensingContract, args: Vec<ConstructorArg>) -> Self {
        Self { contract, args }
    }

    /// Resolve the constructor arguments to concrete addresses
    ///
    /// Only instances already deployed in this run may be referenced.
    pub fn resolve_args(
        &self,
        revenue_recipient: Address,
        deployed: &[DeployedInstance],
    ) -> Result<Vec<Address>, ScriptError> {
        self.args
            .iter()
            .map(|arg| match arg {
                ConstructorArg::RevenueRecipient => Ok(revenue_recipient),
                ConstructorArg::AddressOf(dep) => deployed
                    .iter()
                    .find(|instance| instance.name == *dep)
                    .map(|instance| instance.address)
                    .ok_or_else(|| {
                        ScriptError::InvalidPlan(format!(
                            "{} depends on {}, which has not been deployed",
                            self.contract, dep
                        ))
                    }),
            })
            .collect()
    }

    /// The contracts this step depends on
    pub fn dependencies(&self) -> impl Iterator<Item = LicensingContract> + '_ {
        self.args.iter().filter_map(|arg| match arg {
            ConstructorArg::AddressOf(dep) => Some(*dep),
            ConstructorArg::RevenueRecipient => None,
        })
    }
}

/// An ordered list of deployment steps, plus the order in which deployment
/// transactions are re-awaited for additional confirmations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentPlan {
    /// The steps, in deployment order
    pub steps: Vec<DeploymentStep>,
    /// The order in which deployment transactions are awaited for confirmations
    pub confirmation_order: Vec<LicensingContract>,
}

impl DeploymentPlan {
    /// The plan for the licensing system: the treasury first, then the license
    /// token and usage fee collector, both of which are wired to the treasury
    pub fn licensing() -> Self {
        use LicensingContract::*;

        let steps = vec![
            DeploymentStep::new(Treasury, vec![ConstructorArg::RevenueRecipient]),
            DeploymentStep::new(LicenseToken, vec![ConstructorArg::AddressOf(Treasury)]),
            DeploymentStep::new(UsageFeeCollector, vec![ConstructorArg::AddressOf(Treasury)]),
        ];

        // Not the deployment order; kept as the established confirmation sequence
        let confirmation_order = vec![LicenseToken, Treasury, UsageFeeCollector];

        Self {
            steps,
            confirmation_order,
        }
    }

    /// The contracts in the plan, in deployment order
    pub fn contracts(&self) -> impl Iterator<Item = LicensingContract> + '_ {
        self.steps.iter().map(|step| step.contract)
    }

    /// Check that the plan can be executed front to back
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::InvalidPlan("plan has no steps".to_string()));
        }

        let mut seen: Vec<LicensingContract> = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if seen.contains(&step.contract) {
                return Err(ScriptError::InvalidPlan(format!(
                    "{} is deployed more than once",
                    step.contract
                )));
            }

            if let Some(dep) = step.dependencies().find(|dep| !seen.contains(dep)) {
                return Err(ScriptError::InvalidPlan(format!(
                    "{} depends on {}, which is not deployed before it",
                    step.contract, dep
                )));
            }

            seen.push(step.contract);
        }

        let is_permutation = self.confirmation_order.len() == seen.len()
            && seen.iter().all(|c| self.confirmation_order.contains(c));
        if !is_permutation {
            return Err(ScriptError::InvalidPlan(
                "confirmation order must list every deployed contract exactly once".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, TxHash};

    use super::*;
    use LicensingContract::*;

    fn instance(name: LicensingContract, address: Address) -> DeployedInstance {
        DeployedInstance {
            name,
            address,
            tx_hash: TxHash::ZERO,
            constructor_args: vec![],
        }
    }

    #[test]
    fn test_licensing_plan_is_valid() {
        let plan = DeploymentPlan::licensing();
        plan.validate().unwrap();

        assert_eq!(
            plan.contracts().collect::<Vec<_>>(),
            vec![Treasury, LicenseToken, UsageFeeCollector]
        );
        assert_eq!(
            plan.confirmation_order,
            vec![LicenseToken, Treasury, UsageFeeCollector]
        );
    }

    #[test]
    fn test_forward_reference_rejected() {
        let plan = DeploymentPlan {
            steps: vec![
                DeploymentStep::new(LicenseToken, vec![ConstructorArg::AddressOf(Treasury)]),
                DeploymentStep::new(Treasury, vec![ConstructorArg::RevenueRecipient]),
            ],
            confirmation_order: vec![Treasury, LicenseToken],
        };

        assert!(matches!(plan.validate(), Err(ScriptError::InvalidPlan(_))));
    }

    #[test]
    fn test_duplicate_step_rejected() {
        let plan = DeploymentPlan {
            steps: vec![
                DeploymentStep::new(Treasury, vec![ConstructorArg::RevenueRecipient]),
                DeploymentStep::new(Treasury, vec![ConstructorArg::RevenueRecipient]),
            ],
            confirmation_order: vec![Treasury],
        };

        assert!(matches!(plan.validate(), Err(ScriptError::InvalidPlan(_))));
    }

    #[test]
    fn test_incomplete_confirmation_order_rejected() {
        let mut plan = DeploymentPlan::licensing();
        plan.confirmation_order.pop();

        assert!(matches!(plan.validate(), Err(ScriptError::InvalidPlan(_))));
    }

    #[test]
    fn test_resolve_args() {
        let recipient = address!("0x00000000000000000000000000000000000000aa");
        let treasury = address!("0x00000000000000000000000000000000000000bb");
        let plan = DeploymentPlan::licensing();

        let treasury_args = plan.steps[0].resolve_args(recipient, &[]).unwrap();
        assert_eq!(treasury_args, vec![recipient]);

        let deployed = [instance(Treasury, treasury)];
        let token_args = plan.steps[1].resolve_args(recipient, &deployed).unwrap();
        assert_eq!(token_args, vec![treasury]);
    }

    #[test]
    fn test_resolve_missing_dependency() {
        let plan = DeploymentPlan::licensing();
        let res = plan.steps[2].resolve_args(Address::ZERO, &[]);

        assert!(matches!(res, Err(ScriptError::InvalidPlan(_))));
    }
}
