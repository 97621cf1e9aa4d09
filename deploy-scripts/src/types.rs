//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::primitives::{Address, TxHash};
use serde::Serialize;

/// The licensing contracts this script knows how to deploy
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LicensingContract {
    /// The treasury receiving protocol revenue
    Treasury,
    /// The license token contract
    LicenseToken,
    /// The usage fee collector contract
    UsageFeeCollector,
}

impl LicensingContract {
    /// The contract's name as it appears in Solidity sources and artifacts
    pub fn name(&self) -> &'static str {
        match self {
            LicensingContract::Treasury => "Treasury",
            LicensingContract::LicenseToken => "LicenseToken",
            LicensingContract::UsageFeeCollector => "UsageFeeCollector",
        }
    }
}

impl Display for LicensingContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A contract that has been deployed and mined during this run
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DeployedInstance {
    /// The contract that was deployed
    pub name: LicensingContract,
    /// The address the contract was deployed to
    pub address: Address,
    /// The hash of the deployment transaction
    pub tx_hash: TxHash,
    /// The constructor arguments the contract was deployed with, in order
    pub constructor_args: Vec<Address>,
}

/// The report produced once every contract in the plan has been deployed
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentSummary {
    /// The name of the network the contracts were deployed to
    pub network: String,
    /// The deployed contracts, in deployment order
    pub contracts: Vec<DeployedInstance>,
    /// Commands to verify each contract's source, empty on local networks
    pub verification_commands: Vec<String>,
}
