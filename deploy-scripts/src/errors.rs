//! Definitions of errors that can occur while deploying the licensing contracts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Error initializing the RPC client or signer
    ClientInitialization(String),
    /// Error reading a compilation artifact from disk
    ReadArtifact(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// The deployment plan is malformed
    InvalidPlan(String),
    /// Error querying the network for chain or account state
    NetworkQuery(String),
    /// Error constructing deployment calldata
    CalldataConstruction(String),
    /// Error submitting or mining a deployment transaction
    ContractDeployment(String),
    /// Error waiting for additional block confirmations
    Confirmation(String),
    /// A network wait exceeded the configured timeout
    Timeout(String),
    /// Error writing to the output channel
    Output(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::InvalidPlan(s) => write!(f, "invalid deployment plan: {}", s),
            ScriptError::NetworkQuery(s) => write!(f, "error querying network: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::Confirmation(s) => {
                write!(f, "error waiting for block confirmations: {}", s)
            }
            ScriptError::Timeout(s) => write!(f, "timed out {}", s),
            ScriptError::Output(s) => write!(f, "error writing output: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Output(e.to_string())
    }
}
