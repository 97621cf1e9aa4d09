//! Loading of contract compilation artifacts
//!
//! Both Hardhat (`artifacts/contracts/<Name>.sol/<Name>.json`, bytecode as a hex
//! string) and Foundry (`out/<Name>.sol/<Name>.json`, bytecode as an object with
//! an `object` field) layouts are supported.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{Address, Bytes},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, HARDHAT_SOURCES_SEGMENT, SOLIDITY_EXTENSION},
    errors::ScriptError,
    types::LicensingContract,
};

/// The Solidity type of every constructor argument the plan can resolve
const ADDRESS_TYPE: &str = "address";

/// The on-disk shape of a compilation artifact
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract ABI
    #[serde(default)]
    abi: JsonAbi,
    /// The contract creation bytecode
    bytecode: RawBytecode,
}

/// Creation bytecode, in either of the supported artifact formats
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// Hardhat's hex string
    Hex(Bytes),
    /// Foundry's bytecode object
    Object {
        /// The hex-encoded bytecode
        object: Bytes,
    },
}

impl From<RawBytecode> for Bytes {
    fn from(raw: RawBytecode) -> Self {
        match raw {
            RawBytecode::Hex(bytes) | RawBytecode::Object { object: bytes } => bytes,
        }
    }
}

/// A compiled contract, ready to be deployed
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The contract this artifact was compiled from
    pub contract: LicensingContract,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(contract: LicensingContract, json: &str) -> Result<Self, ScriptError> {
        let raw: RawArtifact = serde_json::from_str(json)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{contract}: {e}")))?;

        let bytecode: Bytes = raw.bytecode.into();
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{contract} has no creation bytecode, is it abstract?"
            )));
        }

        Ok(Self {
            contract,
            abi: raw.abi,
            bytecode,
        })
    }

    /// Find and parse the artifact for `contract` under `artifacts_dir`
    pub fn load(artifacts_dir: &Path, contract: LicensingContract) -> Result<Self, ScriptError> {
        let path = artifact_path(artifacts_dir, contract).ok_or_else(|| {
            ScriptError::ReadArtifact(format!(
                "no artifact for {} under {}",
                contract,
                artifacts_dir.display()
            ))
        })?;
        debug!("reading {} artifact from {}", contract, path.display());

        let json = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ReadArtifact(format!("{}: {}", path.display(), e)))?;

        Self::from_json(contract, &json)
    }

    /// Build the deployment calldata: the creation bytecode followed by the
    /// ABI-encoded constructor arguments
    pub fn deployment_calldata(&self, args: &[Address]) -> Result<Bytes, ScriptError> {
        self.check_constructor(args)?;

        let encoded_args =
            DynSolValue::Tuple(args.iter().copied().map(DynSolValue::Address).collect())
                .abi_encode_params();

        let mut calldata = self.bytecode.to_vec();
        calldata.extend_from_slice(&encoded_args);
        Ok(calldata.into())
    }

    /// Check the arguments against the constructor signature in the ABI
    ///
    /// Artifacts without an ABI are not checked.
    fn check_constructor(&self, args: &[Address]) -> Result<(), ScriptError> {
        if self.abi.is_empty() {
            return Ok(());
        }

        let inputs = self
            .abi
            .constructor
            .as_ref()
            .map(|c| c.inputs.as_slice())
            .unwrap_or_default();

        if inputs.len() != args.len() {
            return Err(ScriptError::CalldataConstruction(format!(
                "{} constructor takes {} arguments, got {}",
                self.contract,
                inputs.len(),
                args.len()
            )));
        }

        if let Some(param) = inputs.iter().find(|p| p.ty != ADDRESS_TYPE) {
            return Err(ScriptError::CalldataConstruction(format!(
                "{} constructor argument `{}` has type {}, expected {}",
                self.contract, param.name, param.ty, ADDRESS_TYPE
            )));
        }

        Ok(())
    }
}

/// The artifacts for every contract in a deployment
#[derive(Clone, Debug, Default)]
pub struct ArtifactSet {
    /// The artifacts, keyed by contract
    artifacts: HashMap<LicensingContract, ContractArtifact>,
}

impl ArtifactSet {
    /// Load the artifacts for all of the given contracts
    pub fn load(
        artifacts_dir: &Path,
        contracts: impl IntoIterator<Item = LicensingContract>,
    ) -> Result<Self, ScriptError> {
        let artifacts = contracts
            .into_iter()
            .map(|c| ContractArtifact::load(artifacts_dir, c).map(|a| (c, a)))
            .collect::<Result<_, _>>()?;

        Ok(Self { artifacts })
    }

    /// The artifact for `contract`
    pub fn get(&self, contract: LicensingContract) -> Result<&ContractArtifact, ScriptError> {
        self.artifacts
            .get(&contract)
            .ok_or_else(|| ScriptError::ReadArtifact(format!("{contract} artifact not loaded")))
    }
}

/// Locate the artifact file for `contract`, trying the Hardhat layout first
fn artifact_path(artifacts_dir: &Path, contract: LicensingContract) -> Option<PathBuf> {
    let source_dir = format!("{}.{}", contract.name(), SOLIDITY_EXTENSION);
    let file_name = format!("{}.{}", contract.name(), ARTIFACT_EXTENSION);

    [
        artifacts_dir.join(HARDHAT_SOURCES_SEGMENT).join(&source_dir).join(&file_name),
        artifacts_dir.join(&source_dir).join(&file_name),
    ]
    .into_iter()
    .find(|path| path.is_file())
}
