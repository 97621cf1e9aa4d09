//! The interface through which the orchestrator talks to the chain, and its
//! RPC-backed implementation

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use async_trait::async_trait;
use tracing::debug;

use crate::{
    artifacts::ArtifactSet, constants::BLOCK_POLL_INTERVAL_MS, errors::ScriptError,
    network::network_name_for_chain, types::LicensingContract,
};

/// The network, signer, and contract factory operations needed to execute a
/// deployment plan
#[async_trait]
pub trait Deployer: Send + Sync {
    /// The name of the network being deployed to
    async fn network_name(&self) -> Result<String, ScriptError>;

    /// The signing identities available for deployment
    async fn signers(&self) -> Result<Vec<Address>, ScriptError>;

    /// The balance, in wei, of the given address
    async fn balance_of(&self, address: Address) -> Result<U256, ScriptError>;

    /// Submit the deployment transaction for `contract` with the given
    /// constructor arguments, returning the transaction hash
    async fn submit_deployment(
        &self,
        contract: LicensingContract,
        args: &[Address],
    ) -> Result<TxHash, ScriptError>;

    /// Wait for a deployment transaction to be mined, returning the address of
    /// the deployed contract
    async fn await_mined(&self, tx_hash: TxHash) -> Result<Address, ScriptError>;

    /// Wait until a mined transaction has the given number of confirmations,
    /// counting the block it was included in
    async fn await_confirmations(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> Result<(), ScriptError>;
}

/// A [`Deployer`] that submits transactions through a JSON-RPC provider
pub struct RpcDeployer {
    /// The signing provider
    provider: DynProvider,
    /// The address of the provider's signer
    signer_address: Address,
    /// The network name given on the command line, if any
    network_override: Option<String>,
    /// The compiled contracts available for deployment
    artifacts: ArtifactSet,
}

impl RpcDeployer {
    /// Create a deployer from a signing provider and the artifacts to deploy
    pub fn new(
        provider: DynProvider,
        signer_address: Address,
        network_override: Option<String>,
        artifacts: ArtifactSet,
    ) -> Self {
        Self {
            provider,
            signer_address,
            network_override,
            artifacts,
        }
    }

    /// Poll for a transaction receipt until the transaction is mined
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, ScriptError> {
        let mut interval = tokio::time::interval(Duration::from_millis(BLOCK_POLL_INTERVAL_MS));
        loop {
            interval.tick().await;
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

            if let Some(receipt) = receipt {
                return Ok(receipt);
            }
        }
    }
}

#[async_trait]
impl Deployer for RpcDeployer {
    async fn network_name(&self) -> Result<String, ScriptError> {
        if let Some(name) = &self.network_override {
            return Ok(name.clone());
        }

        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::NetworkQuery(e.to_string()))?;

        Ok(network_name_for_chain(chain_id))
    }

    async fn signers(&self) -> Result<Vec<Address>, ScriptError> {
        Ok(vec![self.signer_address])
    }

    async fn balance_of(&self, address: Address) -> Result<U256, ScriptError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| ScriptError::NetworkQuery(e.to_string()))
    }

    async fn submit_deployment(
        &self,
        contract: LicensingContract,
        args: &[Address],
    ) -> Result<TxHash, ScriptError> {
        let calldata = self.artifacts.get(contract)?.deployment_calldata(args)?;
        let tx = TransactionRequest::default()
            .with_from(self.signer_address)
            .with_deploy_code(calldata);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{contract}: {e}")))?;

        Ok(*pending_tx.tx_hash())
    }

    async fn await_mined(&self, tx_hash: TxHash) -> Result<Address, ScriptError> {
        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "deployment transaction {tx_hash:#x} reverted"
            )));
        }

        receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "receipt for {tx_hash:#x} has no contract address"
            ))
        })
    }

    async fn await_confirmations(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> Result<(), ScriptError> {
        let receipt = self.wait_for_receipt(tx_hash).await?;
        let mined_in = receipt.block_number.ok_or_else(|| {
            ScriptError::Confirmation(format!("receipt for {tx_hash:#x} has no block number"))
        })?;
        let target_block = mined_in + confirmations.saturating_sub(1);

        let mut interval = tokio::time::interval(Duration::from_millis(BLOCK_POLL_INTERVAL_MS));
        loop {
            interval.tick().await;
            let latest = self
                .provider
                .get_block_number()
                .await
                .map_err(|e| ScriptError::Confirmation(e.to_string()))?;
            debug!("{tx_hash:#x}: block {latest}, waiting for {target_block}");

            if latest >= target_block {
                break;
            }
        }

        // The transaction may have been dropped from the canonical chain in a reorg
        self.provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| ScriptError::Confirmation(e.to_string()))?
            .ok_or_else(|| {
                ScriptError::Confirmation(format!("{tx_hash:#x} is no longer in the chain"))
            })?;

        Ok(())
    }
}
