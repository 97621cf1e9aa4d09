//! Utilities for the deploy scripts.

use std::{future::Future, str::FromStr, time::Duration};

use alloy::{
    primitives::Address,
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};

use crate::errors::ScriptError;

/// Sets up a signing provider for the given RPC url, returning it alongside
/// the address of the signer
pub fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<(DynProvider, Address), ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer_address = signer.address();

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

    Ok((DynProvider::new(provider), signer_address))
}

/// Parse a hex-encoded address
pub fn parse_address(address: &str) -> Result<Address, ScriptError> {
    Address::from_str(address).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Await `fut`, failing with [`ScriptError::Timeout`] if a timeout is given and
/// elapses first
pub async fn with_timeout<T>(
    fut: impl Future<Output = Result<T, ScriptError>>,
    timeout: Option<Duration>,
    waiting_for: &str,
) -> Result<T, ScriptError> {
    match timeout {
        Some(duration) => tokio::time::timeout(duration, fut).await.map_err(|_| {
            ScriptError::Timeout(format!("after {:?} waiting for {}", duration, waiting_for))
        })?,
        None => fut.await,
    }
}
