//! Resolution and classification of the network being deployed to

use crate::constants::{EPHEMERAL_NETWORK, KNOWN_CHAINS, LOCAL_NETWORK};

/// The kind of network, which determines whether confirmation depth matters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NetworkKind {
    /// An in-process network that exists only for the duration of a run
    Ephemeral,
    /// A test node hosted on the local machine
    Local,
    /// Any other network, where deployments are expected to be final
    Persistent,
}

impl NetworkKind {
    /// Classify a network by its name
    pub fn from_name(name: &str) -> Self {
        match name {
            EPHEMERAL_NETWORK => NetworkKind::Ephemeral,
            LOCAL_NETWORK => NetworkKind::Local,
            _ => NetworkKind::Persistent,
        }
    }

    /// Whether deployments on this kind of network should be re-awaited for
    /// additional block confirmations before verification
    pub fn requires_confirmations(&self) -> bool {
        matches!(self, NetworkKind::Persistent)
    }
}

/// The name of the network with the given chain ID
pub fn network_name_for_chain(chain_id: u64) -> String {
    KNOWN_CHAINS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("chain-{chain_id}"))
}
