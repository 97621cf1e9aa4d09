//! Constants used in the deploy scripts

/// The number of additional confirmations to wait for on persistent networks
/// before printing verification commands
pub const NUM_VERIFY_CONFIRMATIONS: u64 = 5;

/// The name of the in-process ephemeral network
pub const EPHEMERAL_NETWORK: &str = "hardhat";

/// The name of the locally-hosted test network
pub const LOCAL_NETWORK: &str = "localhost";

/// The default RPC URL, a node running on the local machine
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default directory containing compilation artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default verification tool invocation
pub const DEFAULT_VERIFY_COMMAND: &str = "npx hardhat verify";

/// The directory under a Hardhat artifacts root holding contract sources
pub const HARDHAT_SOURCES_SEGMENT: &str = "contracts";

/// The extension of a Solidity source file, used in artifact directory names
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Names of well-known chains, keyed by chain ID.
///
/// Any chain ID missing here is reported as `chain-<id>`.
pub const KNOWN_CHAINS: [(u64, &str); 11] = [
    (1, "mainnet"),
    (10, "optimism"),
    (137, "polygon"),
    (8453, "base"),
    (17000, "holesky"),
    (31337, LOCAL_NETWORK),
    (42161, "arbitrum"),
    (80002, "amoy"),
    (84532, "base-sepolia"),
    (421614, "arbitrum-sepolia"),
    (11155111, "sepolia"),
];

/// The interval at which to poll the node while waiting on a transaction
pub const BLOCK_POLL_INTERVAL_MS: u64 = 1000;
