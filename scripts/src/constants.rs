//! Constants used in the deploy scripts

/// The RPC URL for the Mumbai (Polygon testnet) network
pub const MUMBAI_RPC_URL: &str = "https://rpc-mumbai.maticvigil.com";

/// The RPC URL for the Ropsten network
pub const ROPSTEN_RPC_URL: &str = "https://ropsten.infura.io/v3/e61ce3c1ff0f439c8cc620c964b8ecef";

/// The RPC URL for the Rinkeby network
pub const RINKEBY_RPC_URL: &str = "https://rinkeby.infura.io/v3/2685ba1bcbf54312bb8683ddcc02f79d";

/// The RPC URL for the BSC testnet network
pub const BSC_TESTNET_RPC_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";

/// The RPC URL for the BSC mainnet network
pub const BSC_MAINNET_RPC_URL: &str = "https://bsc-dataseed.binance.org";

/// The RPC URL for a local development node
pub const LOCALHOST_RPC_URL: &str = "http://localhost:8545";

/// The chain ID of the Mumbai network
pub const MUMBAI_CHAIN_ID: u64 = 80001;

/// The chain ID of the Ropsten network
pub const ROPSTEN_CHAIN_ID: u64 = 3;

/// The chain ID of the Rinkeby network
pub const RINKEBY_CHAIN_ID: u64 = 4;

/// The chain ID of the BSC testnet network
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;

/// The chain ID of the BSC mainnet network
pub const BSC_MAINNET_CHAIN_ID: u64 = 56;

/// The fixed gas price, in wei, used for transactions on the BSC networks
pub const BSC_GAS_PRICE: u128 = 20_000_000_000;

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The name of the environment variable holding the deployer's private key
pub const PRIV_KEY_ENV_VAR: &str = "DEPLOYER_PRIV_KEY";

/// The name of the environment variable holding the block explorer API key
pub const EXPLORER_API_KEY_ENV_VAR: &str = "EXPLORER_API_KEY";

/// The default directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default path of the `deployments.json` file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The file extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The suffix appended to a contract's name to form its key
/// in the `deployments.json` file
pub const CONTRACT_KEY_SUFFIX: &str = "_contract";
