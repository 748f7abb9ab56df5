//! Static definitions of the networks targeted by the deploy scripts

use std::fmt::{self, Display};

use alloy::primitives::Address;
use clap::ValueEnum;

use crate::constants::{
    BSC_GAS_PRICE, BSC_MAINNET_CHAIN_ID, BSC_MAINNET_RPC_URL, BSC_TESTNET_CHAIN_ID,
    BSC_TESTNET_RPC_URL, LOCALHOST_RPC_URL, MUMBAI_CHAIN_ID, MUMBAI_RPC_URL, RINKEBY_CHAIN_ID,
    RINKEBY_RPC_URL, ROPSTEN_CHAIN_ID, ROPSTEN_RPC_URL,
};

/// The networks a contract can be deployed to
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// A local development node
    Localhost,
    /// The Mumbai (Polygon testnet) network
    Mumbai,
    /// The Ropsten network
    Ropsten,
    /// The Rinkeby network
    Rinkeby,
    /// The BSC testnet network
    BscTestnet,
    /// The BSC mainnet network
    BscMainnet,
    /// A custom network, whose RPC URL is supplied on the command line
    Custom,
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Localhost => write!(f, "localhost"),
            Network::Mumbai => write!(f, "mumbai"),
            Network::Ropsten => write!(f, "ropsten"),
            Network::Rinkeby => write!(f, "rinkeby"),
            Network::BscTestnet => write!(f, "bsc-testnet"),
            Network::BscMainnet => write!(f, "bsc-mainnet"),
            Network::Custom => write!(f, "custom"),
        }
    }
}

impl Network {
    /// The RPC URL of the network, if one is statically configured
    pub fn rpc_url(&self) -> Option<&'static str> {
        match self {
            Network::Localhost => Some(LOCALHOST_RPC_URL),
            Network::Mumbai => Some(MUMBAI_RPC_URL),
            Network::Ropsten => Some(ROPSTEN_RPC_URL),
            Network::Rinkeby => Some(RINKEBY_RPC_URL),
            Network::BscTestnet => Some(BSC_TESTNET_RPC_URL),
            Network::BscMainnet => Some(BSC_MAINNET_RPC_URL),
            Network::Custom => None,
        }
    }

    /// The chain ID the network declares, checked against the node at client setup
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Network::Localhost | Network::Custom => None,
            Network::Mumbai => Some(MUMBAI_CHAIN_ID),
            Network::Ropsten => Some(ROPSTEN_CHAIN_ID),
            Network::Rinkeby => Some(RINKEBY_CHAIN_ID),
            Network::BscTestnet => Some(BSC_TESTNET_CHAIN_ID),
            Network::BscMainnet => Some(BSC_MAINNET_CHAIN_ID),
        }
    }

    /// The fixed gas price, in wei, to use for transactions on the network.
    ///
    /// Networks without a fixed gas price leave gas pricing to the
    /// provider's gas filler.
    pub fn gas_price(&self) -> Option<u128> {
        match self {
            Network::BscTestnet | Network::BscMainnet => Some(BSC_GAS_PRICE),
            _ => None,
        }
    }

    /// The base URL of the network's block explorer
    pub fn explorer_url(&self) -> Option<&'static str> {
        match self {
            Network::Mumbai => Some("https://mumbai.polygonscan.com"),
            Network::Ropsten => Some("https://ropsten.etherscan.io"),
            Network::Rinkeby => Some("https://rinkeby.etherscan.io"),
            Network::BscTestnet => Some("https://testnet.bscscan.com"),
            Network::BscMainnet => Some("https://bscscan.com"),
            Network::Localhost | Network::Custom => None,
        }
    }

    /// The URL of the block explorer's verification API, to which source
    /// verification requests are submitted with the configured API key
    pub fn verification_api_url(&self) -> Option<&'static str> {
        match self {
            Network::Mumbai => Some("https://api-testnet.polygonscan.com/api"),
            Network::Ropsten => Some("https://api-ropsten.etherscan.io/api"),
            Network::Rinkeby => Some("https://api-rinkeby.etherscan.io/api"),
            Network::BscTestnet => Some("https://api-testnet.bscscan.com/api"),
            Network::BscMainnet => Some("https://api.bscscan.com/api"),
            Network::Localhost | Network::Custom => None,
        }
    }

    /// The block explorer URL of a contract deployed to the network
    pub fn contract_url(&self, address: Address) -> Option<String> {
        self.explorer_url()
            .map(|base| format!("{base}/address/{address}"))
    }
}
