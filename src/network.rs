use serde::Serialize;
use thiserror::Error;

use crate::models::Coin;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("unsupported network id: {0}")]
    Unsupported(u64),
}

/// Networks the markets are deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Network {
    OptimismMainnet,
    OptimismGoerli,
    Arbitrum,
    Base,
}

pub const DEFAULT_NETWORK: Network = Network::OptimismMainnet;

impl Network {
    pub fn from_id(network_id: u64) -> Result<Self, NetworkError> {
        match network_id {
            10 => Ok(Network::OptimismMainnet),
            420 => Ok(Network::OptimismGoerli),
            42161 => Ok(Network::Arbitrum),
            8453 => Ok(Network::Base),
            other => Err(NetworkError::Unsupported(other)),
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Network::OptimismMainnet => 10,
            Network::OptimismGoerli => 420,
            Network::Arbitrum => 42161,
            Network::Base => 8453,
        }
    }

    pub fn chain_name(&self) -> &'static str {
        match self {
            Network::OptimismMainnet => "Optimism Mainnet",
            Network::OptimismGoerli => "Optimism Goerli",
            Network::Arbitrum => "Arbitrum One",
            Network::Base => "Base Mainnet",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Network::OptimismMainnet => "Optimism",
            Network::OptimismGoerli => "Op Goerli",
            Network::Arbitrum => "Arbitrum",
            Network::Base => "Base",
        }
    }

    pub fn chain_key(&self) -> &'static str {
        match self {
            Network::OptimismMainnet => "optimism_mainnet",
            Network::OptimismGoerli => "optimism_goerli",
            Network::Arbitrum => "arbitrum_mainnet",
            Network::Base => "base_mainnet",
        }
    }

    /// Collaterals accepted on the network, the first one is the default
    pub fn collaterals(&self) -> &'static [Coin] {
        match self {
            Network::OptimismMainnet => &[
                Coin::SUsd,
                Coin::Dai,
                Coin::UsdcE,
                Coin::Usdc,
                Coin::Usdt,
                Coin::Op,
                Coin::Weth,
                Coin::Eth,
            ],
            Network::OptimismGoerli => &[Coin::SUsd],
            Network::Arbitrum => &[
                Coin::UsdcE,
                Coin::Usdc,
                Coin::Dai,
                Coin::Usdt,
                Coin::Arb,
                Coin::Weth,
                Coin::Eth,
            ],
            Network::Base => &[Coin::Usdc, Coin::Weth, Coin::Eth],
        }
    }

    pub fn is_multi_collateral_supported(&self) -> bool {
        self.collaterals().len() > 1
    }

    /// Collateral index to preselect, given the index the user picked last time
    pub fn default_collateral_index(&self, stored_index: Option<usize>) -> usize {
        stored_index
            .filter(|index| *index < self.collaterals().len())
            .unwrap_or(0)
    }
}

pub fn is_network_supported(network_id: u64) -> bool {
    Network::from_id(network_id).is_ok()
}

/// Chain key for a network id, falling back to the default network's
pub fn chain_key_by_network_id(network_id: u64) -> &'static str {
    Network::from_id(network_id)
        .unwrap_or(DEFAULT_NETWORK)
        .chain_key()
}
