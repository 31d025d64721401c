use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Collateral token symbols accepted by the markets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    #[serde(rename = "sUSD")]
    SUsd,
    #[serde(rename = "DAI")]
    Dai,
    #[serde(rename = "USDCe")]
    UsdcE,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "OP")]
    Op,
    #[serde(rename = "WETH")]
    Weth,
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "ARB")]
    Arb,
}

impl Coin {
    pub fn symbol(&self) -> &'static str {
        match self {
            Coin::SUsd => "sUSD",
            Coin::Dai => "DAI",
            Coin::UsdcE => "USDCe",
            Coin::Usdc => "USDC",
            Coin::Usdt => "USDT",
            Coin::Op => "OP",
            Coin::Weth => "WETH",
            Coin::Eth => "ETH",
            Coin::Arb => "ARB",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How the wallet was connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionMethod {
    /// Browser extension / injected provider
    #[default]
    Injected,
    WalletConnect,
    /// Social login account abstraction connector (Particle)
    Particle,
}

/// Wallet and app state consumed by the derivations
#[derive(Debug, Clone, Default)]
pub struct WalletState {
    pub address: Option<String>,
    pub is_connected: bool,
    pub connection: ConnectionMethod,
    pub network_id: u64,
}

/// Collateral balances of a wallet, keyed by token
pub type Balances = HashMap<Coin, f64>;

/// Exchange rates to USD, keyed by token
pub type Rates = HashMap<Coin, f64>;
