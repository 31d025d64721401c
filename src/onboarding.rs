//! Onboarding ("get started") step selection from wallet funds.

use serde::Serialize;
use tracing::debug;

use crate::models::{Balances, ConnectionMethod, Rates, WalletState};
use crate::network::{Network, DEFAULT_NETWORK};

/// Onboarding steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GetStartedStep {
    LogIn,
    Deposit,
    Trade,
}

pub const STEPS: [GetStartedStep; 3] = [
    GetStartedStep::LogIn,
    GetStartedStep::Deposit,
    GetStartedStep::Trade,
];

/// Total value of the wallet's collaterals on a network.
///
/// A missing, zero or NaN rate counts as 1. Missing inputs, a missing balance or a
/// non-finite sum yield 0; the figure only drives step selection.
pub fn total_balance_value(
    network: Network,
    balances: Option<&Balances>,
    rates: Option<&Rates>,
) -> f64 {
    let (Some(balances), Some(rates)) = (balances, rates) else {
        return 0.0;
    };

    let mut total = 0.0;
    for coin in network.collaterals() {
        let Some(balance) = balances.get(coin) else {
            debug!("No {} balance, total balance falls back to zero", coin);
            return 0.0;
        };
        let rate = rates
            .get(coin)
            .copied()
            .filter(|rate| *rate != 0.0 && !rate.is_nan())
            .unwrap_or(1.0);
        total += balance * rate;
    }

    if total.is_finite() {
        total
    } else {
        0.0
    }
}

/// Step shown before balances are known
pub fn initial_step(wallet: &WalletState) -> GetStartedStep {
    if wallet.is_connected && wallet.connection == ConnectionMethod::Particle {
        GetStartedStep::Deposit
    } else {
        GetStartedStep::LogIn
    }
}

pub fn current_step(wallet: &WalletState, total_balance: f64) -> GetStartedStep {
    if total_balance > 0.0 {
        GetStartedStep::Trade
    } else if wallet.is_connected {
        GetStartedStep::Deposit
    } else {
        GetStartedStep::LogIn
    }
}

/// Step for the wallet's current network, balances and rates
pub fn onboarding_step(
    wallet: &WalletState,
    balances: Option<&Balances>,
    rates: Option<&Rates>,
) -> GetStartedStep {
    let network = Network::from_id(wallet.network_id).unwrap_or(DEFAULT_NETWORK);
    current_step(wallet, total_balance_value(network, balances, rates))
}

/// Progress bar segments: a step is filled once reached
pub fn progress(current: GetStartedStep) -> [bool; 3] {
    STEPS.map(|step| step <= current)
}
