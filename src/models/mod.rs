pub mod live_result;
pub mod market;
pub mod wallet;

pub use live_result::{
    CardUpdate, LiveResultCache, LiveResultInfo, LiveResultRequest, ProviderUpdate,
};
pub use market::{
    ActiveMarkets, BetType, ChildMarket, CombinedLeg, CombinedMarketPosition, Market, Position,
};
pub use wallet::{Balances, Coin, ConnectionMethod, Rates, WalletState};
