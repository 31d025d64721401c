//! Presentation state of a market card, derived from market data.
//!
//! Everything here is pure: the same market, context and live data always
//! produce the same card.

pub mod card;
pub mod grouping;
pub mod status;
pub mod visibility;

pub use card::{MarketCardState, TournamentLabel, ViewContext};
pub use grouping::{ChildMarketGroups, Layout, OddsRows, OddsSlot, SecondRow};
pub use status::{MarketPhase, MatchStatus, ResultLabel, StatusPanel};
pub use visibility::{is_valid_odd, should_hide, OddsValidity};
