//! Live result sourcing: one provider per market, chosen by sport.

pub mod label;
pub mod request;
pub mod service;

pub use label::compose_enetpulse_label;
pub use request::{decode_game_id, GameIdError};
pub use service::{fetch_enabled, LiveRefresh, LiveResultService};
