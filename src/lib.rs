//! Market state derivation for a sports market listing board.
//!
//! The [`derive`] module turns raw market data into a card's presentation
//! state. [`live`] picks the live result provider for each market and keeps
//! tournament labels in a [`db::LabelStore`]. The workers tie both together
//! into a continuously refreshed board.

pub mod api;
pub mod classification;
pub mod config;
pub mod db;
pub mod derive;
pub mod live;
pub mod models;
pub mod network;
pub mod onboarding;
pub mod workers;
