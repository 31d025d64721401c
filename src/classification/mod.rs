pub mod tags;

use serde::Serialize;
use tracing::debug;

use crate::models::Market;

use self::tags::{
    ENETPULSE_SPORTS, FIFA_WC_TAG, FIFA_WC_U20_TAG, GOLF_TAGS, IIHF_WC_TAG, JSON_ODDS_SPORTS,
    MOTORSPORT_TAGS, ROUND_BASED_SPORT_TAG, TENNIS_TAGS, UEFA_TAGS,
};

/// Sport family, as far as odds and results presentation is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SportKind {
    /// Two opposing teams, numeric score
    Standard,
    /// Races, exempt from the odds validity gate
    Motorsport,
    /// Exempt from the odds validity gate
    Golf,
    Tennis,
    /// Win/loss with the round instead of a score
    RoundBased,
}

/// Provider of live results and tournament info for a market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultProvider {
    Enetpulse,
    JsonOdds,
    Generic,
}

impl ResultProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultProvider::Enetpulse => "enetpulse",
            ResultProvider::JsonOdds => "json_odds",
            ResultProvider::Generic => "generic",
        }
    }

    /// Providers whose tournament label is persisted per market
    pub fn caches_tournament_label(&self) -> bool {
        matches!(self, ResultProvider::Enetpulse | ResultProvider::JsonOdds)
    }
}

/// Competition with its own disclaimer on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Competition {
    FifaWorldCup,
    IihfWorldCup,
    Uefa,
    Other,
}

/// Sport classification of a market, resolved once from its primary tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketClassification {
    pub sport_tag: u32,
    pub kind: SportKind,
    pub provider: ResultProvider,
    pub competition: Competition,
    pub one_sided: bool,
}

impl MarketClassification {
    pub fn of(market: &Market) -> Self {
        let classification = Self::from_tag(market.sport_tag(), market.is_one_side_market);
        debug!(
            "Classified market {} (tag {}) as {:?} via {}",
            market.address,
            classification.sport_tag,
            classification.kind,
            classification.provider.as_str()
        );
        classification
    }

    pub fn from_tag(sport_tag: u32, one_sided: bool) -> Self {
        let kind = if MOTORSPORT_TAGS.contains(&sport_tag) {
            SportKind::Motorsport
        } else if GOLF_TAGS.contains(&sport_tag) {
            SportKind::Golf
        } else if TENNIS_TAGS.contains(&sport_tag) {
            SportKind::Tennis
        } else if sport_tag == ROUND_BASED_SPORT_TAG {
            SportKind::RoundBased
        } else {
            SportKind::Standard
        };

        let provider = if ENETPULSE_SPORTS.contains(&sport_tag) {
            ResultProvider::Enetpulse
        } else if JSON_ODDS_SPORTS.contains(&sport_tag) {
            ResultProvider::JsonOdds
        } else {
            ResultProvider::Generic
        };

        let competition = match sport_tag {
            FIFA_WC_TAG | FIFA_WC_U20_TAG => Competition::FifaWorldCup,
            IIHF_WC_TAG => Competition::IihfWorldCup,
            t if UEFA_TAGS.contains(&t) => Competition::Uefa,
            _ => Competition::Other,
        };

        Self {
            sport_tag,
            kind,
            provider,
            competition,
            one_sided,
        }
    }

    /// Motorsport and golf may legitimately carry odds outside (0, 1)
    pub fn exempt_from_odds_gate(&self) -> bool {
        matches!(self.kind, SportKind::Motorsport | SportKind::Golf)
    }

    /// Whether the cached tournament label belongs on the card
    pub fn shows_tournament_label(&self) -> bool {
        self.provider.caches_tournament_label()
            && !matches!(
                self.competition,
                Competition::FifaWorldCup | Competition::Uefa
            )
    }
}
