use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classification::{MarketClassification, SportKind};
use crate::models::{LiveResultInfo, Market};

/// Lifecycle phase of a market, as observed from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPhase {
    NotStarted,
    PendingResolution,
    Resolved,
    Canceled,
    Paused,
}

impl MarketPhase {
    pub fn of(market: &Market, now: DateTime<Utc>) -> Self {
        if market.is_canceled {
            MarketPhase::Canceled
        } else if market.is_resolved {
            MarketPhase::Resolved
        } else if market.is_paused {
            MarketPhase::Paused
        } else if market.maturity_date < now {
            MarketPhase::PendingResolution
        } else {
            MarketPhase::NotStarted
        }
    }

    pub fn is_pending_resolution(&self) -> bool {
        matches!(self, MarketPhase::PendingResolution)
    }

    /// Odds are only offered before the game starts
    pub fn shows_odds(&self) -> bool {
        matches!(self, MarketPhase::NotStarted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPhase::NotStarted => "not_started",
            MarketPhase::PendingResolution => "pending_resolution",
            MarketPhase::Resolved => "resolved",
            MarketPhase::Canceled => "canceled",
            MarketPhase::Paused => "paused",
        }
    }
}

/// Final result of a regularly resolved market
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResultLabel {
    Score { home: u32, away: u32 },
    /// One-sided market whose competitor won
    RaceWinner,
    /// One-sided market whose competitor did not win
    NoWin,
    /// Home won in the given round
    WinLoss { round: u32 },
    /// Away won in the given round
    LossWin { round: u32 },
}

impl ResultLabel {
    pub fn of(market: &Market, classification: &MarketClassification) -> Self {
        let home = market.home_score.unwrap_or_default();
        let away = market.away_score.unwrap_or_default();

        if classification.one_sided {
            if home == 1 {
                ResultLabel::RaceWinner
            } else {
                ResultLabel::NoWin
            }
        } else if classification.kind == SportKind::RoundBased {
            if home > 0 {
                ResultLabel::WinLoss { round: home }
            } else {
                ResultLabel::LossWin { round: away }
            }
        } else {
            ResultLabel::Score { home, away }
        }
    }
}

impl fmt::Display for ResultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultLabel::Score { home, away } => write!(f, "{} - {}", home, away),
            ResultLabel::RaceWinner => f.write_str("Race winner"),
            ResultLabel::NoWin => f.write_str("No win"),
            ResultLabel::WinLoss { round } => write!(f, "W - L (R{})", round),
            ResultLabel::LossWin { round } => write!(f, "L - W (R{})", round),
        }
    }
}

/// Live match status shown in place of the result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MatchStatus {
    /// Started, provider data available
    Live(LiveResultInfo),
    /// Started, waiting for provider data or resolution
    Pending,
    Canceled,
    Paused,
}

/// The panel the card renders next to the odds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "panel")]
pub enum StatusPanel {
    Odds,
    MatchStatus(MatchStatus),
    FinalResult(ResultLabel),
}

impl StatusPanel {
    pub fn select(
        market: &Market,
        classification: &MarketClassification,
        phase: MarketPhase,
        live_result: Option<&LiveResultInfo>,
    ) -> Self {
        match phase {
            MarketPhase::NotStarted => StatusPanel::Odds,
            MarketPhase::Resolved => StatusPanel::FinalResult(ResultLabel::of(market, classification)),
            MarketPhase::Canceled => StatusPanel::MatchStatus(MatchStatus::Canceled),
            MarketPhase::Paused => StatusPanel::MatchStatus(MatchStatus::Paused),
            MarketPhase::PendingResolution => StatusPanel::MatchStatus(
                live_result
                    .cloned()
                    .map(MatchStatus::Live)
                    .unwrap_or(MatchStatus::Pending),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::classification::tags::{FORMULA_1_TAG, ROUND_BASED_SPORT_TAG};
    use crate::derive::test_support::market;

    fn resolved(tag: u32, home: u32, away: u32) -> Market {
        let mut m = market(tag, 0.5, 0.5);
        m.is_resolved = true;
        m.home_score = Some(home);
        m.away_score = Some(away);
        m
    }

    #[test]
    fn test_phase_transitions() {
        let now = Utc::now();
        let mut m = market(9004, 0.5, 0.5);
        m.maturity_date = now + Duration::hours(2);
        assert_eq!(MarketPhase::of(&m, now), MarketPhase::NotStarted);

        m.maturity_date = now - Duration::minutes(30);
        assert_eq!(MarketPhase::of(&m, now), MarketPhase::PendingResolution);

        m.is_paused = true;
        assert_eq!(MarketPhase::of(&m, now), MarketPhase::Paused);

        m.is_resolved = true;
        assert_eq!(MarketPhase::of(&m, now), MarketPhase::Resolved);

        m.is_canceled = true;
        assert_eq!(MarketPhase::of(&m, now), MarketPhase::Canceled);
    }

    #[test]
    fn test_only_not_started_shows_odds() {
        assert!(MarketPhase::NotStarted.shows_odds());
        assert!(!MarketPhase::PendingResolution.shows_odds());
        assert!(!MarketPhase::Paused.shows_odds());
        assert!(!MarketPhase::Canceled.shows_odds());
    }

    #[test]
    fn test_score_label() {
        let m = resolved(9004, 101, 99);
        let label = ResultLabel::of(&m, &MarketClassification::of(&m));
        assert_eq!(label.to_string(), "101 - 99");
    }

    #[test]
    fn test_one_sided_race_winner() {
        let mut m = resolved(FORMULA_1_TAG, 1, 0);
        m.is_one_side_market = true;
        let label = ResultLabel::of(&m, &MarketClassification::of(&m));
        assert_eq!(label, ResultLabel::RaceWinner);

        m.home_score = Some(0);
        assert_eq!(ResultLabel::of(&m, &MarketClassification::of(&m)), ResultLabel::NoWin);
    }

    #[test]
    fn test_round_based_label() {
        let m = resolved(ROUND_BASED_SPORT_TAG, 3, 0);
        let label = ResultLabel::of(&m, &MarketClassification::of(&m));
        assert_eq!(label.to_string(), "W - L (R3)");

        let m = resolved(ROUND_BASED_SPORT_TAG, 0, 2);
        let label = ResultLabel::of(&m, &MarketClassification::of(&m));
        assert_eq!(label.to_string(), "L - W (R2)");
    }

    #[test]
    fn test_panel_selection() {
        let m = market(9004, 0.5, 0.5);
        let c = MarketClassification::of(&m);
        let live = LiveResultInfo {
            home_score: Some(10),
            away_score: Some(7),
            ..Default::default()
        };

        assert_eq!(StatusPanel::select(&m, &c, MarketPhase::NotStarted, None), StatusPanel::Odds);
        assert_eq!(
            StatusPanel::select(&m, &c, MarketPhase::PendingResolution, None),
            StatusPanel::MatchStatus(MatchStatus::Pending)
        );
        assert_eq!(
            StatusPanel::select(&m, &c, MarketPhase::PendingResolution, Some(&live)),
            StatusPanel::MatchStatus(MatchStatus::Live(live.clone()))
        );
        assert_eq!(
            StatusPanel::select(&m, &c, MarketPhase::Canceled, Some(&live)),
            StatusPanel::MatchStatus(MatchStatus::Canceled)
        );
    }
}
