use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classification::{MarketClassification, SportKind};
use crate::models::{LiveResultInfo, Market};

use super::grouping::{ChildMarketGroups, Layout, OddsRows, SecondRow};
use super::status::{MarketPhase, StatusPanel};
use super::visibility::{should_hide, OddsValidity};

/// Environment a card is derived for
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub now: DateTime<Utc>,
    pub layout: Layout,
    /// Whether the card's extra rows are expanded
    pub expanded: bool,
}

impl ViewContext {
    pub fn new(layout: Layout) -> Self {
        Self {
            now: Utc::now(),
            layout,
            expanded: false,
        }
    }
}

/// Tournament label shown under the match time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentLabel {
    pub text: String,
    /// Tennis cards carry an explanatory tooltip next to the label
    pub tennis_hint: bool,
}

/// Everything the renderer needs to draw a market card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketCardState {
    pub address: String,
    pub title: String,
    pub classification: MarketClassification,
    pub phase: MarketPhase,
    pub show_odds: bool,
    pub hidden: bool,
    pub validity: OddsValidity,
    pub second_row: SecondRow,
    pub total_markets: usize,
    pub rows: OddsRows,
    pub panel: StatusPanel,
    pub tournament_label: Option<TournamentLabel>,
}

impl MarketCardState {
    pub fn derive(
        market: &Market,
        ctx: &ViewContext,
        live_result: Option<&LiveResultInfo>,
        cached_label: Option<&str>,
    ) -> Self {
        let classification = MarketClassification::of(market);
        let phase = MarketPhase::of(market, ctx.now);
        let show_odds = phase.shows_odds();

        let groups = ChildMarketGroups::partition(market);
        let validity = OddsValidity::evaluate(market, &groups);
        let hidden = should_hide(&validity, &classification, show_odds);

        let tournament_label = cached_label
            .filter(|label| !label.is_empty() && classification.shows_tournament_label())
            .map(|label| TournamentLabel {
                text: label.to_string(),
                tennis_hint: classification.kind == SportKind::Tennis,
            });

        Self {
            address: market.address.clone(),
            title: card_title(market),
            classification,
            phase,
            show_odds,
            hidden,
            validity,
            second_row: groups.second_row(ctx.layout),
            total_markets: groups.total_markets(),
            rows: OddsRows::plan(&groups, ctx.layout, show_odds, ctx.expanded),
            panel: StatusPanel::select(market, &classification, phase, live_result),
            tournament_label,
        }
    }
}

/// One-sided competitor names come as "Last, First"
fn card_title(market: &Market) -> String {
    if market.is_one_side_market {
        fix_one_side_competitor_name(&market.home_team)
    } else {
        format!("{} vs {}", market.home_team, market.away_team)
    }
}

fn fix_one_side_competitor_name(name: &str) -> String {
    match name.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => name.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::classification::tags::{FORMULA_1_TAG, GOLF_WINNER_TAG, TENNIS_MASTERS_TAG};
    use crate::derive::status::{MatchStatus, ResultLabel};
    use crate::derive::test_support::{child, combined, market};
    use crate::models::BetType;

    fn ctx(layout: Layout) -> ViewContext {
        ViewContext {
            now: Utc::now(),
            layout,
            expanded: true,
        }
    }

    #[test]
    fn test_upcoming_degenerate_market_is_hidden() {
        let m = market(9004, 0.0, 0.0);
        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, None);
        assert_eq!(card.phase, MarketPhase::NotStarted);
        assert!(card.show_odds);
        assert!(card.hidden);
    }

    #[test]
    fn test_pending_motorsport_is_visible() {
        let mut m = market(FORMULA_1_TAG, 0.45, 0.52);
        m.is_one_side_market = true;
        m.home_team = "Verstappen, Max".into();
        m.maturity_date = Utc::now() - Duration::minutes(10);

        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, None);
        assert_eq!(card.phase, MarketPhase::PendingResolution);
        assert!(!card.hidden);
        assert_eq!(card.title, "Max Verstappen");
        assert_eq!(card.panel, StatusPanel::MatchStatus(MatchStatus::Pending));
    }

    #[test]
    fn test_upcoming_motorsport_with_bad_odds_is_visible() {
        let m = market(FORMULA_1_TAG, 0.0, 0.0);
        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, None);
        assert!(card.show_odds);
        assert!(!card.hidden);
    }

    #[test]
    fn test_started_degenerate_market_is_not_hidden() {
        let mut m = market(9004, 0.0, 0.0);
        m.maturity_date = Utc::now() - Duration::minutes(10);
        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, None);
        assert!(!card.hidden);
        assert!(card.rows.first.is_empty());
    }

    #[test]
    fn test_resolved_one_sided_card() {
        let mut m = market(FORMULA_1_TAG, 0.45, 0.52);
        m.is_one_side_market = true;
        m.is_resolved = true;
        m.home_score = Some(1);
        m.maturity_date = Utc::now() - Duration::days(1);

        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, None);
        assert_eq!(card.phase, MarketPhase::Resolved);
        assert_eq!(card.panel, StatusPanel::FinalResult(ResultLabel::RaceWinner));
    }

    #[test]
    fn test_card_counts_and_rows() {
        let mut m = market(9011, 0.4, 0.3);
        m.draw_odds = Some(0.3);
        m.child_markets = vec![
            child("0xdc1", BetType::DoubleChance, 0.7, 0.0),
            child("0xdc2", BetType::DoubleChance, 0.6, 0.0),
            child("0xp", BetType::PlayerProps(11010), 0.5, 0.5),
        ];
        m.combined_markets_data = Some(vec![combined()]);

        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, None);
        assert_eq!(card.total_markets, 4);
        assert!(card.second_row.shown);
        assert!(!card.second_row.only_combined);
        assert!(card.rows.player_props);
    }

    #[test]
    fn test_tournament_label() {
        let m = market(TENNIS_MASTERS_TAG, 0.6, 0.4);
        let card = MarketCardState::derive(&m, &ctx(Layout::Desktop), None, Some("| ATP Vienna | Final"));
        assert_eq!(
            card.tournament_label,
            Some(TournamentLabel {
                text: "| ATP Vienna | Final".into(),
                tennis_hint: true,
            })
        );

        let golf = market(GOLF_WINNER_TAG, 0.1, 0.9);
        let card = MarketCardState::derive(&golf, &ctx(Layout::Desktop), None, Some(""));
        assert!(card.tournament_label.is_none());

        let nba = market(9004, 0.5, 0.5);
        let card = MarketCardState::derive(&nba, &ctx(Layout::Desktop), None, Some("NBA"));
        assert!(card.tournament_label.is_none());
    }
}
