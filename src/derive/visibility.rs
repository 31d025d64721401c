use serde::Serialize;

use crate::classification::MarketClassification;
use crate::models::Market;

use super::grouping::ChildMarketGroups;

/// Odds are implied probabilities, valid strictly between 0 and 1
pub fn is_valid_odd(odd: f64) -> bool {
    odd > 0.0 && odd < 1.0
}

/// Odds validity of the three independently displayed groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OddsValidity {
    pub double_chance: bool,
    pub spread_total: bool,
    pub parent: bool,
}

impl OddsValidity {
    pub fn evaluate(market: &Market, groups: &ChildMarketGroups<'_>) -> Self {
        let double_chance = !groups.double_chance.is_empty()
            && groups
                .double_chance
                .iter()
                .all(|child| is_valid_odd(child.home_odds));

        let spread_total = !groups.spread_total.is_empty()
            && groups
                .spread_total
                .iter()
                .all(|child| is_valid_odd(child.home_odds) && is_valid_odd(child.away_odds));

        // A zero draw odd means the sport has no draw
        let parent = is_valid_odd(market.home_odds)
            && is_valid_odd(market.away_odds)
            && match market.draw_odds {
                Some(draw) if draw != 0.0 => is_valid_odd(draw),
                _ => true,
            };

        Self {
            double_chance,
            spread_total,
            parent,
        }
    }

    pub fn any_valid(&self) -> bool {
        self.double_chance || self.spread_total || self.parent
    }
}

/// Whether the market should be hidden from listings.
///
/// Only markets that would show odds are ever hidden; motorsport and golf are
/// never hidden by odds validity.
pub fn should_hide(
    validity: &OddsValidity,
    classification: &MarketClassification,
    show_odds: bool,
) -> bool {
    !validity.any_valid() && !classification.exempt_from_odds_gate() && show_odds
}
