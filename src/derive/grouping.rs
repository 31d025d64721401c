use std::str::FromStr;

use serde::Serialize;

use crate::models::{BetType, ChildMarket, CombinedMarketPosition, Market};

/// 3 double chance + 1 spread + 1 total
pub const MAX_CHILD_MARKETS_ON_CONTRACT: usize = 5;

/// Card layout the derivation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    pub fn is_mobile(&self) -> bool {
        matches!(self, Layout::Mobile)
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Layout::Desktop),
            "mobile" => Ok(Layout::Mobile),
            other => Err(format!("unknown layout: {}", other)),
        }
    }
}

/// Child markets of a market, split into display groups
#[derive(Debug, Clone, Default)]
pub struct ChildMarketGroups<'a> {
    pub double_chance: Vec<&'a ChildMarket>,
    pub spread_total: Vec<&'a ChildMarket>,
    pub player_props: Vec<&'a ChildMarket>,
    /// All child markets, grouped or not
    pub child_count: usize,
    /// None when the market carries no combined data at all
    pub combined: Option<&'a [CombinedMarketPosition]>,
}

impl<'a> ChildMarketGroups<'a> {
    pub fn partition(market: &'a Market) -> Self {
        let mut groups = Self {
            child_count: market.child_markets.len(),
            combined: market.combined_markets_data.as_deref(),
            ..Default::default()
        };

        for child in &market.child_markets {
            match child.bet_type {
                BetType::DoubleChance => groups.double_chance.push(child),
                bet_type if bet_type.is_spread_or_total() => groups.spread_total.push(child),
                bet_type if bet_type.is_player_props() => groups.player_props.push(child),
                _ => {}
            }
        }

        groups
    }

    pub fn combined_count(&self) -> usize {
        self.combined.map(<[_]>::len).unwrap_or_default()
    }

    pub fn has_combined_data(&self) -> bool {
        self.combined.is_some()
    }

    pub fn has_grouped_children(&self) -> bool {
        !self.double_chance.is_empty()
            || !self.spread_total.is_empty()
            || !self.player_props.is_empty()
    }

    /// Displayed "total markets" figure
    pub fn total_markets(&self) -> usize {
        self.double_chance.len() + self.player_props.len() + self.combined_count()
    }

    pub fn is_at_contract_ceiling(&self) -> bool {
        self.child_count == MAX_CHILD_MARKETS_ON_CONTRACT
            || self.child_count + self.combined_count() >= MAX_CHILD_MARKETS_ON_CONTRACT
    }

    pub fn second_row(&self, layout: Layout) -> SecondRow {
        let shown = match layout {
            Layout::Desktop => self.is_at_contract_ceiling() || !self.player_props.is_empty(),
            Layout::Mobile => self.has_grouped_children(),
        };

        let only_combined = shown
            && !layout.is_mobile()
            && self.double_chance.is_empty()
            && self.combined_count() > 0;

        SecondRow {
            shown,
            only_combined,
        }
    }
}

/// Second (expandable) row decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SecondRow {
    pub shown: bool,
    /// Combined positions replace the spread/total listing in the second row
    pub only_combined: bool,
}

/// One odds widget on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "slot", content = "address")]
pub enum OddsSlot {
    Parent,
    /// All double chance markets in one widget
    DoubleChance,
    /// Spread or total child market
    Child(String),
    Combined,
    PlayerProps,
}

/// Which odds widgets go into which row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OddsRows {
    pub first: Vec<OddsSlot>,
    pub second: Vec<OddsSlot>,
    pub third: Vec<OddsSlot>,
    pub player_props: bool,
}

impl OddsRows {
    /// Plan the odds rows. Nothing is planned when odds are not shown, and the
    /// extra rows only when the card is expanded.
    pub fn plan(
        groups: &ChildMarketGroups<'_>,
        layout: Layout,
        show_odds: bool,
        expanded: bool,
    ) -> Self {
        let mut rows = OddsRows::default();
        if !show_odds {
            return rows;
        }

        let second_row = groups.second_row(layout);
        let spread_total: Vec<OddsSlot> = groups
            .spread_total
            .iter()
            .map(|child| OddsSlot::Child(child.address.clone()))
            .collect();

        rows.first.push(OddsSlot::Parent);
        if !layout.is_mobile() {
            if !groups.double_chance.is_empty() {
                rows.first.push(OddsSlot::DoubleChance);
            }
            if !second_row.shown || second_row.only_combined {
                rows.first.extend(spread_total.iter().cloned());
            }
        }

        if !second_row.shown || !expanded {
            return rows;
        }

        if layout.is_mobile() && !groups.double_chance.is_empty() {
            rows.second.push(OddsSlot::DoubleChance);
        }
        if !second_row.only_combined {
            rows.second.extend(spread_total.iter().cloned());
        }
        if groups.has_combined_data() && !layout.is_mobile() && second_row.only_combined {
            rows.second.push(OddsSlot::Combined);
        }

        let combined_in_third_row = match layout {
            Layout::Mobile => groups.has_combined_data(),
            Layout::Desktop => groups.has_combined_data() && !groups.double_chance.is_empty(),
        };
        if combined_in_third_row {
            rows.third.push(OddsSlot::Combined);
        }

        rows.player_props = !groups.player_props.is_empty();
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::test_support::{child, combined, market};

    fn soccer_with(children: Vec<ChildMarket>, combined_count: Option<usize>) -> Market {
        let mut m = market(9011, 0.4, 0.3);
        m.child_markets = children;
        m.combined_markets_data = combined_count.map(|n| (0..n).map(|_| combined()).collect());
        m
    }

    #[test]
    fn test_partition_is_disjoint() {
        let m = soccer_with(
            vec![
                child("0xdc", BetType::DoubleChance, 0.7, 0.0),
                child("0xs", BetType::Spread, 0.5, 0.5),
                child("0xt", BetType::Total, 0.5, 0.5),
                child("0xp", BetType::PlayerProps(11010), 0.5, 0.5),
                child("0xo", BetType::Other(42), 0.5, 0.5),
            ],
            None,
        );
        let groups = ChildMarketGroups::partition(&m);
        assert_eq!(groups.double_chance.len(), 1);
        assert_eq!(groups.spread_total.len(), 2);
        assert_eq!(groups.player_props.len(), 1);
        assert_eq!(groups.child_count, 5);
        assert!(!groups.has_combined_data());
    }

    #[test]
    fn test_total_markets_count() {
        let m = soccer_with(
            vec![
                child("0xdc1", BetType::DoubleChance, 0.7, 0.0),
                child("0xdc2", BetType::DoubleChance, 0.6, 0.0),
                child("0xp", BetType::PlayerProps(11051), 0.5, 0.5),
            ],
            Some(1),
        );
        assert_eq!(ChildMarketGroups::partition(&m).total_markets(), 4);
    }

    #[test]
    fn test_desktop_second_row_at_ceiling() {
        let below = soccer_with(
            vec![
                child("0xs", BetType::Spread, 0.5, 0.5),
                child("0xt", BetType::Total, 0.5, 0.5),
            ],
            Some(2),
        );
        assert!(!ChildMarketGroups::partition(&below).second_row(Layout::Desktop).shown);

        let at = soccer_with(
            vec![
                child("0xs", BetType::Spread, 0.5, 0.5),
                child("0xt", BetType::Total, 0.5, 0.5),
            ],
            Some(3),
        );
        assert!(ChildMarketGroups::partition(&at).second_row(Layout::Desktop).shown);
    }

    #[test]
    fn test_desktop_second_row_for_player_props() {
        let m = soccer_with(vec![child("0xp", BetType::PlayerProps(11010), 0.5, 0.5)], None);
        let row = ChildMarketGroups::partition(&m).second_row(Layout::Desktop);
        assert!(row.shown);
        assert!(!row.only_combined);
    }

    #[test]
    fn test_mobile_second_row_with_any_children() {
        let m = soccer_with(vec![child("0xs", BetType::Spread, 0.5, 0.5)], None);
        let groups = ChildMarketGroups::partition(&m);
        assert!(groups.second_row(Layout::Mobile).shown);
        assert!(!groups.second_row(Layout::Desktop).shown);

        let bare = market(9011, 0.4, 0.3);
        assert!(!ChildMarketGroups::partition(&bare).second_row(Layout::Mobile).shown);
    }

    #[test]
    fn test_only_combined_in_second_row() {
        let m = soccer_with(
            vec![
                child("0xs", BetType::Spread, 0.5, 0.5),
                child("0xt", BetType::Total, 0.5, 0.5),
            ],
            Some(3),
        );
        let groups = ChildMarketGroups::partition(&m);
        assert!(groups.second_row(Layout::Desktop).only_combined);
        assert!(!groups.second_row(Layout::Mobile).only_combined);

        let rows = OddsRows::plan(&groups, Layout::Desktop, true, true);
        assert_eq!(
            rows.first,
            vec![
                OddsSlot::Parent,
                OddsSlot::Child("0xs".into()),
                OddsSlot::Child("0xt".into())
            ]
        );
        assert_eq!(rows.second, vec![OddsSlot::Combined]);
        assert!(rows.third.is_empty());
    }

    #[test]
    fn test_double_chance_disables_only_combined() {
        let m = soccer_with(
            vec![
                child("0xdc1", BetType::DoubleChance, 0.7, 0.0),
                child("0xdc2", BetType::DoubleChance, 0.7, 0.0),
                child("0xdc3", BetType::DoubleChance, 0.7, 0.0),
                child("0xs", BetType::Spread, 0.5, 0.5),
                child("0xt", BetType::Total, 0.5, 0.5),
            ],
            Some(2),
        );
        let groups = ChildMarketGroups::partition(&m);
        let row = groups.second_row(Layout::Desktop);
        assert!(row.shown);
        assert!(!row.only_combined);

        let rows = OddsRows::plan(&groups, Layout::Desktop, true, true);
        assert_eq!(rows.first, vec![OddsSlot::Parent, OddsSlot::DoubleChance]);
        assert_eq!(
            rows.second,
            vec![OddsSlot::Child("0xs".into()), OddsSlot::Child("0xt".into())]
        );
        assert_eq!(rows.third, vec![OddsSlot::Combined]);
    }

    #[test]
    fn test_mobile_rows() {
        let m = soccer_with(
            vec![
                child("0xdc", BetType::DoubleChance, 0.7, 0.0),
                child("0xs", BetType::Spread, 0.5, 0.5),
            ],
            Some(0),
        );
        let groups = ChildMarketGroups::partition(&m);

        let collapsed = OddsRows::plan(&groups, Layout::Mobile, true, false);
        assert_eq!(collapsed.first, vec![OddsSlot::Parent]);
        assert!(collapsed.second.is_empty());

        let expanded = OddsRows::plan(&groups, Layout::Mobile, true, true);
        assert_eq!(
            expanded.second,
            vec![OddsSlot::DoubleChance, OddsSlot::Child("0xs".into())]
        );
        assert_eq!(expanded.third, vec![OddsSlot::Combined]);
        assert!(!expanded.player_props);
    }

    #[test]
    fn test_no_rows_without_odds() {
        let m = soccer_with(vec![child("0xs", BetType::Spread, 0.5, 0.5)], None);
        let rows = OddsRows::plan(&ChildMarketGroups::partition(&m), Layout::Desktop, false, true);
        assert_eq!(rows, OddsRows::default());
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Mobile".parse::<Layout>(), Ok(Layout::Mobile));
        assert_eq!(" desktop ".parse::<Layout>(), Ok(Layout::Desktop));
        assert!("tablet".parse::<Layout>().is_err());
    }
}
