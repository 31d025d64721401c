use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Child market bet type code range reserved for player props
const PLAYER_PROPS_CODES: std::ops::RangeInclusive<u32> = 11000..=11999;

/// Bet type of a market, as encoded on the contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum BetType {
    /// Parent market (moneyline)
    Winner,
    Spread,
    Total,
    DoubleChance,
    /// Any player prop (touchdowns, passing yards, ...), code kept verbatim
    PlayerProps(u32),
    /// Bet type this crate does not group
    Other(u32),
}

impl BetType {
    pub fn code(&self) -> u32 {
        match self {
            BetType::Winner => 0,
            BetType::Spread => 10001,
            BetType::Total => 10002,
            BetType::DoubleChance => 10003,
            BetType::PlayerProps(code) | BetType::Other(code) => *code,
        }
    }

    pub fn is_player_props(&self) -> bool {
        matches!(self, BetType::PlayerProps(_))
    }

    pub fn is_spread_or_total(&self) -> bool {
        matches!(self, BetType::Spread | BetType::Total)
    }
}

impl From<u32> for BetType {
    fn from(code: u32) -> Self {
        match code {
            0 => BetType::Winner,
            10001 => BetType::Spread,
            10002 => BetType::Total,
            10003 => BetType::DoubleChance,
            c if PLAYER_PROPS_CODES.contains(&c) => BetType::PlayerProps(c),
            c => BetType::Other(c),
        }
    }
}

impl From<BetType> for u32 {
    fn from(bet_type: BetType) -> Self {
        bet_type.code()
    }
}

/// Sports market (parent) as returned by the markets API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market contract address
    pub address: String,

    /// On-chain game id (hex encoded bytes32)
    pub game_id: String,

    pub home_team: String,

    /// Empty for one-sided markets
    #[serde(default)]
    pub away_team: String,

    /// Sport/league classifiers, the first one is the primary sport tag
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<u32>,

    /// Game start (maturity) time
    #[serde(with = "chrono::serde::ts_seconds")]
    pub maturity_date: DateTime<Utc>,

    pub home_odds: f64,

    pub away_odds: f64,

    /// Draw odds, only for sports with a draw outcome
    #[serde(default)]
    pub draw_odds: Option<f64>,

    #[serde(default)]
    pub is_resolved: bool,

    #[serde(default)]
    pub is_canceled: bool,

    #[serde(default)]
    pub is_paused: bool,

    /// Single competitor market (race winner, tournament winner)
    #[serde(default)]
    pub is_one_side_market: bool,

    #[serde(default)]
    pub home_score: Option<u32>,

    #[serde(default)]
    pub away_score: Option<u32>,

    #[serde(default)]
    pub child_markets: Vec<ChildMarket>,

    /// Precomputed parent + child combinations, absent when the API has none
    #[serde(default)]
    pub combined_markets_data: Option<Vec<CombinedMarketPosition>>,
}

impl Market {
    /// Primary sport tag (0 when the market carries no tags)
    pub fn sport_tag(&self) -> u32 {
        self.tags.first().copied().unwrap_or_default()
    }
}

/// Market derived from a parent event (double chance, spread, total, player props)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMarket {
    pub address: String,

    pub bet_type: BetType,

    pub home_odds: f64,

    pub away_odds: f64,

    #[serde(default)]
    pub draw_odds: Option<f64>,

    /// Spread handicap or total line
    #[serde(default)]
    pub line: Option<f64>,
}

/// Position within a market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Home,
    Away,
    Draw,
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Position::Home),
            1 => Ok(Position::Away),
            2 => Ok(Position::Draw),
            other => Err(format!("invalid position: {}", other)),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        match position {
            Position::Home => 0,
            Position::Away => 1,
            Position::Draw => 2,
        }
    }
}

/// One leg of a combined position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedLeg {
    pub market_address: String,
    pub position: Position,
}

/// Precomputed combination of parent and child positions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedMarketPosition {
    pub markets: Vec<CombinedLeg>,

    /// Combined implied probability
    pub total_odd: f64,

    #[serde(default)]
    pub total_bonus: Option<f64>,
}

/// Collection of markets indexed by address
pub type ActiveMarkets = std::collections::HashMap<String, Market>;

/// Tags come as numbers or numeric strings depending on the API version
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tag {
        Number(u32),
        Text(String),
    }

    let raw: Vec<Tag> = Vec::deserialize(deserializer)?;
    raw.into_iter()
        .map(|tag| match tag {
            Tag::Number(n) => Ok(n),
            Tag::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid tag: {}", s))),
        })
        .collect()
}
