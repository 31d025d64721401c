use serde::{Deserialize, Serialize};

/// Live result snapshot of an in-progress game, as reported by a result provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveResultInfo {
    /// Provider game identifier
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub home_score: Option<u32>,

    #[serde(default)]
    pub away_score: Option<u32>,

    /// Current period (quarter, set, half, lap)
    #[serde(default)]
    pub period: Option<u32>,

    #[serde(default)]
    pub score_home_by_period: Vec<u32>,

    #[serde(default)]
    pub score_away_by_period: Vec<u32>,

    /// Game clock as displayed by the provider
    #[serde(default)]
    pub display_clock: Option<String>,

    /// Provider status string (e.g. "inprogress", "finished")
    #[serde(default)]
    pub status: Option<String>,

    /// League/tournament name (Enetpulse only)
    #[serde(default)]
    pub tournament_name: Option<String>,

    /// Tournament round (Enetpulse only)
    #[serde(default)]
    pub tournament_round: Option<String>,
}

/// Key used to ask a provider for a game's live data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveResultRequest {
    /// Game id decoded from the on-chain hex game id
    pub game_id: String,

    /// Match date (UTC, YYYY-MM-DD)
    pub match_date: String,

    /// Primary sport tag
    pub sport_tag: u32,
}

/// What a provider returned for one fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderUpdate {
    /// Live result to show on the card, if the provider exposes one
    pub live_result: Option<LiveResultInfo>,

    /// Tournament name (JSON-odds returns only this)
    pub tournament_name: Option<String>,
}

/// Map of market address -> latest live result
pub type LiveResultCache = std::collections::HashMap<String, LiveResultInfo>;

/// Sent to the card processor when a market's inputs changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUpdate {
    pub market_address: String,
}
