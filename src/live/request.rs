use thiserror::Error;

use crate::models::{LiveResultRequest, Market};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameIdError {
    #[error("game id is not valid hex: {0}")]
    InvalidHex(String),
    #[error("game id is not ASCII: {0}")]
    NotAscii(String),
}

/// Decode the on-chain bytes32 game id into the provider's game id.
/// Padding NUL bytes are dropped.
pub fn decode_game_id(game_id: &str) -> Result<String, GameIdError> {
    let digits = game_id
        .strip_prefix("0x")
        .or_else(|| game_id.strip_prefix("0X"))
        .unwrap_or(game_id);

    let bytes = hex::decode(digits).map_err(|_| GameIdError::InvalidHex(game_id.to_string()))?;
    if !bytes.is_ascii() {
        return Err(GameIdError::NotAscii(game_id.to_string()));
    }

    let decoded: String = bytes.into_iter().map(char::from).collect();
    Ok(decoded.trim_matches('\0').to_string())
}

impl LiveResultRequest {
    pub fn for_market(market: &Market) -> Result<Self, GameIdError> {
        Ok(Self {
            game_id: decode_game_id(&market.game_id)?,
            match_date: market.maturity_date.format("%Y-%m-%d").to_string(),
            sport_tag: market.sport_tag(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::derive::test_support::market;

    #[test]
    fn test_decode_padded_game_id() {
        let hex = format!("0x{}{}", hex::encode("39586124"), "00".repeat(24));
        assert_eq!(decode_game_id(&hex).unwrap(), "39586124");
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(decode_game_id("0xzz"), Err(GameIdError::InvalidHex(_))));
        assert!(matches!(decode_game_id("0xff00"), Err(GameIdError::NotAscii(_))));
    }

    #[test]
    fn test_request_for_market() {
        let mut m = market(9153, 0.5, 0.5);
        m.game_id = format!("0x{}", hex::encode("abc"));
        m.maturity_date = Utc.with_ymd_and_hms(2024, 6, 2, 23, 30, 0).unwrap();

        let request = LiveResultRequest::for_market(&m).unwrap();
        assert_eq!(request.game_id, "abc");
        assert_eq!(request.match_date, "2024-06-02");
        assert_eq!(request.sport_tag, 9153);
    }
}
