use crate::models::LiveResultInfo;

/// Tournament label for an Enetpulse game: "| name | round", without the
/// leading separator on one-sided markets.
pub fn compose_enetpulse_label(info: &LiveResultInfo, one_sided: bool) -> String {
    let name = match info.tournament_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) if one_sided => name.to_string(),
        Some(name) => format!("| {}", name),
        None => String::new(),
    };

    let round = match info.tournament_round.as_deref().filter(|r| !r.is_empty()) {
        Some(round) => format!(" | {}", round),
        None => String::new(),
    };

    name + &round
}
