//! Sport tag ids used by the markets API.

/// Mixed martial arts, results are reported as win/loss with the round
pub const ROUND_BASED_SPORT_TAG: u32 = 9007;

pub const FORMULA_1_TAG: u32 = 9445;
pub const MOTOGP_TAG: u32 = 9497;
pub const MOTORSPORT_TAGS: &[u32] = &[FORMULA_1_TAG, MOTOGP_TAG];

pub const GOLF_HEAD_TO_HEAD_TAG: u32 = 100121;
pub const GOLF_WINNER_TAG: u32 = 109121;
pub const GOLF_TAGS: &[u32] = &[GOLF_HEAD_TO_HEAD_TAG, GOLF_WINNER_TAG];

pub const TENNIS_GRAND_SLAM_TAG: u32 = 9153;
pub const TENNIS_MASTERS_TAG: u32 = 9156;
pub const TENNIS_TAGS: &[u32] = &[TENNIS_GRAND_SLAM_TAG, TENNIS_MASTERS_TAG];

pub const FIFA_WC_TAG: u32 = 9018;
pub const FIFA_WC_U20_TAG: u32 = 9296;
pub const IIHF_WC_TAG: u32 = 9033;

pub const UEFA_CHAMPIONS_LEAGUE_TAG: u32 = 9016;
pub const UEFA_EUROPA_LEAGUE_TAG: u32 = 9017;
pub const UEFA_EURO_QUALIFICATIONS_TAG: u32 = 9050;
pub const UEFA_CONFERENCE_LEAGUE_TAG: u32 = 9409;
pub const UEFA_TAGS: &[u32] = &[
    UEFA_CHAMPIONS_LEAGUE_TAG,
    UEFA_EUROPA_LEAGUE_TAG,
    UEFA_EURO_QUALIFICATIONS_TAG,
    UEFA_CONFERENCE_LEAGUE_TAG,
];

/// Sports whose live data and tournament info come from Enetpulse
pub const ENETPULSE_SPORTS: &[u32] = &[
    FIFA_WC_TAG,
    FIFA_WC_U20_TAG,
    IIHF_WC_TAG,
    UEFA_CHAMPIONS_LEAGUE_TAG,
    UEFA_EUROPA_LEAGUE_TAG,
    UEFA_EURO_QUALIFICATIONS_TAG,
    UEFA_CONFERENCE_LEAGUE_TAG,
    TENNIS_GRAND_SLAM_TAG,
    TENNIS_MASTERS_TAG,
    FORMULA_1_TAG,
    MOTOGP_TAG,
];

/// Sports whose tournament info comes from JSON odds
pub const JSON_ODDS_SPORTS: &[u32] = &[GOLF_HEAD_TO_HEAD_TAG, GOLF_WINNER_TAG];
