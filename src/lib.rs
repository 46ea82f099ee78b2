//! Racket tournament web app: library with models and business logic.

pub mod io;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    add_player, apply_match_action, build_fixtures, group_name, parse_score_input,
    partition_players, publish, publish_blocker, remove_player, rename_category,
    round_robin_matches, update_match, update_player, update_settings, MatchAction,
    PlayerDetails, MAX_GROUP_SIZE, MIN_GROUP_SIZE,
};
pub use models::{
    CategoryFixture, Group, GroupId, Match, MatchHistoryEntry, MatchId, MatchSnapshot,
    MatchStatus, Player, PlayerId, PlayerSlot, Tournament, TournamentError, TournamentId,
    TournamentSettings, TournamentStatus, MAX_PLAYER_CATEGORIES, STANDARD_CATEGORIES,
    STANDARD_EVENT_TYPES,
};
