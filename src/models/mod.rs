//! Data structures for the tournament document: players, groups, matches.

mod fixture;
mod player;
mod tournament;

pub use fixture::{
    CategoryFixture, Group, GroupId, Match, MatchHistoryEntry, MatchId, MatchSnapshot,
    MatchStatus, PlayerSlot,
};
pub use player::{Player, PlayerId, MAX_PLAYER_CATEGORIES};
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentSettings, TournamentStatus,
    STANDARD_CATEGORIES, STANDARD_EVENT_TYPES,
};
