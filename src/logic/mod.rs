//! Tournament business logic: fixtures, scoring, roster, settings, publishing.

mod fixtures;
mod partition;
mod publish;
mod roster;
mod round_robin;
mod scoring;
mod setup;

pub use fixtures::build_fixtures;
pub use partition::{group_name, partition_players, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
pub use publish::{publish, publish_blocker};
pub use roster::{add_player, remove_player, rename_category, update_player, PlayerDetails};
pub use round_robin::round_robin_matches;
pub use scoring::{apply_match_action, parse_score_input, update_match, MatchAction};
pub use setup::update_settings;
