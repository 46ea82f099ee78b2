//! Fixture generation: partition a category's players and expand each group.

use crate::logic::partition::partition_players;
use crate::logic::round_robin::round_robin_matches;
use crate::models::{CategoryFixture, Tournament, TournamentError};

/// Build (or rebuild) the fixture set for one (category, event type) pair.
///
/// Filters the roster to players registered in `category`, partitions them
/// into groups and expands each group into its round robin. On success the
/// returned tournament carries the new fixture in place of any previous one
/// under the same key; the replacement discards the old groups, matches and
/// history outright. On error the caller's value is untouched.
pub fn build_fixtures(
    tournament: &Tournament,
    category: &str,
    event_type: &str,
) -> Result<Tournament, TournamentError> {
    let eligible: Vec<_> = tournament
        .players
        .iter()
        .filter(|p| p.in_category(category))
        .cloned()
        .collect();

    let mut groups = partition_players(&eligible)?;
    for group in &mut groups {
        let matches = round_robin_matches(group)?;
        group.matches = matches;
    }

    let mut updated = tournament.clone();
    updated.fixtures.retain(|f| !f.is_for(category, event_type));
    updated.fixtures.push(CategoryFixture {
        category: category.to_string(),
        event_type: event_type.to_string(),
        groups,
    });
    Ok(updated)
}
