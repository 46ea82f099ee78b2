//! Round-robin expansion: one match per unordered pair of group members.

use crate::models::{Group, Match, TournamentError};

/// Generate the full round robin for a group: `k * (k - 1) / 2` matches, one
/// per unordered pair, in ascending (i, j) order over the member list.
pub fn round_robin_matches(group: &Group) -> Result<Vec<Match>, TournamentError> {
    let members = &group.player_ids;
    if members.len() < 2 {
        return Err(TournamentError::DegenerateGroup);
    }

    let mut matches = Vec::with_capacity(members.len() * (members.len() - 1) / 2);
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            matches.push(Match::new(members[i], members[j]));
        }
    }
    Ok(matches)
}
