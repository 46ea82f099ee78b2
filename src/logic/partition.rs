//! Balanced partitioning of a category's players into groups of 4 to 6.

use rand::seq::SliceRandom;

use crate::models::{Group, Player, TournamentError};

/// Smallest permitted group size.
pub const MIN_GROUP_SIZE: usize = 4;
/// Largest permitted group size.
pub const MAX_GROUP_SIZE: usize = 6;

/// Split players into balanced groups of 4 to 6, using every player.
///
/// 1. Require at least 4 players.
/// 2. Feasibility: `min_groups = ceil(n/6)`, `max_groups = floor(n/4)`;
///    impossible when `min_groups > max_groups` (only n = 7 for n >= 4).
/// 3. Use `max_groups` groups (the most groups, so the shortest round
///    robins) and give the first `n % max_groups` groups one extra member.
/// 4. Shuffle before slicing, so assignment is random on every call.
pub fn partition_players(players: &[Player]) -> Result<Vec<Group>, TournamentError> {
    let n = players.len();
    if n < MIN_GROUP_SIZE {
        return Err(TournamentError::InsufficientPlayers { found: n });
    }

    let min_groups = n.div_ceil(MAX_GROUP_SIZE);
    let max_groups = n / MIN_GROUP_SIZE;
    if min_groups > max_groups {
        return Err(TournamentError::UnpartitionableCount(n));
    }

    let num_groups = max_groups;
    let base = n / num_groups;
    let remainder = n % num_groups;

    let mut ids: Vec<_> = players.iter().map(|p| p.id).collect();
    ids.shuffle(&mut rand::thread_rng());

    let mut members = ids.into_iter();
    let mut groups = Vec::with_capacity(num_groups);
    for index in 0..num_groups {
        let size = if index < remainder { base + 1 } else { base };
        let group_members: Vec<_> = members.by_ref().take(size).collect();
        groups.push(Group::new(group_name(index), group_members));
    }
    Ok(groups)
}

/// Sequential group label: "Group A" .. "Group Z", then "Group AA", "Group AB", ...
pub fn group_name(index: usize) -> String {
    format!("Group {}", letters(index))
}

fn letters(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label
}
