//! Roster management: player registration, edits and category renames.

use crate::models::{Player, PlayerId, Tournament, TournamentError, MAX_PLAYER_CATEGORIES};

/// Registration fields for adding or updating a player.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlayerDetails {
    pub name: String,
    pub mobile_number: String,
    pub categories: Vec<String>,
    pub fee_paid: bool,
}

fn validate(details: &PlayerDetails) -> Result<(), TournamentError> {
    if details.name.trim().is_empty()
        || details.mobile_number.trim().is_empty()
        || details.categories.is_empty()
    {
        return Err(TournamentError::IncompletePlayer);
    }
    if details.categories.len() > MAX_PLAYER_CATEGORIES {
        return Err(TournamentError::TooManyCategories);
    }
    Ok(())
}

/// Register a new player.
pub fn add_player(
    tournament: &Tournament,
    details: PlayerDetails,
) -> Result<Tournament, TournamentError> {
    validate(&details)?;
    let mut updated = tournament.clone();
    updated.players.push(Player::new(
        details.name.trim(),
        details.mobile_number.trim(),
        details.categories,
        details.fee_paid,
    ));
    Ok(updated)
}

/// Update an existing player's attributes, preserving their id.
pub fn update_player(
    tournament: &Tournament,
    player_id: PlayerId,
    details: PlayerDetails,
) -> Result<Tournament, TournamentError> {
    validate(&details)?;
    let mut updated = tournament.clone();
    let player = updated
        .players
        .iter_mut()
        .find(|p| p.id == player_id)
        .ok_or(TournamentError::PlayerNotFound(player_id))?;
    player.name = details.name.trim().to_string();
    player.mobile_number = details.mobile_number.trim().to_string();
    player.categories = details.categories;
    player.fee_paid = details.fee_paid;
    Ok(updated)
}

/// Remove a player from the roster.
///
/// Existing fixtures are left alone; a group referencing the removed player
/// keeps the stale id until its fixture is regenerated.
pub fn remove_player(
    tournament: &Tournament,
    player_id: PlayerId,
) -> Result<Tournament, TournamentError> {
    if tournament.player(player_id).is_none() {
        return Err(TournamentError::PlayerNotFound(player_id));
    }
    let mut updated = tournament.clone();
    updated.players.retain(|p| p.id != player_id);
    Ok(updated)
}

/// Rename a category across settings, player memberships and fixture keys.
///
/// Renaming to the current name is a no-op.
pub fn rename_category(
    tournament: &Tournament,
    old_name: &str,
    new_name: &str,
) -> Result<Tournament, TournamentError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(TournamentError::EmptyCategoryName);
    }
    if !tournament.settings.categories.iter().any(|c| c == old_name) {
        return Err(TournamentError::UnknownCategory(old_name.to_string()));
    }
    if new_name == old_name {
        return Ok(tournament.clone());
    }
    if tournament.settings.categories.iter().any(|c| c == new_name) {
        return Err(TournamentError::CategoryNameTaken(new_name.to_string()));
    }

    let mut updated = tournament.clone();
    for category in &mut updated.settings.categories {
        if category == old_name {
            *category = new_name.to_string();
        }
    }
    for player in &mut updated.players {
        for category in &mut player.categories {
            if category == old_name {
                *category = new_name.to_string();
            }
        }
    }
    for fixture in &mut updated.fixtures {
        if fixture.category == old_name {
            fixture.category = new_name.to_string();
        }
    }
    Ok(updated)
}
