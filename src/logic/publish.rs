//! Publish gate: readiness checks and the Draft to Published transition.

use crate::models::{Tournament, TournamentError, TournamentStatus};

/// First unmet publish precondition, if any (checked in dashboard order).
pub fn publish_blocker(tournament: &Tournament) -> Option<&'static str> {
    if tournament.settings.name.trim().is_empty() {
        return Some("Tournament name is not set.");
    }
    if tournament.settings.types.is_empty() {
        return Some("No tournament types selected.");
    }
    if tournament.settings.categories.is_empty() {
        return Some("No player categories selected.");
    }
    if tournament.players.is_empty() {
        return Some("No players have been registered.");
    }
    if tournament.fixtures.is_empty() {
        return Some("No fixtures have been generated.");
    }
    None
}

/// Publish the tournament, making it visible to players.
pub fn publish(tournament: &Tournament) -> Result<Tournament, TournamentError> {
    if let Some(reason) = publish_blocker(tournament) {
        return Err(TournamentError::NotPublishable(reason));
    }
    let mut updated = tournament.clone();
    updated.is_published = true;
    updated.status = TournamentStatus::Published;
    Ok(updated)
}
