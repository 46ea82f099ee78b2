//! Settings: wholesale replacement of name, event types and categories.

use crate::models::{Tournament, TournamentSettings};

/// Replace the tournament settings.
///
/// Removing a category or type here does not touch existing players or
/// fixtures; a removed name simply stops being offered for new fixtures.
pub fn update_settings(tournament: &Tournament, settings: TournamentSettings) -> Tournament {
    let mut updated = tournament.clone();
    updated.settings = settings;
    updated
}
