//! Player data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in groups, matches and lookups).
pub type PlayerId = Uuid;

/// Maximum number of category memberships per player.
pub const MAX_PLAYER_CATEGORIES: usize = 2;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Contact key; also the duplicate-detection key for CSV import.
    pub mobile_number: String,
    /// Category memberships (at most [`MAX_PLAYER_CATEGORIES`]).
    pub categories: Vec<String>,
    pub fee_paid: bool,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        categories: Vec<String>,
        fee_paid: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mobile_number: mobile_number.into(),
            categories,
            fee_paid,
        }
    }

    /// Whether this player is registered in `category`.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}
