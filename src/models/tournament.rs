//! Tournament document, settings and error type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::fixture::{CategoryFixture, Match, MatchId};
use crate::models::player::{Player, PlayerId, MAX_PLAYER_CATEGORIES};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 4 eligible players in the category; no partition attempted.
    InsufficientPlayers { found: usize },
    /// The player count cannot be split into groups of 4 to 6.
    UnpartitionableCount(usize),
    /// Round-robin expansion asked for a group with fewer than 2 members.
    DegenerateGroup,
    /// Direct completion requested while a score is still missing.
    MissingScores,
    /// A score edit supplied a non-numeric, non-empty value.
    InvalidScoreInput(String),
    /// No match with this id anywhere in the fixtures.
    MatchNotFound(MatchId),
    /// No player with this id in the roster.
    PlayerNotFound(PlayerId),
    /// Player registration is missing a name, mobile number or category.
    IncompletePlayer,
    /// Player registration lists more than the permitted categories.
    TooManyCategories,
    /// The named category is not in the tournament settings.
    UnknownCategory(String),
    /// A category with the target name already exists.
    CategoryNameTaken(String),
    /// A category rename supplied a blank target name.
    EmptyCategoryName,
    /// Publish preconditions not met; carries the first blocker.
    NotPublishable(&'static str),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientPlayers { found } => {
                write!(f, "A minimum of 4 players is required to generate fixtures (found {})", found)
            }
            TournamentError::UnpartitionableCount(count) => {
                write!(f, "Cannot split {} players into groups of 4 to 6", count)
            }
            TournamentError::DegenerateGroup => {
                write!(f, "A group needs at least 2 members for a round robin")
            }
            TournamentError::MissingScores => {
                write!(f, "Please enter both scores before marking a match as completed")
            }
            TournamentError::InvalidScoreInput(raw) => write!(f, "Invalid score input: {:?}", raw),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::IncompletePlayer => {
                write!(f, "Name, mobile number and at least one category are required")
            }
            TournamentError::TooManyCategories => {
                write!(f, "A player can be in at most {} categories", MAX_PLAYER_CATEGORIES)
            }
            TournamentError::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            TournamentError::CategoryNameTaken(name) => {
                write!(f, "Category name already exists: {}", name)
            }
            TournamentError::EmptyCategoryName => write!(f, "Category name cannot be empty"),
            TournamentError::NotPublishable(reason) => write!(f, "Cannot publish: {}", reason),
        }
    }
}

/// Unique identifier for a tournament document.
pub type TournamentId = Uuid;

/// Standard event types offered to hosts when configuring a tournament.
pub const STANDARD_EVENT_TYPES: [&str; 5] = [
    "Men Singles",
    "Men Doubles",
    "Women Singles",
    "Women Doubles",
    "Mixed Doubles",
];

/// Standard age-bracket categories offered to hosts.
pub const STANDARD_CATEGORIES: [&str; 6] = ["Open", "30+", "40+", "50+", "60+", "70+"];

/// Publication lifecycle of a tournament document.
///
/// `Publishing` is an in-flight marker kept for document compatibility; the
/// synchronous publish operation moves Draft straight to Published.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TournamentStatus {
    #[default]
    Draft,
    Publishing,
    Published,
}

/// Name plus the configured event types and player categories.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    pub name: String,
    /// Event types (e.g. "Men Singles"); combined with a category to key fixtures.
    pub types: Vec<String>,
    /// Player eligibility brackets (e.g. "Open", "40+").
    pub categories: Vec<String>,
}

/// Full tournament document: settings, roster, fixtures and publish state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub settings: TournamentSettings,
    pub players: Vec<Player>,
    pub fixtures: Vec<CategoryFixture>,
    pub is_published: bool,
    pub status: TournamentStatus,
    /// Opaque document-store id from the last sync, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
}

impl Tournament {
    /// Create an empty draft tournament with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            settings: TournamentSettings {
                name: name.into(),
                types: Vec::new(),
                categories: Vec::new(),
            },
            players: Vec::new(),
            fixtures: Vec::new(),
            is_published: false,
            status: TournamentStatus::Draft,
            remote_id: None,
        }
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The fixture set keyed by (category, event type), if one exists.
    pub fn fixture(&self, category: &str, event_type: &str) -> Option<&CategoryFixture> {
        self.fixtures.iter().find(|f| f.is_for(category, event_type))
    }

    /// Find a match anywhere in the fixtures by id.
    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.fixtures
            .iter()
            .flat_map(|f| f.groups.iter())
            .flat_map(|g| g.matches.iter())
            .find(|m| m.id == id)
    }
}
