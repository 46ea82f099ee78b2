//! Groups, matches and the per-match history ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::player::PlayerId;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Lifecycle status of a match.
///
/// `WalkoverP1`, `WalkoverP2` and `Disqualified` are requested statuses that
/// the state machine normalizes into `Completed` with fixed scores; a stored
/// match only ever holds `Scheduled`, `InProgress` or `Completed`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    #[serde(rename = "In-Progress")]
    InProgress,
    Completed,
    #[serde(rename = "Walkover P1")]
    WalkoverP1,
    #[serde(rename = "Walkover P2")]
    WalkoverP2,
    Disqualified,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::InProgress => "In-Progress",
            MatchStatus::Completed => "Completed",
            MatchStatus::WalkoverP1 => "Walkover P1",
            MatchStatus::WalkoverP2 => "Walkover P2",
            MatchStatus::Disqualified => "Disqualified",
        };
        write!(f, "{}", text)
    }
}

/// Which side of a match a score edit targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerSlot {
    P1,
    P2,
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSlot::P1 => write!(f, "P1"),
            PlayerSlot::P2 => write!(f, "P2"),
        }
    }
}

/// Scores-and-status triple recorded on both sides of a history entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub score_p1: Option<i32>,
    pub score_p2: Option<i32>,
    pub status: MatchStatus,
}

/// One audit entry; appended on every accepted edit, never rewritten.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub changed_by: String,
    pub old_state: MatchSnapshot,
    pub new_state: MatchSnapshot,
    pub reason: String,
}

/// A single round-robin match between two players of one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub score_p1: Option<i32>,
    pub score_p2: Option<i32>,
    pub status: MatchStatus,
    /// Append-only audit trail of every score and status change.
    pub history: Vec<MatchHistoryEntry>,
}

impl Match {
    /// Create a scheduled match with no scores and an empty history.
    pub fn new(player1_id: PlayerId, player2_id: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1_id,
            player2_id,
            score_p1: None,
            score_p2: None,
            status: MatchStatus::Scheduled,
            history: Vec::new(),
        }
    }

    /// Current (scores, status) triple, as recorded in history entries.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            score_p1: self.score_p1,
            score_p2: self.score_p2,
            status: self.status,
        }
    }
}

/// A fixed subset of a category's players who play a full round robin.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Member players in assignment order (4 to 6 of them).
    pub player_ids: Vec<PlayerId>,
    pub matches: Vec<Match>,
}

impl Group {
    /// Create a group with the given members and no matches yet.
    pub fn new(name: impl Into<String>, player_ids: Vec<PlayerId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            player_ids,
            matches: Vec::new(),
        }
    }
}

/// All groups generated for one (category, event type) pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryFixture {
    pub category: String,
    /// Event type, e.g. "Men Singles"; `type` in the JSON document.
    #[serde(rename = "type")]
    pub event_type: String,
    pub groups: Vec<Group>,
}

impl CategoryFixture {
    /// Whether this fixture is keyed by the given (category, event type) pair.
    pub fn is_for(&self, category: &str, event_type: &str) -> bool {
        self.category == category && self.event_type == event_type
    }
}
