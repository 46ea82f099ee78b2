//! Match state machine: status transitions, score edits and the history ledger.

use chrono::Utc;

use crate::models::{
    Match, MatchHistoryEntry, MatchId, MatchStatus, PlayerSlot, Tournament, TournamentError,
};

/// A requested change to one match: a status transition or a single score edit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchAction {
    SetStatus(MatchStatus),
    SetScore { slot: PlayerSlot, value: Option<i32> },
}

/// Parse a raw score field: empty clears the score, an integer sets it,
/// anything else is rejected.
pub fn parse_score_input(raw: &str) -> Result<Option<i32>, TournamentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| TournamentError::InvalidScoreInput(raw.to_string()))
}

/// Apply one action to a match, returning the updated match.
///
/// Walkovers and disqualification are normalized to `Completed` with fixed
/// scores; moving back to `Scheduled` or `In-Progress` clears both scores;
/// direct completion requires both scores to be present already. Every
/// accepted action appends exactly one history entry recording the old and
/// new (scores, status) triples.
pub fn apply_match_action(
    current: &Match,
    action: &MatchAction,
    changed_by: &str,
) -> Result<Match, TournamentError> {
    let old_state = current.snapshot();

    let (score_p1, score_p2, status, reason) = match action {
        MatchAction::SetStatus(requested) => {
            let (score_p1, score_p2, status) = match requested {
                MatchStatus::WalkoverP1 => (Some(1), Some(0), MatchStatus::Completed),
                MatchStatus::WalkoverP2 => (Some(0), Some(1), MatchStatus::Completed),
                MatchStatus::Disqualified => (Some(0), Some(0), MatchStatus::Completed),
                MatchStatus::Scheduled => (None, None, MatchStatus::Scheduled),
                MatchStatus::InProgress => (None, None, MatchStatus::InProgress),
                MatchStatus::Completed => {
                    if current.score_p1.is_none() || current.score_p2.is_none() {
                        return Err(TournamentError::MissingScores);
                    }
                    (current.score_p1, current.score_p2, MatchStatus::Completed)
                }
            };
            let reason = format!("Status changed to {}", requested);
            (score_p1, score_p2, status, reason)
        }
        MatchAction::SetScore { slot, value } => {
            let (score_p1, score_p2) = match slot {
                PlayerSlot::P1 => (*value, current.score_p2),
                PlayerSlot::P2 => (current.score_p1, *value),
            };
            let reason = format!("Score updated for {}", slot);
            (score_p1, score_p2, current.status, reason)
        }
    };

    let mut updated = current.clone();
    updated.score_p1 = score_p1;
    updated.score_p2 = score_p2;
    updated.status = status;
    updated.history.push(MatchHistoryEntry {
        timestamp: Utc::now(),
        changed_by: changed_by.to_string(),
        old_state,
        new_state: updated.snapshot(),
        reason,
    });
    Ok(updated)
}

/// Apply an action to the match with the given id, splicing the result back
/// into a new tournament value. The rest of the tournament is untouched.
pub fn update_match(
    tournament: &Tournament,
    match_id: MatchId,
    action: &MatchAction,
    changed_by: &str,
) -> Result<Tournament, TournamentError> {
    let mut updated = tournament.clone();
    let slot = updated
        .fixtures
        .iter_mut()
        .flat_map(|f| f.groups.iter_mut())
        .flat_map(|g| g.matches.iter_mut())
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    *slot = apply_match_action(slot, action, changed_by)?;
    Ok(updated)
}
