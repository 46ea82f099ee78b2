//! Integration tests for the match state machine and its history ledger.

use racket_tournament_web::{
    apply_match_action, build_fixtures, parse_score_input, update_match, Match, MatchAction,
    MatchStatus, Player, PlayerSlot, Tournament, TournamentError,
};
use uuid::Uuid;

fn blank_match() -> Match {
    Match::new(Uuid::new_v4(), Uuid::new_v4())
}

fn tournament_with_fixture() -> Tournament {
    let mut t = Tournament::new("Club Night");
    t.settings.types = vec!["Men Singles".into()];
    t.settings.categories = vec!["Open".into()];
    for i in 0..8 {
        t.players.push(Player::new(
            format!("P{i}"),
            format!("9{i:02}"),
            vec!["Open".into()],
            true,
        ));
    }
    build_fixtures(&t, "Open", "Men Singles").unwrap()
}

#[test]
fn walkover_p1_normalizes_to_completed_one_nil() {
    let m = blank_match();
    let updated =
        apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::WalkoverP1), "admin").unwrap();
    assert_eq!(updated.score_p1, Some(1));
    assert_eq!(updated.score_p2, Some(0));
    assert_eq!(updated.status, MatchStatus::Completed);
    assert_eq!(updated.history.len(), 1);
    let entry = &updated.history[0];
    assert_eq!(entry.changed_by, "admin");
    assert_eq!(entry.reason, "Status changed to Walkover P1");
    assert_eq!(entry.old_state, m.snapshot());
    assert_eq!(entry.new_state, updated.snapshot());
}

#[test]
fn walkover_p2_and_disqualification_fix_scores() {
    let m = blank_match();
    let w2 =
        apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::WalkoverP2), "admin").unwrap();
    assert_eq!(
        (w2.score_p1, w2.score_p2, w2.status),
        (Some(0), Some(1), MatchStatus::Completed)
    );
    let dq = apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::Disqualified), "admin")
        .unwrap();
    assert_eq!(
        (dq.score_p1, dq.score_p2, dq.status),
        (Some(0), Some(0), MatchStatus::Completed)
    );
    assert_eq!(dq.history[0].reason, "Status changed to Disqualified");
}

#[test]
fn direct_completion_requires_both_scores() {
    let m = blank_match();
    assert!(matches!(
        apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::Completed), "admin"),
        Err(TournamentError::MissingScores)
    ));

    let one_score = apply_match_action(
        &m,
        &MatchAction::SetScore { slot: PlayerSlot::P1, value: Some(21) },
        "admin",
    )
    .unwrap();
    assert!(matches!(
        apply_match_action(&one_score, &MatchAction::SetStatus(MatchStatus::Completed), "admin"),
        Err(TournamentError::MissingScores)
    ));

    let both = apply_match_action(
        &one_score,
        &MatchAction::SetScore { slot: PlayerSlot::P2, value: Some(15) },
        "admin",
    )
    .unwrap();
    let done =
        apply_match_action(&both, &MatchAction::SetStatus(MatchStatus::Completed), "admin")
            .unwrap();
    assert_eq!(done.status, MatchStatus::Completed);
    assert_eq!(done.score_p1, Some(21));
    assert_eq!(done.score_p2, Some(15));
}

#[test]
fn rejected_action_leaves_the_match_untouched() {
    let m = blank_match();
    let before = m.clone();
    assert!(apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::Completed), "admin")
        .is_err());
    assert_eq!(m, before);
    assert!(m.history.is_empty());
}

#[test]
fn moving_back_to_scheduled_or_in_progress_clears_scores() {
    let m = blank_match();
    let done =
        apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::WalkoverP1), "admin").unwrap();
    let back =
        apply_match_action(&done, &MatchAction::SetStatus(MatchStatus::Scheduled), "admin")
            .unwrap();
    assert_eq!(
        (back.score_p1, back.score_p2, back.status),
        (None, None, MatchStatus::Scheduled)
    );
    let live =
        apply_match_action(&done, &MatchAction::SetStatus(MatchStatus::InProgress), "admin")
            .unwrap();
    assert_eq!(
        (live.score_p1, live.score_p2, live.status),
        (None, None, MatchStatus::InProgress)
    );
    assert_eq!(live.history[1].reason, "Status changed to In-Progress");
}

#[test]
fn score_edits_keep_status_and_allow_clearing() {
    let m = blank_match();
    let m = apply_match_action(&m, &MatchAction::SetStatus(MatchStatus::InProgress), "admin")
        .unwrap();
    let m = apply_match_action(
        &m,
        &MatchAction::SetScore { slot: PlayerSlot::P1, value: Some(11) },
        "admin",
    )
    .unwrap();
    assert_eq!(m.status, MatchStatus::InProgress);
    assert_eq!(m.score_p1, Some(11));
    assert_eq!(m.history.last().unwrap().reason, "Score updated for P1");

    let m = apply_match_action(
        &m,
        &MatchAction::SetScore { slot: PlayerSlot::P1, value: None },
        "admin",
    )
    .unwrap();
    assert_eq!(m.score_p1, None);
    assert_eq!(m.status, MatchStatus::InProgress);
}

#[test]
fn history_chains_old_state_to_previous_new_state() {
    let m = blank_match();
    let initial = m.snapshot();
    let actions = [
        MatchAction::SetStatus(MatchStatus::InProgress),
        MatchAction::SetScore { slot: PlayerSlot::P1, value: Some(21) },
        MatchAction::SetScore { slot: PlayerSlot::P2, value: Some(18) },
        MatchAction::SetStatus(MatchStatus::Completed),
        MatchAction::SetStatus(MatchStatus::Scheduled),
    ];
    let mut current = m;
    for action in &actions {
        current = apply_match_action(&current, action, "admin").unwrap();
    }
    assert_eq!(current.history.len(), actions.len());
    assert_eq!(current.history[0].old_state, initial);
    for pair in current.history.windows(2) {
        assert_eq!(pair[1].old_state, pair[0].new_state);
    }
    assert_eq!(current.history.last().unwrap().new_state, current.snapshot());
}

#[test]
fn parse_score_input_rules() {
    assert_eq!(parse_score_input(""), Ok(None));
    assert_eq!(parse_score_input("   "), Ok(None));
    assert_eq!(parse_score_input("21"), Ok(Some(21)));
    assert_eq!(parse_score_input(" 3 "), Ok(Some(3)));
    assert_eq!(parse_score_input("-1"), Ok(Some(-1)));
    assert!(matches!(
        parse_score_input("abc"),
        Err(TournamentError::InvalidScoreInput(_))
    ));
    assert!(matches!(
        parse_score_input("2x"),
        Err(TournamentError::InvalidScoreInput(_))
    ));
}

#[test]
fn update_match_splices_only_the_target() {
    let t = tournament_with_fixture();
    let match_id = t.fixtures[0].groups[0].matches[0].id;
    let updated = update_match(
        &t,
        match_id,
        &MatchAction::SetStatus(MatchStatus::InProgress),
        "referee",
    )
    .unwrap();

    // original untouched
    assert_eq!(t.find_match(match_id).unwrap().status, MatchStatus::Scheduled);

    let m = updated.find_match(match_id).unwrap();
    assert_eq!(m.status, MatchStatus::InProgress);
    assert_eq!(m.history.len(), 1);
    assert_eq!(m.history[0].changed_by, "referee");

    let others_untouched = updated.fixtures[0]
        .groups
        .iter()
        .flat_map(|g| g.matches.iter())
        .filter(|m| m.id != match_id)
        .all(|m| m.history.is_empty() && m.status == MatchStatus::Scheduled);
    assert!(others_untouched);
}

#[test]
fn update_match_rejects_unknown_id() {
    let t = tournament_with_fixture();
    let missing = Uuid::new_v4();
    assert!(matches!(
        update_match(&t, missing, &MatchAction::SetStatus(MatchStatus::InProgress), "admin"),
        Err(TournamentError::MatchNotFound(id)) if id == missing
    ));
}
