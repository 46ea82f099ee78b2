//! Integration tests for fixture generation and regeneration.

use racket_tournament_web::{
    build_fixtures, update_match, MatchAction, MatchStatus, Player, Tournament, TournamentError,
};

fn tournament_with_open_players(n: usize) -> Tournament {
    let mut t = Tournament::new("Spring Open");
    t.settings.types = vec!["Men Singles".into()];
    t.settings.categories = vec!["Open".into(), "40+".into()];
    for i in 0..n {
        t.players.push(Player::new(
            format!("P{i}"),
            format!("9{i:03}"),
            vec!["Open".into()],
            i % 2 == 0,
        ));
    }
    t
}

#[test]
fn builds_groups_and_matches_for_a_category() {
    let t = tournament_with_open_players(11);
    let updated = build_fixtures(&t, "Open", "Men Singles").unwrap();
    assert_eq!(updated.fixtures.len(), 1);
    let fixture = &updated.fixtures[0];
    assert_eq!(fixture.category, "Open");
    assert_eq!(fixture.event_type, "Men Singles");
    assert_eq!(fixture.groups.len(), 2);
    // 11 players -> groups of 6 and 5 -> 15 + 10 matches
    let match_total: usize = fixture.groups.iter().map(|g| g.matches.len()).sum();
    assert_eq!(match_total, 25);
    // input value untouched
    assert!(t.fixtures.is_empty());
}

#[test]
fn ignores_players_outside_the_category() {
    let mut t = tournament_with_open_players(8);
    t.players.push(Player::new("Vet", "8000", vec!["40+".into()], true));
    let updated = build_fixtures(&t, "Open", "Men Singles").unwrap();
    let fixture = updated.fixture("Open", "Men Singles").unwrap();
    let assigned: usize = fixture.groups.iter().map(|g| g.player_ids.len()).sum();
    assert_eq!(assigned, 8);
}

#[test]
fn too_few_or_unsplittable_counts_fail_without_changes() {
    let t = tournament_with_open_players(3);
    assert!(matches!(
        build_fixtures(&t, "Open", "Men Singles"),
        Err(TournamentError::InsufficientPlayers { found: 3 })
    ));

    let t = tournament_with_open_players(7);
    assert!(matches!(
        build_fixtures(&t, "Open", "Men Singles"),
        Err(TournamentError::UnpartitionableCount(7))
    ));
    assert!(t.fixtures.is_empty());
}

#[test]
fn regeneration_discards_old_groups_matches_and_history() {
    let t = tournament_with_open_players(8);
    let first = build_fixtures(&t, "Open", "Men Singles").unwrap();
    let old_group_id = first.fixtures[0].groups[0].id;
    let match_id = first.fixtures[0].groups[0].matches[0].id;
    // record an edit so the first generation carries history
    let first = update_match(
        &first,
        match_id,
        &MatchAction::SetStatus(MatchStatus::InProgress),
        "admin",
    )
    .unwrap();

    let second = build_fixtures(&first, "Open", "Men Singles").unwrap();
    assert_eq!(second.fixtures.len(), 1);
    assert!(second.find_match(match_id).is_none());
    assert_ne!(second.fixtures[0].groups[0].id, old_group_id);
    for g in &second.fixtures[0].groups {
        for m in &g.matches {
            assert_eq!(m.status, MatchStatus::Scheduled);
            assert!(m.history.is_empty());
        }
    }
}

#[test]
fn different_event_types_keep_separate_fixtures() {
    let t = tournament_with_open_players(8);
    let t = build_fixtures(&t, "Open", "Men Singles").unwrap();
    let t = build_fixtures(&t, "Open", "Men Doubles").unwrap();
    assert_eq!(t.fixtures.len(), 2);
    assert!(t.fixture("Open", "Men Singles").is_some());
    assert!(t.fixture("Open", "Men Doubles").is_some());
}
