//! Integration tests for the document store and the JSON document shape.

use racket_tournament_web::store::{DocumentStore, MemoryStore, StoreError};
use racket_tournament_web::{
    build_fixtures, update_match, MatchAction, MatchStatus, Player, Tournament,
};

fn populated_tournament() -> Tournament {
    let mut t = Tournament::new("Autumn Open");
    t.settings.types = vec!["Men Singles".into()];
    t.settings.categories = vec!["Open".into()];
    for i in 0..9 {
        t.players.push(Player::new(
            format!("P{i}"),
            format!("90{i}"),
            vec!["Open".into()],
            i % 2 == 0,
        ));
    }
    let t = build_fixtures(&t, "Open", "Men Singles").unwrap();
    let match_id = t.fixtures[0].groups[0].matches[0].id;
    update_match(
        &t,
        match_id,
        &MatchAction::SetStatus(MatchStatus::WalkoverP2),
        "admin",
    )
    .unwrap()
}

#[test]
fn save_and_load_round_trips_the_document() {
    let t = populated_tournament();
    let mut store = MemoryStore::new();
    let id = store.save(&t, None).unwrap();
    let loaded = store.load(&id).unwrap();
    assert_eq!(loaded, t);
}

#[test]
fn save_with_existing_id_updates_in_place() {
    let t = populated_tournament();
    let mut store = MemoryStore::new();
    let id = store.save(&t, None).unwrap();

    let mut renamed = t.clone();
    renamed.settings.name = "Autumn Open II".into();
    let second = store.save(&renamed, Some(&id)).unwrap();
    assert_eq!(second, id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.load(&id).unwrap().settings.name, "Autumn Open II");
}

#[test]
fn load_rejects_unknown_ids() {
    let store = MemoryStore::new();
    assert!(matches!(store.load("nope"), Err(StoreError::NotFound(_))));
}

#[test]
fn document_uses_the_published_field_names() {
    let t = populated_tournament();
    let value = serde_json::to_value(&t).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("isPublished").is_some());
    assert_eq!(value["status"], "Draft");

    let player = &value["players"][0];
    assert!(player.get("mobileNumber").is_some());
    assert!(player.get("feePaid").is_some());

    let fixture = &value["fixtures"][0];
    assert_eq!(fixture["type"], "Men Singles");
    let group = &fixture["groups"][0];
    assert!(group.get("playerIds").is_some());

    let m = &group["matches"][0];
    assert!(m.get("player1Id").is_some());
    assert!(m.get("scoreP1").is_some());
    // the walkover edit above targeted this match
    let entry = &m["history"][0];
    assert!(entry.get("changedBy").is_some());
    assert_eq!(entry["reason"], "Status changed to Walkover P2");
    assert_eq!(entry["oldState"]["status"], "Scheduled");
    assert_eq!(entry["newState"]["status"], "Completed");
    assert_eq!(entry["newState"]["scoreP2"], 1);
}

#[test]
fn status_strings_round_trip() {
    for (status, text) in [
        (MatchStatus::Scheduled, "Scheduled"),
        (MatchStatus::InProgress, "In-Progress"),
        (MatchStatus::Completed, "Completed"),
        (MatchStatus::WalkoverP1, "Walkover P1"),
        (MatchStatus::WalkoverP2, "Walkover P2"),
        (MatchStatus::Disqualified, "Disqualified"),
    ] {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(text));
        let parsed: MatchStatus = serde_json::from_value(serde_json::json!(text)).unwrap();
        assert_eq!(parsed, status);
    }
}
