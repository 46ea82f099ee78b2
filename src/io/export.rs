//! CSV exports: roster, fixtures and match results.

use std::collections::HashMap;

use crate::io::CsvError;
use crate::models::{PlayerId, Tournament};

/// Roster export: one row per player, with up to two category columns.
pub fn players_csv(tournament: &Tournament) -> Result<String, CsvError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["PlayerID", "Name", "MobileNumber", "Category1", "Category2", "FeePaid"])?;
    for player in &tournament.players {
        let id = player.id.to_string();
        writer.write_record([
            id.as_str(),
            player.name.as_str(),
            player.mobile_number.as_str(),
            player.categories.first().map(String::as_str).unwrap_or(""),
            player.categories.get(1).map(String::as_str).unwrap_or(""),
            if player.fee_paid { "Yes" } else { "No" },
        ])?;
    }
    into_text(writer)
}

/// Fixture export: one row per group, members joined with " | ".
pub fn fixtures_csv(tournament: &Tournament) -> Result<String, CsvError> {
    let names = player_names(tournament);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Category", "Type", "Group", "Players"])?;
    for fixture in &tournament.fixtures {
        for group in &fixture.groups {
            let members = group
                .player_ids
                .iter()
                .map(|id| display_name(&names, *id))
                .collect::<Vec<_>>()
                .join(" | ");
            writer.write_record([
                fixture.category.as_str(),
                fixture.event_type.as_str(),
                group.name.as_str(),
                members.as_str(),
            ])?;
        }
    }
    into_text(writer)
}

/// Results export: one row per match with scores and status.
pub fn match_results_csv(tournament: &Tournament) -> Result<String, CsvError> {
    let names = player_names(tournament);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Category", "Type", "Group", "Player1", "Player2", "ScoreP1", "ScoreP2", "Status",
    ])?;
    for fixture in &tournament.fixtures {
        for group in &fixture.groups {
            for m in &group.matches {
                let score_p1 = m.score_p1.map(|v| v.to_string()).unwrap_or_default();
                let score_p2 = m.score_p2.map(|v| v.to_string()).unwrap_or_default();
                let status = m.status.to_string();
                writer.write_record([
                    fixture.category.as_str(),
                    fixture.event_type.as_str(),
                    group.name.as_str(),
                    display_name(&names, m.player1_id),
                    display_name(&names, m.player2_id),
                    score_p1.as_str(),
                    score_p2.as_str(),
                    status.as_str(),
                ])?;
            }
        }
    }
    into_text(writer)
}

fn player_names(tournament: &Tournament) -> HashMap<PlayerId, &str> {
    tournament
        .players
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect()
}

/// Stale ids (e.g. a removed player still in an old fixture) render as "N/A".
fn display_name<'a>(names: &HashMap<PlayerId, &'a str>, id: PlayerId) -> &'a str {
    names.get(&id).copied().unwrap_or("N/A")
}

fn into_text(writer: csv::Writer<Vec<u8>>) -> Result<String, CsvError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Malformed(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Malformed(e.to_string()))
}
