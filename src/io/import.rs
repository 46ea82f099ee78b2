//! CSV roster import.

use serde::{Deserialize, Serialize};

use crate::io::CsvError;
use crate::models::{Player, Tournament, MAX_PLAYER_CATEGORIES};

/// Column headers a roster CSV must carry, in any order.
pub const REQUIRED_IMPORT_HEADERS: [&str; 4] = ["Name", "MobileNumber", "Categories", "Paid(Y/N)"];

/// Outcome counts of one import run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportSummary {
    pub added: usize,
    pub skipped_duplicates: usize,
    pub skipped_invalid: usize,
}

#[derive(Debug, Deserialize)]
struct ImportRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "MobileNumber")]
    mobile_number: String,
    /// Pipe-delimited category list, e.g. "Open|40+".
    #[serde(rename = "Categories")]
    categories: String,
    #[serde(rename = "Paid(Y/N)")]
    paid: String,
}

/// Import players from CSV text, returning the grown roster and a summary.
///
/// Bad rows are skipped, never fatal: a row is invalid when a required field
/// is empty or the category cap is exceeded, and a duplicate when a player
/// with the same mobile number already holds one of the row's categories
/// (counting rows accepted earlier in the same file).
pub fn import_players_csv(
    tournament: &Tournament,
    csv_text: &str,
) -> Result<(Tournament, CsvImportSummary), CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_IMPORT_HEADERS
        .into_iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();
    if !missing.is_empty() {
        return Err(CsvError::MissingHeaders(missing.join(", ")));
    }

    let mut summary = CsvImportSummary::default();
    let mut imported: Vec<Player> = Vec::new();

    for record in reader.deserialize::<ImportRow>() {
        let row = match record {
            Ok(row) => row,
            Err(_) => {
                summary.skipped_invalid += 1;
                continue;
            }
        };

        let categories: Vec<String> = row
            .categories
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| resolve_category(&tournament.settings.categories, c))
            .collect();
        let name = row.name.trim();
        let mobile = row.mobile_number.trim();
        if name.is_empty()
            || mobile.is_empty()
            || categories.is_empty()
            || categories.len() > MAX_PLAYER_CATEGORIES
        {
            summary.skipped_invalid += 1;
            continue;
        }

        let duplicate = tournament
            .players
            .iter()
            .chain(imported.iter())
            .any(|p| p.mobile_number == mobile && categories.iter().any(|c| p.in_category(c)));
        if duplicate {
            summary.skipped_duplicates += 1;
            continue;
        }

        let fee_paid = row.paid.trim().eq_ignore_ascii_case("y");
        imported.push(Player::new(name, mobile, categories, fee_paid));
        summary.added += 1;
    }

    let mut updated = tournament.clone();
    updated.players.extend(imported);
    Ok((updated, summary))
}

/// Match a raw category token against the configured categories: exact
/// first, then case-insensitive; unmatched tokens are kept as supplied.
fn resolve_category(configured: &[String], raw: &str) -> String {
    if let Some(exact) = configured.iter().find(|c| c.as_str() == raw) {
        return exact.clone();
    }
    if let Some(close) = configured.iter().find(|c| c.eq_ignore_ascii_case(raw)) {
        return close.clone();
    }
    raw.to_string()
}
