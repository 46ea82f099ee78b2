//! CSV import and export of roster and fixture data.

mod export;
mod import;

pub use export::{fixtures_csv, match_results_csv, players_csv};
pub use import::{import_players_csv, CsvImportSummary, REQUIRED_IMPORT_HEADERS};

/// Errors from CSV import and export.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CsvError {
    /// One or more required headers are absent; carries the missing names.
    MissingHeaders(String),
    /// The CSV text could not be parsed or written.
    Malformed(String),
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvError::MissingHeaders(missing) => write!(
                f,
                "CSV must contain headers: Name, MobileNumber, Categories, Paid(Y/N) (missing: {})",
                missing
            ),
            CsvError::Malformed(detail) => write!(f, "Invalid CSV: {}", detail),
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        CsvError::Malformed(err.to_string())
    }
}
