//! Document store: save and load whole tournament documents by opaque id.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Tournament;

/// Errors from document store operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// No document under this id.
    NotFound(String),
    /// The document could not be serialized or parsed.
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "No stored tournament under id {}", id),
            StoreError::Serialize(detail) => write!(f, "Tournament document error: {}", detail),
        }
    }
}

/// A backup target that accepts and returns whole tournament documents.
///
/// `save` updates in place when an existing id is supplied and mints a new
/// one otherwise, so callers can sync repeatedly without accumulating copies.
pub trait DocumentStore {
    fn save(&mut self, document: &Tournament, existing_id: Option<&str>)
        -> Result<String, StoreError>;
    fn load(&self, id: &str) -> Result<Tournament, StoreError>;
}

/// In-memory store keeping documents as serialized JSON text, so every save
/// and load exercises the full document shape.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn save(
        &mut self,
        document: &Tournament,
        existing_id: Option<&str>,
    ) -> Result<String, StoreError> {
        let text =
            serde_json::to_string(document).map_err(|e| StoreError::Serialize(e.to_string()))?;
        let id = existing_id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());
        self.documents.insert(id.clone(), text);
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Tournament, StoreError> {
        let text = self
            .documents
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        serde_json::from_str(text).map_err(|e| StoreError::Serialize(e.to_string()))
    }
}
