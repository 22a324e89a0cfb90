use crate::{
    dto::{CreateNoteRequest, NoteResponse},
    repository::{NoteStore, StoreError},
};

use std::{future::Future, sync::Arc, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("note not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
    timeout: Duration,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<(), ServiceError> {
        let title = required("title", request.title)?;
        let description = required("description", request.description)?;

        let note = self
            .bounded(self.store.insert(title, description))
            .await?;
        tracing::info!("Created note {}", note.id);

        Ok(())
    }

    pub async fn list_notes(&self) -> Result<Vec<NoteResponse>, ServiceError> {
        let notes = self.bounded(self.store.find_all()).await?;

        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    pub async fn delete_note(&self, raw: &str) -> Result<(), ServiceError> {
        let id = parse_id(raw)?;

        match self.bounded(self.store.find_by_id_and_delete(id)).await? {
            Some(_) => {
                tracing::info!("Deleted note {}", id);
                Ok(())
            }
            None => Err(ServiceError::NotFound),
        }
    }
}

// Only the exact form handed out as `_id` names a note.
fn parse_id(raw: &str) -> Result<i64, StoreError> {
    match raw.parse::<i64>() {
        Ok(id) if id.to_string() == raw => Ok(id),
        _ => Err(StoreError::MalformedId(raw.to_string())),
    }
}

// Whitespace-only counts as empty.
fn required(field: &str, value: Option<String>) -> Result<String, ServiceError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ServiceError::Validation(format!("{field} is required"))),
    }
}
