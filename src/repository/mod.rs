mod embedded;
#[cfg(test)]
pub mod memory;

use embedded::migrations;

use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use std::time::Duration;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("malformed note id: '{0}'")]
    MalformedId(String),

    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

/// Persistence primitives the note service relies on.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a note and return it with its store-assigned id.
    async fn insert(&self, title: String, description: String) -> Result<Note, StoreError>;

    /// All notes in insertion order.
    async fn find_all(&self) -> Result<Vec<Note>, StoreError>;

    /// Atomically remove the note with `id`, returning it if it existed.
    async fn find_by_id_and_delete(&self, id: i64) -> Result<Option<Note>, StoreError>;
}

pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let (client, con) = tokio_postgres::connect(database_url, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn insert(&self, title: String, description: String) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (title, description) VALUES ($1, $2) RETURNING id, title, description",
                &[&title, &description],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query("SELECT id, title, description FROM notes ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn find_by_id_and_delete(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let row = self
            .client
            .query_opt(
                "DELETE FROM notes WHERE id = $1 RETURNING id, title, description",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }
}
