use async_trait::async_trait;

use crate::models::Note;

use super::{NoteStore, StoreError};

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    last_id: i64,
}

/// In-process store used in place of PostgreSQL by the tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: tokio::sync::Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert(&self, title: String, description: String) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;

        let note = Note {
            id: inner.last_id,
            title,
            description,
        };
        inner.notes.push(note.clone());

        Ok(note)
    }

    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.inner.lock().await.notes.clone())
    }

    async fn find_by_id_and_delete(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.lock().await;
        let position = inner.notes.iter().position(|note| note.id == id);

        Ok(position.map(|idx| inner.notes.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    #[tokio::test]
    async fn lists_in_insertion_order_with_unique_ids() {
        let store = MemoryStore::new();
        let first = store.insert("a".into(), "1".into()).await.unwrap();
        let second = store.insert("b".into(), "2".into()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert("a".into(), "1".into()).await.unwrap();
        store.find_by_id_and_delete(first.id).await.unwrap();

        let second = store.insert("b".into(), "2".into()).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = MemoryStore::new();
        let keep = store.insert("keep".into(), "me".into()).await.unwrap();
        let gone = store.insert("drop".into(), "me".into()).await.unwrap();

        assert_eq!(
            store.find_by_id_and_delete(gone.id).await.unwrap(),
            Some(gone.clone())
        );
        assert_eq!(store.find_by_id_and_delete(gone.id).await.unwrap(), None);
        assert_eq!(store.find_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_deletes_of_same_id_succeed_once() {
        let store = Arc::new(MemoryStore::new());
        let id = store.insert("race".into(), "me".into()).await.unwrap().id;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.find_by_id_and_delete(id).await })
            })
            .collect();

        let mut removed = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_some() {
                removed += 1;
            }
        }

        assert_eq!(removed, 1);
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
