use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use crate::database::id::DocumentId;
use crate::database::manager::DatabaseError;
use crate::database::store::DocumentStore;

/// In-process store with the same observable behavior as the MongoDB
/// backend for the operations the API uses. Collections keep insertion
/// order.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents currently held in `collection`
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_id(document: &Document, id: &Bson) -> bool {
    document.get("_id") == Some(id)
}

/// Per-character simple case fold, the comparison MongoDB's `i` regex
/// option makes. Characters whose lowercase form is longer than one
/// character (`İ`) stay as they are, and a final `Σ` folds to `σ` rather
/// than `ς`, unlike `str::to_lowercase`.
fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                _ => c,
            }
        })
        .collect()
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, DatabaseError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        let (id, stored) = match document.get("_id").cloned() {
            Some(id) => (id, document),
            None => {
                // Generated ids lead the document, as the server stores them
                let id = Bson::ObjectId(ObjectId::new());
                let mut stored = Document::new();
                stored.insert("_id", id.clone());
                for (key, value) in document {
                    stored.insert(key, value);
                }
                (id, stored)
            }
        };

        if documents.iter().any(|existing| matches_id(existing, &id)) {
            return Err(DatabaseError::Backend(format!(
                "duplicate key in {}: _id {}",
                collection, id
            )));
        }

        documents.push(stored);
        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DatabaseError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, DatabaseError> {
        let id = id.to_bson();
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches_id(doc, &id)))
            .cloned())
    }

    async fn find_containing(
        &self,
        collection: &str,
        field: &str,
        needle: &str,
    ) -> Result<Vec<Document>, DatabaseError> {
        let needle = fold_case(needle);
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| {
                        doc.get_str(field)
                            .map(|value| fold_case(value).contains(&needle))
                            .unwrap_or(false)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        changes: Document,
    ) -> Result<bool, DatabaseError> {
        let id = id.to_bson();
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| matches_id(doc, &id)))
        else {
            return Ok(false);
        };

        for (key, value) in changes {
            document.insert(key, value);
        }
        Ok(true)
    }

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> Result<bool, DatabaseError> {
        let id = id.to_bson();
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };

        match documents.iter().position(|doc| matches_id(doc, &id)) {
            Some(index) => {
                documents.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
