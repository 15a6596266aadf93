use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::database::id::DocumentId;
use crate::database::manager::DatabaseError;

/// Shared handle to the document store, built once at startup and cloned
/// into every request.
pub type Database = Arc<dyn DocumentStore>;

/// The operations the API issues against its store of record.
///
/// Each call touches one collection and, for writes, at most one document.
/// Atomicity of that single-document write is whatever the backend gives.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Backend name for logs and the health report
    fn backend_name(&self) -> &'static str;

    /// Round-trip to the store to confirm it is reachable
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// Insert a document, returning its `_id` (generated when absent)
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, DatabaseError>;

    /// Every document in the collection, in store order
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DatabaseError>;

    async fn find_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, DatabaseError>;

    /// Documents whose string `field` contains `needle`, ignoring case
    async fn find_containing(
        &self,
        collection: &str,
        field: &str,
        needle: &str,
    ) -> Result<Vec<Document>, DatabaseError>;

    /// Set the given fields on the matched document. Returns whether a
    /// document matched.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        changes: Document,
    ) -> Result<bool, DatabaseError>;

    /// Returns whether a document was deleted
    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> Result<bool, DatabaseError>;
}
