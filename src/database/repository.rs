use mongodb::bson::{Bson, Document};

use crate::database::id::DocumentId;
use crate::database::manager::DatabaseError;
use crate::database::store::Database;

/// Collection-scoped access to the store. The `*_404` methods turn "nothing
/// matched" into `DatabaseError::NotFound` so handlers can `?` straight
/// through.
pub struct Repository {
    collection: &'static str,
    db: Database,
}

impl Repository {
    pub fn new(collection: &'static str, db: Database) -> Self {
        Self { collection, db }
    }

    pub async fn select_all(&self) -> Result<Vec<Document>, DatabaseError> {
        self.db.find_all(self.collection).await
    }

    pub async fn select_one(&self, id: &DocumentId) -> Result<Option<Document>, DatabaseError> {
        self.db.find_by_id(self.collection, id).await
    }

    pub async fn select_404(&self, id: &DocumentId) -> Result<Document, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} {} not found", self.collection, id)))
    }

    pub async fn select_containing(
        &self,
        field: &str,
        needle: &str,
    ) -> Result<Vec<Document>, DatabaseError> {
        self.db.find_containing(self.collection, field, needle).await
    }

    pub async fn insert(&self, document: Document) -> Result<Bson, DatabaseError> {
        self.db.insert_one(self.collection, document).await
    }

    pub async fn update_404(&self, id: &DocumentId, changes: Document) -> Result<(), DatabaseError> {
        if self.db.update_by_id(self.collection, id, changes).await? {
            Ok(())
        } else {
            Err(DatabaseError::NotFound(format!("{} {} not found", self.collection, id)))
        }
    }

    pub async fn delete_404(&self, id: &DocumentId) -> Result<(), DatabaseError> {
        if self.db.delete_by_id(self.collection, id).await? {
            Ok(())
        } else {
            Err(DatabaseError::NotFound(format!("{} {} not found", self.collection, id)))
        }
    }
}
