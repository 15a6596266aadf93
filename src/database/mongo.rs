use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Collection, Database as MongoDatabase};

use crate::database::id::DocumentId;
use crate::database::manager::DatabaseError;
use crate::database::store::DocumentStore;

/// MongoDB-backed store. The driver client keeps its own connection pool,
/// so one instance serves every request for the life of the process.
pub struct MongoStore {
    db: MongoDatabase,
}

impl MongoStore {
    pub fn new(db: MongoDatabase) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

/// Case-insensitive "contains" filter; the needle is matched literally.
fn containing_filter(field: &str, needle: &str) -> Document {
    doc! { field: { "$regex": regex::escape(needle), "$options": "i" } }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, DatabaseError> {
        let result = self.collection(collection).insert_one(document, None).await?;
        Ok(result.inserted_id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DatabaseError> {
        let cursor = self.collection(collection).find(None, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, DatabaseError> {
        let filter = doc! { "_id": id.to_bson() };
        Ok(self.collection(collection).find_one(filter, None).await?)
    }

    async fn find_containing(
        &self,
        collection: &str,
        field: &str,
        needle: &str,
    ) -> Result<Vec<Document>, DatabaseError> {
        let cursor = self
            .collection(collection)
            .find(containing_filter(field, needle), None)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
        changes: Document,
    ) -> Result<bool, DatabaseError> {
        let filter = doc! { "_id": id.to_bson() };
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": changes }, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, collection: &str, id: &DocumentId) -> Result<bool, DatabaseError> {
        let filter = doc! { "_id": id.to_bson() };
        let result = self.collection(collection).delete_one(filter, None).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_filter_escapes_regex_metacharacters() {
        let filter = containing_filter("name", "A+B (Tech)");
        let inner = filter.get_document("name").unwrap();
        assert_eq!(inner.get_str("$regex").unwrap(), r"A\+B \(Tech\)");
        assert_eq!(inner.get_str("$options").unwrap(), "i");
    }
}
