pub mod id;
pub mod manager;
pub mod memory;
pub mod mongo;
pub mod repository;
pub mod store;

pub use id::DocumentId;
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use repository::Repository;
pub use store::{Database, DocumentStore};
