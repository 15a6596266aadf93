pub mod collection;
pub mod record;

// Re-export handler functions for use in routing
pub use collection::get as colleges_get;
pub use collection::post as colleges_post;
pub use collection::search as colleges_search;

pub use record::delete as college_delete;
pub use record::get as college_get;
pub use record::put as college_put;
