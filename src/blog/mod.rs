//! Blog posts: the record type, its validation rules, and the store that
//! owns them.

pub mod model;
pub mod seed;
pub mod store;
pub mod validation;

pub use model::{BlogInput, BlogRecord};
pub use store::{BlogStore, StoreError};
