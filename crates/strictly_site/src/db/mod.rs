//! SQLite key-value persistence for best scores.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use models::{KvEntry, NewKvEntry};
pub use repository::KvRepository;
