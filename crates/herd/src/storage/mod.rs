//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `CrudRepository`
//! trait defined in `herd_core::storage`. Both backends satisfy the same
//! contract; callers pick one at construction time.
//!
//! - `inmemory`: `HashMap`-backed test double, generic over any
//!   `Identifiable` entity
//! - `sqlite`: relational backend on a pooled `rusqlite` connection

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
