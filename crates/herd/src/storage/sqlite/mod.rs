//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of `CrudRepository<Unicorn>`
//! using `rusqlite` connections checked out from a `herd_pool::ConnectionPool`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
