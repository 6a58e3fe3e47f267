//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `CrudRepository<T>`
//! that stores all data in a `HashMap` keyed by identity. This is useful for
//! testing and development scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust
//! use herd::storage::inmemory::InMemoryRepository;
//! use herd_core::storage::CrudRepository;
//! use herd_core::unicorn::Unicorn;
//!
//! let mut repo = InMemoryRepository::new();
//! let created = repo.create(Unicorn::new("Sprinkles", 5, "Pink", 10.0)).unwrap();
//! assert_eq!(created.id, Some(1));
//! ```

mod repository;

pub use repository::InMemoryRepository;
