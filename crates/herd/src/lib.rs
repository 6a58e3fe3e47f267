//! Unicorn persistence with interchangeable storage backends.
//!
//! The `storage` module holds the in-memory and SQLite implementations of
//! `herd_core::storage::CrudRepository`. The remaining modules support the
//! `herd` binary.

pub mod cli;
pub mod output;
pub mod scenario;
pub mod seed;
pub mod storage;
