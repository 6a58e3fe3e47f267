//! Core types for herd.
//!
//! - [`unicorn`]: the `Unicorn` entity and the `Identifiable` trait
//! - [`storage`]: the `CrudRepository` contract and the `DaoError` every backend returns
//!
//! Backends live in the `herd` crate; this crate has no I/O.

pub mod storage;
pub mod unicorn;
