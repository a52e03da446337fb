//! Domain layer for the notes service.
//!
//! Holds the [`note::Note`] entity and its builder, the error taxonomy, and
//! the repository/service seams. Nothing in here knows about Postgres or HTTP.

pub mod error;
pub mod note;
pub mod repository;
pub mod service;
pub mod types;
