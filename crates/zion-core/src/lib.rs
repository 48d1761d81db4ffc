//! Core types for the Zion synthetic dataset.
//!
//! This crate knows the entity graph, how each column of each entity is
//! generated, and the shape of the insight results served by the dashboard.
//! It is free of database and HTTP dependencies; the SQLite crate and the
//! binaries build on top of it.

pub mod anchors;
pub mod entity;
pub mod error;
pub mod field;
pub mod generate;
pub mod insights;
pub mod names;
pub mod store;
pub mod tables;
pub mod value;

pub use entity::EntityKind;
pub use error::{Error, Result};
pub use generate::{Dataset, Table, Targets};
pub use value::{Record, Value};
