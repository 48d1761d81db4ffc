//! Error types for `zion-core`.

use thiserror::Error;

use crate::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("target for {kind} ({target}) is below its {anchors} canonical rows")]
  TargetBelowAnchors {
    kind:    EntityKind,
    target:  usize,
    anchors: usize,
  },

  #[error("{child} rows requested but no {parent} rows will be generated")]
  MissingParent { child: EntityKind, parent: EntityKind },

  #[error("insert order places {child} before its parent {parent}")]
  OrderViolation { child: EntityKind, parent: EntityKind },

  #[error("insert order lists {0} more than once")]
  DuplicateInOrder(EntityKind),

  #[error("insert order does not list {0}")]
  MissingFromOrder(EntityKind),

  #[error("column {column} of {kind} refers to unknown column {reference}")]
  UnknownColumn {
    kind:      EntityKind,
    column:    &'static str,
    reference: &'static str,
  },

  #[error("column {column} of {kind} has an empty range")]
  EmptyRange { kind: EntityKind, column: &'static str },

  #[error("canonical {kind} row {id} has {found} values, expected {expected}")]
  AnchorArity {
    kind:     EntityKind,
    id:       i64,
    found:    usize,
    expected: usize,
  },

  #[error("invalid canonical value for {kind}: {reason}")]
  InvalidAnchor { kind: EntityKind, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
