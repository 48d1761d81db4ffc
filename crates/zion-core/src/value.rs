//! Generated column values and rows.

use chrono::NaiveDateTime;

use crate::EntityKind;

/// A single column value in a generated row.
///
/// Optional columns that were not drawn are [`Value::Null`]; no sentinel
/// values are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  Null,
  Int(i64),
  Text(String),
  /// Stored as `'Y'` / `'N'`.
  Flag(bool),
  Timestamp(NaiveDateTime),
}

impl Value {
  pub fn text(s: impl Into<String>) -> Self { Value::Text(s.into()) }

  pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      Value::Int(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
    match self {
      Value::Timestamp(ts) => Some(*ts),
      _ => None,
    }
  }
}

impl From<i64> for Value {
  fn from(n: i64) -> Self { Value::Int(n) }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self { Value::Text(s.to_owned()) }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self { Value::Flag(b) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(v: Option<T>) -> Self { v.map_or(Value::Null, Into::into) }
}

/// One fully-formed row. `values` follows the column order of the entity's
/// [`TableSpec`](crate::field::TableSpec); the id is kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  pub kind:   EntityKind,
  pub id:     i64,
  pub values: Vec<Value>,
}

impl Record {
  /// Look up a column by name. The id column is not in `values`.
  pub fn get(&self, column: &str) -> Option<&Value> {
    self
      .kind
      .spec()
      .column_index(column)
      .and_then(|idx| self.values.get(idx))
  }
}
