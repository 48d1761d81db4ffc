//! Declarative column generators.
//!
//! Each entity is described by a static [`TableSpec`]: an ordered list of
//! [`Column`]s, each naming a [`FieldGen`] (an inclusive range, a categorical
//! set, a reference to a parent, ...) and an optional presence probability.
//! A single row builder in [`crate::generate`] consumes these tables.

use crate::EntityKind;

/// How a column's value is drawn for a randomized row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldGen {
  /// Integer drawn uniformly from the inclusive range.
  Range(i64, i64),
  /// One of a fixed set of strings.
  OneOf(&'static [&'static str]),
  /// `'Y'` or `'N'` with equal probability.
  Flag,
  /// Timestamp between Jan 1 of `from_year` and Dec 31 of `to_year`.
  Timestamp { from_year: i32, to_year: i32 },
  /// Timestamp 0..=`max_days` days after another timestamp column of the
  /// same row. That column must come first in the table.
  DaysAfter { column: &'static str, max_days: i64 },
  /// `{prefix}_{id}`.
  Label(&'static str),
  /// `{choice}_{id}` for a random choice.
  LabelOneOf(&'static [&'static str]),
  /// `{prefix}_{surname}_{id:03}`.
  Designation(&'static str),
  /// Random given name and family name.
  PersonName,
  /// Random street name.
  StreetName,
  /// `X:a,Y:b,Z:c`, each axis in `0..=max`.
  Coordinates(i64),
  /// `Sector_{1..=sectors},Pod_{id}`.
  Pod { sectors: i64 },
  /// Id of an already generated row of another entity.
  Parent(EntityKind),
  /// Id of an earlier row of the same entity (strictly smaller id).
  Mentor,
}

/// One column of a generated table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
  pub name:      &'static str,
  pub generator: FieldGen,
  /// Probability that the column is present; `None` means always present.
  pub presence:  Option<f64>,
}

impl Column {
  pub const fn new(name: &'static str, generator: FieldGen) -> Self {
    Self { name, generator, presence: None }
  }

  /// Make the column nullable, present with probability `p`.
  pub const fn optional(self, p: f64) -> Self {
    Self { presence: Some(p), ..self }
  }

  pub fn is_nullable(&self) -> bool { self.presence.is_some() }

  /// The entity this column references, if it is a foreign key.
  pub fn references(&self, owner: EntityKind) -> Option<EntityKind> {
    match self.generator {
      FieldGen::Parent(parent) => Some(parent),
      FieldGen::Mentor => Some(owner),
      _ => None,
    }
  }
}

/// The generator table for one entity.
#[derive(Debug)]
pub struct TableSpec {
  pub kind:      EntityKind,
  pub table:     &'static str,
  pub id_column: &'static str,
  /// Non-id columns in insert order.
  pub columns:   &'static [Column],
}

impl TableSpec {
  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|c| c.name == name)
  }

  /// Id column followed by every generated column.
  pub fn column_names(&self) -> Vec<&'static str> {
    std::iter::once(self.id_column)
      .chain(self.columns.iter().map(|c| c.name))
      .collect()
  }

  /// Entities referenced by [`FieldGen::Parent`] columns.
  pub fn parents(&self) -> impl Iterator<Item = EntityKind> + '_ {
    self.columns.iter().filter_map(|c| match c.generator {
      FieldGen::Parent(parent) => Some(parent),
      _ => None,
    })
  }
}
