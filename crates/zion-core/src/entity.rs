//! The entity graph: seven entity kinds and the order they are written in.
//!
//! Parent/child edges are not listed by hand. They are read off the field
//! tables in [`crate::tables`]: any column generated as
//! [`FieldGen::Parent`](crate::field::FieldGen::Parent) is a foreign key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::TableSpec,
  tables,
};

/// One of the seven entity types in the dataset.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
  Ship,
  Human,
  Sleeper,
  Agent,
  Location,
  Oracle,
  Mission,
}

impl EntityKind {
  /// Declared write order. Every parent precedes each of its children;
  /// [`verify_insert_order`] checks this against the field tables.
  pub const INSERT_ORDER: [EntityKind; 7] = [
    EntityKind::Ship,
    EntityKind::Human,
    EntityKind::Sleeper,
    EntityKind::Agent,
    EntityKind::Location,
    EntityKind::Oracle,
    EntityKind::Mission,
  ];

  /// Delete order for a reset: children before parents.
  pub fn reset_order() -> impl Iterator<Item = EntityKind> {
    Self::INSERT_ORDER.into_iter().rev()
  }

  /// The generator table describing every column of this entity.
  pub fn spec(self) -> &'static TableSpec {
    match self {
      EntityKind::Ship => &tables::SHIPS,
      EntityKind::Human => &tables::HUMANS,
      EntityKind::Sleeper => &tables::SLEEPERS,
      EntityKind::Agent => &tables::AGENTS,
      EntityKind::Location => &tables::LOCATIONS,
      EntityKind::Oracle => &tables::ORACLES,
      EntityKind::Mission => &tables::MISSIONS,
    }
  }

  pub fn table_name(self) -> &'static str { self.spec().table }

  /// Plural key used in row-count summaries (`ships`, `humans`, ...).
  pub fn plural(self) -> &'static str {
    match self {
      EntityKind::Ship => "ships",
      EntityKind::Human => "humans",
      EntityKind::Sleeper => "sleepers",
      EntityKind::Agent => "agents",
      EntityKind::Location => "locations",
      EntityKind::Oracle => "oracles",
      EntityKind::Mission => "missions",
    }
  }

  /// Entities this one holds foreign keys to, self-references excluded.
  pub fn parents(self) -> Vec<EntityKind> {
    let mut parents: Vec<EntityKind> = Vec::new();
    for parent in self.spec().parents() {
      if parent != self && !parents.contains(&parent) {
        parents.push(parent);
      }
    }
    parents
  }
}

/// Check that `order` lists every entity exactly once, parents first.
pub fn verify_insert_order(order: &[EntityKind]) -> Result<()> {
  let mut position: HashMap<EntityKind, usize> = HashMap::new();
  for (idx, kind) in order.iter().copied().enumerate() {
    if position.insert(kind, idx).is_some() {
      return Err(Error::DuplicateInOrder(kind));
    }
  }

  for kind in EntityKind::INSERT_ORDER {
    if !position.contains_key(&kind) {
      return Err(Error::MissingFromOrder(kind));
    }
  }

  for (idx, child) in order.iter().copied().enumerate() {
    for parent in child.parents() {
      if position[&parent] > idx {
        return Err(Error::OrderViolation { child, parent });
      }
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn declared_order_is_topological() {
    verify_insert_order(&EntityKind::INSERT_ORDER).unwrap();
  }

  #[test]
  fn mission_depends_on_ship_location_oracle() {
    let parents = EntityKind::Mission.parents();
    assert!(parents.contains(&EntityKind::Ship));
    assert!(parents.contains(&EntityKind::Location));
    assert!(parents.contains(&EntityKind::Oracle));
    assert_eq!(parents.len(), 3);
  }

  #[test]
  fn human_mentor_is_not_a_parent_edge() {
    assert_eq!(EntityKind::Human.parents(), vec![EntityKind::Ship]);
  }

  #[test]
  fn child_before_parent_is_rejected() {
    let mut order = EntityKind::INSERT_ORDER;
    order.swap(0, 1);
    let err = verify_insert_order(&order).unwrap_err();
    assert!(matches!(
      err,
      Error::OrderViolation { child: EntityKind::Human, parent: EntityKind::Ship }
    ));
  }

  #[test]
  fn duplicate_and_missing_entries_are_rejected() {
    let mut order = EntityKind::INSERT_ORDER.to_vec();
    order.push(EntityKind::Ship);
    assert!(matches!(
      verify_insert_order(&order),
      Err(Error::DuplicateInOrder(EntityKind::Ship))
    ));

    let short = &EntityKind::INSERT_ORDER[..6];
    assert!(matches!(
      verify_insert_order(short),
      Err(Error::MissingFromOrder(EntityKind::Mission))
    ));
  }

  #[test]
  fn reset_order_is_reverse() {
    let reset: Vec<_> = EntityKind::reset_order().collect();
    assert_eq!(reset.first(), Some(&EntityKind::Mission));
    assert_eq!(reset.last(), Some(&EntityKind::Ship));
  }
}
