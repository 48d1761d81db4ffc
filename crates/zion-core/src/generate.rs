//! Dataset generation.
//!
//! [`Generation`] walks [`EntityKind::INSERT_ORDER`], emitting the canonical
//! rows of each entity followed by randomized rows built by [`RowBuilder`]
//! from the entity's [`TableSpec`], one bounded chunk at a time. Ids are
//! dense from 1. [`Dataset::generate`] collects a whole run in memory.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{
  EntityKind, Error, Record, Result, Value,
  anchors::{anchor_count, anchors},
  entity::verify_insert_order,
  field::{Column, FieldGen, TableSpec},
  names,
};

// ─── Targets ─────────────────────────────────────────────────────────────────

/// Requested row count per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Targets {
  pub ships:     usize,
  pub humans:    usize,
  pub sleepers:  usize,
  pub agents:    usize,
  pub locations: usize,
  pub oracles:   usize,
  pub missions:  usize,
}

impl Default for Targets {
  fn default() -> Self {
    Self {
      ships:     25,
      humans:    400,
      sleepers:  3000,
      agents:    30,
      locations: 150,
      oracles:   5,
      missions:  6400,
    }
  }
}

impl Targets {
  pub fn get(&self, kind: EntityKind) -> usize {
    match kind {
      EntityKind::Ship => self.ships,
      EntityKind::Human => self.humans,
      EntityKind::Sleeper => self.sleepers,
      EntityKind::Agent => self.agents,
      EntityKind::Location => self.locations,
      EntityKind::Oracle => self.oracles,
      EntityKind::Mission => self.missions,
    }
  }

  /// Every target must cover its canonical rows, and an entity with rows
  /// needs at least one row of each parent.
  pub fn validate(&self) -> Result<()> {
    for kind in EntityKind::INSERT_ORDER {
      let target = self.get(kind);
      let anchors = anchor_count(kind);
      if target < anchors {
        return Err(Error::TargetBelowAnchors { kind, target, anchors });
      }
      if target > 0 {
        for parent in kind.parents() {
          if self.get(parent) == 0 {
            return Err(Error::MissingParent { child: kind, parent });
          }
        }
      }
    }
    Ok(())
  }
}

// ─── Row builder ─────────────────────────────────────────────────────────────

/// Builds randomized rows from a [`TableSpec`].
///
/// `generated` holds the row count of every entity already produced in this
/// run; parent references are drawn from `1..=count`.
pub struct RowBuilder<'a, R> {
  rng:       &'a mut R,
  generated: &'a HashMap<EntityKind, i64>,
}

impl<'a, R: Rng> RowBuilder<'a, R> {
  pub fn new(rng: &'a mut R, generated: &'a HashMap<EntityKind, i64>) -> Self {
    Self { rng, generated }
  }

  /// Build the row with primary key `id`.
  pub fn build(&mut self, spec: &TableSpec, id: i64) -> Result<Record> {
    let mut values: Vec<Value> = Vec::with_capacity(spec.columns.len());
    for column in spec.columns {
      let present = match column.presence {
        Some(p) => self.rng.gen_bool(p),
        None => true,
      };
      let value = if present {
        self.draw(spec, column, id, &values)?
      } else {
        Value::Null
      };
      values.push(value);
    }
    Ok(Record { kind: spec.kind, id, values })
  }

  fn draw(
    &mut self,
    spec: &TableSpec,
    column: &Column,
    id: i64,
    row: &[Value],
  ) -> Result<Value> {
    let empty = || Error::EmptyRange { kind: spec.kind, column: column.name };

    let value = match column.generator {
      FieldGen::Range(lo, hi) => {
        if lo > hi {
          return Err(empty());
        }
        Value::Int(self.rng.gen_range(lo..=hi))
      }
      FieldGen::OneOf(choices) => {
        Value::text(*choices.choose(&mut *self.rng).ok_or_else(empty)?)
      }
      FieldGen::Flag => Value::Flag(self.rng.gen_bool(0.5)),
      FieldGen::Timestamp { from_year, to_year } => {
        let from = year_start(from_year).ok_or_else(empty)?;
        let to = year_end(to_year).ok_or_else(empty)?;
        if from > to {
          return Err(empty());
        }
        let secs = self
          .rng
          .gen_range(from.and_utc().timestamp()..=to.and_utc().timestamp());
        let ts = DateTime::from_timestamp(secs, 0).ok_or_else(empty)?;
        Value::Timestamp(ts.naive_utc())
      }
      FieldGen::DaysAfter { column: base, max_days } => {
        let unknown = || Error::UnknownColumn {
          kind:      spec.kind,
          column:    column.name,
          reference: base,
        };
        let start = spec
          .column_index(base)
          .and_then(|idx| row.get(idx))
          .and_then(Value::as_timestamp)
          .ok_or_else(unknown)?;
        Value::Timestamp(start + Duration::days(self.rng.gen_range(0..=max_days)))
      }
      FieldGen::Label(prefix) => Value::Text(format!("{prefix}_{id}")),
      FieldGen::LabelOneOf(choices) => {
        let choice = choices.choose(&mut *self.rng).ok_or_else(empty)?;
        Value::Text(format!("{choice}_{id}"))
      }
      FieldGen::Designation(prefix) => {
        Value::Text(format!("{prefix}_{}_{id:03}", names::surname(&mut *self.rng)))
      }
      FieldGen::PersonName => Value::Text(names::person_name(&mut *self.rng)),
      FieldGen::StreetName => Value::Text(names::street_name(&mut *self.rng)),
      FieldGen::Coordinates(max) => {
        let x = self.rng.gen_range(0..=max);
        let y = self.rng.gen_range(0..=max);
        let z = self.rng.gen_range(0..=max);
        Value::Text(format!("X:{x},Y:{y},Z:{z}"))
      }
      FieldGen::Pod { sectors } => {
        Value::Text(format!("Sector_{},Pod_{id}", self.rng.gen_range(1..=sectors)))
      }
      FieldGen::Parent(parent) => {
        let count = self.generated.get(&parent).copied().unwrap_or(0);
        if count < 1 {
          return Err(Error::MissingParent { child: spec.kind, parent });
        }
        Value::Int(self.rng.gen_range(1..=count))
      }
      // The first row has no earlier row to point at.
      FieldGen::Mentor if id <= 1 => Value::Null,
      FieldGen::Mentor => Value::Int(self.rng.gen_range(1..id)),
    };
    Ok(value)
  }
}

fn year_start(year: i32) -> Option<NaiveDateTime> {
  NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

fn year_end(year: i32) -> Option<NaiveDateTime> {
  NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_opt(0, 0, 0)
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// All rows of one entity, in id order.
#[derive(Debug, Clone)]
pub struct Table {
  pub kind:    EntityKind,
  pub records: Vec<Record>,
}

impl Table {
  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// A complete generation run held in memory: one [`Table`] per entity, in
/// insert order.
#[derive(Debug, Clone)]
pub struct Dataset {
  pub tables: Vec<Table>,
}

impl Dataset {
  /// Generate every entity in [`EntityKind::INSERT_ORDER`], each table as a
  /// single chunk.
  pub fn generate<R: Rng>(targets: &Targets, rng: &mut R) -> Result<Self> {
    let mut run = Generation::new(*targets, rng)?;
    let mut tables = Vec::with_capacity(EntityKind::INSERT_ORDER.len());

    for kind in EntityKind::INSERT_ORDER {
      let target = targets.get(kind);
      let mut records = Vec::with_capacity(target);
      for chunk in run.chunks(kind, target.max(1))? {
        records.extend(chunk?);
      }
      tables.push(Table { kind, records });
    }

    Ok(Self { tables })
  }

  pub fn table(&self, kind: EntityKind) -> Option<&Table> {
    self.tables.iter().find(|t| t.kind == kind)
  }

  pub fn total_rows(&self) -> usize { self.tables.iter().map(Table::len).sum() }
}

// ─── Streaming generation ────────────────────────────────────────────────────

/// A validated generation run that hands out rows a chunk at a time, so a
/// loader never holds more than one chunk.
///
/// The insert order is verified and the targets are validated on
/// construction, before any row exists. Tables must then be drawn in
/// [`EntityKind::INSERT_ORDER`]; drawing a child before its parents fails
/// with [`Error::MissingParent`].
#[derive(Debug)]
pub struct Generation<R> {
  targets:   Targets,
  rng:       R,
  generated: HashMap<EntityKind, i64>,
}

impl<R: Rng> Generation<R> {
  pub fn new(targets: Targets, rng: R) -> Result<Self> {
    verify_insert_order(&EntityKind::INSERT_ORDER)?;
    targets.validate()?;
    Ok(Self { targets, rng, generated: HashMap::new() })
  }

  pub fn targets(&self) -> &Targets { &self.targets }

  /// Rows of `kind` in id order, canonical rows first, at most `chunk_size`
  /// rows per chunk.
  pub fn chunks(&mut self, kind: EntityKind, chunk_size: usize) -> Result<Chunks<'_, R>> {
    let spec = kind.spec();
    let anchors = anchors(kind)?;
    for (idx, values) in anchors.iter().enumerate() {
      if values.len() != spec.columns.len() {
        return Err(Error::AnchorArity {
          kind,
          id: idx as i64 + 1,
          found: values.len(),
          expected: spec.columns.len(),
        });
      }
    }

    let target = self.targets.get(kind);
    self.generated.insert(kind, target as i64);

    Ok(Chunks {
      kind,
      target,
      next_id: 1,
      chunk_size: chunk_size.max(1),
      anchors: anchors.into_iter(),
      rng: &mut self.rng,
      generated: &self.generated,
    })
  }
}

/// Iterator over the chunks of one table; see [`Generation::chunks`].
///
/// Stops after the first error.
pub struct Chunks<'a, R> {
  kind:       EntityKind,
  target:     usize,
  next_id:    usize,
  chunk_size: usize,
  anchors:    std::vec::IntoIter<Vec<Value>>,
  rng:        &'a mut R,
  generated:  &'a HashMap<EntityKind, i64>,
}

impl<R: Rng> Chunks<'_, R> {
  fn build(&mut self, from: usize, to: usize) -> Result<Vec<Record>> {
    let kind = self.kind;
    let spec = kind.spec();
    let mut records = Vec::with_capacity(to + 1 - from);
    let mut builder = RowBuilder::new(&mut *self.rng, self.generated);
    for id in from..=to {
      let record = match self.anchors.next() {
        Some(values) => Record { kind, id: id as i64, values },
        None => builder.build(spec, id as i64)?,
      };
      records.push(record);
    }
    Ok(records)
  }
}

impl<R: Rng> Iterator for Chunks<'_, R> {
  type Item = Result<Vec<Record>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.next_id > self.target {
      return None;
    }
    let from = self.next_id;
    let to = from.saturating_add(self.chunk_size - 1).min(self.target);
    let chunk = self.build(from, to);
    self.next_id = if chunk.is_ok() { to + 1 } else { self.target + 1 };
    Some(chunk)
  }
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn small() -> Targets {
    Targets {
      ships:     6,
      humans:    40,
      sleepers:  50,
      agents:    5,
      locations: 12,
      oracles:   4,
      missions:  300,
    }
  }

  fn dataset(seed: u64) -> Dataset {
    Dataset::generate(&small(), &mut StdRng::seed_from_u64(seed)).unwrap()
  }

  fn int(record: &Record, column: &str) -> Option<i64> {
    record.get(column).and_then(Value::as_int)
  }

  #[test]
  fn row_counts_match_targets_with_dense_ids() {
    let data = dataset(1);
    let targets = small();
    for table in &data.tables {
      assert_eq!(table.len(), targets.get(table.kind), "{}", table.kind);
      for (idx, record) in table.records.iter().enumerate() {
        assert_eq!(record.id, idx as i64 + 1);
        assert_eq!(record.values.len(), table.kind.spec().columns.len());
      }
    }
    assert_eq!(data.total_rows(), 6 + 40 + 50 + 5 + 12 + 4 + 300);
  }

  #[test]
  fn three_thousand_sleepers() {
    let targets = Targets { sleepers: 3000, ..small() };
    let data = Dataset::generate(&targets, &mut StdRng::seed_from_u64(5)).unwrap();
    let sleepers = data.table(EntityKind::Sleeper).unwrap();
    assert_eq!(sleepers.len(), 3000);
    assert_eq!(sleepers.records.first().map(|r| r.id), Some(1));
    assert_eq!(sleepers.records.last().map(|r| r.id), Some(3000));
  }

  #[test]
  fn tables_follow_insert_order() {
    let kinds: Vec<_> = dataset(2).tables.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, EntityKind::INSERT_ORDER.to_vec());
  }

  #[test]
  fn mentors_always_precede_mentees() {
    let data = dataset(3);
    let humans = data.table(EntityKind::Human).unwrap();
    let mut with_mentor = 0;
    for human in &humans.records {
      if let Some(mentor) = int(human, "mentor_id") {
        assert!(mentor < human.id, "human {} mentored by {mentor}", human.id);
        assert!(mentor >= 1);
        with_mentor += 1;
      }
    }
    assert!(with_mentor > 0);
  }

  #[test]
  fn mission_end_not_before_start() {
    let data = dataset(4);
    let missions = data.table(EntityKind::Mission).unwrap();
    let mut ended = 0;
    for mission in &missions.records {
      let start = mission
        .get("start_timestamp")
        .and_then(Value::as_timestamp)
        .unwrap();
      match mission.get("end_timestamp").unwrap() {
        Value::Null => {}
        other => {
          let end = other.as_timestamp().unwrap();
          assert!(end >= start);
          assert!(end - start <= Duration::days(7));
          ended += 1;
        }
      }
    }
    assert!(ended > 0 && ended < missions.len());
  }

  #[test]
  fn foreign_keys_stay_in_parent_range() {
    let data = dataset(6);
    for table in &data.tables {
      let spec = table.kind.spec();
      for column in spec.columns {
        let Some(parent) = column.references(table.kind) else { continue };
        let parent_rows = data.table(parent).unwrap().len() as i64;
        for record in &table.records {
          if let Some(id) = int(record, column.name) {
            assert!(
              (1..=parent_rows).contains(&id),
              "{}.{} = {id} outside 1..={parent_rows}",
              table.kind,
              column.name,
            );
          } else {
            assert!(column.is_nullable(), "{}.{} is null", table.kind, column.name);
          }
        }
      }
    }
  }

  #[test]
  fn optional_columns_are_null_not_sentinel() {
    let data = dataset(8);
    let missions = data.table(EntityKind::Mission).unwrap();
    let guided = missions
      .records
      .iter()
      .filter(|m| !m.get("oracle_guidance_id").unwrap().is_null())
      .count();
    assert!(guided > 0 && guided < missions.len());
    assert!(missions.records.iter().all(|m| {
      let v = m.get("oracle_guidance_id").unwrap();
      v.is_null() || v.as_int().is_some_and(|id| id > 0)
    }));
  }

  #[test]
  fn ranges_and_choices_are_respected() {
    let data = dataset(9);
    for table in &data.tables {
      for record in table.records.iter().skip(anchor_count(table.kind)) {
        for (column, value) in table.kind.spec().columns.iter().zip(&record.values) {
          match (column.generator, value) {
            (FieldGen::Range(lo, hi), Value::Int(n)) => {
              assert!((lo..=hi).contains(n), "{}.{} = {n}", table.kind, column.name)
            }
            (FieldGen::OneOf(choices), Value::Text(s)) => {
              assert!(choices.contains(&s.as_str()), "{}.{} = {s}", table.kind, column.name)
            }
            _ => {}
          }
        }
      }
    }
  }

  #[test]
  fn canonical_rows_lead_each_table() {
    let data = dataset(10);
    let ships = data.table(EntityKind::Ship).unwrap();
    assert_eq!(
      ships.records[0].get("ship_name").and_then(Value::as_str),
      Some("Nebuchadnezzar")
    );
    assert_eq!(ships.records[3].get("ship_name").and_then(Value::as_str), Some("Ship_4"));

    let agents = data.table(EntityKind::Agent).unwrap();
    let designation = agents.records[2]
      .get("designation_code")
      .and_then(Value::as_str)
      .unwrap();
    assert!(designation.starts_with("Agent_") && designation.ends_with("_003"), "{designation}");
  }

  #[test]
  fn same_seed_same_dataset() {
    let a = dataset(42);
    let b = dataset(42);
    let ma = &a.table(EntityKind::Mission).unwrap().records;
    let mb = &b.table(EntityKind::Mission).unwrap().records;
    assert_eq!(ma, mb);
  }

  #[test]
  fn chunks_are_bounded_and_match_the_full_dataset() {
    let full = dataset(42);
    let mut run = Generation::new(small(), StdRng::seed_from_u64(42)).unwrap();

    for kind in EntityKind::INSERT_ORDER {
      let chunks: Vec<Vec<Record>> =
        run.chunks(kind, 7).unwrap().collect::<Result<_>>().unwrap();
      let target = small().get(kind);
      assert_eq!(chunks.len(), target.div_ceil(7), "{kind}");
      assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= 7), "{kind}");

      let streamed: Vec<Record> = chunks.into_iter().flatten().collect();
      assert_eq!(&streamed, &full.table(kind).unwrap().records, "{kind}");
    }
  }

  #[test]
  fn zero_target_yields_no_chunks() {
    let targets = Targets { sleepers: 0, ..small() };
    let mut run = Generation::new(targets, StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(run.chunks(EntityKind::Sleeper, 10).unwrap().count(), 0);
  }

  #[test]
  fn invalid_targets_fail_before_any_row() {
    let targets = Targets { ships: 2, ..small() };
    let err = Generation::new(targets, StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, Error::TargetBelowAnchors { kind: EntityKind::Ship, .. }));
  }

  #[test]
  fn child_before_parent_stops_the_stream() {
    let mut run = Generation::new(small(), StdRng::seed_from_u64(6)).unwrap();
    let mut chunks = run.chunks(EntityKind::Mission, 50).unwrap();
    assert!(matches!(chunks.next(), Some(Err(Error::MissingParent { .. }))));
    assert!(chunks.next().is_none());
  }

  #[test]
  fn target_below_anchors_is_rejected() {
    let targets = Targets { ships: 2, ..small() };
    let err = Dataset::generate(&targets, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(
      err,
      Error::TargetBelowAnchors { kind: EntityKind::Ship, target: 2, anchors: 3 }
    ));
  }

  #[test]
  fn first_row_never_has_a_mentor() {
    let generated = HashMap::from([(EntityKind::Ship, 3)]);
    let mut rng = StdRng::seed_from_u64(12);
    let mut builder = RowBuilder::new(&mut rng, &generated);
    for _ in 0..50 {
      let record = builder.build(EntityKind::Human.spec(), 1).unwrap();
      assert!(record.get("mentor_id").unwrap().is_null());
    }
  }

  #[test]
  fn missing_parent_rows_fail_the_build() {
    let generated = HashMap::new();
    let mut rng = StdRng::seed_from_u64(13);
    let mut builder = RowBuilder::new(&mut rng, &generated);
    let err = builder.build(EntityKind::Oracle.spec(), 3).unwrap_err();
    assert!(matches!(
      err,
      Error::MissingParent { child: EntityKind::Oracle, parent: EntityKind::Location }
    ));
  }
}
