//! Result types served by the dashboard.

use serde::{Deserialize, Serialize, ser::SerializeMap};

use crate::EntityKind;

/// One result row: lower-cased column name → JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The fixed menu of aggregation queries.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  strum::Display,
  strum::IntoStaticStr,
  strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Insight {
  BusiestShips,
  AgentHotspots,
  TrainingByShip,
  OracleSuccess,
  NotableHumans,
  OracleGuidedExamples,
  TopAgents,
}

impl Insight {
  /// Key used in the JSON mapping, e.g. `busiest_ships`.
  pub fn name(self) -> &'static str { self.into() }

  /// Heading used on the HTML dashboard.
  pub fn title(self) -> &'static str {
    match self {
      Insight::BusiestShips => "Busiest ships",
      Insight::AgentHotspots => "Agent hotspots",
      Insight::TrainingByShip => "Crew training by ship",
      Insight::OracleSuccess => "Mission success with and without the Oracle",
      Insight::NotableHumans => "Notable humans",
      Insight::OracleGuidedExamples => "Recent oracle-guided missions",
      Insight::TopAgents => "Most dangerous agents",
    }
  }

  /// Row cap of the query.
  pub fn limit(self) -> usize {
    match self {
      Insight::BusiestShips
      | Insight::NotableHumans
      | Insight::OracleGuidedExamples
      | Insight::TopAgents => 5,
      Insight::AgentHotspots | Insight::TrainingByShip => 10,
      // One row per guidance bucket.
      Insight::OracleSuccess => 2,
    }
  }
}

/// Every insight's rows, kept in menu order.
///
/// Serializes as a JSON object keyed by [`Insight::name`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
  sections: Vec<(Insight, Vec<Row>)>,
}

impl Insights {
  pub fn push(&mut self, insight: Insight, rows: Vec<Row>) {
    self.sections.push((insight, rows));
  }

  pub fn get(&self, insight: Insight) -> Option<&[Row]> {
    self
      .sections
      .iter()
      .find(|(i, _)| *i == insight)
      .map(|(_, rows)| rows.as_slice())
  }

  pub fn iter(&self) -> impl Iterator<Item = (Insight, &[Row])> {
    self.sections.iter().map(|(i, rows)| (*i, rows.as_slice()))
  }

  pub fn len(&self) -> usize { self.sections.len() }

  pub fn is_empty(&self) -> bool { self.sections.is_empty() }
}

impl Serialize for Insights {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.sections.len()))?;
    for (insight, rows) in &self.sections {
      map.serialize_entry(insight.name(), rows)?;
    }
    map.end()
  }
}

/// Row count of every table plus their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCounts {
  pub ships:      u64,
  pub humans:     u64,
  pub sleepers:   u64,
  pub agents:     u64,
  pub locations:  u64,
  pub oracles:    u64,
  pub missions:   u64,
  pub total_rows: u64,
}

impl RowCounts {
  /// Build from per-entity counts; `total_rows` is their sum.
  pub fn from_counts(counts: impl IntoIterator<Item = (EntityKind, u64)>) -> Self {
    let mut out = Self::default();
    for (kind, n) in counts {
      *out.slot(kind) = n;
    }
    out.total_rows = EntityKind::INSERT_ORDER.iter().map(|k| out.get(*k)).sum();
    out
  }

  pub fn get(&self, kind: EntityKind) -> u64 {
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

  fn slot(&mut self, kind: EntityKind) -> &mut u64 {
    match kind {
      EntityKind::Ship => &mut self.ships,
      EntityKind::Human => &mut self.humans,
      EntityKind::Sleeper => &mut self.sleepers,
      EntityKind::Agent => &mut self.agents,
      EntityKind::Location => &mut self.locations,
      EntityKind::Oracle => &mut self.oracles,
      EntityKind::Mission => &mut self.missions,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn insight_names_are_snake_case() {
    let names: Vec<_> = Insight::iter().map(Insight::name).collect();
    assert_eq!(names, [
      "busiest_ships",
      "agent_hotspots",
      "training_by_ship",
      "oracle_success",
      "notable_humans",
      "oracle_guided_examples",
      "top_agents",
    ]);
  }

  #[test]
  fn insights_serialize_in_menu_order() {
    let mut row = Row::new();
    row.insert("ship_id".into(), json!(1));

    let mut insights = Insights::default();
    insights.push(Insight::TopAgents, vec![]);
    insights.push(Insight::BusiestShips, vec![row]);

    let text = serde_json::to_string(&insights).unwrap();
    assert_eq!(text, r#"{"top_agents":[],"busiest_ships":[{"ship_id":1}]}"#);
    assert_eq!(insights.get(Insight::BusiestShips).map(<[Row]>::len), Some(1));
    assert!(insights.get(Insight::OracleSuccess).is_none());
  }

  #[test]
  fn row_counts_total_is_sum() {
    let counts = RowCounts::from_counts([
      (EntityKind::Ship, 25),
      (EntityKind::Human, 400),
      (EntityKind::Mission, 10),
    ]);
    assert_eq!(counts.total_rows, 435);
    assert_eq!(counts.get(EntityKind::Human), 400);
    assert_eq!(counts.sleepers, 0);

    let value = serde_json::to_value(counts).unwrap();
    assert_eq!(value["total_rows"], json!(435));
    assert_eq!(value["ships"], json!(25));
  }
}
