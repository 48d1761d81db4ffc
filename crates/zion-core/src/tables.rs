//! Generator tables for the seven entities.
//!
//! Ranges are inclusive. Column order here is the column order of the SQL
//! tables and of every [`Record`](crate::Record).

use crate::{
  EntityKind,
  field::{Column, FieldGen, TableSpec},
};

use FieldGen::*;

pub const SHIP_CLASSES: &[&str] = &["Mark III", "Mark IV", "Prototype"];
pub const SHIP_CONDITIONS: &[&str] = &["Optimal", "Damaged", "Critical"];

pub static SHIPS: TableSpec = TableSpec {
  kind:      EntityKind::Ship,
  table:     "resistance_ships",
  id_column: "ship_id",
  columns:   &[
    Column::new("ship_name", Label("Ship")),
    Column::new("ship_class", OneOf(SHIP_CLASSES)),
    Column::new("coordinates", Coordinates(1000)),
    Column::new("emp_charge_status", Range(50, 100)),
    Column::new("crew_capacity", Range(8, 20)),
    Column::new("last_broadcast_depth", Range(4000, 6000)),
    Column::new("operational_condition", OneOf(SHIP_CONDITIONS)),
  ],
};

pub const ROLES: &[&str] = &["Commander", "Operator", "Fighter", "Medic"];
pub const SPECIALTIES: &[&str] = &[
  "Kung Fu Master",
  "Code Breaker",
  "Weapons Expert",
  "Medic Specialist",
  "Pilot",
];

pub static HUMANS: TableSpec = TableSpec {
  kind:      EntityKind::Human,
  table:     "awakened_humans",
  id_column: "human_id",
  columns:   &[
    Column::new("real_name", PersonName),
    Column::new("rsi_name", Label("RSI")),
    Column::new("role", OneOf(ROLES)),
    Column::new("mental_stability", Range(50, 100)),
    Column::new("awakening_date", Timestamp { from_year: 1995, to_year: 2025 }),
    Column::new("ship_id", Parent(EntityKind::Ship)),
    Column::new("specialty_skill", OneOf(SPECIALTIES)),
    Column::new("jack_in_count", Range(0, 100)),
    Column::new("in_matrix", Flag),
    Column::new("mentor_id", Mentor).optional(0.8),
    Column::new("construct_training_hours", Range(50, 300)),
    Column::new("belief_level", Range(1, 5)),
  ],
};

pub const OCCUPATIONS: &[&str] = &[
  "Accountant",
  "Office Worker",
  "Police Officer",
  "Teacher",
  "Programmer",
];

pub static SLEEPERS: TableSpec = TableSpec {
  kind:      EntityKind::Sleeper,
  table:     "sleepers",
  id_column: "sleeper_id",
  columns:   &[
    Column::new("simulated_identity", PersonName),
    Column::new("matrix_occupation", OneOf(OCCUPATIONS)),
    Column::new("pod_location", Pod { sectors: 50 }),
    Column::new("connection_stability", Range(80, 100)),
    Column::new("years_connected", Range(5, 50)),
    Column::new("awakening_potential", Range(0, 100)),
    Column::new("extraction_priority", Range(0, 100)),
    Column::new("anomaly_flags", Range(0, 5)),
    Column::new("rejection_risk", Range(0, 20)),
  ],
};

pub const THREAT_CLASSES: &[&str] = &["Low", "Medium", "High"];
pub const HOSTS: &[&str] = &["Businessmen", "Police", "Civilians"];

pub static AGENTS: TableSpec = TableSpec {
  kind:      EntityKind::Agent,
  table:     "agents",
  id_column: "agent_id",
  columns:   &[
    Column::new("designation_code", Designation("Agent")),
    Column::new("threat_classification", OneOf(THREAT_CLASSES)),
    Column::new("auth_level", Range(1, 10)),
    Column::new("encounter_count", Range(0, 50)),
    Column::new("termination_count", Range(0, 10)),
    Column::new("speed_rating", Range(1, 10)),
    Column::new("strength_rating", Range(1, 10)),
    Column::new("patrol_zone", StreetName),
    Column::new("replication_ability", Flag),
    Column::new("code_signature", Label("CODE")),
    Column::new("host_preference", OneOf(HOSTS)),
    Column::new("upgrade_generation", Range(1, 3)),
    Column::new("rule_bound", Flag),
  ],
};

pub const LOCATION_KINDS: &[&str] = &[
  "Subway Station",
  "Warehouse",
  "Government Building",
  "Alley",
  "Nightclub",
];

pub static LOCATIONS: TableSpec = TableSpec {
  kind:      EntityKind::Location,
  table:     "matrix_locations",
  id_column: "location_id",
  columns:   &[
    Column::new("loc_name", LabelOneOf(LOCATION_KINDS)),
    Column::new("security_level", Range(1, 5)),
    Column::new("hard_line_available", Flag),
    Column::new("agent_response_time", Range(10, 120)),
    Column::new("glitch_frequency", Range(0, 20)),
    Column::new("civilian_density", Range(0, 1000)),
    Column::new("notable_events", Label("Event")),
  ],
};

pub const BATCH_STATUSES: &[&str] = &["Fresh", "Baking", "None"];

pub static ORACLES: TableSpec = TableSpec {
  kind:      EntityKind::Oracle,
  table:     "oracles",
  id_column: "oracle_id",
  columns:   &[
    Column::new("oracle_identity", Label("Oracle")),
    Column::new("location_id", Parent(EntityKind::Location)),
    Column::new("prophecy_count", Range(10, 100)),
    Column::new("accuracy_rating", Range(70, 95)),
    Column::new("protection_level", Range(1, 5)),
    Column::new("foresight_range", Range(10, 60)),
    Column::new("choice_emphasis", Range(1, 5)),
    Column::new("protected_by", Label("Guardian")),
    Column::new("cookie_batch_status", OneOf(BATCH_STATUSES)),
  ],
};

pub const MISSION_TYPES: &[&str] = &[
  "Extraction",
  "Sabotage",
  "Oracle Consultation",
  "Agent Evasion",
  "Intelligence Gathering",
];
pub const MISSION_STATUSES: &[&str] = &["Planned", "Active", "Success", "Failed"];
pub const CALLSIGNS: &[&str] = &["Switch", "Apoc", "Cypher", "Mouse", "Dozer"];

pub static MISSIONS: TableSpec = TableSpec {
  kind:      EntityKind::Mission,
  table:     "missions",
  id_column: "mission_id",
  columns:   &[
    Column::new("mission_name", Label("Mission")),
    Column::new("mission_type", OneOf(MISSION_TYPES)),
    Column::new("target_location_id", Parent(EntityKind::Location)),
    Column::new("ship_id", Parent(EntityKind::Ship)),
    Column::new("mission_status", OneOf(MISSION_STATUSES)),
    Column::new("start_timestamp", Timestamp { from_year: 1995, to_year: 2025 }),
    Column::new("end_timestamp", DaysAfter { column: "start_timestamp", max_days: 7 })
      .optional(0.8),
    Column::new("outcome", Label("Outcome")),
    Column::new("casualties", Range(0, 5)),
    Column::new("agent_encountered", Flag),
    Column::new("oracle_guidance_id", Parent(EntityKind::Oracle)).optional(0.3),
    Column::new("danger_rating", Range(1, 5)),
    Column::new("operator_callsign", OneOf(CALLSIGNS)),
    Column::new("hard_line_exit_location_id", Parent(EntityKind::Location))
      .optional(0.5),
    Column::new("code_anomaly_detected", Flag),
    Column::new("bullet_time_events", Range(0, 3)),
  ],
};
