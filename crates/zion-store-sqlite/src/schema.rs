//! SQL schema for the Zion SQLite store.
//!
//! Executed by the seeder once the readiness check has succeeded. Column
//! order matches the generator tables in `zion_core::tables`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS resistance_ships (
    ship_id               INTEGER PRIMARY KEY,
    ship_name             TEXT    NOT NULL,
    ship_class            TEXT    NOT NULL,
    coordinates           TEXT    NOT NULL,
    emp_charge_status     INTEGER NOT NULL,
    crew_capacity         INTEGER NOT NULL,
    last_broadcast_depth  INTEGER NOT NULL,
    operational_condition TEXT    NOT NULL
);

-- mentor_id points at an earlier human; NULL when unmentored.
CREATE TABLE IF NOT EXISTS awakened_humans (
    human_id                 INTEGER PRIMARY KEY,
    real_name                TEXT    NOT NULL,
    rsi_name                 TEXT    NOT NULL,
    role                     TEXT    NOT NULL,
    mental_stability         INTEGER NOT NULL,
    awakening_date           TEXT    NOT NULL,   -- YYYY-MM-DD HH:MM:SS
    ship_id                  INTEGER NOT NULL REFERENCES resistance_ships(ship_id),
    specialty_skill          TEXT    NOT NULL,
    jack_in_count            INTEGER NOT NULL,
    in_matrix                TEXT    NOT NULL CHECK (in_matrix IN ('Y', 'N')),
    mentor_id                INTEGER REFERENCES awakened_humans(human_id),
    construct_training_hours INTEGER NOT NULL,
    belief_level             INTEGER NOT NULL,
    CHECK (mentor_id IS NULL OR mentor_id < human_id)
);

CREATE TABLE IF NOT EXISTS sleepers (
    sleeper_id           INTEGER PRIMARY KEY,
    simulated_identity   TEXT    NOT NULL,
    matrix_occupation    TEXT    NOT NULL,
    pod_location         TEXT    NOT NULL,
    connection_stability INTEGER NOT NULL,
    years_connected      INTEGER NOT NULL,
    awakening_potential  INTEGER NOT NULL,
    extraction_priority  INTEGER NOT NULL,
    anomaly_flags        INTEGER NOT NULL,
    rejection_risk       INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS agents (
    agent_id              INTEGER PRIMARY KEY,
    designation_code      TEXT    NOT NULL,
    threat_classification TEXT    NOT NULL,
    auth_level            INTEGER NOT NULL,
    encounter_count       INTEGER NOT NULL,
    termination_count     INTEGER NOT NULL,
    speed_rating          INTEGER NOT NULL,
    strength_rating       INTEGER NOT NULL,
    patrol_zone           TEXT    NOT NULL,
    replication_ability   TEXT    NOT NULL CHECK (replication_ability IN ('Y', 'N')),
    code_signature        TEXT    NOT NULL,
    host_preference       TEXT    NOT NULL,
    upgrade_generation    INTEGER NOT NULL,
    rule_bound            TEXT    NOT NULL CHECK (rule_bound IN ('Y', 'N'))
);

CREATE TABLE IF NOT EXISTS matrix_locations (
    location_id         INTEGER PRIMARY KEY,
    loc_name            TEXT    NOT NULL,
    security_level      INTEGER NOT NULL,
    hard_line_available TEXT    NOT NULL CHECK (hard_line_available IN ('Y', 'N')),
    agent_response_time INTEGER NOT NULL,
    glitch_frequency    INTEGER NOT NULL,
    civilian_density    INTEGER NOT NULL,
    notable_events      TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS oracles (
    oracle_id           INTEGER PRIMARY KEY,
    oracle_identity     TEXT    NOT NULL,
    location_id         INTEGER NOT NULL REFERENCES matrix_locations(location_id),
    prophecy_count      INTEGER NOT NULL,
    accuracy_rating     INTEGER NOT NULL,
    protection_level    INTEGER NOT NULL,
    foresight_range     INTEGER NOT NULL,
    choice_emphasis     INTEGER NOT NULL,
    protected_by        TEXT    NOT NULL,
    cookie_batch_status TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS missions (
    mission_id                 INTEGER PRIMARY KEY,
    mission_name               TEXT    NOT NULL,
    mission_type               TEXT    NOT NULL,
    target_location_id         INTEGER NOT NULL REFERENCES matrix_locations(location_id),
    ship_id                    INTEGER NOT NULL REFERENCES resistance_ships(ship_id),
    mission_status             TEXT    NOT NULL,
    start_timestamp            TEXT    NOT NULL,
    end_timestamp              TEXT,
    outcome                    TEXT    NOT NULL,
    casualties                 INTEGER NOT NULL,
    agent_encountered          TEXT    NOT NULL CHECK (agent_encountered IN ('Y', 'N')),
    oracle_guidance_id         INTEGER REFERENCES oracles(oracle_id),
    danger_rating              INTEGER NOT NULL,
    operator_callsign          TEXT    NOT NULL,
    hard_line_exit_location_id INTEGER REFERENCES matrix_locations(location_id),
    code_anomaly_detected      TEXT    NOT NULL CHECK (code_anomaly_detected IN ('Y', 'N')),
    bullet_time_events         INTEGER NOT NULL,
    CHECK (end_timestamp IS NULL OR end_timestamp >= start_timestamp)
);

CREATE INDEX IF NOT EXISTS humans_ship_idx           ON awakened_humans(ship_id);
CREATE INDEX IF NOT EXISTS missions_ship_idx         ON missions(ship_id);
CREATE INDEX IF NOT EXISTS missions_target_idx       ON missions(target_location_id);
CREATE INDEX IF NOT EXISTS missions_oracle_idx       ON missions(oracle_guidance_id);

PRAGMA user_version = 1;
";
