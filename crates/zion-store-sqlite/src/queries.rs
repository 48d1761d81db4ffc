//! SQL for the insight menu.
//!
//! Every ranking breaks ties on the ascending primary key of the ranked
//! entity, so results are reproducible for a given dataset.

use zion_core::insights::Insight;

pub fn sql(insight: Insight) -> &'static str {
  match insight {
    Insight::BusiestShips => BUSIEST_SHIPS,
    Insight::AgentHotspots => AGENT_HOTSPOTS,
    Insight::TrainingByShip => TRAINING_BY_SHIP,
    Insight::OracleSuccess => ORACLE_SUCCESS,
    Insight::NotableHumans => NOTABLE_HUMANS,
    Insight::OracleGuidedExamples => ORACLE_GUIDED_EXAMPLES,
    Insight::TopAgents => TOP_AGENTS,
  }
}

/// Ships with zero missions still appear, with `missions = 0`.
const BUSIEST_SHIPS: &str = "
SELECT s.ship_id, s.ship_name, COUNT(m.mission_id) AS missions
FROM resistance_ships s
LEFT JOIN missions m ON m.ship_id = s.ship_id
GROUP BY s.ship_id, s.ship_name
ORDER BY missions DESC, s.ship_id ASC
LIMIT 5";

const AGENT_HOTSPOTS: &str = "
SELECT l.location_id, l.loc_name, COUNT(*) AS encounters
FROM missions m
JOIN matrix_locations l ON l.location_id = m.target_location_id
WHERE m.agent_encountered = 'Y'
GROUP BY l.location_id, l.loc_name
ORDER BY encounters DESC, l.location_id ASC
LIMIT 10";

const TRAINING_BY_SHIP: &str = "
SELECT s.ship_id, s.ship_name,
       AVG(h.construct_training_hours) AS avg_training_hours,
       AVG(h.belief_level)             AS avg_belief
FROM resistance_ships s
JOIN awakened_humans h ON h.ship_id = s.ship_id
GROUP BY s.ship_id, s.ship_name
ORDER BY avg_training_hours DESC, s.ship_id ASC
LIMIT 10";

const ORACLE_SUCCESS: &str = "
SELECT CASE WHEN m.oracle_guidance_id IS NULL THEN 'No Oracle' ELSE 'Oracle' END AS guidance,
       COUNT(*) AS missions,
       ROUND(100.0 * AVG(CASE WHEN m.mission_status = 'Success' THEN 1 ELSE 0 END), 1) AS success_pct
FROM missions m
GROUP BY guidance
ORDER BY guidance ASC
LIMIT 2";

/// `mentor_name` is NULL for humans without a mentor.
const NOTABLE_HUMANS: &str = "
SELECT h.human_id,
       h.real_name,
       h.rsi_name,
       s.ship_name,
       h.jack_in_count,
       m.real_name AS mentor_name
FROM awakened_humans h
LEFT JOIN awakened_humans m ON m.human_id = h.mentor_id
LEFT JOIN resistance_ships s ON s.ship_id = h.ship_id
ORDER BY h.jack_in_count DESC, h.human_id ASC
LIMIT 5";

const ORACLE_GUIDED_EXAMPLES: &str = "
SELECT m.mission_id,
       m.mission_name,
       strftime('%Y-%m-%d', m.start_timestamp) AS start_date,
       s.ship_name,
       l.loc_name,
       o.oracle_identity
FROM missions m
JOIN resistance_ships s ON s.ship_id = m.ship_id
JOIN matrix_locations l ON l.location_id = m.target_location_id
JOIN oracles o ON o.oracle_id = m.oracle_guidance_id
WHERE m.oracle_guidance_id IS NOT NULL
ORDER BY m.start_timestamp DESC NULLS LAST, m.mission_id ASC
LIMIT 5";

const TOP_AGENTS: &str = "
SELECT agent_id,
       designation_code,
       threat_classification,
       termination_count,
       host_preference,
       patrol_zone
FROM agents
ORDER BY termination_count DESC, encounter_count DESC, agent_id ASC
LIMIT 5";
