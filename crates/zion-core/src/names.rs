//! Name pools for person names and patrol streets.

use rand::{Rng, seq::SliceRandom};

/// `"{given} {family}"`.
pub fn person_name(rng: &mut impl Rng) -> String {
  format!("{} {}", pick(rng, GIVEN_NAMES), pick(rng, FAMILY_NAMES))
}

pub fn surname(rng: &mut impl Rng) -> &'static str { pick(rng, FAMILY_NAMES) }

/// `"{name} {suffix}"`, e.g. `"Wabash Avenue"`.
pub fn street_name(rng: &mut impl Rng) -> String {
  format!("{} {}", pick(rng, STREET_NAMES), pick(rng, STREET_SUFFIXES))
}

fn pick(rng: &mut impl Rng, pool: &'static [&'static str]) -> &'static str {
  pool.choose(rng).copied().unwrap_or_default()
}

static GIVEN_NAMES: &[&str] = &[
  "James", "John", "Robert", "Michael", "William", "David", "Joseph",
  "Charles", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara",
  "Susan", "Sarah", "Wei", "Yuki", "Aisha", "Pavel", "Ingrid", "Carlos",
  "Fatima", "Kenji", "Amara", "Lucia", "Tomas", "Nadia", "Omar", "Priya",
];

static FAMILY_NAMES: &[&str] = &[
  "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
  "Davis", "Rodriguez", "Martinez", "Anderson", "Taylor", "Thomas", "Moore",
  "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
  "Lewis", "Walker", "Hall", "Young", "Nakamura", "Okafor", "Novak",
  "Rossi", "Chen",
];

static STREET_NAMES: &[&str] = &[
  "Wabash", "Franklin", "Adams", "Lake", "Market", "State", "Union",
  "Madison", "Grand", "Clark", "Mercer", "Harbor", "Hill", "Kenmore",
];

static STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Boulevard", "Lane", "Road"];
