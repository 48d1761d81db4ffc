//! Canonical rows: fixed, recognizable records written ahead of the
//! randomized filler. They take ids `1..=n` of their entity.
//!
//! Values are listed in the column order of the entity's
//! [`TableSpec`](crate::field::TableSpec), without the id. Every reference
//! points at another canonical row, so any target at or above the anchor
//! counts keeps the dataset consistent.

use chrono::NaiveDate;

use crate::{EntityKind, Error, Result, Value};

/// Canonical rows for `kind`, in id order.
pub fn anchors(kind: EntityKind) -> Result<Vec<Vec<Value>>> {
  let rows = match kind {
    EntityKind::Ship => vec![
      vec![t("Nebuchadnezzar"), t("Mark III"), t("X:100,Y:200,Z:300"), i(80), i(12), i(5000), t("Optimal")],
      vec![t("Logos"), t("Mark IV"), t("X:150,Y:250,Z:350"), i(60), i(10), i(4800), t("Damaged")],
      vec![t("Mjolnir"), t("Prototype"), t("X:200,Y:300,Z:400"), i(90), i(15), i(5200), t("Optimal")],
    ],
    EntityKind::Human => vec![
      vec![
        t("Thomas Anderson"), t("Neo"), t("Fighter"), i(90), at(kind, (1999, 4, 1), (2, 14))?,
        i(1), t("Kung Fu Master"), i(50), f(true), Value::Null, i(200), i(5),
      ],
      vec![
        t("Morpheus"), t("Morpheus"), t("Commander"), i(95), at(kind, (1996, 7, 14), (0, 0))?,
        i(1), t("Leadership"), i(30), f(false), Value::Null, i(150), i(5),
      ],
      vec![
        t("Trinity"), t("Trinity"), t("Fighter"), i(85), at(kind, (1998, 2, 20), (23, 5))?,
        i(1), t("Infiltration Expert"), i(40), f(true), i(2), i(180), i(4),
      ],
    ],
    EntityKind::Sleeper => Vec::new(),
    EntityKind::Agent => vec![
      vec![
        t("Agent_Smith_001"), t("Critical"), i(8), i(20), i(5), i(9), i(9), t("Downtown"),
        f(true), t("SMITH_V1"), t("Businessmen"), i(2), f(false),
      ],
      vec![
        t("Agent_Jones_001"), t("High"), i(6), i(10), i(2), i(7), i(8), t("Subway"),
        f(false), t("JONES_V1"), t("Police"), i(1), f(true),
      ],
    ],
    EntityKind::Location => vec![
      vec![t("Corporate Lobby"), i(3), f(true), i(30), i(5), i(500), t("Agent Smith confrontation")],
      vec![t("Rooftop Helipad"), i(4), f(false), i(20), i(10), i(50), t("Bullet time event")],
      vec![t("Oracle Apartment"), i(2), f(true), i(60), i(2), i(100), t("Prophecy delivered")],
    ],
    EntityKind::Oracle => vec![
      vec![t("The Oracle"), i(3), i(50), i(95), i(3), i(30), i(5), t("Seraph"), t("Fresh")],
      vec![t("Oracle_Beta"), i(3), i(30), i(80), i(2), i(20), i(4), t("Guardian_2"), t("Baking")],
    ],
    EntityKind::Mission => vec![
      vec![
        t("Rescue Neo"), t("Extraction"), i(1), i(1), t("Success"),
        at(kind, (1999, 3, 31), (22, 0))?, at(kind, (1999, 4, 1), (6, 30))?,
        t("Neo freed"), i(0), f(true), i(1), i(3), t("Switch"), i(1), f(false), i(2),
      ],
      vec![
        t("Oracle Consult"), t("Oracle Consultation"), i(3), i(1), t("Success"),
        at(kind, (1999, 4, 2), (10, 0))?, at(kind, (1999, 4, 2), (14, 45))?,
        t("Prophecy received"), i(0), f(false), i(1), i(2), t("Apoc"), i(3), f(true), i(0),
      ],
    ],
  };
  Ok(rows)
}

/// Number of canonical rows for `kind`.
pub fn anchor_count(kind: EntityKind) -> usize {
  match kind {
    EntityKind::Ship | EntityKind::Human | EntityKind::Location => 3,
    EntityKind::Agent | EntityKind::Oracle | EntityKind::Mission => 2,
    EntityKind::Sleeper => 0,
  }
}

fn t(s: &str) -> Value { Value::text(s) }

fn i(n: i64) -> Value { Value::Int(n) }

fn f(b: bool) -> Value { Value::Flag(b) }

fn at(kind: EntityKind, (y, m, d): (i32, u32, u32), (hh, mm): (u32, u32)) -> Result<Value> {
  NaiveDate::from_ymd_opt(y, m, d)
    .and_then(|date| date.and_hms_opt(hh, mm, 0))
    .map(Value::Timestamp)
    .ok_or_else(|| Error::InvalidAnchor {
      kind,
      reason: format!("{y:04}-{m:02}-{d:02} {hh:02}:{mm:02} is not a valid timestamp"),
    })
}
