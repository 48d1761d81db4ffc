//! Conversions between domain values and SQLite column values.
//!
//! Flags are stored as `'Y'` / `'N'` text and timestamps as
//! `YYYY-MM-DD HH:MM:SS` text, so lexical order is chronological order.

use chrono::NaiveDateTime;
use rusqlite::types::{Value as SqlValue, ValueRef};
use serde_json::Value as Json;
use zion_core::Value;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn encode_timestamp(ts: NaiveDateTime) -> String {
  ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn encode_flag(flag: bool) -> &'static str { if flag { "Y" } else { "N" } }

pub fn encode_value(value: &Value) -> SqlValue {
  match value {
    Value::Null => SqlValue::Null,
    Value::Int(n) => SqlValue::Integer(*n),
    Value::Text(s) => SqlValue::Text(s.clone()),
    Value::Flag(b) => SqlValue::Text(encode_flag(*b).to_owned()),
    Value::Timestamp(ts) => SqlValue::Text(encode_timestamp(*ts)),
  }
}

/// A result column as JSON. Non-finite reals become `null`. No table stores
/// blobs; should a query ever yield one it comes back as a byte array.
pub fn column_to_json(value: ValueRef<'_>) -> Json {
  match value {
    ValueRef::Null => Json::Null,
    ValueRef::Integer(n) => Json::from(n),
    ValueRef::Real(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
    ValueRef::Text(bytes) => Json::String(String::from_utf8_lossy(bytes).into_owned()),
    ValueRef::Blob(bytes) => Json::from(bytes.to_vec()),
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use serde_json::json;

  use super::*;

  #[test]
  fn timestamps_use_sortable_text() {
    let ts = NaiveDate::from_ymd_opt(1999, 4, 1)
      .unwrap()
      .and_hms_opt(6, 30, 0)
      .unwrap();
    assert_eq!(
      encode_value(&Value::Timestamp(ts)),
      SqlValue::Text("1999-04-01 06:30:00".into())
    );
  }

  #[test]
  fn flags_and_nulls() {
    assert_eq!(encode_value(&Value::Flag(true)), SqlValue::Text("Y".into()));
    assert_eq!(encode_value(&Value::Flag(false)), SqlValue::Text("N".into()));
    assert_eq!(encode_value(&Value::Null), SqlValue::Null);
  }

  #[test]
  fn columns_to_json() {
    assert_eq!(column_to_json(ValueRef::Integer(7)), json!(7));
    assert_eq!(column_to_json(ValueRef::Real(42.5)), json!(42.5));
    assert_eq!(column_to_json(ValueRef::Real(f64::NAN)), Json::Null);
    assert_eq!(column_to_json(ValueRef::Text(b"Logos")), json!("Logos"));
    assert_eq!(column_to_json(ValueRef::Blob(&[0xde, 0xad])), json!([0xde, 0xad]));
    assert_eq!(column_to_json(ValueRef::Null), Json::Null);
  }
}
