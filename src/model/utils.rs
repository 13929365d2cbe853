/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Every ENT service formats dates its own way; these helpers turn the
//! known formats into chrono values and give `None` for anything else.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde_json::Value;

/// Format used by the exercizer and timeline services, e.g. `2024-03-14T09:26:53.589`
pub const EXERCISE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Format used by the rack service, e.g. `2024-03-14T09:26+0100`
pub const RACK_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M%z";

/// Parses an exercizer/timeline date
#[must_use]
pub fn try_parse_exercise_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, EXERCISE_DATE_FORMAT).ok()
}

/// Parses a rack date
#[must_use]
pub fn try_parse_rack_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, RACK_DATE_FORMAT).ok()
}

/// Converts a millisecond Unix timestamp (zimbra dates)
#[must_use]
pub fn from_timestamp_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Parses an exercise-format date held in an optional JSON value
#[must_use]
pub fn exercise_date_from_value(value: Option<&Value>) -> Option<NaiveDateTime> {
    value.and_then(Value::as_str).and_then(try_parse_exercise_date)
}
