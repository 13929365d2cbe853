use ent_client::model::utils::{
    exercise_date_from_value, from_timestamp_millis, try_parse_exercise_date,
    try_parse_rack_date,
};
use serde_json::json;

#[test]
fn test_exercise_dates() {
    let date = try_parse_exercise_date("2024-03-14T09:26:53.589").unwrap();
    assert_eq!(date.format("%d/%m/%Y").to_string(), "14/03/2024");
    assert!(try_parse_exercise_date("14/03/2024").is_none());
}

#[test]
fn test_rack_dates() {
    let date = try_parse_rack_date("2024-03-14T09:26+0100").unwrap();
    assert_eq!(date.timestamp(), 1_710_404_760);
    assert!(try_parse_rack_date("2024-03-14").is_none());
}

#[test]
fn test_timestamp_millis() {
    let date = from_timestamp_millis(1_710_408_413_000).unwrap();
    assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-03-14");
}

#[test]
fn test_date_from_value() {
    assert!(exercise_date_from_value(Some(&json!("2024-03-14T09:26:53.589"))).is_some());
    assert!(exercise_date_from_value(Some(&json!(12))).is_none());
    assert!(exercise_date_from_value(None).is_none());
}
