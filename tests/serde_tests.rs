//! Serde round-trip tests for the Value/Record data model.

#![cfg(feature = "serde")]

use recollect::record;
use recollect::record::{Record, Value};
use rstest::rstest;

#[rstest]
fn test_value_serializes_to_json() {
    let value = Value::Seq(vec![
        Value::Null,
        Value::from(true),
        Value::from(1.5),
        Value::from("text"),
    ]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "[null,true,1.5,\"text\"]");
}

#[rstest]
fn test_record_serializes_as_map_in_field_order() {
    let item = record! { "name" => "Laptop", "price" => 1200.0 };
    let json = serde_json::to_string(&item).unwrap();
    assert_eq!(json, "{\"name\":\"Laptop\",\"price\":1200.0}");
}

#[rstest]
fn test_value_round_trips_through_json() {
    let original = Value::Seq(vec![
        Value::from(1.0),
        Value::Seq(vec![Value::from(2.0), Value::Null]),
        Value::from("nested"),
    ]);
    let json = serde_json::to_string(&original).unwrap();
    let decoded: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}

#[rstest]
fn test_record_round_trips_through_json() {
    // Deserializing straight into Record reads entries in document order,
    // so field order survives the round trip.
    let original = record! {
        "name" => "John",
        "age" => 30.0,
        "city" => "New York",
    };
    let json = serde_json::to_string(&original).unwrap();
    let decoded: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}

#[rstest]
fn test_integers_deserialize_as_numbers() {
    let decoded: Value = serde_json::from_str("42").unwrap();
    assert_eq!(decoded, Value::from(42.0));
}

#[rstest]
fn test_nested_record_deserializes() {
    let decoded: Record = serde_json::from_str("{\"inner\":{\"flag\":true}}").unwrap();
    let inner = decoded.get("inner").and_then(Value::as_record).unwrap();
    assert_eq!(inner.get("flag").and_then(Value::as_bool), Some(true));
}
