//! Regression coverage for the domain error payload.

use serde_json::{Value, json};

use super::*;

#[test]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::NotFound, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[test]
fn constructors_set_the_expected_code() {
    assert_eq!(Error::not_found("missing").code(), ErrorCode::NotFound);
    assert_eq!(
        Error::duplicate_email("taken").code(),
        ErrorCode::DuplicateEmail
    );
    assert_eq!(Error::invalid_state("closed").code(), ErrorCode::InvalidState);
    assert_eq!(Error::conflict("already").code(), ErrorCode::Conflict);
    assert_eq!(Error::invalid_request("bad").code(), ErrorCode::InvalidRequest);
    assert_eq!(Error::internal("boom").code(), ErrorCode::InternalError);
}

#[test]
fn serialises_code_as_snake_case_and_omits_empty_details() {
    let value = serde_json::to_value(Error::duplicate_email("Email already registered"))
        .expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "duplicate_email", "message": "Email already registered" })
    );
}

#[test]
fn details_round_trip_through_json() {
    let error = Error::invalid_request("name must not be empty")
        .with_details(json!({ "field": "name" }));
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value.get("details").and_then(|d| d.get("field")),
        Some(&Value::String("name".into()))
    );

    let decoded: Error = serde_json::from_value(value).expect("deserialise error");
    assert_eq!(decoded, error);
}
