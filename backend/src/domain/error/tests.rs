//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn distance_error() -> Error {
    Error::max_distance_exceeded("user is 6.42 km from the gym")
        .with_details(json!({ "distanceKm": 6.42 }))
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::max_distance_exceeded("far"), ErrorCode::MaxDistanceExceeded)]
#[case(Error::max_check_ins_exceeded("again"), ErrorCode::MaxCheckInsExceeded)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyMessage)));
}

#[rstest]
#[case(ErrorCode::NotFound, true)]
#[case(ErrorCode::MaxDistanceExceeded, true)]
#[case(ErrorCode::MaxCheckInsExceeded, true)]
#[case(ErrorCode::ServiceUnavailable, false)]
#[case(ErrorCode::InternalError, false)]
#[case(ErrorCode::InvalidRequest, false)]
fn business_rule_codes_are_distinguished(#[case] code: ErrorCode, #[case] expected: bool) {
    assert_eq!(code.is_business_rule(), expected);
}

#[rstest]
fn serialises_code_in_snake_case(distance_error: Error) {
    let value = serde_json::to_value(&distance_error).expect("error serialises");
    assert_eq!(value["code"], "max_distance_exceeded");
    assert_eq!(value["message"], "user is 6.42 km from the gym");
    assert_eq!(value["details"]["distanceKm"], 6.42);
}

#[rstest]
fn deserialising_rejects_blank_messages() {
    let payload = json!({ "code": "not_found", "message": "  " });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn display_uses_message(distance_error: Error) {
    assert_eq!(distance_error.to_string(), "user is 6.42 km from the gym");
}
