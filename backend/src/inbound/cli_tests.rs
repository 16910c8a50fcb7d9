//! Tests for the command-line adapter.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{
    CheckInResponse, FetchNearbyGymsResponse, MockCheckInCommand, MockCheckInHistoryQuery,
    MockGymCommand, MockGymSearchQuery, MockNearbyGymsQuery, UserMetricsResponse,
};
use crate::domain::{CheckIn, Gym, GymDraft};

struct Mocks {
    nearby: MockNearbyGymsQuery,
    check_in: MockCheckInCommand,
    gyms: MockGymCommand,
    search: MockGymSearchQuery,
    history: MockCheckInHistoryQuery,
}

impl Mocks {
    fn into_ports(self) -> CliPorts {
        CliPorts {
            nearby: Arc::new(self.nearby),
            check_in: Arc::new(self.check_in),
            gyms: Arc::new(self.gyms),
            search: Arc::new(self.search),
            history: Arc::new(self.history),
        }
    }
}

#[fixture]
fn mocks() -> Mocks {
    Mocks {
        nearby: MockNearbyGymsQuery::new(),
        check_in: MockCheckInCommand::new(),
        gyms: MockGymCommand::new(),
        search: MockGymSearchQuery::new(),
        history: MockCheckInHistoryQuery::new(),
    }
}

fn parse(args: &[&str]) -> CliCommand {
    CliArgs::try_parse_from(std::iter::once("gym-checkin").chain(args.iter().copied()))
        .expect("arguments parse")
        .command
}

#[rstest]
fn parses_negative_coordinates() {
    let command = parse(&["nearby", "--latitude", "-23.3045386", "--longitude", "-51.1689972"]);

    assert_eq!(
        command,
        CliCommand::Nearby {
            latitude: -23.3045386,
            longitude: -51.1689972,
        }
    );
}

#[rstest]
fn search_page_defaults_to_one() {
    let command = parse(&["search", "--query", "script"]);

    assert_eq!(
        command,
        CliCommand::Search {
            query: "script".to_owned(),
            page: 1,
        }
    );
}

#[rstest]
fn search_query_may_start_with_a_hyphen() {
    let command = parse(&["search", "--query", "-fit", "--page", "2"]);

    assert_eq!(
        command,
        CliCommand::Search {
            query: "-fit".to_owned(),
            page: 2,
        }
    );
}

#[rstest]
fn search_requires_the_query_flag() {
    let result = CliArgs::try_parse_from(["gym-checkin", "search", "script"]);

    assert!(result.is_err());
}

#[rstest]
fn check_in_requires_a_gym_id() {
    let result = CliArgs::try_parse_from([
        "gym-checkin",
        "check-in",
        "--user-id",
        "user-01",
        "--latitude",
        "0",
        "--longitude",
        "0",
    ]);

    assert!(result.is_err());
}

#[rstest]
#[tokio::test]
async fn nearby_renders_gyms(mut mocks: Mocks) {
    let gym = Gym::new(GymDraft {
        id: GymId::new("gym-01").expect("valid gym id"),
        title: "JavaScript Gym".to_owned(),
        description: None,
        phone: None,
        location: Coordinate::new(-23.3045386, -51.1689972).expect("valid location"),
    })
    .expect("valid gym");
    mocks
        .nearby
        .expect_fetch_nearby()
        .times(1)
        .return_once(move |_| Ok(FetchNearbyGymsResponse { gyms: vec![gym] }));

    let body = dispatch(
        &mocks.into_ports(),
        CliCommand::Nearby {
            latitude: -23.3045386,
            longitude: -51.1689972,
        },
    )
    .await
    .expect("dispatch succeeds");

    assert_eq!(body["gyms"][0]["id"], "gym-01");
    assert_eq!(body["gyms"][0]["location"]["latitude"], -23.3045386);
}

#[rstest]
#[tokio::test]
async fn check_in_forwards_validated_request(mut mocks: Mocks) {
    mocks
        .check_in
        .expect_check_in()
        .withf(|request| {
            request.user_id.as_ref() == "user-01" && request.gym_id.as_ref() == "gym-01"
        })
        .times(1)
        .returning(|request| {
            Ok(CheckInResponse {
                check_in: CheckIn::new(
                    request.user_id,
                    request.gym_id,
                    Utc.with_ymd_and_hms(2022, 1, 20, 11, 0, 0)
                        .single()
                        .expect("valid timestamp"),
                ),
            })
        });

    let body = dispatch(
        &mocks.into_ports(),
        CliCommand::CheckIn {
            user_id: "user-01".to_owned(),
            gym_id: "gym-01".to_owned(),
            latitude: -23.3045386,
            longitude: -51.1689972,
        },
    )
    .await
    .expect("dispatch succeeds");

    assert_eq!(body["checkIn"]["gymId"], "gym-01");
    assert_eq!(body["checkIn"]["userId"], "user-01");
}

#[rstest]
#[case(CliCommand::Nearby { latitude: 91.0, longitude: 0.0 })]
#[case(CliCommand::Search { query: "gym".to_owned(), page: 0 })]
#[case(CliCommand::Metrics { user_id: " ".to_owned() })]
#[case(CliCommand::CheckIn {
    user_id: "user-01".to_owned(),
    gym_id: String::new(),
    latitude: 0.0,
    longitude: 0.0,
})]
#[tokio::test]
async fn invalid_arguments_never_reach_the_ports(mocks: Mocks, #[case] command: CliCommand) {
    let error = dispatch(&mocks.into_ports(), command)
        .await
        .expect_err("arguments are invalid");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn metrics_renders_count(mut mocks: Mocks) {
    mocks
        .history
        .expect_metrics()
        .times(1)
        .return_once(|_| Ok(UserMetricsResponse { check_ins_count: 3 }));

    let body = dispatch(
        &mocks.into_ports(),
        CliCommand::Metrics {
            user_id: "user-01".to_owned(),
        },
    )
    .await
    .expect("dispatch succeeds");

    assert_eq!(body, json!({ "checkInsCount": 3 }));
}

#[rstest]
#[case(ErrorCode::InvalidRequest, 2)]
#[case(ErrorCode::NotFound, 3)]
#[case(ErrorCode::MaxDistanceExceeded, 4)]
#[case(ErrorCode::MaxCheckInsExceeded, 5)]
#[case(ErrorCode::ServiceUnavailable, 69)]
#[case(ErrorCode::InternalError, 70)]
fn exit_codes_are_distinct(#[case] code: ErrorCode, #[case] expected: u8) {
    assert_eq!(exit_code_for(code), expected);
}

#[rstest]
fn error_body_keeps_business_rule_details() {
    let err = Error::max_distance_exceeded("too far").with_details(json!({ "distanceKm": 6.4 }));

    let body = error_body(&err);

    assert_eq!(body["code"], "max_distance_exceeded");
    assert_eq!(body["details"]["distanceKm"], 6.4);
}

#[rstest]
fn error_body_redacts_internal_errors() {
    let body = error_body(&Error::internal("connection string leaked"));

    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal error");
}

#[rstest]
fn error_body_passes_through_unavailable_errors() {
    let body = error_body(&Error::new(ErrorCode::ServiceUnavailable, "gym store lock poisoned"));

    assert_eq!(body["code"], "service_unavailable");
    assert_eq!(body["message"], "gym store lock poisoned");
}
