//! Command-line adapter translating subcommands into driving-port calls.
//!
//! Purpose: keep clap and output formatting at the edge. Each subcommand
//! validates its raw arguments into domain types, calls one port, and
//! yields the response as JSON. Domain errors map to distinct exit codes.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::ports::{
    CheckInCommand, CheckInHistoryQuery, CheckInHistoryRequest, CheckInRequest, CreateGymRequest,
    FetchNearbyGymsRequest, GymCommand, GymSearchQuery, NearbyGymsQuery, SearchGymsRequest,
    UserMetricsRequest,
};
use crate::domain::{Coordinate, Error, ErrorCode, GymId, Page, UserId};

/// `gym-checkin` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gym-checkin",
    about = "Check in at gyms and search for gyms near a location",
    version
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Supported subcommands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CliCommand {
    /// List gyms within 10 km, closest first.
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Record a check-in for a user standing at a gym.
    CheckIn {
        #[arg(long = "user-id", value_name = "id")]
        user_id: String,
        #[arg(long = "gym-id", value_name = "id")]
        gym_id: String,
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Search gyms by title.
    Search {
        #[arg(long, allow_hyphen_values = true)]
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Register a gym.
    CreateGym {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    /// List a user's check-ins, newest first.
    History {
        #[arg(long = "user-id", value_name = "id")]
        user_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Report a user's total check-ins.
    Metrics {
        #[arg(long = "user-id", value_name = "id")]
        user_id: String,
    },
}

/// Parameter object bundling the driving ports the CLI dispatches to.
#[derive(Clone)]
pub struct CliPorts {
    pub nearby: Arc<dyn NearbyGymsQuery>,
    pub check_in: Arc<dyn CheckInCommand>,
    pub gyms: Arc<dyn GymCommand>,
    pub search: Arc<dyn GymSearchQuery>,
    pub history: Arc<dyn CheckInHistoryQuery>,
}

/// Run one subcommand and return its JSON response.
pub async fn dispatch(ports: &CliPorts, command: CliCommand) -> Result<Value, Error> {
    match command {
        CliCommand::Nearby {
            latitude,
            longitude,
        } => {
            let request = FetchNearbyGymsRequest {
                user_location: parse_location(latitude, longitude)?,
            };
            to_json(&ports.nearby.fetch_nearby(request).await?)
        }
        CliCommand::CheckIn {
            user_id,
            gym_id,
            latitude,
            longitude,
        } => {
            let request = CheckInRequest {
                user_id: parse_user_id(&user_id)?,
                gym_id: GymId::new(&gym_id)
                    .map_err(|err| Error::invalid_request(format!("invalid gym id: {err}")))?,
                user_location: parse_location(latitude, longitude)?,
            };
            to_json(&ports.check_in.check_in(request).await?)
        }
        CliCommand::Search { query, page } => {
            let request = SearchGymsRequest {
                query,
                page: parse_page(page)?,
            };
            to_json(&ports.search.search(request).await?)
        }
        CliCommand::CreateGym {
            title,
            description,
            phone,
            latitude,
            longitude,
        } => {
            let request = CreateGymRequest {
                title,
                description,
                phone,
                location: parse_location(latitude, longitude)?,
            };
            to_json(&ports.gyms.create_gym(request).await?)
        }
        CliCommand::History { user_id, page } => {
            let request = CheckInHistoryRequest {
                user_id: parse_user_id(&user_id)?,
                page: parse_page(page)?,
            };
            to_json(&ports.history.history(request).await?)
        }
        CliCommand::Metrics { user_id } => {
            let request = UserMetricsRequest {
                user_id: parse_user_id(&user_id)?,
            };
            to_json(&ports.history.metrics(request).await?)
        }
    }
}

/// Process exit code reported for a domain error code.
pub fn exit_code_for(code: ErrorCode) -> u8 {
    match code {
        ErrorCode::InvalidRequest => 2,
        ErrorCode::NotFound => 3,
        ErrorCode::MaxDistanceExceeded => 4,
        ErrorCode::MaxCheckInsExceeded => 5,
        ErrorCode::ServiceUnavailable => 69,
        ErrorCode::InternalError => 70,
    }
}

/// JSON body printed for a failed subcommand.
///
/// Internal errors are logged in full and replaced with a generic message.
/// Business-rule rejections are expected outcomes and only logged at debug.
pub fn error_body(err: &Error) -> Value {
    let code = err.code();
    let shown = if matches!(code, ErrorCode::InternalError) {
        error!(error = %err, "internal error");
        Error::internal("Internal error")
    } else if code.is_business_rule() {
        debug!(?code, error = %err, "request rejected");
        err.clone()
    } else {
        warn!(?code, error = %err, "request failed");
        err.clone()
    };
    serde_json::to_value(&shown).unwrap_or_else(|_| Value::String(shown.message().to_owned()))
}

fn parse_location(latitude: f64, longitude: f64) -> Result<Coordinate, Error> {
    Coordinate::new(latitude, longitude)
        .map_err(|err| Error::invalid_request(format!("invalid location: {err}")))
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| Error::invalid_request(format!("invalid user id: {err}")))
}

fn parse_page(raw: u32) -> Result<Page, Error> {
    Page::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

fn to_json<T: Serialize>(response: &T) -> Result<Value, Error> {
    serde_json::to_value(response)
        .map_err(|err| Error::internal(format!("failed to encode response: {err}")))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
