//! `gym-checkin` entry-point: wires in-memory adapters, domain services, and
//! the command-line adapter.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

use gym_checkin::config::AppSettings;
use gym_checkin::domain::{CheckInHistoryService, CheckInService, GymService, NearbyGymsService};
use gym_checkin::fixtures::seed_gym_repository;
use gym_checkin::inbound::cli::{CliArgs, CliPorts, dispatch, error_body, exit_code_for};
use gym_checkin::outbound::memory::InMemoryCheckInRepository;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("gym-checkin: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> io::Result<ExitCode> {
    let settings = AppSettings::load_from_iter([OsString::from("gym-checkin")])
        .map_err(|error| io::Error::other(format!("load configuration: {error}")))?;
    init_tracing(settings.log_json);

    let gym_repo = Arc::new(seed_gym_repository(&settings.gyms_path()).map_err(io::Error::other)?);
    let check_in_repo = Arc::new(InMemoryCheckInRepository::default());
    let ports = CliPorts {
        nearby: Arc::new(NearbyGymsService::new(gym_repo.clone())),
        check_in: Arc::new(CheckInService::new(
            gym_repo.clone(),
            check_in_repo.clone(),
            Arc::new(DefaultClock),
        )),
        gyms: Arc::new(GymService::new(gym_repo.clone())),
        search: Arc::new(GymService::new(gym_repo)),
        history: Arc::new(CheckInHistoryService::new(check_in_repo)),
    };

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;

    debug!(command = ?args.command, "dispatching");
    match runtime.block_on(dispatch(&ports, args.command)) {
        Ok(body) => {
            println!("{body}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("{}", error_body(&error));
            Ok(ExitCode::from(exit_code_for(error.code())))
        }
    }
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
