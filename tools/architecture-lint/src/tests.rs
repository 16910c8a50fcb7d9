//! Unit tests for the architecture lint.

use rstest::rstest;

use super::*;

fn lint_one(file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
    lint_sources(&[LintSource::new(file, contents)])
}

#[rstest]
#[case(
    "inbound/cli.rs",
    "use crate::domain::ports::CheckInCommand; fn run(_: &dyn CheckInCommand) {}",
    true
)]
#[case(
    "inbound/cli.rs",
    "use crate::outbound::memory::InMemoryGymRepository; fn run() { let _ = InMemoryGymRepository::default(); }",
    false
)]
#[case(
    "inbound/cli.rs",
    "use gym_checkin::outbound::memory; fn run() {}",
    false
)]
#[case("inbound/cli.rs", "use cap_std::fs::Dir; fn run() {}", false)]
#[case(
    "domain/check_in_service.rs",
    "use tracing::info; fn run() { info!(\"checked in\"); }",
    false
)]
#[case(
    "domain/check_in_service.rs",
    "fn run() { crate::fixtures::load_gyms(); }",
    false
)]
#[case(
    "domain/check_in_service.rs",
    "use mockable::Clock; #[tokio::test] async fn checks_in() {}",
    true
)]
#[case(
    "outbound/memory/in_memory_gym_repository.rs",
    "use super::super::inbound::cli; fn run() {}",
    false
)]
#[case(
    "outbound/memory/in_memory_gym_repository.rs",
    "use tracing::debug; use crate::domain::GeoBox; fn run() {}",
    true
)]
fn detects_boundary_violations(#[case] file: &str, #[case] contents: &str, #[case] ok: bool) {
    let result = lint_one(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
fn files_outside_the_layers_are_rejected() {
    let err = lint_one("main.rs", "fn main() {}").expect_err("no layer");
    assert!(matches!(err, ArchitectureLintError::Parse { .. }));
}

#[rstest]
fn repeated_paths_report_one_violation_per_rule() {
    let err = lint_one(
        "domain/gym.rs",
        "use clap::Parser; fn a() { clap::Command::new(\"a\"); }",
    )
    .expect_err("clap in domain");

    let ArchitectureLintError::Violations(violations) = err else {
        panic!("expected violations, got {err:?}");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].file, Utf8PathBuf::from("domain/gym.rs"));
}
