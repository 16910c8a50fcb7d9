//! Test utilities for the gym-checkin crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with the
//! `test-support` feature.

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use cap_std::{ambient_authority, fs::Dir};
use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use tempfile::TempDir;

use crate::domain::{Coordinate, Gym, GymDraft, GymId};

/// Clock whose current instant is set explicitly by the test.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Start the clock at a local wall-clock time.
    pub fn at_local(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self::new(local_instant(date, hour, minute))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    pub fn advance_days(&self, days: i64) {
        *self.lock_clock() += TimeDelta::days(days);
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// UTC instant for a local wall-clock time, taking the earliest mapping
/// when the local time is ambiguous.
pub fn local_instant(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let Some(naive) = date.and_hms_opt(hour, minute, 0) else {
        panic!("invalid wall-clock time {hour}:{minute}");
    };
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => panic!("local time {naive} does not exist"),
    }
}

/// Build a valid gym, panicking on invalid input.
pub fn gym_at(id: &str, title: &str, latitude: f64, longitude: f64) -> Gym {
    let draft = GymDraft {
        id: GymId::new(id).unwrap_or_else(|err| panic!("gym id {id:?}: {err}")),
        title: title.to_owned(),
        description: None,
        phone: None,
        location: Coordinate::new(latitude, longitude)
            .unwrap_or_else(|err| panic!("gym location: {err}")),
    };
    Gym::new(draft).unwrap_or_else(|err| panic!("gym {id:?}: {err}"))
}

/// A gym catalogue written to a temporary directory.
///
/// The directory is removed when the value is dropped.
pub struct TempCatalogue {
    _dir: TempDir,
    path: PathBuf,
}

impl TempCatalogue {
    /// Write `gyms` as a JSON catalogue.
    pub fn write(gyms: &[Gym]) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let contents = serde_json::to_vec_pretty(gyms).map_err(io::Error::other)?;
        Dir::open_ambient_dir(dir.path(), ambient_authority())?.write("gyms.json", contents)?;
        let path = dir.path().join("gyms.json");
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fixtures::load_gyms;

    #[rstest]
    fn advancing_a_day_moves_the_local_date() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 20).expect("valid date");
        let clock = MutableClock::at_local(date, 8, 0);

        clock.advance_days(1);

        assert_eq!(
            clock.local().date_naive(),
            NaiveDate::from_ymd_opt(2022, 1, 21).expect("valid date")
        );
    }

    #[rstest]
    fn temp_catalogue_round_trips_through_the_loader() {
        let gyms = vec![gym_at("gym-01", "JavaScript Gym", -23.3045386, -51.1689972)];
        let catalogue = TempCatalogue::write(&gyms).expect("catalogue written");

        assert_eq!(load_gyms(catalogue.path()).expect("catalogue loads"), gyms);
    }
}
