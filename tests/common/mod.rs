#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use mei_core::FixedClock;
use mei_rapidix::{links::LinkOpener, App, AppError, Config};
use mei_storage_json::JsonFileStorage;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh data directory that outlives the calling test.
pub fn temp_data_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opener that accepts every URL without launching anything.
pub struct NoopOpener;

impl LinkOpener for NoopOpener {
    fn open(&self, _url: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// Builds an app over JSON files in `base`, pinned to `today`.
pub fn app_at(base: &Path, today: NaiveDate) -> App {
    let storage = JsonFileStorage::new(base.join("ledger")).expect("create json storage");
    App::with_parts(
        Config::default(),
        Box::new(storage),
        Box::new(FixedClock(today)),
        Box::new(NoopOpener),
    )
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
