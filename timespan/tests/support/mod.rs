#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;
use timespan::clock::WallClock;
use timespan::models::{DayOfWeek, Interval};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets or unsets the given environment variables for the duration of `f`.
///
/// Each `(key, Some(value))` is exported and each `(key, None)` is removed.
/// Every key gets its old value back once `f` returns or panics. Calls hold
/// a global lock, so two config tests never see each other's variables.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Writes `content` to a temporary `.toml` file kept alive by the handle.
pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

pub fn iv(from: i32, to: i32) -> Interval {
    Interval::new(from, to).expect("valid interval")
}

pub fn at(weekday: DayOfWeek, minute: i32) -> WallClock {
    WallClock::new(weekday, minute).expect("valid wall clock")
}
