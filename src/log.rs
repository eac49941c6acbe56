// src/log.rs
//
// Tiny append-only file logger. Lines look like
//   [00:00:01.042][INFO] Load: season 17 → 3 players
// Failures to open or write the log are swallowed; logging never fails a caller.

use std::fs::{ self, OpenOptions };
use std::io::Write;
use std::path::{ Path, PathBuf };
use std::sync::{ Mutex, OnceLock };
use std::time::Instant;

use crate::config::consts::LOG_FILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info  => "INFO",
            Level::Warn  => "WARN",
            Level::Error => "ERROR",
        }
    }
}

struct Sink {
    path: PathBuf,
    min: Level,
}

static SINK: Mutex<Option<Sink>> = Mutex::new(None);
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// Point the logger at `path` and drop everything below `min`.
/// Without a call to `init` the logger writes to `.store/debug.log` at Debug.
pub fn init(path: impl AsRef<Path>, min: Level) {
    let path = path.as_ref().to_path_buf();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    start();
    if let Ok(mut sink) = SINK.lock() {
        *sink = Some(Sink { path, min });
    }
}

pub(crate) fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub(crate) fn format_line(level: Level, elapsed_ms: u128, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

/// Backend for the `log*!` macros.
pub fn write_log(level: Level, msg: &str) {
    let line = format_line(level, start().elapsed().as_millis(), msg);

    let Ok(guard) = SINK.lock() else { return };
    let (path, min) = match guard.as_ref() {
        Some(s) => (s.path.as_path(), s.min),
        None => (Path::new(LOG_FILE), Level::Debug),
    };
    if level < min {
        return;
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn line_carries_level_tag() {
        let line = format_line(Level::Warn, 1_042, "Merge: 1 roster-only player");
        assert_eq!(line, "[00:00:01.042][WARN] Merge: 1 roster-only player\n");
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }
}
