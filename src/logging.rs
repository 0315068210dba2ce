// src/logging.rs
//
// Logger setup on top of `env_logger`. Records carry the elapsed time since
// start-up: `[hh:mm:ss.mmm][LEVEL] message`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Where log records go.
pub enum LogTarget {
    Stderr,
    /// Append to a file (GUI builds have no console on Windows).
    File(PathBuf),
}

impl LogTarget {
    /// `.store/debug.log`
    pub fn default_file() -> Self {
        LogTarget::File(Path::new(STORE_DIR).join(LOG_FILE))
    }
}

/// Install the global logger. `RUST_LOG` wins over `verbose`.
/// Calling twice is harmless; the second call is ignored.
pub fn init(target: LogTarget, verbose: bool) -> io::Result<()> {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    start();

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    let _ = builder.try_init();
    Ok(())
}
