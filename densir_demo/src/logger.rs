// Copyright 2025 the Densir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small stderr backend for the `log` facade.

use std::env;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable overriding the `-v` level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub(crate) const ENV_VAR: &str = "DENSIR_LOG";

#[derive(Debug)]
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Maps `-v` repetitions to a level: warnings by default, then info, debug, trace.
pub(crate) fn level_for(verbosity: u8, env_value: Option<&str>) -> LevelFilter {
    if let Some(level) = env_value.and_then(|v| LevelFilter::from_str(v.trim()).ok()) {
        return level;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. Fails if another logger is already set.
pub(crate) fn init(verbosity: u8) -> Result<LevelFilter, SetLoggerError> {
    let env_value = env::var(ENV_VAR).ok();
    let level = level_for(verbosity, env_value.as_deref());
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(level)
}
