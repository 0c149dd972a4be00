//! Luther Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Luther crates.

use serde::Deserialize;

/// Log verbosity, ordered from quietest to noisiest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors are reported
    #[serde(alias = "silent")]
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; `silent` is accepted as a synonym of `error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Scanning phase, used to address per-phase log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loader,
    Scanner,
    Emitter,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loader => "loader",
            Phase::Scanner => "scanner",
            Phase::Emitter => "emitter",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("luther::{}", self.as_str())
    }

    pub fn all() -> [Phase; 3] {
        [Phase::Loader, Phase::Scanner, Phase::Emitter]
    }
}

/// Per-phase level overrides; `None` falls back to the global level
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogTargets {
    pub loader: Option<LogLevel>,
    pub scanner: Option<LogLevel>,
    pub emitter: Option<LogLevel>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub targets: LogTargets,
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Loader => self.targets.loader,
            Phase::Scanner => self.targets.scanner,
            Phase::Emitter => self.targets.emitter,
        };
        specific.unwrap_or(self.level)
    }
}

/// Configuration for the scan definition loader
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Retry a missing relative table path against the definition file's directory
    pub resolve_relative_to_definition: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resolve_relative_to_definition: true,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LutherConfig {
    pub logging: LoggingConfig,
    pub loader: LoaderConfig,
}
