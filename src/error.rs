//! Unified error types for the air bubbler plugin.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level entry point's error handling uniform. All variants are
//! `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level plugin error
// ---------------------------------------------------------------------------

/// Every fallible operation in the plugin funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or incomplete.
    Config(ConfigError),
    /// The PWM output could not be opened or written.
    Pwm(PwmError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pwm(e) => write!(f, "pwm: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A PWM channel name has no pin assignment in the pin map.
    ChannelNotMapped(&'static str),
    /// The config file could not be read or parsed.
    Unreadable,
    /// A config field failed range validation.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelNotMapped(channel) => {
                write!(f, "no pin mapped for PWM channel `{channel}`")
            }
            Self::Unreadable => write!(f, "config file unreadable"),
            Self::Invalid(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// PWM errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// The GPIO pin could not be acquired or configured.
    OpenFailed,
    /// A duty-cycle write failed.
    WriteFailed,
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailed => write!(f, "PWM output open failed"),
            Self::WriteFailed => write!(f, "PWM duty write failed"),
        }
    }
}

impl std::error::Error for PwmError {}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Plugin-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
