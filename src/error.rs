use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can abort a single `elapsed` invocation.
///
/// The binary prints the message to stdout and exits with [`Error::exit_code`].
#[derive(Debug, Error)]
pub enum Error {
    /// Bad option, extra argument, unknown command or no arguments at all.
    #[error("{0}")]
    Usage(String),

    /// Help was requested; carries the rendered help text.
    #[error("{0}")]
    Help(String),

    #[error("{}", describe(.name, "was not started"))]
    NotStarted { name: String },

    #[error("{}", describe(.name, "was not found"))]
    NotFound { name: String },

    /// The timer file had the wrong size and has been removed.
    #[error("{}", corrupt(.name, .empty))]
    Corrupt { name: String, empty: bool },

    #[error("No start-time set{}", for_name(.name))]
    NoStartTime { name: String },

    #[error("Unable to access timer file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Process exit status reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotStarted { .. } | Self::NotFound { .. } => 2,
            Self::Corrupt { .. } => 3,
            Self::Usage(_)
            | Self::Help(_)
            | Self::NoStartTime { .. }
            | Self::Io { .. }
            | Self::Other(_) => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe(name: &str, what: &str) -> String {
    if name.is_empty() {
        format!("Default (unnamed) timer {what}.")
    } else {
        format!("Timer named '{name}' {what}.")
    }
}

fn corrupt(name: &str, empty: &bool) -> String {
    format!(
        "{} start-timer found but is {}. Timer removed.",
        if name.is_empty() { "default" } else { name },
        if *empty { "empty" } else { "corrupted" }
    )
}

fn for_name(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!(" for {name}")
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
