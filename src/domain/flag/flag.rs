use serde::{Deserialize, Serialize};
use std::{fmt, result, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse unknown flag {0}")]
    ParseFlagError(String),
}

pub type Result<T> = result::Result<T, Error>;

/// Represents the flag variants.
///
/// The set is closed: a message reference can only carry one of these
/// flags, and its identity string stores the flag by its uppercase
/// name.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    Deleted,
    Seen,
    Answered,
    Flagged,
    Draft,
    Recent,
    Forwarded,
    XDestroyed,
    XSendFailed,
    XSendInProgress,
    XDownloadedFull,
    XDownloadedPartial,
    XRemoteCopyStarted,
    XGotAllHeaders,
}

impl Flag {
    pub const ALL: [Flag; 14] = [
        Flag::Deleted,
        Flag::Seen,
        Flag::Answered,
        Flag::Flagged,
        Flag::Draft,
        Flag::Recent,
        Flag::Forwarded,
        Flag::XDestroyed,
        Flag::XSendFailed,
        Flag::XSendInProgress,
        Flag::XDownloadedFull,
        Flag::XDownloadedPartial,
        Flag::XRemoteCopyStarted,
        Flag::XGotAllHeaders,
    ];

    /// Returns the canonical uppercase name of the flag.
    pub fn name(&self) -> &'static str {
        match self {
            Flag::Deleted => "DELETED",
            Flag::Seen => "SEEN",
            Flag::Answered => "ANSWERED",
            Flag::Flagged => "FLAGGED",
            Flag::Draft => "DRAFT",
            Flag::Recent => "RECENT",
            Flag::Forwarded => "FORWARDED",
            Flag::XDestroyed => "X_DESTROYED",
            Flag::XSendFailed => "X_SEND_FAILED",
            Flag::XSendInProgress => "X_SEND_IN_PROGRESS",
            Flag::XDownloadedFull => "X_DOWNLOADED_FULL",
            Flag::XDownloadedPartial => "X_DOWNLOADED_PARTIAL",
            Flag::XRemoteCopyStarted => "X_REMOTE_COPY_STARTED",
            Flag::XGotAllHeaders => "X_GOT_ALL_HEADERS",
        }
    }

    /// Finds the flag matching exactly the given canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::ParseFlagError(s.to_owned()))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
