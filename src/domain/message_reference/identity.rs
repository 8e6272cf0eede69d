//! Identity module.
//!
//! This module contains the codec turning a message reference into
//! its identity string, and back. The identity string has the
//! following shape:
//!
//! ```text
//! #:b64(account uuid):b64(folder id):b64(folder server id):b64(uid)[:FLAG]
//! ```
//!
//! Every field except the flag is encoded with the standard base64
//! alphabet, padding included. The flag, when present, is stored by
//! its canonical uppercase name.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::{debug, trace};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, num::ParseIntError, result, str::FromStr, string::FromUtf8Error};
use thiserror::Error;

use crate::{flag, Flag, MessageReference};

pub const IDENTITY_MARKER: &str = "#";
pub const IDENTITY_SEPARATOR: char = ':';

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find identity marker in message reference {0}")]
    ParseMarkerError(String),
    #[error("cannot parse message reference: expected at least 5 segments, got {0}")]
    ParseSegmentsCountError(usize),
    #[error("cannot decode {1} of message reference from base64")]
    DecodeBase64Error(#[source] base64::DecodeError, &'static str),
    #[error("cannot decode {1} of message reference as utf-8")]
    DecodeUtf8Error(#[source] FromUtf8Error, &'static str),
    #[error("cannot parse folder id {1} of message reference")]
    ParseFolderIdError(#[source] ParseIntError, String),
    #[error("cannot parse flag of message reference")]
    ParseFlagError(#[from] flag::Error),
}

pub type Result<T> = result::Result<T, Error>;

fn encode_segment(segment: &str) -> String {
    BASE64.encode(segment)
}

fn decode_segment(segment: &str, field: &'static str) -> Result<String> {
    let bytes = BASE64
        .decode(segment)
        .map_err(|err| Error::DecodeBase64Error(err, field))?;
    String::from_utf8(bytes).map_err(|err| Error::DecodeUtf8Error(err, field))
}

impl MessageReference {
    /// Builds the identity string of the reference.
    pub fn to_identity_string(&self) -> String {
        self.to_string()
    }

    /// Parses a message reference from its identity string.
    ///
    /// A missing identity as well as any malformed one gives back
    /// `None`. Use [`str::parse`] instead to get the reason why an
    /// identity string was rejected.
    pub fn parse(identity: Option<&str>) -> Option<Self> {
        let identity = identity?;

        match identity.parse::<Self>() {
            Ok(reference) => Some(reference),
            Err(err) => {
                debug!("cannot parse message reference {:?}: {}", identity, err);
                None
            }
        }
    }
}

impl fmt::Display for MessageReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = IDENTITY_SEPARATOR;

        write!(
            f,
            "{IDENTITY_MARKER}{sep}{}{sep}{}{sep}{}{sep}{}",
            encode_segment(self.account_uuid()),
            encode_segment(&self.folder_id().to_string()),
            encode_segment(self.folder_server_id()),
            encode_segment(self.uid()),
        )?;

        if let Some(flag) = self.flag() {
            write!(f, "{sep}{}", flag.name())?;
        }

        Ok(())
    }
}

impl FromStr for MessageReference {
    type Err = Error;

    fn from_str(identity: &str) -> Result<Self> {
        let segments: Vec<&str> = identity.split(IDENTITY_SEPARATOR).collect();

        if segments[0] != IDENTITY_MARKER {
            return Err(Error::ParseMarkerError(identity.to_owned()));
        }

        // Segments past the flag are ignored
        let (account_uuid, folder_id, folder_server_id, uid, flag) = match segments[1..] {
            [account_uuid, folder_id, folder_server_id, uid, ref rest @ ..] => {
                (account_uuid, folder_id, folder_server_id, uid, rest.first().copied())
            }
            _ => return Err(Error::ParseSegmentsCountError(segments.len())),
        };

        let account_uuid = decode_segment(account_uuid, "account uuid")?;
        let folder_id = decode_segment(folder_id, "folder id")?;
        let folder_id = folder_id
            .parse::<i64>()
            .map_err(|err| Error::ParseFolderIdError(err, folder_id.clone()))?;
        let folder_server_id = decode_segment(folder_server_id, "folder server id")?;
        let uid = decode_segment(uid, "uid")?;
        let flag = flag.map(Flag::from_str).transpose()?;

        let reference = MessageReference::new(account_uuid, folder_id, folder_server_id, uid, flag);
        trace!("message reference: {:?}", reference);

        Ok(reference)
    }
}

impl Serialize for MessageReference {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MessageReference {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let identity = String::deserialize(deserializer)?;
        identity.parse().map_err(de::Error::custom)
    }
}
