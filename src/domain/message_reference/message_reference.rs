//! Message reference module.
//!
//! This module contains the representation of the message reference.

use std::hash::{Hash, Hasher};

use crate::Flag;

/// Represents a reference to a single message inside an account
/// folder, optionally tagged with a flag.
///
/// Two references are equal when they share the same account uuid,
/// folder server id and uid. The folder id and the flag do not take
/// part in equality nor in hashing.
#[derive(Debug, Clone)]
pub struct MessageReference {
    account_uuid: String,
    folder_id: i64,
    folder_server_id: String,
    uid: String,
    flag: Option<Flag>,
}

impl MessageReference {
    pub fn new<A, F, U, G>(
        account_uuid: A,
        folder_id: i64,
        folder_server_id: F,
        uid: U,
        flag: G,
    ) -> Self
    where
        A: Into<String>,
        F: Into<String>,
        U: Into<String>,
        G: Into<Option<Flag>>,
    {
        Self {
            account_uuid: account_uuid.into(),
            folder_id,
            folder_server_id: folder_server_id.into(),
            uid: uid.into(),
            flag: flag.into(),
        }
    }

    pub fn account_uuid(&self) -> &str {
        &self.account_uuid
    }

    /// Returns the local folder id. It is carried by the identity
    /// string but ignored by equality.
    pub fn folder_id(&self) -> i64 {
        self.folder_id
    }

    pub fn folder_server_id(&self) -> &str {
        &self.folder_server_id
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn flag(&self) -> Option<Flag> {
        self.flag
    }

    /// Checks if the reference points to the given account, folder
    /// and uid. Any missing part never matches.
    pub fn matches(
        &self,
        account_uuid: Option<&str>,
        folder_server_id: Option<&str>,
        uid: Option<&str>,
    ) -> bool {
        match (account_uuid, folder_server_id, uid) {
            (Some(account_uuid), Some(folder_server_id), Some(uid)) => {
                self.account_uuid == account_uuid
                    && self.folder_server_id == folder_server_id
                    && self.uid == uid
            }
            _ => false,
        }
    }

    /// Builds a copy of the reference pointing to the given uid.
    pub fn with_modified_uid<U>(&self, uid: U) -> Self
    where
        U: Into<String>,
    {
        Self {
            uid: uid.into(),
            ..self.clone()
        }
    }

    /// Builds a copy of the reference tagged with the given flag.
    pub fn with_modified_flag<G>(&self, flag: G) -> Self
    where
        G: Into<Option<Flag>>,
    {
        Self {
            flag: flag.into(),
            ..self.clone()
        }
    }
}

impl PartialEq for MessageReference {
    fn eq(&self, other: &Self) -> bool {
        self.account_uuid == other.account_uuid
            && self.folder_server_id == other.folder_server_id
            && self.uid == other.uid
    }
}

impl Eq for MessageReference {}

impl Hash for MessageReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_uuid.hash(state);
        self.folder_server_id.hash(state);
        self.uid.hash(state);
    }
}
