//! Message reference module.
//!
//! This module contains the representation of a reference to a single
//! email message, and the codec turning it into an opaque identity
//! string (and back).

pub mod identity;
pub use self::identity::{Error, Result, IDENTITY_MARKER, IDENTITY_SEPARATOR};

pub mod message_reference;
pub use self::message_reference::*;
