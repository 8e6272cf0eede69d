//! Flag module.
//!
//! This module contains the closed set of flags a message reference
//! can be tagged with.

pub mod flag;
pub use self::flag::*;
