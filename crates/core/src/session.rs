//! Admin session state.
//!
//! There is exactly one privileged role. A session is either anonymous or
//! authenticated; login moves a fresh session to `Authenticated`, logout or
//! expiry drops it back to `Anonymous` by removing the record.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Default sliding session lifetime (hours).
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE_NAME: &str = "makerslab.sid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl SessionState {
    /// Database value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticated => "authenticated",
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anonymous" => Ok(Self::Anonymous),
            "authenticated" => Ok(Self::Authenticated),
            other => Err(CoreError::Validation(format!(
                "Unknown session state '{other}'"
            ))),
        }
    }
}
