//! Admin Session Gate building blocks.
//!
//! - [`password`] hashes the configured admin password at startup and
//!   verifies login attempts against it.
//! - [`session`] issues session tokens and reads/writes the session cookie.

pub mod password;
pub mod session;
