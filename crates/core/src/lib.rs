//! Domain rules for the Maker's Lab content site.
//!
//! Everything in this crate is pure: no database, no filesystem, no HTTP.
//! The storage and API crates lean on these rules so that validation and
//! ordering behave identically no matter which backend serves a request.

pub mod assets;
pub mod banner;
pub mod error;
pub mod inquiry;
pub mod ordering;
pub mod patch;
pub mod session;
pub mod types;
pub mod upload;
