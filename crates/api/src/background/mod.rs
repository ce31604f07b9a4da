//! Background tasks.
//!
//! Each submodule provides a long-running async function intended to be
//! spawned via `tokio::spawn`. All tasks accept a [`CancellationToken`]
//! for graceful shutdown and never fail: errors are logged and the loop
//! carries on.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod keepalive;
pub mod session_cleanup;
