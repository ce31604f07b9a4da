//! Admin session model and DTO.

use makerslab_core::session::SessionState;
use makerslab_core::types::Timestamp;
use sqlx::FromRow;

/// A row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    /// SHA-256 hex digest of the cookie token.
    pub token_hash: String,
    pub state: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdminSession {
    /// Parsed session state. Unknown values read as anonymous.
    pub fn session_state(&self) -> SessionState {
        self.state.parse().unwrap_or(SessionState::Anonymous)
    }
}

/// DTO for creating a new admin session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub token_hash: String,
    pub state: SessionState,
    pub expires_at: Timestamp,
}
