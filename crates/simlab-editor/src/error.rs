//! Error types for the editor
//!
//! Domain operations never fail. Errors only come from the ambient
//! boundaries:
//! - Configuration loading
//! - Persistence at explicit save points

use crate::config::ConfigError;
use crate::persistence::GatewayError;

/// Main editor error type
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Persistence gateway failed
    #[error("persistence error: {0}")]
    Gateway(#[from] GatewayError),
}

impl EditorError {
    /// Whether stored data is unreadable
    #[inline]
    #[must_use]
    pub fn is_corrupted_data(&self) -> bool {
        matches!(self, Self::Gateway(GatewayError::Corrupted { .. }))
    }
}
