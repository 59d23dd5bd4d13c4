//! Persistence gateway
//!
//! The editor saves and loads only at explicit save points, through a
//! [`PersistenceGateway`]. The gateway owns the storage format.
//! [`InMemoryGateway`] is an opaque key-value store holding JSON strings,
//! the same shape as browser-local storage.

use crate::collection::FrameCollection;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use simlab_catalog::ParameterKey;
use simlab_frame::FrameId;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Scenario identity used as the storage key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub String);

impl ScenarioId {
    /// Create from any string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Storage key of this scenario's frame array
    #[inline]
    #[must_use]
    pub fn frames_key(&self) -> String {
        format!("scenario:{}:frames", self.0)
    }
}

impl Display for ScenarioId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Save/load of a scenario's frame collection
pub trait PersistenceGateway {
    /// Store the collection, replacing any previous one
    ///
    /// # Errors
    /// Returns error if the collection cannot be encoded or stored
    fn save(&self, scenario: &ScenarioId, frames: &FrameCollection) -> Result<(), GatewayError>;

    /// Fetch the stored collection, `None` if nothing was saved
    ///
    /// # Errors
    /// Returns error if the stored payload cannot be decoded
    fn load(&self, scenario: &ScenarioId) -> Result<Option<FrameCollection>, GatewayError>;
}

/// Gateway errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Encoding failed
    #[error("failed to encode frames for {scenario}: {source}")]
    Encode {
        /// Scenario being saved
        scenario: ScenarioId,
        /// Underlying error
        source: serde_json::Error,
    },

    /// A numeric parameter is NaN or infinite and would not reload
    #[error("frame {frame} of {scenario} has a non-finite {key} value")]
    NonFinite {
        /// Scenario being saved
        scenario: ScenarioId,
        /// Offending frame
        frame: FrameId,
        /// Offending parameter
        key: ParameterKey,
    },

    /// Stored payload is not a valid frame array
    #[error("corrupted frames for {scenario}: {source}")]
    Corrupted {
        /// Scenario being loaded
        scenario: ScenarioId,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// In-process key-value gateway
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryGateway {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload stored under a key
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.store.read().get(key).cloned()
    }

    /// Overwrite a raw payload
    pub fn insert_raw(&self, key: impl Into<String>, payload: impl Into<String>) {
        self.store.write().insert(key.into(), payload.into());
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

impl PersistenceGateway for InMemoryGateway {
    fn save(&self, scenario: &ScenarioId, frames: &FrameCollection) -> Result<(), GatewayError> {
        if let Some((frame, key)) = first_non_finite(frames) {
            return Err(GatewayError::NonFinite {
                scenario: scenario.clone(),
                frame,
                key,
            });
        }
        let payload = serde_json::to_string(frames).map_err(|source| GatewayError::Encode {
            scenario: scenario.clone(),
            source,
        })?;
        self.store.write().insert(scenario.frames_key(), payload);
        Ok(())
    }

    fn load(&self, scenario: &ScenarioId) -> Result<Option<FrameCollection>, GatewayError> {
        let Some(payload) = self.raw(&scenario.frames_key()) else {
            return Ok(None);
        };
        serde_json::from_str(&payload)
            .map(Some)
            .map_err(|source| GatewayError::Corrupted {
                scenario: scenario.clone(),
                source,
            })
    }
}

/// First parameter whose number cannot be written as JSON
fn first_non_finite(frames: &FrameCollection) -> Option<(FrameId, ParameterKey)> {
    frames.iter().find_map(|frame| {
        frame
            .parameter_set()?
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(key, _)| (frame.id(), key))
    })
}
