//! SimLab Frame Editor
//!
//! Authoring model for the stepwise physiological progression of a
//! simulated patient:
//! - Ordered, copy-on-write frame collections
//! - Add/remove/duplicate with identifier renumbering
//! - Single-field and single-parameter updates
//! - Bulk suggestion merge
//! - Derived statistics, status filters and advisories
//! - Save/load through an external gateway
//!
//! # Example
//!
//! ```
//! use simlab_catalog::ParameterKey;
//! use simlab_editor::{EditorConfig, FrameCollectionEditor, ScenarioId};
//!
//! let mut editor = FrameCollectionEditor::new(ScenarioId::new("sepsis-01"), EditorConfig::new());
//! editor.add_frame();
//! let frames = editor.add_frame();
//!
//! let second = frames.get(1).unwrap().id();
//! editor.update_parameter(second, ParameterKey::HeartRate, Some(85.into()));
//!
//! let stats = editor.statistics();
//! assert_eq!(stats.total, 3);
//! assert_eq!(stats.complete, 1);
//! assert_eq!(stats.percent_complete, 33);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod advisory;
pub mod collection;
pub mod config;
pub mod editor;
pub mod error;
pub mod persistence;
pub mod statistics;
pub mod suggestion;

// Re-exports for convenience
pub use advisory::Advisory;
pub use collection::FrameCollection;
pub use config::{ConfigError, EditorConfig};
pub use editor::FrameCollectionEditor;
pub use error::EditorError;
pub use persistence::{GatewayError, InMemoryGateway, PersistenceGateway, ScenarioId};
pub use statistics::{FrameStatistics, ParseFilterError, StatusFilter};
pub use suggestion::{CannedSuggestionSource, Suggestion, SuggestionSource, VitalsProfile};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the frame editor
    pub use crate::{
        Advisory, EditorConfig, FrameCollection, FrameCollectionEditor, FrameStatistics,
        PersistenceGateway, ScenarioId, StatusFilter, Suggestion, SuggestionSource,
    };
    pub use simlab_catalog::{ParameterCatalog, ParameterKey};
    pub use simlab_frame::{Frame, FrameId, FrameUpdate, ParameterValue, ParticipantType};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
