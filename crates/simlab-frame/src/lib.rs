//! SimLab Frames
//!
//! Authoring units of a simulation scenario and their physiological
//! snapshots.
//!
//! # Core Concepts
//!
//! - [`Frame`]: One step of a scenario, replaced (never mutated) on edit
//! - [`FrameUpdate`]: Single-field mutation command
//! - [`ParameterSet`]: Sparse parameter snapshot owned by one frame
//! - [`ParameterValue`]: Numeric or free-text parameter value
//!
//! # Example
//!
//! ```
//! use simlab_catalog::ParameterKey;
//! use simlab_frame::{Frame, FrameUpdate, DEFAULT_DURATION_MIN};
//!
//! let frame = Frame::new("1", "Frame 1", DEFAULT_DURATION_MIN);
//! assert!(!frame.is_complete());
//!
//! let frame = frame
//!     .with_update(FrameUpdate::Title("Hipotensão".to_string()))
//!     .with_parameter(ParameterKey::HeartRate, Some(120.into()));
//! assert!(frame.is_complete());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod frame;
mod parameter;

pub use frame::{Frame, FrameId, FrameUpdate, ParticipantType, DEFAULT_DURATION_MIN};
pub use parameter::{ParameterSet, ParameterValue};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
