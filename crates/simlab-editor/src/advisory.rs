//! Authoring advisories
//!
//! Non-blocking guidance derived from [`FrameStatistics`]. No operation is
//! ever refused because of an advisory.

use crate::statistics::FrameStatistics;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Advisory condition surfaced to the author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Advisory {
    /// Fewer frames than recommended
    InsufficientFrames {
        /// Current frame count
        total: usize,
        /// Recommended minimum
        minimum: usize,
    },
    /// Frames without parameters remain
    IncompleteFrames {
        /// Number of incomplete frames
        count: usize,
    },
}

impl Advisory {
    /// Evaluate all advisories for the given statistics
    #[must_use]
    pub fn evaluate(stats: &FrameStatistics, recommended_min_frames: usize) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        if stats.has_insufficient_frames(recommended_min_frames) {
            advisories.push(Advisory::InsufficientFrames {
                total: stats.total,
                minimum: recommended_min_frames,
            });
        }

        if stats.has_incomplete_frames() {
            advisories.push(Advisory::IncompleteFrames {
                count: stats.incomplete,
            });
        }

        advisories
    }
}

impl Display for Advisory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFrames { total, minimum } => write!(
                f,
                "scenario has {total} frame(s), at least {minimum} are recommended"
            ),
            Self::IncompleteFrames { count } => {
                write!(f, "{count} frame(s) have no parameters yet")
            }
        }
    }
}
