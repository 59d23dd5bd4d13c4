//! Derived statistics and status filters
//!
//! Statistics are recomputed from the collection on every call; nothing is
//! cached.

use crate::collection::FrameCollection;
use serde::{Deserialize, Serialize};
use simlab_frame::Frame;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Aggregate view over a frame collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStatistics {
    /// Number of frames
    pub total: usize,
    /// Frames with a parameter set
    pub complete: usize,
    /// `total - complete`
    pub incomplete: usize,
    /// Sum of duration estimates, unset counted as 0
    pub total_duration_minutes: u64,
    /// `round(100 * complete / total)`, 0 for an empty collection
    pub percent_complete: u32,
}

impl FrameStatistics {
    /// Compute from the (unfiltered) collection
    #[must_use]
    pub fn compute(frames: &FrameCollection) -> Self {
        let total = frames.len();
        let complete = frames.iter().filter(|f| f.is_complete()).count();
        let total_duration_minutes = frames
            .iter()
            .map(|f| u64::from(f.duration_estimate_min().unwrap_or(0)))
            .sum();

        Self {
            total,
            complete,
            incomplete: total - complete,
            total_duration_minutes,
            percent_complete: percent(complete, total),
        }
    }

    /// Fewer frames than recommended
    #[inline]
    #[must_use]
    pub fn has_insufficient_frames(&self, recommended_min: usize) -> bool {
        self.total < recommended_min
    }

    /// Some frame still lacks parameters
    #[inline]
    #[must_use]
    pub fn has_incomplete_frames(&self) -> bool {
        self.incomplete > 0
    }
}

/// Integer percentage rounded half up
fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Completeness filter for list views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every frame
    #[default]
    All,
    /// Frames with a parameter set
    Complete,
    /// Frames without a parameter set
    Incomplete,
}

impl StatusFilter {
    /// Whether the frame passes this filter
    #[inline]
    #[must_use]
    pub fn matches(self, frame: &Frame) -> bool {
        match self {
            Self::All => true,
            Self::Complete => frame.is_complete(),
            Self::Incomplete => !frame.is_complete(),
        }
    }

    /// Wire name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Unknown status filter name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status filter: {0} (expected all, complete or incomplete)")]
pub struct ParseFilterError(pub String);
