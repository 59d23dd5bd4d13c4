//! Frame collection editor
//!
//! Owns the current [`FrameCollection`] of one scenario plus the UI-facing
//! "expanded frame" cursor. Each mutator replaces the held collection with
//! a new value and returns it; earlier values handed out stay untouched, so
//! callers can diff or undo against them.

use crate::advisory::Advisory;
use crate::collection::FrameCollection;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::persistence::{PersistenceGateway, ScenarioId};
use crate::statistics::{FrameStatistics, StatusFilter};
use crate::suggestion::{Suggestion, SuggestionSource};
use simlab_catalog::ParameterKey;
use simlab_frame::{Frame, FrameId, FrameUpdate, ParameterValue};

/// Editor for one scenario's frames
#[derive(Debug, Clone)]
pub struct FrameCollectionEditor {
    scenario: ScenarioId,
    config: EditorConfig,
    frames: FrameCollection,
    expanded: Option<FrameId>,
}

impl FrameCollectionEditor {
    /// Start a scenario with one default frame, expanded
    #[must_use]
    pub fn new(scenario: ScenarioId, config: EditorConfig) -> Self {
        let frames = FrameCollection::with_default_frame(&config);
        let expanded = frames.first().map(Frame::id);
        Self {
            scenario,
            config,
            frames,
            expanded,
        }
    }

    /// Load a scenario, or start a new one if nothing usable is stored
    ///
    /// A stored but empty collection is treated as absent so the scenario
    /// always holds at least one frame.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the stored payload
    /// cannot be read
    pub fn open(
        scenario: ScenarioId,
        gateway: &dyn PersistenceGateway,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        config.validate()?;
        match gateway.load(&scenario)? {
            Some(frames) if !frames.is_empty() => {
                tracing::info!(%scenario, frames = frames.len(), "scenario loaded");
                let expanded = frames.first().map(Frame::id);
                Ok(Self {
                    scenario,
                    config,
                    frames,
                    expanded,
                })
            }
            _ => {
                tracing::info!(%scenario, "no stored frames, starting new scenario");
                Ok(Self::new(scenario, config))
            }
        }
    }

    /// Persist the current collection
    ///
    /// # Errors
    /// Returns error if the gateway fails
    pub fn save(&self, gateway: &dyn PersistenceGateway) -> Result<(), EditorError> {
        gateway.save(&self.scenario, &self.frames)?;
        tracing::info!(scenario = %self.scenario, frames = self.frames.len(), "scenario saved");
        Ok(())
    }

    /// Scenario identity
    #[inline]
    #[must_use]
    pub fn scenario(&self) -> &ScenarioId {
        &self.scenario
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current collection
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &FrameCollection {
        &self.frames
    }

    /// Currently expanded frame
    #[inline]
    #[must_use]
    pub fn expanded(&self) -> Option<FrameId> {
        self.expanded
    }

    /// Expand a frame; unknown ids are ignored
    pub fn set_expanded(&mut self, id: FrameId) {
        if self.frames.find(id).is_some() {
            self.expanded = Some(id);
        } else {
            tracing::debug!(frame_id = %id, "expand ignored: unknown frame");
        }
    }

    /// Expand a frame, or collapse it if it is already expanded
    pub fn toggle_expanded(&mut self, id: FrameId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.set_expanded(id);
        }
    }

    /// Collapse every frame
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Append a default frame and expand it
    pub fn add_frame(&mut self) -> FrameCollection {
        let (frames, id) = self.frames.add_frame(&self.config);
        self.frames = frames;
        self.expanded = Some(id);
        self.frames.clone()
    }

    /// Remove a frame; refused when it is the last one
    ///
    /// If the removed frame was expanded the cursor moves to the first
    /// remaining frame.
    pub fn remove_frame(&mut self, id: FrameId) -> FrameCollection {
        let frames = self.frames.remove_frame(id);
        let removed = frames.len() < self.frames.len();
        self.frames = frames;

        if removed && self.expanded == Some(id) {
            self.expanded = self.frames.first().map(Frame::id);
        }
        self.frames.clone()
    }

    /// Append a deep copy of a frame and expand it
    pub fn duplicate_frame(&mut self, id: FrameId) -> FrameCollection {
        let (frames, copy) = self.frames.duplicate_frame(id, &self.config);
        self.frames = frames;
        if copy.is_some() {
            self.expanded = copy;
        }
        self.frames.clone()
    }

    /// Set one top-level field of a frame
    pub fn update_frame_field(&mut self, id: FrameId, update: FrameUpdate) -> FrameCollection {
        self.frames = self.frames.update_frame_field(id, update);
        self.frames.clone()
    }

    /// Set (`Some`) or clear (`None`) one parameter of a frame
    pub fn update_parameter(
        &mut self,
        id: FrameId,
        key: ParameterKey,
        value: Option<ParameterValue>,
    ) -> FrameCollection {
        self.frames = self.frames.update_parameter(id, key, value);
        self.frames.clone()
    }

    /// Merge a suggestion into a frame
    pub fn apply_bulk_suggestion(&mut self, id: FrameId, suggestion: &Suggestion) -> FrameCollection {
        self.frames = self.frames.apply_bulk_suggestion(id, suggestion);
        self.frames.clone()
    }

    /// Ask a source for a suggestion and merge it into a frame
    pub fn accept_suggestion(
        &mut self,
        id: FrameId,
        source: &dyn SuggestionSource,
    ) -> FrameCollection {
        let suggestion = source.generate();
        self.apply_bulk_suggestion(id, &suggestion)
    }

    /// Replace the collection with an earlier value (caller-side undo)
    ///
    /// Empty collections are ignored. The cursor falls back to the first
    /// frame if the expanded one no longer exists.
    pub fn restore(&mut self, frames: FrameCollection) -> FrameCollection {
        if frames.is_empty() {
            tracing::debug!("restore ignored: empty collection");
            return self.frames.clone();
        }
        self.frames = frames;
        if let Some(id) = self.expanded {
            if self.frames.find(id).is_none() {
                self.expanded = self.frames.first().map(Frame::id);
            }
        }
        self.frames.clone()
    }

    /// Statistics over the full (unfiltered) collection
    #[inline]
    #[must_use]
    pub fn statistics(&self) -> FrameStatistics {
        self.frames.statistics()
    }

    /// Frames matching a status filter
    #[inline]
    #[must_use]
    pub fn filter_by_status(&self, filter: StatusFilter) -> FrameCollection {
        self.frames.filter_by_status(filter)
    }

    /// Advisories for the current collection
    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        Advisory::evaluate(&self.statistics(), self.config.recommended_min_frames)
    }
}
