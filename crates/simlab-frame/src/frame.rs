//! Scenario frames
//!
//! A [`Frame`] is one authored step of a simulated scenario: identity,
//! display ordering, duration estimate, participant type and an optional
//! [`ParameterSet`].
//!
//! Frames are values. Every change goes through a method returning a new
//! `Frame`, so holders of the previous value can detect the change.

use crate::parameter::{ParameterSet, ParameterValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use simlab_catalog::ParameterKey;
use uuid::Uuid;

/// Default duration estimate for new frames, in minutes
pub const DEFAULT_DURATION_MIN: u32 = 5;

/// Stable frame identity (never renumbered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub Uuid);

impl FrameId {
    /// Generate new frame ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who drives the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipantType {
    /// Mannequin/simulator
    #[default]
    Simulator,
    /// Standardized patient (actor)
    StandardizedPatient,
    /// Facilitation staff
    Staff,
}

/// One step of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    id: FrameId,
    frame_identifier: String,
    title: String,
    duration_estimate_min: Option<u32>,
    participant_type: ParticipantType,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    expected_actions: Vec<String>,
    #[serde(default)]
    parameter_set: Option<ParameterSet>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Frame {
    /// Create a frame with defaults: simulator, no parameters, empty lists
    #[must_use]
    pub fn new(
        frame_identifier: impl Into<String>,
        title: impl Into<String>,
        duration_estimate_min: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: FrameId::new(),
            frame_identifier: frame_identifier.into(),
            title: title.into(),
            duration_estimate_min: Some(duration_estimate_min),
            participant_type: ParticipantType::Simulator,
            instructions: Vec::new(),
            expected_actions: Vec::new(),
            parameter_set: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deep copy under a new identity
    ///
    /// Everything is copied, parameter set included, except the id, the
    /// display identifier, the title and the timestamps.
    #[must_use]
    pub fn duplicate(&self, frame_identifier: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: FrameId::new(),
            frame_identifier: frame_identifier.into(),
            title: title.into(),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Stable identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// Display ordering label
    #[inline]
    #[must_use]
    pub fn frame_identifier(&self) -> &str {
        &self.frame_identifier
    }

    /// Title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration estimate in minutes, `None` when unset
    #[inline]
    #[must_use]
    pub fn duration_estimate_min(&self) -> Option<u32> {
        self.duration_estimate_min
    }

    /// Participant type
    #[inline]
    #[must_use]
    pub fn participant_type(&self) -> ParticipantType {
        self.participant_type
    }

    /// Facilitator instructions
    #[inline]
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Actions expected from the learners
    #[inline]
    #[must_use]
    pub fn expected_actions(&self) -> &[String] {
        &self.expected_actions
    }

    /// Parameter snapshot, `None` until the first parameter write
    #[inline]
    #[must_use]
    pub fn parameter_set(&self) -> Option<&ParameterSet> {
        self.parameter_set.as_ref()
    }

    /// Creation time
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last mutation time
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the frame counts as complete
    ///
    /// Complete means a parameter set is present, however many keys it
    /// holds.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.parameter_set.is_some()
    }

    /// New frame with one field changed and `updated_at` refreshed
    #[must_use]
    pub fn with_update(&self, update: FrameUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FrameUpdate::Identifier(v) => next.frame_identifier = v,
            FrameUpdate::Title(v) => next.title = v,
            FrameUpdate::DurationEstimate(v) => next.duration_estimate_min = v,
            FrameUpdate::ParticipantType(v) => next.participant_type = v,
            FrameUpdate::Instructions(v) => next.instructions = v,
            FrameUpdate::ExpectedActions(v) => next.expected_actions = v,
        }
        next.touch();
        next
    }

    /// New frame with one parameter set or cleared
    ///
    /// The parameter set is created on first write, even when the write is
    /// a clear.
    #[must_use]
    pub fn with_parameter(&self, key: ParameterKey, value: Option<ParameterValue>) -> Self {
        let mut next = self.clone();
        next.parameter_set
            .get_or_insert_with(ParameterSet::new)
            .apply(key, value);
        next.touch();
        next
    }

    /// New frame with a different display identifier
    ///
    /// Renumbering is a relabel of the ordering, not an edit, so
    /// `updated_at` is kept.
    #[must_use]
    pub fn relabeled(&self, frame_identifier: String) -> Self {
        Self {
            frame_identifier,
            ..self.clone()
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Single-field mutation command
///
/// One variant per settable field. Serialized as
/// `{"field": "title", "value": "..."}` for the editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FrameUpdate {
    /// Display identifier (free text, e.g. "2A")
    Identifier(String),
    /// Title
    Title(String),
    /// Duration estimate in minutes
    DurationEstimate(Option<u32>),
    /// Participant type
    ParticipantType(ParticipantType),
    /// Facilitator instructions
    Instructions(Vec<String>),
    /// Expected learner actions
    ExpectedActions(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_defaults() {
        let frame = Frame::new("1", "Frame 1", DEFAULT_DURATION_MIN);
        assert_eq!(frame.frame_identifier(), "1");
        assert_eq!(frame.title(), "Frame 1");
        assert_eq!(frame.duration_estimate_min(), Some(5));
        assert_eq!(frame.participant_type(), ParticipantType::Simulator);
        assert!(frame.instructions().is_empty());
        assert!(frame.expected_actions().is_empty());
        assert!(frame.parameter_set().is_none());
        assert!(!frame.is_complete());
        assert_eq!(frame.created_at(), frame.updated_at());
    }

    #[test]
    fn with_update_leaves_original_untouched() {
        let frame = Frame::new("1", "Frame 1", 5);
        let next = frame.with_update(FrameUpdate::Title("Choque".to_string()));

        assert_eq!(frame.title(), "Frame 1");
        assert_eq!(next.title(), "Choque");
        assert_eq!(next.id(), frame.id());
        assert!(next.updated_at() >= frame.updated_at());
    }

    #[test]
    fn with_update_sets_each_field() {
        let frame = Frame::new("1", "Frame 1", 5)
            .with_update(FrameUpdate::Identifier("2A".to_string()))
            .with_update(FrameUpdate::DurationEstimate(None))
            .with_update(FrameUpdate::ParticipantType(ParticipantType::Staff))
            .with_update(FrameUpdate::Instructions(vec!["Abrir via aérea".to_string()]))
            .with_update(FrameUpdate::ExpectedActions(vec!["Intubar".to_string()]));

        assert_eq!(frame.frame_identifier(), "2A");
        assert_eq!(frame.duration_estimate_min(), None);
        assert_eq!(frame.participant_type(), ParticipantType::Staff);
        assert_eq!(frame.instructions(), ["Abrir via aérea".to_string()]);
        assert_eq!(frame.expected_actions(), ["Intubar".to_string()]);
    }

    #[test]
    fn with_parameter_creates_set_lazily() {
        let frame = Frame::new("1", "Frame 1", 5);
        let next = frame.with_parameter(ParameterKey::HeartRate, Some(85.into()));

        assert!(frame.parameter_set().is_none());
        assert!(next.is_complete());
        assert_eq!(
            next.parameter_set().and_then(|p| p.get(ParameterKey::HeartRate)),
            Some(&ParameterValue::Number(85.0))
        );
    }

    #[test]
    fn clearing_last_key_keeps_frame_complete() {
        let frame = Frame::new("1", "Frame 1", 5)
            .with_parameter(ParameterKey::HeartRate, Some(85.into()))
            .with_parameter(ParameterKey::HeartRate, None);

        assert!(frame.is_complete());
        assert!(frame.parameter_set().is_some_and(ParameterSet::is_empty));
    }

    #[test]
    fn duplicate_is_deep_and_fresh() {
        let source = Frame::new("1", "Frame 1", 7)
            .with_parameter(ParameterKey::HeartRate, Some(80.into()));
        let copy = source.duplicate("2", "Frame 1 (Cópia)");

        assert_ne!(copy.id(), source.id());
        assert_eq!(copy.frame_identifier(), "2");
        assert_eq!(copy.duration_estimate_min(), Some(7));
        assert_eq!(copy.parameter_set(), source.parameter_set());
        assert!(copy.created_at() >= source.created_at());

        let edited = copy.with_parameter(ParameterKey::HeartRate, Some(120.into()));
        assert_eq!(
            source.parameter_set().and_then(|p| p.get(ParameterKey::HeartRate)),
            Some(&ParameterValue::Number(80.0))
        );
        assert_eq!(
            edited.parameter_set().and_then(|p| p.get(ParameterKey::HeartRate)),
            Some(&ParameterValue::Number(120.0))
        );
    }

    #[test]
    fn frame_update_wire_format() {
        let update: FrameUpdate =
            serde_json::from_str(r#"{"field":"durationEstimate","value":10}"#).unwrap();
        assert_eq!(update, FrameUpdate::DurationEstimate(Some(10)));

        let json = serde_json::to_string(&FrameUpdate::ParticipantType(
            ParticipantType::StandardizedPatient,
        ))
        .unwrap();
        assert_eq!(json, r#"{"field":"participantType","value":"standardized-patient"}"#);
    }

    #[test]
    fn frame_serializes_camel_case() {
        let frame = Frame::new("1", "Frame 1", 5);
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["frameIdentifier"], "1");
        assert_eq!(json["durationEstimateMin"], 5);
        assert!(json["parameterSet"].is_null());

        let back: Frame = serde_json::from_value(json).unwrap();
        assert_eq!(back, frame);
    }

    fn stale_frame() -> Frame {
        let mut json = serde_json::to_value(Frame::new("1", "Frame 1", 5)).unwrap();
        json["updatedAt"] = serde_json::Value::from("2000-01-01T00:00:00Z");
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn edits_refresh_updated_at() {
        let frame = stale_frame();

        let titled = frame.with_update(FrameUpdate::Title("Choque".to_string()));
        assert!(titled.updated_at() > frame.updated_at());

        let written = frame.with_parameter(ParameterKey::HeartRate, Some(120.into()));
        assert!(written.updated_at() > frame.updated_at());

        let cleared = written
            .with_update(FrameUpdate::Identifier("1".to_string()))
            .with_parameter(ParameterKey::HeartRate, None);
        assert!(cleared.updated_at() > frame.updated_at());
        assert_eq!(cleared.created_at(), frame.created_at());
    }

    #[test]
    fn relabel_keeps_updated_at() {
        let frame = stale_frame();
        let relabeled = frame.relabeled("3".to_string());

        assert_eq!(relabeled.frame_identifier(), "3");
        assert_eq!(relabeled.updated_at(), frame.updated_at());
    }
}
