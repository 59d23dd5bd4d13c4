//! Ordered frame collection
//!
//! [`FrameCollection`] is a persistent vector of frames. Every operation
//! returns a new collection sharing structure with the old one; the
//! receiver is never modified. Invalid targets (unknown id, removing the
//! last frame) give back an unchanged copy.
//!
//! # Invariants
//! - Insertion order is the canonical order
//! - `remove_frame` never drops below one frame
//! - After `remove_frame`, identifiers read `"1".."N"`

use crate::config::EditorConfig;
use crate::statistics::{FrameStatistics, StatusFilter};
use crate::suggestion::Suggestion;
use im::Vector;
use serde::{Deserialize, Serialize};
use simlab_catalog::ParameterKey;
use simlab_frame::{Frame, FrameId, FrameUpdate, ParameterValue};

/// Ordered, copy-on-write frame collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameCollection {
    frames: Vector<Frame>,
}

impl FrameCollection {
    /// Create empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding one default frame
    #[must_use]
    pub fn with_default_frame(config: &EditorConfig) -> Self {
        Self::new().add_frame(config).0
    }

    /// Number of frames
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate in order
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Frame at position
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// First frame
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Frame> {
        self.frames.front()
    }

    /// Frame by id
    #[must_use]
    pub fn find(&self, id: FrameId) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id() == id)
    }

    /// Position of a frame
    #[must_use]
    pub fn position(&self, id: FrameId) -> Option<usize> {
        self.frames.iter().position(|f| f.id() == id)
    }

    /// Append a default frame
    ///
    /// Identifier and title follow the new count (`"3"`, `"Frame 3"`).
    /// Returns the new collection and the new frame's id.
    #[must_use]
    pub fn add_frame(&self, config: &EditorConfig) -> (Self, FrameId) {
        let position = self.len() + 1;
        let frame = Frame::new(
            position.to_string(),
            config.frame_title(position),
            config.default_duration_min,
        );
        let id = frame.id();

        let mut frames = self.frames.clone();
        frames.push_back(frame);
        tracing::debug!(frame_id = %id, position, "frame added");
        (Self { frames }, id)
    }

    /// Remove a frame and renumber the rest
    ///
    /// No-op when one frame or fewer remain, or when `id` is unknown.
    #[must_use]
    pub fn remove_frame(&self, id: FrameId) -> Self {
        if self.len() <= 1 {
            tracing::debug!(frame_id = %id, "refusing to remove the last frame");
            return self.clone();
        }
        let Some(index) = self.position(id) else {
            tracing::debug!(frame_id = %id, "remove ignored: unknown frame");
            return self.clone();
        };

        let mut frames = self.frames.clone();
        frames.remove(index);
        tracing::debug!(frame_id = %id, remaining = frames.len(), "frame removed");
        Self { frames }.renumbered()
    }

    /// Append a deep copy of a frame
    ///
    /// The copy gets a new id, identifier `count + 1`, the configured copy
    /// suffix on its title, and fresh timestamps. Returns `None` for the id
    /// when the source is unknown.
    #[must_use]
    pub fn duplicate_frame(&self, id: FrameId, config: &EditorConfig) -> (Self, Option<FrameId>) {
        let Some(source) = self.find(id) else {
            tracing::debug!(frame_id = %id, "duplicate ignored: unknown frame");
            return (self.clone(), None);
        };

        let copy = source.duplicate((self.len() + 1).to_string(), config.copy_title(source.title()));
        let copy_id = copy.id();

        let mut frames = self.frames.clone();
        frames.push_back(copy);
        tracing::debug!(source = %id, frame_id = %copy_id, "frame duplicated");
        (Self { frames }, Some(copy_id))
    }

    /// Set one top-level field of a frame
    #[must_use]
    pub fn update_frame_field(&self, id: FrameId, update: FrameUpdate) -> Self {
        self.replace(id, |frame| frame.with_update(update))
    }

    /// Set (`Some`) or clear (`None`) one parameter of a frame
    #[must_use]
    pub fn update_parameter(
        &self,
        id: FrameId,
        key: ParameterKey,
        value: Option<ParameterValue>,
    ) -> Self {
        tracing::trace!(frame_id = %id, %key, cleared = value.is_none(), "parameter write");
        self.replace(id, |frame| frame.with_parameter(key, value))
    }

    /// Merge a suggestion into a frame
    ///
    /// Applies each defined entry in order through [`Self::update_parameter`];
    /// undefined entries are skipped. Applying the same suggestion twice
    /// yields the same parameter set as applying it once.
    #[must_use]
    pub fn apply_bulk_suggestion(&self, id: FrameId, suggestion: &Suggestion) -> Self {
        if self.find(id).is_none() {
            tracing::debug!(frame_id = %id, "suggestion ignored: unknown frame");
            return self.clone();
        }

        let applied = suggestion
            .defined()
            .fold(self.clone(), |acc, (key, value)| {
                acc.update_parameter(id, key, Some(value.clone()))
            });
        tracing::debug!(
            frame_id = %id,
            applied = suggestion.defined().count(),
            skipped = suggestion.len() - suggestion.defined().count(),
            "suggestion applied"
        );
        applied
    }

    /// Relabel every frame `"1".."N"` in current order
    ///
    /// Discards author-customized identifiers such as `"2A"`.
    #[must_use]
    pub fn renumbered(&self) -> Self {
        let frames = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| frame.relabeled((i + 1).to_string()))
            .collect();
        Self { frames }
    }

    /// Frames matching a status filter, order preserved
    #[must_use]
    pub fn filter_by_status(&self, filter: StatusFilter) -> Self {
        let frames = self
            .frames
            .iter()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect();
        Self { frames }
    }

    /// Statistics over this collection
    #[inline]
    #[must_use]
    pub fn statistics(&self) -> FrameStatistics {
        FrameStatistics::compute(self)
    }

    fn replace(&self, id: FrameId, f: impl FnOnce(&Frame) -> Frame) -> Self {
        let Some(index) = self.position(id) else {
            tracing::debug!(frame_id = %id, "update ignored: unknown frame");
            return self.clone();
        };

        let next = f(&self.frames[index]);
        Self {
            frames: self.frames.update(index, next),
        }
    }
}

impl FromIterator<Frame> for FrameCollection {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FrameCollection {
    type Item = &'a Frame;
    type IntoIter = im::vector::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simlab_frame::ParticipantType;

    fn collection_of(n: usize) -> FrameCollection {
        let config = EditorConfig::default();
        (0..n).fold(FrameCollection::new(), |c, _| c.add_frame(&config).0)
    }

    fn ids(c: &FrameCollection) -> Vec<FrameId> {
        c.iter().map(Frame::id).collect()
    }

    fn identifiers(c: &FrameCollection) -> Vec<String> {
        c.iter().map(|f| f.frame_identifier().to_string()).collect()
    }

    #[test]
    fn add_frame_appends_with_defaults() {
        let config = EditorConfig::default();
        let one = FrameCollection::with_default_frame(&config);
        let (two, id) = one.add_frame(&config);

        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        let added = two.find(id).unwrap();
        assert_eq!(two.position(id), Some(1));
        assert_eq!(added.frame_identifier(), "2");
        assert_eq!(added.title(), "Frame 2");
        assert_eq!(added.duration_estimate_min(), Some(5));
        assert_eq!(added.participant_type(), ParticipantType::Simulator);
        assert!(added.parameter_set().is_none());
    }

    #[test]
    fn remove_last_frame_is_refused() {
        let one = collection_of(1);
        let id = ids(&one)[0];
        assert_eq!(one.remove_frame(id), one);
    }

    #[test]
    fn remove_unknown_frame_is_noop() {
        let three = collection_of(3);
        assert_eq!(three.remove_frame(FrameId::new()), three);
    }

    #[test]
    fn remove_renumbers_custom_identifiers() {
        let three = collection_of(3);
        let ids = ids(&three);
        let custom = three.update_frame_field(ids[2], FrameUpdate::Identifier("2A".to_string()));
        assert_eq!(identifiers(&custom), vec!["1", "2", "2A"]);

        let two = custom.remove_frame(ids[0]);
        assert_eq!(identifiers(&two), vec!["1", "2"]);
        assert_eq!(two.iter().map(Frame::id).collect::<Vec<_>>(), vec![ids[1], ids[2]]);
    }

    #[test]
    fn update_replaces_only_target() {
        let three = collection_of(3);
        let ids = ids(&three);
        let next = three.update_frame_field(ids[1], FrameUpdate::Title("Parada".to_string()));

        assert_eq!(three.get(1).unwrap().title(), "Frame 2");
        assert_eq!(next.get(1).unwrap().title(), "Parada");
        assert_eq!(next.get(0), three.get(0));
        assert_eq!(next.get(2), three.get(2));
    }

    #[test]
    fn update_unknown_frame_is_noop() {
        let two = collection_of(2);
        let next = two.update_parameter(FrameId::new(), ParameterKey::HeartRate, Some(80.into()));
        assert_eq!(next, two);
    }

    #[test]
    fn duplicate_unknown_frame_is_noop() {
        let two = collection_of(2);
        let (next, id) = two.duplicate_frame(FrameId::new(), &EditorConfig::default());
        assert_eq!(next, two);
        assert!(id.is_none());
    }

    #[test]
    fn duplicate_appends_copy() {
        let config = EditorConfig::default();
        let two = collection_of(2);
        let source = ids(&two)[0];
        let (three, copy) = two.duplicate_frame(source, &config);
        let copy = copy.unwrap();

        assert_eq!(three.position(copy), Some(2));
        let frame = three.find(copy).unwrap();
        assert_eq!(frame.frame_identifier(), "3");
        assert_eq!(frame.title(), "Frame 1 (Cópia)");
    }

    #[test]
    fn bulk_suggestion_on_unknown_frame_is_noop() {
        let one = collection_of(1);
        let suggestion = Suggestion::new().with(ParameterKey::HeartRate, 90);
        assert_eq!(one.apply_bulk_suggestion(FrameId::new(), &suggestion), one);
    }

    #[test]
    fn fully_undefined_suggestion_does_not_complete_frame() {
        let one = collection_of(1);
        let id = ids(&one)[0];
        let suggestion = Suggestion::new().undefined(ParameterKey::HeartRate);
        let next = one.apply_bulk_suggestion(id, &suggestion);
        assert!(!next.find(id).unwrap().is_complete());
    }

    #[test]
    fn filter_preserves_order() {
        let four = collection_of(4);
        let ids = ids(&four);
        let next = four
            .update_parameter(ids[3], ParameterKey::HeartRate, Some(70.into()))
            .update_parameter(ids[1], ParameterKey::HeartRate, Some(90.into()));

        let complete = next.filter_by_status(StatusFilter::Complete);
        assert_eq!(complete.iter().map(Frame::id).collect::<Vec<_>>(), vec![ids[1], ids[3]]);

        let incomplete = next.filter_by_status(StatusFilter::Incomplete);
        assert_eq!(incomplete.iter().map(Frame::id).collect::<Vec<_>>(), vec![ids[0], ids[2]]);

        assert_eq!(next.filter_by_status(StatusFilter::All), next);
    }

    #[test]
    fn serializes_as_plain_array() {
        let two = collection_of(2);
        let json = serde_json::to_value(&two).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));

        let back: FrameCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, two);
    }

    fn stale_frame(identifier: &str) -> Frame {
        let mut json = serde_json::to_value(Frame::new(identifier, "Frame", 5)).unwrap();
        json["updatedAt"] = serde_json::Value::from("2000-01-01T00:00:00Z");
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn mutations_refresh_only_the_target_timestamp() {
        let frames: FrameCollection = ["1", "2"].into_iter().map(stale_frame).collect();
        let target = frames.get(0).unwrap().id();
        let other = frames.get(1).unwrap().id();
        let stale = frames.get(0).unwrap().updated_at();

        let suggestion = Suggestion::new()
            .with(ParameterKey::HeartRate, 92)
            .undefined(ParameterKey::Pupils);
        let suggested = frames.apply_bulk_suggestion(target, &suggestion);
        assert!(suggested.find(target).unwrap().updated_at() > stale);
        assert_eq!(suggested.find(other).unwrap().updated_at(), stale);

        let field = frames.update_frame_field(target, FrameUpdate::DurationEstimate(Some(9)));
        assert!(field.find(target).unwrap().updated_at() > stale);

        let param = frames.update_parameter(target, ParameterKey::Temperature, Some(38.0.into()));
        assert!(param.find(target).unwrap().updated_at() > stale);
    }

    #[test]
    fn renumbering_keeps_timestamps() {
        let frames: FrameCollection = ["1", "2", "3"].into_iter().map(stale_frame).collect();
        let first = frames.get(0).unwrap().id();
        let stale = frames.get(0).unwrap().updated_at();

        let next = frames.remove_frame(first);
        assert_eq!(
            next.iter().map(Frame::frame_identifier).collect::<Vec<_>>(),
            vec!["1", "2"]
        );
        assert!(next.iter().all(|f| f.updated_at() == stale));
    }
}
