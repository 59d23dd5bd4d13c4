//! Testing utilities for the SimLab workspace
//!
//! Shared fixtures for editors, collections and suggestions.

#![allow(missing_docs)]

use simlab_catalog::ParameterKey;
use simlab_editor::{EditorConfig, FrameCollection, FrameCollectionEditor, ScenarioId, Suggestion};
use simlab_frame::FrameId;

pub fn test_scenario() -> ScenarioId {
    ScenarioId::new("test-scenario")
}

/// Editor holding `frames` default frames (at least one)
pub fn editor_with_frames(frames: usize) -> FrameCollectionEditor {
    let mut editor = FrameCollectionEditor::new(test_scenario(), EditorConfig::default());
    for _ in 1..frames {
        editor.add_frame();
    }
    editor
}

pub fn frame_ids(frames: &FrameCollection) -> Vec<FrameId> {
    frames.iter().map(|f| f.id()).collect()
}

pub fn frame_identifiers(frames: &FrameCollection) -> Vec<String> {
    frames.iter().map(|f| f.frame_identifier().to_string()).collect()
}

pub fn basic_vitals_suggestion() -> Suggestion {
    Suggestion::new()
        .with(ParameterKey::HeartRate, 92)
        .with(ParameterKey::OxygenSaturation, 96)
        .undefined(ParameterKey::Pupils)
        .with(ParameterKey::Temperature, 37.2)
}
