//! Bulk parameter suggestions
//!
//! A [`Suggestion`] is an ordered key → value mapping produced by an
//! external [`SuggestionSource`] (an AI vitals generator in production) and
//! merged into one frame in a single operation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use simlab_catalog::ParameterKey;
use simlab_frame::ParameterValue;

/// Ordered parameter suggestion
///
/// Entries with a `None` value are undefined: they are skipped when the
/// suggestion is applied (neither written nor cleared).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion {
    entries: IndexMap<ParameterKey, Option<ParameterValue>>,
}

impl Suggestion {
    /// Create empty suggestion
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a defined entry
    #[must_use]
    pub fn with(mut self, key: ParameterKey, value: impl Into<ParameterValue>) -> Self {
        self.entries.insert(key, Some(value.into()));
        self
    }

    /// Add an undefined entry
    #[must_use]
    pub fn undefined(mut self, key: ParameterKey) -> Self {
        self.entries.insert(key, None);
        self
    }

    /// Build from wire-level string keys
    ///
    /// Keys outside the catalog are dropped with a warning.
    pub fn from_raw<K, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Option<ParameterValue>)>,
    {
        let mut entries = IndexMap::new();
        for (raw, value) in pairs {
            match raw.as_ref().parse::<ParameterKey>() {
                Ok(key) => {
                    entries.insert(key, value);
                }
                Err(e) => tracing::warn!(error = %e, "dropping suggestion entry"),
            }
        }
        Self { entries }
    }

    /// Parse a JSON object such as `{"heartRate": 80, "pupils": null}`
    ///
    /// # Errors
    /// Returns error if the payload is not an object of numbers/strings/nulls
    pub fn from_json_str(payload: &str) -> Result<Self, serde_json::Error> {
        let raw: IndexMap<String, Option<ParameterValue>> = serde_json::from_str(payload)?;
        Ok(Self::from_raw(raw))
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, Option<&ParameterValue>)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_ref()))
    }

    /// Defined entries in insertion order
    pub fn defined(&self) -> impl Iterator<Item = (ParameterKey, &ParameterValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (*k, v)))
    }

    /// Number of entries, undefined ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Producer of bulk suggestions
pub trait SuggestionSource {
    /// Generate a suggestion
    fn generate(&self) -> Suggestion;
}

/// Canned clinical presentations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalsProfile {
    /// Hemodynamically stable adult
    #[default]
    Stable,
    /// Hemorrhagic/hypovolemic shock
    Hypovolemic,
    /// Acute respiratory failure
    Hypoxemic,
}

/// Fixed-output suggestion source
///
/// Stands in for the AI backend: always returns the same vitals for its
/// profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedSuggestionSource {
    profile: VitalsProfile,
}

impl CannedSuggestionSource {
    /// Create source for a profile
    #[inline]
    #[must_use]
    pub fn new(profile: VitalsProfile) -> Self {
        Self { profile }
    }

    /// Profile served by this source
    #[inline]
    #[must_use]
    pub fn profile(&self) -> VitalsProfile {
        self.profile
    }
}

impl SuggestionSource for CannedSuggestionSource {
    fn generate(&self) -> Suggestion {
        use ParameterKey as K;

        match self.profile {
            VitalsProfile::Stable => Suggestion::new()
                .with(K::HeartRate, 78)
                .with(K::SystolicPressure, 120)
                .with(K::DiastolicPressure, 80)
                .with(K::MeanArterialPressure, 93)
                .undefined(K::CentralVenousPressure)
                .with(K::CardiacRhythm, "ritmo sinusal")
                .with(K::RespiratoryRate, 14)
                .with(K::OxygenSaturation, 98)
                .with(K::EndTidalCo2, 38)
                .with(K::Temperature, 36.6)
                .with(K::GlasgowComaScale, 15)
                .with(K::Pupils, "isocóricas e fotorreagentes"),
            VitalsProfile::Hypovolemic => Suggestion::new()
                .with(K::HeartRate, 128)
                .with(K::SystolicPressure, 82)
                .with(K::DiastolicPressure, 50)
                .with(K::MeanArterialPressure, 61)
                .with(K::CentralVenousPressure, 2)
                .with(K::CardiacRhythm, "taquicardia sinusal")
                .with(K::RespiratoryRate, 24)
                .with(K::OxygenSaturation, 95)
                .with(K::Temperature, 35.9)
                .with(K::PeripheralTemperature, 33.0)
                .with(K::GlasgowComaScale, 14),
            VitalsProfile::Hypoxemic => Suggestion::new()
                .with(K::HeartRate, 112)
                .with(K::SystolicPressure, 138)
                .with(K::DiastolicPressure, 86)
                .with(K::RespiratoryRate, 32)
                .with(K::OxygenSaturation, 84)
                .with(K::EndTidalCo2, 52)
                .with(K::InspiredOxygenFraction, 21)
                .with(K::Temperature, 37.8)
                .with(K::GlasgowComaScale, 13)
                .undefined(K::Pupils),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let suggestion = Suggestion::new()
            .with(ParameterKey::Temperature, 37.0)
            .with(ParameterKey::HeartRate, 90);
        let keys: Vec<_> = suggestion.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![ParameterKey::Temperature, ParameterKey::HeartRate]);
    }

    #[test]
    fn defined_skips_undefined() {
        let suggestion = Suggestion::new()
            .with(ParameterKey::HeartRate, 90)
            .undefined(ParameterKey::Pupils);
        assert_eq!(suggestion.len(), 2);
        assert_eq!(suggestion.defined().count(), 1);
    }

    #[test]
    fn from_raw_drops_unknown_keys() {
        let suggestion = Suggestion::from_raw(vec![
            ("heartRate", Some(ParameterValue::from(88))),
            ("lactate", Some(ParameterValue::from(4))),
        ]);
        assert_eq!(suggestion.len(), 1);
    }

    #[test]
    fn from_json_keeps_nulls_as_undefined() {
        let suggestion =
            Suggestion::from_json_str(r#"{"heartRate": 80, "pupils": null, "anestheticAgent": "SEVO"}"#)
                .unwrap();
        let entries: Vec<_> = suggestion.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], (ParameterKey::Pupils, None));
        assert_eq!(entries[2].1, Some(&ParameterValue::Text("SEVO".to_string())));
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(Suggestion::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn canned_profiles_are_stable() {
        for profile in [VitalsProfile::Stable, VitalsProfile::Hypovolemic, VitalsProfile::Hypoxemic] {
            let source = CannedSuggestionSource::new(profile);
            assert_eq!(source.generate(), source.generate());
            assert!(source.generate().defined().count() > 5);
        }
    }
}
