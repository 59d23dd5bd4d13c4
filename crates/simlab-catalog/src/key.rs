//! Typed parameter keys and categories
//!
//! Provides [`ParameterKey`], the closed set of physiological parameters a
//! frame can carry, and [`ParameterCategory`], the grouping used for icons
//! and sectioned display.

use crate::catalog::{CatalogEntry, CATALOG};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Physiological parameter key
///
/// Wire names are camelCase (`heartRate`, `endTidalCo2`, ...) to match the
/// stored frame arrays.
///
/// # Invariants
/// - Declaration order equals catalog order: `CATALOG[key as usize].key == key`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKey {
    /// Heart rate
    HeartRate,
    /// Systolic blood pressure
    SystolicPressure,
    /// Diastolic blood pressure
    DiastolicPressure,
    /// Mean arterial pressure
    MeanArterialPressure,
    /// Central venous pressure
    CentralVenousPressure,
    /// ECG rhythm description
    CardiacRhythm,
    /// Respiratory rate
    RespiratoryRate,
    /// Peripheral oxygen saturation
    OxygenSaturation,
    /// End-tidal CO2
    EndTidalCo2,
    /// Inspired oxygen fraction
    InspiredOxygenFraction,
    /// Core temperature
    Temperature,
    /// Peripheral temperature
    PeripheralTemperature,
    /// Glasgow coma scale
    GlasgowComaScale,
    /// Pupil description
    Pupils,
    /// Bispectral index
    BispectralIndex,
    /// Anesthetic agent code
    AnestheticAgent,
    /// Minimum alveolar concentration
    MinimumAlveolarConcentration,
    /// Inspired agent concentration
    InspiredAgentConcentration,
    /// Expired agent concentration
    ExpiredAgentConcentration,
}

impl ParameterKey {
    /// Every key, in catalog order
    pub const ALL: [ParameterKey; 19] = [
        ParameterKey::HeartRate,
        ParameterKey::SystolicPressure,
        ParameterKey::DiastolicPressure,
        ParameterKey::MeanArterialPressure,
        ParameterKey::CentralVenousPressure,
        ParameterKey::CardiacRhythm,
        ParameterKey::RespiratoryRate,
        ParameterKey::OxygenSaturation,
        ParameterKey::EndTidalCo2,
        ParameterKey::InspiredOxygenFraction,
        ParameterKey::Temperature,
        ParameterKey::PeripheralTemperature,
        ParameterKey::GlasgowComaScale,
        ParameterKey::Pupils,
        ParameterKey::BispectralIndex,
        ParameterKey::AnestheticAgent,
        ParameterKey::MinimumAlveolarConcentration,
        ParameterKey::InspiredAgentConcentration,
        ParameterKey::ExpiredAgentConcentration,
    ];

    /// Catalog entry for this key
    #[inline]
    #[must_use]
    pub fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    /// Wire name (camelCase)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().wire_name
    }

    /// Category of this key
    #[inline]
    #[must_use]
    pub fn category(self) -> ParameterCategory {
        self.entry().category
    }

    /// Whether values for this key are free text rather than numbers
    #[inline]
    #[must_use]
    pub fn is_textual(self) -> bool {
        matches!(self.entry().kind, ValueKind::Text)
    }
}

impl Display for ParameterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static BY_WIRE_NAME: Lazy<HashMap<&'static str, ParameterKey>> =
    Lazy::new(|| CATALOG.iter().map(|e| (e.wire_name, e.key)).collect());

impl FromStr for ParameterKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_WIRE_NAME
            .get(s)
            .copied()
            .ok_or_else(|| ParseKeyError::Unknown(s.to_string()))
    }
}

/// Error parsing a wire name into a [`ParameterKey`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyError {
    /// Key is not in the catalog
    #[error("unknown parameter key: {0}")]
    Unknown(String),
}

/// Parameter grouping, drives the icon shown next to a value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterCategory {
    /// Heart and blood pressure
    Circulatory,
    /// Ventilation and oxygenation
    Respiratory,
    /// Body temperature
    Temperature,
    /// Consciousness and pupils
    Neurological,
    /// Anesthetic gases and depth
    Anesthesia,
    /// Fallback for keys outside the catalog
    #[default]
    General,
}

impl ParameterCategory {
    /// Categories that hold catalog keys, in display order
    pub const DISPLAYED: [ParameterCategory; 5] = [
        ParameterCategory::Circulatory,
        ParameterCategory::Respiratory,
        ParameterCategory::Temperature,
        ParameterCategory::Neurological,
        ParameterCategory::Anesthesia,
    ];

    /// Section heading
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ParameterCategory::Circulatory => "Circulatório",
            ParameterCategory::Respiratory => "Respiratório",
            ParameterCategory::Temperature => "Temperatura",
            ParameterCategory::Neurological => "Neurológico",
            ParameterCategory::Anesthesia => "Anestesia",
            ParameterCategory::General => "Geral",
        }
    }
}

/// Shape of the values a key accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Numeric measurement
    Numeric,
    /// Short free-text description
    Text,
}
