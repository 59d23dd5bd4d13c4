//! Static parameter catalog
//!
//! Immutable table mapping each [`ParameterKey`] to its category, display
//! label and unit. All accessors are total.

use crate::key::{ParameterCategory, ParameterKey, ValueKind};
use std::fmt::Display;
use std::str::FromStr;
use ParameterCategory::{Anesthesia, Circulatory, Neurological, Respiratory, Temperature};
use ValueKind::{Numeric, Text};

/// One row of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Typed key
    pub key: ParameterKey,
    /// camelCase wire name
    pub wire_name: &'static str,
    /// Grouping for icons and sections
    pub category: ParameterCategory,
    /// Display label, unit suffix included
    pub label: &'static str,
    /// Unit of measure, empty for categorical parameters
    pub unit: &'static str,
    /// Value shape
    pub kind: ValueKind,
}

const fn entry(
    key: ParameterKey,
    wire_name: &'static str,
    category: ParameterCategory,
    label: &'static str,
    unit: &'static str,
    kind: ValueKind,
) -> CatalogEntry {
    CatalogEntry {
        key,
        wire_name,
        category,
        label,
        unit,
        kind,
    }
}

/// The catalog, indexed by `ParameterKey as usize`
pub(crate) static CATALOG: [CatalogEntry; 19] = [
    entry(ParameterKey::HeartRate, "heartRate", Circulatory, "Frequência Cardíaca (bpm)", "bpm", Numeric),
    entry(ParameterKey::SystolicPressure, "systolicPressure", Circulatory, "Pressão Sistólica (mmHg)", "mmHg", Numeric),
    entry(ParameterKey::DiastolicPressure, "diastolicPressure", Circulatory, "Pressão Diastólica (mmHg)", "mmHg", Numeric),
    entry(ParameterKey::MeanArterialPressure, "meanArterialPressure", Circulatory, "PAM (mmHg)", "mmHg", Numeric),
    entry(ParameterKey::CentralVenousPressure, "centralVenousPressure", Circulatory, "PVC (mmHg)", "mmHg", Numeric),
    entry(ParameterKey::CardiacRhythm, "cardiacRhythm", Circulatory, "Ritmo Cardíaco", "", Text),
    entry(ParameterKey::RespiratoryRate, "respiratoryRate", Respiratory, "Frequência Respiratória (rpm)", "rpm", Numeric),
    entry(ParameterKey::OxygenSaturation, "oxygenSaturation", Respiratory, "SpO2 (%)", "%", Numeric),
    entry(ParameterKey::EndTidalCo2, "endTidalCo2", Respiratory, "EtCO2 (mmHg)", "mmHg", Numeric),
    entry(ParameterKey::InspiredOxygenFraction, "inspiredOxygenFraction", Respiratory, "FiO2 (%)", "%", Numeric),
    entry(ParameterKey::Temperature, "temperature", Temperature, "Temperatura Central (°C)", "°C", Numeric),
    entry(ParameterKey::PeripheralTemperature, "peripheralTemperature", Temperature, "Temperatura Periférica (°C)", "°C", Numeric),
    entry(ParameterKey::GlasgowComaScale, "glasgowComaScale", Neurological, "Escala de Glasgow (pts)", "pts", Numeric),
    entry(ParameterKey::Pupils, "pupils", Neurological, "Pupilas", "", Text),
    entry(ParameterKey::BispectralIndex, "bispectralIndex", Neurological, "BIS", "", Numeric),
    entry(ParameterKey::AnestheticAgent, "anestheticAgent", Anesthesia, "Agente Anestésico", "", Text),
    entry(ParameterKey::MinimumAlveolarConcentration, "minimumAlveolarConcentration", Anesthesia, "CAM (MAC)", "MAC", Numeric),
    entry(ParameterKey::InspiredAgentConcentration, "inspiredAgentConcentration", Anesthesia, "Fração Inspirada do Agente (%)", "%", Numeric),
    entry(ParameterKey::ExpiredAgentConcentration, "expiredAgentConcentration", Anesthesia, "Fração Expirada do Agente (%)", "%", Numeric),
];

/// Parameter metadata lookup
///
/// Zero-sized handle over the static table. Typed accessors cannot fail;
/// the `_raw` variants accept wire-level strings and fall back to the raw
/// key as label, an empty unit and [`ParameterCategory::General`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterCatalog;

impl ParameterCatalog {
    /// Display label (with unit suffix)
    #[inline]
    #[must_use]
    pub fn label_of(key: ParameterKey) -> &'static str {
        key.entry().label
    }

    /// Unit of measure
    #[inline]
    #[must_use]
    pub fn unit_of(key: ParameterKey) -> &'static str {
        key.entry().unit
    }

    /// Icon category
    #[inline]
    #[must_use]
    pub fn icon_category_of(key: ParameterKey) -> ParameterCategory {
        key.category()
    }

    /// Label for a wire-level key, the key itself when unknown
    #[must_use]
    pub fn label_of_raw(raw: &str) -> &str {
        match ParameterKey::from_str(raw) {
            Ok(key) => Self::label_of(key),
            Err(_) => raw,
        }
    }

    /// Unit for a wire-level key, empty when unknown
    #[must_use]
    pub fn unit_of_raw(raw: &str) -> &'static str {
        ParameterKey::from_str(raw).map_or("", Self::unit_of)
    }

    /// Category for a wire-level key, `General` when unknown
    #[must_use]
    pub fn icon_category_of_raw(raw: &str) -> ParameterCategory {
        ParameterKey::from_str(raw).map_or(ParameterCategory::General, Self::icon_category_of)
    }

    /// All entries in catalog order
    #[inline]
    #[must_use]
    pub fn entries() -> &'static [CatalogEntry] {
        &CATALOG
    }

    /// Keys of one category, in catalog order
    pub fn by_category(category: ParameterCategory) -> impl Iterator<Item = ParameterKey> {
        CATALOG
            .iter()
            .filter(move |e| e.category == category)
            .map(|e| e.key)
    }

    /// Render a value with its unit, e.g. `"80 bpm"`
    #[must_use]
    pub fn format_value(key: ParameterKey, value: &impl Display) -> String {
        match Self::unit_of(key) {
            "" => value.to_string(),
            unit => format!("{value} {unit}"),
        }
    }
}
