use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Attributes a site description may carry. Anything not present is unknown, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteAttribute {
    RoofAreaM2,
    OpenSpaceM2,
    RainfallMmPerYear,
    SoilType,
    GroundwaterDepthM,
    InfiltrationRateMmPerHr,
    BuildingAge,
    Occupancy,
    RoofType,
    PropertyType,
    BuildingType,
    IntendedUse,
    LocationType,
    GroundwaterQuality,
    BuildingCertification,
    ModificationType,
    SpaceConstraints,
    UsageType,
    DeploymentTime,
    PopulationServed,
    Population,
    HouseholdSize,
    ExistingWaterSources,
    WaterDemand,
    WaterQualityRequired,
    WaterUsage,
    AquiferRemarks,
}

impl SiteAttribute {
    pub const ALL: [SiteAttribute; 27] = [
        SiteAttribute::RoofAreaM2,
        SiteAttribute::OpenSpaceM2,
        SiteAttribute::RainfallMmPerYear,
        SiteAttribute::SoilType,
        SiteAttribute::GroundwaterDepthM,
        SiteAttribute::InfiltrationRateMmPerHr,
        SiteAttribute::BuildingAge,
        SiteAttribute::Occupancy,
        SiteAttribute::RoofType,
        SiteAttribute::PropertyType,
        SiteAttribute::BuildingType,
        SiteAttribute::IntendedUse,
        SiteAttribute::LocationType,
        SiteAttribute::GroundwaterQuality,
        SiteAttribute::BuildingCertification,
        SiteAttribute::ModificationType,
        SiteAttribute::SpaceConstraints,
        SiteAttribute::UsageType,
        SiteAttribute::DeploymentTime,
        SiteAttribute::PopulationServed,
        SiteAttribute::Population,
        SiteAttribute::HouseholdSize,
        SiteAttribute::ExistingWaterSources,
        SiteAttribute::WaterDemand,
        SiteAttribute::WaterQualityRequired,
        SiteAttribute::WaterUsage,
        SiteAttribute::AquiferRemarks,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SiteAttribute::RoofAreaM2 => "roof_area_m2",
            SiteAttribute::OpenSpaceM2 => "open_space_m2",
            SiteAttribute::RainfallMmPerYear => "rainfall_mm_per_year",
            SiteAttribute::SoilType => "soil_type",
            SiteAttribute::GroundwaterDepthM => "groundwater_depth_m",
            SiteAttribute::InfiltrationRateMmPerHr => "infiltration_rate_mm_per_hr",
            SiteAttribute::BuildingAge => "building_age",
            SiteAttribute::Occupancy => "occupancy",
            SiteAttribute::RoofType => "roof_type",
            SiteAttribute::PropertyType => "property_type",
            SiteAttribute::BuildingType => "building_type",
            SiteAttribute::IntendedUse => "intended_use",
            SiteAttribute::LocationType => "location_type",
            SiteAttribute::GroundwaterQuality => "groundwater_quality",
            SiteAttribute::BuildingCertification => "building_certification",
            SiteAttribute::ModificationType => "modification_type",
            SiteAttribute::SpaceConstraints => "space_constraints",
            SiteAttribute::UsageType => "usage_type",
            SiteAttribute::DeploymentTime => "deployment_time",
            SiteAttribute::PopulationServed => "population_served",
            SiteAttribute::Population => "population",
            SiteAttribute::HouseholdSize => "household_size",
            SiteAttribute::ExistingWaterSources => "existing_water_sources",
            SiteAttribute::WaterDemand => "water_demand",
            SiteAttribute::WaterQualityRequired => "water_quality_required",
            SiteAttribute::WaterUsage => "water_usage",
            SiteAttribute::AquiferRemarks => "aquifer_remarks",
        }
    }
}

impl fmt::Display for SiteAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown site attribute '{0}'")]
pub struct UnknownAttribute(pub String);

impl FromStr for SiteAttribute {
    type Err = UnknownAttribute;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        SiteAttribute::ALL
            .into_iter()
            .find(|attribute| attribute.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownAttribute(raw.to_string()))
    }
}

/// Value carried by a site attribute: either a measurement or a categorical label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteValue {
    Number(f64),
    Text(String),
}

impl SiteValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SiteValue::Number(value) => Some(*value),
            SiteValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SiteValue::Text(value) => Some(value.as_str()),
            SiteValue::Number(_) => None,
        }
    }
}

impl fmt::Display for SiteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteValue::Number(value) => write!(f, "{value}"),
            SiteValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<f64> for SiteValue {
    fn from(value: f64) -> Self {
        SiteValue::Number(value)
    }
}

impl From<&str> for SiteValue {
    fn from(value: &str) -> Self {
        SiteValue::Text(value.to_string())
    }
}

impl From<String> for SiteValue {
    fn from(value: String) -> Self {
        SiteValue::Text(value)
    }
}

/// Sparse description of a property and its surroundings, built fresh for each evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteContext {
    attributes: BTreeMap<SiteAttribute, SiteValue>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: SiteAttribute, value: impl Into<SiteValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: SiteAttribute, value: impl Into<SiteValue>) {
        self.attributes.insert(attribute, value.into());
    }

    /// Inserts only when the attribute is still unknown.
    pub fn insert_if_absent(&mut self, attribute: SiteAttribute, value: impl Into<SiteValue>) {
        self.attributes
            .entry(attribute)
            .or_insert_with(|| value.into());
    }

    pub fn get(&self, attribute: SiteAttribute) -> Option<&SiteValue> {
        self.attributes.get(&attribute)
    }

    pub fn number(&self, attribute: SiteAttribute) -> Option<f64> {
        self.get(attribute).and_then(SiteValue::as_number)
    }

    pub fn text(&self, attribute: SiteAttribute) -> Option<&str> {
        self.get(attribute).and_then(SiteValue::as_text)
    }

    pub fn contains(&self, attribute: SiteAttribute) -> bool {
        self.attributes.contains_key(&attribute)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SiteAttribute, &SiteValue)> {
        self.attributes.iter().map(|(key, value)| (*key, value))
    }
}

/// How much maintenance complexity the owner is willing to take on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityPreference {
    Simple,
    #[default]
    Balanced,
    Advanced,
}

impl ComplexityPreference {
    pub const fn label(self) -> &'static str {
        match self {
            ComplexityPreference::Simple => "simple",
            ComplexityPreference::Balanced => "balanced",
            ComplexityPreference::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown complexity preference '{0}' (expected simple, balanced or advanced)")]
pub struct UnknownComplexity(pub String);

impl FromStr for ComplexityPreference {
    type Err = UnknownComplexity;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(ComplexityPreference::Simple),
            "balanced" => Ok(ComplexityPreference::Balanced),
            "advanced" => Ok(ComplexityPreference::Advanced),
            _ => Err(UnknownComplexity(raw.to_string())),
        }
    }
}

/// Optional owner preferences supplied next to the site description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub complexity: ComplexityPreference,
}

impl UserPreferences {
    pub fn new(complexity: ComplexityPreference) -> Self {
        Self { complexity }
    }
}
