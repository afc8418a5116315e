use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a regional hydrogeology export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RegionRow {
    #[serde(rename = "Region_Name")]
    pub(crate) region_name: String,
    #[serde(rename = "State", default)]
    pub(crate) state: String,
    #[serde(rename = "Latitude", default)]
    pub(crate) latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    pub(crate) longitude: Option<f64>,
    #[serde(rename = "Rainfall_mm", default)]
    pub(crate) rainfall_mm: Option<f64>,
    #[serde(rename = "Soil_Type", default, deserialize_with = "empty_string_as_none")]
    pub(crate) soil_type: Option<String>,
    #[serde(rename = "Aquifer_Type", default, deserialize_with = "empty_string_as_none")]
    pub(crate) aquifer_type: Option<String>,
    #[serde(rename = "Infiltration_Rate_mm_per_hr", default)]
    pub(crate) infiltration_rate_mm_per_hr: Option<f64>,
    #[serde(rename = "Groundwater_Depth_m", default)]
    pub(crate) groundwater_depth_m: Option<f64>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RegionRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<RegionRow>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}
