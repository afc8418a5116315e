//! Regional classification from hydrogeology CSV exports.
//!
//! Each region is scored as if it held a standard medium-sized property, which makes the
//! resulting category a property of the region's rainfall, soil and groundwater alone.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::assessment::domain::{SiteAttribute, SiteContext, UserPreferences};
use crate::assessment::registry::CategoryId;
use crate::assessment::scoring::ScoringEngine;
use parser::RegionRow;

pub const STANDARD_ROOF_AREA_M2: f64 = 100.0;
pub const STANDARD_OPEN_SPACE_M2: f64 = 50.0;

#[derive(Debug)]
pub enum RegionImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RegionImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionImportError::Io(err) => write!(f, "failed to read region export: {}", err),
            RegionImportError::Csv(err) => write!(f, "invalid region CSV data: {}", err),
        }
    }
}

impl std::error::Error for RegionImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegionImportError::Io(err) => Some(err),
            RegionImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RegionImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RegionImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCategory {
    pub region_name: String,
    pub state: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rainfall_mm: Option<f64>,
    pub soil_type: Option<String>,
    pub aquifer_type: Option<String>,
    pub infiltration_rate_mm_per_hr: Option<f64>,
    pub groundwater_depth_m: Option<f64>,
    pub category_id: CategoryId,
    pub category_name: &'static str,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category_id: CategoryId,
    pub category_name: &'static str,
    pub regions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalSummary {
    pub regions: Vec<RegionCategory>,
    /// One entry per catalogued category, in registry order, zero counts included.
    pub category_counts: Vec<CategoryCount>,
}

impl RegionalSummary {
    pub fn count_for(&self, id: CategoryId) -> usize {
        self.category_counts
            .iter()
            .find(|count| count.category_id == id)
            .map_or(0, |count| count.regions)
    }
}

/// Classifies every region of an export with a shared scoring engine.
pub struct RegionImporter<'a> {
    engine: &'a ScoringEngine,
}

impl<'a> RegionImporter<'a> {
    pub fn new(engine: &'a ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn classify_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<RegionalSummary, RegionImportError> {
        let file = File::open(path)?;
        self.classify_reader(file)
    }

    pub fn classify_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<RegionalSummary, RegionImportError> {
        let rows = parser::parse_rows(reader)?;
        let preferences = UserPreferences::default();

        let regions: Vec<RegionCategory> = rows
            .into_iter()
            .map(|row| self.classify(row, &preferences))
            .collect();

        let category_counts = self
            .engine
            .registry()
            .categories()
            .iter()
            .map(|category| CategoryCount {
                category_id: category.id,
                category_name: category.name,
                regions: regions
                    .iter()
                    .filter(|region| region.category_id == category.id)
                    .count(),
            })
            .collect();

        info!(regions = regions.len(), "classified regional export");

        Ok(RegionalSummary {
            regions,
            category_counts,
        })
    }

    fn classify(&self, row: RegionRow, preferences: &UserPreferences) -> RegionCategory {
        let context = site_for(&row);
        let ranking = self.engine.rank(&context, preferences);
        let primary = ranking.primary();

        RegionCategory {
            category_id: primary.category.id,
            category_name: primary.category.name,
            confidence: primary.confidence,
            region_name: row.region_name,
            state: row.state,
            latitude: row.latitude,
            longitude: row.longitude,
            rainfall_mm: row.rainfall_mm,
            soil_type: row.soil_type,
            aquifer_type: row.aquifer_type,
            infiltration_rate_mm_per_hr: row.infiltration_rate_mm_per_hr,
            groundwater_depth_m: row.groundwater_depth_m,
        }
    }
}

fn site_for(row: &RegionRow) -> SiteContext {
    let mut context = SiteContext::new()
        .with(SiteAttribute::RoofAreaM2, STANDARD_ROOF_AREA_M2)
        .with(SiteAttribute::OpenSpaceM2, STANDARD_OPEN_SPACE_M2);

    if let Some(rainfall) = row.rainfall_mm {
        context.insert(SiteAttribute::RainfallMmPerYear, rainfall);
    }
    if let Some(soil) = &row.soil_type {
        context.insert(SiteAttribute::SoilType, soil.to_ascii_lowercase());
    }
    if let Some(depth) = row.groundwater_depth_m {
        context.insert(SiteAttribute::GroundwaterDepthM, depth);
    }
    if let Some(rate) = row.infiltration_rate_mm_per_hr {
        context.insert(SiteAttribute::InfiltrationRateMmPerHr, rate);
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Region_Name,State,Latitude,Longitude,Rainfall_mm,Soil_Type,Aquifer_Type,Infiltration_Rate_mm_per_hr,Groundwater_Depth_m
Chennai North, Tamil Nadu ,13.1,80.2,1400,Sandy,Alluvial,25,4
Jaisalmer,Rajasthan,26.9,70.9,210,Sandy,Unconfined,30,40
Shillong,Meghalaya,25.6,91.9,2200,,Hard Rock,,
";

    #[test]
    fn classifies_each_region_with_the_standard_property() {
        let engine = ScoringEngine::standard();
        let summary = RegionImporter::new(&engine)
            .classify_reader(EXPORT.as_bytes())
            .expect("export parses");

        assert_eq!(summary.regions.len(), 3);
        assert_eq!(summary.regions[0].region_name, "Chennai North");
        assert_eq!(summary.regions[0].state, "Tamil Nadu");
        assert_eq!(summary.regions[1].category_id, CategoryId(1));
        assert!(summary.regions[2].soil_type.is_none());
        assert!(summary.regions[2].groundwater_depth_m.is_none());
    }

    #[test]
    fn counts_cover_every_category_in_registry_order() {
        let engine = ScoringEngine::standard();
        let summary = RegionImporter::new(&engine)
            .classify_reader(EXPORT.as_bytes())
            .expect("export parses");

        assert_eq!(summary.category_counts.len(), 16);
        assert_eq!(summary.category_counts[0].category_id, CategoryId(1));
        let total: usize = summary.category_counts.iter().map(|count| count.regions).sum();
        assert_eq!(total, 3);
        assert_eq!(summary.count_for(CategoryId(13)), 1);
    }

    #[test]
    fn malformed_numbers_surface_as_csv_errors() {
        let engine = ScoringEngine::standard();
        let broken = "Region_Name,Rainfall_mm\nSomewhere,plenty\n";
        let err = RegionImporter::new(&engine)
            .classify_reader(broken.as_bytes())
            .expect_err("non-numeric rainfall rejected");
        assert!(matches!(err, RegionImportError::Csv(_)));
    }

    #[test]
    fn missing_files_surface_as_io_errors() {
        let engine = ScoringEngine::standard();
        let err = RegionImporter::new(&engine)
            .classify_path("/nonexistent/regions.csv")
            .expect_err("missing file");
        assert!(matches!(err, RegionImportError::Io(_)));
    }
}
