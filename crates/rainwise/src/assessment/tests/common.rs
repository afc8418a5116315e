use crate::assessment::domain::SiteAttribute::{
    GroundwaterDepthM, HouseholdSize, OpenSpaceM2, RainfallMmPerYear, RoofAreaM2, RoofType,
    SoilType,
};
use crate::assessment::domain::{ComplexityPreference, SiteContext, UserPreferences};
use crate::assessment::registry::CategoryId;
use crate::assessment::scoring::{CategoryRanking, ScoringEngine};

/// Midpoints of a category's numeric ranges with a soil the category accepts.
pub(super) fn midpoint_site(roof: f64, open: f64, rainfall: f64, depth: f64) -> SiteContext {
    SiteContext::new()
        .with(RoofAreaM2, roof)
        .with(OpenSpaceM2, open)
        .with(RainfallMmPerYear, rainfall)
        .with(GroundwaterDepthM, depth)
        .with(SoilType, "loamy")
}

pub(super) fn recharge_pit_site() -> SiteContext {
    midpoint_site(100.0, 17.5, 800.0, 5.5)
}

pub(super) fn constrained_site() -> SiteContext {
    SiteContext::new()
        .with(RoofAreaM2, 40.0)
        .with(OpenSpaceM2, 8.0)
        .with(RainfallMmPerYear, 550.0)
        .with(GroundwaterDepthM, 2.5)
}

/// Roof and rainfall only, as an owner filling in the short form would supply.
pub(super) fn household_site() -> SiteContext {
    SiteContext::new()
        .with(RoofAreaM2, 100.0)
        .with(RainfallMmPerYear, 800.0)
        .with(RoofType, "concrete")
        .with(HouseholdSize, 4.0)
}

pub(super) fn preferences(complexity: ComplexityPreference) -> UserPreferences {
    UserPreferences::new(complexity)
}

pub(super) fn rank(site: &SiteContext) -> CategoryRanking {
    ScoringEngine::standard().rank(site, &UserPreferences::default())
}

pub(super) fn ids(results: &CategoryRanking) -> Vec<u8> {
    results.all().iter().map(|result| result.category.id.0).collect()
}

pub(super) fn score_of(ranking: &CategoryRanking, id: u8) -> i32 {
    ranking
        .all()
        .iter()
        .find(|result| result.category.id == CategoryId(id))
        .map(|result| result.score)
        .unwrap_or_else(|| panic!("category {id} missing from ranking"))
}
