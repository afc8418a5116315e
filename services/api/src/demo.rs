use crate::infra::{load_site, parse_complexity};
use clap::Args;
use rainwise::assessment::{
    ComplexityPreference, FeasibilityAssessor, FeasibilityReport, SiteAttribute, SiteContext,
    UserPreferences,
};
use rainwise::config::AppConfig;
use rainwise::error::AppError;
use rainwise::regions::{RegionImporter, RegionalSummary};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON file holding a site description; flags below override its values
    #[arg(long)]
    pub(crate) site: Option<PathBuf>,
    /// Roof catchment area in square metres
    #[arg(long)]
    pub(crate) roof_area: Option<f64>,
    /// Unpaved open space in square metres
    #[arg(long)]
    pub(crate) open_space: Option<f64>,
    /// Annual rainfall in millimetres
    #[arg(long)]
    pub(crate) rainfall: Option<f64>,
    #[arg(long)]
    pub(crate) soil_type: Option<String>,
    /// Depth to the water table in metres
    #[arg(long)]
    pub(crate) groundwater_depth: Option<f64>,
    /// Soil infiltration rate in mm/hr
    #[arg(long)]
    pub(crate) infiltration_rate: Option<f64>,
    #[arg(long)]
    pub(crate) roof_type: Option<String>,
    #[arg(long)]
    pub(crate) building_type: Option<String>,
    #[arg(long)]
    pub(crate) property_type: Option<String>,
    /// drinking, potable, irrigation, ... (drives purification and costing)
    #[arg(long)]
    pub(crate) intended_use: Option<String>,
    /// urban, semi_urban or rural
    #[arg(long)]
    pub(crate) location_type: Option<String>,
    #[arg(long)]
    pub(crate) household_size: Option<f64>,
    /// Comma-separated list such as "municipal,borewell"
    #[arg(long)]
    pub(crate) existing_water_sources: Option<String>,
    /// simple, balanced or advanced
    #[arg(long, value_parser = parse_complexity)]
    pub(crate) complexity: Option<ComplexityPreference>,
    /// Print the report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CategoriesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RegionsArgs {
    /// Regional hydrogeology CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the classification as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Prefer low-maintenance systems for every sample site
    #[arg(long)]
    pub(crate) simple: bool,
}

impl AssessArgs {
    fn site_context(&self) -> Result<SiteContext, AppError> {
        let mut site = match &self.site {
            Some(path) => load_site(path)?,
            None => SiteContext::new(),
        };

        let numbers = [
            (SiteAttribute::RoofAreaM2, self.roof_area),
            (SiteAttribute::OpenSpaceM2, self.open_space),
            (SiteAttribute::RainfallMmPerYear, self.rainfall),
            (SiteAttribute::GroundwaterDepthM, self.groundwater_depth),
            (SiteAttribute::InfiltrationRateMmPerHr, self.infiltration_rate),
            (SiteAttribute::HouseholdSize, self.household_size),
        ];
        for (attribute, value) in numbers {
            if let Some(value) = value {
                site.insert(attribute, value);
            }
        }

        let labels = [
            (SiteAttribute::SoilType, &self.soil_type),
            (SiteAttribute::RoofType, &self.roof_type),
            (SiteAttribute::BuildingType, &self.building_type),
            (SiteAttribute::PropertyType, &self.property_type),
            (SiteAttribute::IntendedUse, &self.intended_use),
            (SiteAttribute::LocationType, &self.location_type),
            (SiteAttribute::ExistingWaterSources, &self.existing_water_sources),
        ];
        for (attribute, value) in labels {
            if let Some(value) = value {
                site.insert(attribute, value.as_str());
            }
        }

        Ok(site)
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let assessor = FeasibilityAssessor::from_config(&config.assessment);

    let site = args.site_context()?;
    let preferences = args.complexity.map(UserPreferences::new);
    let report = assessor.assess(&site, preferences.as_ref());

    if args.json {
        return print_json(&report);
    }

    render_report("Site assessment", &report);
    Ok(())
}

pub(crate) fn run_categories(args: CategoriesArgs) -> Result<(), AppError> {
    let assessor = FeasibilityAssessor::standard();
    let categories = assessor.engine().registry().categories();

    if args.json {
        return print_json(&categories);
    }

    println!("Rainwater harvesting categories ({})", categories.len());
    for category in categories {
        let recharge = if category.recharge_feasible {
            "recharge"
        } else {
            "storage only"
        };
        println!("- [{}] {} ({})", category.id, category.name, recharge);
        println!("    {}", category.description);
        println!("    Structures: {}", category.recommended_structures.join(", "));
    }
    Ok(())
}

pub(crate) fn run_regions(args: RegionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let assessor = FeasibilityAssessor::from_config(&config.assessment);
    let summary = RegionImporter::new(assessor.engine()).classify_path(&args.csv)?;

    if args.json {
        return print_json(&summary);
    }

    render_regional_summary(&summary);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let assessor = FeasibilityAssessor::standard();
    let preferences = args
        .simple
        .then(|| UserPreferences::new(ComplexityPreference::Simple));

    println!("Rainwater harvesting demo");
    for (title, site) in sample_sites() {
        let report = assessor.assess(&site, preferences.as_ref());
        println!();
        render_report(title, &report);
    }
    Ok(())
}

fn sample_sites() -> Vec<(&'static str, SiteContext)> {
    vec![
        (
            "Family home, short form",
            SiteContext::new()
                .with(SiteAttribute::RoofAreaM2, 100.0)
                .with(SiteAttribute::RainfallMmPerYear, 800.0)
                .with(SiteAttribute::RoofType, "concrete")
                .with(SiteAttribute::HouseholdSize, 4.0)
                .with(SiteAttribute::ExistingWaterSources, "municipal"),
        ),
        (
            "Independent house with a garden",
            SiteContext::new()
                .with(SiteAttribute::RoofAreaM2, 100.0)
                .with(SiteAttribute::OpenSpaceM2, 17.5)
                .with(SiteAttribute::RainfallMmPerYear, 800.0)
                .with(SiteAttribute::GroundwaterDepthM, 5.5)
                .with(SiteAttribute::SoilType, "loamy")
                .with(SiteAttribute::LocationType, "semi_urban")
                .with(SiteAttribute::HouseholdSize, 5.0),
        ),
        (
            "Hospital needing potable supply",
            SiteContext::new()
                .with(SiteAttribute::RoofAreaM2, 1200.0)
                .with(SiteAttribute::RainfallMmPerYear, 1100.0)
                .with(SiteAttribute::BuildingType, "hospital")
                .with(SiteAttribute::WaterQualityRequired, "potable")
                .with(SiteAttribute::IntendedUse, "drinking")
                .with(SiteAttribute::LocationType, "urban"),
        ),
    ]
}

fn render_report(title: &str, report: &FeasibilityReport) {
    let primary = &report.primary;
    let potential = &report.harvesting_potential;
    let costs = &report.cost_analysis;

    println!("{title}");
    println!(
        "- Recommended: [{}] {} ({:.1}% confidence, score {})",
        primary.category.id, primary.category.name, primary.confidence, primary.score
    );
    println!("  {}", primary.recommendation_reason);
    for alternative in &report.alternatives {
        println!(
            "  Alternative: [{}] {} ({:.1}%)",
            alternative.category.id, alternative.category.name, alternative.confidence
        );
    }

    println!(
        "- Harvest: {:.0} L/year | {:.0} L peak month | {:.0} L/day (runoff {:.2})",
        potential.annual_liters,
        potential.peak_monthly_liters,
        potential.daily_average_liters,
        potential.runoff_coefficient
    );
    println!(
        "- Demand coverage: {:.1}% ({})",
        report.feasibility_percentage(),
        report.demand.feasibility_label
    );

    let storage = &report.structure_dimensions.storage;
    println!(
        "- Storage tank: {} L, {:.1} m diameter, {}",
        storage.capacity_liters, storage.diameter_m, storage.material_cost
    );
    if let Some(pit) = &report.structure_dimensions.pit {
        println!(
            "- Recharge pit: {:.1} x {:.1} x {:.1} m, {}",
            pit.length_m, pit.width_m, pit.depth_m, pit.material_cost
        );
    }
    if let Some(trench) = &report.structure_dimensions.trench {
        println!(
            "- Recharge trench: {:.1} x {:.1} x {:.1} m, {}",
            trench.length_m, trench.width_m, trench.depth_m, trench.material_cost
        );
    }

    println!(
        "- Cost: ₹{:.0} total, ₹{:.0} subsidy, ₹{:.0} net | payback {:.1} years | ROI {:.1}%",
        costs.total_cost,
        costs.subsidy_amount,
        costs.net_investment,
        costs.payback_years,
        costs.roi_percentage
    );
    println!(
        "- Purification: {} ({})",
        report.purification.treatment_sequence.join(" -> "),
        report.purification.water_quality_expected
    );

    let safety = &report.recharge_safety;
    if safety.is_safe {
        println!("- Recharge safety: no concerns");
    } else {
        println!("- Recharge safety concerns:");
        for issue in &safety.safety_issues {
            println!("    - {issue}");
        }
        if !safety.alternatives.is_empty() {
            println!("  Consider: {}", safety.alternatives.join(", "));
        }
    }
}

fn render_regional_summary(summary: &RegionalSummary) {
    println!("Regional classification ({} regions)", summary.regions.len());
    for region in &summary.regions {
        println!(
            "- {}, {}: [{}] {} ({:.1}%)",
            region.region_name,
            region.state,
            region.category_id,
            region.category_name,
            region.confidence
        );
    }

    println!("Category distribution:");
    for count in summary.category_counts.iter().filter(|count| count.regions > 0) {
        println!(
            "  - [{}] {}: {}",
            count.category_id, count.category_name, count.regions
        );
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}
