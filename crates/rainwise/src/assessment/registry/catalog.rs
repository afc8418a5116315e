use super::{CategoryDefinition, CategoryId, CriteriaSet, Criterion, NumericRange};
use crate::assessment::domain::SiteAttribute::{
    BuildingAge, BuildingCertification, BuildingType, DeploymentTime, GroundwaterDepthM,
    GroundwaterQuality, InfiltrationRateMmPerHr, LocationType, ModificationType, Occupancy,
    OpenSpaceM2, Population, PopulationServed, RainfallMmPerYear, RoofAreaM2, RoofType,
    SoilType, SpaceConstraints, UsageType, WaterDemand, WaterQualityRequired, WaterUsage,
};

const RECHARGE_SOILS: &[&str] = &["sandy", "loamy"];

pub(super) fn standard_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            id: CategoryId(1),
            name: "Above-Ground Storage Tank System",
            description: "For properties where groundwater recharge is not feasible due to site constraints (e.g., limited open space, low rainfall, or shallow groundwater).",
            recommended_structures: vec![
                "Above-ground storage tank (500–2,000 liters)",
                "First flush diverter",
                "Basic filtration unit",
            ],
            recharge_feasible: false,
            criteria: CriteriaSet::AnyOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::below(50.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::below(10.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::below(600.0)),
                Criterion::numeric(GroundwaterDepthM, NumericRange::below(3.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(2),
            name: "Recharge Pit with Storage Tank System",
            description: "Small to medium homes with limited yard space",
            recommended_structures: vec![
                "Storage tank (3,000–8,000 liters)",
                "1×1×2 m recharge pit",
                "Sand–gravel–boulder filter and silt trap",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(50.0, 150.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::between(10.0, 25.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::between(600.0, 1000.0)),
                Criterion::numeric(GroundwaterDepthM, NumericRange::between(3.0, 8.0)),
                Criterion::one_of(SoilType, &["sandy", "loamy", "sandy loam"]),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(3),
            name: "Recharge Trench with Storage Tank System",
            description: "Medium-sized houses with adequate open space",
            recommended_structures: vec![
                "Storage tank (5,000–15,000 liters)",
                "Multiple pits (1–2 m deep) or trench (10–20 m)",
                "Filtration and desilting mechanisms",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(150.0, 400.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::between(25.0, 100.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::between(1000.0, 1400.0)),
                Criterion::numeric(GroundwaterDepthM, NumericRange::between(5.0, 15.0)),
                Criterion::one_of(SoilType, RECHARGE_SOILS),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(4),
            name: "Recharge Shaft/Borewell System",
            description: "Large homes, multi-story buildings",
            recommended_structures: vec![
                "Storage tank (10,000–25,000 liters)",
                "Recharge shaft (25–30 m deep)",
                "Injection well (5 liters/sec capacity)",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(400.0, 1000.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::between(50.0, 200.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(1000.0)),
                Criterion::numeric(GroundwaterDepthM, NumericRange::above(15.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(5),
            name: "Recharge Pond/Community System",
            description: "Institutions, farms, large plots, apartment complexes",
            recommended_structures: vec![
                "Large storage (25,000–100,000 liters)",
                "Percolation pond/tank (10×10×2–3 m)",
                "Check dams",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::above(1000.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::above(200.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(800.0)),
                Criterion::numeric(GroundwaterDepthM, NumericRange::between(3.0, 20.0)),
                Criterion::one_of(SoilType, RECHARGE_SOILS),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(6),
            name: "Supplementary Storage System",
            description: "For properties with highly restrictive conditions (e.g., very small area, extremely low rainfall, or poor soil infiltration) where a full-scale system is not practical.",
            recommended_structures: vec![
                "Small storage tank (200–1,000 liters)",
                "Shared/community rainwater systems",
                "Water-use efficiency measures",
            ],
            recharge_feasible: false,
            criteria: CriteriaSet::AnyOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::below(30.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::below(5.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::below(500.0)),
                Criterion::numeric(InfiltrationRateMmPerHr, NumericRange::below(5.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(7),
            name: "Urban High-Rise Rooftop System",
            description: "Multi-story buildings, condominiums, and urban residential complexes with limited ground space",
            recommended_structures: vec![
                "Elevated storage tanks (5,000–20,000 liters)",
                "Rooftop recharge systems",
                "Modular filtration units",
                "Pressure booster systems",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::above(200.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::below(50.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(600.0)),
                Criterion::one_of(
                    BuildingType,
                    &["apartment", "condominium", "high-rise", "multi-story"],
                ),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(8),
            name: "Commercial Underground Tank System",
            description: "Office buildings, shopping centers, and commercial establishments with high occupancy",
            recommended_structures: vec![
                "Large underground tanks (10,000–50,000 liters)",
                "Advanced filtration systems",
                "Dual plumbing systems",
                "Water quality monitoring",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(500.0, 5000.0)),
                // people per day
                Criterion::numeric(Occupancy, NumericRange::above(50.0)),
                Criterion::one_of(WaterDemand, &["high", "commercial"]),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(700.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(9),
            name: "Educational Institution System",
            description: "Schools, colleges, universities with large catchment areas and educational water use",
            recommended_structures: vec![
                "Large storage tanks (20,000–100,000 liters)",
                "Educational demonstration systems",
                "Greywater integration",
                "Student participation features",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(1000.0, 10000.0)),
                Criterion::numeric(OpenSpaceM2, NumericRange::between(100.0, 1000.0)),
                Criterion::one_of(
                    BuildingType,
                    &["school", "college", "university", "educational"],
                ),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(600.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(10),
            name: "Healthcare Sterile Storage System",
            description: "Hospitals, clinics, medical centers requiring high water quality standards",
            recommended_structures: vec![
                "Sterile storage systems (5,000–30,000 liters)",
                "Advanced multi-stage filtration",
                "UV disinfection",
                "Emergency backup systems",
                "Water quality testing labs",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(500.0, 2000.0)),
                Criterion::one_of(WaterQualityRequired, &["drinking", "medical", "sterile"]),
                Criterion::one_of(
                    BuildingType,
                    &["hospital", "clinic", "medical", "healthcare"],
                ),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(800.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(11),
            name: "Industrial Process Water System",
            description: "Factories, warehouses, manufacturing facilities with process water needs",
            recommended_structures: vec![
                "Large industrial tanks (50,000–200,000 liters)",
                "Pre-treatment systems",
                "Process water integration",
                "Sludge management systems",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::numeric(RoofAreaM2, NumericRange::between(2000.0, 50000.0)),
                Criterion::one_of(WaterUsage, &["industrial", "process", "manufacturing"]),
                Criterion::numeric(OpenSpaceM2, NumericRange::between(200.0, 2000.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(600.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(12),
            name: "Community Shared Tank System",
            description: "Village communities, small settlements with shared water systems",
            recommended_structures: vec![
                "Community storage tanks (10,000–50,000 liters)",
                "Shared recharge structures",
                "Village-level distribution",
                "Community maintenance programs",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                // combined village roofs
                Criterion::numeric(RoofAreaM2, NumericRange::between(200.0, 2000.0)),
                Criterion::numeric(Population, NumericRange::between(50.0, 1000.0)),
                Criterion::one_of(LocationType, &["rural", "village", "community"]),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(500.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(13),
            name: "Coastal Elevated Storage System",
            description: "Coastal areas and islands with saline groundwater and specific water challenges",
            recommended_structures: vec![
                "Elevated storage tanks (2,000–10,000 liters)",
                "Saltwater intrusion barriers",
                "Corrosion-resistant materials",
                "Desalination integration",
            ],
            // saline aquifers rule out recharge
            recharge_feasible: false,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::one_of(LocationType, &["coastal", "island", "beach", "marine"]),
                Criterion::one_of(GroundwaterQuality, &["saline", "brackish", "coastal"]),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(800.0)),
                Criterion::numeric(RoofAreaM2, NumericRange::between(50.0, 500.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(14),
            name: "Green Building Integrated System",
            description: "Sustainable buildings, green certified structures with integrated environmental systems",
            recommended_structures: vec![
                "Green roof integration",
                "Permeable paving connection",
                "Solar-powered pumps",
                "Smart monitoring systems",
                "Biodiversity features",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::one_of(
                    BuildingCertification,
                    &["green", "leed", "eco", "sustainable"],
                ),
                Criterion::one_of(RoofType, &["green", "vegetated", "eco-roof"]),
                Criterion::numeric(OpenSpaceM2, NumericRange::above(20.0)),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(600.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(15),
            name: "Retrofit Compact System",
            description: "Modifying existing buildings without RWH systems to add rainwater harvesting",
            recommended_structures: vec![
                "Compact storage solutions (1,000–5,000 liters)",
                "Minimal excavation recharge",
                "Integration with existing plumbing",
                "Non-invasive installation methods",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                // age in years, or a descriptive label
                Criterion::numeric_or_one_of(
                    BuildingAge,
                    NumericRange::above(10.0),
                    &["old", "heritage", "existing"],
                ),
                Criterion::one_of(ModificationType, &["retrofit", "existing", "modification"]),
                Criterion::one_of(SpaceConstraints, &["limited", "constrained", "urban"]),
                Criterion::numeric(RoofAreaM2, NumericRange::between(50.0, 1000.0)),
            ]),
        },
        CategoryDefinition {
            id: CategoryId(16),
            name: "Emergency Portable System",
            description: "Temporary or emergency water systems for disaster-affected areas",
            recommended_structures: vec![
                "Portable storage tanks (500–5,000 liters)",
                "Quick-deploy filtration",
                "Mobile recharge systems",
                "Temporary distribution networks",
            ],
            recharge_feasible: true,
            criteria: CriteriaSet::AllOf(vec![
                Criterion::one_of(UsageType, &["emergency", "disaster", "relief", "temporary"]),
                Criterion::one_of(DeploymentTime, &["urgent", "emergency", "quick"]),
                Criterion::numeric(RainfallMmPerYear, NumericRange::above(400.0)),
                Criterion::numeric(PopulationServed, NumericRange::above(20.0)),
            ]),
        },
    ]
}
