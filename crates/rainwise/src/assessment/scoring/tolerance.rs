use std::collections::BTreeMap;

use serde::Serialize;

use crate::assessment::domain::SiteAttribute;
use crate::assessment::registry::{CategoryId, CategoryRegistry, CriteriaSet, Limit};

/// Closed interval granting partial credit when a strict range check fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceBand {
    pub min: f64,
    pub max: f64,
}

impl ToleranceBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Site measurements that earn close-match credit. Counts such as occupancy or population
/// are matched strictly.
pub const BANDED_ATTRIBUTES: [SiteAttribute; 5] = [
    SiteAttribute::RoofAreaM2,
    SiteAttribute::OpenSpaceM2,
    SiteAttribute::RainfallMmPerYear,
    SiteAttribute::GroundwaterDepthM,
    SiteAttribute::InfiltrationRateMmPerHr,
];

/// Widened numeric ranges keyed by (category, attribute).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToleranceTable {
    bands: BTreeMap<(CategoryId, SiteAttribute), ToleranceBand>,
}

impl ToleranceTable {
    /// Derives a band for every banded measurement of each AllOf category: the lower end
    /// shrinks by `expansion` (an open lower end starts at zero) and the upper end grows by
    /// it (an open upper end stays unbounded).
    pub fn derive(registry: &CategoryRegistry, expansion: f64) -> Self {
        let mut bands = BTreeMap::new();

        for category in registry.categories() {
            let CriteriaSet::AllOf(criteria) = &category.criteria else {
                continue;
            };

            for criterion in criteria {
                if !BANDED_ATTRIBUTES.contains(&criterion.attribute) {
                    continue;
                }
                let Some(range) = criterion.numeric_range() else {
                    continue;
                };
                let min = range
                    .min
                    .map(Limit::value)
                    .map_or(0.0, |min| min * (1.0 - expansion));
                let max = range
                    .max
                    .map(Limit::value)
                    .map_or(f64::INFINITY, |max| max * (1.0 + expansion));
                bands.insert(
                    (category.id, criterion.attribute),
                    ToleranceBand::new(min, max),
                );
            }
        }

        Self { bands }
    }

    /// Replaces (or adds) a single band.
    pub fn with_band(
        mut self,
        category: CategoryId,
        attribute: SiteAttribute,
        band: ToleranceBand,
    ) -> Self {
        self.bands.insert((category, attribute), band);
        self
    }

    pub fn band(&self, category: CategoryId, attribute: SiteAttribute) -> Option<&ToleranceBand> {
        self.bands.get(&(category, attribute))
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_band(table: &ToleranceTable, id: u8, attribute: SiteAttribute, min: f64, max: f64) {
        let band = table
            .band(CategoryId(id), attribute)
            .unwrap_or_else(|| panic!("band for category {id} {attribute}"));
        assert!((band.min - min).abs() < 1e-9, "min {} != {min}", band.min);
        if max.is_infinite() {
            assert!(band.max.is_infinite());
        } else {
            assert!((band.max - max).abs() < 1e-9, "max {} != {max}", band.max);
        }
    }

    #[test]
    fn derived_bands_widen_strict_ranges_by_a_fifth() {
        let table = ToleranceTable::derive(&CategoryRegistry::standard(), 0.2);

        assert_band(&table, 2, SiteAttribute::RoofAreaM2, 40.0, 180.0);
        assert_band(&table, 2, SiteAttribute::GroundwaterDepthM, 2.4, 9.6);
        assert_band(&table, 3, SiteAttribute::RainfallMmPerYear, 800.0, 1680.0);
        assert_band(&table, 4, SiteAttribute::GroundwaterDepthM, 12.0, f64::INFINITY);
        assert_band(&table, 7, SiteAttribute::OpenSpaceM2, 0.0, 60.0);
    }

    #[test]
    fn categorical_and_any_of_criteria_have_no_band() {
        let table = ToleranceTable::derive(&CategoryRegistry::standard(), 0.2);

        assert!(table.band(CategoryId(2), SiteAttribute::SoilType).is_none());
        assert!(table.band(CategoryId(1), SiteAttribute::RoofAreaM2).is_none());
        assert!(table.band(CategoryId(15), SiteAttribute::BuildingAge).is_none());
    }

    #[test]
    fn counts_are_never_banded() {
        let table = ToleranceTable::derive(&CategoryRegistry::standard(), 0.2);

        assert!(table.band(CategoryId(8), SiteAttribute::Occupancy).is_none());
        assert!(table.band(CategoryId(12), SiteAttribute::Population).is_none());
        assert!(table.band(CategoryId(16), SiteAttribute::PopulationServed).is_none());
    }

    #[test]
    fn standard_bands_cover_every_banded_measurement() {
        use SiteAttribute::{
            GroundwaterDepthM as Depth, OpenSpaceM2 as Open, RainfallMmPerYear as Rain,
            RoofAreaM2 as Roof,
        };
        const INF: f64 = f64::INFINITY;

        // Category 6 is AnyOf and carries no bands.
        let expected: &[(u8, SiteAttribute, f64, f64)] = &[
            (2, Roof, 40.0, 180.0),
            (2, Open, 8.0, 30.0),
            (2, Rain, 480.0, 1200.0),
            (2, Depth, 2.4, 9.6),
            (3, Roof, 120.0, 480.0),
            (3, Open, 20.0, 120.0),
            (3, Rain, 800.0, 1680.0),
            (3, Depth, 4.0, 18.0),
            (4, Roof, 320.0, 1200.0),
            (4, Open, 40.0, 240.0),
            (4, Rain, 800.0, INF),
            (4, Depth, 12.0, INF),
            (5, Roof, 800.0, INF),
            (5, Open, 160.0, INF),
            (5, Rain, 640.0, INF),
            (5, Depth, 2.4, 24.0),
            (7, Roof, 160.0, INF),
            (7, Open, 0.0, 60.0),
            (7, Rain, 480.0, INF),
            (8, Roof, 400.0, 6000.0),
            (8, Rain, 560.0, INF),
            (9, Roof, 800.0, 12000.0),
            (9, Open, 80.0, 1200.0),
            (9, Rain, 480.0, INF),
            (10, Roof, 400.0, 2400.0),
            (10, Rain, 640.0, INF),
            (11, Roof, 1600.0, 60000.0),
            (11, Open, 160.0, 2400.0),
            (11, Rain, 480.0, INF),
            (12, Roof, 160.0, 2400.0),
            (12, Rain, 400.0, INF),
            (13, Rain, 640.0, INF),
            (13, Roof, 40.0, 600.0),
            (14, Open, 16.0, INF),
            (14, Rain, 480.0, INF),
            (15, Roof, 40.0, 1200.0),
            (16, Rain, 320.0, INF),
        ];

        let table = ToleranceTable::derive(&CategoryRegistry::standard(), 0.2);
        for &(id, attribute, min, max) in expected {
            assert_band(&table, id, attribute, min, max);
        }
        assert_eq!(table.len(), expected.len());
    }

    #[test]
    fn zero_expansion_mirrors_strict_ranges() {
        let table = ToleranceTable::derive(&CategoryRegistry::standard(), 0.0);
        assert_band(&table, 3, SiteAttribute::OpenSpaceM2, 25.0, 100.0);
    }

    #[test]
    fn overrides_replace_derived_bands() {
        let table = ToleranceTable::derive(&CategoryRegistry::standard(), 0.2).with_band(
            CategoryId(2),
            SiteAttribute::RoofAreaM2,
            ToleranceBand::new(45.0, 160.0),
        );
        assert_band(&table, 2, SiteAttribute::RoofAreaM2, 45.0, 160.0);
    }
}
