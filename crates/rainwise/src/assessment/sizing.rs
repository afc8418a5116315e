//! Structure dimensioning from harvestable volume and available open space.

use serde::Serialize;

use super::round_to_tenth;

const SMALL_PIT_LIMIT_LITERS: f64 = 50_000.0;
const LARGE_PIT_LIMIT_LITERS: f64 = 150_000.0;
const TRENCH_MIN_OPEN_SPACE_M2: f64 = 50.0;
const TRENCH_MIN_VOLUME_LITERS: f64 = 100_000.0;
const TRENCH_SPACE_SHARE: f64 = 0.3;
const TRENCH_LITERS_PER_METER: f64 = 5_000.0;
const STORAGE_SHARE: f64 = 0.3;
const STORAGE_CAP_LITERS: f64 = 25_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitDimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub material_cost: &'static str,
}

const SMALL_PIT: PitDimensions = PitDimensions {
    length_m: 1.5,
    width_m: 1.5,
    depth_m: 2.5,
    volume_m3: 5.6,
    material_cost: "₹8,000-15,000",
};

const LARGE_PIT: PitDimensions = PitDimensions {
    length_m: 2.0,
    width_m: 2.0,
    depth_m: 3.0,
    volume_m3: 12.0,
    material_cost: "₹15,000-25,000",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrenchDimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub material_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageTank {
    pub capacity_liters: u32,
    /// Rough cylinder sizing, not a structural calculation.
    pub diameter_m: f64,
    pub material_cost: String,
}

/// Recommended structures for one site. Pit and trench only appear for recharge categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit: Option<PitDimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trench: Option<TrenchDimensions>,
    pub storage: StorageTank,
}

pub fn dimension_structures(
    annual_volume_liters: f64,
    open_space_m2: f64,
    recharge_feasible: bool,
) -> StructureDimensions {
    let (pit, trench) = if recharge_feasible {
        (
            recharge_pit(annual_volume_liters),
            recharge_trench(annual_volume_liters, open_space_m2),
        )
    } else {
        (None, None)
    };

    StructureDimensions {
        pit,
        trench,
        storage: storage_tank(annual_volume_liters),
    }
}

fn recharge_pit(volume: f64) -> Option<PitDimensions> {
    if volume <= SMALL_PIT_LIMIT_LITERS {
        Some(SMALL_PIT)
    } else if volume <= LARGE_PIT_LIMIT_LITERS {
        Some(LARGE_PIT)
    } else {
        None
    }
}

fn recharge_trench(volume: f64, open_space_m2: f64) -> Option<TrenchDimensions> {
    if open_space_m2 <= TRENCH_MIN_OPEN_SPACE_M2 || volume <= TRENCH_MIN_VOLUME_LITERS {
        return None;
    }

    let length_m = (open_space_m2 * TRENCH_SPACE_SHARE).min(volume / TRENCH_LITERS_PER_METER);
    Some(TrenchDimensions {
        length_m,
        width_m: 1.0,
        depth_m: 2.0,
        volume_m3: length_m * 2.0,
        material_cost: rupee_range(length_m * 2_000.0, length_m * 3_500.0),
    })
}

fn storage_tank(volume: f64) -> StorageTank {
    let capacity = (volume * STORAGE_SHARE).min(STORAGE_CAP_LITERS).max(0.0);
    let diameter = (capacity / 1_000.0 / std::f64::consts::PI * 4.0 / 3.0).cbrt();

    StorageTank {
        capacity_liters: capacity as u32,
        diameter_m: round_to_tenth(diameter),
        material_cost: rupee_range(capacity * 12.0, capacity * 18.0),
    }
}

fn rupee_range(low: f64, high: f64) -> String {
    format!("₹{}-{}", low as i64, high as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_thousand_liters_stays_in_the_small_pit_tier() {
        let dims = dimension_structures(50_000.0, 30.0, true);
        assert_eq!(dims.pit, Some(SMALL_PIT));

        let dims = dimension_structures(50_000.1, 30.0, true);
        assert_eq!(dims.pit, Some(LARGE_PIT));
    }

    #[test]
    fn very_large_volumes_get_no_pit() {
        let dims = dimension_structures(200_000.0, 30.0, true);
        assert!(dims.pit.is_none());
        assert!(dims.trench.is_none());
    }

    #[test]
    fn storage_only_categories_skip_recharge_structures() {
        let dims = dimension_structures(120_000.0, 400.0, false);
        assert!(dims.pit.is_none());
        assert!(dims.trench.is_none());
        assert_eq!(dims.storage.capacity_liters, 25_000);
    }

    #[test]
    fn trench_length_is_limited_by_space_or_volume() {
        let dims = dimension_structures(120_000.0, 100.0, true);
        let trench = dims.trench.expect("trench for large site");
        assert!((trench.length_m - 24.0).abs() < 1e-9);
        assert!((trench.volume_m3 - 48.0).abs() < 1e-9);
        assert_eq!(trench.material_cost, "₹48000-84000");

        let dims = dimension_structures(120_000.0, 60.0, true);
        let trench = dims.trench.expect("trench for medium site");
        assert!((trench.length_m - 18.0).abs() < 1e-9);
    }

    #[test]
    fn trench_thresholds_are_exclusive() {
        let cases = [
            (120_000.0, 50.0, false),
            (120_000.0, 50.1, true),
            (100_000.0, 100.0, false),
            (100_000.1, 100.0, true),
        ];

        for (volume, open_space, expected) in cases {
            let dims = dimension_structures(volume, open_space, true);
            assert_eq!(
                dims.trench.is_some(),
                expected,
                "volume {volume} open space {open_space}"
            );
        }
    }

    #[test]
    fn storage_tank_takes_thirty_percent_of_the_harvest() {
        let dims = dimension_structures(68_000.0, 20.0, true);
        assert_eq!(dims.storage.capacity_liters, 20_400);
        assert_eq!(dims.storage.material_cost, "₹244800-367200");
        assert!((dims.storage.diameter_m - 2.1).abs() < 1e-9);
    }
}
