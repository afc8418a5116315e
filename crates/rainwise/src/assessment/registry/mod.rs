//! Immutable catalog of harvesting-system categories and their matching rules.
//!
//! Category definitions are plain data: each carries a [`CriteriaSet`] of [`Criterion`]
//! values that a small interpreter ([`Criterion::holds`]) evaluates against a site value.
//! The standard catalog is built once per process and shared read-only.

mod catalog;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::domain::{SiteAttribute, SiteValue};

/// Highest category id the catalog may use.
pub const MAX_CATEGORY_ID: u8 = 16;

/// Identifier of a catalogued category (1..=16, declaration order is the tie-break order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u8);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One end of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "bound", content = "value", rename_all = "snake_case")]
pub enum Limit {
    Inclusive(f64),
    Exclusive(f64),
}

impl Limit {
    pub const fn value(self) -> f64 {
        match self {
            Limit::Inclusive(value) | Limit::Exclusive(value) => value,
        }
    }
}

/// Numeric interval; a missing end is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: Option<Limit>,
    pub max: Option<Limit>,
}

impl NumericRange {
    /// Closed interval `[min, max]`.
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(Limit::Inclusive(min)),
            max: Some(Limit::Inclusive(max)),
        }
    }

    /// Strictly greater than `min`.
    pub const fn above(min: f64) -> Self {
        Self {
            min: Some(Limit::Exclusive(min)),
            max: None,
        }
    }

    /// Strictly less than `max`.
    pub const fn below(max: f64) -> Self {
        Self {
            min: None,
            max: Some(Limit::Exclusive(max)),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = match self.min {
            Some(Limit::Inclusive(min)) => value >= min,
            Some(Limit::Exclusive(min)) => value > min,
            None => true,
        };
        let below_max = match self.max {
            Some(Limit::Inclusive(max)) => value <= max,
            Some(Limit::Exclusive(max)) => value < max,
            None => true,
        };
        above_min && below_max
    }
}

/// Predicate applied to a single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CriterionKind {
    NumericRange(NumericRange),
    CategoricalSet {
        allowed: &'static [&'static str],
    },
    /// Accepts either a number inside `range` or one of the `allowed` labels.
    NumericOrCategorical {
        range: NumericRange,
        allowed: &'static [&'static str],
    },
}

/// A single (attribute, predicate) rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub attribute: SiteAttribute,
    #[serde(flatten)]
    pub kind: CriterionKind,
}

impl Criterion {
    pub const fn numeric(attribute: SiteAttribute, range: NumericRange) -> Self {
        Self {
            attribute,
            kind: CriterionKind::NumericRange(range),
        }
    }

    pub const fn one_of(attribute: SiteAttribute, allowed: &'static [&'static str]) -> Self {
        Self {
            attribute,
            kind: CriterionKind::CategoricalSet { allowed },
        }
    }

    pub const fn numeric_or_one_of(
        attribute: SiteAttribute,
        range: NumericRange,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            attribute,
            kind: CriterionKind::NumericOrCategorical { range, allowed },
        }
    }

    /// Pure and total: a value of the wrong shape simply fails the predicate.
    pub fn holds(&self, value: &SiteValue) -> bool {
        match (&self.kind, value) {
            (CriterionKind::NumericRange(range), SiteValue::Number(number)) => {
                range.contains(*number)
            }
            (CriterionKind::CategoricalSet { allowed }, SiteValue::Text(label)) => {
                label_allowed(allowed, label)
            }
            (CriterionKind::NumericOrCategorical { range, .. }, SiteValue::Number(number)) => {
                range.contains(*number)
            }
            (CriterionKind::NumericOrCategorical { allowed, .. }, SiteValue::Text(label)) => {
                label_allowed(allowed, label)
            }
            (CriterionKind::NumericRange(_), SiteValue::Text(_))
            | (CriterionKind::CategoricalSet { .. }, SiteValue::Number(_)) => false,
        }
    }

    pub fn numeric_range(&self) -> Option<&NumericRange> {
        match &self.kind {
            CriterionKind::NumericRange(range) => Some(range),
            _ => None,
        }
    }
}

fn label_allowed(allowed: &[&str], label: &str) -> bool {
    let label = label.trim();
    allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(label))
}

/// How the criteria of a category are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaMode {
    /// Matches when any criterion holds; used by the restrictive fallback categories.
    AnyOf,
    /// Weighted aggregate across every criterion.
    AllOf,
}

/// Criteria of one category, tagged with exactly one aggregation mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "criteria", rename_all = "snake_case")]
pub enum CriteriaSet {
    AnyOf(Vec<Criterion>),
    AllOf(Vec<Criterion>),
}

impl CriteriaSet {
    pub fn mode(&self) -> CriteriaMode {
        match self {
            CriteriaSet::AnyOf(_) => CriteriaMode::AnyOf,
            CriteriaSet::AllOf(_) => CriteriaMode::AllOf,
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        match self {
            CriteriaSet::AnyOf(criteria) | CriteriaSet::AllOf(criteria) => criteria,
        }
    }
}

/// One catalogued harvesting-system archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDefinition {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended_structures: Vec<&'static str>,
    pub recharge_feasible: bool,
    pub criteria: CriteriaSet,
}

/// Reasons a set of definitions cannot form a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry must contain at least one category")]
    Empty,
    #[error("category id {0} is outside 1..=16")]
    IdOutOfRange(CategoryId),
    #[error("category id {0} declared more than once")]
    DuplicateId(CategoryId),
    #[error("category {category} declares '{attribute}' more than once")]
    DuplicateAttribute {
        category: CategoryId,
        attribute: SiteAttribute,
    },
}

/// Ordered, read-only list of category definitions.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<CategoryDefinition>,
}

impl CategoryRegistry {
    /// The built-in sixteen-category catalog.
    pub fn standard() -> Self {
        Self {
            categories: catalog::standard_categories(),
        }
    }

    /// Process-wide standard catalog, built on first use and never mutated afterwards.
    pub fn shared() -> Arc<CategoryRegistry> {
        static SHARED: OnceLock<Arc<CategoryRegistry>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(CategoryRegistry::standard()))
            .clone()
    }

    pub fn from_definitions(categories: Vec<CategoryDefinition>) -> Result<Self, RegistryError> {
        if categories.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen_ids = BTreeSet::new();
        for category in &categories {
            if category.id.0 == 0 || category.id.0 > MAX_CATEGORY_ID {
                return Err(RegistryError::IdOutOfRange(category.id));
            }
            if !seen_ids.insert(category.id) {
                return Err(RegistryError::DuplicateId(category.id));
            }

            let mut seen_attributes = BTreeSet::new();
            for criterion in category.criteria.criteria() {
                if !seen_attributes.insert(criterion.attribute) {
                    return Err(RegistryError::DuplicateAttribute {
                        category: category.id,
                        attribute: criterion.attribute,
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
