//! IS 456:2000 Limit-State Load Combinations (Clause 36.4.1, Table 18)
//!
//! Partial safety factors for the limit state of collapse. Wind and
//! earthquake are not assumed to act simultaneously, so each lateral load
//! appears in its own pair of combinations.

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::Loads;

/// A named load combination with a partial safety factor per load type
///
/// Factors are stored in insertion order so that the equation reads the way
/// it was written and iteration is deterministic.
///
/// # Example
/// ```
/// use rcc_core::loads::{LoadCombination, LoadType, Loads};
///
/// let combo = LoadCombination::new("DL+LL", "1.5DL + 1.5LL")
///     .with_factor(LoadType::Dead, 1.5)
///     .with_factor(LoadType::Live, 1.5);
///
/// let loads = Loads::new(15.0, 10.0);
/// assert_eq!(combo.apply(&loads), 37.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "DL+LL")
    pub name: String,

    /// Human-readable equation (e.g., "1.5DL + 1.5LL")
    pub equation: String,

    /// Partial safety factors in equation order
    pub factors: Vec<(LoadType, f64)>,
}

impl LoadCombination {
    /// Create an empty combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: Vec::new(),
        }
    }

    /// Add a partial safety factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        match self.factors.iter_mut().find(|(t, _)| *t == load_type) {
            Some(entry) => entry.1 = factor,
            None => self.factors.push((load_type, factor)),
        }
        self
    }

    /// Factored load for this combination
    pub fn apply(&self, loads: &Loads) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * loads.get(*load_type))
            .sum()
    }

    /// Factor for a load type (0.0 when it does not participate)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors
            .iter()
            .find(|(t, _)| *t == load_type)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }
}

/// The fixed IS 456 Table 18 combinations for the limit state of collapse.
///
/// # Example
/// ```
/// use rcc_core::loads::is456_combinations;
///
/// let names: Vec<_> = is456_combinations().into_iter().map(|c| c.name).collect();
/// assert_eq!(names, ["DL+LL", "DL+WL", "DL+LL+WL", "DL+EL", "DL+LL+EL"]);
/// ```
pub fn is456_combinations() -> Vec<LoadCombination> {
    vec![
        LoadCombination::new("DL+LL", "1.5DL + 1.5LL")
            .with_factor(LoadType::Dead, 1.5)
            .with_factor(LoadType::Live, 1.5),
        LoadCombination::new("DL+WL", "1.5DL + 1.5WL")
            .with_factor(LoadType::Dead, 1.5)
            .with_factor(LoadType::Wind, 1.5),
        LoadCombination::new("DL+LL+WL", "1.2DL + 1.2LL + 1.2WL")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.2)
            .with_factor(LoadType::Wind, 1.2),
        LoadCombination::new("DL+EL", "1.5DL + 1.5EL")
            .with_factor(LoadType::Dead, 1.5)
            .with_factor(LoadType::Seismic, 1.5),
        LoadCombination::new("DL+LL+EL", "1.2DL + 1.2LL + 1.2EL")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.2)
            .with_factor(LoadType::Seismic, 1.2),
    ]
}

/// A combination evaluated against a set of loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoredLoad {
    /// Combination identifier
    pub name: String,
    /// Factored load (kN/m or kN/m²)
    pub value: f64,
}

/// Find the combination producing the largest factored load.
///
/// Ties keep the earlier combination. Returns `None` only for an empty list.
pub fn find_governing_combination(factored: &[FactoredLoad]) -> Option<&FactoredLoad> {
    factored.iter().fold(None, |best: Option<&FactoredLoad>, candidate| match best {
        Some(b) if b.value >= candidate.value => Some(b),
        _ => Some(candidate),
    })
}
