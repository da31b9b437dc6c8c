//! Service loads and IS 456 factored combinations
//!
//! # Overview
//!
//! - [`LoadType`] - DL, LL, WL, EL
//! - [`Loads`] - unfactored line (kN/m) or area (kN/m²) loads on one member
//! - [`LoadCombination`] - partial safety factors for one Table 18 combination
//!
//! # Example
//!
//! ```
//! use rcc_core::loads::Loads;
//!
//! let loads = Loads::new(15.0, 10.0);
//! let governing = loads.governing().unwrap();
//! assert_eq!(governing.name, "DL+LL");
//! assert_eq!(governing.value, 37.5);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{find_governing_combination, is456_combinations, FactoredLoad, LoadCombination};
pub use load_types::LoadType;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Unfactored loads acting on a member
///
/// # JSON Format
/// ```json
/// { "dead": 15.0, "live": 10.0, "wind": 0.0, "seismic": 0.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Loads {
    /// Dead load
    #[serde(default)]
    pub dead: f64,
    /// Imposed load
    #[serde(default)]
    pub live: f64,
    /// Wind load
    #[serde(default)]
    pub wind: f64,
    /// Earthquake load
    #[serde(default)]
    pub seismic: f64,
}

impl Loads {
    /// Gravity-only loads
    pub fn new(dead: f64, live: f64) -> Self {
        Loads {
            dead,
            live,
            ..Default::default()
        }
    }

    /// Load value for a type
    pub fn get(&self, load_type: LoadType) -> f64 {
        match load_type {
            LoadType::Dead => self.dead,
            LoadType::Live => self.live,
            LoadType::Wind => self.wind,
            LoadType::Seismic => self.seismic,
        }
    }

    /// Reject negative or NaN loads
    pub fn validate(&self) -> CalcResult<()> {
        for load_type in LoadType::ALL {
            let value = self.get(load_type);
            if value.is_nan() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    load_type.code(),
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }

    /// Every IS 456 combination evaluated against these loads, in table order
    pub fn factored_combinations(&self) -> Vec<FactoredLoad> {
        is456_combinations()
            .into_iter()
            .map(|combo| FactoredLoad {
                value: combo.apply(self),
                name: combo.name,
            })
            .collect()
    }

    /// The largest factored load; the first combination wins ties
    pub fn governing(&self) -> Option<FactoredLoad> {
        let factored = self.factored_combinations();
        find_governing_combination(&factored).cloned()
    }
}
