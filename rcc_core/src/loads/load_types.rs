//! Load categories recognised by IS 456:2000 Clause 36.4 / IS 875

use serde::{Deserialize, Serialize};

/// Load types entering the limit-state combinations
///
/// # Example
/// ```
/// use rcc_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "DL");
/// assert_eq!(LoadType::Seismic.description(), "Earthquake load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadType {
    /// DL - self weight and superimposed permanent load
    Dead,
    /// LL - imposed (occupancy) load
    Live,
    /// WL - wind load
    Wind,
    /// EL - earthquake load
    Seismic,
}

impl LoadType {
    /// All load types in combination-equation order
    pub const ALL: [LoadType; 4] = [LoadType::Dead, LoadType::Live, LoadType::Wind, LoadType::Seismic];

    /// Abbreviation used in combination names (DL, LL, WL, EL)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "DL",
            LoadType::Live => "LL",
            LoadType::Wind => "WL",
            LoadType::Seismic => "EL",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Imposed load",
            LoadType::Wind => "Wind load",
            LoadType::Seismic => "Earthquake load",
        }
    }

    /// Whether this load acts laterally
    pub fn is_lateral(&self) -> bool {
        matches!(self, LoadType::Wind | LoadType::Seismic)
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<_> = LoadType::ALL.iter().map(|t| t.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), LoadType::ALL.len());
    }

    #[test]
    fn test_lateral() {
        assert!(!LoadType::Dead.is_lateral());
        assert!(LoadType::Wind.is_lateral());
        assert!(LoadType::Seismic.is_lateral());
    }
}
