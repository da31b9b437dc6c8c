//! Standard concrete and reinforcement grades (IS 456:2000 Table 2, IS 1786)
//!
//! These are closed sets. A [`Material`](super::Material) stores raw strength
//! numbers; whether those numbers name a standard grade is itself a checked
//! property (see [`crate::checks::material`]).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grade by characteristic cube strength fck (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M15,
    M20,
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
    M55,
    M60,
    M65,
    M70,
    M75,
    M80,
}

impl ConcreteGrade {
    /// All concrete grades in ascending strength order
    pub const ALL: [ConcreteGrade; 14] = [
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
        ConcreteGrade::M55,
        ConcreteGrade::M60,
        ConcreteGrade::M65,
        ConcreteGrade::M70,
        ConcreteGrade::M75,
        ConcreteGrade::M80,
    ];

    /// Characteristic strength fck in N/mm²
    pub fn fck(&self) -> f64 {
        match self {
            ConcreteGrade::M15 => 15.0,
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
            ConcreteGrade::M40 => 40.0,
            ConcreteGrade::M45 => 45.0,
            ConcreteGrade::M50 => 50.0,
            ConcreteGrade::M55 => 55.0,
            ConcreteGrade::M60 => 60.0,
            ConcreteGrade::M65 => 65.0,
            ConcreteGrade::M70 => 70.0,
            ConcreteGrade::M75 => 75.0,
            ConcreteGrade::M80 => 80.0,
        }
    }

    /// Exact membership test: `Some` only when fck names a standard grade
    pub fn from_fck(fck: f64) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.fck() == fck)
    }

    /// Parse "M25", "m25" or "25"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim().trim_start_matches(['M', 'm']);
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_fck)
            .ok_or_else(|| CalcError::invalid_input("concrete_grade", s, "Not a standard concrete grade"))
    }

    /// Display name (e.g. "M25")
    pub fn display_name(&self) -> String {
        format!("M{}", self.fck())
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reinforcement grade by characteristic yield strength fy (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Mild steel
    Fe250,
    /// High-yield strength deformed bars
    Fe415,
    Fe500,
    Fe550,
}

impl SteelGrade {
    /// All steel grades in ascending strength order
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Fe250,
        SteelGrade::Fe415,
        SteelGrade::Fe500,
        SteelGrade::Fe550,
    ];

    /// Characteristic yield strength fy in N/mm²
    pub fn fy(&self) -> f64 {
        match self {
            SteelGrade::Fe250 => 250.0,
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
            SteelGrade::Fe550 => 550.0,
        }
    }

    /// Exact membership test: `Some` only when fy names a standard grade
    pub fn from_fy(fy: f64) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.fy() == fy)
    }

    /// Parse "Fe415", "fe415" or "415"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("Fe")
            .or_else(|| trimmed.strip_prefix("FE"))
            .or_else(|| trimmed.strip_prefix("fe"))
            .unwrap_or(trimmed);
        digits
            .parse::<f64>()
            .ok()
            .and_then(Self::from_fy)
            .ok_or_else(|| CalcError::invalid_input("steel_grade", s, "Not a standard steel grade"))
    }

    /// Mild steel bars are plain; the others are deformed
    pub fn is_mild_steel(&self) -> bool {
        matches!(self, SteelGrade::Fe250)
    }

    /// Display name (e.g. "Fe415")
    pub fn display_name(&self) -> String {
        format!("Fe{}", self.fy())
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_membership() {
        assert_eq!(ConcreteGrade::from_fck(25.0), Some(ConcreteGrade::M25));
        assert_eq!(ConcreteGrade::from_fck(80.0), Some(ConcreteGrade::M80));
        assert_eq!(ConcreteGrade::from_fck(22.0), None);
        assert_eq!(ConcreteGrade::from_fck(10.0), None);
        assert_eq!(ConcreteGrade::from_fck(85.0), None);
    }

    #[test]
    fn test_steel_membership() {
        assert_eq!(SteelGrade::from_fy(415.0), Some(SteelGrade::Fe415));
        assert_eq!(SteelGrade::from_fy(550.0), Some(SteelGrade::Fe550));
        assert_eq!(SteelGrade::from_fy(600.0), None);
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(ConcreteGrade::from_str_flexible("M30").unwrap(), ConcreteGrade::M30);
        assert_eq!(ConcreteGrade::from_str_flexible("35").unwrap(), ConcreteGrade::M35);
        assert!(ConcreteGrade::from_str_flexible("M33").is_err());
        assert_eq!(SteelGrade::from_str_flexible("Fe500").unwrap(), SteelGrade::Fe500);
        assert_eq!(SteelGrade::from_str_flexible("250").unwrap(), SteelGrade::Fe250);
        assert!(SteelGrade::from_str_flexible("Fe600").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ConcreteGrade::M25.to_string(), "M25");
        assert_eq!(SteelGrade::Fe415.to_string(), "Fe415");
    }
}
