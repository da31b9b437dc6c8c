//! # Member Description
//!
//! Member type, exposure class, support condition and overall geometry.
//! All lengths are millimetres.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::member::{Dimensions, ExposureCondition};
//!
//! let dims = Dimensions::new(5000.0, 300.0, 500.0, 450.0, 25.0);
//! assert!(dims.validate().is_ok());
//! assert_eq!(dims.span_m(), 5.0);
//! assert_eq!(ExposureCondition::Moderate.to_string(), "moderate");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Structural member categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    Beam,
    Slab,
    Column,
    Footing,
    Stair,
    Wall,
}

impl MemberType {
    /// All member types
    pub const ALL: [MemberType; 6] = [
        MemberType::Beam,
        MemberType::Slab,
        MemberType::Column,
        MemberType::Footing,
        MemberType::Stair,
        MemberType::Wall,
    ];

    /// Lower-case name used in messages and JSON
    pub fn name(&self) -> &'static str {
        match self {
            MemberType::Beam => "beam",
            MemberType::Slab => "slab",
            MemberType::Column => "column",
            MemberType::Footing => "footing",
            MemberType::Stair => "stair",
            MemberType::Wall => "wall",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "beam" | "b" => Ok(MemberType::Beam),
            "slab" | "s" => Ok(MemberType::Slab),
            "column" | "col" | "c" => Ok(MemberType::Column),
            "footing" | "f" => Ok(MemberType::Footing),
            "stair" | "staircase" => Ok(MemberType::Stair),
            "wall" | "w" => Ok(MemberType::Wall),
            _ => Err(CalcError::invalid_input("member_type", s, "Unknown member type")),
        }
    }
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Environmental exposure classes (IS 456 Clause 8.2.2.1, Table 3)
///
/// Declared in order of increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureCondition {
    Mild,
    Moderate,
    Severe,
    VerySevere,
    Extreme,
}

impl ExposureCondition {
    /// All exposures from mildest to most severe
    pub const ALL: [ExposureCondition; 5] = [
        ExposureCondition::Mild,
        ExposureCondition::Moderate,
        ExposureCondition::Severe,
        ExposureCondition::VerySevere,
        ExposureCondition::Extreme,
    ];

    /// Position in [`ExposureCondition::ALL`]; indexes the exposure tables
    pub fn index(&self) -> usize {
        match self {
            ExposureCondition::Mild => 0,
            ExposureCondition::Moderate => 1,
            ExposureCondition::Severe => 2,
            ExposureCondition::VerySevere => 3,
            ExposureCondition::Extreme => 4,
        }
    }

    /// Name used in messages ("very_severe")
    pub fn name(&self) -> &'static str {
        match self {
            ExposureCondition::Mild => "mild",
            ExposureCondition::Moderate => "moderate",
            ExposureCondition::Severe => "severe",
            ExposureCondition::VerySevere => "very_severe",
            ExposureCondition::Extreme => "extreme",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "mild" => Ok(ExposureCondition::Mild),
            "moderate" => Ok(ExposureCondition::Moderate),
            "severe" => Ok(ExposureCondition::Severe),
            "very_severe" | "verysevere" => Ok(ExposureCondition::VerySevere),
            "extreme" => Ok(ExposureCondition::Extreme),
            _ => Err(CalcError::invalid_input("exposure", s, "Unknown exposure condition")),
        }
    }
}

impl std::fmt::Display for ExposureCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// End restraint used to pick the basic span/effective-depth ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportCondition {
    Cantilever,
    #[default]
    SimplySupported,
    Continuous,
}

impl SupportCondition {
    /// Name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            SupportCondition::Cantilever => "cantilever",
            SupportCondition::SimplySupported => "simply_supported",
            SupportCondition::Continuous => "continuous",
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Selects the plain or reinforced column of the minimum-grade table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcreteType {
    Plain,
    #[default]
    Reinforced,
}

/// Overall member geometry.
///
/// For columns `width` and `depth` are the two lateral dimensions and
/// `length` is the unsupported height. For slabs `width` is the strip width
/// (usually 1000 mm) and `depth` the thickness.
///
/// ## JSON Example
///
/// ```json
/// { "length": 5000.0, "width": 300.0, "depth": 500.0, "effective_depth": 450.0, "cover": 25.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Span (or height) in mm
    pub length: f64,
    /// Width in mm
    pub width: f64,
    /// Overall depth D in mm
    pub depth: f64,
    /// Effective depth d in mm
    pub effective_depth: f64,
    /// Clear cover in mm
    pub cover: f64,
}

impl Dimensions {
    /// Create a geometry record
    pub fn new(length: f64, width: f64, depth: f64, effective_depth: f64, cover: f64) -> Self {
        Dimensions {
            length,
            width,
            depth,
            effective_depth,
            cover,
        }
    }

    /// Validate geometry invariants: d < D, cover ≥ 0, positive section.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length.is_nan() || self.length < 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "Length cannot be negative",
            ));
        }
        if self.width.is_nan() || self.width <= 0.0 {
            return Err(CalcError::invalid_input(
                "width",
                self.width.to_string(),
                "Width must be positive",
            ));
        }
        if self.effective_depth.is_nan() || self.effective_depth <= 0.0 {
            return Err(CalcError::invalid_input(
                "effective_depth",
                self.effective_depth.to_string(),
                "Effective depth must be positive",
            ));
        }
        if self.depth.is_nan() || self.effective_depth >= self.depth {
            return Err(CalcError::invalid_input(
                "effective_depth",
                self.effective_depth.to_string(),
                format!("Effective depth must be less than overall depth {}", self.depth),
            ));
        }
        if self.cover.is_nan() || self.cover < 0.0 {
            return Err(CalcError::invalid_input(
                "cover",
                self.cover.to_string(),
                "Cover cannot be negative",
            ));
        }
        Ok(())
    }

    /// Span in metres
    pub fn span_m(&self) -> f64 {
        Meters::from(Millimeters(self.length)).value()
    }

    /// Gross cross-sectional area b·D in mm²
    pub fn gross_area(&self) -> f64 {
        self.width * self.depth
    }

    /// Effective area b·d in mm²
    pub fn effective_area(&self) -> f64 {
        self.width * self.effective_depth
    }

    /// Least lateral dimension (columns)
    pub fn least_lateral_dimension(&self) -> f64 {
        self.width.min(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_order() {
        for pair in ExposureCondition::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].index() + 1, pair[1].index());
        }
    }

    #[test]
    fn test_exposure_parsing() {
        assert_eq!(
            ExposureCondition::from_str_flexible("Very Severe").unwrap(),
            ExposureCondition::VerySevere
        );
        assert_eq!(
            ExposureCondition::from_str_flexible("very-severe").unwrap(),
            ExposureCondition::VerySevere
        );
        assert!(ExposureCondition::from_str_flexible("tidal").is_err());
    }

    #[test]
    fn test_member_type_serialization() {
        let json = serde_json::to_string(&MemberType::Footing).unwrap();
        assert_eq!(json, "\"footing\"");
        let parsed: MemberType = serde_json::from_str("\"stair\"").unwrap();
        assert_eq!(parsed, MemberType::Stair);
        assert_eq!(MemberType::from_str_flexible("Col").unwrap(), MemberType::Column);
    }

    #[test]
    fn test_dimension_invariants() {
        assert!(Dimensions::new(5000.0, 300.0, 500.0, 450.0, 25.0).validate().is_ok());
        // d must be strictly less than D
        assert!(Dimensions::new(5000.0, 300.0, 450.0, 450.0, 25.0).validate().is_err());
        assert!(Dimensions::new(5000.0, 300.0, 500.0, 450.0, -1.0).validate().is_err());
        assert!(Dimensions::new(5000.0, 0.0, 500.0, 450.0, 25.0).validate().is_err());
        assert!(Dimensions::new(-1.0, 300.0, 500.0, 450.0, 25.0).validate().is_err());
    }

    #[test]
    fn test_section_helpers() {
        let col = Dimensions::new(3000.0, 400.0, 450.0, 400.0, 40.0);
        assert_eq!(col.gross_area(), 180_000.0);
        assert_eq!(col.effective_area(), 160_000.0);
        assert_eq!(col.least_lateral_dimension(), 400.0);
        assert_eq!(col.span_m(), 3.0);
    }
}
