//! # Reinforcement
//!
//! Two views of the same steel:
//!
//! - [`Reinforcement`]: aggregate areas and representative diameters, which is
//!   what the IS 456 design checks consume.
//! - [`ReinforcementBar`]: one group of identical bars as drawn, which is what
//!   the SP 34 detailing checks walk over.
//!
//! Also home to the small closed sets that qualify a bar's stress state and
//! end anchorage.

use serde::{Deserialize, Serialize};

use crate::equations::section::bars_area;
use crate::errors::{CalcError, CalcResult};

/// Aggregate reinforcement of a member
///
/// ## JSON Example
///
/// ```json
/// { "main_steel_area": 1256.0, "main_bar_dia": 20.0, "stirrup_dia": 8.0, "stirrup_spacing": 150.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reinforcement {
    /// Main tension steel Ast (mm²)
    #[serde(default)]
    pub main_steel_area: f64,
    /// Distribution steel (mm²)
    #[serde(default)]
    pub distribution_steel_area: f64,
    /// Shear steel per stirrup set (mm²)
    #[serde(default)]
    pub shear_steel_area: f64,
    /// Main bar diameter (mm)
    #[serde(default)]
    pub main_bar_dia: f64,
    /// Distribution bar diameter (mm)
    #[serde(default)]
    pub distribution_bar_dia: f64,
    /// Stirrup diameter (mm)
    #[serde(default)]
    pub stirrup_dia: f64,
    /// Stirrup spacing (mm)
    #[serde(default)]
    pub stirrup_spacing: f64,
    /// Steel area required by design (mm²); drives the deflection modification factor
    #[serde(default)]
    pub required_steel_area: Option<f64>,
    /// Deformed (HYSD) bars; plain mild-steel bars when false
    #[serde(default = "default_deformed")]
    pub deformed: bool,
}

fn default_deformed() -> bool {
    true
}

impl Default for Reinforcement {
    fn default() -> Self {
        Reinforcement {
            main_steel_area: 0.0,
            distribution_steel_area: 0.0,
            shear_steel_area: 0.0,
            main_bar_dia: 0.0,
            distribution_bar_dia: 0.0,
            stirrup_dia: 0.0,
            stirrup_spacing: 0.0,
            required_steel_area: None,
            deformed: true,
        }
    }
}

impl Reinforcement {
    /// Main steel only
    pub fn main(area: f64, bar_dia: f64) -> Self {
        Reinforcement {
            main_steel_area: area,
            main_bar_dia: bar_dia,
            ..Default::default()
        }
    }

    /// Reject negative areas and diameters
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("main_steel_area", self.main_steel_area),
            ("distribution_steel_area", self.distribution_steel_area),
            ("shear_steel_area", self.shear_steel_area),
            ("main_bar_dia", self.main_bar_dia),
            ("distribution_bar_dia", self.distribution_bar_dia),
            ("stirrup_dia", self.stirrup_dia),
            ("stirrup_spacing", self.stirrup_spacing),
            ("required_steel_area", self.required_steel_area.unwrap_or(0.0)),
        ];
        for (field, value) in fields {
            if value.is_nan() || value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
            }
        }
        Ok(())
    }
}

/// Where a bar group sits in the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarPosition {
    #[default]
    Bottom,
    Top,
    Side,
    Longitudinal,
}

/// A group of identical bars as detailed on a drawing
///
/// ## JSON Example
///
/// ```json
/// { "diameter": 20.0, "count": 4, "spacing": 75.0, "length": 6000.0, "deformed": true, "position": "bottom" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementBar {
    /// Bar diameter φ (mm)
    pub diameter: f64,
    /// Number of bars in the group
    pub count: u32,
    /// Centre-to-centre spacing (mm)
    pub spacing: f64,
    /// Bar length (mm)
    pub length: f64,
    #[serde(default = "default_deformed")]
    pub deformed: bool,
    #[serde(default)]
    pub position: BarPosition,
}

impl ReinforcementBar {
    /// Deformed bar group at the given position
    pub fn new(diameter: f64, count: u32, spacing: f64, length: f64, position: BarPosition) -> Self {
        ReinforcementBar {
            diameter,
            count,
            spacing,
            length,
            deformed: true,
            position,
        }
    }

    /// Total steel area of the group, count·π·φ²/4
    pub fn area(&self) -> f64 {
        bars_area(self.diameter, self.count)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.diameter.is_nan() || self.diameter <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter",
                self.diameter.to_string(),
                "Bar diameter must be positive",
            ));
        }
        if self.spacing.is_nan() || self.spacing < 0.0 {
            return Err(CalcError::invalid_input(
                "spacing",
                self.spacing.to_string(),
                "Spacing cannot be negative",
            ));
        }
        if self.length.is_nan() || self.length < 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "Length cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Total area of a bar list
pub fn total_area(bars: &[ReinforcementBar]) -> f64 {
    bars.iter().map(ReinforcementBar::area).sum()
}

/// Total area of the bars at one position
pub fn area_at(bars: &[ReinforcementBar], position: BarPosition) -> f64 {
    bars.iter().filter(|b| b.position == position).map(ReinforcementBar::area).sum()
}

/// Stress state of a bar being anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressCondition {
    #[default]
    Tension,
    Compression,
}

/// End anchorage device (SP 34 Table 4.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HookType {
    /// Standard U-type hook
    UHook,
    /// Bend made of `bends_45` successive 45° increments (2 = a 90° bend)
    Bend { bends_45: u32 },
}

impl HookType {
    /// A standard 90° bend
    pub const BEND_90: HookType = HookType::Bend { bends_45: 2 };
}

/// Lap splice loading (SP 34 Section 4.4.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpliceType {
    #[default]
    FlexuralTension,
    DirectTension,
    Compression,
}

impl std::fmt::Display for SpliceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpliceType::FlexuralTension => "flexural tension",
            SpliceType::DirectTension => "direct tension",
            SpliceType::Compression => "compression",
        };
        write!(f, "{}", name)
    }
}
