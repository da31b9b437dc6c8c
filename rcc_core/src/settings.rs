//! # Check Settings
//!
//! Knobs that apply to a whole evaluation rather than to one member record.
//! Every field has a default, so a settings file only names what it changes.
//!
//! ## TOML Example
//!
//! ```toml
//! support_condition = "continuous"
//! aggregate_size_mm = 10.0
//! spacing_ruleset = "sp34"
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::member::{ConcreteType, SupportCondition};

/// Which maximum bar spacing cap applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingRuleset {
    /// IS 456 general cap of 300 mm
    #[default]
    Is456,
    /// SP 34 handbook cap of 450 mm
    Sp34,
}

impl SpacingRuleset {
    /// Absolute maximum bar spacing (mm)
    pub fn max_spacing(&self) -> f64 {
        match self {
            SpacingRuleset::Is456 => 300.0,
            SpacingRuleset::Sp34 => 450.0,
        }
    }
}

/// Evaluation-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Support condition for the span/depth basic ratio
    pub support_condition: SupportCondition,

    /// Nominal maximum aggregate size (mm) for minimum bar spacing
    pub aggregate_size_mm: f64,

    pub spacing_ruleset: SpacingRuleset,

    /// Ast,required / Ast,provided assumed when a request gives no required steel
    pub required_steel_ratio: f64,

    /// Plain or reinforced column of the minimum-grade table
    pub concrete_type: ConcreteType,
}

impl Default for CheckSettings {
    fn default() -> Self {
        CheckSettings {
            support_condition: SupportCondition::SimplySupported,
            aggregate_size_mm: 20.0,
            spacing_ruleset: SpacingRuleset::Is456,
            required_steel_ratio: 0.8,
            concrete_type: ConcreteType::Reinforced,
        }
    }
}

impl CheckSettings {
    /// Reject settings no evaluation could use
    pub fn validate(&self) -> CalcResult<()> {
        if self.aggregate_size_mm.is_nan() || self.aggregate_size_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "aggregate_size_mm",
                self.aggregate_size_mm.to_string(),
                "Aggregate size must be positive",
            ));
        }
        if self.required_steel_ratio.is_nan() || self.required_steel_ratio < 0.0 {
            return Err(CalcError::invalid_input(
                "required_steel_ratio",
                self.required_steel_ratio.to_string(),
                "Required steel ratio cannot be negative",
            ));
        }
        Ok(())
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: CheckSettings =
            toml::from_str(text).map_err(|e| CalcError::serialization(format!("Invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }
}
