//! # Materials
//!
//! Concrete and reinforcement properties for limit-state design per IS 456:2000.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::materials::{Material, ConcreteGrade, SteelGrade};
//!
//! let m25 = Material::new(25.0, 415.0);
//! assert_eq!(m25.ec, 25000.0); // 5000 * sqrt(25)
//! assert_eq!(m25.concrete_grade(), Some(ConcreteGrade::M25));
//! assert_eq!(m25.steel_grade(), Some(SteelGrade::Fe415));
//! ```

pub mod grades;

pub use grades::{ConcreteGrade, SteelGrade};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Partial safety factor for concrete (IS 456 Clause 36.4.2)
pub const GAMMA_C: f64 = 1.5;

/// Partial safety factor for steel (IS 456 Clause 36.4.2)
pub const GAMMA_S: f64 = 1.15;

/// Modulus of elasticity of steel, N/mm² (IS 456 Clause 5.6.3)
pub const ES: f64 = 200_000.0;

/// Concrete and steel strengths plus derived moduli.
///
/// `fck` and `fy` are kept as raw numbers so that a drawing that specifies a
/// non-standard grade can still be evaluated and reported, rather than being
/// rejected at construction.
///
/// ## JSON Example
///
/// ```json
/// { "fck": 25.0, "fy": 415.0, "gamma_c": 1.5, "gamma_s": 1.15, "es": 200000.0, "ec": 25000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Characteristic compressive strength of concrete, N/mm²
    pub fck: f64,
    /// Characteristic yield strength of steel, N/mm²
    pub fy: f64,
    /// Partial safety factor for concrete
    #[serde(default = "default_gamma_c")]
    pub gamma_c: f64,
    /// Partial safety factor for steel
    #[serde(default = "default_gamma_s")]
    pub gamma_s: f64,
    /// Modulus of elasticity of steel, N/mm²
    #[serde(default = "default_es")]
    pub es: f64,
    /// Short-term modulus of concrete Ec = 5000·√fck (Clause 6.2.3.1), N/mm²
    #[serde(default)]
    pub ec: f64,
}

fn default_gamma_c() -> f64 {
    GAMMA_C
}

fn default_gamma_s() -> f64 {
    GAMMA_S
}

fn default_es() -> f64 {
    ES
}

impl Material {
    /// Create a material with the standard partial safety factors.
    pub fn new(fck: f64, fy: f64) -> Self {
        Material {
            fck,
            fy,
            gamma_c: GAMMA_C,
            gamma_s: GAMMA_S,
            es: ES,
            ec: concrete_modulus(fck),
        }
    }

    /// Create from standard grades
    pub fn from_grades(concrete: ConcreteGrade, steel: SteelGrade) -> Self {
        Self::new(concrete.fck(), steel.fy())
    }

    /// Recompute the derived concrete modulus.
    ///
    /// Deserialized records may omit `ec`; callers loading from JSON get it
    /// filled in through this.
    pub fn with_derived(mut self) -> Self {
        self.ec = concrete_modulus(self.fck);
        self
    }

    /// Validate that both strengths are strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fck.is_nan() || self.fck <= 0.0 {
            return Err(CalcError::invalid_input(
                "fck",
                self.fck.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if self.fy.is_nan() || self.fy <= 0.0 {
            return Err(CalcError::invalid_input(
                "fy",
                self.fy.to_string(),
                "Steel strength must be positive",
            ));
        }
        Ok(())
    }

    /// Standard concrete grade, if fck names one
    pub fn concrete_grade(&self) -> Option<ConcreteGrade> {
        ConcreteGrade::from_fck(self.fck)
    }

    /// Standard steel grade, if fy names one
    pub fn steel_grade(&self) -> Option<SteelGrade> {
        SteelGrade::from_fy(self.fy)
    }

    /// Design yield stress 0.87·fy (fy / 1.15 rounded as in the code)
    pub fn design_steel_stress(&self) -> f64 {
        0.87 * self.fy
    }

    /// Display name (e.g. "M25 / Fe415")
    pub fn display_name(&self) -> String {
        format!("M{} / Fe{}", self.fck, self.fy)
    }
}

fn concrete_modulus(fck: f64) -> f64 {
    if fck > 0.0 {
        5000.0 * fck.sqrt()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_modulus() {
        let mat = Material::new(25.0, 415.0);
        assert_eq!(mat.ec, 25000.0);
        assert_eq!(mat.gamma_c, 1.5);
        assert_eq!(mat.gamma_s, 1.15);
        assert_eq!(mat.es, 200_000.0);
    }

    #[test]
    fn test_validation() {
        assert!(Material::new(25.0, 415.0).validate().is_ok());
        assert!(Material::new(0.0, 415.0).validate().is_err());
        assert!(Material::new(25.0, -1.0).validate().is_err());
        // Non-standard but positive strengths are valid records
        assert!(Material::new(22.0, 460.0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{ "fck": 30.0, "fy": 500.0 }"#;
        let mat: Material = serde_json::from_str(json).unwrap();
        let mat = mat.with_derived();
        assert_eq!(mat.gamma_c, 1.5);
        assert!((mat.ec - 27386.13).abs() < 0.01);
        assert_eq!(mat.concrete_grade(), Some(ConcreteGrade::M30));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Material::new(25.0, 415.0).display_name(), "M25 / Fe415");
    }
}
