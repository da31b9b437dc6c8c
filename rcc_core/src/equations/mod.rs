//! # Structural Equations
//!
//! Closed-form expressions shared by the rule modules and the orchestrator.
//! Keeping them here means every coefficient has one home and one test.
//!
//! ## Modules
//!
//! - [`demand`] - approximate design moment and shear from a uniform load
//! - [`section`] - bar areas, steel percentage, nominal shear stress
//!
//! ## Units
//!
//! - Loads in kN/m, spans in m, so moments come out in kN·m and shears in kN
//! - Section quantities in mm and mm²
//!
//! ## References
//!
//! - IS 456:2000 Clauses 22, 26, 38, 40
//! - SP 16 / SP 24 explanatory handbooks

pub mod demand;
pub mod section;

pub use demand::{continuous_moment, simply_supported_moment, simply_supported_shear};
pub use section::{bar_area, bars_area, nominal_shear_stress, steel_percentage};
