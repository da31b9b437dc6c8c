//! # rcc_core - Reinforced-Concrete Compliance Engine
//!
//! `rcc_core` checks reinforced-concrete members against the IS 456:2000 design
//! rules and the SP 34:1987 detailing rules. Every input and output is
//! JSON-serializable, so a member can be described in a file, evaluated, and
//! the outcome stored or rendered as a plain-text report.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Evaluations are pure functions of the request and settings
//! - **Collect, don't abort**: A failing check is a result, not an error
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every check cites the clause it applies
//!
//! ## Quick Start
//!
//! ```rust
//! use rcc_core::compliance::{evaluate, ComplianceRequest};
//! use rcc_core::loads::Loads;
//! use rcc_core::materials::Material;
//! use rcc_core::member::{Dimensions, ExposureCondition, MemberType};
//! use rcc_core::reinforcement::Reinforcement;
//! use rcc_core::settings::CheckSettings;
//!
//! let request = ComplianceRequest {
//!     member_type: MemberType::Beam,
//!     dimensions: Dimensions::new(5000.0, 300.0, 500.0, 450.0, 30.0),
//!     material: Material::new(25.0, 415.0),
//!     loads: Loads::new(15.0, 10.0),
//!     exposure: ExposureCondition::Moderate,
//!     reinforcement: Reinforcement::main(1256.0, 20.0),
//! };
//!
//! let outcome = evaluate(&request, &CheckSettings::default());
//! assert!(outcome.overall_compliance);
//! ```
//!
//! ## Modules
//!
//! - [`compliance`] - Staged IS 456 evaluation of a member
//! - [`detailing`] - SP 34 detailing checks per member type
//! - [`checks`] - Individual IS 456 clause checks
//! - [`equations`] - Demand and section formulas
//! - [`tables`] - Code tables (exposure, bond stress, τc, span/depth)
//! - [`report`] - Plain-text report rendering
//! - [`file_io`] - Request/settings loading and atomic outcome saves
//! - [`errors`] - Structured error types

pub mod checks;
pub mod clauses;
pub mod compliance;
pub mod detailing;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod member;
pub mod reinforcement;
pub mod report;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use checks::CheckResult;
pub use compliance::{evaluate, ComplianceOutcome, ComplianceRequest};
pub use detailing::{check_member_detailing, DetailingRequest, DetailingResults, MemberDetails};
pub use errors::{CalcError, CalcResult};
pub use materials::Material;
pub use member::{Dimensions, ExposureCondition, MemberType};
pub use settings::CheckSettings;
