//! # IS 456:2000 Rule Modules
//!
//! Stateless check functions grouped by concern. Each returns a
//! [`CheckResult`]; a rule violation is a failing result, never an `Err`.
//! `Err(CalcError)` is reserved for inputs that make a check impossible to
//! evaluate (a zero divisor, for instance).
//!
//! ## Modules
//!
//! - [`material`] - grade membership and minimum grade by exposure
//! - [`durability`] - nominal cover, cement content and w/c advisory
//! - [`flexure`] - steel limits and limit-state moment capacity
//! - [`shear`] - design shear strength and nominal stress classification
//! - [`deflection`] - span to effective depth control
//! - [`spacing`] - bar spacing limits and spacing estimate
//! - [`development`] - development length
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::checks::durability::check_cover;
//! use rcc_core::member::ExposureCondition;
//!
//! let result = check_cover(25.0, ExposureCondition::Moderate, 20.0);
//! assert!(!result.is_compliant);
//! assert_eq!(result.required_value, Some(30.0));
//! ```

pub mod deflection;
pub mod development;
pub mod durability;
pub mod flexure;
pub mod material;
pub mod shear;
pub mod spacing;

use serde::{Deserialize, Serialize};

/// Outcome of a single code provision
///
/// ## JSON Example
///
/// ```json
/// {
///   "is_compliant": false,
///   "clause_reference": "Clause 26.4.2",
///   "description": "Minimum cover required is 30mm for moderate exposure, provided 25mm",
///   "actual_value": 25.0,
///   "required_value": 30.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the provision is satisfied
    pub is_compliant: bool,

    /// Clause, table or section of the governing standard
    pub clause_reference: String,

    /// Human-readable outcome
    pub description: String,

    /// Value found in the member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<f64>,

    /// Limit the value was compared with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_value: Option<f64>,

    /// Extra guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl CheckResult {
    fn new(is_compliant: bool, clause_reference: impl Into<String>, description: impl Into<String>) -> Self {
        CheckResult {
            is_compliant,
            clause_reference: clause_reference.into(),
            description: description.into(),
            actual_value: None,
            required_value: None,
            remarks: None,
        }
    }

    /// A satisfied provision
    pub fn pass(clause_reference: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(true, clause_reference, description)
    }

    /// A violated provision
    pub fn fail(clause_reference: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(false, clause_reference, description)
    }

    /// Attach both the actual and the required value
    pub fn with_values(mut self, actual: f64, required: f64) -> Self {
        self.actual_value = Some(actual);
        self.required_value = Some(required);
        self
    }

    /// Attach only the required value (nothing was provided to measure)
    pub fn with_required(mut self, required: f64) -> Self {
        self.required_value = Some(required);
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// One-line form used in the compliance report.
    ///
    /// Failures lead with their clause so the reader can look it up;
    /// passes read as plain statements.
    pub fn summary(&self) -> String {
        if self.is_compliant {
            self.description.clone()
        } else {
            format!("{}: {}", self.clause_reference, self.description)
        }
    }
}

/// Render a list of numbers the way the grade messages show them: `[15, 20, 25]`
pub(crate) fn format_list(values: impl IntoIterator<Item = f64>) -> String {
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prefixes_failures() {
        let fail = CheckResult::fail("Clause 26.4.2", "Cover too small");
        assert_eq!(fail.summary(), "Clause 26.4.2: Cover too small");
        let pass = CheckResult::pass("Clause 26.4.2", "Cover adequate");
        assert_eq!(pass.summary(), "Cover adequate");
    }

    #[test]
    fn test_optional_fields_skipped() {
        let json = serde_json::to_string(&CheckResult::pass("X", "ok")).unwrap();
        assert!(!json.contains("actual_value"));
        assert!(!json.contains("remarks"));

        let full = CheckResult::fail("X", "bad").with_values(1.0, 2.0).with_remarks("fix it");
        let roundtrip: CheckResult = serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
        assert_eq!(full, roundtrip);
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list([250.0, 415.0]), "[250, 415]");
    }
}
