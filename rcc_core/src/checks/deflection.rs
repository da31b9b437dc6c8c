//! Deflection control by span to effective depth ratio (IS 456 Clause 23.2)
//!
//! allowable = basic ratio × tension steel modification × long-span factor,
//! where the long-span factor is 10/span (span in m) beyond 10 m.

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::is456_ref;
use crate::errors::{nonzero, CalcResult};
use crate::member::SupportCondition;
use crate::tables::{basic_span_depth_ratio, tension_modification_factor};
use crate::units::{Meters, Millimeters};

/// Inputs to the span/depth check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanDepthInput {
    /// Effective span (mm)
    pub span: f64,
    /// Effective depth (mm)
    pub effective_depth: f64,
    pub support: SupportCondition,
    /// Tension steel provided (mm²)
    pub ast_provided: f64,
    /// Tension steel required by design (mm²)
    pub ast_required: f64,
    pub fy: f64,
}

/// Intermediate values of the check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionAnalysis {
    pub basic_ratio: f64,
    /// Steel stress at service fs = 0.58·fy·Areq/Aprov (N/mm²)
    pub service_stress: f64,
    pub modification_factor: f64,
    pub span_factor: f64,
    pub allowable_ratio: f64,
    pub actual_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    pub result: CheckResult,
    pub analysis: DeflectionAnalysis,
}

/// Reduction for spans beyond 10 m
pub fn long_span_factor(span: Meters) -> f64 {
    if span.0 > 10.0 {
        (10.0 / span.0).min(1.0)
    } else {
        1.0
    }
}

/// Compare the actual span/d with the modified allowable ratio
///
/// # Example
/// ```rust
/// use rcc_core::checks::deflection::{check_span_depth_ratio, SpanDepthInput};
/// use rcc_core::member::SupportCondition;
///
/// let check = check_span_depth_ratio(&SpanDepthInput {
///     span: 5000.0,
///     effective_depth: 450.0,
///     support: SupportCondition::SimplySupported,
///     ast_provided: 1256.0,
///     ast_required: 1004.8,
///     fy: 415.0,
/// })
/// .unwrap();
/// assert!(check.result.is_compliant);
/// assert_eq!(check.analysis.allowable_ratio, 30.0);
/// ```
pub fn check_span_depth_ratio(input: &SpanDepthInput) -> CalcResult<DeflectionCheck> {
    let basic_ratio = basic_span_depth_ratio(input.support);

    let ast_provided = nonzero("span/depth ratio", "provided steel area", input.ast_provided)?;
    let service_stress = 0.58 * input.fy * (input.ast_required / ast_provided);
    let modification_factor = tension_modification_factor(service_stress);

    let span_factor = long_span_factor(Meters::from(Millimeters(input.span)));

    let allowable_ratio = basic_ratio * modification_factor * span_factor;
    let actual_ratio = input.span / nonzero("span/depth ratio", "effective depth", input.effective_depth)?;

    let result = if actual_ratio > allowable_ratio {
        CheckResult::fail(
            is456_ref::DEFLECTION,
            format!(
                "Span to depth ratio {:.1} exceeds allowable {:.1}",
                actual_ratio, allowable_ratio
            ),
        )
    } else {
        CheckResult::pass(
            is456_ref::DEFLECTION,
            format!(
                "Span to depth ratio {:.1} is within allowable {:.1}",
                actual_ratio, allowable_ratio
            ),
        )
    }
    .with_values(actual_ratio, allowable_ratio);

    Ok(DeflectionCheck {
        result,
        analysis: DeflectionAnalysis {
            basic_ratio,
            service_stress,
            modification_factor,
            span_factor,
            allowable_ratio,
            actual_ratio,
        },
    })
}

/// Actual over allowable span/depth ratio
pub fn deflection_utilization(analysis: &DeflectionAnalysis) -> f64 {
    if analysis.allowable_ratio > 0.0 {
        analysis.actual_ratio / analysis.allowable_ratio
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(span: f64, d: f64, support: SupportCondition) -> SpanDepthInput {
        SpanDepthInput {
            span,
            effective_depth: d,
            support,
            ast_provided: 1000.0,
            ast_required: 800.0,
            fy: 415.0,
        }
    }

    #[test]
    fn test_reference_beam() {
        let check = check_span_depth_ratio(&input(5000.0, 450.0, SupportCondition::SimplySupported)).unwrap();
        assert!((check.analysis.service_stress - 192.56).abs() < 1e-9);
        assert_eq!(check.analysis.modification_factor, 1.5);
        assert_eq!(check.analysis.span_factor, 1.0);
        assert_eq!(
            check.result.description,
            "Span to depth ratio 11.1 is within allowable 30.0"
        );
    }

    #[test]
    fn test_cantilever_fails() {
        // 3000/250 = 12 > 7·1.5
        let check = check_span_depth_ratio(&input(3000.0, 250.0, SupportCondition::Cantilever)).unwrap();
        assert!(!check.result.is_compliant);
        assert_eq!(
            check.result.summary(),
            "Clause 23.2: Span to depth ratio 12.0 exceeds allowable 10.5"
        );
    }

    #[test]
    fn test_long_span_reduction() {
        assert_eq!(long_span_factor(Meters(10.0)), 1.0);
        assert_eq!(long_span_factor(Meters(12.5)), 0.8);
        let check = check_span_depth_ratio(&input(12500.0, 600.0, SupportCondition::Continuous)).unwrap();
        assert!((check.analysis.allowable_ratio - 26.0 * 1.5 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_steel_is_computation_failure() {
        let mut zero = input(5000.0, 450.0, SupportCondition::SimplySupported);
        zero.ast_provided = 0.0;
        let err = check_span_depth_ratio(&zero).unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_FAILURE");
    }
}
