//! Plain-text compliance reports
//!
//! Rendering is a pure function of the outcome. Empty sections are left out.

use std::fmt;

use crate::compliance::ComplianceOutcome;
use crate::detailing::DetailingResults;

const RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 50;

fn numbered_section(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}:", title)?;
    writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
    for (i, item) in items.iter().enumerate() {
        writeln!(f, "{}. {}", i + 1, item)?;
    }
    writeln!(f)
}

fn status(compliant: bool) -> &'static str {
    if compliant {
        "COMPLIANT"
    } else {
        "NOT COMPLIANT"
    }
}

// ============================================================================
// IS 456 Report
// ============================================================================

/// Display adapter for a [`ComplianceOutcome`]
pub struct ComplianceReport<'a>(pub &'a ComplianceOutcome);

impl fmt::Display for ComplianceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "IS 456:2000 COMPLIANCE REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        writeln!(f, "OVERALL STATUS: {}", status(outcome.overall_compliance))?;
        writeln!(f)?;

        numbered_section(f, "FAILED CHECKS", &outcome.failed_checks)?;
        numbered_section(f, "PASSED CHECKS", &outcome.passed_checks)?;

        if !outcome.utilization_ratios.is_empty() {
            writeln!(f, "UTILIZATION RATIOS:")?;
            writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
            for (aspect, ratio) in &outcome.utilization_ratios {
                writeln!(f, "{}: {:.3}", aspect.to_uppercase(), ratio)?;
            }
            writeln!(f)?;
        }

        numbered_section(f, "RECOMMENDATIONS", &outcome.recommendations)?;

        write!(f, "{}", rule)
    }
}

/// IS 456 report: status, failed, passed, utilization and recommendations
///
/// # Example
/// ```rust
/// use rcc_core::compliance::{evaluate, ComplianceRequest};
/// use rcc_core::loads::Loads;
/// use rcc_core::materials::Material;
/// use rcc_core::member::{Dimensions, ExposureCondition, MemberType};
/// use rcc_core::reinforcement::Reinforcement;
/// use rcc_core::report::compliance_report;
/// use rcc_core::settings::CheckSettings;
///
/// let request = ComplianceRequest {
///     member_type: MemberType::Beam,
///     dimensions: Dimensions::new(5000.0, 300.0, 500.0, 450.0, 25.0),
///     material: Material::new(25.0, 415.0),
///     loads: Loads::new(15.0, 10.0),
///     exposure: ExposureCondition::Moderate,
///     reinforcement: Reinforcement::main(1256.0, 20.0),
/// };
/// let text = compliance_report(&evaluate(&request, &CheckSettings::default()));
/// assert!(text.contains("OVERALL STATUS: NOT COMPLIANT"));
/// assert!(text.contains("FLEXURE: 0.681"));
/// ```
pub fn compliance_report(outcome: &ComplianceOutcome) -> String {
    ComplianceReport(outcome).to_string()
}

// ============================================================================
// SP 34 Report
// ============================================================================

/// Display adapter for [`DetailingResults`]
pub struct DetailingReport<'a>(pub &'a DetailingResults);

impl fmt::Display for DetailingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.0;
        let failed: Vec<_> = results.failed().collect();
        let passed: Vec<_> = results.passed().collect();

        writeln!(f, "SP 34:1987 DETAILING COMPLIANCE REPORT")?;
        writeln!(f, "{}", "=".repeat(37))?;
        writeln!(f)?;
        writeln!(f, "OVERALL STATUS: {}", status(failed.is_empty()))?;
        writeln!(f, "Total Checks: {}", results.len())?;
        writeln!(f, "Passed: {}", passed.len())?;
        writeln!(f, "Failed: {}", failed.len())?;
        writeln!(f)?;

        if !failed.is_empty() {
            writeln!(f, "FAILED CHECKS:")?;
            writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
            for check in &failed {
                let result = &check.result;
                writeln!(f, "• {}:", check.name.to_uppercase())?;
                writeln!(f, "  Issue: {}", result.description)?;
                writeln!(f, "  Reference: {}", result.clause_reference)?;
                match (result.actual_value, result.required_value) {
                    (Some(actual), Some(required)) => {
                        writeln!(f, "  Actual: {:.2}, Required: {:.2}", actual, required)?
                    }
                    (None, Some(required)) => writeln!(f, "  Required: {:.2}", required)?,
                    _ => {}
                }
                if let Some(remarks) = &result.remarks {
                    writeln!(f, "  Remarks: {}", remarks)?;
                }
                writeln!(f)?;
            }
        }

        if !passed.is_empty() {
            writeln!(f, "PASSED CHECKS:")?;
            writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
            for check in &passed {
                writeln!(f, "• {}: {}", check.name.to_uppercase(), check.result.description)?;
            }
        }

        Ok(())
    }
}

/// SP 34 report: totals, failed checks with their values, then passed checks
pub fn detailing_report(results: &DetailingResults) -> String {
    DetailingReport(results).to_string()
}
