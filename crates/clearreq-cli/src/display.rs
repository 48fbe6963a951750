//! Vertical card display for analysis reports.
//!
//! A summary card for the document, then one block per requirement with
//! its suggestion split into separate advice lines. The review section
//! (ambiguity patterns and recommendations) follows the report.

use std::fmt::Write;

use clearreq_ai::{AmbiguityPattern, Recommendation};
use clearreq_core::lexicon::SUGGESTION_SEPARATOR;
use clearreq_core::{AnalysisReport, Requirement};

/// Print a report as a summary card followed by per-requirement blocks.
pub fn print_report(report: &AnalysisReport) -> anyhow::Result<()> {
    let mut out = String::new();
    render_report(&mut out, report)?;
    print!("{out}");
    Ok(())
}

pub fn render_report(out: &mut impl Write, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "=== {} ===", report.filename)?;
    writeln!(out, "{}", report.timestamp)?;
    writeln!(out)?;

    let s = &report.summary;
    writeln!(out, "Summary")?;
    writeln!(out, "  {:<26} {}", "total", s.total)?;
    writeln!(out, "  {:<26} {}", "functional", s.functional)?;
    writeln!(out, "  {:<26} {}", "non-functional", s.non_functional)?;
    writeln!(out, "  {:<26} {}", "ambiguities", s.ambiguities)?;
    writeln!(out)?;

    for req in &report.requirements {
        render_requirement(out, req)?;
    }
    Ok(())
}

fn render_requirement(out: &mut impl Write, req: &Requirement) -> std::fmt::Result {
    writeln!(out, "{}", req.id)?;
    writeln!(out, "  {:<26} {}", "text", req.text)?;
    writeln!(out, "  {:<26} {}", "type", req.kind)?;
    writeln!(out, "  {:<26} {}%", "confidence", req.confidence)?;
    let marker = if req.ambiguity.is_flagged() { " (!)" } else { "" };
    writeln!(out, "  {:<26} {}{}", "ambiguity", req.ambiguity, marker)?;
    writeln!(out, "  suggestions:")?;
    for part in req.suggestion.split(SUGGESTION_SEPARATOR) {
        writeln!(out, "    - {part}")?;
    }
    writeln!(out)
}

/// Print the document review below a report.
pub fn print_review(
    patterns: &[AmbiguityPattern],
    recommendations: &[Recommendation],
) -> anyhow::Result<()> {
    let mut out = String::new();
    render_review(&mut out, patterns, recommendations)?;
    print!("{out}");
    Ok(())
}

pub fn render_review(
    out: &mut impl Write,
    patterns: &[AmbiguityPattern],
    recommendations: &[Recommendation],
) -> std::fmt::Result {
    writeln!(out, "Ambiguity patterns")?;
    if patterns.is_empty() {
        writeln!(out, "  none")?;
    }
    for pattern in patterns {
        writeln!(out, "  {} ({})", pattern.requirement_id, pattern.ambiguity)?;
        let terms = if pattern.ambiguous_terms.is_empty() {
            "-".to_string()
        } else {
            pattern.ambiguous_terms.join(", ")
        };
        writeln!(out, "    {:<24} {}", "terms", terms)?;
        for part in pattern.suggestion.split(SUGGESTION_SEPARATOR) {
            writeln!(out, "    - {part}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Recommendations")?;
    if recommendations.is_empty() {
        writeln!(out, "  none")?;
    }
    for rec in recommendations {
        writeln!(out, "  [{}/{}] {}", rec.category.as_str(), rec.priority.as_str(), rec.title)?;
        writeln!(out, "    {}", rec.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearreq_core::{AmbiguityLevel, RequirementId, RequirementType};

    fn report() -> AnalysisReport {
        AnalysisReport {
            summary: clearreq_core::Summary {
                total: 1,
                functional: 0,
                non_functional: 0,
                ambiguities: 1,
            },
            requirements: vec![Requirement {
                id: RequirementId::new(1),
                text: "It must be fast".into(),
                kind: RequirementType::Ambiguous,
                confidence: 50,
                ambiguity: AmbiguityLevel::Medium,
                suggestion: "'fast': Define a response time | Add error handling.".into(),
            }],
            ambiguities: Vec::new(),
            filename: "reqs.txt".into(),
            timestamp: "2026-03-04T05:06:07.000Z".into(),
        }
    }

    #[test]
    fn renders_summary_and_blocks() {
        let mut out = String::new();
        render_report(&mut out, &report()).unwrap();

        assert!(out.starts_with("=== reqs.txt ===\n2026-03-04T05:06:07.000Z\n"));
        assert!(out.contains(&format!("  {:<26} {}\n", "ambiguities", 1)));
        assert!(out.contains("REQ-001\n"));
        assert!(out.contains(&format!("  {:<26} {}\n", "type", "Ambiguous")));
        assert!(out.contains(&format!("  {:<26} {}\n", "ambiguity", "Medium (!)")));
        assert!(out.contains("    - 'fast': Define a response time\n"));
        assert!(out.contains("    - Add error handling.\n"));
    }

    #[test]
    fn renders_patterns_and_recommendations() {
        let patterns = vec![AmbiguityPattern {
            requirement_id: RequirementId::new(2),
            text: "The UI must be intuitive and user-friendly".into(),
            ambiguity: AmbiguityLevel::High,
            ambiguous_terms: vec!["user-friendly", "intuitive"],
            suggestion: "'user-friendly': Define usability criteria | Include testable conditions."
                .into(),
        }];
        let recommendations =
            clearreq_ai::recommendations::improvement_recommendations(&report().requirements);

        let mut out = String::new();
        render_review(&mut out, &patterns, &recommendations).unwrap();

        assert!(out.starts_with("Ambiguity patterns\n  REQ-002 (High)\n"));
        assert!(out.contains(&format!("    {:<24} {}\n", "terms", "user-friendly, intuitive")));
        assert!(out.contains("    - Include testable conditions.\n"));
        // One Ambiguous, Medium requirement: only the completeness note applies.
        assert!(out.ends_with(
            "Recommendations\n  [Completeness/Medium] Consider adding more requirements\n    \
             Your document has relatively few requirements. \
             Consider if all system aspects are covered.\n"
        ));
    }

    #[test]
    fn empty_review_says_none() {
        let mut out = String::new();
        render_review(&mut out, &[], &[]).unwrap();
        assert_eq!(out, "Ambiguity patterns\n  none\n\nRecommendations\n  none\n");
    }
}
