use uuid::Uuid;

use crate::knowledge::{explanations, reference, NORMAL_ADVICE, NORMAL_MEANING};
use crate::models::{
    CategorySection, ClassifiedResult, Finding, FlagStatus, ReportAnalysis, TestCategory,
};

/// Standing guidance appended to every rendered report.
pub const WHEN_TO_SEE_A_DOCTOR: &str = "\
See your doctor immediately if you have very high LDL cholesterol \
(above 190 mg/dL), a very low platelet count (below 50,000), high blood \
sugar with symptoms such as extreme thirst or frequent urination, or \
strongly elevated liver enzymes. Schedule an appointment if any value is \
out of range, if several results are abnormal, or if you have symptoms \
like fatigue, weakness, shortness of breath, chest pain, or abdominal \
pain. Bring this report, a list of your current medications, and any \
previous results for comparison.";

/// Educational disclaimer appended to every rendered report.
pub const DISCLAIMER: &str = "\
This analysis is for educational purposes only and is not a medical \
diagnosis or medical advice. It compares laboratory values against \
reference ranges; it does not interpret them in the context of your \
medical history. Always consult a qualified healthcare professional for \
interpretation of your results, diagnosis, treatment, and personalized \
guidance.";

/// Group classified results into the fixed category layout and attach the
/// status-matched explanation text.
///
/// Categories appear in [`TestCategory::DISPLAY_ORDER`]; within a category
/// parameters follow the knowledge-table order, regardless of the order
/// they were extracted in. Parameters without a result are omitted.
pub fn compose(report_id: Uuid, results: &[ClassifiedResult]) -> ReportAnalysis {
    let mut sections = Vec::new();
    let mut urgent_findings = Vec::new();
    let mut total_findings = 0;

    for category in TestCategory::DISPLAY_ORDER {
        let mut findings = Vec::new();

        for entry in reference::parameters_in(category) {
            let Some(result) = results
                .iter()
                .find(|r| r.name.eq_ignore_ascii_case(entry.name))
            else {
                continue;
            };

            if result.critical {
                urgent_findings.push(urgent_line(result));
            }

            findings.push(build_finding(result));
            total_findings += 1;
        }

        if !findings.is_empty() {
            sections.push(CategorySection {
                category,
                title: category.title().to_string(),
                findings,
            });
        }
    }

    ReportAnalysis {
        report_id,
        analyzed_at: chrono::Local::now().naive_local(),
        sections,
        urgent_findings,
        total_findings,
    }
}

fn build_finding(result: &ClassifiedResult) -> Finding {
    let (what_it_is, meaning, advice) = match explanations::lookup(&result.name) {
        Some(entry) => match result.status {
            FlagStatus::Low => (entry.what_it_is, entry.low_meaning, entry.low_advice),
            FlagStatus::High => (entry.what_it_is, entry.high_meaning, entry.high_advice),
            FlagStatus::Normal => (entry.what_it_is, NORMAL_MEANING, NORMAL_ADVICE),
        },
        // Unreachable while the knowledge tables stay in sync; degrade to
        // the range comparison alone rather than dropping the finding.
        None => ("", NORMAL_MEANING, NORMAL_ADVICE),
    };

    Finding {
        result: result.clone(),
        what_it_is: what_it_is.to_string(),
        meaning: meaning.to_string(),
        advice: advice.to_string(),
    }
}

fn urgent_line(result: &ClassifiedResult) -> String {
    let direction = match result.status {
        FlagStatus::High => "critically high",
        FlagStatus::Low => "critically low",
        FlagStatus::Normal => "past a critical threshold",
    };
    format!(
        "{} is {} at {} - see your doctor immediately.",
        result.name,
        direction,
        result.display_value()
    )
}

/// Render an analysis as a markdown document for direct display.
pub fn render_markdown(analysis: &ReportAnalysis) -> String {
    let mut out = String::new();
    out.push_str("# Medical Report Analysis\n\n");

    if analysis.is_empty() {
        out.push_str("No recognized lab parameters were found in this report.\n\n");
        out.push_str("## Disclaimer\n\n");
        out.push_str(DISCLAIMER);
        out.push('\n');
        return out;
    }

    out.push_str("Below is a breakdown of each recognized test and what it means.\n");

    for section in &analysis.sections {
        out.push_str(&format!("\n## {}\n", section.title));

        for finding in &section.findings {
            let result = &finding.result;
            out.push_str(&format!(
                "\n### {}: {}\n",
                result.name.to_uppercase(),
                result.status.label()
            ));
            out.push_str(&format!("- Your value: {}\n", result.display_value()));
            out.push_str(&format!("- Reference range: {}\n", result.display_range()));
            out.push_str(&format!(
                "\nWhat it measures: {}.\n\n{}\n\nWhat to do: {}\n",
                finding.what_it_is, finding.meaning, finding.advice
            ));
        }
    }

    if !analysis.urgent_findings.is_empty() {
        out.push_str("\n## Urgent Findings\n\n");
        for line in &analysis.urgent_findings {
            out.push_str(&format!("- {line}\n"));
        }
    }

    out.push_str("\n## When to See a Doctor\n\n");
    out.push_str(WHEN_TO_SEE_A_DOCTOR);
    out.push_str("\n\n## Disclaimer\n\n");
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}
