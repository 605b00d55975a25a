use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::models::{LearningPath, Recommendation, StudentProfile};
use crate::profile;

pub fn build_report(
    student: &StudentProfile,
    generated_at: NaiveDateTime,
    recommendations: &[Recommendation<'_>],
    path: Option<&LearningPath>,
) -> String {
    let analysis = profile::analyze(student);
    let mut output = String::new();

    let _ = writeln!(output, "# Career Path Report");
    let _ = writeln!(
        output,
        "Generated for {} on {}",
        student.name,
        generated_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Profile");
    let _ = writeln!(output, "- Education: {}", student.education_level);
    let _ = writeln!(output, "- Skills: {}", join_or_none(&student.skills));
    let _ = writeln!(output, "- Interests: {}", join_or_none(&student.interests));
    if analysis.has_goals {
        let _ = writeln!(output, "- Goals: {}", student.goals);
    }
    let _ = writeln!(output, "- Profile completeness: {}%", analysis.completeness);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommended Careers");

    if recommendations.is_empty() {
        let _ = writeln!(output, "No careers matched this profile.");
    } else {
        for (rank, rec) in recommendations.iter().enumerate() {
            let _ = writeln!(
                output,
                "{}. {} ({}) overall {:.2}, similarity {:.3}, skill match {:.1}%, education fit {:.1}",
                rank + 1,
                rec.career.title,
                rec.career.industry,
                rec.overall_score,
                rec.similarity,
                rec.skill_match * 100.0,
                rec.education_compatibility
            );
            let _ = writeln!(
                output,
                "   - Growth {}, salary {}, requires {}",
                rec.career.growth_potential, rec.career.salary_range, rec.career.education_level
            );
            if !rec.missing_skills.is_empty() {
                let _ = writeln!(output, "   - Skills to learn: {}", rec.missing_skills.join(", "));
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Learning Path");

    match path {
        None => {
            let _ = writeln!(output, "No learning path available.");
        }
        Some(path) => write_path(&mut output, path),
    }

    output
}

pub fn render_path(path: &LearningPath) -> String {
    let mut output = String::new();
    write_path(&mut output, path);
    output
}

fn write_path(output: &mut String, path: &LearningPath) {
    let _ = writeln!(
        output,
        "Target: {} ({} months, current match {})",
        path.target_career,
        path.timeline_months,
        path.current_match_label()
    );

    if path.phases.is_empty() {
        let _ = writeln!(output, "All required skills are already covered.");
        return;
    }

    let _ = writeln!(output, "Skill gaps: {}", path.skill_gaps.join(", "));
    for phase in &path.phases {
        let _ = writeln!(output);
        let _ = writeln!(output, "### {} ({} weeks)", phase.name, phase.duration_weeks);
        let _ = writeln!(output, "- Skills: {}", phase.skills.join(", "));
        let _ = writeln!(output, "- Milestones: {}", phase.milestones.join(", "));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "### Resources");
    for (skill, resources) in &path.resources {
        let _ = writeln!(output, "- {}: {}", skill, resources.join(", "));
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Career, LearningPhase};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 2)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn student() -> StudentProfile {
        StudentProfile {
            id: Uuid::new_v4(),
            name: "Avery Lee".to_string(),
            education_level: "Bachelor".to_string(),
            skills: vec!["sql".to_string()],
            interests: vec![],
            goals: String::new(),
        }
    }

    fn analyst() -> Career {
        Career {
            id: "1".to_string(),
            title: "Data Analyst".to_string(),
            required_skills: vec!["sql".to_string(), "excel".to_string()],
            preferred_skills: vec![],
            industry: "Analytics".to_string(),
            growth_potential: "High".to_string(),
            salary_range: "$60k-$90k".to_string(),
            education_level: "Bachelor".to_string(),
        }
    }

    #[test]
    fn report_lists_recommendations_and_phases() {
        let career = analyst();
        let recs = vec![Recommendation {
            career: &career,
            similarity: 0.5,
            skill_match: 0.5,
            education_compatibility: 1.0,
            overall_score: 0.65,
            missing_skills: vec!["excel".to_string()],
        }];
        let mut resources = BTreeMap::new();
        resources.insert("excel".to_string(), vec!["Excel Easy".to_string()]);
        let path = LearningPath {
            target_career: "Data Analyst".to_string(),
            matched_required: 1,
            total_required: 2,
            skill_gaps: vec!["excel".to_string()],
            timeline_months: 12,
            phases: vec![LearningPhase {
                name: "Phase 1".to_string(),
                duration_weeks: 48,
                skills: vec!["excel".to_string()],
                milestones: vec!["Complete excel fundamentals".to_string()],
            }],
            resources,
        };

        let report = build_report(&student(), generated_at(), &recs, Some(&path));
        assert!(report.contains("Generated for Avery Lee on 2026-02-02 09:30"));
        assert!(report.contains("1. Data Analyst (Analytics) overall 0.65"));
        assert!(report.contains("skill match 50.0%"));
        assert!(report.contains("Skills to learn: excel"));
        assert!(report.contains("current match 1/2"));
        assert!(report.contains("### Phase 1 (48 weeks)"));
        assert!(report.contains("- excel: Excel Easy"));
        assert!(report.contains("Profile completeness: 40%"));
    }

    #[test]
    fn report_handles_missing_sections() {
        let report = build_report(&student(), generated_at(), &[], None);
        assert!(report.contains("No careers matched this profile."));
        assert!(report.contains("No learning path available."));
        assert!(report.contains("- Interests: none"));
    }
}
