use crate::models::{Candidate, EducationLevel, Recommendation};

pub const SIMILARITY_WEIGHT: f64 = 0.4;
pub const SKILL_MATCH_WEIGHT: f64 = 0.3;
pub const EDUCATION_WEIGHT: f64 = 0.3;

const EDUCATION_STEP_PENALTY: f64 = 0.2;
const EDUCATION_FLOOR: f64 = 0.1;

/// 1.0 when the student meets the required level, otherwise 0.2 less per
/// missing level, never below 0.1.
pub fn education_compatibility(student_level: &str, required_level: &str) -> f64 {
    let student = EducationLevel::rank(student_level);
    let required = EducationLevel::rank(required_level);

    if student >= required {
        return 1.0;
    }

    let gap = f64::from(required - student);
    (1.0 - gap * EDUCATION_STEP_PENALTY).max(EDUCATION_FLOOR)
}

pub fn overall_score(similarity: f64, skill_match: f64, education_compatibility: f64) -> f64 {
    SIMILARITY_WEIGHT * similarity
        + SKILL_MATCH_WEIGHT * skill_match
        + EDUCATION_WEIGHT * education_compatibility
}

pub fn blend<'a>(
    candidates: Vec<Candidate<'a>>,
    student_education: &str,
) -> Vec<Recommendation<'a>> {
    let mut recommendations: Vec<Recommendation<'a>> = candidates
        .into_iter()
        .map(|candidate| {
            let education_compatibility =
                education_compatibility(student_education, &candidate.career.education_level);
            Recommendation {
                career: candidate.career,
                similarity: candidate.similarity,
                skill_match: candidate.skill_match,
                education_compatibility,
                overall_score: overall_score(
                    candidate.similarity,
                    candidate.skill_match,
                    education_compatibility,
                ),
                missing_skills: candidate.missing_skills,
            }
        })
        .collect();

    rank(&mut recommendations);
    recommendations
}

/// Sorts by overall score, highest first. Equal scores keep their order.
pub fn rank(recommendations: &mut [Recommendation<'_>]) {
    recommendations.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Career;

    fn career(title: &str, education_level: &str) -> Career {
        Career {
            id: title.to_lowercase(),
            title: title.to_string(),
            required_skills: vec!["sql".to_string()],
            preferred_skills: vec![],
            industry: "analytics".to_string(),
            growth_potential: "High".to_string(),
            salary_range: "$60k-$90k".to_string(),
            education_level: education_level.to_string(),
        }
    }

    #[test]
    fn compatibility_matches_reference_points() {
        assert_eq!(education_compatibility("Master", "Bachelor"), 1.0);
        assert!((education_compatibility("Bachelor", "Master") - 0.8).abs() < 1e-9);
        assert!((education_compatibility("Associate", "Master") - 0.6).abs() < 1e-9);
        // Widest gap on the scale: four levels.
        assert!((education_compatibility("High School", "PhD") - 0.2).abs() < 1e-9);
    }

    #[test]
    fn compatibility_never_drops_below_floor() {
        // Unranked student against PhD: five levels, raw value 0.0.
        assert!((education_compatibility("", "PhD") - 0.1).abs() < 1e-9);
        for student in ["", "High School", "Associate", "Bachelor", "Master", "PhD"] {
            for required in ["", "High School", "Associate", "Bachelor", "Master", "PhD"] {
                let score = education_compatibility(student, required);
                assert!((0.1..=1.0).contains(&score), "{student} vs {required}: {score}");
            }
        }
    }

    #[test]
    fn unrecognized_levels_rank_lowest() {
        assert_eq!(education_compatibility("Bootcamp", "Unknown"), 1.0);
        assert_eq!(education_compatibility("PhD", "Bootcamp"), 1.0);
        assert!((education_compatibility("Bootcamp", "High School") - 0.8).abs() < 1e-9);
        assert!((education_compatibility("Bootcamp", "PhD") - 0.1).abs() < 1e-9);
    }

    #[test]
    fn overall_score_is_weighted_blend() {
        let score = overall_score(0.5, 1.0 / 3.0, 0.8);
        assert!((score - (0.2 + 0.1 + 0.24)).abs() < 1e-6);
        assert!((overall_score(1.0, 1.0, 1.0) - 1.0).abs() < 1e-9);
        assert_eq!(overall_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn blend_reorders_by_overall_score() {
        let phd_role = career("Research Scientist", "PhD");
        let bachelor_role = career("Data Analyst", "Bachelor");
        let candidates = vec![
            Candidate {
                career: &phd_role,
                similarity: 0.6,
                skill_match: 0.5,
                missing_skills: vec![],
            },
            Candidate {
                career: &bachelor_role,
                similarity: 0.5,
                skill_match: 0.5,
                missing_skills: vec![],
            },
        ];

        let ranked = blend(candidates, "Bachelor");
        assert_eq!(ranked[0].career.title, "Data Analyst");
        assert_eq!(ranked[0].education_compatibility, 1.0);
        assert!((ranked[1].education_compatibility - 0.6).abs() < 1e-9);

        for rec in &ranked {
            let expected =
                0.4 * rec.similarity + 0.3 * rec.skill_match + 0.3 * rec.education_compatibility;
            assert!((rec.overall_score - expected).abs() < 1e-6);
            assert!((0.0..=1.0).contains(&rec.overall_score));
        }
    }

    #[test]
    fn equal_scores_keep_prior_order() {
        let careers: Vec<Career> = ["First", "Second", "Third"]
            .iter()
            .map(|title| career(title, "Bachelor"))
            .collect();
        let candidates: Vec<Candidate<'_>> = careers
            .iter()
            .map(|career| Candidate {
                career,
                similarity: 0.3,
                skill_match: 0.0,
                missing_skills: vec![],
            })
            .collect();

        let mut ranked = blend(candidates, "Master");
        rank(&mut ranked);
        let titles: Vec<&str> = ranked.iter().map(|r| r.career.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn empty_input_blends_to_empty_output() {
        assert!(blend(Vec::new(), "Bachelor").is_empty());
    }
}
