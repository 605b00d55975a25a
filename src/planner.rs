//! Skill-gap learning paths.
//!
//! Gaps are the career's required skills the student lacks, in required
//! order. They are sliced left to right into phases of
//! `max(1, gaps / 3)` skills; every phase gets the same duration, derived
//! from the total timeframe and the number of phases produced.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::CareerCatalog;
use crate::models::{Career, LearningPath, LearningPhase, StudentProfile};
use crate::resources::ResourceTable;

pub const DEFAULT_TIMEFRAME_MONTHS: u32 = 12;
const TARGET_PHASE_COUNT: usize = 3;
const WEEKS_PER_MONTH: u32 = 4;

/// Returns `None` when `career_title` is not in the catalog.
pub fn generate_path(
    catalog: &CareerCatalog,
    resources: &ResourceTable,
    student: &StudentProfile,
    career_title: &str,
    timeframe_months: u32,
) -> Option<LearningPath> {
    let Some(career) = catalog.find_by_title(career_title) else {
        warn!(career = career_title, "career not found in catalog");
        return None;
    };

    Some(path_for_career(resources, student, career, timeframe_months))
}

pub fn path_for_career(
    resources: &ResourceTable,
    student: &StudentProfile,
    career: &Career,
    timeframe_months: u32,
) -> LearningPath {
    let skill_gaps = skill_gaps(student, career);
    let phases = partition_phases(&skill_gaps, timeframe_months);

    let resources: BTreeMap<String, Vec<String>> = skill_gaps
        .iter()
        .map(|skill| (skill.clone(), resources.lookup(skill).to_vec()))
        .collect();

    debug!(
        career = %career.title,
        gaps = skill_gaps.len(),
        phases = phases.len(),
        "generated learning path"
    );

    LearningPath {
        target_career: career.title.clone(),
        matched_required: career.required_skills.len() - skill_gaps.len(),
        total_required: career.required_skills.len(),
        skill_gaps,
        timeline_months: timeframe_months,
        phases,
        resources,
    }
}

pub fn skill_gaps(student: &StudentProfile, career: &Career) -> Vec<String> {
    career
        .required_skills
        .iter()
        .filter(|skill| !student.has_skill(skill))
        .cloned()
        .collect()
}

pub fn phase_size(gap_count: usize) -> usize {
    (gap_count / TARGET_PHASE_COUNT).max(1)
}

pub fn partition_phases(skill_gaps: &[String], timeframe_months: u32) -> Vec<LearningPhase> {
    if skill_gaps.is_empty() {
        return Vec::new();
    }

    let chunks: Vec<&[String]> = skill_gaps.chunks(phase_size(skill_gaps.len())).collect();
    let phase_count = u32::try_from(chunks.len()).unwrap_or(u32::MAX);
    let duration_weeks = (timeframe_months / phase_count).max(1) * WEEKS_PER_MONTH;

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, skills)| LearningPhase {
            name: format!("Phase {}", index + 1),
            duration_weeks,
            skills: skills.to_vec(),
            milestones: skills
                .iter()
                .map(|skill| format!("Complete {skill} fundamentals"))
                .collect(),
        })
        .collect()
}
