use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub industry: String,
    pub growth_potential: String,
    pub salary_range: String,
    pub education_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub education_level: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: String,
}

impl StudentProfile {
    pub fn has_skill(&self, skill: &str) -> bool {
        let key = skill_key(skill);
        self.skills.iter().any(|owned| skill_key(owned) == key)
    }
}

/// Ordinal education scale. Unrecognized labels rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EducationLevel {
    HighSchool = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    PhD = 5,
}

impl EducationLevel {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "high school" => Some(Self::HighSchool),
            "associate" => Some(Self::Associate),
            "bachelor" => Some(Self::Bachelor),
            "master" => Some(Self::Master),
            "phd" => Some(Self::PhD),
            _ => None,
        }
    }

    pub fn rank(label: &str) -> u8 {
        Self::parse(label).map_or(0, |level| level as u8)
    }
}

/// Output of the similarity engine, before education is taken into account.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub career: &'a Career,
    pub similarity: f64,
    pub skill_match: f64,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub career: &'a Career,
    pub similarity: f64,
    pub skill_match: f64,
    pub education_compatibility: f64,
    pub overall_score: f64,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPhase {
    pub name: String,
    pub duration_weeks: u32,
    pub skills: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPath {
    pub target_career: String,
    pub matched_required: usize,
    pub total_required: usize,
    pub skill_gaps: Vec<String>,
    pub timeline_months: u32,
    pub phases: Vec<LearningPhase>,
    pub resources: BTreeMap<String, Vec<String>>,
}

impl LearningPath {
    pub fn current_match_label(&self) -> String {
        format!("{}/{}", self.matched_required, self.total_required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileAnalysis {
    pub total_skills: usize,
    pub total_interests: usize,
    pub has_goals: bool,
    pub completeness: u8,
}

/// Comparison key for literal skill matching.
pub fn skill_key(skill: &str) -> String {
    skill.trim().to_lowercase()
}
