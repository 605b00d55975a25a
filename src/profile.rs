use std::collections::HashMap;
use std::path::Path;

use tracing::info;
use uuid::Uuid;

use crate::error::{RecommendError, Result};
use crate::models::{ProfileAnalysis, StudentProfile};

pub fn load_profile(path: &Path) -> Result<StudentProfile> {
    let raw = std::fs::read_to_string(path).map_err(|err| RecommendError::io(path, err))?;
    let profile: StudentProfile = serde_json::from_str(&raw)?;
    info!(student = %profile.name, path = %path.display(), "loaded student profile");
    Ok(profile)
}

/// Completeness out of 100: skills 40, interests 30, goals 30.
pub fn analyze(profile: &StudentProfile) -> ProfileAnalysis {
    let has_goals = !profile.goals.trim().is_empty();
    let mut completeness = 0u8;
    if !profile.skills.is_empty() {
        completeness += 40;
    }
    if !profile.interests.is_empty() {
        completeness += 30;
    }
    if has_goals {
        completeness += 30;
    }

    ProfileAnalysis {
        total_skills: profile.skills.len(),
        total_interests: profile.interests.len(),
        has_goals,
        completeness,
    }
}

/// In-memory owner of student profiles. The only place profile skills change.
#[derive(Debug, Default)]
pub struct ProfileManager {
    students: HashMap<Uuid, StudentProfile>,
}

impl ProfileManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_profile(
        &mut self,
        name: &str,
        education_level: &str,
        skills: Vec<String>,
        interests: Vec<String>,
        goals: &str,
    ) -> &StudentProfile {
        let profile = StudentProfile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            education_level: education_level.to_string(),
            skills,
            interests,
            goals: goals.to_string(),
        };
        self.insert(profile)
    }

    pub fn insert(&mut self, profile: StudentProfile) -> &StudentProfile {
        let id = profile.id;
        self.students.insert(id, profile);
        &self.students[&id]
    }

    pub fn get(&self, id: Uuid) -> Option<&StudentProfile> {
        self.students.get(&id)
    }

    /// Returns false when no profile has this id.
    pub fn replace_skills(&mut self, id: Uuid, skills: Vec<String>) -> bool {
        match self.students.get_mut(&id) {
            Some(profile) => {
                profile.skills = skills;
                true
            }
            None => false,
        }
    }

    /// Appends skills the profile does not already hold.
    pub fn add_skills(&mut self, id: Uuid, skills: &[String]) -> bool {
        let Some(profile) = self.students.get_mut(&id) else {
            return false;
        };

        for skill in skills {
            if !profile.has_skill(skill) {
                profile.skills.push(skill.clone());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn created_profile_is_retrievable() {
        let mut manager = ProfileManager::new();
        let id = manager
            .create_profile(
                "Jane Smith",
                "Master",
                strings(&["python", "machine_learning"]),
                strings(&["ai", "research"]),
                "Become an AI researcher",
            )
            .id;

        let student = manager.get(id).unwrap();
        assert_eq!(student.name, "Jane Smith");
        assert_eq!(student.skills.len(), 2);
        assert!(manager.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn replace_and_append_skills() {
        let mut manager = ProfileManager::new();
        let id = manager
            .create_profile("Test User", "Bachelor", strings(&["python"]), vec![], "Test")
            .id;

        assert!(manager.replace_skills(id, strings(&["python", "sql", "javascript"])));
        assert_eq!(manager.get(id).unwrap().skills.len(), 3);

        assert!(manager.add_skills(id, &strings(&["SQL", "docker"])));
        assert_eq!(
            manager.get(id).unwrap().skills,
            strings(&["python", "sql", "javascript", "docker"])
        );

        assert!(!manager.replace_skills(Uuid::new_v4(), vec![]));
        assert!(!manager.add_skills(Uuid::new_v4(), &[]));
    }

    #[test]
    fn completeness_weights() {
        let mut manager = ProfileManager::new();
        let full = manager
            .create_profile(
                "A",
                "Bachelor",
                strings(&["python", "sql"]),
                strings(&["data", "tech"]),
                "Goal",
            )
            .clone();
        let analysis = analyze(&full);
        assert_eq!(analysis.total_skills, 2);
        assert_eq!(analysis.total_interests, 2);
        assert!(analysis.has_goals);
        assert_eq!(analysis.completeness, 100);

        let skills_only = manager
            .create_profile("B", "Bachelor", strings(&["python"]), vec![], "   ")
            .clone();
        let analysis = analyze(&skills_only);
        assert!(!analysis.has_goals);
        assert_eq!(analysis.completeness, 40);
    }

    #[test]
    fn loads_profile_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name":"Kiara Patel","education_level":"Bachelor","skills":["sql"],"interests":["finance"],"goals":"Analyst"}}"#
        )
        .unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.name, "Kiara Patel");
        assert_eq!(profile.skills, vec!["sql"]);
    }

    #[test]
    fn invalid_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(load_profile(file.path()), Err(RecommendError::Json(_))));
    }
}
