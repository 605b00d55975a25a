use std::collections::HashMap;

use serde::Deserialize;

use crate::models::skill_key;

const DEFAULT_FALLBACK: [&str; 3] = ["Online tutorials", "Documentation", "Practice projects"];

const DEFAULT_TABLE: &[(&str, [&str; 3])] = &[
    ("python", ["Python.org tutorial", "Codecademy Python", "Real Python articles"]),
    ("machine_learning", ["Coursera ML course", "Fast.ai", "Kaggle tutorials"]),
    ("sql", ["SQLZoo", "Mode Analytics SQL tutorial", "LeetCode SQL problems"]),
    ("javascript", ["MDN JavaScript guide", "FreeCodeCamp JavaScript", "Eloquent JavaScript"]),
    ("aws", ["AWS Training", "AWS Whitepapers", "Cloud Guru courses"]),
    ("data_analysis", ["DataCamp", "Towards Data Science", "Kaggle notebooks"]),
    ("java", ["Oracle Java Tutorials", "Codecademy Java", "Java for Beginners"]),
    ("react", ["React Official Tutorial", "FreeCodeCamp React", "React Documentation"]),
    ("docker", ["Docker Getting Started", "Docker Documentation", "Docker Tutorials"]),
    ("kubernetes", ["Kubernetes Basics", "K8s Documentation", "Kubernetes Tutorials"]),
    ("statistics", ["Khan Academy Statistics", "Coursera Statistics", "StatQuest YouTube"]),
    ("tableau", ["Tableau Training", "Tableau Tutorials", "Tableau Public Gallery"]),
    ("excel", ["Microsoft Excel Help", "Excel Easy", "Chandoo Excel Tutorials"]),
];

/// `[resources]` section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceOverrides {
    #[serde(default)]
    pub fallback: Option<Vec<String>>,
    #[serde(default)]
    pub skills: HashMap<String, Vec<String>>,
}

/// Static skill → learning resource lookup.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    by_skill: HashMap<String, Vec<String>>,
    fallback: Vec<String>,
}

impl Default for ResourceTable {
    fn default() -> Self {
        let by_skill = DEFAULT_TABLE
            .iter()
            .map(|(skill, resources)| {
                (
                    skill_key(skill),
                    resources.iter().map(|r| r.to_string()).collect(),
                )
            })
            .collect();

        Self {
            by_skill,
            fallback: DEFAULT_FALLBACK.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl ResourceTable {
    pub fn with_overrides(mut self, overrides: ResourceOverrides) -> Self {
        if let Some(fallback) = overrides.fallback {
            self.fallback = fallback;
        }
        self.by_skill.extend(
            overrides
                .skills
                .into_iter()
                .map(|(skill, resources)| (skill_key(&skill), resources)),
        );
        self
    }

    /// Case-insensitive. Unknown skills get the generic fallback list.
    pub fn lookup(&self, skill: &str) -> &[String] {
        self.by_skill
            .get(&skill_key(skill))
            .map(Vec::as_slice)
            .unwrap_or(self.fallback.as_slice())
    }

    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }
}
