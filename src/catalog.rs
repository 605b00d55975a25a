use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{RecommendError, Result};
use crate::models::{skill_key, Career};

#[derive(Deserialize)]
struct CsvRow {
    career_id: String,
    career_title: String,
    required_skills: String,
    #[serde(default)]
    preferred_skills: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    growth_potential: String,
    #[serde(default)]
    salary_range: String,
    #[serde(default)]
    education_level: String,
}

impl From<CsvRow> for Career {
    fn from(row: CsvRow) -> Self {
        Career {
            id: row.career_id.trim().to_string(),
            title: row.career_title.trim().to_string(),
            required_skills: split_skills(&row.required_skills),
            preferred_skills: split_skills(&row.preferred_skills),
            industry: row.industry.trim().to_string(),
            growth_potential: row.growth_potential.trim().to_string(),
            salary_range: row.salary_range.trim().to_string(),
            education_level: row.education_level.trim().to_string(),
        }
    }
}

/// Read-only career catalog. Insertion order is preserved and used as the
/// tie-break order everywhere.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<Career>) -> Self {
        Self { careers }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| RecommendError::io(path, err))?;
        let catalog = Self::from_csv_reader(file)?;
        info!(careers = catalog.len(), path = %path.display(), "loaded career catalog");
        Ok(catalog)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let mut careers = Vec::new();

        for result in reader.deserialize::<CsvRow>() {
            careers.push(Career::from(result?));
        }

        Ok(Self { careers })
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Career> {
        self.careers.iter().find(|career| career.title == title)
    }
}

/// First spelling wins when entries differ only by case.
fn split_skills(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty() && seen.insert(skill_key(skill)))
        .map(str::to_string)
        .collect()
}
