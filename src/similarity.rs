//! Content-based similarity between a student profile and the career catalog.
//!
//! Each career becomes one document (required skills, preferred skills,
//! industry). The TF-IDF space is fitted once at build time and the career
//! vectors are cached; a scoring call only projects the student's query.

use std::collections::BTreeMap;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info};

use crate::catalog::CareerCatalog;
use crate::error::{RecommendError, Result};
use crate::models::{skill_key, Candidate, Career, StudentProfile};

/// Tokens of two or more word characters, lowercased.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Fitted TF-IDF vector space: smoothed idf, raw term counts, L2-normalized rows.
#[derive(Debug, Clone)]
pub struct TfidfSpace {
    token_pattern: Regex,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfSpace {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        let token_pattern =
            Regex::new(TOKEN_PATTERN).map_err(|err| RecommendError::Config(err.to_string()))?;

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let mut seen: Vec<String> = tokenize(&token_pattern, doc.as_ref());
            seen.sort();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (column, (term, df)) in doc_freq.into_iter().enumerate() {
            vocabulary.insert(term, column);
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
        }

        Ok(Self {
            token_pattern,
            vocabulary,
            idf,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Projects a document into the fitted space. Unknown terms are ignored;
    /// a document with no known terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for term in tokenize(&self.token_pattern, document) {
            if let Some(&column) = self.vocabulary.get(&term) {
                vector[column] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }
        vector
    }
}

fn tokenize(pattern: &Regex, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Cosine similarity of two L2-normalized vectors, clamped to [0, 1].
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot.clamp(0.0, 1.0)
}

pub fn career_document(career: &Career) -> String {
    format!(
        "{} {} {}",
        career.required_skills.join(","),
        career.preferred_skills.join(","),
        career.industry
    )
}

pub fn student_document(profile: &StudentProfile) -> String {
    profile
        .skills
        .iter()
        .chain(profile.interests.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Literal overlap between a career's required skills and the student's
/// skills, plus the required skills the student lacks (in catalog order).
pub fn skill_overlap(career: &Career, profile: &StudentProfile) -> (f64, Vec<String>) {
    if career.required_skills.is_empty() {
        return (0.0, Vec::new());
    }

    let owned: Vec<String> = profile.skills.iter().map(|s| skill_key(s)).collect();
    let mut matched = 0usize;
    let mut missing = Vec::new();
    for skill in &career.required_skills {
        if owned.contains(&skill_key(skill)) {
            matched += 1;
        } else {
            missing.push(skill.clone());
        }
    }

    (matched as f64 / career.required_skills.len() as f64, missing)
}

#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    catalog: Arc<CareerCatalog>,
    space: TfidfSpace,
    career_vectors: Vec<Vec<f64>>,
}

impl SimilarityIndex {
    pub fn build(catalog: Arc<CareerCatalog>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let documents: Vec<String> = catalog.careers().iter().map(career_document).collect();
        let space = TfidfSpace::fit(&documents)?;
        let career_vectors = documents.iter().map(|doc| space.transform(doc)).collect();

        info!(
            careers = catalog.len(),
            vocabulary = space.vocabulary_size(),
            "built similarity index"
        );

        Ok(Self {
            catalog,
            space,
            career_vectors,
        })
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    pub fn space(&self) -> &TfidfSpace {
        &self.space
    }

    /// Ranks careers by textual similarity to the student's skills and
    /// interests. `top_n` must lie in `1..=catalog.len()`. Ties keep catalog
    /// order.
    pub fn score(&self, profile: &StudentProfile, top_n: usize) -> Result<Vec<Candidate<'_>>> {
        let catalog_size = self.catalog.len();
        if top_n == 0 || top_n > catalog_size {
            return Err(RecommendError::InvalidTopN {
                requested: top_n,
                catalog_size,
            });
        }

        let query = self.space.transform(&student_document(profile));
        let mut ranked: Vec<(usize, f64)> = self
            .career_vectors
            .iter()
            .map(|vector| cosine(&query, vector))
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let candidates: Vec<Candidate<'_>> = ranked
            .into_iter()
            .take(top_n)
            .map(|(position, similarity)| {
                let career = &self.catalog.careers()[position];
                let (skill_match, missing_skills) = skill_overlap(career, profile);
                Candidate {
                    career,
                    similarity,
                    skill_match,
                    missing_skills,
                }
            })
            .collect();

        debug!(top_n, candidates = candidates.len(), "scored student against catalog");
        Ok(candidates)
    }
}
