use std::sync::Arc;

use tracing::info;

use crate::blend;
use crate::catalog::CareerCatalog;
use crate::config::TopNPolicy;
use crate::error::Result;
use crate::models::{LearningPath, Recommendation, StudentProfile};
use crate::planner;
use crate::resources::ResourceTable;
use crate::similarity::SimilarityIndex;

/// Scores students against one shared, read-only catalog. Safe to share
/// across threads: nothing here mutates after `new`.
#[derive(Debug, Clone)]
pub struct Recommender {
    index: SimilarityIndex,
    resources: ResourceTable,
    top_n_policy: TopNPolicy,
}

impl Recommender {
    pub fn new(
        catalog: Arc<CareerCatalog>,
        resources: ResourceTable,
        top_n_policy: TopNPolicy,
    ) -> Result<Self> {
        Ok(Self {
            index: SimilarityIndex::build(catalog)?,
            resources,
            top_n_policy,
        })
    }

    pub fn catalog(&self) -> &CareerCatalog {
        self.index.catalog()
    }

    pub fn score(&self, profile: &StudentProfile, top_n: usize) -> Result<Vec<Recommendation<'_>>> {
        let top_n = self.top_n_policy.resolve(top_n, self.catalog().len())?;
        let candidates = self.index.score(profile, top_n)?;
        let recommendations = blend::blend(candidates, &profile.education_level);

        if let Some(best) = recommendations.first() {
            info!(
                student = %profile.name,
                top = %best.career.title,
                overall = best.overall_score,
                "ranked careers"
            );
        }
        Ok(recommendations)
    }

    pub fn generate_path(
        &self,
        profile: &StudentProfile,
        career_title: &str,
        timeframe_months: u32,
    ) -> Option<LearningPath> {
        planner::generate_path(
            self.catalog(),
            &self.resources,
            profile,
            career_title,
            timeframe_months,
        )
    }
}
