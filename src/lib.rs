//! Career recommendations and skill-gap learning paths for students.
//!
//! A [`Recommender`] fits a TF-IDF index over a [`CareerCatalog`] once,
//! then ranks careers for any number of student profiles by blending
//! textual similarity, literal skill overlap, and education fit.

pub mod blend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod profile;
pub mod recommender;
pub mod report;
pub mod resources;
pub mod similarity;

pub use catalog::CareerCatalog;
pub use config::{AppConfig, TopNPolicy};
pub use error::{RecommendError, Result};
pub use models::{Career, LearningPath, LearningPhase, Recommendation, StudentProfile};
pub use recommender::Recommender;
pub use resources::ResourceTable;
