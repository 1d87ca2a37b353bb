//! Professional services package recommendation.
//!
//! A questionnaire is scored, mapped to a tier, reconciled with the deal value (ACV)
//! and explained. All tables live in [`PricingCatalog`]; the pipeline itself keeps no
//! state between submissions.

mod adjustment;
pub mod catalog;
pub mod domain;
mod engine;
mod explanation;
pub mod form;
pub mod router;
mod scoring;

#[cfg(test)]
mod tests;

pub use adjustment::{DealAdjustment, DealBand, FeatureChange, FeatureChangeKind};
pub use catalog::{
    CatalogError, ContactDirectory, DealValueBands, PricingCatalog, ScoreThresholds,
    TeamContact, TierOffering,
};
pub use domain::{
    format_amount, BusinessLogic, DataComplexity, DeploymentType, EmbeddingType, PackageLine,
    PrimaryNeed, QuestionnaireInput, SecurityRequirement, SupportLevel, TeamSize, Tier,
    UseCaseCount,
};
pub use engine::{
    RecommendationEngine, RecommendationError, RecommendationResult, SubmissionError,
};
pub use explanation::{ExplanationLine, LineKind, TextSpan};
pub use form::{FormError, QuestionnaireForm};
pub use router::recommendation_router;
pub use scoring::{ComplexityBand, ScoreCard, ScoreComponent, ScoreFactor, MAX_COMPLEXITY_SCORE};
