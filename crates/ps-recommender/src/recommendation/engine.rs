use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::adjustment::{apply_override, DealAdjustment, DealBand, FeatureChange};
use super::catalog::PricingCatalog;
use super::domain::{DeploymentType, PackageLine, QuestionnaireInput, Tier};
use super::explanation::{build_explanation, ExplanationLine};
use super::form::{FormError, QuestionnaireForm};
use super::scoring::{calculate_score, classify, ScoreCard, ScoreComponent};

/// Stateless pipeline turning a questionnaire into a package recommendation.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    catalog: PricingCatalog,
}

/// Recommendation produced for a single questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub complexity_score: u8,
    pub score_breakdown: Vec<ScoreComponent>,
    pub base_tier: Tier,
    pub final_tier: Tier,
    pub deal_band: DealBand,
    pub override_reason: Option<String>,
    #[serde(default)]
    pub feature_delta: Vec<FeatureChange>,
    pub premium_optional: bool,
    /// Tier moved or Premium is worth discussing; show the PS contact directory.
    pub contact_team: bool,
    pub package_line: PackageLine,
    pub package_name: String,
    pub price: u32,
    pub explanation: Vec<ExplanationLine>,
}

impl RecommendationResult {
    pub fn was_adjusted(&self) -> bool {
        self.base_tier != self.final_tier
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Error raised when a raw form submission cannot be turned into a recommendation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}

impl RecommendationEngine {
    pub fn new(catalog: PricingCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    pub fn score(&self, input: &QuestionnaireInput) -> ScoreCard {
        calculate_score(input)
    }

    pub fn classify(&self, score: u8) -> Tier {
        classify(score, &self.catalog.score_thresholds)
    }

    pub fn apply_override(&self, base_tier: Tier, deal_value: f64) -> DealAdjustment {
        apply_override(base_tier, deal_value, &self.catalog.deal_bands)
    }

    pub fn explain(
        &self,
        input: &QuestionnaireInput,
        score: u8,
        adjustment: &DealAdjustment,
    ) -> Vec<ExplanationLine> {
        build_explanation(input, score, adjustment, &self.catalog)
    }

    pub fn price(&self, is_migration: bool, tier: Tier) -> u32 {
        self.catalog.price(PackageLine::for_migration(is_migration), tier)
    }

    /// Run the full pipeline: score, classify, reconcile with ACV, explain, price.
    pub fn recommend(
        &self,
        input: &QuestionnaireInput,
    ) -> Result<RecommendationResult, RecommendationError> {
        check_preconditions(input)?;

        let card = self.score(input);
        let base_tier = self.classify(card.total);
        let adjustment = self.apply_override(base_tier, input.deal_value);
        let explanation = self.explain(input, card.total, &adjustment);

        let final_tier = adjustment.final_tier;
        let package_line = input.package_line();

        debug!(
            score = card.total,
            ?base_tier,
            ?final_tier,
            band = ?adjustment.band,
            "recommendation computed"
        );
        if base_tier != final_tier {
            info!(
                ?base_tier,
                ?final_tier,
                deal_value = input.deal_value,
                "tier adjusted for deal value"
            );
        }

        let DealAdjustment {
            band,
            reason,
            feature_delta,
            premium_optional,
            ..
        } = adjustment;

        Ok(RecommendationResult {
            complexity_score: card.total,
            score_breakdown: card.components,
            base_tier,
            final_tier,
            deal_band: band,
            override_reason: reason,
            feature_delta,
            premium_optional,
            contact_team: base_tier != final_tier || premium_optional,
            package_line,
            package_name: package_line.package_name(final_tier),
            price: self.catalog.price(package_line, final_tier),
            explanation,
        })
    }

    /// Validate a raw form and, when complete, run the pipeline on it.
    pub fn submit(&self, form: &QuestionnaireForm) -> Result<RecommendationResult, SubmissionError> {
        let input = form.validate()?;
        Ok(self.recommend(&input)?)
    }
}

fn check_preconditions(input: &QuestionnaireInput) -> Result<(), RecommendationError> {
    if !input.deal_value.is_finite() || input.deal_value <= 0.0 {
        return Err(RecommendationError::InvalidInput(format!(
            "deal value must be a positive amount, got {}",
            input.deal_value
        )));
    }

    if input.deployment_type == DeploymentType::Embedded && input.embedding_type.is_none() {
        return Err(RecommendationError::InvalidInput(
            "embedded deployments require an embedding type".to_string(),
        ));
    }

    Ok(())
}
