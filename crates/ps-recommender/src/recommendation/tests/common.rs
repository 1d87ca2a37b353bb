use axum::response::Response;
use serde_json::Value;

use crate::recommendation::domain::{
    BusinessLogic, DataComplexity, DeploymentType, EmbeddingType, PrimaryNeed,
    QuestionnaireInput, SecurityRequirement, SupportLevel, TeamSize, UseCaseCount,
};
use crate::recommendation::{PricingCatalog, RecommendationEngine};

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(PricingCatalog::standard())
}

/// Lowest answer on every question, standalone deployment: score 7.
pub(super) fn baseline_input() -> QuestionnaireInput {
    QuestionnaireInput {
        team_size: TeamSize::UnderTen,
        primary_need: PrimaryNeed::ProofOfConcept,
        data_complexity: DataComplexity::SingleSource,
        business_logic: BusinessLogic::Standard,
        security_requirement: SecurityRequirement::Basic,
        use_case_count: UseCaseCount::One,
        support_level: SupportLevel::Advisory,
        deployment_type: DeploymentType::Standalone,
        embedding_type: None,
        is_migration: false,
        deal_value: 50_000.0,
    }
}

/// Score 8, Foundation on score alone.
pub(super) fn foundation_input(deal_value: f64) -> QuestionnaireInput {
    QuestionnaireInput {
        team_size: TeamSize::TenToFifty,
        deal_value,
        ..baseline_input()
    }
}

/// Score 10, Foundation on score alone.
pub(super) fn scenario_a_input() -> QuestionnaireInput {
    QuestionnaireInput {
        team_size: TeamSize::TenToFifty,
        primary_need: PrimaryNeed::ProductionReady,
        data_complexity: DataComplexity::MultiSourceUnified,
        deal_value: 50_000.0,
        ..baseline_input()
    }
}

/// Score 14, Advanced on score alone.
pub(super) fn advanced_input(deal_value: f64) -> QuestionnaireInput {
    QuestionnaireInput {
        team_size: TeamSize::FiftyToHundred,
        primary_need: PrimaryNeed::ProductionReady,
        data_complexity: DataComplexity::ComplexMultiSystem,
        use_case_count: UseCaseCount::Multiple,
        deal_value,
        ..baseline_input()
    }
}

/// Score 18 including the custom actions bonus, Premium on score alone.
pub(super) fn premium_input(deal_value: f64) -> QuestionnaireInput {
    QuestionnaireInput {
        team_size: TeamSize::Enterprise,
        primary_need: PrimaryNeed::ProductionReady,
        data_complexity: DataComplexity::ComplexMultiSystem,
        business_logic: BusinessLogic::Advanced,
        security_requirement: SecurityRequirement::Advanced,
        deployment_type: DeploymentType::Embedded,
        embedding_type: Some(EmbeddingType::CustomActions),
        deal_value,
        ..baseline_input()
    }
}

/// Highest answer everywhere: score 22.
pub(super) fn maxed_input() -> QuestionnaireInput {
    QuestionnaireInput {
        team_size: TeamSize::Enterprise,
        primary_need: PrimaryNeed::ProductionReady,
        data_complexity: DataComplexity::ComplexMultiSystem,
        business_logic: BusinessLogic::Advanced,
        security_requirement: SecurityRequirement::Advanced,
        use_case_count: UseCaseCount::Multiple,
        support_level: SupportLevel::HandsOn,
        deployment_type: DeploymentType::Embedded,
        embedding_type: Some(EmbeddingType::CustomActions),
        is_migration: true,
        deal_value: 500_000.0,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
