use ps_recommender::recommendation::{
    BusinessLogic, DataComplexity, DealBand, DeploymentType, EmbeddingType, LineKind,
    PricingCatalog, PrimaryNeed, QuestionnaireInput, RecommendationEngine, SecurityRequirement,
    SupportLevel, TeamSize, Tier, UseCaseCount,
};
use std::io::Write;

fn input(
    team_size: TeamSize,
    primary_need: PrimaryNeed,
    data_complexity: DataComplexity,
    use_case_count: UseCaseCount,
    deal_value: f64,
) -> QuestionnaireInput {
    QuestionnaireInput {
        team_size,
        primary_need,
        data_complexity,
        business_logic: BusinessLogic::Standard,
        security_requirement: SecurityRequirement::Basic,
        use_case_count,
        support_level: SupportLevel::Advisory,
        deployment_type: DeploymentType::Standalone,
        embedding_type: None,
        is_migration: false,
        deal_value,
    }
}

#[test]
fn new_deployment_recommendation_reads_end_to_end() {
    let engine = RecommendationEngine::default();
    let questionnaire = input(
        TeamSize::TenToFifty,
        PrimaryNeed::ProductionReady,
        DataComplexity::MultiSourceUnified,
        UseCaseCount::One,
        50_000.0,
    );

    let result = engine.recommend(&questionnaire).expect("recommendation");

    assert_eq!(result.complexity_score, 10);
    assert_eq!(result.package_name, "Jumpstart AI Foundation");
    assert_eq!(result.price, 5_000);
    assert_eq!(result.deal_band, DealBand::Low);
    assert_eq!(
        result
            .score_breakdown
            .iter()
            .map(|component| u32::from(component.points))
            .sum::<u32>(),
        10
    );

    let kinds: Vec<LineKind> = result.explanation.iter().map(|line| line.kind).collect();
    assert_eq!(kinds.first(), Some(&LineKind::Header));
    assert_eq!(kinds.last(), Some(&LineKind::Bullet));
}

#[test]
fn migration_with_embedded_custom_actions_and_high_deal() {
    let engine = RecommendationEngine::default();
    let questionnaire = QuestionnaireInput {
        deployment_type: DeploymentType::Embedded,
        embedding_type: Some(EmbeddingType::CustomActions),
        is_migration: true,
        ..input(
            TeamSize::FiftyToHundred,
            PrimaryNeed::ProductionReady,
            DataComplexity::ComplexMultiSystem,
            UseCaseCount::Multiple,
            175_000.0,
        )
    };

    let result = engine.recommend(&questionnaire).expect("recommendation");

    assert_eq!(result.complexity_score, 15);
    assert_eq!(result.base_tier, Tier::Advanced);
    assert_eq!(result.final_tier, Tier::Premium);
    assert_eq!(result.package_name, "Modernization Premium");
    assert_eq!(result.price, 80_000);
    assert!(result
        .explanation
        .iter()
        .any(|line| line.text().contains("As a migration project")));
}

#[test]
fn result_serializes_with_tagged_lines() {
    let engine = RecommendationEngine::default();
    let questionnaire = input(
        TeamSize::UnderTen,
        PrimaryNeed::ProofOfConcept,
        DataComplexity::SingleSource,
        UseCaseCount::One,
        200_000.0,
    );

    let result = engine.recommend(&questionnaire).expect("recommendation");
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["premium_optional"], true);
    assert_eq!(json["final_tier"], "Advanced");
    assert_eq!(json["explanation"][0]["kind"], "header");
    assert_eq!(
        json["feature_delta"].as_array().map(Vec::len),
        Some(result.feature_delta.len())
    );
}

#[test]
fn catalog_file_overrides_built_in_tables() {
    let mut catalog = PricingCatalog::standard();
    catalog.foundation.jumpstart_price = 7_500;
    catalog.deal_bands.downgrade_max = 100_000.0;

    let dir = std::env::temp_dir().join(format!("ps-recommender-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("catalog.json");
    let mut file = std::fs::File::create(&path).expect("create catalog file");
    file.write_all(&serde_json::to_vec_pretty(&catalog).expect("serialize catalog"))
        .expect("write catalog");

    let loaded = PricingCatalog::from_path(&path).expect("catalog loads");
    assert_eq!(loaded, catalog);

    let engine = RecommendationEngine::new(loaded);
    let result = engine
        .recommend(&input(
            TeamSize::UnderTen,
            PrimaryNeed::ProofOfConcept,
            DataComplexity::SingleSource,
            UseCaseCount::One,
            105_000.0,
        ))
        .expect("recommendation");
    assert_eq!(result.deal_band, DealBand::GrayZone);
    assert_eq!(result.price, 7_500);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let err = PricingCatalog::from_path("/nonexistent/ps-recommender/catalog.json")
        .expect_err("missing file");
    assert!(err.to_string().starts_with("failed to read pricing catalog"));
}
