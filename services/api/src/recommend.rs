use crate::infra::{load_engine, parse_selection};
use clap::Args;
use ps_recommender::config::AppConfig;
use ps_recommender::error::AppError;
use ps_recommender::recommendation::{
    format_amount, BusinessLogic, ContactDirectory, DataComplexity, DeploymentType,
    EmbeddingType, ExplanationLine, LineKind, PrimaryNeed, QuestionnaireForm,
    RecommendationResult, SecurityRequirement, SupportLevel, TeamSize, UseCaseCount,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Users at go-live: under-ten, ten-to-fifty, fifty-to-hundred, enterprise
    #[arg(long, value_parser = parse_selection::<TeamSize>)]
    pub(crate) team_size: Option<TeamSize>,
    /// proof-of-concept or production-ready
    #[arg(long, value_parser = parse_selection::<PrimaryNeed>)]
    pub(crate) primary_need: Option<PrimaryNeed>,
    /// single-source, multi-source-unified, complex-multi-system
    #[arg(long, value_parser = parse_selection::<DataComplexity>)]
    pub(crate) data_complexity: Option<DataComplexity>,
    /// standard or advanced
    #[arg(long, value_parser = parse_selection::<BusinessLogic>)]
    pub(crate) business_logic: Option<BusinessLogic>,
    /// basic or advanced
    #[arg(long, value_parser = parse_selection::<SecurityRequirement>)]
    pub(crate) security: Option<SecurityRequirement>,
    /// one or multiple
    #[arg(long, value_parser = parse_selection::<UseCaseCount>)]
    pub(crate) use_cases: Option<UseCaseCount>,
    /// advisory or hands-on
    #[arg(long, value_parser = parse_selection::<SupportLevel>)]
    pub(crate) support: Option<SupportLevel>,
    /// standalone or embedded
    #[arg(long, value_parser = parse_selection::<DeploymentType>)]
    pub(crate) deployment: Option<DeploymentType>,
    /// standard or custom-actions (embedded deployments only)
    #[arg(long, value_parser = parse_selection::<EmbeddingType>)]
    pub(crate) embedding: Option<EmbeddingType>,
    /// Existing customer migrating from another BI platform
    #[arg(long)]
    pub(crate) migration: bool,
    /// Annual contract value in USD
    #[arg(long)]
    pub(crate) deal_value: Option<f64>,
    /// Print the recommendation as JSON instead of formatted text
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn to_form(&self) -> QuestionnaireForm {
        QuestionnaireForm {
            team_size: self.team_size,
            primary_need: self.primary_need,
            data_complexity: self.data_complexity,
            business_logic: self.business_logic,
            security_requirement: self.security,
            use_case_count: self.use_cases,
            support_level: self.support,
            deployment_type: self.deployment,
            embedding_type: self.embedding,
            is_migration: self.migration,
            deal_value: self.deal_value,
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config)?;

    let result = engine.submit(&args.to_form())?;

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Recommendation payload unavailable: {err}"),
        }
        return Ok(());
    }

    print!(
        "{}",
        render_recommendation(&result, &engine.catalog().contacts)
    );
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = config.catalog.load()?;

    match serde_json::to_string_pretty(&catalog) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Catalog unavailable: {err}"),
    }
    Ok(())
}

pub(crate) fn render_recommendation(
    result: &RecommendationResult,
    contacts: &ContactDirectory,
) -> String {
    let mut out = String::new();

    out.push_str("Recommended package\n");
    out.push_str(&format!("  {}\n", result.package_name));
    out.push_str(&format!(
        "  Complexity score: {} | Approx. price: ${}\n",
        result.complexity_score,
        format_amount(f64::from(result.price))
    ));
    if result.was_adjusted() {
        out.push_str(&format!(
            "  Base recommendation (from complexity): {} -> adjusted for ACV: {}\n",
            result.base_tier, result.final_tier
        ));
    }

    if let Some(reason) = &result.override_reason {
        out.push_str("\nACV-based adjustment\n");
        out.push_str(&format!("  {reason}\n"));
        out.push_str("  Impact on package features:\n");
        for change in &result.feature_delta {
            out.push_str(&format!("  - {change}\n"));
        }
        if result.premium_optional {
            out.push_str("  Note: given the high ACV, the Premium package could also be a strong fit. Consider discussing with the PSC team.\n");
        }
    }

    out.push_str("\nReasoning\n");
    for line in &result.explanation {
        out.push_str(&render_line(line));
        out.push('\n');
    }

    if result.contact_team {
        out.push_str("\nContact the PS team\n");
        out.push_str(&format!(
            "  {} | Slack {}\n",
            contacts.email, contacts.slack_channel
        ));
        for contact in &contacts.contacts {
            out.push_str(&format!("  - {} ({})\n", contact.name, contact.region));
        }
    }

    out
}

fn render_line(line: &ExplanationLine) -> String {
    match line.kind {
        LineKind::Header => line.text(),
        LineKind::Spacer => String::new(),
        LineKind::Bullet => format!("  - {}", line.text()),
    }
}
