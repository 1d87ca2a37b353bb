use serde::{Deserialize, Serialize};

use super::adjustment::DealAdjustment;
use super::catalog::PricingCatalog;
use super::domain::{
    format_amount, BusinessLogic, DeploymentType, EmbeddingType, QuestionnaireInput,
    SecurityRequirement, Tier, UseCaseCount,
};
use super::scoring::{ComplexityBand, MAX_COMPLEXITY_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Header,
    Spacer,
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub emphasized: bool,
}

/// Display line of the recommendation reasoning, tagged so renderers never re-parse text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationLine {
    pub kind: LineKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<TextSpan>,
}

impl ExplanationLine {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Header,
            spans: vec![plain(text)],
        }
    }

    pub fn spacer() -> Self {
        Self {
            kind: LineKind::Spacer,
            spans: Vec::new(),
        }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Bullet,
            spans: vec![plain(text)],
        }
    }

    pub fn emphasized_bullet(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Bullet,
            spans: vec![TextSpan {
                text: text.into(),
                emphasized: true,
            }],
        }
    }

    /// Bullet whose leading label is emphasized, e.g. `Advanced Security: ...`.
    pub fn labelled_bullet(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Bullet,
            spans: vec![
                TextSpan {
                    text: label.into(),
                    emphasized: true,
                },
                plain(format!(" {}", detail.into())),
            ],
        }
    }

    /// Concatenated text without emphasis markers.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

fn plain(text: impl Into<String>) -> TextSpan {
    TextSpan {
        text: text.into(),
        emphasized: false,
    }
}

pub(crate) fn build_explanation(
    input: &QuestionnaireInput,
    score: u8,
    adjustment: &DealAdjustment,
    catalog: &PricingCatalog,
) -> Vec<ExplanationLine> {
    let tier = adjustment.final_tier;
    let mut lines = Vec::new();

    project_summary(input, &mut lines);
    lines.push(ExplanationLine::spacer());
    complexity_analysis(score, catalog, &mut lines);
    lines.push(ExplanationLine::spacer());
    fit_rationale(input, tier, &mut lines);
    lines.push(ExplanationLine::spacer());
    feature_list(input, tier, catalog, &mut lines);

    lines
}

fn project_summary(input: &QuestionnaireInput, lines: &mut Vec<ExplanationLine>) {
    lines.push(ExplanationLine::header("Your Project at a Glance:"));

    let project_type = if input.is_migration {
        "migrating from an existing BI platform"
    } else {
        "implementing a new ThoughtSpot deployment"
    };
    lines.push(ExplanationLine::bullet(format!(
        "You're {project_type} with a {} as your primary objective",
        input.primary_need.label().to_lowercase()
    )));
    lines.push(ExplanationLine::bullet(format!(
        "Expected team size of {} at go-live",
        input.team_size.label().to_lowercase()
    )));
    lines.push(ExplanationLine::bullet(format!(
        "Annual Contract Value (ACV): ${}",
        format_amount(input.deal_value)
    )));

    let deployment = match input.effective_embedding() {
        Some(embedding) => format!(
            "{} ({})",
            input.deployment_type.label(),
            embedding.label()
        ),
        None => input.deployment_type.label().to_string(),
    };
    lines.push(ExplanationLine::bullet(format!(
        "Deployment architecture: {deployment}"
    )));
    lines.push(ExplanationLine::bullet(format!(
        "Data complexity: {}",
        input.data_complexity.label()
    )));

    if input.use_case_count == UseCaseCount::Multiple {
        lines.push(ExplanationLine::bullet(
            "Multiple use cases across different business areas",
        ));
    }
}

fn complexity_analysis(score: u8, catalog: &PricingCatalog, lines: &mut Vec<ExplanationLine>) {
    let thresholds = &catalog.score_thresholds;
    lines.push(ExplanationLine::header("Complexity Analysis:"));
    lines.push(ExplanationLine::bullet(format!(
        "Complexity Score: {score} out of {MAX_COMPLEXITY_SCORE} possible points"
    )));
    lines.push(ExplanationLine::bullet(
        ComplexityBand::of(score, thresholds).describe(thresholds),
    ));
}

fn fit_rationale(input: &QuestionnaireInput, tier: Tier, lines: &mut Vec<ExplanationLine>) {
    lines.push(ExplanationLine::header("Why This Package is the Right Fit:"));

    let alignment = match tier {
        Tier::Foundation => {
            "The Foundation package is designed for teams getting started with ThoughtSpot who need core platform capabilities without extensive customization."
        }
        Tier::Advanced => {
            "The Advanced package provides the right mix of strategic guidance and technical implementation support for organizations scaling their analytics capabilities."
        }
        Tier::Premium => {
            "The Premium package delivers comprehensive support and strategic partnership needed for large-scale, mission-critical implementations."
        }
    };
    lines.push(ExplanationLine::bullet(alignment));

    if input.is_migration {
        lines.push(ExplanationLine::bullet(
            "As a migration project, you'll benefit from specialized support in content recreation, user adoption strategies, and change management",
        ));
    }

    if input.deployment_type == DeploymentType::Embedded {
        let note = match input.embedding_type {
            Some(EmbeddingType::CustomActions) => {
                "Your embedding requirements with custom actions need advanced integration expertise included in this package"
            }
            _ => {
                "Your embedded analytics use case aligns with the embedding best practices and setup included in this package"
            }
        };
        lines.push(ExplanationLine::bullet(note));
    }
}

fn feature_list(
    input: &QuestionnaireInput,
    tier: Tier,
    catalog: &PricingCatalog,
    lines: &mut Vec<ExplanationLine>,
) {
    lines.push(ExplanationLine::header("What You'll Get with This Package:"));

    lines.extend(
        catalog
            .offering(tier)
            .features
            .iter()
            .map(|feature| ExplanationLine::emphasized_bullet(feature.as_str())),
    );

    if input.business_logic == BusinessLogic::Advanced && tier != Tier::Foundation {
        lines.push(ExplanationLine::labelled_bullet(
            "Advanced Analytics:",
            "Custom formulas, calculations, and complex business logic implementation",
        ));
    }

    if input.security_requirement == SecurityRequirement::Advanced && tier == Tier::Premium {
        lines.push(ExplanationLine::labelled_bullet(
            "Advanced Security:",
            "User-level RLS, compliance controls, and audit framework implementation",
        ));
    }
}
