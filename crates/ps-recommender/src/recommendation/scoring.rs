use serde::{Deserialize, Serialize};

use super::catalog::ScoreThresholds;
use super::domain::{EmbeddingType, QuestionnaireInput, Tier};

/// Highest score a fully answered questionnaire can reach.
pub const MAX_COMPLEXITY_SCORE: u8 = 22;

/// Questionnaire dimension contributing to the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    TeamSize,
    PrimaryNeed,
    DataComplexity,
    BusinessLogic,
    SecurityRequirement,
    UseCaseCount,
    SupportLevel,
    CustomActionsEmbedding,
}

/// Discrete contribution to the complexity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub selection: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub total: u8,
    pub components: Vec<ScoreComponent>,
}

pub(crate) fn calculate_score(input: &QuestionnaireInput) -> ScoreCard {
    let mut components = vec![
        component(
            ScoreFactor::TeamSize,
            input.team_size.points(),
            input.team_size.label(),
        ),
        component(
            ScoreFactor::PrimaryNeed,
            input.primary_need.points(),
            input.primary_need.label(),
        ),
        component(
            ScoreFactor::DataComplexity,
            input.data_complexity.points(),
            input.data_complexity.label(),
        ),
        component(
            ScoreFactor::BusinessLogic,
            input.business_logic.points(),
            input.business_logic.label(),
        ),
        component(
            ScoreFactor::SecurityRequirement,
            input.security_requirement.points(),
            input.security_requirement.label(),
        ),
        component(
            ScoreFactor::UseCaseCount,
            input.use_case_count.points(),
            input.use_case_count.label(),
        ),
        component(
            ScoreFactor::SupportLevel,
            input.support_level.points(),
            input.support_level.label(),
        ),
    ];

    if input.effective_embedding() == Some(EmbeddingType::CustomActions) {
        components.push(component(
            ScoreFactor::CustomActionsEmbedding,
            1,
            EmbeddingType::CustomActions.label(),
        ));
    }

    let total = components.iter().map(|component| component.points).sum();

    ScoreCard { total, components }
}

fn component(factor: ScoreFactor, points: u8, selection: &str) -> ScoreComponent {
    ScoreComponent {
        factor,
        points,
        selection: selection.to_string(),
    }
}

pub(crate) fn classify(score: u8, thresholds: &ScoreThresholds) -> Tier {
    if score <= thresholds.foundation_max {
        Tier::Foundation
    } else if score <= thresholds.advanced_max {
        Tier::Advanced
    } else {
        Tier::Premium
    }
}

/// Qualitative reading of a score, sharing the tier thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityBand {
    Straightforward,
    Moderate,
    High,
}

impl ComplexityBand {
    pub(crate) fn of(score: u8, thresholds: &ScoreThresholds) -> Self {
        match classify(score, thresholds) {
            Tier::Foundation => Self::Straightforward,
            Tier::Advanced => Self::Moderate,
            Tier::Premium => Self::High,
        }
    }

    pub(crate) fn describe(self, thresholds: &ScoreThresholds) -> String {
        match self {
            Self::Straightforward => format!(
                "Score indicates a straightforward implementation (0-{} range)",
                thresholds.foundation_max
            ),
            Self::Moderate => format!(
                "Score indicates moderate complexity ({}-{} range)",
                thresholds.foundation_max + 1,
                thresholds.advanced_max
            ),
            Self::High => format!(
                "Score indicates high complexity (>{} range)",
                thresholds.advanced_max
            ),
        }
    }
}
