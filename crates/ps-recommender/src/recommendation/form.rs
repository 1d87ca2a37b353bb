use serde::{Deserialize, Serialize};

use super::domain::{
    BusinessLogic, DataComplexity, DeploymentType, EmbeddingType, PrimaryNeed,
    QuestionnaireInput, SecurityRequirement, SupportLevel, TeamSize, UseCaseCount,
};

/// Raw questionnaire state as collected from a user; unanswered selections are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireForm {
    pub team_size: Option<TeamSize>,
    pub primary_need: Option<PrimaryNeed>,
    pub data_complexity: Option<DataComplexity>,
    pub business_logic: Option<BusinessLogic>,
    pub security_requirement: Option<SecurityRequirement>,
    pub use_case_count: Option<UseCaseCount>,
    pub support_level: Option<SupportLevel>,
    pub deployment_type: Option<DeploymentType>,
    pub embedding_type: Option<EmbeddingType>,
    pub is_migration: bool,
    pub deal_value: Option<f64>,
}

/// Blocking validation message surfaced before the engine is invoked.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill out all fields, including Deployment Type.")]
    IncompleteSelections { missing: Vec<&'static str> },
    #[error("Please enter a valid ACV greater than 0.")]
    InvalidDealValue,
}

impl QuestionnaireForm {
    /// Names of the selections still unanswered, in questionnaire order.
    pub fn missing_selections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let checks = [
            ("team_size", self.team_size.is_none()),
            ("primary_need", self.primary_need.is_none()),
            ("data_complexity", self.data_complexity.is_none()),
            ("business_logic", self.business_logic.is_none()),
            ("security_requirement", self.security_requirement.is_none()),
            ("use_case_count", self.use_case_count.is_none()),
            ("support_level", self.support_level.is_none()),
            ("deployment_type", self.deployment_type.is_none()),
            (
                "embedding_type",
                self.deployment_type == Some(DeploymentType::Embedded)
                    && self.embedding_type.is_none(),
            ),
        ];
        for (field, unanswered) in checks {
            if unanswered {
                missing.push(field);
            }
        }
        missing
    }

    pub fn validate(&self) -> Result<QuestionnaireInput, FormError> {
        let missing = self.missing_selections();
        if !missing.is_empty() {
            return Err(FormError::IncompleteSelections { missing });
        }

        let deal_value = match self.deal_value {
            Some(value) if value.is_finite() && value > 0.0 => value,
            _ => return Err(FormError::InvalidDealValue),
        };

        match (
            self.team_size,
            self.primary_need,
            self.data_complexity,
            self.business_logic,
            self.security_requirement,
            self.use_case_count,
            self.support_level,
            self.deployment_type,
        ) {
            (
                Some(team_size),
                Some(primary_need),
                Some(data_complexity),
                Some(business_logic),
                Some(security_requirement),
                Some(use_case_count),
                Some(support_level),
                Some(deployment_type),
            ) => Ok(QuestionnaireInput {
                team_size,
                primary_need,
                data_complexity,
                business_logic,
                security_requirement,
                use_case_count,
                support_level,
                deployment_type,
                embedding_type: match deployment_type {
                    DeploymentType::Embedded => self.embedding_type,
                    DeploymentType::Standalone => None,
                },
                is_migration: self.is_migration,
                deal_value,
            }),
            _ => Err(FormError::IncompleteSelections {
                missing: self.missing_selections(),
            }),
        }
    }
}

impl From<QuestionnaireInput> for QuestionnaireForm {
    fn from(input: QuestionnaireInput) -> Self {
        Self {
            team_size: Some(input.team_size),
            primary_need: Some(input.primary_need),
            data_complexity: Some(input.data_complexity),
            business_logic: Some(input.business_logic),
            security_requirement: Some(input.security_requirement),
            use_case_count: Some(input.use_case_count),
            support_level: Some(input.support_level),
            deployment_type: Some(input.deployment_type),
            embedding_type: input.embedding_type,
            is_migration: input.is_migration,
            deal_value: Some(input.deal_value),
        }
    }
}
