use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected number of end users at go-live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSize {
    UnderTen,
    TenToFifty,
    FiftyToHundred,
    Enterprise,
}

impl TeamSize {
    pub const fn points(self) -> u8 {
        match self {
            Self::UnderTen => 1,
            Self::TenToFifty => 2,
            Self::FiftyToHundred => 3,
            Self::Enterprise => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderTen => "<10 users",
            Self::TenToFifty => "10–50 users",
            Self::FiftyToHundred => "50–100 users",
            Self::Enterprise => "Hundreds of users (enterprise-wide)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryNeed {
    ProofOfConcept,
    ProductionReady,
}

impl PrimaryNeed {
    pub const fn points(self) -> u8 {
        match self {
            Self::ProofOfConcept => 1,
            Self::ProductionReady => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProofOfConcept => "Proof of Concept",
            Self::ProductionReady => "Production-ready polished use case",
        }
    }
}

/// How the customer's data sources are modelled and integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataComplexity {
    SingleSource,
    MultiSourceUnified,
    ComplexMultiSystem,
}

impl DataComplexity {
    pub const fn points(self) -> u8 {
        match self {
            Self::SingleSource => 1,
            Self::MultiSourceUnified => 2,
            Self::ComplexMultiSystem => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleSource => "Single TS data model, single underlying source",
            Self::MultiSourceUnified => {
                "Single TS data model, multiple underlying sources already unified in CDW"
            }
            Self::ComplexMultiSystem => {
                "Multiple TS data models or complex cross-system integrations"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessLogic {
    Standard,
    Advanced,
}

impl BusinessLogic {
    pub const fn points(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Advanced => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard aggregations",
            Self::Advanced => "Advanced formulas, custom calendars",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityRequirement {
    Basic,
    Advanced,
}

impl SecurityRequirement {
    pub const fn points(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Advanced => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic group RLS",
            Self::Advanced => "Advanced user-level, compliance-heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseCount {
    One,
    Multiple,
}

impl UseCaseCount {
    pub const fn points(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Multiple => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Multiple => ">1 (Multiple)",
        }
    }
}

/// Level of implementation support the customer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    Advisory,
    HandsOn,
}

impl SupportLevel {
    pub const fn points(self) -> u8 {
        match self {
            Self::Advisory => 1,
            Self::HandsOn => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Advisory => "Guided/advisory",
            Self::HandsOn => "Hands on support/co-build",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentType {
    Standalone,
    Embedded,
}

impl DeploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standalone => "TSA (ThoughtSpot Cloud)",
            Self::Embedded => "TSE (ThoughtSpot Embedding)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingType {
    Standard,
    CustomActions,
}

impl EmbeddingType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Out of Box TSE",
            Self::CustomActions => "Custom Actions",
        }
    }
}

/// Fully answered questionnaire handed to the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireInput {
    pub team_size: TeamSize,
    pub primary_need: PrimaryNeed,
    pub data_complexity: DataComplexity,
    pub business_logic: BusinessLogic,
    pub security_requirement: SecurityRequirement,
    pub use_case_count: UseCaseCount,
    pub support_level: SupportLevel,
    pub deployment_type: DeploymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_type: Option<EmbeddingType>,
    #[serde(default)]
    pub is_migration: bool,
    pub deal_value: f64,
}

impl QuestionnaireInput {
    /// Embedding type only counts when the deployment is embedded.
    pub fn effective_embedding(&self) -> Option<EmbeddingType> {
        match self.deployment_type {
            DeploymentType::Embedded => self.embedding_type,
            DeploymentType::Standalone => None,
        }
    }

    pub fn package_line(&self) -> PackageLine {
        PackageLine::for_migration(self.is_migration)
    }
}

/// Package complexity level, ordered from lightest to heaviest engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Foundation,
    Advanced,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Foundation, Tier::Advanced, Tier::Premium];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Advanced => "Advanced",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Commercial line the package is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageLine {
    JumpstartAi,
    Modernization,
}

impl PackageLine {
    pub const fn for_migration(is_migration: bool) -> Self {
        if is_migration {
            Self::Modernization
        } else {
            Self::JumpstartAi
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JumpstartAi => "Jumpstart AI",
            Self::Modernization => "Modernization",
        }
    }

    pub fn package_name(self, tier: Tier) -> String {
        format!("{} {}", self.label(), tier.label())
    }
}

/// Format a currency amount with thousands separators, keeping cents only when present.
pub fn format_amount(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (digits, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let nonzero = rendered.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
