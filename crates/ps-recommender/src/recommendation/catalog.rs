use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{PackageLine, Tier};

/// Declarative pricing, feature and threshold tables driving the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCatalog {
    pub score_thresholds: ScoreThresholds,
    pub deal_bands: DealValueBands,
    pub foundation: TierOffering,
    pub advanced: TierOffering,
    pub premium: TierOffering,
    pub contacts: ContactDirectory,
}

/// Inclusive upper bounds on the complexity score for the two lower tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub foundation_max: u8,
    pub advanced_max: u8,
}

/// Deal-value boundaries; values strictly between the two form the gray zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DealValueBands {
    /// At or below this ACV a Premium recommendation is stepped down.
    pub downgrade_max: f64,
    /// At or above this ACV lighter recommendations are stepped up.
    pub upgrade_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierOffering {
    pub features: Vec<String>,
    pub jumpstart_price: u32,
    pub modernization_price: u32,
}

impl TierOffering {
    pub fn price(&self, line: PackageLine) -> u32 {
        match line {
            PackageLine::JumpstartAi => self.jumpstart_price,
            PackageLine::Modernization => self.modernization_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDirectory {
    pub email: String,
    pub slack_channel: String,
    pub contacts: Vec<TeamContact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamContact {
    pub name: String,
    pub region: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read pricing catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse pricing catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid pricing catalog: {0}")]
    Invalid(String),
}

impl PricingCatalog {
    /// Built-in tables currently sold by the PS team.
    pub fn standard() -> Self {
        Self {
            score_thresholds: ScoreThresholds {
                foundation_max: 11,
                advanced_max: 16,
            },
            deal_bands: DealValueBands {
                downgrade_max: 110_000.0,
                upgrade_min: 140_000.0,
            },
            foundation: TierOffering {
                features: strings(&[
                    "Core Platform Setup & Configuration",
                    "Basic Training & Enablement",
                    "Single Use Case Development",
                    "Knowledge Transfer & Documentation",
                ]),
                jumpstart_price: 5_000,
                modernization_price: 20_000,
            },
            advanced: TierOffering {
                features: strings(&[
                    "Comprehensive Implementation",
                    "Advanced Training (Search, Liveboards, Admin)",
                    "Multiple Use Cases with Business Logic",
                    "Rollout Planning & Change Management",
                    "Post-launch Guidance",
                ]),
                jumpstart_price: 20_000,
                modernization_price: 50_000,
            },
            premium: TierOffering {
                features: strings(&[
                    "Strategic Partnership & Co-development",
                    "Role-based Training (Analysts, Power Users, Admins)",
                    "Enterprise-scale Multi-use Case Deployment",
                    "Advanced Features (Custom Actions, Complex Security)",
                    "Phased Rollout with Continuous Optimization",
                    "Executive Engagement & Success Metrics",
                ]),
                jumpstart_price: 60_000,
                modernization_price: 80_000,
            },
            contacts: ContactDirectory {
                email: "psc-team@thoughtspot.com".to_string(),
                slack_channel: "#ps-consulting".to_string(),
                contacts: [
                    ("MJ Densmore", "NA"),
                    ("Carolyn Chupa", "NA"),
                    ("Camilla Tanzi", "EMEA"),
                    ("Hetarth Chokshi", "EMEA"),
                    ("Arjun Krishnan", "Scale"),
                ]
                .into_iter()
                .map(|(name, region)| TeamContact {
                    name: name.to_string(),
                    region: region.to_string(),
                })
                .collect(),
            },
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let thresholds = self.score_thresholds;
        if thresholds.foundation_max >= thresholds.advanced_max {
            return Err(CatalogError::Invalid(format!(
                "foundation_max ({}) must be below advanced_max ({})",
                thresholds.foundation_max, thresholds.advanced_max
            )));
        }

        let bands = self.deal_bands;
        if !bands.downgrade_max.is_finite()
            || !bands.upgrade_min.is_finite()
            || bands.downgrade_max <= 0.0
            || bands.downgrade_max >= bands.upgrade_min
        {
            return Err(CatalogError::Invalid(format!(
                "deal bands must satisfy 0 < downgrade_max ({}) < upgrade_min ({})",
                bands.downgrade_max, bands.upgrade_min
            )));
        }

        for tier in Tier::ALL {
            if self.offering(tier).features.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "{tier} offering lists no features"
                )));
            }
        }

        Ok(())
    }

    pub fn offering(&self, tier: Tier) -> &TierOffering {
        match tier {
            Tier::Foundation => &self.foundation,
            Tier::Advanced => &self.advanced,
            Tier::Premium => &self.premium,
        }
    }

    pub fn price(&self, line: PackageLine, tier: Tier) -> u32 {
        self.offering(tier).price(line)
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
