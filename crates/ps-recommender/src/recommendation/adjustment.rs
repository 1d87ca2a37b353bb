use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::DealValueBands;
use super::domain::{format_amount, Tier};

/// Which side of the ACV bands a deal falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealBand {
    /// ACV at or below the downgrade ceiling.
    Low,
    /// ACV strictly between the two boundaries; recommendations stand.
    GrayZone,
    /// ACV at or above the upgrade floor.
    High,
}

impl DealBand {
    pub(crate) fn of(deal_value: f64, bands: &DealValueBands) -> Self {
        if deal_value <= bands.downgrade_max {
            Self::Low
        } else if deal_value < bands.upgrade_min {
            Self::GrayZone
        } else {
            Self::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureChangeKind {
    Removed,
    Retained,
    Added,
    Suggestion,
}

/// One line of the feature impact shown alongside an ACV adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureChange {
    pub kind: FeatureChangeKind,
    pub feature: String,
}

impl fmt::Display for FeatureChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FeatureChangeKind::Removed => write!(f, "Removed: {}", self.feature),
            FeatureChangeKind::Retained => write!(f, "Retained: {}", self.feature),
            FeatureChangeKind::Added => write!(f, "Added: {}", self.feature),
            FeatureChangeKind::Suggestion => f.write_str(&self.feature),
        }
    }
}

/// Outcome of reconciling the score-based tier with the deal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealAdjustment {
    pub final_tier: Tier,
    pub band: DealBand,
    pub reason: Option<String>,
    pub feature_delta: Vec<FeatureChange>,
    pub premium_optional: bool,
}

impl DealAdjustment {
    fn unchanged(tier: Tier, band: DealBand) -> Self {
        Self {
            final_tier: tier,
            band,
            reason: None,
            feature_delta: Vec::new(),
            premium_optional: false,
        }
    }
}

const PREMIUM_TO_ADVANCED: &[(FeatureChangeKind, &str)] = &[
    (
        FeatureChangeKind::Removed,
        "Strategic Partnership & Co-development",
    ),
    (
        FeatureChangeKind::Removed,
        "Executive Engagement & Success Metrics",
    ),
    (
        FeatureChangeKind::Removed,
        "Enterprise-scale deployment features",
    ),
    (FeatureChangeKind::Retained, "Comprehensive implementation"),
    (
        FeatureChangeKind::Retained,
        "Multiple use cases with business logic",
    ),
    (FeatureChangeKind::Retained, "Post-launch guidance"),
];

const ADVANCED_TO_PREMIUM: &[(FeatureChangeKind, &str)] = &[
    (
        FeatureChangeKind::Added,
        "Strategic Partnership & Co-development",
    ),
    (
        FeatureChangeKind::Added,
        "Role-based training for all user types",
    ),
    (
        FeatureChangeKind::Added,
        "Executive Engagement & Success Metrics",
    ),
    (
        FeatureChangeKind::Added,
        "Phased rollout with continuous optimization",
    ),
    (
        FeatureChangeKind::Added,
        "Advanced features (Custom Actions, Complex Security)",
    ),
];

const FOUNDATION_TO_ADVANCED: &[(FeatureChangeKind, &str)] = &[
    (FeatureChangeKind::Added, "Comprehensive implementation"),
    (FeatureChangeKind::Added, "Advanced training"),
    (
        FeatureChangeKind::Added,
        "Multiple use cases with business logic",
    ),
    (
        FeatureChangeKind::Added,
        "Rollout planning & change management",
    ),
    (
        FeatureChangeKind::Suggestion,
        "Consider Premium for strategic partnership",
    ),
];

pub(crate) fn apply_override(
    base_tier: Tier,
    deal_value: f64,
    bands: &DealValueBands,
) -> DealAdjustment {
    let band = DealBand::of(deal_value, bands);
    let acv = format_amount(deal_value);

    match (band, base_tier) {
        (DealBand::Low, Tier::Premium) => DealAdjustment {
            final_tier: Tier::Advanced,
            band,
            reason: Some(format!(
                "Due to ACV of ${acv} (≤${}), we recommend Advanced instead of Premium to better align with deal value.",
                short_amount(bands.downgrade_max)
            )),
            feature_delta: changes(PREMIUM_TO_ADVANCED),
            premium_optional: false,
        },
        (DealBand::High, Tier::Advanced) => DealAdjustment {
            final_tier: Tier::Premium,
            band,
            reason: Some(format!(
                "With ACV of ${acv} (≥${}), the deal value justifies upgrading to Premium for maximum value delivery.",
                short_amount(bands.upgrade_min)
            )),
            feature_delta: changes(ADVANCED_TO_PREMIUM),
            premium_optional: false,
        },
        (DealBand::High, Tier::Foundation) => DealAdjustment {
            final_tier: Tier::Advanced,
            band,
            reason: Some(format!(
                "High ACV of ${acv} suggests upgrading from Foundation to at least Advanced. Premium may also be appropriate."
            )),
            feature_delta: changes(FOUNDATION_TO_ADVANCED),
            premium_optional: true,
        },
        (band, tier) => DealAdjustment::unchanged(tier, band),
    }
}

fn changes(entries: &[(FeatureChangeKind, &str)]) -> Vec<FeatureChange> {
    entries
        .iter()
        .map(|(kind, feature)| FeatureChange {
            kind: *kind,
            feature: feature.to_string(),
        })
        .collect()
}

/// Render a band boundary the way sales talks about it, e.g. `110K`.
fn short_amount(value: f64) -> String {
    if value >= 1_000.0 && (value % 1_000.0) == 0.0 {
        format!("{}K", format_amount(value / 1_000.0))
    } else {
        format_amount(value)
    }
}
