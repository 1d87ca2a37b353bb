use crate::recommendation::adjustment::{
    apply_override, DealBand, FeatureChange, FeatureChangeKind,
};
use crate::recommendation::domain::Tier;
use crate::recommendation::PricingCatalog;

fn bands() -> crate::recommendation::DealValueBands {
    PricingCatalog::standard().deal_bands
}

#[test]
fn band_boundaries_are_inclusive_on_both_ends() {
    let bands = bands();

    assert_eq!(DealBand::of(0.0, &bands), DealBand::Low);
    assert_eq!(DealBand::of(110_000.0, &bands), DealBand::Low);
    assert_eq!(DealBand::of(110_000.01, &bands), DealBand::GrayZone);
    assert_eq!(DealBand::of(139_999.99, &bands), DealBand::GrayZone);
    assert_eq!(DealBand::of(140_000.0, &bands), DealBand::High);
    assert_eq!(DealBand::of(10_000_000.0, &bands), DealBand::High);
}

#[test]
fn premium_is_stepped_down_at_low_acv() {
    let adjustment = apply_override(Tier::Premium, 90_000.0, &bands());

    assert_eq!(adjustment.final_tier, Tier::Advanced);
    assert_eq!(adjustment.band, DealBand::Low);
    assert_eq!(
        adjustment.reason.as_deref(),
        Some("Due to ACV of $90,000 (≤$110K), we recommend Advanced instead of Premium to better align with deal value.")
    );
    assert_eq!(adjustment.feature_delta.len(), 6);
    assert_eq!(
        adjustment.feature_delta[0].to_string(),
        "Removed: Strategic Partnership & Co-development"
    );
    assert_eq!(
        adjustment.feature_delta[5].to_string(),
        "Retained: Post-launch guidance"
    );
    assert!(!adjustment.premium_optional);
}

#[test]
fn premium_exactly_at_downgrade_ceiling_is_stepped_down() {
    let adjustment = apply_override(Tier::Premium, 110_000.0, &bands());

    assert_eq!(adjustment.final_tier, Tier::Advanced);
    assert!(adjustment
        .reason
        .expect("downgrade reason")
        .contains("$110,000"));
}

#[test]
fn lighter_tiers_are_untouched_at_low_acv() {
    for tier in [Tier::Foundation, Tier::Advanced] {
        let adjustment = apply_override(tier, 25_000.0, &bands());
        assert_eq!(adjustment.final_tier, tier);
        assert!(adjustment.reason.is_none());
        assert!(adjustment.feature_delta.is_empty());
    }
}

#[test]
fn gray_zone_never_changes_any_tier() {
    for tier in Tier::ALL {
        for deal_value in [110_000.5, 125_000.0, 139_999.0] {
            let adjustment = apply_override(tier, deal_value, &bands());
            assert_eq!(adjustment.final_tier, tier);
            assert_eq!(adjustment.band, DealBand::GrayZone);
            assert!(adjustment.reason.is_none());
            assert!(adjustment.feature_delta.is_empty());
            assert!(!adjustment.premium_optional);
        }
    }
}

#[test]
fn advanced_is_upgraded_at_high_acv() {
    let adjustment = apply_override(Tier::Advanced, 150_000.0, &bands());

    assert_eq!(adjustment.final_tier, Tier::Premium);
    assert_eq!(
        adjustment.reason.as_deref(),
        Some("With ACV of $150,000 (≥$140K), the deal value justifies upgrading to Premium for maximum value delivery.")
    );
    assert!(adjustment
        .feature_delta
        .iter()
        .all(|change| change.kind == FeatureChangeKind::Added));
    assert!(!adjustment.premium_optional);
}

#[test]
fn advanced_exactly_at_upgrade_floor_is_upgraded() {
    let adjustment = apply_override(Tier::Advanced, 140_000.0, &bands());
    assert_eq!(adjustment.final_tier, Tier::Premium);
}

#[test]
fn foundation_at_high_acv_moves_to_advanced_and_flags_premium() {
    let adjustment = apply_override(Tier::Foundation, 200_000.0, &bands());

    assert_eq!(adjustment.final_tier, Tier::Advanced);
    assert!(adjustment.premium_optional);
    let reason = adjustment.reason.expect("upgrade reason");
    assert!(reason.starts_with("High ACV of $200,000"));
    assert!(reason.contains("Premium may also be appropriate"));

    let last = adjustment.feature_delta.last().expect("suggestion present");
    assert_eq!(
        last,
        &FeatureChange {
            kind: FeatureChangeKind::Suggestion,
            feature: "Consider Premium for strategic partnership".to_string(),
        }
    );
    assert_eq!(last.to_string(), "Consider Premium for strategic partnership");
}

#[test]
fn premium_at_high_acv_is_unchanged() {
    let adjustment = apply_override(Tier::Premium, 400_000.0, &bands());

    assert_eq!(adjustment.final_tier, Tier::Premium);
    assert_eq!(adjustment.band, DealBand::High);
    assert!(adjustment.reason.is_none());
}

#[test]
fn boundary_labels_follow_catalog_values() {
    let mut catalog = PricingCatalog::standard();
    catalog.deal_bands.downgrade_max = 95_000.0;

    let adjustment = apply_override(Tier::Premium, 95_000.0, &catalog.deal_bands);
    assert!(adjustment
        .reason
        .expect("downgrade reason")
        .contains("(≤$95K)"));
}
