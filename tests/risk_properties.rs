//! Property-based tests for the flood risk scoring.

use proptest::prelude::*;

use tideline::risk::{
    calculate_flood_risk, get_flood_zone_classification, summarize_scenarios, FloodZone,
    RiskLevel,
};

// ============================================================
// Strategies
// ============================================================

fn elevation() -> impl Strategy<Value = f64> {
    -50.0f64..500.0
}

fn sea_level_rise() -> impl Strategy<Value = f64> {
    0.0f64..=10.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ============================================================
    // Buffer
    // ============================================================

    #[test]
    fn buffer_is_elevation_minus_rise(e in elevation(), slr in sea_level_rise()) {
        let risk = calculate_flood_risk(e, slr);
        prop_assert!((risk.buffer - (e - slr)).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn level_depends_only_on_buffer(e in elevation(), slr in sea_level_rise()) {
        let risk = calculate_flood_risk(e, slr);
        prop_assert_eq!(risk.level, RiskLevel::from_buffer(e - slr));
    }

    // ============================================================
    // Monotonicity
    // ============================================================

    #[test]
    fn lower_buffer_is_never_less_severe(b1 in -20.0f64..40.0, b2 in -20.0f64..40.0) {
        let (low, high) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
        let lower = calculate_flood_risk(low, 0.0);
        let higher = calculate_flood_risk(high, 0.0);
        prop_assert!(lower.level >= higher.level);
    }

    #[test]
    fn score_non_increasing_in_buffer(b1 in -20.0f64..40.0, b2 in -20.0f64..40.0) {
        let (low, high) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
        let lower = calculate_flood_risk(low, 0.0);
        let higher = calculate_flood_risk(high, 0.0);
        prop_assert!(lower.score >= higher.score, "score({})={} < score({})={}", low, lower.score, high, higher.score);
    }

    // ============================================================
    // Bands
    // ============================================================

    #[test]
    fn score_within_level_band(e in elevation(), slr in sea_level_rise()) {
        let risk = calculate_flood_risk(e, slr);
        let range = match risk.level {
            RiskLevel::Critical => 95u8..=100,
            RiskLevel::High => 70u8..=95,
            RiskLevel::Medium => 35u8..=70,
            RiskLevel::Low => 5u8..=35,
        };
        prop_assert!(range.contains(&risk.score), "{:?} scored {}", risk.level, risk.score);
    }

    #[test]
    fn advice_matches_level(e in elevation(), slr in sea_level_rise()) {
        let risk = calculate_flood_risk(e, slr);
        prop_assert_eq!(risk.title, risk.level.title());
        prop_assert_eq!(risk.advice, risk.level.advice());
        let expected_len = if risk.level == RiskLevel::Low { 5 } else { 6 };
        prop_assert_eq!(risk.advice.len(), expected_len);
    }

    #[test]
    fn total_over_any_input(e in any::<f64>(), slr in any::<f64>()) {
        let risk = calculate_flood_risk(e, slr);
        prop_assert!(risk.score <= 100);
    }

    // ============================================================
    // Flood zones and summary
    // ============================================================

    #[test]
    fn flood_zone_ignores_distance(e in elevation(), d in proptest::option::of(0.0f64..1000.0)) {
        prop_assert_eq!(
            get_flood_zone_classification(e, d),
            get_flood_zone_classification(e, None)
        );
    }

    #[test]
    fn summary_has_five_ascending_scenarios(e in elevation()) {
        let summary = summarize_scenarios(e);
        prop_assert_eq!(summary.len(), 5);
        for (i, entry) in summary.iter().enumerate() {
            prop_assert_eq!(entry.sea_level_rise as usize, i + 1);
            let expected = e - f64::from(entry.sea_level_rise);
            prop_assert!((entry.buffer - expected).abs() <= 0.005 + 1e-9);
            prop_assert_eq!(entry.risk_level, calculate_flood_risk(e, f64::from(entry.sea_level_rise)).level);
        }
    }
}

#[test]
fn test_documented_scenarios() {
    let cases = [
        (3.0, 5.0, RiskLevel::Critical, 97),
        (1.0, 0.5, RiskLevel::High, 88),
        (4.0, 1.0, RiskLevel::Medium, 58),
        (10.0, 1.0, RiskLevel::Low, 23),
    ];

    for (e, slr, level, score) in cases {
        let risk = calculate_flood_risk(e, slr);
        assert_eq!(risk.level, level, "elevation {} rise {}", e, slr);
        assert_eq!(risk.score, score, "elevation {} rise {}", e, slr);
    }
}

#[test]
fn test_score_ordering_across_bands() {
    let score = |buffer: f64| calculate_flood_risk(buffer, 0.0).score;
    assert!(score(-1.0) > score(0.0));
    assert!(score(0.0) > score(2.0));
    assert!(score(2.0) > score(5.0));
    assert!(score(5.0) > score(10.0));
}

#[test]
fn test_documented_flood_zones() {
    assert_eq!(get_flood_zone_classification(-1.0, Some(3.0)), FloodZone::V);
    assert_eq!(get_flood_zone_classification(7.0, None), FloodZone::XShaded);
    assert_eq!(get_flood_zone_classification(15.0, Some(0.1)), FloodZone::X);
}
