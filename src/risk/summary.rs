//! Multi-scenario overview for a single elevation.

use serde::Serialize;

use super::calculator::{calculate_flood_risk, round_to_centimeters, RiskLevel};

/// Sea level rise scenarios (meters) covered by the summary, ascending.
pub const SUMMARY_SCENARIOS: [u8; 5] = [1, 2, 3, 4, 5];

/// Abbreviated assessment for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub sea_level_rise: u8,
    pub buffer: f64,
    pub risk_level: RiskLevel,
    pub risk_title: &'static str,
}

pub fn summarize_scenarios(elevation: f64) -> Vec<ScenarioSummary> {
    SUMMARY_SCENARIOS
        .iter()
        .map(|&slr| {
            let risk = calculate_flood_risk(elevation, f64::from(slr));
            ScenarioSummary {
                sea_level_rise: slr,
                buffer: round_to_centimeters(elevation - f64::from(slr)),
                risk_level: risk.level,
                risk_title: risk.title,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_ascending_scenarios() {
        let summary = summarize_scenarios(3.5);
        let slrs: Vec<u8> = summary.iter().map(|s| s.sea_level_rise).collect();
        assert_eq!(slrs, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_levels_follow_buffer() {
        let summary = summarize_scenarios(3.5);
        let levels: Vec<RiskLevel> = summary.iter().map(|s| s.risk_level).collect();
        assert_eq!(
            levels,
            vec![
                RiskLevel::Medium,
                RiskLevel::High,
                RiskLevel::High,
                RiskLevel::Critical,
                RiskLevel::Critical,
            ]
        );
        assert_eq!(summary[0].risk_title, "Medium Risk");
    }

    #[test]
    fn test_buffers_rounded() {
        let summary = summarize_scenarios(2.3456);
        assert_eq!(summary[0].buffer, 1.35);
        assert_eq!(summary[4].buffer, -2.65);
    }

    #[test]
    fn test_buffer_halves_round_to_even() {
        // 0.875 - 1 = -0.125 exactly
        assert_eq!(summarize_scenarios(0.875)[0].buffer, -0.12);
        assert_eq!(summarize_scenarios(2.125)[1].buffer, 0.12);
    }

    #[test]
    fn test_serialized_entry() {
        let value = serde_json::to_value(&summarize_scenarios(10.0)[0]).unwrap();
        assert_eq!(value["sea_level_rise"], 1);
        assert_eq!(value["buffer"], 9.0);
        assert_eq!(value["risk_level"], "low");
        assert_eq!(value["risk_title"], "Low Risk");
    }
}
