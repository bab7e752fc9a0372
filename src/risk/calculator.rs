//! Flood risk scoring from elevation and a sea level rise scenario.

use serde::Serialize;

/// Risk levels, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify a buffer (meters above projected sea level).
    ///
    /// Bands are checked most severe first, so NaN falls through to `Low`.
    pub fn from_buffer(buffer: f64) -> Self {
        if buffer < 0.0 {
            RiskLevel::Critical
        } else if buffer < 2.0 {
            RiskLevel::High
        } else if buffer < 5.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical Risk",
        }
    }

    /// Fixed guidance for this level, most urgent first.
    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => LOW_ADVICE,
            RiskLevel::Medium => MEDIUM_ADVICE,
            RiskLevel::High => HIGH_ADVICE,
            RiskLevel::Critical => CRITICAL_ADVICE,
        }
    }

    /// Score in [0, 100] for a buffer that falls inside this level's band.
    fn score(&self, buffer: f64) -> u8 {
        let score = match self {
            // 95-100 depending on how far below the new sea level
            RiskLevel::Critical => 95.0 + buffer.abs().min(5.0).floor(),
            // 70-95
            RiskLevel::High => 70.0 + ((2.0 - buffer) * 12.5).floor(),
            // 35-70
            RiskLevel::Medium => 35.0 + ((5.0 - buffer) * 11.67).floor(),
            // 5-35
            RiskLevel::Low => (35.0 - ((buffer - 5.0) * 3.0).floor()).max(5.0),
        };
        score.clamp(0.0, 100.0) as u8
    }

    fn describe(&self, sea_level_rise: f64, buffer: f64) -> String {
        let slr = format_meters(sea_level_rise);
        match self {
            RiskLevel::Critical => format!(
                "With {}m of sea level rise, this property would be {:.1}m below the new \
                 sea level. Permanent inundation is highly likely without significant \
                 flood defenses.",
                slr,
                buffer.abs()
            ),
            RiskLevel::High => format!(
                "With {}m of sea level rise, this property would only be {:.1}m above sea \
                 level. High risk of flooding during storm surges and high tides.",
                slr, buffer
            ),
            RiskLevel::Medium => format!(
                "With {}m of sea level rise, this property would be {:.1}m above sea \
                 level. Moderate risk during extreme weather events and storm surges.",
                slr, buffer
            ),
            RiskLevel::Low => format!(
                "With {}m of sea level rise, this property would remain {:.1}m above sea \
                 level. Low direct flood risk, though indirect effects may still occur.",
                slr, buffer
            ),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

const CRITICAL_ADVICE: &[&str] = &[
    "Consider relocating to higher ground if possible",
    "Consult with local authorities about flood protection infrastructure",
    "Investigate property buyout or managed retreat programs",
    "Ensure comprehensive flood insurance coverage",
    "Develop an emergency evacuation plan",
    "Monitor local climate adaptation planning efforts",
];

const HIGH_ADVICE: &[&str] = &[
    "Install flood barriers and water-resistant building materials",
    "Raise electrical systems and HVAC above potential flood levels",
    "Obtain comprehensive flood insurance",
    "Create an emergency kit and evacuation plan",
    "Consider elevating the structure if feasible",
    "Install sump pumps and backflow valves",
];

const MEDIUM_ADVICE: &[&str] = &[
    "Consider flood insurance for storm surge protection",
    "Install basic flood-proofing measures",
    "Keep important documents in waterproof containers",
    "Know your evacuation routes",
    "Stay informed about local flood warning systems",
    "Maintain property drainage systems",
];

const LOW_ADVICE: &[&str] = &[
    "Stay informed about regional climate adaptation plans",
    "Consider how sea level rise may affect local infrastructure",
    "Basic emergency preparedness is still recommended",
    "Monitor changes in local flood zone designations",
    "Be aware of potential impacts on property values in affected areas",
];

/// Flood risk for one property under one sea level rise scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub title: &'static str,
    /// 0-100, higher is worse
    pub score: u8,
    /// Meters above projected sea level, rounded to centimeters
    pub buffer: f64,
    pub description: String,
    pub advice: &'static [&'static str],
}

/// Assess flood risk for a property.
///
/// `elevation` is meters above mean sea level, `sea_level_rise` the projected
/// rise in meters. Total over all inputs: nothing here rejects a value.
pub fn calculate_flood_risk(elevation: f64, sea_level_rise: f64) -> RiskAssessment {
    let buffer = elevation - sea_level_rise;
    let level = RiskLevel::from_buffer(buffer);

    RiskAssessment {
        level,
        title: level.title(),
        score: level.score(buffer),
        buffer: round_to_centimeters(buffer),
        description: level.describe(sea_level_rise, buffer),
        advice: level.advice(),
    }
}

/// Two decimals, exact halves to even (0.125 -> 0.12).
pub(crate) fn round_to_centimeters(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Renders like a float literal: whole numbers keep one decimal ("2.0"),
/// magnitudes below 1e-4 or from 1e16 up use a signed two-digit exponent
/// ("1e-05", "1.5e+16").
fn format_meters(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() || value == 0.0 {
        return format!("{:.1}", value);
    }

    let magnitude = value.abs();
    if !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
