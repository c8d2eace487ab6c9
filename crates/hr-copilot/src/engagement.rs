//! Survey score to engagement level classification.

use crate::facts::EmployeeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical engagement derived from a numeric survey score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub fn ordered() -> [EngagementLevel; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "low",
            EngagementLevel::Medium => "medium",
            EngagementLevel::High => "high",
        }
    }

    /// Short feature description shown next to survey results.
    pub fn description(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "Employee shows disengagement",
            EngagementLevel::Medium => "Employee is neutral",
            EngagementLevel::High => "Employee is engaged",
        }
    }

    /// HR interpretation used by the context analyzer.
    pub fn interpretation(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "At-risk, requires intervention",
            EngagementLevel::Medium => "Stable, normal performance",
            EngagementLevel::High => "Highly motivated, potential leader",
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown engagement level '{0}' (expected low, medium or high)")]
pub struct EngagementParseError(pub String);

impl FromStr for EngagementLevel {
    type Err = EngagementParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(EngagementParseError(value.to_string())),
        }
    }
}

/// Maps a survey score onto an engagement level. Never fails.
///
/// Scores at or below 2 are `Low`, exactly 3 is `Medium`, and everything else
/// (including fractional scores between 2 and 3, and NaN) is `High`.
pub fn classify(score: f64) -> EngagementLevel {
    if score <= 2.0 {
        EngagementLevel::Low
    } else if score == 3.0 {
        EngagementLevel::Medium
    } else {
        EngagementLevel::High
    }
}

/// One ingested survey row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub employee_id: u32,
    pub score: f64,
}

/// A survey row with its derived engagement column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementRecord {
    pub employee_id: EmployeeId,
    pub score: f64,
    pub engagement: EngagementLevel,
}

/// Applies [`classify`] across the whole dataset, preserving row order.
pub fn compute_engagement(responses: &[SurveyResponse]) -> Vec<EngagementRecord> {
    responses
        .iter()
        .map(|response| EngagementRecord {
            employee_id: EmployeeId::from_survey(response.employee_id),
            score: response.score,
            engagement: classify(response.score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_score_thresholds() {
        for score in [-4.0, 0.0, 1.0, 1.5, 2.0] {
            assert_eq!(classify(score), EngagementLevel::Low, "score {score}");
        }
        assert_eq!(classify(3.0), EngagementLevel::Medium);
        for score in [3.01, 4.0, 5.0, 42.0] {
            assert_eq!(classify(score), EngagementLevel::High, "score {score}");
        }
    }

    #[test]
    fn classify_never_panics_on_degenerate_scores() {
        assert_eq!(classify(f64::NAN), EngagementLevel::High);
        assert_eq!(classify(f64::NEG_INFINITY), EngagementLevel::Low);
        assert_eq!(classify(f64::INFINITY), EngagementLevel::High);
    }

    #[test]
    fn parse_rejects_unknown_levels() {
        assert_eq!("Low".parse::<EngagementLevel>(), Ok(EngagementLevel::Low));
        assert_eq!(
            " medium ".parse::<EngagementLevel>(),
            Ok(EngagementLevel::Medium)
        );
        let err = "ecstatic".parse::<EngagementLevel>().unwrap_err();
        assert!(err.to_string().contains("ecstatic"));
    }

    #[test]
    fn descriptions_name_each_level() {
        assert_eq!(
            EngagementLevel::Low.description(),
            "Employee shows disengagement"
        );
        assert_eq!(EngagementLevel::Medium.description(), "Employee is neutral");
        assert_eq!(EngagementLevel::High.description(), "Employee is engaged");
    }

    #[test]
    fn compute_engagement_adds_column_in_order() {
        let responses = vec![
            SurveyResponse {
                employee_id: 1,
                score: 2.0,
            },
            SurveyResponse {
                employee_id: 2,
                score: 3.0,
            },
            SurveyResponse {
                employee_id: 3,
                score: 5.0,
            },
        ];

        let records = compute_engagement(&responses);

        let levels: Vec<_> = records.iter().map(|record| record.engagement).collect();
        assert_eq!(
            levels,
            vec![
                EngagementLevel::Low,
                EngagementLevel::Medium,
                EngagementLevel::High
            ]
        );
        assert_eq!(records[0].employee_id, EmployeeId::new("E1"));
    }
}
