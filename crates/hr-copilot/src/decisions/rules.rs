use crate::engagement::EngagementLevel;
use crate::facts::{
    EmployeeId, EmployeeLevel, EmployeeSnapshot, Proficiency, ReportingLine, SkillCoverage,
    SkillSet,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared priority scale for risks, recommendations and gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    Burnout,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk: RiskKind,
    pub priority: Priority,
    pub confidence: f64,
}

/// Burnout risk from engagement alone. `Medium` and `High` are deliberately not
/// distinguished.
pub fn assess_risk(engagement: EngagementLevel) -> RiskAssessment {
    match engagement {
        EngagementLevel::Low => RiskAssessment {
            risk: RiskKind::Burnout,
            priority: Priority::High,
            confidence: 0.7,
        },
        EngagementLevel::Medium | EngagementLevel::High => RiskAssessment {
            risk: RiskKind::None,
            priority: Priority::Low,
            confidence: 0.9,
        },
    }
}

/// Minimum advanced skills a level needs before promotion is recommended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromotionRule {
    pub level: EmployeeLevel,
    pub advanced_skills_required: usize,
    pub confidence: f64,
}

pub const PROMOTION_RULES: [PromotionRule; 2] = [
    PromotionRule {
        level: EmployeeLevel::Senior,
        advanced_skills_required: 2,
        confidence: 0.85,
    },
    PromotionRule {
        level: EmployeeLevel::Manager,
        advanced_skills_required: 1,
        confidence: 0.7,
    },
];

const INELIGIBLE_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionEligibility {
    pub eligible: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub advanced_skills: usize,
}

impl PromotionEligibility {
    pub fn not_found() -> Self {
        Self {
            eligible: false,
            reason: "Employee not found".to_string(),
            confidence: None,
            advanced_skills: 0,
        }
    }
}

fn skill_noun(count: usize) -> &'static str {
    if count == 1 {
        "skill"
    } else {
        "skills"
    }
}

pub fn assess_promotion(employee: &EmployeeSnapshot, skills: &SkillSet) -> PromotionEligibility {
    let advanced = skills
        .values()
        .filter(|level| **level == Proficiency::Advanced)
        .count();

    let rule = PROMOTION_RULES
        .iter()
        .find(|rule| rule.level == employee.level);

    match rule {
        Some(rule) if advanced >= rule.advanced_skills_required => PromotionEligibility {
            eligible: true,
            reason: format!(
                "{} level with {} advanced {} meets the requirement of {}",
                employee.level,
                advanced,
                skill_noun(advanced),
                rule.advanced_skills_required
            ),
            confidence: Some(rule.confidence),
            advanced_skills: advanced,
        },
        Some(rule) => PromotionEligibility {
            eligible: false,
            reason: format!(
                "{} level with {} advanced {}; {} required for promotion",
                employee.level,
                advanced,
                skill_noun(advanced),
                rule.advanced_skills_required
            ),
            confidence: Some(INELIGIBLE_CONFIDENCE),
            advanced_skills: advanced,
        },
        None => PromotionEligibility {
            eligible: false,
            reason: format!(
                "{} level with {} advanced {} is not on a promotion track",
                employee.level,
                advanced,
                skill_noun(advanced)
            ),
            confidence: Some(INELIGIBLE_CONFIDENCE),
            advanced_skills: advanced,
        },
    }
}

/// Skills each role is expected to hold.
const ROLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    ("Software Engineer", &["Python", "Neo4j"]),
    ("Engineering Manager", &["Leadership", "Python"]),
    ("HR Manager", &["Recruitment", "Leadership"]),
    ("Sales Executive", &["Negotiation", "Leadership"]),
];

pub fn required_skills(role: &str) -> &'static [&'static str] {
    ROLE_REQUIREMENTS
        .iter()
        .find(|(title, _)| *title == role)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub employee_id: EmployeeId,
    pub role: Option<String>,
    pub current_skills: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub priority: Priority,
}

pub fn recommend_skills(employee: &EmployeeSnapshot, skills: &SkillSet) -> SkillRecommendation {
    let required = employee
        .role
        .as_deref()
        .map(required_skills)
        .unwrap_or(&[]);

    let recommended_skills: Vec<String> = required
        .iter()
        .filter(|skill| !skills.contains_key(**skill))
        .map(|skill| skill.to_string())
        .collect();

    let priority = if recommended_skills.len() >= 2 {
        Priority::High
    } else {
        Priority::Medium
    };

    SkillRecommendation {
        employee_id: employee.id.clone(),
        role: employee.role.clone(),
        current_skills: skills.keys().cloned().collect(),
        recommended_skills,
        priority,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStructure {
    pub reporting_lines: Vec<ReportingLine>,
    pub total_reports: usize,
}

pub fn team_structure(reporting_lines: Vec<ReportingLine>) -> TeamStructure {
    let total_reports = reporting_lines.len();
    TeamStructure {
        reporting_lines,
        total_reports,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub experts: usize,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub critical_skill_gaps: Vec<SkillGap>,
    pub total_gaps: usize,
}

/// Skills with fewer than two advanced holders, ordered by skill name.
pub fn skill_gaps(coverage: &[SkillCoverage]) -> SkillGapReport {
    let mut gaps: Vec<SkillGap> = coverage
        .iter()
        .filter_map(|entry| {
            let priority = match entry.advanced_holders {
                0 => Priority::Critical,
                1 => Priority::High,
                _ => return None,
            };
            Some(SkillGap {
                skill: entry.skill.clone(),
                experts: entry.advanced_holders,
                priority,
            })
        })
        .collect();
    gaps.sort_by(|a, b| a.skill.cmp(&b.skill));

    let total_gaps = gaps.len();
    SkillGapReport {
        critical_skill_gaps: gaps,
        total_gaps,
    }
}
