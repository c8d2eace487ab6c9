use super::rules::PromotionEligibility;
use crate::engagement::EngagementLevel;
use crate::facts::{EmployeeId, EmployeeLevel, EmployeeSnapshot, SkillSet};
use serde::Serialize;

/// Engagement read against what the organisation knows about the employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementContext {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub level: EmployeeLevel,
    pub engagement: EngagementLevel,
    pub interpretation: &'static str,
    pub skill_count: usize,
    pub promotion_eligible: bool,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
}

pub(crate) fn analyze_context(
    employee: &EmployeeSnapshot,
    skills: &SkillSet,
    promotion: &PromotionEligibility,
    engagement: EngagementLevel,
) -> EngagementContext {
    let skill_count = skills.len();
    let mut risk_factors = Vec::new();
    let mut opportunities = Vec::new();

    match (engagement, employee.level) {
        (EngagementLevel::Low, level) => {
            risk_factors.push("High burnout risk - immediate intervention needed".to_string());
            if level == EmployeeLevel::Senior {
                risk_factors.push(
                    "Attrition risk - losing a senior employee would leave a knowledge gap"
                        .to_string(),
                );
            }
        }
        (EngagementLevel::Medium, EmployeeLevel::Senior) => {
            risk_factors
                .push("Senior employee with moderate engagement - monitor closely".to_string());
        }
        _ => {}
    }

    if engagement == EngagementLevel::High && promotion.eligible {
        opportunities
            .push("Promotion candidate - high engagement and eligible for advancement".to_string());
    }

    if engagement == EngagementLevel::High && skill_count >= 2 {
        opportunities.push(format!(
            "Potential mentor - can share expertise across {skill_count} skills"
        ));
    }

    if engagement == EngagementLevel::Low && skill_count >= 2 {
        opportunities.push(
            "Assign a skill-development project that puts existing expertise to work".to_string(),
        );
    }

    EngagementContext {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        level: employee.level,
        engagement,
        interpretation: engagement.interpretation(),
        skill_count,
        promotion_eligible: promotion.eligible,
        risk_factors,
        opportunities,
    }
}
