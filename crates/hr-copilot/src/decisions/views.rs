use super::context::EngagementContext;
use super::rules::{
    Priority, PromotionEligibility, RiskAssessment, SkillGapReport, SkillRecommendation,
    TeamStructure,
};
use crate::actions::{EngagementActionRecommendation, FollowUp};
use crate::engagement::EngagementLevel;
use crate::facts::{EmployeeId, EmployeeSnapshot, SkillSet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the rules say about one employee at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub employee_id: EmployeeId,
    pub employee: EmployeeSnapshot,
    pub skills: SkillSet,
    pub promotion_eligible: PromotionEligibility,
    pub skill_recommendations: SkillRecommendation,
    pub engagement_analysis: Option<EngagementContext>,
    pub engagement_actions: Option<EngagementActionRecommendation>,
    pub assessed_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentState {
    pub skills: SkillSet,
    pub engagement: Option<EngagementLevel>,
    pub promotion_eligible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlannedAction {
    SkillDevelopment {
        skills: Vec<String>,
        priority: Priority,
        timeline: &'static str,
    },
    EngagementAction {
        actions: Vec<&'static str>,
        priority: Priority,
        timeline: &'static str,
    },
    PromotionPathway {
        target_role: String,
        timeline: &'static str,
    },
}

impl PlannedAction {
    pub fn kind(&self) -> &'static str {
        match self {
            PlannedAction::SkillDevelopment { .. } => "skill_development",
            PlannedAction::EngagementAction { .. } => "engagement_action",
            PlannedAction::PromotionPathway { .. } => "promotion_pathway",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPlan {
    pub employee_id: EmployeeId,
    pub employee: EmployeeSnapshot,
    pub current_state: CurrentState,
    pub planned_actions: Vec<PlannedAction>,
    pub timeline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationalAnalytics {
    pub team_structure: TeamStructure,
    pub skill_gaps: SkillGapReport,
    pub analyzed_on: NaiveDate,
}

/// Which strategic question to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision_type", rename_all = "snake_case")]
pub enum StrategicRequest {
    Promotion { employee_id: EmployeeId },
    SkillDevelopment { employee_id: EmployeeId },
    OrganizationalHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionVerdict {
    Promote,
    DoNotPromote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicActionKind {
    HireExternalExpert,
    DevelopInternalTalent,
    EstablishReportingStructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategicAction {
    pub action: StrategicActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision_type", rename_all = "snake_case")]
pub enum StrategicDecision {
    Promotion {
        decision: PromotionVerdict,
        reason: String,
        confidence: Option<f64>,
        employee: EmployeeSnapshot,
        details: Box<Assessment>,
    },
    SkillDevelopment {
        decision: &'static str,
        recommendations: SkillRecommendation,
        employee: EmployeeSnapshot,
        priority: Priority,
    },
    OrganizationalStrategy {
        strategic_decisions: Vec<StrategicAction>,
        analytics: OrganizationalAnalytics,
    },
}

/// Quick risk read for an id whose engagement came from the survey. `employee` is
/// absent when the id is not on the org chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triage {
    pub employee_id: EmployeeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSnapshot>,
    pub engagement: EngagementLevel,
    pub risk: RiskAssessment,
    pub follow_up: FollowUp,
}
