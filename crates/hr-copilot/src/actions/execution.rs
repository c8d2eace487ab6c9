use super::catalog::{
    ActionKind, ActionTemplate, Urgency, HIRE_EXTERNAL, KNOWLEDGE_TRANSFER, ONE_ON_ONE_MEETING,
    PROMOTION, SKILL_DEVELOPMENT, TRAINING_PROGRAM,
};
use crate::decisions::{Priority, PromotionEligibility, SkillGap};
use crate::engagement::EngagementLevel;
use crate::facts::EmployeeId;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

const REPORT_REVIEW_DAYS: i64 = 30;
const PROMOTION_REVIEW_DAYS: i64 = 90;
const DEFAULT_PROMOTION_CONFIDENCE: f64 = 0.8;

/// One concrete intervention, optionally backed by a catalog template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub reason: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub template: Option<&'static ActionTemplate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_approvals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<NaiveDate>,
}

impl ActionRecord {
    fn new(kind: ActionKind, target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            urgency: None,
            reason: reason.into(),
            template: None,
            action_items: Vec::new(),
            frequency: None,
            estimated_timeline: None,
            training_type: None,
            required_approvals: Vec::new(),
            next_review_date: None,
        }
    }

    fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    fn template(mut self, template: &'static ActionTemplate) -> Self {
        self.template = Some(template);
        self
    }

    fn items(mut self, items: &[&str]) -> Self {
        self.action_items = items.iter().map(|item| item.to_string()).collect();
        self
    }

    fn timeline(mut self, timeline: &str) -> Self {
        self.estimated_timeline = Some(timeline.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    PendingApproval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementActionBatch {
    pub employee_id: EmployeeId,
    pub engagement_level: EngagementLevel,
    pub recommended_actions: Vec<ActionRecord>,
    pub execution_date: NaiveDate,
    pub status: ExecutionStatus,
}

pub fn execute_engagement_action(
    employee_id: &EmployeeId,
    engagement: EngagementLevel,
    today: NaiveDate,
) -> EngagementActionBatch {
    let target = employee_id.to_string();
    let recommended_actions = match engagement {
        EngagementLevel::Low => vec![
            ActionRecord::new(
                ActionKind::OneOnOneMeeting,
                target.as_str(),
                "High burnout risk - needs intervention",
            )
            .urgency(Urgency::Immediate)
            .template(&ONE_ON_ONE_MEETING),
            ActionRecord::new(
                ActionKind::WorkloadReview,
                target.as_str(),
                "Assess and rebalance workload",
            )
            .urgency(Urgency::Immediate)
            .items(&[
                "Review current projects",
                "Identify bottlenecks",
                "Rebalance priorities",
            ]),
        ],
        EngagementLevel::Medium => {
            let mut check = ActionRecord::new(
                ActionKind::EngagementCheck,
                target.as_str(),
                "Monitor for further decline",
            )
            .urgency(Urgency::High);
            check.frequency = Some("bi-weekly".to_string());
            vec![
                check,
                ActionRecord::new(
                    ActionKind::GrowthOpportunity,
                    target.as_str(),
                    "Provide new challenges",
                )
                .urgency(Urgency::Medium)
                .template(&SKILL_DEVELOPMENT),
            ]
        }
        EngagementLevel::High => vec![
            ActionRecord::new(
                ActionKind::Recognition,
                target.as_str(),
                "Recognize and reward high engagement",
            )
            .urgency(Urgency::High)
            .items(&[
                "Public recognition",
                "Bonus/raise consideration",
                "Leadership opportunity",
            ]),
            ActionRecord::new(
                ActionKind::Retention,
                target.as_str(),
                "Ensure retention of top performer",
            )
            .urgency(Urgency::Medium)
            .items(&[
                "Career development discussion",
                "Advancement pathway",
                "Mentorship opportunity",
            ]),
        ],
    };

    EngagementActionBatch {
        employee_id: employee_id.clone(),
        engagement_level: engagement,
        recommended_actions,
        execution_date: today,
        status: ExecutionStatus::PendingApproval,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillActionBatch {
    pub skill: String,
    pub priority: Priority,
    pub recommended_actions: Vec<ActionRecord>,
    pub execution_date: NaiveDate,
    pub status: ExecutionStatus,
}

pub fn execute_skill_action(gap: &SkillGap, today: NaiveDate) -> SkillActionBatch {
    let skill = gap.skill.as_str();
    let recommended_actions = match gap.priority {
        Priority::Critical => {
            let mut training = ActionRecord::new(
                ActionKind::EmergencyTraining,
                skill,
                "Urgent need for internal capability",
            )
            .urgency(Urgency::Critical);
            training.training_type = Some("accelerated".to_string());
            vec![
                ActionRecord::new(
                    ActionKind::HireExternal,
                    skill,
                    format!("No internal experts in {skill}"),
                )
                .urgency(Urgency::Critical)
                .template(&HIRE_EXTERNAL)
                .timeline("2-4 weeks"),
                training,
            ]
        }
        Priority::High => vec![
            ActionRecord::new(
                ActionKind::TrainingProgram,
                skill,
                format!("Limited expertise in {skill}"),
            )
            .urgency(Urgency::High)
            .template(&TRAINING_PROGRAM)
            .timeline("30-60 days"),
            ActionRecord::new(
                ActionKind::KnowledgeTransfer,
                skill,
                "Share knowledge among team members",
            )
            .urgency(Urgency::High)
            .template(&KNOWLEDGE_TRANSFER),
        ],
        Priority::Medium | Priority::Low => vec![ActionRecord::new(
            ActionKind::TrainingProgram,
            skill,
            format!("Develop internal capability in {skill}"),
        )
        .urgency(Urgency::Medium)
        .timeline("60-90 days")],
    };

    SkillActionBatch {
        skill: gap.skill.clone(),
        priority: gap.priority,
        recommended_actions,
        execution_date: today,
        status: ExecutionStatus::PendingApproval,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionActionBatch {
    pub employee_id: EmployeeId,
    pub promotion_eligible: bool,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub recommended_actions: Vec<ActionRecord>,
    pub execution_date: NaiveDate,
    pub status: ExecutionStatus,
}

pub fn execute_promotion_action(
    employee_id: &EmployeeId,
    eligibility: &PromotionEligibility,
    today: NaiveDate,
) -> PromotionActionBatch {
    if !eligibility.eligible {
        let mut development = ActionRecord::new(
            ActionKind::SkillDevelopment,
            String::new(),
            eligibility.reason.as_str(),
        );
        development.next_review_date = Some(today + Duration::days(PROMOTION_REVIEW_DAYS));

        return PromotionActionBatch {
            employee_id: employee_id.clone(),
            promotion_eligible: false,
            reason: eligibility.reason.clone(),
            confidence: None,
            recommended_actions: vec![development],
            execution_date: today,
            status: ExecutionStatus::PendingApproval,
        };
    }

    let target = employee_id.to_string();
    let mut promotion = ActionRecord::new(
        ActionKind::Promotion,
        target.as_str(),
        eligibility.reason.as_str(),
    )
    .urgency(Urgency::High)
    .template(&PROMOTION);
    promotion.required_approvals = ["HR Manager", "Department Head", "Executive Leadership"]
        .iter()
        .map(|approver| approver.to_string())
        .collect();

    let transition = ActionRecord::new(
        ActionKind::RoleTransition,
        target.as_str(),
        "Support successful transition to new role",
    )
    .urgency(Urgency::High)
    .items(&[
        "Prepare new position briefing",
        "Arrange executive coaching",
        "Plan team introduction",
        "Set 30-60-90 day goals",
    ]);

    PromotionActionBatch {
        employee_id: employee_id.clone(),
        promotion_eligible: true,
        reason: eligibility.reason.clone(),
        confidence: Some(
            eligibility
                .confidence
                .unwrap_or(DEFAULT_PROMOTION_CONFIDENCE),
        ),
        recommended_actions: vec![promotion, transition],
        execution_date: today,
        status: ExecutionStatus::PendingApproval,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActionSummary {
    pub total_actions: usize,
    pub immediate: usize,
    pub high_priority: usize,
    pub critical: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceRequirements {
    pub budget_items: usize,
    pub approvals_required: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionExecutionReport {
    pub employee_id: EmployeeId,
    pub report_date: NaiveDate,
    pub action_summary: ActionSummary,
    pub resource_requirements: ResourceRequirements,
    pub actions: Vec<ActionRecord>,
    pub next_review_date: NaiveDate,
}

/// Summarises urgency and resource needs. Budget and approval counts come from the
/// catalog entry of each action's kind, not from any template embedded in the record.
pub fn generate_action_execution_report(
    employee_id: &EmployeeId,
    actions: Vec<ActionRecord>,
    today: NaiveDate,
) -> ActionExecutionReport {
    let mut summary = ActionSummary {
        total_actions: actions.len(),
        ..ActionSummary::default()
    };
    let mut resources = ResourceRequirements::default();

    for action in &actions {
        match action.urgency {
            Some(Urgency::Immediate) => summary.immediate += 1,
            Some(Urgency::High) => summary.high_priority += 1,
            Some(Urgency::Critical) => summary.critical += 1,
            Some(Urgency::Medium) | None => {}
        }
        if action.kind.requires_budget() {
            resources.budget_items += 1;
        }
        if action.kind.requires_approval() {
            resources.approvals_required += 1;
        }
    }

    ActionExecutionReport {
        employee_id: employee_id.clone(),
        report_date: today,
        action_summary: summary,
        resource_requirements: resources,
        actions,
        next_review_date: today + Duration::days(REPORT_REVIEW_DAYS),
    }
}

/// Decision outputs to turn into a single execution report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionInputs {
    #[serde(default)]
    pub engagement: Option<EngagementLevel>,
    #[serde(default)]
    pub promotion_eligible: Option<PromotionEligibility>,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
}

pub fn execute_comprehensive_action_plan(
    employee_id: &EmployeeId,
    inputs: &ActionInputs,
    today: NaiveDate,
) -> ActionExecutionReport {
    let mut actions = Vec::new();

    if let Some(engagement) = inputs.engagement {
        actions.extend(
            execute_engagement_action(employee_id, engagement, today).recommended_actions,
        );
    }

    if let Some(eligibility) = &inputs.promotion_eligible {
        actions.extend(
            execute_promotion_action(employee_id, eligibility, today).recommended_actions,
        );
    }

    for gap in &inputs.skill_gaps {
        actions.extend(execute_skill_action(gap, today).recommended_actions);
    }

    generate_action_execution_report(employee_id, actions, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date")
    }

    fn gap(skill: &str, experts: usize, priority: Priority) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            experts,
            priority,
        }
    }

    #[test]
    fn low_engagement_triggers_immediate_intervention() {
        let batch = execute_engagement_action(&"E1".into(), EngagementLevel::Low, today());

        let kinds: Vec<_> = batch.recommended_actions.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![ActionKind::OneOnOneMeeting, ActionKind::WorkloadReview]
        );
        assert!(batch
            .recommended_actions
            .iter()
            .all(|action| action.urgency == Some(Urgency::Immediate)));
        assert_eq!(batch.status, ExecutionStatus::PendingApproval);
        assert_eq!(batch.recommended_actions[0].target, "E1");
    }

    #[test]
    fn medium_engagement_schedules_biweekly_checks() {
        let batch = execute_engagement_action(&"E1".into(), EngagementLevel::Medium, today());

        assert_eq!(
            batch.recommended_actions[0].frequency.as_deref(),
            Some("bi-weekly")
        );
        assert_eq!(
            batch.recommended_actions[1].template.map(|t| t.description),
            Some(SKILL_DEVELOPMENT.description)
        );
    }

    #[test]
    fn high_engagement_recognizes_and_retains() {
        let batch = execute_engagement_action(&"E2".into(), EngagementLevel::High, today());

        let actions = &batch.recommended_actions;
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].kind, ActionKind::Recognition);
        assert_eq!(actions[0].urgency, Some(Urgency::High));
        assert_eq!(
            actions[0].action_items,
            vec![
                "Public recognition",
                "Bonus/raise consideration",
                "Leadership opportunity"
            ]
        );
        assert_eq!(actions[1].kind, ActionKind::Retention);
        assert_eq!(actions[1].urgency, Some(Urgency::Medium));
        assert_eq!(actions[1].reason, "Ensure retention of top performer");
        assert_eq!(
            actions[1].action_items,
            vec![
                "Career development discussion",
                "Advancement pathway",
                "Mentorship opportunity"
            ]
        );
        assert_eq!(batch.engagement_level, EngagementLevel::High);
    }

    #[test]
    fn critical_gap_hires_and_trains() {
        let batch = execute_skill_action(&gap("Neo4j", 0, Priority::Critical), today());

        assert_eq!(batch.recommended_actions.len(), 2);
        assert_eq!(batch.recommended_actions[0].kind, ActionKind::HireExternal);
        assert_eq!(batch.recommended_actions[0].reason, "No internal experts in Neo4j");
        assert_eq!(
            batch.recommended_actions[1].training_type.as_deref(),
            Some("accelerated")
        );
    }

    #[test]
    fn lower_priority_gap_falls_back_to_training() {
        let batch = execute_skill_action(&gap("Negotiation", 0, Priority::Medium), today());

        assert_eq!(batch.recommended_actions.len(), 1);
        assert_eq!(batch.recommended_actions[0].urgency, Some(Urgency::Medium));
        assert_eq!(
            batch.recommended_actions[0].estimated_timeline.as_deref(),
            Some("60-90 days")
        );
    }

    #[test]
    fn ineligible_promotion_schedules_review() {
        let eligibility = PromotionEligibility {
            eligible: false,
            reason: "Junior level with 0 advanced skills is not on a promotion track".into(),
            confidence: Some(0.9),
            advanced_skills: 0,
        };

        let batch = execute_promotion_action(&"E4".into(), &eligibility, today());

        assert!(!batch.promotion_eligible);
        assert_eq!(batch.recommended_actions.len(), 1);
        let action = &batch.recommended_actions[0];
        assert_eq!(action.kind, ActionKind::SkillDevelopment);
        assert_eq!(action.urgency, None);
        assert_eq!(
            action.next_review_date,
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
    }

    #[test]
    fn eligible_promotion_requires_three_approvals() {
        let eligibility = PromotionEligibility {
            eligible: true,
            reason: "Manager level with 1 advanced skill meets the requirement of 1".into(),
            confidence: None,
            advanced_skills: 1,
        };

        let batch = execute_promotion_action(&"E2".into(), &eligibility, today());

        assert_eq!(batch.confidence, Some(0.8));
        assert_eq!(batch.recommended_actions[0].required_approvals.len(), 3);
        assert_eq!(batch.recommended_actions[1].action_items.len(), 4);
    }

    #[test]
    fn report_counts_budget_and_approvals_from_catalog() {
        let hire = ActionRecord::new(ActionKind::HireExternal, "Neo4j", "No experts")
            .urgency(Urgency::Critical);

        let report = generate_action_execution_report(&"E1".into(), vec![hire], today());

        assert_eq!(report.resource_requirements.budget_items, 1);
        assert_eq!(report.resource_requirements.approvals_required, 1);
        assert_eq!(report.action_summary.critical, 1);
        assert_eq!(report.action_summary.total_actions, 1);
        assert_eq!(report.next_review_date, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
    }

    #[test]
    fn comprehensive_plan_collects_every_source() {
        let inputs = ActionInputs {
            engagement: Some(EngagementLevel::Low),
            promotion_eligible: Some(PromotionEligibility::not_found()),
            skill_gaps: vec![
                gap("Neo4j", 0, Priority::Critical),
                gap("Python", 1, Priority::High),
            ],
        };

        let report = execute_comprehensive_action_plan(&"E1".into(), &inputs, today());

        assert_eq!(report.action_summary.total_actions, 7);
        assert_eq!(report.action_summary.immediate, 2);
        assert_eq!(report.action_summary.critical, 2);
        assert_eq!(report.action_summary.high_priority, 2);
        // skill_development, hire_external and training_program need budget.
        assert_eq!(report.resource_requirements.budget_items, 3);
        assert_eq!(report.resource_requirements.approvals_required, 1);
    }

    #[test]
    fn records_deserialize_without_templates() {
        let record: ActionRecord = serde_json::from_value(serde_json::json!({
            "type": "hire_external",
            "urgency": "critical",
            "reason": "No internal experts in Neo4j"
        }))
        .expect("record parses");

        assert_eq!(record.kind, ActionKind::HireExternal);
        assert!(record.template.is_none());
    }
}
