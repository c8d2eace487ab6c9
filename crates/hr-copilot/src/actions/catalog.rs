use serde::{Deserialize, Serialize};
use std::fmt;

/// How soon an action should happen. Also used as a template's default priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Immediate,
    Critical,
    High,
    Medium,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Immediate => "immediate",
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every action the planner can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OneOnOneMeeting,
    WorkloadReview,
    EngagementCheck,
    GrowthOpportunity,
    Recognition,
    Retention,
    SkillDevelopment,
    Mentorship,
    Promotion,
    RoleChange,
    RoleTransition,
    TrainingProgram,
    HireExternal,
    EmergencyTraining,
    KnowledgeTransfer,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::OneOnOneMeeting => "one_on_one_meeting",
            ActionKind::WorkloadReview => "workload_review",
            ActionKind::EngagementCheck => "engagement_check",
            ActionKind::GrowthOpportunity => "growth_opportunity",
            ActionKind::Recognition => "recognition",
            ActionKind::Retention => "retention",
            ActionKind::SkillDevelopment => "skill_development",
            ActionKind::Mentorship => "mentorship",
            ActionKind::Promotion => "promotion",
            ActionKind::RoleChange => "role_change",
            ActionKind::RoleTransition => "role_transition",
            ActionKind::TrainingProgram => "training_program",
            ActionKind::HireExternal => "hire_external",
            ActionKind::EmergencyTraining => "emergency_training",
            ActionKind::KnowledgeTransfer => "knowledge_transfer",
        }
    }

    /// Catalog entry for this kind, if one exists. Ad-hoc kinds such as
    /// `workload_review` have none and therefore never need budget or approval.
    pub fn template(&self) -> Option<&'static ActionTemplate> {
        match self {
            ActionKind::OneOnOneMeeting => Some(&ONE_ON_ONE_MEETING),
            ActionKind::SkillDevelopment => Some(&SKILL_DEVELOPMENT),
            ActionKind::Mentorship => Some(&MENTORSHIP),
            ActionKind::Promotion => Some(&PROMOTION),
            ActionKind::RoleChange => Some(&ROLE_CHANGE),
            ActionKind::TrainingProgram => Some(&TRAINING_PROGRAM),
            ActionKind::HireExternal => Some(&HIRE_EXTERNAL),
            ActionKind::KnowledgeTransfer => Some(&KNOWLEDGE_TRANSFER),
            ActionKind::WorkloadReview
            | ActionKind::EngagementCheck
            | ActionKind::GrowthOpportunity
            | ActionKind::Recognition
            | ActionKind::Retention
            | ActionKind::RoleTransition
            | ActionKind::EmergencyTraining => None,
        }
    }

    pub fn requires_budget(&self) -> bool {
        self.template()
            .map(|template| template.budget_required)
            .unwrap_or(false)
    }

    pub fn requires_approval(&self) -> bool {
        self.template()
            .map(|template| template.requires_approval)
            .unwrap_or(false)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of a reusable intervention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionTemplate {
    pub description: &'static str,
    pub priority: Urgency,
    pub duration: &'static str,
    pub participants: &'static [&'static str],
    pub budget_required: bool,
    pub requires_approval: bool,
}

pub static ONE_ON_ONE_MEETING: ActionTemplate = ActionTemplate {
    description: "Schedule one-on-one discussion with employee",
    priority: Urgency::Immediate,
    duration: "60 minutes",
    participants: &["HR Manager", "Direct Manager", "Employee"],
    budget_required: false,
    requires_approval: false,
};

pub static SKILL_DEVELOPMENT: ActionTemplate = ActionTemplate {
    description: "Enroll employee in skill development program",
    priority: Urgency::High,
    duration: "30-60 days",
    participants: &[],
    budget_required: true,
    requires_approval: false,
};

pub static MENTORSHIP: ActionTemplate = ActionTemplate {
    description: "Pair employee with mentor",
    priority: Urgency::Medium,
    duration: "ongoing",
    participants: &[],
    budget_required: false,
    requires_approval: false,
};

pub static PROMOTION: ActionTemplate = ActionTemplate {
    description: "Promote employee to next level",
    priority: Urgency::High,
    duration: "immediate",
    participants: &[],
    budget_required: false,
    requires_approval: true,
};

pub static ROLE_CHANGE: ActionTemplate = ActionTemplate {
    description: "Transfer employee to different role",
    priority: Urgency::Medium,
    duration: "1-2 weeks",
    participants: &[],
    budget_required: false,
    requires_approval: true,
};

pub static TRAINING_PROGRAM: ActionTemplate = ActionTemplate {
    description: "Enroll in specialized training",
    priority: Urgency::High,
    duration: "varies",
    participants: &[],
    budget_required: true,
    requires_approval: false,
};

pub static HIRE_EXTERNAL: ActionTemplate = ActionTemplate {
    description: "Hire external expert or contractor",
    priority: Urgency::Critical,
    duration: "2-4 weeks",
    participants: &[],
    budget_required: true,
    requires_approval: true,
};

pub static KNOWLEDGE_TRANSFER: ActionTemplate = ActionTemplate {
    description: "Facilitate knowledge transfer session",
    priority: Urgency::High,
    duration: "2-3 hours",
    participants: &[],
    budget_required: false,
    requires_approval: false,
};
