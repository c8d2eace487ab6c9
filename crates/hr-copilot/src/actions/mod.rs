//! Action planning: the static template catalog, engagement action tables, batch
//! execution records, and execution reports.

pub mod catalog;
mod execution;
mod recommend;
mod triage;

pub use catalog::{ActionKind, ActionTemplate, Urgency};
pub use execution::{
    execute_comprehensive_action_plan, execute_engagement_action, execute_promotion_action,
    execute_skill_action, generate_action_execution_report, ActionExecutionReport, ActionInputs,
    ActionRecord, ActionSummary, EngagementActionBatch, ExecutionStatus, PromotionActionBatch,
    ResourceRequirements, SkillActionBatch,
};
pub use recommend::{recommend_engagement_action, EngagementActionRecommendation};
pub use triage::{decide_follow_up, FollowUp};
