use crate::decisions::{Priority, RiskAssessment};
use serde::Serialize;

/// Immediate follow-up for a risk read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    NotifyManager,
    Observe,
}

impl FollowUp {
    pub fn label(&self) -> &'static str {
        match self {
            FollowUp::NotifyManager => "Notify manager",
            FollowUp::Observe => "Observe",
        }
    }
}

pub fn decide_follow_up(risk: &RiskAssessment) -> FollowUp {
    if risk.priority == Priority::High {
        FollowUp::NotifyManager
    } else {
        FollowUp::Observe
    }
}
