//! Rule evaluation and decision composition.
//!
//! `rules` holds the pure functions, [`RuleEngine`] feeds them from a
//! [`FactStore`](crate::facts::FactStore), and [`DecisionService`] composes rule outputs
//! into assessments, action plans, and strategic decisions. [`decision_router`] exposes
//! the service over HTTP.
//!
//! Two outcomes are possible besides success: an unknown employee is a normal
//! [`Lookup::NotFound`] value, while an unreachable store surfaces as
//! [`DecisionError::FactStore`].

mod context;
mod engine;
mod router;
pub mod rules;
mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use context::EngagementContext;
pub use engine::RuleEngine;
pub use router::decision_router;
pub use rules::{
    assess_risk, PromotionEligibility, Priority, RiskAssessment, RiskKind, SkillGap,
    SkillGapReport, SkillRecommendation, TeamStructure,
};
pub use service::DecisionService;
pub use views::{
    ActionPlan, Assessment, CurrentState, OrganizationalAnalytics, PlannedAction,
    PromotionVerdict, StrategicAction, StrategicActionKind, StrategicDecision, StrategicRequest,
    Triage,
};

use crate::facts::FactStoreError;
use serde::Serialize;

/// Result of a lookup keyed by employee id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Lookup<T> {
    #[serde(rename = "ok")]
    Found(T),
    #[serde(rename = "error")]
    NotFound { message: String },
}

impl<T> Lookup<T> {
    pub fn employee_not_found() -> Self {
        Lookup::NotFound {
            message: "Employee not found".to_string(),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound { message } => Lookup::NotFound { message },
        }
    }
}

/// Error raised when a decision cannot be computed at all.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error(transparent)]
    FactStore(#[from] FactStoreError),
}
