use super::engine::RuleEngine;
use super::rules::{self, Priority};
use super::views::{
    ActionPlan, Assessment, CurrentState, OrganizationalAnalytics, PlannedAction,
    PromotionVerdict, StrategicAction, StrategicActionKind, StrategicDecision, StrategicRequest,
    Triage,
};
use super::{DecisionError, Lookup};
use crate::actions::{decide_follow_up, recommend_engagement_action};
use crate::engagement::EngagementLevel;
use crate::facts::{EmployeeId, FactStore};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

const PLAN_TIMELINE: &str = "90 days";
const SKILL_DEVELOPMENT_TIMELINE: &str = "30-60 days";
const ENGAGEMENT_ACTION_TIMELINE: &str = "immediate";
const PROMOTION_PATHWAY_TIMELINE: &str = "6-12 months";

/// Composes rule outputs into assessments, plans and strategic decisions.
pub struct DecisionService<S: ?Sized> {
    rules: RuleEngine<S>,
}

impl<S> DecisionService<S>
where
    S: FactStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            rules: RuleEngine::new(store),
        }
    }

    pub fn rules(&self) -> &RuleEngine<S> {
        &self.rules
    }

    /// Full per-employee read: snapshot, skills, promotion, skill recommendations and,
    /// when an engagement level is supplied, the engagement context and actions.
    pub fn comprehensive_assessment(
        &self,
        employee_id: &EmployeeId,
        engagement: Option<EngagementLevel>,
        today: NaiveDate,
    ) -> Result<Lookup<Assessment>, DecisionError> {
        let Some(employee) = self.rules.analyze_employee(employee_id)? else {
            warn!(%employee_id, "assessment requested for unknown employee");
            return Ok(Lookup::employee_not_found());
        };

        let skills = self.rules.get_skills(employee_id)?;
        let promotion_eligible = rules::assess_promotion(&employee, &skills);
        let skill_recommendations = rules::recommend_skills(&employee, &skills);

        let (engagement_analysis, engagement_actions) = match engagement {
            Some(level) => {
                let context = self
                    .rules
                    .analyze_engagement_with_context(employee_id, level)?
                    .found();
                let actions =
                    recommend_engagement_action(level, employee.level, employee.role.as_deref());
                (context, Some(actions))
            }
            None => (None, None),
        };

        debug!(
            %employee_id,
            eligible = promotion_eligible.eligible,
            recommended = skill_recommendations.recommended_skills.len(),
            "employee assessed"
        );

        Ok(Lookup::Found(Assessment {
            employee_id: employee_id.clone(),
            employee,
            skills,
            promotion_eligible,
            skill_recommendations,
            engagement_analysis,
            engagement_actions,
            assessed_on: today,
        }))
    }

    pub fn organizational_analytics(
        &self,
        today: NaiveDate,
    ) -> Result<OrganizationalAnalytics, DecisionError> {
        let team_structure = self.rules.assess_team_structure()?;
        let skill_gaps = self.rules.identify_skill_gaps()?;

        debug!(
            reports = team_structure.total_reports,
            gaps = skill_gaps.total_gaps,
            "organizational analytics computed"
        );

        Ok(OrganizationalAnalytics {
            team_structure,
            skill_gaps,
            analyzed_on: today,
        })
    }

    pub fn strategic_decision(
        &self,
        request: &StrategicRequest,
        today: NaiveDate,
    ) -> Result<Lookup<StrategicDecision>, DecisionError> {
        match request {
            StrategicRequest::Promotion { employee_id } => {
                let assessment = self.comprehensive_assessment(employee_id, None, today)?;
                Ok(assessment.map(|assessment| {
                    let eligibility = &assessment.promotion_eligible;
                    StrategicDecision::Promotion {
                        decision: if eligibility.eligible {
                            PromotionVerdict::Promote
                        } else {
                            PromotionVerdict::DoNotPromote
                        },
                        reason: eligibility.reason.clone(),
                        confidence: eligibility.confidence,
                        employee: assessment.employee.clone(),
                        details: Box::new(assessment),
                    }
                }))
            }
            StrategicRequest::SkillDevelopment { employee_id } => {
                let assessment = self.comprehensive_assessment(employee_id, None, today)?;
                Ok(assessment.map(|assessment| {
                    let priority = assessment.skill_recommendations.priority;
                    StrategicDecision::SkillDevelopment {
                        decision: "initiate_training",
                        recommendations: assessment.skill_recommendations,
                        employee: assessment.employee,
                        priority,
                    }
                }))
            }
            StrategicRequest::OrganizationalHealth => {
                let analytics = self.organizational_analytics(today)?;
                let strategic_decisions = strategic_actions(&analytics);
                info!(
                    decisions = strategic_decisions.len(),
                    "organizational strategy derived"
                );
                Ok(Lookup::Found(StrategicDecision::OrganizationalStrategy {
                    strategic_decisions,
                    analytics,
                }))
            }
        }
    }

    pub fn create_action_plan(
        &self,
        employee_id: &EmployeeId,
        engagement: Option<EngagementLevel>,
        today: NaiveDate,
    ) -> Result<Lookup<ActionPlan>, DecisionError> {
        let assessment = self.comprehensive_assessment(employee_id, engagement, today)?;
        Ok(assessment.map(|assessment| build_plan(assessment, engagement)))
    }

    /// Risk read based on the engagement ingestion recorded for the id. Survey-only ids
    /// are triaged without an org-chart snapshot.
    pub fn triage(&self, employee_id: &EmployeeId) -> Result<Lookup<Triage>, DecisionError> {
        let employee = self.rules.analyze_employee(employee_id)?;
        let Some(engagement) = self.rules.recorded_engagement(employee_id)? else {
            return Ok(match employee {
                Some(_) => Lookup::NotFound {
                    message: "Employee not found in survey data".to_string(),
                },
                None => Lookup::employee_not_found(),
            });
        };

        let risk = self.rules.assess_risk(engagement);
        let follow_up = decide_follow_up(&risk);
        Ok(Lookup::Found(Triage {
            employee_id: employee_id.clone(),
            employee,
            engagement,
            risk,
            follow_up,
        }))
    }
}

fn build_plan(assessment: Assessment, engagement: Option<EngagementLevel>) -> ActionPlan {
    let mut planned_actions = Vec::new();

    let recommendations = &assessment.skill_recommendations;
    if !recommendations.recommended_skills.is_empty() {
        planned_actions.push(PlannedAction::SkillDevelopment {
            skills: recommendations.recommended_skills.clone(),
            priority: recommendations.priority,
            timeline: SKILL_DEVELOPMENT_TIMELINE,
        });
    }

    if let Some(actions) = &assessment.engagement_actions {
        planned_actions.push(PlannedAction::EngagementAction {
            actions: actions.recommended_actions.clone(),
            priority: if engagement == Some(EngagementLevel::Low) {
                Priority::High
            } else {
                Priority::Medium
            },
            timeline: ENGAGEMENT_ACTION_TIMELINE,
        });
    }

    if assessment.promotion_eligible.eligible {
        let role = assessment.employee.role.as_deref().unwrap_or("position");
        planned_actions.push(PlannedAction::PromotionPathway {
            target_role: format!("Senior {role}"),
            timeline: PROMOTION_PATHWAY_TIMELINE,
        });
    }

    ActionPlan {
        employee_id: assessment.employee_id,
        current_state: CurrentState {
            skills: assessment.skills,
            engagement,
            promotion_eligible: assessment.promotion_eligible.eligible,
        },
        employee: assessment.employee,
        planned_actions,
        timeline: PLAN_TIMELINE,
    }
}

fn strategic_actions(analytics: &OrganizationalAnalytics) -> Vec<StrategicAction> {
    let mut decisions: Vec<StrategicAction> = analytics
        .skill_gaps
        .critical_skill_gaps
        .iter()
        .filter_map(|gap| match gap.priority {
            Priority::Critical => Some(StrategicAction {
                action: StrategicActionKind::HireExternalExpert,
                skill: Some(gap.skill.clone()),
                reason: format!(
                    "Critical gap: only {} expert(s) in {}",
                    gap.experts, gap.skill
                ),
            }),
            Priority::High => Some(StrategicAction {
                action: StrategicActionKind::DevelopInternalTalent,
                skill: Some(gap.skill.clone()),
                reason: format!("High gap: limited expertise in {}", gap.skill),
            }),
            Priority::Medium | Priority::Low => None,
        })
        .collect();

    if analytics.team_structure.total_reports == 0 {
        decisions.push(StrategicAction {
            action: StrategicActionKind::EstablishReportingStructure,
            skill: None,
            reason: "No clear reporting relationships defined".to_string(),
        });
    }

    decisions
}
