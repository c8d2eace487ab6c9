use super::context::{analyze_context, EngagementContext};
use super::rules::{
    self, PromotionEligibility, RiskAssessment, SkillGapReport, SkillRecommendation,
    TeamStructure,
};
use super::{DecisionError, Lookup};
use crate::engagement::EngagementLevel;
use crate::facts::{EmployeeId, EmployeeSnapshot, FactStore, SkillSet};
use std::sync::Arc;
use tracing::debug;

/// Store-backed facade over the pure rules. Holds no state besides the store handle.
pub struct RuleEngine<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for RuleEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> RuleEngine<S>
where
    S: FactStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Engagement recorded by survey ingestion, whether or not the id is on the org chart.
    pub fn recorded_engagement(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<EngagementLevel>, DecisionError> {
        Ok(self.store.engagement_of(employee_id)?)
    }

    pub fn assess_risk(&self, engagement: EngagementLevel) -> RiskAssessment {
        rules::assess_risk(engagement)
    }

    pub fn analyze_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<EmployeeSnapshot>, DecisionError> {
        Ok(self.store.employee(id)?)
    }

    pub fn get_skills(&self, id: &EmployeeId) -> Result<SkillSet, DecisionError> {
        Ok(self.store.skills_of(id)?)
    }

    pub fn assess_promotion_eligibility(
        &self,
        id: &EmployeeId,
    ) -> Result<PromotionEligibility, DecisionError> {
        let Some(employee) = self.store.employee(id)? else {
            debug!(employee_id = %id, "promotion check for unknown employee");
            return Ok(PromotionEligibility::not_found());
        };
        let skills = self.store.skills_of(id)?;
        Ok(rules::assess_promotion(&employee, &skills))
    }

    pub fn recommend_skill_development(
        &self,
        id: &EmployeeId,
    ) -> Result<Lookup<SkillRecommendation>, DecisionError> {
        let Some(employee) = self.store.employee(id)? else {
            return Ok(Lookup::employee_not_found());
        };
        let skills = self.store.skills_of(id)?;
        Ok(Lookup::Found(rules::recommend_skills(&employee, &skills)))
    }

    pub fn assess_team_structure(&self) -> Result<TeamStructure, DecisionError> {
        let lines = self.store.reporting_lines()?;
        Ok(rules::team_structure(lines))
    }

    pub fn identify_skill_gaps(&self) -> Result<SkillGapReport, DecisionError> {
        let coverage = self.store.skill_coverage()?;
        Ok(rules::skill_gaps(&coverage))
    }

    pub fn analyze_engagement_with_context(
        &self,
        id: &EmployeeId,
        engagement: EngagementLevel,
    ) -> Result<Lookup<EngagementContext>, DecisionError> {
        let Some(employee) = self.store.employee(id)? else {
            return Ok(Lookup::employee_not_found());
        };
        let skills = self.store.skills_of(id)?;
        let promotion = rules::assess_promotion(&employee, &skills);
        Ok(Lookup::Found(analyze_context(
            &employee, &skills, &promotion, engagement,
        )))
    }
}
