use super::domain::{
    EmployeeId, EmployeeLevel, EmployeeSnapshot, Proficiency, ReportingLine, SkillCoverage,
    SkillSet,
};
use crate::engagement::EngagementLevel;

/// Graph-shaped storage of organisational facts.
///
/// The read half backs the rule engine; the write half is used for bulk population at
/// startup. Implementations decide their own transactional guarantees.
pub trait FactStore: Send + Sync {
    fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeSnapshot>, FactStoreError>;
    fn skills_of(&self, id: &EmployeeId) -> Result<SkillSet, FactStoreError>;
    fn reporting_lines(&self) -> Result<Vec<ReportingLine>, FactStoreError>;
    fn skill_coverage(&self) -> Result<Vec<SkillCoverage>, FactStoreError>;

    fn create_department(&self, id: &str, name: &str) -> Result<(), FactStoreError>;
    fn create_role(&self, id: &str, title: &str) -> Result<(), FactStoreError>;
    fn create_skill(&self, name: &str) -> Result<(), FactStoreError>;
    fn create_employee(
        &self,
        id: &EmployeeId,
        name: &str,
        level: EmployeeLevel,
    ) -> Result<(), FactStoreError>;
    fn works_in(&self, employee: &EmployeeId, department: &str) -> Result<(), FactStoreError>;
    fn has_role(&self, employee: &EmployeeId, role: &str) -> Result<(), FactStoreError>;
    fn has_skill(
        &self,
        employee: &EmployeeId,
        skill: &str,
        level: Option<Proficiency>,
    ) -> Result<(), FactStoreError>;
    fn reports_to(&self, employee: &EmployeeId, manager: &EmployeeId)
        -> Result<(), FactStoreError>;

    /// Merges a derived engagement level for `id`. Ids without an Employee node are kept
    /// as survey-only records. Returns whether an Employee node exists for `id`.
    fn record_engagement(
        &self,
        id: &EmployeeId,
        engagement: EngagementLevel,
    ) -> Result<bool, FactStoreError>;
    fn engagement_of(&self, id: &EmployeeId) -> Result<Option<EngagementLevel>, FactStoreError>;

    fn employee_count(&self) -> Result<usize, FactStoreError>;
    fn clear(&self) -> Result<(), FactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FactStoreError {
    #[error("{kind} '{key}' does not exist")]
    MissingNode { kind: &'static str, key: String },
    #[error("fact store unavailable: {0}")]
    Unavailable(String),
}
