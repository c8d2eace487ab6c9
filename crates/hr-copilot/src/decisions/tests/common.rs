use std::sync::Arc;

use crate::decisions::{DecisionService, RuleEngine};
use crate::engagement::EngagementLevel;
use crate::facts::{
    seed_sample_organisation, EmployeeId, EmployeeLevel, EmployeeSnapshot, FactStore,
    FactStoreError, InMemoryFactStore, Proficiency, ReportingLine, SkillCoverage, SkillSet,
};
use chrono::NaiveDate;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date")
}

pub(super) fn sample_store() -> Arc<InMemoryFactStore> {
    let store = Arc::new(InMemoryFactStore::new());
    seed_sample_organisation(store.as_ref(), false).expect("sample organisation seeds");
    store
}

/// Single-employee store with the given level, role and skills.
pub(super) fn store_with(
    level: EmployeeLevel,
    role: &str,
    skills: &[(&str, Proficiency)],
) -> Arc<InMemoryFactStore> {
    let store = Arc::new(InMemoryFactStore::new());
    store.create_role("R1", role).expect("role");
    store
        .create_employee(&employee_id(), "Test Employee", level)
        .expect("employee");
    store.has_role(&employee_id(), role).expect("has role");
    for (skill, proficiency) in skills {
        store.create_skill(skill).expect("skill");
        store
            .has_skill(&employee_id(), skill, Some(*proficiency))
            .expect("has skill");
    }
    store
}

pub(super) fn employee_id() -> EmployeeId {
    EmployeeId::new("T1")
}

pub(super) fn snapshot(level: EmployeeLevel, role: Option<&str>) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: employee_id(),
        name: "Test Employee".to_string(),
        level,
        role: role.map(str::to_string),
        department: None,
        engagement: None,
    }
}

pub(super) fn skill_set(skills: &[(&str, Proficiency)]) -> SkillSet {
    skills
        .iter()
        .map(|(name, level)| (name.to_string(), *level))
        .collect()
}

pub(super) fn engine(store: Arc<InMemoryFactStore>) -> RuleEngine<InMemoryFactStore> {
    RuleEngine::new(store)
}

pub(super) fn service(store: Arc<InMemoryFactStore>) -> DecisionService<InMemoryFactStore> {
    DecisionService::new(store)
}

pub(super) struct UnavailableStore;

fn offline<T>() -> Result<T, FactStoreError> {
    Err(FactStoreError::Unavailable("database offline".to_string()))
}

impl FactStore for UnavailableStore {
    fn employee(&self, _id: &EmployeeId) -> Result<Option<EmployeeSnapshot>, FactStoreError> {
        offline()
    }

    fn skills_of(&self, _id: &EmployeeId) -> Result<SkillSet, FactStoreError> {
        offline()
    }

    fn reporting_lines(&self) -> Result<Vec<ReportingLine>, FactStoreError> {
        offline()
    }

    fn skill_coverage(&self) -> Result<Vec<SkillCoverage>, FactStoreError> {
        offline()
    }

    fn create_department(&self, _id: &str, _name: &str) -> Result<(), FactStoreError> {
        offline()
    }

    fn create_role(&self, _id: &str, _title: &str) -> Result<(), FactStoreError> {
        offline()
    }

    fn create_skill(&self, _name: &str) -> Result<(), FactStoreError> {
        offline()
    }

    fn create_employee(
        &self,
        _id: &EmployeeId,
        _name: &str,
        _level: EmployeeLevel,
    ) -> Result<(), FactStoreError> {
        offline()
    }

    fn works_in(&self, _employee: &EmployeeId, _department: &str) -> Result<(), FactStoreError> {
        offline()
    }

    fn has_role(&self, _employee: &EmployeeId, _role: &str) -> Result<(), FactStoreError> {
        offline()
    }

    fn has_skill(
        &self,
        _employee: &EmployeeId,
        _skill: &str,
        _level: Option<Proficiency>,
    ) -> Result<(), FactStoreError> {
        offline()
    }

    fn reports_to(
        &self,
        _employee: &EmployeeId,
        _manager: &EmployeeId,
    ) -> Result<(), FactStoreError> {
        offline()
    }

    fn record_engagement(
        &self,
        _id: &EmployeeId,
        _engagement: EngagementLevel,
    ) -> Result<bool, FactStoreError> {
        offline()
    }

    fn engagement_of(
        &self,
        _id: &EmployeeId,
    ) -> Result<Option<EngagementLevel>, FactStoreError> {
        offline()
    }

    fn employee_count(&self) -> Result<usize, FactStoreError> {
        offline()
    }

    fn clear(&self) -> Result<(), FactStoreError> {
        offline()
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
