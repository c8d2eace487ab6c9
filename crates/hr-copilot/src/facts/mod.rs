//! Organisational facts: employees, departments, roles, skills and their relationships.

pub mod domain;
mod memory;
mod seed;
pub mod store;

pub use domain::{
    EmployeeId, EmployeeLevel, EmployeeSnapshot, Proficiency, ReportingLine, SkillCoverage,
    SkillSet, VocabularyError,
};
pub use memory::InMemoryFactStore;
pub use seed::{seed_sample_organisation, SeedSummary};
pub use store::{FactStore, FactStoreError};
