use super::domain::{EmployeeId, EmployeeLevel, Proficiency};
use super::store::{FactStore, FactStoreError};
use serde::Serialize;
use tracing::info;

/// Counts of what a seed run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub departments: usize,
    pub roles: usize,
    pub skills: usize,
    pub employees: usize,
    pub relationships: usize,
}

const DEPARTMENTS: &[(&str, &str)] = &[("D1", "Engineering"), ("D2", "HR"), ("D3", "Sales")];

const ROLES: &[(&str, &str)] = &[
    ("R1", "Software Engineer"),
    ("R2", "Engineering Manager"),
    ("R3", "HR Manager"),
    ("R4", "Sales Executive"),
];

const SKILLS: &[&str] = &["Python", "Neo4j", "Leadership", "Recruitment", "Negotiation"];

struct SeedEmployee {
    id: &'static str,
    name: &'static str,
    level: EmployeeLevel,
    department: &'static str,
    role: &'static str,
    skills: &'static [(&'static str, Option<Proficiency>)],
}

const EMPLOYEES: &[SeedEmployee] = &[
    SeedEmployee {
        id: "E1",
        name: "Alice",
        level: EmployeeLevel::Senior,
        department: "Engineering",
        role: "Software Engineer",
        skills: &[
            ("Python", Some(Proficiency::Advanced)),
            ("Neo4j", Some(Proficiency::Intermediate)),
        ],
    },
    SeedEmployee {
        id: "E2",
        name: "Bob",
        level: EmployeeLevel::Manager,
        department: "Engineering",
        role: "Engineering Manager",
        skills: &[("Leadership", None)],
    },
    SeedEmployee {
        id: "E3",
        name: "Carol",
        level: EmployeeLevel::Senior,
        department: "HR",
        role: "HR Manager",
        skills: &[("Recruitment", None)],
    },
    SeedEmployee {
        id: "E4",
        name: "David",
        level: EmployeeLevel::Junior,
        department: "Sales",
        role: "Sales Executive",
        skills: &[("Negotiation", None)],
    },
];

const REPORTING: &[(&str, &str)] = &[("E1", "E2")];

/// Populates the store with the four-person sample organisation.
///
/// With `clear_first` every existing fact is dropped before seeding; otherwise the
/// writes merge into whatever is already stored.
pub fn seed_sample_organisation<S>(
    store: &S,
    clear_first: bool,
) -> Result<SeedSummary, FactStoreError>
where
    S: FactStore + ?Sized,
{
    if clear_first {
        store.clear()?;
        info!("fact store cleared before seeding");
    }

    let mut summary = SeedSummary::default();

    for (id, name) in DEPARTMENTS {
        store.create_department(id, name)?;
        summary.departments += 1;
    }
    for (id, title) in ROLES {
        store.create_role(id, title)?;
        summary.roles += 1;
    }
    for skill in SKILLS {
        store.create_skill(skill)?;
        summary.skills += 1;
    }

    for seed in EMPLOYEES {
        let id = EmployeeId::new(seed.id);
        store.create_employee(&id, seed.name, seed.level)?;
        store.works_in(&id, seed.department)?;
        store.has_role(&id, seed.role)?;
        summary.employees += 1;
        summary.relationships += 2;

        for (skill, level) in seed.skills {
            store.has_skill(&id, skill, *level)?;
            summary.relationships += 1;
        }
    }

    for (employee, manager) in REPORTING {
        store.reports_to(&EmployeeId::new(*employee), &EmployeeId::new(*manager))?;
        summary.relationships += 1;
    }

    info!(
        departments = summary.departments,
        roles = summary.roles,
        skills = summary.skills,
        employees = summary.employees,
        relationships = summary.relationships,
        "sample organisation seeded"
    );

    Ok(summary)
}
