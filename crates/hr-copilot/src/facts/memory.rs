use super::domain::{
    EmployeeId, EmployeeLevel, EmployeeSnapshot, Proficiency, ReportingLine, SkillCoverage,
    SkillSet,
};
use super::store::{FactStore, FactStoreError};
use crate::engagement::EngagementLevel;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Unindexed in-memory property graph. Every query is a scan over the edge list.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFactStore {
    graph: Arc<RwLock<Graph>>,
}

#[derive(Debug, Default)]
struct Graph {
    /// Department name -> id.
    departments: BTreeMap<String, String>,
    /// Role title -> id.
    roles: BTreeMap<String, String>,
    skills: BTreeSet<String>,
    employees: BTreeMap<EmployeeId, EmployeeNode>,
    /// Survey engagement keyed by id; ids need not have an Employee node.
    engagement: BTreeMap<EmployeeId, EngagementLevel>,
    edges: Vec<Relationship>,
}

#[derive(Debug, Clone)]
struct EmployeeNode {
    name: String,
    level: EmployeeLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Relationship {
    WorksIn {
        employee: EmployeeId,
        department: String,
    },
    HasRole {
        employee: EmployeeId,
        role: String,
    },
    HasSkill {
        employee: EmployeeId,
        skill: String,
        level: Option<Proficiency>,
    },
    ReportsTo {
        employee: EmployeeId,
        manager: EmployeeId,
    },
}

impl InMemoryFactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Graph>, FactStoreError> {
        self.graph
            .read()
            .map_err(|_| FactStoreError::Unavailable("fact graph lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Graph>, FactStoreError> {
        self.graph
            .write()
            .map_err(|_| FactStoreError::Unavailable("fact graph lock poisoned".to_string()))
    }
}

impl Graph {
    fn require_employee(&self, id: &EmployeeId) -> Result<&EmployeeNode, FactStoreError> {
        self.employees
            .get(id)
            .ok_or_else(|| FactStoreError::MissingNode {
                kind: "employee",
                key: id.to_string(),
            })
    }

    fn merge_edge(&mut self, edge: Relationship) {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }
}

impl FactStore for InMemoryFactStore {
    fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeSnapshot>, FactStoreError> {
        let graph = self.read()?;
        let Some(node) = graph.employees.get(id) else {
            return Ok(None);
        };

        let mut role = None;
        let mut department = None;
        for edge in &graph.edges {
            match edge {
                Relationship::HasRole { employee, role: title } if employee == id => {
                    role.get_or_insert_with(|| title.clone());
                }
                Relationship::WorksIn {
                    employee,
                    department: name,
                } if employee == id => {
                    department.get_or_insert_with(|| name.clone());
                }
                _ => {}
            }
        }

        Ok(Some(EmployeeSnapshot {
            id: id.clone(),
            name: node.name.clone(),
            level: node.level,
            role,
            department,
            engagement: graph.engagement.get(id).copied(),
        }))
    }

    fn skills_of(&self, id: &EmployeeId) -> Result<SkillSet, FactStoreError> {
        let graph = self.read()?;
        Ok(graph
            .edges
            .iter()
            .filter_map(|edge| match edge {
                Relationship::HasSkill {
                    employee,
                    skill,
                    level,
                } if employee == id => Some((skill.clone(), level.unwrap_or_default())),
                _ => None,
            })
            .collect())
    }

    fn reporting_lines(&self) -> Result<Vec<ReportingLine>, FactStoreError> {
        let graph = self.read()?;
        let mut lines = Vec::new();
        for edge in &graph.edges {
            if let Relationship::ReportsTo { employee, manager } = edge {
                let subordinate = graph.require_employee(employee)?;
                let boss = graph.require_employee(manager)?;
                lines.push(ReportingLine {
                    employee: subordinate.name.clone(),
                    manager: boss.name.clone(),
                    manager_level: boss.level,
                });
            }
        }
        Ok(lines)
    }

    fn skill_coverage(&self) -> Result<Vec<SkillCoverage>, FactStoreError> {
        let graph = self.read()?;
        let mut holders: BTreeMap<&str, BTreeSet<&EmployeeId>> = graph
            .skills
            .iter()
            .map(|skill| (skill.as_str(), BTreeSet::new()))
            .collect();

        for edge in &graph.edges {
            if let Relationship::HasSkill {
                employee,
                skill,
                level: Some(Proficiency::Advanced),
            } = edge
            {
                if let Some(set) = holders.get_mut(skill.as_str()) {
                    set.insert(employee);
                }
            }
        }

        Ok(holders
            .into_iter()
            .map(|(skill, employees)| SkillCoverage {
                skill: skill.to_string(),
                advanced_holders: employees.len(),
            })
            .collect())
    }

    fn create_department(&self, id: &str, name: &str) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.departments.insert(name.to_string(), id.to_string());
        Ok(())
    }

    fn create_role(&self, id: &str, title: &str) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.roles.insert(title.to_string(), id.to_string());
        Ok(())
    }

    fn create_skill(&self, name: &str) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.skills.insert(name.to_string());
        Ok(())
    }

    fn create_employee(
        &self,
        id: &EmployeeId,
        name: &str,
        level: EmployeeLevel,
    ) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.employees.insert(
            id.clone(),
            EmployeeNode {
                name: name.to_string(),
                level,
            },
        );
        Ok(())
    }

    fn works_in(&self, employee: &EmployeeId, department: &str) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.require_employee(employee)?;
        if !graph.departments.contains_key(department) {
            return Err(FactStoreError::MissingNode {
                kind: "department",
                key: department.to_string(),
            });
        }
        graph.merge_edge(Relationship::WorksIn {
            employee: employee.clone(),
            department: department.to_string(),
        });
        Ok(())
    }

    fn has_role(&self, employee: &EmployeeId, role: &str) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.require_employee(employee)?;
        if !graph.roles.contains_key(role) {
            return Err(FactStoreError::MissingNode {
                kind: "role",
                key: role.to_string(),
            });
        }
        graph.merge_edge(Relationship::HasRole {
            employee: employee.clone(),
            role: role.to_string(),
        });
        Ok(())
    }

    fn has_skill(
        &self,
        employee: &EmployeeId,
        skill: &str,
        level: Option<Proficiency>,
    ) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.require_employee(employee)?;
        if !graph.skills.contains(skill) {
            return Err(FactStoreError::MissingNode {
                kind: "skill",
                key: skill.to_string(),
            });
        }

        // One HAS_SKILL edge per (employee, skill); a new level overwrites the old one.
        let existing = graph.edges.iter_mut().find_map(|edge| match edge {
            Relationship::HasSkill {
                employee: holder,
                skill: name,
                level,
            } if holder == employee && name == skill => Some(level),
            _ => None,
        });
        match existing {
            Some(current) => {
                if level.is_some() {
                    *current = level;
                }
            }
            None => graph.edges.push(Relationship::HasSkill {
                employee: employee.clone(),
                skill: skill.to_string(),
                level,
            }),
        }
        Ok(())
    }

    fn reports_to(
        &self,
        employee: &EmployeeId,
        manager: &EmployeeId,
    ) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        graph.require_employee(employee)?;
        graph.require_employee(manager)?;
        graph.merge_edge(Relationship::ReportsTo {
            employee: employee.clone(),
            manager: manager.clone(),
        });
        Ok(())
    }

    fn record_engagement(
        &self,
        id: &EmployeeId,
        engagement: EngagementLevel,
    ) -> Result<bool, FactStoreError> {
        let mut graph = self.write()?;
        graph.engagement.insert(id.clone(), engagement);
        Ok(graph.employees.contains_key(id))
    }

    fn engagement_of(&self, id: &EmployeeId) -> Result<Option<EngagementLevel>, FactStoreError> {
        Ok(self.read()?.engagement.get(id).copied())
    }

    fn employee_count(&self) -> Result<usize, FactStoreError> {
        Ok(self.read()?.employees.len())
    }

    fn clear(&self) -> Result<(), FactStoreError> {
        let mut graph = self.write()?;
        *graph = Graph::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_engineer() -> InMemoryFactStore {
        let store = InMemoryFactStore::new();
        store.create_department("D1", "Engineering").unwrap();
        store.create_role("R1", "Software Engineer").unwrap();
        store.create_skill("Python").unwrap();
        store.create_skill("Neo4j").unwrap();
        store
            .create_employee(&"E1".into(), "Alice", EmployeeLevel::Senior)
            .unwrap();
        store.works_in(&"E1".into(), "Engineering").unwrap();
        store.has_role(&"E1".into(), "Software Engineer").unwrap();
        store
    }

    #[test]
    fn employee_resolves_role_and_department() {
        let store = store_with_engineer();

        let snapshot = store.employee(&"E1".into()).unwrap().expect("present");

        assert_eq!(snapshot.name, "Alice");
        assert_eq!(snapshot.level, EmployeeLevel::Senior);
        assert_eq!(snapshot.role.as_deref(), Some("Software Engineer"));
        assert_eq!(snapshot.department.as_deref(), Some("Engineering"));
        assert!(store.employee(&"E9".into()).unwrap().is_none());
    }

    #[test]
    fn skill_edges_default_to_basic_and_merge_levels() {
        let store = store_with_engineer();
        store.has_skill(&"E1".into(), "Python", None).unwrap();
        store.has_skill(&"E1".into(), "Neo4j", None).unwrap();
        store
            .has_skill(&"E1".into(), "Neo4j", Some(Proficiency::Advanced))
            .unwrap();

        let skills = store.skills_of(&"E1".into()).unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills["Python"], Proficiency::Basic);
        assert_eq!(skills["Neo4j"], Proficiency::Advanced);
    }

    #[test]
    fn relationships_require_existing_nodes() {
        let store = store_with_engineer();

        let err = store
            .has_skill(&"E1".into(), "Cobol", Some(Proficiency::Advanced))
            .unwrap_err();
        assert!(matches!(err, FactStoreError::MissingNode { kind: "skill", .. }));

        let err = store.reports_to(&"E1".into(), &"E7".into()).unwrap_err();
        assert!(matches!(err, FactStoreError::MissingNode { kind: "employee", .. }));
    }

    #[test]
    fn reporting_cycles_are_enumerated_without_traversal() {
        let store = store_with_engineer();
        store
            .create_employee(&"E2".into(), "Bob", EmployeeLevel::Manager)
            .unwrap();
        store.reports_to(&"E1".into(), &"E2".into()).unwrap();
        store.reports_to(&"E2".into(), &"E1".into()).unwrap();
        store.reports_to(&"E1".into(), &"E2".into()).unwrap();

        let lines = store.reporting_lines().unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].manager, "Bob");
        assert_eq!(lines[1].manager_level, EmployeeLevel::Senior);
    }

    #[test]
    fn skill_coverage_counts_distinct_advanced_holders() {
        let store = store_with_engineer();
        store
            .create_employee(&"E2".into(), "Bob", EmployeeLevel::Manager)
            .unwrap();
        store
            .has_skill(&"E1".into(), "Python", Some(Proficiency::Advanced))
            .unwrap();
        store
            .has_skill(&"E2".into(), "Python", Some(Proficiency::Advanced))
            .unwrap();
        store
            .has_skill(&"E2".into(), "Neo4j", Some(Proficiency::Intermediate))
            .unwrap();

        let coverage = store.skill_coverage().unwrap();

        assert_eq!(
            coverage,
            vec![
                SkillCoverage {
                    skill: "Neo4j".to_string(),
                    advanced_holders: 0
                },
                SkillCoverage {
                    skill: "Python".to_string(),
                    advanced_holders: 2
                },
            ]
        );
    }

    #[test]
    fn record_engagement_keeps_survey_only_ids() {
        let store = store_with_engineer();

        assert!(store
            .record_engagement(&"E1".into(), EngagementLevel::Low)
            .unwrap());
        assert!(!store
            .record_engagement(&"E5".into(), EngagementLevel::High)
            .unwrap());
        let snapshot = store.employee(&"E1".into()).unwrap().unwrap();
        assert_eq!(snapshot.engagement, Some(EngagementLevel::Low));
        assert_eq!(
            store.engagement_of(&"E5".into()).unwrap(),
            Some(EngagementLevel::High)
        );
        assert!(store.employee(&"E5".into()).unwrap().is_none());
        assert_eq!(store.employee_count().unwrap(), 1);

        store.clear().unwrap();
        assert_eq!(store.employee_count().unwrap(), 0);
        assert!(store.engagement_of(&"E5".into()).unwrap().is_none());
    }
}
