use crate::engagement::EngagementLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Stable employee identifier (`"E1"`, `"E2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Survey exports carry bare integers; the fact store keys employees as `E{n}`.
    pub fn from_survey(id: u32) -> Self {
        Self(format!("E{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Seniority tier of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EmployeeLevel {
    Junior,
    Senior,
    Manager,
}

impl EmployeeLevel {
    pub fn ordered() -> [EmployeeLevel; 3] {
        [Self::Junior, Self::Senior, Self::Manager]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeLevel::Junior => "Junior",
            EmployeeLevel::Senior => "Senior",
            EmployeeLevel::Manager => "Manager",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmployeeLevel::Junior => "Entry-level, requires mentorship",
            EmployeeLevel::Senior => "Advanced skills, can lead projects",
            EmployeeLevel::Manager => "Leadership role, manages team",
        }
    }
}

impl fmt::Display for EmployeeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Skill proficiency recorded on a HAS_SKILL edge.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Proficiency {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Basic => "Basic",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected value for one of the closed fact vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct VocabularyError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for EmployeeLevel {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "senior" => Ok(Self::Senior),
            "manager" => Ok(Self::Manager),
            _ => Err(VocabularyError {
                kind: "employee level",
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EmployeeLevel {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Proficiency {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(VocabularyError {
                kind: "proficiency",
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Proficiency {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Read-only view of an Employee node with its role and department edges resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    pub id: EmployeeId,
    pub name: String,
    pub level: EmployeeLevel,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<EngagementLevel>,
}

/// Skill name to proficiency, ordered by name.
pub type SkillSet = BTreeMap<String, Proficiency>;

/// One REPORTS_TO edge with the manager's level resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingLine {
    pub employee: String,
    pub manager: String,
    pub manager_level: EmployeeLevel,
}

/// Count of distinct employees holding a skill at `Advanced` proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCoverage {
    pub skill: String,
    pub advanced_holders: usize,
}
