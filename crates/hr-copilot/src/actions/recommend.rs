use crate::engagement::EngagementLevel;
use crate::facts::EmployeeLevel;
use serde::Serialize;

/// Canned interventions for an engagement level at a given seniority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngagementActionRecommendation {
    pub engagement: EngagementLevel,
    pub level: EmployeeLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub recommended_actions: Vec<&'static str>,
}

fn canned_actions(engagement: EngagementLevel, level: EmployeeLevel) -> &'static [&'static str] {
    use EmployeeLevel::{Junior, Manager, Senior};
    use EngagementLevel::{High, Low, Medium};

    match (engagement, level) {
        (Low, Junior) => &[
            "Schedule weekly check-ins with direct manager",
            "Assign an onboarding buddy",
        ],
        (Low, Senior) => &[
            "Hold a retention conversation about career goals",
            "Review workload and project allocation",
        ],
        (Low, Manager) => &[
            "Arrange executive coaching",
            "Review team size and management load",
        ],
        (Medium, Junior) => &[
            "Pair with a senior mentor",
            "Offer a structured training plan",
        ],
        (Medium, Senior) => &[
            "Offer a stretch project",
            "Discuss the growth pathway",
        ],
        (Medium, Manager) => &[
            "Enroll in leadership development program",
            "Gather upward feedback from the team",
        ],
        (High, Junior) => &[
            "Recognize contributions publicly",
            "Fast-track skill development",
        ],
        (High, Senior) => &[
            "Nominate for a mentorship role",
            "Evaluate for promotion",
        ],
        (High, Manager) => &[
            "Involve in strategic planning",
            "Consider for expanded leadership scope",
        ],
    }
}

/// Pure table lookup; the role is carried through for display only.
pub fn recommend_engagement_action(
    engagement: EngagementLevel,
    level: EmployeeLevel,
    role: Option<&str>,
) -> EngagementActionRecommendation {
    EngagementActionRecommendation {
        engagement,
        level,
        role: role.map(str::to_string),
        recommended_actions: canned_actions(engagement, level).to_vec(),
    }
}
