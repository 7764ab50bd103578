use super::types::{GherkinKeyword, TestStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single Given/When/Then step inside a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GherkinStep {
    pub keyword: GherkinKeyword,
    pub text: String,
}

impl GherkinStep {
    pub fn new(keyword: GherkinKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
        }
    }
}

/// A Gherkin scenario used as acceptance criteria.
///
/// Construction is permissive; keyword coverage (Given/When/Then present)
/// is enforced by the rules engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GherkinScenario {
    pub scenario_title: String,
    pub steps: Vec<GherkinStep>,
}

/// Six independent booleans; interpreted downstream as a 0-6 compliance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvestCriteria {
    #[serde(default)]
    pub independent: bool,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default)]
    pub valuable: bool,
    #[serde(default)]
    pub estimable: bool,
    #[serde(default)]
    pub small: bool,
    #[serde(default)]
    pub testable: bool,
}

impl InvestCriteria {
    /// Count of satisfied criteria (0-6).
    pub fn score(&self) -> usize {
        [
            self.independent,
            self.negotiable,
            self.valuable,
            self.estimable,
            self.small,
            self.testable,
        ]
        .iter()
        .filter(|v| **v)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub invest_criteria: InvestCriteria,
    pub definition_of_done: String,
    pub acceptance_criteria: Vec<GherkinScenario>,

    #[serde(default)]
    pub test_status: TestStatus,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserStory {
    pub fn new(id: String, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            invest_criteria: InvestCriteria::default(),
            definition_of_done: String::new(),
            acceptance_criteria: Vec::new(),
            test_status: TestStatus::default(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn with_invest_criteria(mut self, criteria: InvestCriteria) -> Self {
        self.invest_criteria = criteria;
        self
    }

    pub fn with_definition_of_done(mut self, dod: impl Into<String>) -> Self {
        self.definition_of_done = dod.into();
        self
    }

    pub fn with_acceptance_criteria(mut self, scenarios: Vec<GherkinScenario>) -> Self {
        self.acceptance_criteria = scenarios;
        self
    }

    /// Stamp the mutation timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn set_test_status(&mut self, status: TestStatus) {
        self.test_status = status;
        self.touch();
    }
}

/// Lowercase alphanumerics only, so IDs stay shell- and URL-friendly.
const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generate a fresh opaque story ID, e.g. `story-k3v09xqz`.
pub fn generate_id(prefix: &str, length: usize) -> String {
    let suffix = nanoid::format(nanoid::rngs::default, &ID_ALPHABET, length);
    format!("{}{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invest_score_counts_true_values() {
        let none = InvestCriteria::default();
        assert_eq!(none.score(), 0);

        let four = InvestCriteria {
            independent: true,
            negotiable: true,
            valuable: true,
            estimable: true,
            ..Default::default()
        };
        assert_eq!(four.score(), 4);
    }

    #[test]
    fn test_invest_missing_fields_default_to_false() {
        let criteria: InvestCriteria =
            serde_json::from_str(r#"{"independent": true, "testable": true}"#).unwrap();
        assert!(criteria.independent);
        assert!(criteria.testable);
        assert!(!criteria.negotiable);
        assert_eq!(criteria.score(), 2);
    }

    #[test]
    fn test_new_story_defaults() {
        let story = UserStory::new(
            "story-abc12".to_string(),
            "As a user, I want X so that Y".to_string(),
            "Description".to_string(),
        );
        assert_eq!(story.test_status, TestStatus::NotTested);
        assert!(story.updated_at.is_none());
        assert!(story.acceptance_criteria.is_empty());
    }

    #[test]
    fn test_set_test_status_touches_updated_at() {
        let mut story = UserStory::new(
            "story-abc12".to_string(),
            "Title".to_string(),
            "Desc".to_string(),
        );
        story.set_test_status(TestStatus::Passed);
        assert_eq!(story.test_status, TestStatus::Passed);
        assert!(story.updated_at.is_some());
    }

    #[test]
    fn test_generate_id_prefix_and_length() {
        let id1 = generate_id("story-", 8);
        let id2 = generate_id("story-", 8);
        assert!(id1.starts_with("story-"));
        assert_eq!(id1.len(), 14);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_story_serde_round_trip() {
        let story = UserStory::new(
            "story-xyz99".to_string(),
            "As a user, I want to log in so that I can see my data".to_string(),
            "Login flow".to_string(),
        )
        .with_definition_of_done("All scenarios pass in CI")
        .with_acceptance_criteria(vec![GherkinScenario {
            scenario_title: "Successful login".to_string(),
            steps: vec![
                GherkinStep::new(GherkinKeyword::Given, "a registered user"),
                GherkinStep::new(GherkinKeyword::When, "they submit valid credentials"),
                GherkinStep::new(GherkinKeyword::Then, "they see their dashboard"),
            ],
        }]);

        let json = serde_json::to_string(&story).unwrap();
        let parsed: UserStory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, story);
        assert_eq!(parsed.created_at, story.created_at);
    }
}
