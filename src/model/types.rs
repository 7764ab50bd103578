use crate::error::{Result, StorycraftError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Gherkin step keywords. A closed set; scenarios are ordered but the
/// keyword set itself is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GherkinKeyword {
    Given,
    When,
    Then,
    And,
    But,
}

impl fmt::Display for GherkinKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GherkinKeyword::Given => write!(f, "Given"),
            GherkinKeyword::When => write!(f, "When"),
            GherkinKeyword::Then => write!(f, "Then"),
            GherkinKeyword::And => write!(f, "And"),
            GherkinKeyword::But => write!(f, "But"),
        }
    }
}

impl FromStr for GherkinKeyword {
    type Err = StorycraftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "given" => Ok(GherkinKeyword::Given),
            "when" => Ok(GherkinKeyword::When),
            "then" => Ok(GherkinKeyword::Then),
            "and" => Ok(GherkinKeyword::And),
            "but" => Ok(GherkinKeyword::But),
            _ => Err(StorycraftError::Parse(format!(
                "Invalid Gherkin keyword: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    #[default]
    NotTested,
    Passed,
    Failed,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::NotTested => write!(f, "not_tested"),
            TestStatus::Passed => write!(f, "passed"),
            TestStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for TestStatus {
    type Err = StorycraftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "not_tested" | "not-tested" | "untested" => Ok(TestStatus::NotTested),
            "passed" | "pass" => Ok(TestStatus::Passed),
            "failed" | "fail" => Ok(TestStatus::Failed),
            _ => Err(StorycraftError::Parse(format!(
                "Invalid test status: {}",
                s
            ))),
        }
    }
}
