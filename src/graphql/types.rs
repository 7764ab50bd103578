use crate::model::{self, UserStory as ModelStory};
use crate::rules;
use crate::stats;
use async_graphql::{Enum, InputObject, SimpleObject};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum TestStatus {
    NotTested,
    Passed,
    Failed,
}

impl From<model::TestStatus> for TestStatus {
    fn from(s: model::TestStatus) -> Self {
        match s {
            model::TestStatus::NotTested => TestStatus::NotTested,
            model::TestStatus::Passed => TestStatus::Passed,
            model::TestStatus::Failed => TestStatus::Failed,
        }
    }
}

impl From<TestStatus> for model::TestStatus {
    fn from(s: TestStatus) -> Self {
        match s {
            TestStatus::NotTested => model::TestStatus::NotTested,
            TestStatus::Passed => model::TestStatus::Passed,
            TestStatus::Failed => model::TestStatus::Failed,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GherkinKeyword {
    Given,
    When,
    Then,
    And,
    But,
}

impl From<model::GherkinKeyword> for GherkinKeyword {
    fn from(k: model::GherkinKeyword) -> Self {
        match k {
            model::GherkinKeyword::Given => GherkinKeyword::Given,
            model::GherkinKeyword::When => GherkinKeyword::When,
            model::GherkinKeyword::Then => GherkinKeyword::Then,
            model::GherkinKeyword::And => GherkinKeyword::And,
            model::GherkinKeyword::But => GherkinKeyword::But,
        }
    }
}

#[derive(SimpleObject)]
pub struct GherkinStep {
    pub keyword: GherkinKeyword,
    pub text: String,
}

#[derive(SimpleObject)]
pub struct GherkinScenario {
    pub scenario_title: String,
    pub steps: Vec<GherkinStep>,
}

impl From<model::GherkinScenario> for GherkinScenario {
    fn from(s: model::GherkinScenario) -> Self {
        Self {
            scenario_title: s.scenario_title,
            steps: s
                .steps
                .into_iter()
                .map(|step| GherkinStep {
                    keyword: step.keyword.into(),
                    text: step.text,
                })
                .collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct InvestCriteria {
    pub independent: bool,
    pub negotiable: bool,
    pub valuable: bool,
    pub estimable: bool,
    pub small: bool,
    pub testable: bool,
    pub score: usize,
}

impl From<model::InvestCriteria> for InvestCriteria {
    fn from(c: model::InvestCriteria) -> Self {
        Self {
            independent: c.independent,
            negotiable: c.negotiable,
            valuable: c.valuable,
            estimable: c.estimable,
            small: c.small,
            testable: c.testable,
            score: c.score(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    pub invest_criteria: InvestCriteria,
    pub definition_of_done: String,
    pub acceptance_criteria: Vec<GherkinScenario>,
    pub test_status: TestStatus,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<ModelStory> for Story {
    fn from(s: ModelStory) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            invest_criteria: s.invest_criteria.into(),
            definition_of_done: s.definition_of_done,
            acceptance_criteria: s
                .acceptance_criteria
                .into_iter()
                .map(Into::into)
                .collect(),
            test_status: s.test_status.into(),
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(InputObject)]
pub struct TransformNotesInput {
    /// Raw requirement notes to transform.
    pub content: String,
    /// Optional project or domain context.
    pub context: Option<String>,
    /// Story ceiling; defaults to the configured value.
    pub max_stories: Option<usize>,
}

#[derive(SimpleObject)]
pub struct TransformResult {
    pub user_stories: Vec<Story>,
    pub ambiguity_flags: Vec<String>,
    pub processing_time: f64,
}

impl From<model::TransformOutcome> for TransformResult {
    fn from(o: model::TransformOutcome) -> Self {
        Self {
            user_stories: o.user_stories.into_iter().map(Into::into).collect(),
            ambiguity_flags: o.ambiguity_flags,
            processing_time: o.processing_time,
        }
    }
}

#[derive(SimpleObject)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl From<rules::ValidationOutcome> for ValidationResult {
    fn from(o: rules::ValidationOutcome) -> Self {
        Self {
            is_valid: o.is_valid,
            errors: o
                .errors
                .into_iter()
                .map(|e| ValidationError {
                    field: e.field,
                    message: e.message,
                })
                .collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct StoryConnection {
    pub nodes: Vec<Story>,
    pub total_count: usize,
}

#[derive(SimpleObject)]
pub struct BacklogStats {
    pub total_stories: usize,
    pub test_status_breakdown: TestStatusBreakdown,
    pub invest_compliance: InvestCompliance,
}

#[derive(SimpleObject)]
pub struct TestStatusBreakdown {
    pub not_tested: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(SimpleObject)]
pub struct InvestCompliance {
    pub independent: f64,
    pub negotiable: f64,
    pub valuable: f64,
    pub estimable: f64,
    pub small: f64,
    pub testable: f64,
}

impl From<stats::BacklogStats> for BacklogStats {
    fn from(s: stats::BacklogStats) -> Self {
        Self {
            total_stories: s.total_stories,
            test_status_breakdown: TestStatusBreakdown {
                not_tested: s.test_status_breakdown.not_tested,
                passed: s.test_status_breakdown.passed,
                failed: s.test_status_breakdown.failed,
            },
            invest_compliance: InvestCompliance {
                independent: s.invest_compliance.independent,
                negotiable: s.invest_compliance.negotiable,
                valuable: s.invest_compliance.valuable,
                estimable: s.invest_compliance.estimable,
                small: s.invest_compliance.small,
                testable: s.invest_compliance.testable,
            },
        }
    }
}
