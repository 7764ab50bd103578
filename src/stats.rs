//! Backlog statistics: test-status breakdown and INVEST compliance rates.

use crate::model::{TestStatus, UserStory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogStats {
    pub total_stories: usize,
    pub test_status_breakdown: TestStatusBreakdown,
    pub invest_compliance: InvestCompliance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestStatusBreakdown {
    pub not_tested: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Percentage of stories satisfying each INVEST criterion, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InvestCompliance {
    pub independent: f64,
    pub negotiable: f64,
    pub valuable: f64,
    pub estimable: f64,
    pub small: f64,
    pub testable: f64,
}

fn percentage(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Aggregate stats over the current backlog contents.
pub fn compute(stories: &[UserStory]) -> BacklogStats {
    let total = stories.len();
    if total == 0 {
        return BacklogStats {
            total_stories: 0,
            test_status_breakdown: TestStatusBreakdown::default(),
            invest_compliance: InvestCompliance::default(),
        };
    }

    let breakdown = TestStatusBreakdown {
        not_tested: stories
            .iter()
            .filter(|s| s.test_status == TestStatus::NotTested)
            .count(),
        passed: stories
            .iter()
            .filter(|s| s.test_status == TestStatus::Passed)
            .count(),
        failed: stories
            .iter()
            .filter(|s| s.test_status == TestStatus::Failed)
            .count(),
    };

    let count = |f: fn(&UserStory) -> bool| stories.iter().filter(|s| f(s)).count();
    let compliance = InvestCompliance {
        independent: percentage(count(|s| s.invest_criteria.independent), total),
        negotiable: percentage(count(|s| s.invest_criteria.negotiable), total),
        valuable: percentage(count(|s| s.invest_criteria.valuable), total),
        estimable: percentage(count(|s| s.invest_criteria.estimable), total),
        small: percentage(count(|s| s.invest_criteria.small), total),
        testable: percentage(count(|s| s.invest_criteria.testable), total),
    };

    BacklogStats {
        total_stories: total,
        test_status_breakdown: breakdown,
        invest_compliance: compliance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvestCriteria;

    fn story(id: &str, invest: InvestCriteria, status: TestStatus) -> UserStory {
        let mut story = UserStory::new(
            id.to_string(),
            "As a user, I want stats so that I can report".to_string(),
            "Stats".to_string(),
        )
        .with_invest_criteria(invest);
        story.test_status = status;
        story
    }

    #[test]
    fn test_empty_backlog_stats() {
        let stats = compute(&[]);
        assert_eq!(stats.total_stories, 0);
        assert_eq!(stats.test_status_breakdown, TestStatusBreakdown::default());
        assert_eq!(stats.invest_compliance, InvestCompliance::default());
    }

    #[test]
    fn test_breakdown_and_percentages() {
        let stories = vec![
            story(
                "story-1",
                InvestCriteria {
                    independent: true,
                    valuable: true,
                    ..Default::default()
                },
                TestStatus::Passed,
            ),
            story(
                "story-2",
                InvestCriteria {
                    independent: true,
                    ..Default::default()
                },
                TestStatus::NotTested,
            ),
            story("story-3", InvestCriteria::default(), TestStatus::Failed),
        ];

        let stats = compute(&stories);
        assert_eq!(stats.total_stories, 3);
        assert_eq!(stats.test_status_breakdown.passed, 1);
        assert_eq!(stats.test_status_breakdown.not_tested, 1);
        assert_eq!(stats.test_status_breakdown.failed, 1);

        assert_eq!(stats.invest_compliance.independent, 66.7);
        assert_eq!(stats.invest_compliance.valuable, 33.3);
        assert_eq!(stats.invest_compliance.small, 0.0);
    }

    #[test]
    fn test_full_compliance_is_100() {
        let all = InvestCriteria {
            independent: true,
            negotiable: true,
            valuable: true,
            estimable: true,
            small: true,
            testable: true,
        };
        let stats = compute(&[story("story-1", all, TestStatus::NotTested)]);
        assert_eq!(stats.invest_compliance.testable, 100.0);
    }
}
