//! Static payloads returned when the LLM call fails.

use autopath_core::followup::{FollowupQuestion, FollowupsPayload, EXPERIENCE_OPTIONS};
use autopath_core::intake::Intake;
use autopath_core::plan::{Assessment, Day, Plan, Resource, ResourceKind, Task, Week};

const LEARNING_FOCUS_OPTIONS: [&str; 5] = [
    "Practical hands-on projects",
    "Understanding fundamental concepts",
    "Building a portfolio",
    "Preparing for job interviews",
    "Staying current with best practices",
];

/// Two generic questions: an experience check and a learning focus.
pub fn followups(intake: &Intake) -> FollowupsPayload {
    FollowupsPayload {
        questions: vec![
            FollowupQuestion::single_select(
                "experience_check",
                format!(
                    "You mentioned you're at a {} level with {}. Which best describes your current experience?",
                    intake.experience_level, intake.skill
                ),
                &EXPERIENCE_OPTIONS,
            ),
            FollowupQuestion::multi_select(
                "learning_focus",
                "What aspects of your learning are most important to you?",
                &LEARNING_FOCUS_OPTIONS,
            ),
        ],
    }
}

/// A one-week starter plan.
pub fn plan(intake: &Intake) -> Plan {
    Plan {
        weeks: vec![Week {
            week: 1,
            theme: format!("Getting Started with {}", intake.skill),
            hours_planned: intake.time_budget,
            milestones: vec![
                "Set up development environment".to_string(),
                "Complete first basic exercise".to_string(),
            ],
            days: vec![Day {
                day: 1,
                time_est: intake.time_budget.min(2.0),
                tasks: vec![Task {
                    title: format!("Introduction to {} fundamentals", intake.skill),
                    resource: Some("Getting Started Guide".to_string()),
                    deliverable: Some("Notes on key concepts".to_string()),
                }],
            }],
        }],
        resources: vec![Resource {
            label: format!("{} Documentation", intake.skill),
            kind: ResourceKind::Docs,
            url: "https://docs.example.com".to_string(),
        }],
        assessments: vec![Assessment {
            when: "End of Week 1".to_string(),
            rubric: "Complete basic exercises and demonstrate understanding of core concepts"
                .to_string(),
        }],
    }
}
