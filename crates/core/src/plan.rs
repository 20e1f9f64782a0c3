//! Study plan types and the template plan generator.
//!
//! The generator is a pure function of the intake: week count comes from
//! the hour budget, themes and milestones from fixed tables, and daily tasks
//! from the learner's learning-style tags.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::followup::FollowupAnswers;
use crate::intake::{Intake, LearningStyle};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Total study hours a plan is sized for.
pub const TARGET_TOTAL_HOURS: f64 = 40.0;
/// Shortest generated plan, in weeks.
pub const MIN_PLAN_WEEKS: u32 = 4;
/// Longest generated plan, in weeks.
pub const MAX_PLAN_WEEKS: u32 = 12;
/// Plans longer than this get a final portfolio assessment.
pub const FINAL_ASSESSMENT_AFTER_WEEKS: u32 = 6;

const WEEK_THEMES: [&str; 10] = [
    "Foundations and Setup",
    "Core Concepts",
    "Hands-on Practice",
    "Building Your First Project",
    "Advanced Techniques",
    "Best Practices",
    "Performance and Optimization",
    "Testing and Deployment",
    "Real-world Applications",
    "Portfolio and Next Steps",
];

// ---------------------------------------------------------------------------
// Plan types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Task {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub deliverable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Day {
    pub day: u32,
    /// Estimated hours for the day, rounded to one decimal.
    pub time_est: f64,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Week {
    pub week: u32,
    pub theme: String,
    pub hours_planned: f64,
    pub milestones: Vec<String>,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResourceKind {
    Video,
    Article,
    Docs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub when: String,
    pub rubric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plan {
    pub weeks: Vec<Week>,
    pub resources: Vec<Resource>,
    pub assessments: Vec<Assessment>,
}

impl Plan {
    /// Sum of `hours_planned` across all weeks.
    pub fn total_hours(&self) -> f64 {
        self.weeks.iter().map(|w| w.hours_planned).sum()
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Build a study plan from the intake.
///
/// `_answers` is accepted so the signature matches the LLM-backed provider;
/// the template generator does not use it.
pub fn generate_plan(intake: &Intake, _answers: &FollowupAnswers) -> Plan {
    let week_count = weeks_needed(intake.time_budget);

    let weeks = (1..=week_count)
        .map(|week| Week {
            week,
            theme: week_theme(week, &intake.skill),
            hours_planned: intake.time_budget,
            milestones: week_milestones(week, &intake.skill),
            days: days_for_week(week, intake),
        })
        .collect();

    Plan {
        weeks,
        resources: default_resources(),
        assessments: assessments(week_count),
    }
}

/// `clamp(ceil(40 / hours_per_week), 4, 12)`.
///
/// Non-positive or non-finite budgets still land inside the bounds.
pub fn weeks_needed(hours_per_week: f64) -> u32 {
    let raw = (TARGET_TOTAL_HOURS / hours_per_week).ceil();
    // `as` saturates: inf -> u32::MAX, NaN -> 0.
    (raw as u32).clamp(MIN_PLAN_WEEKS, MAX_PLAN_WEEKS)
}

/// Study days per week: 5 when the budget is over a day's worth per weekday, else 3.
pub fn days_per_week(hours_per_week: f64) -> u32 {
    if (hours_per_week / 7.0).ceil() > 1.0 {
        5
    } else {
        3
    }
}

fn week_theme(week: u32, skill: &str) -> String {
    match WEEK_THEMES.get(week as usize - 1) {
        Some(theme) => theme.to_string(),
        None => format!("Advanced {skill} Topics"),
    }
}

fn week_milestones(week: u32, skill: &str) -> Vec<String> {
    let pair = match week {
        1 => [
            "Complete environment setup".to_string(),
            format!("Understand basic {skill} concepts"),
        ],
        2 => [
            "Build first simple example".to_string(),
            "Grasp fundamental patterns".to_string(),
        ],
        3 => [
            "Complete guided tutorial".to_string(),
            "Implement core features".to_string(),
        ],
        4 => [
            "Finish first independent project".to_string(),
            "Apply learned concepts".to_string(),
        ],
        5 => [
            "Master advanced techniques".to_string(),
            "Optimize your solutions".to_string(),
        ],
        _ => [
            format!("Advanced {skill} milestone"),
            "Portfolio project progress".to_string(),
        ],
    };
    pair.into()
}

fn days_for_week(week: u32, intake: &Intake) -> Vec<Day> {
    let days = days_per_week(intake.time_budget);
    let time_est = round_to_tenth(intake.time_budget / f64::from(days));

    (1..=days)
        .map(|day| Day {
            day,
            time_est,
            tasks: tasks_for_day(week, day, intake),
        })
        .collect()
}

fn tasks_for_day(week: u32, day: u32, intake: &Intake) -> Vec<Task> {
    let mut tasks = Vec::new();

    if intake.has_style(LearningStyle::StepByStep) {
        tasks.push(Task {
            title: format!("Read: Week {week} concepts - Day {day} fundamentals"),
            resource: Some("Course documentation or recommended articles".to_string()),
            deliverable: None,
        });
    }

    if intake.has_style(LearningStyle::VideoFirst) {
        tasks.push(Task {
            title: format!("Watch: Week {week} tutorial series - Episode {day}"),
            resource: Some("Video tutorial series".to_string()),
            deliverable: None,
        });
    }

    if intake.has_style(LearningStyle::ProjectLed) {
        tasks.push(Task {
            title: format!("Practice: Week {week} exercises - Set {day}"),
            resource: None,
            deliverable: Some("Working code examples".to_string()),
        });
    }

    if tasks.is_empty() {
        tasks.push(Task {
            title: format!("Study: {} fundamentals", intake.skill),
            resource: None,
            deliverable: Some("Notes and practice exercises".to_string()),
        });
    }

    tasks
}

fn default_resources() -> Vec<Resource> {
    vec![
        Resource {
            label: "Official Documentation".to_string(),
            kind: ResourceKind::Docs,
            url: "https://docs.example.com".to_string(),
        },
        Resource {
            label: "Video Course Series".to_string(),
            kind: ResourceKind::Video,
            url: "https://courses.example.com".to_string(),
        },
        Resource {
            label: "Community Tutorial".to_string(),
            kind: ResourceKind::Article,
            url: "https://tutorial.example.com".to_string(),
        },
    ]
}

fn assessments(week_count: u32) -> Vec<Assessment> {
    let mut assessments = vec![
        Assessment {
            when: "Week 2".to_string(),
            rubric: "Complete basic exercises and demonstrate understanding of core concepts"
                .to_string(),
        },
        Assessment {
            when: format!("Week {}", week_count.div_ceil(2)),
            rubric: "Build and present a functional project using learned skills".to_string(),
        },
    ];

    if week_count > FINAL_ASSESSMENT_AFTER_WEEKS {
        assessments.push(Assessment {
            when: format!("Week {week_count}"),
            rubric: "Portfolio project review and demonstration of advanced techniques"
                .to_string(),
        });
    }

    assessments
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::tests::sample_intake;

    fn plan_for(time_budget: f64, styles: &[&str]) -> Plan {
        let mut intake = sample_intake();
        intake.time_budget = time_budget;
        intake.learning_style = styles.iter().map(|s| s.to_string()).collect();
        generate_plan(&intake, &FollowupAnswers::new())
    }

    #[test]
    fn week_count_stays_within_bounds_for_all_valid_budgets() {
        for hours in 1..=40 {
            let weeks = weeks_needed(f64::from(hours));
            assert!(
                (MIN_PLAN_WEEKS..=MAX_PLAN_WEEKS).contains(&weeks),
                "{hours} h/week produced {weeks} weeks"
            );
        }
    }

    #[test]
    fn week_count_examples() {
        assert_eq!(weeks_needed(8.0), 5);
        assert_eq!(weeks_needed(1.0), 12);
        assert_eq!(weeks_needed(3.0), 12);
        assert_eq!(weeks_needed(4.0), 10);
        assert_eq!(weeks_needed(40.0), 4);
        assert_eq!(weeks_needed(7.5), 6);
    }

    #[test]
    fn week_count_survives_degenerate_budgets() {
        assert_eq!(weeks_needed(0.0), MAX_PLAN_WEEKS);
        assert_eq!(weeks_needed(f64::NAN), MIN_PLAN_WEEKS);
        assert_eq!(weeks_needed(1000.0), MIN_PLAN_WEEKS);
    }

    #[test]
    fn eight_hours_generates_five_numbered_weeks() {
        let plan = plan_for(8.0, &[]);
        let numbers: Vec<u32> = plan.weeks.iter().map(|w| w.week).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(plan.weeks.iter().all(|w| w.hours_planned == 8.0));
        assert_eq!(plan.total_hours(), 40.0);
    }

    #[test]
    fn themes_fall_back_past_the_table() {
        let plan = plan_for(1.0, &[]);
        assert_eq!(plan.weeks.len(), 12);
        assert_eq!(plan.weeks[0].theme, "Foundations and Setup");
        assert_eq!(plan.weeks[9].theme, "Portfolio and Next Steps");
        assert_eq!(plan.weeks[10].theme, "Advanced Rust Topics");
        assert_eq!(plan.weeks[11].theme, "Advanced Rust Topics");
    }

    #[test]
    fn milestones_fall_back_past_the_table() {
        let plan = plan_for(4.0, &[]);
        assert_eq!(
            plan.weeks[0].milestones,
            vec!["Complete environment setup", "Understand basic Rust concepts"]
        );
        assert_eq!(
            plan.weeks[4].milestones,
            vec!["Master advanced techniques", "Optimize your solutions"]
        );
        assert_eq!(
            plan.weeks[5].milestones,
            vec!["Advanced Rust milestone", "Portfolio project progress"]
        );
    }

    #[test]
    fn small_budget_uses_three_days() {
        let plan = plan_for(5.0, &[]);
        let week = &plan.weeks[0];
        assert_eq!(week.days.len(), 3);
        assert_eq!(week.days[0].time_est, 1.7);
        assert_eq!(week.days[2].day, 3);
    }

    #[test]
    fn larger_budget_uses_five_days() {
        assert_eq!(days_per_week(7.0), 3);
        assert_eq!(days_per_week(8.0), 5);

        let plan = plan_for(12.0, &[]);
        assert_eq!(plan.weeks[0].days.len(), 5);
        assert_eq!(plan.weeks[0].days[0].time_est, 2.4);
    }

    #[test]
    fn tasks_follow_learning_styles_in_fixed_order() {
        let plan = plan_for(10.0, &["Project-led", "Video-first", "Step-by-step"]);
        let tasks = &plan.weeks[1].days[2].tasks;

        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Read: Week 2 concepts - Day 3 fundamentals",
                "Watch: Week 2 tutorial series - Episode 3",
                "Practice: Week 2 exercises - Set 3",
            ]
        );
        assert_eq!(tasks[2].deliverable.as_deref(), Some("Working code examples"));
        assert!(tasks[2].resource.is_none());
    }

    #[test]
    fn unknown_styles_fall_back_to_generic_task() {
        for styles in [&[][..], &["podcasts"][..]] {
            let plan = plan_for(6.0, styles);
            for day in plan.weeks.iter().flat_map(|w| &w.days) {
                assert_eq!(day.tasks.len(), 1);
                assert_eq!(day.tasks[0].title, "Study: Rust fundamentals");
            }
        }
    }

    #[test]
    fn day_task_lists_are_never_empty() {
        for hours in [1.0, 2.5, 7.0, 8.0, 20.0, 40.0] {
            for styles in [&[][..], &["Video-first"][..], &["unknown", "hands-on"][..]] {
                let plan = plan_for(hours, styles);
                assert!(plan
                    .weeks
                    .iter()
                    .flat_map(|w| &w.days)
                    .all(|d| !d.tasks.is_empty()));
            }
        }
    }

    #[test]
    fn short_plans_get_two_assessments() {
        let plan = plan_for(8.0, &[]);
        let whens: Vec<&str> = plan.assessments.iter().map(|a| a.when.as_str()).collect();
        assert_eq!(whens, vec!["Week 2", "Week 3"]);
    }

    #[test]
    fn long_plans_get_a_final_assessment() {
        let plan = plan_for(5.0, &[]);
        assert_eq!(plan.weeks.len(), 8);
        let whens: Vec<&str> = plan.assessments.iter().map(|a| a.when.as_str()).collect();
        assert_eq!(whens, vec!["Week 2", "Week 4", "Week 8"]);
    }

    #[test]
    fn resources_are_static() {
        let plan = plan_for(8.0, &[]);
        let kinds: Vec<ResourceKind> = plan.resources.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![ResourceKind::Docs, ResourceKind::Video, ResourceKind::Article]
        );
    }

    #[test]
    fn plan_serializes_with_wire_field_names() {
        let plan = plan_for(8.0, &["hands-on"]);
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["weeks"][0]["hours_planned"], 8.0);
        assert_eq!(json["weeks"][0]["days"][0]["time_est"], 1.6);
        assert_eq!(json["resources"][0]["type"], "docs");
        let task = &json["weeks"][0]["days"][0]["tasks"][0];
        assert!(task.get("resource").is_none());
        assert_eq!(task["deliverable"], "Working code examples");
    }
}
