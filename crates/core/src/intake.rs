//! Learner intake profile and its validation rules.
//!
//! The intake is the first thing a learner submits. Field names on the wire
//! are camelCase; the aliases keep payloads from the older intake form
//! (`goal`, `currentLevel`, `timeCommitment`, `preferredFormat`) accepted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

// ---------------------------------------------------------------------------
// Experience level
// ---------------------------------------------------------------------------

/// Self-reported experience with the skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExperienceLevel {
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Learning style
// ---------------------------------------------------------------------------

/// Learning-style tags the plan generator knows how to turn into tasks.
///
/// Tags arrive as free strings so that unknown values survive a round trip;
/// [`LearningStyle::from_tag`] maps the recognised ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LearningStyle {
    StepByStep,
    VideoFirst,
    ProjectLed,
}

impl LearningStyle {
    /// Parse a tag case-insensitively. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "step-by-step" | "article" | "documentation" => Some(Self::StepByStep),
            "video-first" | "video" => Some(Self::VideoFirst),
            "project-led" | "hands-on" => Some(Self::ProjectLed),
            _ => None,
        }
    }

    /// Canonical tag as shown on the intake form.
    pub fn label(self) -> &'static str {
        match self {
            Self::StepByStep => "Step-by-step",
            Self::VideoFirst => "Video-first",
            Self::ProjectLed => "Project-led",
        }
    }
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

/// The learner's self-reported profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Intake {
    #[validate(length(min = 1, message = "Please tell us which skill you want to learn"))]
    pub skill: String,

    #[serde(alias = "goal")]
    #[validate(length(
        min = 10,
        message = "Please describe your learning goal in at least 10 characters"
    ))]
    pub target_goal: String,

    #[serde(alias = "currentLevel")]
    pub experience_level: ExperienceLevel,

    /// Weekly hour budget.
    #[serde(alias = "timeCommitment")]
    #[validate(range(
        min = 1.0,
        max = 40.0,
        message = "Time budget must be between 1-40 hours per week"
    ))]
    pub time_budget: f64,

    /// Duration in weeks.
    #[validate(range(
        min = 1,
        max = 52,
        message = "Duration must be between 1-52 weeks"
    ))]
    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub tools: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub constraints: Option<String>,

    #[serde(default)]
    #[serde(alias = "preferredFormat")]
    pub learning_style: Vec<String>,

    /// Optional target date; tightens the timeline check when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub deadline: Option<NaiveDate>,
}

impl Intake {
    /// Whether the learner ticked the given learning style.
    pub fn has_style(&self, style: LearningStyle) -> bool {
        self.learning_style
            .iter()
            .any(|tag| LearningStyle::from_tag(tag) == Some(style))
    }

    /// Case-insensitive substring check against the goal text.
    pub fn goal_mentions_any(&self, needles: &[&str]) -> bool {
        let goal = self.target_goal.to_lowercase();
        needles.iter().any(|needle| goal.contains(needle))
    }

    /// Number of days the learner has, counted from `today`.
    ///
    /// Uses the deadline when one is given, otherwise `duration` weeks.
    pub fn timeline_days(&self, today: NaiveDate) -> i64 {
        match self.deadline {
            Some(deadline) => (deadline - today).num_days(),
            None => i64::from(self.duration) * 7,
        }
    }

    /// Learning-style tags joined for prompts and summaries.
    pub fn learning_style_summary(&self) -> Option<String> {
        if self.learning_style.is_empty() {
            None
        } else {
            Some(self.learning_style.join(", "))
        }
    }
}
