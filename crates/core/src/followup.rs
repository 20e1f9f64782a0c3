//! Follow-up question types and the rule-based follow-up generator.
//!
//! The generator always asks two base questions, then adds up to three
//! conditional ones driven by keywords in the goal text and by how much
//! time the learner has.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::intake::Intake;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Timelines shorter than this many days get a prioritisation question.
pub const TIGHT_TIMELINE_DAYS: i64 = 90;

/// Goal keywords that trigger the frontend question.
const FRONTEND_KEYWORDS: &[&str] = &["web", "frontend"];
/// Goal keywords that trigger the backend question.
const BACKEND_KEYWORDS: &[&str] = &["backend", "api"];

pub const EXPERIENCE_OPTIONS: [&str; 4] = [
    "Complete beginner - never touched this topic",
    "Some theoretical knowledge but no hands-on experience",
    "Built small projects or tutorials",
    "Professional experience in related areas",
];

const LEARNING_STYLE_OPTIONS: [&str; 6] = [
    "Step-by-step tutorials",
    "Project-based learning",
    "Reading documentation",
    "Video courses",
    "Interactive coding exercises",
    "Group discussions or forums",
];

const FRONTEND_OPTIONS: [&str; 5] = ["React", "Vue", "Angular", "Vanilla JavaScript", "TypeScript"];

const BACKEND_OPTIONS: [&str; 5] = [
    "REST APIs",
    "GraphQL",
    "Microservices",
    "Database design",
    "DevOps",
];

// ---------------------------------------------------------------------------
// Question types
// ---------------------------------------------------------------------------

/// A clarifying question, tagged on the wire by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FollowupQuestion {
    SingleSelect {
        id: String,
        prompt: String,
        options: Vec<String>,
    },
    MultiSelect {
        id: String,
        prompt: String,
        options: Vec<String>,
    },
    FreeText {
        id: String,
        prompt: String,
    },
}

impl FollowupQuestion {
    pub fn single_select(id: &str, prompt: impl Into<String>, options: &[&str]) -> Self {
        Self::SingleSelect {
            id: id.to_string(),
            prompt: prompt.into(),
            options: to_owned_options(options),
        }
    }

    pub fn multi_select(id: &str, prompt: impl Into<String>, options: &[&str]) -> Self {
        Self::MultiSelect {
            id: id.to_string(),
            prompt: prompt.into(),
            options: to_owned_options(options),
        }
    }

    pub fn free_text(id: &str, prompt: impl Into<String>) -> Self {
        Self::FreeText {
            id: id.to_string(),
            prompt: prompt.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::SingleSelect { id, .. }
            | Self::MultiSelect { id, .. }
            | Self::FreeText { id, .. } => id,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::SingleSelect { prompt, .. }
            | Self::MultiSelect { prompt, .. }
            | Self::FreeText { prompt, .. } => prompt,
        }
    }

    /// Options for select questions; `None` for free text.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::SingleSelect { options, .. } | Self::MultiSelect { options, .. } => {
                Some(options)
            }
            Self::FreeText { .. } => None,
        }
    }
}

fn to_owned_options(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

/// The set of follow-up questions returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FollowupsPayload {
    pub questions: Vec<FollowupQuestion>,
}

impl FollowupsPayload {
    pub fn question_ids(&self) -> Vec<&str> {
        self.questions.iter().map(FollowupQuestion::id).collect()
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// A single answer: free text / single choice, or a list of choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FollowupAnswer {
    Text(String),
    Choices(Vec<String>),
}

impl std::fmt::Display for FollowupAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Choices(choices) => f.write_str(&choices.join(", ")),
        }
    }
}

/// Answers keyed by question id. Not checked against the asked questions.
pub type FollowupAnswers = BTreeMap<String, FollowupAnswer>;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Build the follow-up questions for an intake.
///
/// Pure: the same intake and `today` always produce the same questions.
/// `today` only matters when the intake carries a deadline.
pub fn generate_followups(intake: &Intake, today: NaiveDate) -> FollowupsPayload {
    let mut questions = vec![
        FollowupQuestion::single_select(
            "experience",
            format!(
                "You mentioned you're at a {} level with {}. Which of these best describes your experience?",
                intake.experience_level, intake.skill
            ),
            &EXPERIENCE_OPTIONS,
        ),
        FollowupQuestion::multi_select(
            "learning_style",
            "What learning approaches work best for you?",
            &LEARNING_STYLE_OPTIONS,
        ),
    ];

    if intake.goal_mentions_any(FRONTEND_KEYWORDS) {
        questions.push(FollowupQuestion::multi_select(
            "frontend_focus",
            "Which frontend technologies are you most interested in?",
            &FRONTEND_OPTIONS,
        ));
    }

    if intake.goal_mentions_any(BACKEND_KEYWORDS) {
        questions.push(FollowupQuestion::single_select(
            "backend_focus",
            "What type of backend development interests you most?",
            &BACKEND_OPTIONS,
        ));
    }

    if intake.timeline_days(today) < TIGHT_TIMELINE_DAYS {
        questions.push(FollowupQuestion::free_text(
            "priority",
            "Given your timeline, what's most important to focus on first?",
        ));
    }

    FollowupsPayload { questions }
}
