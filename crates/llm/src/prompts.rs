//! Prompts sent to the chat-completions API.

use std::fmt::Write;

use autopath_core::followup::FollowupAnswers;
use autopath_core::intake::Intake;

/// Token cap for follow-up generation.
pub const FOLLOWUPS_MAX_TOKENS: u32 = 1000;
/// Token cap for plan generation.
pub const PLAN_MAX_TOKENS: u32 = 3000;

pub const FOLLOWUPS_SYSTEM_PROMPT: &str =
    "You are a helpful curriculum design assistant. Always respond with valid JSON only.";

pub const PLAN_SYSTEM_PROMPT: &str = "You are a helpful curriculum design assistant. \
    Always respond with valid JSON only. Create practical, actionable learning plans.";

const FOLLOWUPS_SCHEMA: &str = r#"{
  "questions": [
    {
      "id": "unique_string_id",
      "prompt": "Clear question text",
      "type": "single_select" | "multi_select" | "free_text",
      "options": ["option1", "option2"] // only for select types
    }
  ]
}"#;

const PLAN_SCHEMA: &str = r#"{
  "weeks": [
    {
      "week": 1,
      "theme": "Week theme",
      "hours_planned": 5,
      "milestones": ["milestone1", "milestone2"],
      "days": [
        {
          "day": 1,
          "time_est": 1.5,
          "tasks": [
            {
              "title": "Task description",
              "resource": "Resource name (optional)",
              "deliverable": "What to produce (optional)"
            }
          ]
        }
      ]
    }
  ],
  "resources": [
    { "label": "Resource name", "type": "video" | "article" | "docs", "url": "https://example.com" }
  ],
  "assessments": [
    { "when": "End of Week 2", "rubric": "Assessment description" }
  ]
}"#;

/// User prompt asking for 2-4 follow-up questions.
pub fn followups_prompt(intake: &Intake) -> String {
    format!(
        "You are an expert curriculum designer. Based on the user's learning intake, generate \
         2-4 targeted follow-up questions to better understand their needs and customize their \
         learning plan.\n\n\
         User's Intake:\n{profile}\n\
         Generate follow-up questions that will help personalize their curriculum. Include a mix of:\n\
         1. Experience validation questions (single_select)\n\
         2. Learning preference questions (multi_select)\n\
         3. Specific goal clarification (free_text)\n\n\
         IMPORTANT: Return ONLY valid JSON matching this exact schema:\n{FOLLOWUPS_SCHEMA}",
        profile = profile_lines(intake),
    )
}

/// User prompt asking for a full plan spanning `intake.duration` weeks.
pub fn plan_prompt(intake: &Intake, answers: &FollowupAnswers) -> String {
    format!(
        "You are an expert curriculum designer. Create a detailed, personalized learning plan \
         based on the user's intake and follow-up responses.\n\n\
         User's Profile:\n{profile}\n\
         Follow-up Answers:\n{answers}\n\
         Create a comprehensive {weeks}-week learning plan with:\n\
         1. Weekly themes and hour allocations\n\
         2. Daily learning tasks with time estimates\n\
         3. Milestones for each week\n\
         4. Relevant learning resources\n\
         5. Progress assessments\n\n\
         IMPORTANT: Return ONLY valid JSON matching this exact schema:\n{PLAN_SCHEMA}",
        profile = profile_lines(intake),
        answers = answer_lines(answers),
        weeks = intake.duration,
    )
}

fn profile_lines(intake: &Intake) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "- Skill/Subject: {}", intake.skill);
    let _ = writeln!(out, "- Target Goal: {}", intake.target_goal);
    let _ = writeln!(out, "- Experience Level: {}", intake.experience_level);
    let _ = writeln!(
        out,
        "- Time Budget: {} hours/week for {} weeks",
        intake.time_budget, intake.duration
    );
    let _ = writeln!(
        out,
        "- Learning Style: {}",
        intake
            .learning_style_summary()
            .unwrap_or_else(|| "Not specified".to_string())
    );
    let _ = writeln!(
        out,
        "- Tools Available: {}",
        intake.tools.as_deref().unwrap_or("Not specified")
    );
    let _ = writeln!(
        out,
        "- Constraints: {}",
        intake.constraints.as_deref().unwrap_or("None")
    );
    if let Some(deadline) = intake.deadline {
        let _ = writeln!(out, "- Deadline: {deadline}");
    }
    out
}

fn answer_lines(answers: &FollowupAnswers) -> String {
    if answers.is_empty() {
        return "- None provided\n".to_string();
    }
    answers
        .iter()
        .map(|(id, answer)| format!("- {id}: {answer}\n"))
        .collect()
}
