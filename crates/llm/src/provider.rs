//! LLM-backed [`CurriculumProvider`].
//!
//! Every downstream failure (transport, timeout, status, empty content,
//! bad JSON, wrong shape) is logged and replaced with the static payloads
//! from [`crate::fallback`]. Callers never see an error from this provider.

use async_trait::async_trait;
use autopath_core::error::CoreError;
use autopath_core::followup::{FollowupAnswers, FollowupQuestion, FollowupsPayload};
use autopath_core::intake::Intake;
use autopath_core::plan::Plan;
use autopath_core::provider::CurriculumProvider;

use crate::client::ChatClient;
use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::fallback;
use crate::prompts::{
    self, FOLLOWUPS_MAX_TOKENS, FOLLOWUPS_SYSTEM_PROMPT, PLAN_MAX_TOKENS, PLAN_SYSTEM_PROMPT,
};

pub struct LlmProvider {
    client: ChatClient,
}

impl LlmProvider {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self::new(ChatClient::new(config)?))
    }

    /// Ask the model for follow-ups, without any fallback.
    pub async fn request_followups(&self, intake: &Intake) -> Result<FollowupsPayload, LlmError> {
        let content = self
            .client
            .complete_json(
                FOLLOWUPS_SYSTEM_PROMPT,
                &prompts::followups_prompt(intake),
                FOLLOWUPS_MAX_TOKENS,
            )
            .await?;

        let payload: FollowupsPayload = serde_json::from_str(&content)?;
        check_followups_shape(&payload)?;
        Ok(payload)
    }

    /// Ask the model for a plan, without any fallback.
    pub async fn request_plan(
        &self,
        intake: &Intake,
        answers: &FollowupAnswers,
    ) -> Result<Plan, LlmError> {
        let content = self
            .client
            .complete_json(
                PLAN_SYSTEM_PROMPT,
                &prompts::plan_prompt(intake, answers),
                PLAN_MAX_TOKENS,
            )
            .await?;

        let plan: Plan = serde_json::from_str(&content)?;
        check_plan_shape(&plan)?;
        Ok(plan)
    }
}

#[async_trait]
impl CurriculumProvider for LlmProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_followups(&self, intake: &Intake) -> Result<FollowupsPayload, CoreError> {
        match self.request_followups(intake).await {
            Ok(payload) => {
                tracing::info!(
                    model = self.client.model(),
                    questions = payload.questions.len(),
                    "Generated follow-ups with LLM",
                );
                Ok(payload)
            }
            Err(e) => {
                tracing::warn!(error = %e, "LLM follow-up generation failed, using fallback questions");
                Ok(fallback::followups(intake))
            }
        }
    }

    async fn generate_plan(
        &self,
        intake: &Intake,
        answers: &FollowupAnswers,
    ) -> Result<Plan, CoreError> {
        match self.request_plan(intake, answers).await {
            Ok(plan) => {
                tracing::info!(
                    model = self.client.model(),
                    weeks = plan.weeks.len(),
                    "Generated plan with LLM",
                );
                Ok(plan)
            }
            Err(e) => {
                tracing::warn!(error = %e, "LLM plan generation failed, using fallback plan");
                Ok(fallback::plan(intake))
            }
        }
    }
}

fn check_followups_shape(payload: &FollowupsPayload) -> Result<(), LlmError> {
    if payload.questions.is_empty() {
        return Err(LlmError::UnexpectedShape("no questions".into()));
    }
    for question in &payload.questions {
        if question.id().trim().is_empty() {
            return Err(LlmError::UnexpectedShape("question without id".into()));
        }
        if let FollowupQuestion::SingleSelect { options, .. }
        | FollowupQuestion::MultiSelect { options, .. } = question
        {
            if options.is_empty() {
                return Err(LlmError::UnexpectedShape(format!(
                    "select question '{}' has no options",
                    question.id()
                )));
            }
        }
    }
    Ok(())
}

fn check_plan_shape(plan: &Plan) -> Result<(), LlmError> {
    if plan.weeks.is_empty() {
        return Err(LlmError::UnexpectedShape("no weeks".into()));
    }
    let empty_day = plan
        .weeks
        .iter()
        .flat_map(|w| w.days.iter().map(move |d| (w.week, d)))
        .find(|(_, d)| d.tasks.is_empty());
    if let Some((week, day)) = empty_day {
        return Err(LlmError::UnexpectedShape(format!(
            "week {week} day {} has no tasks",
            day.day
        )));
    }
    Ok(())
}
