//! The curriculum provider seam.
//!
//! HTTP handlers talk to a [`CurriculumProvider`] and never to a generator
//! directly, so the rule-based [`TemplateProvider`] and the LLM-backed
//! provider in `autopath-llm` are interchangeable at startup.

use async_trait::async_trait;
use chrono::Utc;

use crate::error::CoreError;
use crate::followup::{self, FollowupAnswers, FollowupsPayload};
use crate::intake::Intake;
use crate::plan::{self, Plan};

/// Generates follow-up questions and study plans.
#[async_trait]
pub trait CurriculumProvider: Send + Sync {
    /// Short identifier used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    async fn generate_followups(&self, intake: &Intake) -> Result<FollowupsPayload, CoreError>;

    async fn generate_plan(
        &self,
        intake: &Intake,
        answers: &FollowupAnswers,
    ) -> Result<Plan, CoreError>;
}

/// Deterministic provider backed by the lookup-table generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateProvider;

#[async_trait]
impl CurriculumProvider for TemplateProvider {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate_followups(&self, intake: &Intake) -> Result<FollowupsPayload, CoreError> {
        let today = Utc::now().date_naive();
        Ok(followup::generate_followups(intake, today))
    }

    async fn generate_plan(
        &self,
        intake: &Intake,
        answers: &FollowupAnswers,
    ) -> Result<Plan, CoreError> {
        Ok(plan::generate_plan(intake, answers))
    }
}
