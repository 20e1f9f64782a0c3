//! Plan export document, as offered for download from the plan page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::intake::Intake;
use crate::plan::Plan;

/// Value stamped into every export's `exportedBy` field.
pub const EXPORTED_BY: &str = "AutoPath";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlanExport {
    pub intake: Intake,
    pub plan: Plan,
    pub generated_at: DateTime<Utc>,
    pub exported_by: String,
}

impl PlanExport {
    /// Assemble an export. Rejects plans without any weeks.
    pub fn new(intake: Intake, plan: Plan, generated_at: DateTime<Utc>) -> Result<Self, CoreError> {
        if plan.weeks.is_empty() {
            return Err(CoreError::Validation(
                "plan must contain at least one week".to_string(),
            ));
        }
        Ok(Self {
            intake,
            plan,
            generated_at,
            exported_by: EXPORTED_BY.to_string(),
        })
    }
}
