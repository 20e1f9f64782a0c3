//! Domain types and generation logic for the AutoPath learning planner.
//!
//! Everything in this crate is transport-agnostic: the HTTP layer lives in
//! `autopath-api` and the LLM-backed provider in `autopath-llm`.

pub mod error;
pub mod export;
pub mod followup;
pub mod intake;
pub mod plan;
pub mod provider;
