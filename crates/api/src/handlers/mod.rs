pub mod followups;
pub mod plan;
