//! Rule-driven HR decision support.
//!
//! Survey scores are classified into engagement levels, organisational facts live in a
//! [`facts::FactStore`], and the [`decisions`] and [`actions`] modules turn those facts
//! into assessments, action plans, and execution reports.

pub mod actions;
pub mod config;
pub mod decisions;
pub mod engagement;
pub mod error;
pub mod facts;
pub mod survey;
pub mod telemetry;
