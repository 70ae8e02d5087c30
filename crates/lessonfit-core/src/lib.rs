//! # Lessonfit Core Library
//!
//! This library turns a free-text learning goal ("Learn Rust in 2 weeks",
//! "Git crash course: 3 hours") into a study budget, a day-by-day schedule
//! and a curriculum trimmed to fit that budget. The `lessonfit` CLI is a thin
//! layer over the same library.
//!
//! ## Architecture
//!
//! - **Duration**: time-expression parser and study-budget tiers
//! - **Schedule**: per-day focus synthesis
//! - **Curriculum**: backend wire types and plan fitting
//! - **Oracle**: optional remote advisor with deterministic fallback
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`DurationConstraint`]: normalized time budget
//! - [`AdvisoryPlanner`]: oracle calls that never fail
//! - [`Planner`]: the full goal-to-plan pipeline
//! - [`PlanSession`]: current plan with superseded-result handling
//! - [`Config`]: Application configuration management

pub mod curriculum;
pub mod duration;
pub mod error;
pub mod oracle;
pub mod planner;
pub mod schedule;
pub mod session;
pub mod storage;

pub use curriculum::{validate_and_fit, Curriculum, FitReport, Lesson, Unit};
pub use duration::{ConstraintType, DurationConstraint};
pub use error::{ConfigError, ConstraintError, CoreError, OracleError};
pub use oracle::{AdvisoryPlanner, HttpOracle, Oracle};
pub use planner::{LearningPlan, Planner};
pub use schedule::{ScheduleEntry, StudyPlan};
pub use session::{PlanSession, Ticket};
pub use storage::Config;
