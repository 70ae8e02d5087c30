//! Advisory oracle.
//!
//! An optional remote service may suggest a richer duration constraint or
//! schedule. Nothing here depends on it succeeding: [`AdvisoryPlanner`]
//! turns every oracle failure into the deterministic result, and goals that
//! name an explicit hour count never reach the oracle at all.

pub mod http;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::curriculum::Curriculum;
use crate::duration::{self, DurationConstraint};
use crate::error::OracleError;
use crate::schedule::StudyPlan;

pub use http::HttpOracle;

/// A remote service that can answer planning questions.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Suggest a duration constraint for a goal.
    async fn smart_duration(&self, goal: &str) -> Result<DurationConstraint, OracleError>;

    /// Suggest a day-by-day study plan.
    async fn study_plan(
        &self,
        goal: &str,
        constraint: &DurationConstraint,
    ) -> Result<StudyPlan, OracleError>;

    /// Produce the curriculum itself. There is no local fallback for this.
    async fn generate_curriculum(
        &self,
        _goal: &str,
        _constraint: &DurationConstraint,
    ) -> Result<Curriculum, OracleError> {
        Err(OracleError::Disabled)
    }
}

/// Duration and schedule inference with deterministic fallback.
pub struct AdvisoryPlanner {
    oracle: Option<Box<dyn Oracle>>,
}

impl AdvisoryPlanner {
    /// Planner that never leaves the process.
    pub fn offline() -> Self {
        Self { oracle: None }
    }

    pub fn with_oracle(oracle: impl Oracle + 'static) -> Self {
        Self {
            oracle: Some(Box::new(oracle)),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.oracle.is_none()
    }

    fn oracle(&self) -> Result<&dyn Oracle, OracleError> {
        self.oracle.as_deref().ok_or(OracleError::Disabled)
    }

    /// Ask the oracle for a constraint, without any fallback.
    pub async fn try_remote_constraint(
        &self,
        goal: &str,
    ) -> Result<DurationConstraint, OracleError> {
        let oracle = self.oracle()?;
        let mut constraint = oracle.smart_duration(goal).await?;
        constraint.validate()?;
        constraint.ai_optimized = true;
        Ok(constraint)
    }

    /// Ask the oracle for a study plan, without any fallback.
    pub async fn try_remote_schedule(
        &self,
        goal: &str,
        constraint: &DurationConstraint,
    ) -> Result<StudyPlan, OracleError> {
        let oracle = self.oracle()?;
        let mut plan = oracle.study_plan(goal, constraint).await?;
        if plan.study_plan.is_empty() {
            return Err(OracleError::Malformed("study plan has no days".into()));
        }
        if let Some(bad) = plan
            .study_plan
            .iter()
            .find(|e| e.day < 1 || !e.study_hours.is_finite() || e.study_hours < 0.0)
        {
            return Err(OracleError::Malformed(format!(
                "invalid schedule entry for day {}",
                bad.day
            )));
        }
        plan.ai_optimized = true;
        Ok(plan)
    }

    /// Duration constraint for `goal`. Never fails.
    ///
    /// Hour-constrained goals bypass the oracle; any oracle failure yields
    /// exactly what [`duration::parse`] returns.
    pub async fn smart_duration(&self, goal: &str) -> DurationConstraint {
        if duration::is_hour_constrained(goal) {
            debug!(goal, "explicit hour constraint, oracle bypassed");
            return duration::parse(goal);
        }
        if self.is_offline() {
            return duration::parse(goal);
        }

        match self.try_remote_constraint(goal).await {
            Ok(constraint) => constraint,
            Err(e) => {
                warn!(goal, kind = e.kind(), error = %e, "oracle duration failed, using parser");
                duration::parse(goal)
            }
        }
    }

    /// Study plan for `goal` under `constraint`. Never fails.
    pub async fn smart_study_plan(&self, goal: &str, constraint: &DurationConstraint) -> StudyPlan {
        if duration::is_hour_constrained(goal) || self.is_offline() {
            return StudyPlan::basic(constraint);
        }

        match self.try_remote_schedule(goal, constraint).await {
            Ok(plan) => plan,
            Err(e) => {
                warn!(goal, kind = e.kind(), error = %e, "oracle study plan failed, using basic schedule");
                StudyPlan::basic(constraint)
            }
        }
    }

    /// Fetch a curriculum from the oracle. Errors are the caller's to handle.
    pub async fn fetch_curriculum(
        &self,
        goal: &str,
        constraint: &DurationConstraint,
    ) -> Result<Curriculum, OracleError> {
        self.oracle()?.generate_curriculum(goal, constraint).await
    }
}
