//! End-to-end plan generation.
//!
//! Each step is awaited before the next starts: duration, then schedule,
//! then the curriculum, then fitting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::curriculum::fit::{fit_with, FitOptions, FitReport};
use crate::curriculum::Curriculum;
use crate::duration::DurationConstraint;
use crate::error::Result;
use crate::oracle::{AdvisoryPlanner, HttpOracle};
use crate::schedule::StudyPlan;
use crate::storage::Config;

/// A fitted curriculum together with the budget and schedule it was fitted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub id: Uuid,
    pub goal: String,
    pub generated_at: DateTime<Utc>,
    pub duration_constraint: DurationConstraint,
    pub study_plan: StudyPlan,
    pub curriculum: Curriculum,
    pub fit: FitReport,
}

pub struct Planner {
    advisory: AdvisoryPlanner,
    fit: FitOptions,
}

impl Planner {
    pub fn new(advisory: AdvisoryPlanner, fit: FitOptions) -> Self {
        Self { advisory, fit }
    }

    /// Deterministic planner with default fit options.
    pub fn offline() -> Self {
        Self::new(AdvisoryPlanner::offline(), FitOptions::default())
    }

    /// Planner wired from configuration. A disabled oracle means offline.
    pub fn from_config(config: &Config) -> Result<Self> {
        let advisory = if config.oracle.enabled {
            let oracle = HttpOracle::new(&config.oracle.base_url, config.oracle.timeout())?;
            AdvisoryPlanner::with_oracle(oracle)
        } else {
            AdvisoryPlanner::offline()
        };
        Ok(Self::new(advisory, config.fit.options()))
    }

    pub fn advisory(&self) -> &AdvisoryPlanner {
        &self.advisory
    }

    /// Infer a budget, ask the oracle for a curriculum and fit it.
    ///
    /// # Errors
    ///
    /// Fails when the curriculum cannot be fetched. Duration and schedule
    /// inference never fail.
    pub async fn generate(&self, goal: &str) -> Result<LearningPlan> {
        let constraint = self.advisory.smart_duration(goal).await;
        let study_plan = self.advisory.smart_study_plan(goal, &constraint).await;
        let curriculum = self.advisory.fetch_curriculum(goal, &constraint).await?;
        Ok(self.finish(goal, constraint, study_plan, curriculum))
    }

    /// Same as [`Planner::generate`] with a curriculum the caller already has.
    pub async fn assemble(&self, goal: &str, curriculum: Curriculum) -> LearningPlan {
        let constraint = self.advisory.smart_duration(goal).await;
        let study_plan = self.advisory.smart_study_plan(goal, &constraint).await;
        self.finish(goal, constraint, study_plan, curriculum)
    }

    fn finish(
        &self,
        goal: &str,
        constraint: DurationConstraint,
        study_plan: StudyPlan,
        curriculum: Curriculum,
    ) -> LearningPlan {
        let (curriculum, fit) = fit_with(curriculum, &constraint, &self.fit);
        let plan = LearningPlan {
            id: Uuid::new_v4(),
            goal: goal.to_string(),
            generated_at: Utc::now(),
            duration_constraint: constraint,
            study_plan,
            curriculum,
            fit,
        };
        info!(
            id = %plan.id,
            goal,
            budget = plan.fit.budget_hours,
            adjusted = plan.fit.adjusted,
            "learning plan ready"
        );
        plan
    }
}
