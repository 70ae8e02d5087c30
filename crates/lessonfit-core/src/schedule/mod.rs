//! Day-by-day study schedules.
//!
//! A schedule has one entry for an hour-constrained goal (a single intensive
//! session) and one entry per day otherwise. Each day gets a content focus by
//! its position in the span.

use serde::{Deserialize, Serialize};

use crate::duration::DurationConstraint;

/// One day of study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day: u32,
    #[serde(alias = "estimated_hours", alias = "study_hours")]
    pub study_hours: f64,
    #[serde(alias = "focus_area")]
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_intensive: Option<bool>,
    #[serde(default, alias = "learning_objectives", skip_serializing_if = "Vec::is_empty")]
    pub learning_objectives: Vec<String>,
    #[serde(default, alias = "key_topics", skip_serializing_if = "Vec::is_empty")]
    pub key_topics: Vec<String>,
    #[serde(default, alias = "practice_activities", skip_serializing_if = "Vec::is_empty")]
    pub practice_activities: Vec<String>,
}

impl ScheduleEntry {
    pub fn new(day: u32, study_hours: f64, focus: impl Into<String>) -> Self {
        Self {
            day,
            study_hours,
            focus: focus.into(),
            is_intensive: None,
            learning_objectives: Vec::new(),
            key_topics: Vec::new(),
            practice_activities: Vec::new(),
        }
    }
}

/// Content focus of a day in a multi-day schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFocus {
    FundamentalsAndSetup,
    CoreConcepts,
    AdvancedTopics,
    PracticeAndImplementation,
    ReviewAndProjects,
}

impl DayFocus {
    pub fn label(self) -> &'static str {
        match self {
            DayFocus::FundamentalsAndSetup => "Fundamentals & Setup",
            DayFocus::CoreConcepts => "Core Concepts",
            DayFocus::AdvancedTopics => "Advanced Topics",
            DayFocus::PracticeAndImplementation => "Practice & Implementation",
            DayFocus::ReviewAndProjects => "Review & Projects",
        }
    }

    /// Focus for `day` (1-based) of a `total_days` span. Checks run in a
    /// fixed order and the first match wins, so a one-day span is all
    /// fundamentals.
    pub fn for_day(day: u32, total_days: u32) -> Self {
        if day == 1 {
            DayFocus::FundamentalsAndSetup
        } else if day == total_days {
            DayFocus::ReviewAndProjects
        } else if day <= ceil_fraction(total_days, 3) {
            DayFocus::CoreConcepts
        } else if day <= ceil_fraction(total_days, 7) {
            DayFocus::AdvancedTopics
        } else {
            DayFocus::PracticeAndImplementation
        }
    }
}

/// `ceil(total * tenths / 10)` without float rounding drift.
fn ceil_fraction(total: u32, tenths: u64) -> u32 {
    let scaled = (u64::from(total) * tenths).div_ceil(10);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

pub const INTENSIVE_FOCUS: &str = "Intensive Learning Session";

/// Expand a constraint into its per-day schedule.
pub fn synthesize(constraint: &DurationConstraint) -> Vec<ScheduleEntry> {
    if constraint.is_hours() {
        let mut entry = ScheduleEntry::new(1, constraint.study_hours, INTENSIVE_FOCUS);
        entry.is_intensive = Some(true);
        return vec![entry];
    }

    let total_days = constraint.total_days;
    (1..=total_days)
        .map(|day| {
            ScheduleEntry::new(
                day,
                constraint.daily_study_hours,
                DayFocus::for_day(day, total_days).label(),
            )
        })
        .collect()
}

/// Schedule plus the advice that accompanies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub study_plan: Vec<ScheduleEntry>,
    pub learning_strategy: String,
    pub success_tips: Vec<String>,
    #[serde(default)]
    pub ai_optimized: bool,
}

impl StudyPlan {
    /// Deterministic plan for a constraint.
    pub fn basic(constraint: &DurationConstraint) -> Self {
        Self {
            study_plan: synthesize(constraint),
            learning_strategy: default_strategy(constraint).into(),
            success_tips: default_tips(constraint),
            ai_optimized: false,
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.study_plan.iter().map(|e| e.study_hours).sum()
    }
}

/// Strategy line used when the oracle does not supply one.
pub fn default_strategy(constraint: &DurationConstraint) -> &'static str {
    if constraint.is_hours() {
        "Intensive focused learning approach"
    } else {
        "Progressive learning approach"
    }
}

fn default_tips(constraint: &DurationConstraint) -> Vec<String> {
    let tips: [&str; 3] = if constraint.is_hours() {
        [
            "Take short breaks every hour",
            "Stay hydrated",
            "Focus on practical application",
        ]
    } else {
        [
            "Take regular breaks",
            "Practice consistently",
            "Review previous lessons",
        ]
    };
    tips.iter().map(|t| t.to_string()).collect()
}
