//! Curriculum produced by the lesson-plan backend.
//!
//! Units are keyed (`unit_1`, `unit_2`, ...) and kept in document order.
//! Fields this crate does not interpret are preserved on round-trip.

pub mod fit;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::duration::DurationConstraint;

pub use fit::{estimated_hours, parse_lesson_duration, validate_and_fit, FitReport};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default)]
    pub lesson_number: u32,
    #[serde(default)]
    pub lesson_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_duration: Option<String>,
    #[serde(default)]
    pub key_concepts: Vec<String>,
    #[serde(default)]
    pub important_topics: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default)]
    pub unit_title: String,
    #[serde(default)]
    pub unit_objective: String,
    #[serde(default)]
    pub unit_outcomes: Vec<String>,
    #[serde(default)]
    pub unit_duration: String,
    #[serde(default)]
    pub total_lessons: u32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Unit {
    /// Sum of the estimated hours of every lesson in the unit.
    pub fn estimated_hours(&self) -> f64 {
        self.lessons
            .iter()
            .map(|l| parse_lesson_duration(l.lesson_duration.as_deref()))
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    #[serde(default)]
    pub course: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_units: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_estimated_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_duration_constraint: Option<DurationConstraint>,
    #[serde(default)]
    pub comprehensive_lesson_plan: IndexMap<String, Unit>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Curriculum {
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.comprehensive_lesson_plan.values()
    }

    pub fn lesson_count(&self) -> usize {
        self.units().map(|u| u.lessons.len()).sum()
    }
}
