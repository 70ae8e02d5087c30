//! Normalized study-time budget inferred from a learning goal.

use serde::{Deserialize, Serialize};

use super::budget;
use crate::error::ConstraintError;

/// How the budget was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintType {
    /// The goal named an explicit number of hours.
    Hours,
    /// Days, weeks or months were detected and hours were derived.
    /// Unrecognized kinds coming from the oracle are read as this.
    #[serde(other)]
    Calculated,
}

/// Immutable time budget for one learning request.
///
/// Field names follow the camelCase wire format shared with the oracle
/// service and the export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationConstraint {
    pub total_days: u32,
    pub total_hours: f64,
    pub duration_text: String,
    pub daily_study_hours: f64,
    pub study_hours: f64,
    #[serde(default)]
    pub practice_hours: f64,
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub difficulty_level: String,
    #[serde(default)]
    pub recommended_pace: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub ai_optimized: bool,
}

impl DurationConstraint {
    /// Intensive single-day session for an explicit hour count.
    pub fn from_hours(hours: u32) -> Self {
        let hours_f = f64::from(hours);
        Self {
            total_days: 1,
            total_hours: hours_f,
            duration_text: pluralize(hours, "hour"),
            daily_study_hours: hours_f,
            study_hours: hours_f,
            practice_hours: (hours_f * 0.2).floor(),
            constraint_type: ConstraintType::Hours,
            difficulty_level: "intensive".into(),
            recommended_pace: "intensive".into(),
            rationale: format!("Intensive {hours}-hour learning session"),
            ai_optimized: false,
        }
    }

    /// Multi-day budget where hours come from the study-budget tiers.
    ///
    /// `duration_text` is the human rendering of what was detected
    /// ("2 weeks"), not necessarily a day count.
    pub fn from_days(total_days: u32, duration_text: String) -> Self {
        let total_hours = budget::total_study_hours(total_days);
        Self {
            total_days,
            total_hours,
            duration_text,
            daily_study_hours: budget::daily_hours(total_days),
            study_hours: total_hours,
            practice_hours: (total_hours * 0.3).floor(),
            constraint_type: ConstraintType::Calculated,
            difficulty_level: "intermediate".into(),
            recommended_pace: "moderate".into(),
            rationale: "Basic duration calculation".into(),
            ai_optimized: false,
        }
    }

    pub fn is_hours(&self) -> bool {
        self.constraint_type == ConstraintType::Hours
    }

    /// Check the structural invariants of a constraint.
    ///
    /// Constraints built by this crate always pass; the check exists for
    /// values received from the oracle.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if self.total_days < 1 {
            return Err(ConstraintError::NoDays);
        }
        for (field, value) in [
            ("totalHours", self.total_hours),
            ("dailyStudyHours", self.daily_study_hours),
            ("studyHours", self.study_hours),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConstraintError::NonPositive { field, value });
            }
        }
        if !self.practice_hours.is_finite() || self.practice_hours < 0.0 {
            return Err(ConstraintError::NegativePractice(self.practice_hours));
        }
        if self.is_hours()
            && (self.total_days != 1
                || self.daily_study_hours != self.total_hours
                || self.study_hours != self.total_hours)
        {
            return Err(ConstraintError::IntensiveSpan);
        }
        Ok(())
    }

    /// Display string attached to a fitted curriculum.
    pub fn display_duration(&self) -> String {
        let hours = format_hours(self.study_hours);
        if self.is_hours() {
            let suffix = if self.study_hours > 1.0 { "s" } else { "" };
            format!("{hours} hour{suffix} (Intensive Session)")
        } else if self.total_days == 1 {
            format!("{hours} hours (1 day)")
        } else {
            format!("{hours} hours ({} days)", self.total_days)
        }
    }
}

/// `"1 day"`, `"2 days"`.
pub fn pluralize(value: u32, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Render an hour amount without a trailing `.0` for whole numbers.
pub fn format_hours(hours: f64) -> String {
    format!("{hours}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hours_satisfies_hours_invariant() {
        let c = DurationConstraint::from_hours(6);
        assert_eq!(c.total_days, 1);
        assert_eq!(c.total_hours, 6.0);
        assert_eq!(c.daily_study_hours, 6.0);
        assert_eq!(c.study_hours, 6.0);
        assert_eq!(c.practice_hours, 1.0);
        assert_eq!(c.duration_text, "6 hours");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn from_days_uses_budget_tiers() {
        let c = DurationConstraint::from_days(5, "5 days".into());
        assert_eq!(c.total_hours, 12.5);
        assert_eq!(c.daily_study_hours, 2.5);
        assert_eq!(c.practice_hours, 3.0);
        assert_eq!(c.constraint_type, ConstraintType::Calculated);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(DurationConstraint::from_hours(2)).unwrap();
        assert_eq!(json["totalDays"], 1);
        assert_eq!(json["constraintType"], "hours");
        assert_eq!(json["aiOptimized"], false);
        assert_eq!(json["durationText"], "2 hours");
    }

    #[test]
    fn unknown_constraint_type_reads_as_calculated() {
        let json = serde_json::json!({
            "totalDays": 3,
            "totalHours": 9,
            "durationText": "9 hours",
            "dailyStudyHours": 3,
            "studyHours": 9,
            "constraintType": "standard"
        });
        let c: DurationConstraint = serde_json::from_value(json).unwrap();
        assert_eq!(c.constraint_type, ConstraintType::Calculated);
        assert_eq!(c.practice_hours, 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_multi_day_hours_constraint() {
        let mut c = DurationConstraint::from_hours(4);
        c.total_days = 2;
        assert_eq!(c.validate(), Err(ConstraintError::IntensiveSpan));
    }

    #[test]
    fn validate_rejects_zero_hours() {
        let mut c = DurationConstraint::from_days(3, "3 days".into());
        c.study_hours = 0.0;
        assert_eq!(
            c.validate(),
            Err(ConstraintError::NonPositive {
                field: "studyHours",
                value: 0.0
            })
        );
    }

    #[test]
    fn validate_rejects_zero_days_and_negative_practice() {
        let mut c = DurationConstraint::from_days(3, "3 days".into());
        c.practice_hours = -1.0;
        assert_eq!(c.validate(), Err(ConstraintError::NegativePractice(-1.0)));
        c.total_days = 0;
        assert_eq!(c.validate(), Err(ConstraintError::NoDays));
    }

    #[test]
    fn display_duration_variants() {
        assert_eq!(
            DurationConstraint::from_hours(1).display_duration(),
            "1 hour (Intensive Session)"
        );
        assert_eq!(
            DurationConstraint::from_hours(3).display_duration(),
            "3 hours (Intensive Session)"
        );
        assert_eq!(
            DurationConstraint::from_days(1, "1 day".into()).display_duration(),
            "4 hours (1 day)"
        );
        assert_eq!(
            DurationConstraint::from_days(5, "5 days".into()).display_duration(),
            "12.5 hours (5 days)"
        );
    }

    #[test]
    fn pluralize_only_appends_s_above_one() {
        assert_eq!(pluralize(1, "day"), "1 day");
        assert_eq!(pluralize(2, "day"), "2 days");
        assert_eq!(pluralize(1, "hour"), "1 hour");
    }
}
