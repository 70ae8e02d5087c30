//! Plan-fit validation and proportional reduction.
//!
//! A curriculum whose estimated hours exceed the constraint's study hours is
//! trimmed unit by unit. Each unit is reduced on its own pre-reduction numbers
//! and nothing is rebalanced afterwards, so the fitted total approximates the
//! budget rather than guaranteeing it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, info};

use super::Curriculum;
use crate::duration::constraint::pluralize;
use crate::duration::DurationConstraint;

static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\.?\d*)\s*hour").expect("lesson hour pattern is a valid literal")
});
static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*min").expect("lesson minute pattern is a valid literal")
});

/// Hours assumed for a lesson whose duration is missing or unreadable.
pub const DEFAULT_LESSON_HOURS: f64 = 1.0;

/// Literal duration given to every surviving lesson of an intensive plan.
pub const INTENSIVE_LESSON_DURATION: &str = "1 hour";

/// Estimated hours of a free-text lesson duration.
///
/// `"1.5 hours"` reads as 1.5; `"45 min"` rounds up to whole hours; anything
/// else counts as one hour.
pub fn parse_lesson_duration(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return DEFAULT_LESSON_HOURS;
    };

    if let Some(hours) = HOURS_RE
        .captures(text)
        .and_then(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
    {
        return hours;
    }

    if let Some(minutes) = MINUTES_RE
        .captures(text)
        .and_then(|caps| caps.get(1)?.as_str().parse::<u64>().ok())
    {
        return minutes.div_ceil(60) as f64;
    }

    DEFAULT_LESSON_HOURS
}

/// Total estimated hours over every lesson of every unit.
pub fn estimated_hours(curriculum: &Curriculum) -> f64 {
    curriculum.units().map(|u| u.estimated_hours()).sum()
}

/// Knobs for [`fit_with`].
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Rewrite surviving lessons of an hours-type plan to `"1 hour"`.
    pub standardize_intensive_lessons: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            standardize_intensive_lessons: true,
        }
    }
}

/// What a fit pass measured and did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub estimated_hours: f64,
    pub budget_hours: f64,
    pub adjusted: bool,
    pub fitted_hours: f64,
}

/// Fit `curriculum` into `constraint` with default options.
///
/// Takes ownership: the returned value is the only valid curriculum after
/// the call. A plan already within budget comes back untouched.
pub fn validate_and_fit(curriculum: Curriculum, constraint: &DurationConstraint) -> Curriculum {
    fit_with(curriculum, constraint, &FitOptions::default()).0
}

/// Fit `curriculum` into `constraint`, reporting what happened.
pub fn fit_with(
    mut curriculum: Curriculum,
    constraint: &DurationConstraint,
    options: &FitOptions,
) -> (Curriculum, FitReport) {
    let unit_hours: Vec<f64> = curriculum.units().map(|u| u.estimated_hours()).collect();
    let current_total: f64 = unit_hours.iter().sum();
    let budget = constraint.study_hours;

    debug!(
        estimated = current_total,
        budget,
        kind = ?constraint.constraint_type,
        "checking plan duration"
    );

    if current_total <= budget {
        let report = FitReport {
            estimated_hours: current_total,
            budget_hours: budget,
            adjusted: false,
            fitted_hours: current_total,
        };
        return (curriculum, report);
    }

    let ratio = budget / current_total;
    info!(
        estimated = current_total,
        budget, ratio, "plan exceeds duration constraint, reducing"
    );

    let standardize = constraint.is_hours() && options.standardize_intensive_lessons;

    for ((key, unit), hours) in curriculum
        .comprehensive_lesson_plan
        .iter_mut()
        .zip(unit_hours.iter().copied())
    {
        if unit.lessons.is_empty() || hours <= 0.0 {
            continue;
        }

        let lesson_count = unit.lessons.len();
        let target_hours = (hours * ratio).floor().max(1.0);
        let lessons_per_hour = lesson_count as f64 / hours;
        let new_count = ((target_hours * lessons_per_hour).floor() as usize)
            .max(1)
            .min(lesson_count);

        debug!(unit = %key, from = lesson_count, to = new_count, "trimming unit");

        unit.lessons.truncate(new_count);
        unit.total_lessons = u32::try_from(new_count).unwrap_or(u32::MAX);
        unit.unit_duration = pluralize(target_hours as u32, "hour");

        if standardize {
            for lesson in &mut unit.lessons {
                lesson.lesson_duration = Some(INTENSIVE_LESSON_DURATION.to_string());
            }
        }
    }

    curriculum.total_estimated_duration = Some(constraint.display_duration());
    curriculum.original_duration_constraint = Some(constraint.clone());

    let report = FitReport {
        estimated_hours: current_total,
        budget_hours: budget,
        adjusted: true,
        fitted_hours: estimated_hours(&curriculum),
    };
    (curriculum, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{Lesson, Unit};
    use crate::duration;
    use proptest::prelude::*;

    fn lesson(n: u32, duration: Option<&str>) -> Lesson {
        Lesson {
            lesson_number: n,
            lesson_title: format!("Lesson {n}"),
            lesson_duration: duration.map(String::from),
            ..Default::default()
        }
    }

    fn unit(title: &str, durations: &[Option<&str>]) -> Unit {
        Unit {
            unit_title: title.into(),
            total_lessons: durations.len() as u32,
            lessons: durations
                .iter()
                .enumerate()
                .map(|(i, d)| lesson(i as u32 + 1, *d))
                .collect(),
            ..Default::default()
        }
    }

    fn curriculum(units: Vec<Unit>) -> Curriculum {
        Curriculum {
            course: "Test course".into(),
            comprehensive_lesson_plan: units
                .into_iter()
                .enumerate()
                .map(|(i, u)| (format!("unit_{}", i + 1), u))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn lesson_duration_formats() {
        assert_eq!(parse_lesson_duration(Some("2 hours")), 2.0);
        assert_eq!(parse_lesson_duration(Some("1.5 hours")), 1.5);
        assert_eq!(parse_lesson_duration(Some("1 Hour")), 1.0);
        assert_eq!(parse_lesson_duration(Some("45 min")), 1.0);
        assert_eq!(parse_lesson_duration(Some("90 minutes")), 2.0);
        assert_eq!(parse_lesson_duration(Some("120 min")), 2.0);
        assert_eq!(parse_lesson_duration(Some("0 min")), 0.0);
        assert_eq!(parse_lesson_duration(Some("a while")), 1.0);
        assert_eq!(parse_lesson_duration(Some("")), 1.0);
        assert_eq!(parse_lesson_duration(None), 1.0);
    }

    #[test]
    fn hour_pattern_wins_over_minutes() {
        assert_eq!(parse_lesson_duration(Some("30 min + 2 hours")), 2.0);
    }

    #[test]
    fn within_budget_is_untouched() {
        let c = curriculum(vec![unit("A", &[Some("2 hours"), Some("2 hours")])]);
        let constraint = duration::parse("Learn it in 6 hours");
        let (fitted, report) = fit_with(c.clone(), &constraint, &FitOptions::default());
        assert_eq!(fitted, c);
        assert!(!report.adjusted);
        assert!(fitted.total_estimated_duration.is_none());
        assert!(fitted.original_duration_constraint.is_none());
    }

    #[test]
    fn proportional_reduction_for_hours_constraint() {
        // 8 lessons x 1h = 8h per unit, 16h total, budget 4h -> ratio 0.25
        let c = curriculum(vec![
            unit("A", &[Some("1 hour"); 8]),
            unit("B", &[Some("1 hour"); 8]),
        ]);
        let constraint = duration::parse("Python in 4 hours");
        let fitted = validate_and_fit(c, &constraint);

        for u in fitted.units() {
            assert_eq!(u.lessons.len(), 2);
            assert_eq!(u.total_lessons, 2);
            assert_eq!(u.unit_duration, "2 hours");
        }
        assert_eq!(estimated_hours(&fitted), 4.0);
        assert_eq!(
            fitted.total_estimated_duration.as_deref(),
            Some("4 hours (Intensive Session)")
        );
        assert_eq!(fitted.original_duration_constraint, Some(constraint));
    }

    #[test]
    fn truncation_keeps_leading_lessons() {
        let c = curriculum(vec![unit("A", &[Some("1 hour"); 8])]);
        let fitted = validate_and_fit(c, &duration::parse("2 hours"));
        let numbers: Vec<u32> = fitted
            .units()
            .next()
            .unwrap()
            .lessons
            .iter()
            .map(|l| l.lesson_number)
            .collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn intensive_lessons_standardized_to_one_hour() {
        let c = curriculum(vec![unit("A", &[Some("2 hours"); 4])]);
        // 8h vs 2h: ratio 0.25, target 2h, half a lesson per hour -> 1 lesson
        let fitted = validate_and_fit(c, &duration::parse("2 hours of Rust"));
        let u = fitted.units().next().unwrap();
        assert_eq!(u.lessons.len(), 1);
        assert_eq!(u.unit_duration, "2 hours");
        assert_eq!(u.lessons[0].lesson_duration.as_deref(), Some("1 hour"));
    }

    #[test]
    fn standardization_can_be_disabled() {
        let c = curriculum(vec![unit("A", &[Some("2 hours"); 4])]);
        let options = FitOptions {
            standardize_intensive_lessons: false,
        };
        let (fitted, _) = fit_with(c, &duration::parse("2 hours"), &options);
        let u = fitted.units().next().unwrap();
        assert_eq!(u.lessons[0].lesson_duration.as_deref(), Some("2 hours"));
    }

    #[test]
    fn calculated_constraint_keeps_lesson_durations() {
        // budget for 1 day is 4h; 8 x 2h = 16h
        let c = curriculum(vec![unit("A", &[Some("2 hours"); 8])]);
        let constraint = duration::parse("Git basics");
        let fitted = validate_and_fit(c, &constraint);
        let u = fitted.units().next().unwrap();
        // target 16 * 0.25 = 4h at half a lesson per hour -> 2 lessons
        assert_eq!(u.lessons.len(), 2);
        assert_eq!(u.unit_duration, "4 hours");
        assert!(u
            .lessons
            .iter()
            .all(|l| l.lesson_duration.as_deref() == Some("2 hours")));
        assert_eq!(fitted.total_estimated_duration.as_deref(), Some("4 hours (1 day)"));
    }

    #[test]
    fn multi_day_display_string() {
        let c = curriculum(vec![unit("A", &[Some("2 hours"); 10])]);
        let fitted = validate_and_fit(c, &duration::parse("Go in 3 days"));
        assert_eq!(fitted.total_estimated_duration.as_deref(), Some("9 hours (3 days)"));
    }

    #[test]
    fn small_unit_keeps_one_lesson_and_one_hour() {
        let c = curriculum(vec![
            unit("Big", &[Some("1 hour"); 20]),
            unit("Tiny", &[Some("1 hour")]),
        ]);
        let fitted = validate_and_fit(c, &duration::parse("2 hours"));
        let tiny = &fitted.comprehensive_lesson_plan["unit_2"];
        assert_eq!(tiny.lessons.len(), 1);
        assert_eq!(tiny.unit_duration, "1 hour");
    }

    #[test]
    fn empty_and_zero_hour_units_are_left_alone() {
        let mut empty = unit("Empty", &[]);
        empty.unit_duration = "0 hours".into();
        let mut zero = unit("Zero", &[Some("0 min"), Some("0 min")]);
        zero.unit_duration = "untouched".into();

        let c = curriculum(vec![unit("A", &[Some("1 hour"); 10]), empty, zero]);
        let fitted = validate_and_fit(c, &duration::parse("2 hours"));

        let empty = &fitted.comprehensive_lesson_plan["unit_2"];
        assert!(empty.lessons.is_empty());
        assert_eq!(empty.unit_duration, "0 hours");

        let zero = &fitted.comprehensive_lesson_plan["unit_3"];
        assert_eq!(zero.lessons.len(), 2);
        assert_eq!(zero.unit_duration, "untouched");
        assert_eq!(zero.lessons[0].lesson_duration.as_deref(), Some("0 min"));
    }

    #[test]
    fn sub_hour_unit_count_never_exceeds_lessons() {
        // unit of 0.5h with one lesson: target 1h would ask for 2 lessons
        let c = curriculum(vec![
            unit("A", &[Some("0.5 hours")]),
            unit("B", &[Some("10 hours")]),
        ]);
        let fitted = validate_and_fit(c, &duration::parse("5 hours"));
        let a = &fitted.comprehensive_lesson_plan["unit_1"];
        assert_eq!(a.lessons.len(), 1);
        assert_eq!(a.total_lessons, 1);
    }

    #[test]
    fn missing_durations_count_as_one_hour_each() {
        let c = curriculum(vec![unit("A", &[None, None, None, None, None, None])]);
        assert_eq!(estimated_hours(&c), 6.0);
        let (_, report) = fit_with(c, &duration::parse("3 hours"), &FitOptions::default());
        assert!(report.adjusted);
        assert_eq!(report.estimated_hours, 6.0);
        assert_eq!(report.fitted_hours, 3.0);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let c = curriculum(vec![
            unit("A", &[Some("1 hour"); 7]),
            unit("B", &[Some("2 hours"); 5]),
        ]);
        let constraint = duration::parse("SQL in 5 hours");
        let once = validate_and_fit(c, &constraint);
        assert!(estimated_hours(&once) <= constraint.study_hours);
        let twice = validate_and_fit(once.clone(), &constraint);
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn never_reduces_a_unit_to_zero_lessons(
            sizes in proptest::collection::vec(1usize..15, 1..6),
            hours in 1u32..10,
        ) {
            let units = sizes
                .iter()
                .enumerate()
                .map(|(i, n)| unit(&format!("U{i}"), &vec![Some("1 hour"); *n]))
                .collect();
            let fitted = validate_and_fit(curriculum(units), &DurationConstraint::from_hours(hours));
            for u in fitted.units() {
                prop_assert!(u.total_lessons >= 1);
                prop_assert_eq!(u.total_lessons as usize, u.lessons.len());
            }
        }
    }
}
