//! Time-expression parser.
//!
//! Extracts one dominant time unit from free text. Hours outrank every other
//! unit; days, weeks and months are tried in that order only when no hour
//! expression exists. Within a tier the textually first valid occurrence wins,
//! not the largest number.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::constraint::{pluralize, DurationConstraint};

/// Unit detected in a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl TimeUnit {
    fn noun(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hour",
            TimeUnit::Days => "day",
            TimeUnit::Weeks => "week",
            TimeUnit::Months => "month",
        }
    }

    /// Day count for `magnitude` of this unit. Hours collapse to one day.
    fn days(self, magnitude: u32) -> u32 {
        match self {
            TimeUnit::Hours => 1,
            TimeUnit::Days => magnitude,
            TimeUnit::Weeks => magnitude.saturating_mul(7),
            TimeUnit::Months => magnitude.saturating_mul(30),
        }
    }
}

/// Magnitude and unit of a detected expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeExpression {
    pub magnitude: u32,
    pub unit: TimeUnit,
}

impl TimeExpression {
    /// `"1 week"`, `"3 hours"`.
    pub fn text(&self) -> String {
        pluralize(self.magnitude, self.unit.noun())
    }
}

struct Matcher {
    unit: TimeUnit,
    pattern: Regex,
}

impl Matcher {
    fn new(unit: TimeUnit, pattern: &str) -> Self {
        Self {
            unit,
            pattern: Regex::new(pattern).expect("time patterns are valid literals"),
        }
    }

    /// First occurrence whose magnitude is a positive `u32`.
    fn find(&self, text: &str) -> Option<TimeExpression> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
            .find(|magnitude| *magnitude > 0)
            .map(|magnitude| TimeExpression {
                magnitude,
                unit: self.unit,
            })
    }
}

static HOUR_MATCHER: LazyLock<Matcher> =
    LazyLock::new(|| Matcher::new(TimeUnit::Hours, r"(?i)(\d+)\s*(?:hours?|hrs?|h\b)"));

static OTHER_MATCHERS: LazyLock<[Matcher; 3]> = LazyLock::new(|| {
    [
        Matcher::new(TimeUnit::Days, r"(?i)(\d+)\s*days?"),
        Matcher::new(TimeUnit::Weeks, r"(?i)(\d+)\s*weeks?"),
        Matcher::new(TimeUnit::Months, r"(?i)(\d+)\s*months?"),
    ]
});

/// Find the dominant time expression in `text`, if any.
pub fn detect(text: &str) -> Option<TimeExpression> {
    HOUR_MATCHER
        .find(text)
        .or_else(|| OTHER_MATCHERS.iter().find_map(|m| m.find(text)))
}

/// Whether `text` names an explicit number of hours.
pub fn is_hour_constrained(text: &str) -> bool {
    HOUR_MATCHER.find(text).is_some()
}

/// Parse a learning goal into a duration constraint. Never fails: text
/// without a recognizable expression gets a one-day budget.
pub fn parse(text: &str) -> DurationConstraint {
    match detect(text) {
        Some(expr) if expr.unit == TimeUnit::Hours => {
            debug!(hours = expr.magnitude, "hour constraint detected");
            DurationConstraint::from_hours(expr.magnitude)
        }
        Some(expr) => {
            let total_days = expr.unit.days(expr.magnitude);
            debug!(duration = %expr.text(), total_days, "time expression detected");
            DurationConstraint::from_days(total_days, expr.text())
        }
        None => {
            debug!("no time expression found, defaulting to one day");
            DurationConstraint::from_days(1, pluralize(1, "day"))
        }
    }
}
