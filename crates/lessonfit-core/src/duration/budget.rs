//! Study-budget tiers.
//!
//! Hours per day shrink as the span grows, modelling realistic pacing over
//! longer commitments. Lower band boundaries are inclusive.
//!
//! | days | hours/day |
//! |------|-----------|
//! | <= 1 | 4         |
//! | 2-3  | 3         |
//! | 4-7  | 2.5       |
//! | > 7  | 2         |

/// Lesson length assumed when sizing intensive plans.
const LESSON_HOURS: f64 = 1.0;
/// Share of an intensive session kept for practice.
const INTENSIVE_PRACTICE_RATIO: f64 = 0.2;

/// Hours of study per day for a span of `total_days`.
pub fn daily_hours(total_days: u32) -> f64 {
    match total_days {
        0..=1 => 4.0,
        2..=3 => 3.0,
        4..=7 => 2.5,
        _ => 2.0,
    }
}

/// Total study hours for a span of `total_days`.
pub fn total_study_hours(total_days: u32) -> f64 {
    if total_days <= 1 {
        4.0
    } else {
        f64::from(total_days) * daily_hours(total_days)
    }
}

/// Number of one-hour lessons that fit in `total_hours` once practice time
/// is set aside. Never below one.
pub fn realistic_lesson_count(total_hours: f64) -> u32 {
    let available = total_hours * (1.0 - INTENSIVE_PRACTICE_RATIO);
    let count = (available / LESSON_HOURS).floor();
    if count.is_finite() && count >= 1.0 {
        count.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}
