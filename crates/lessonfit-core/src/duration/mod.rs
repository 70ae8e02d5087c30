//! Duration-constraint inference.
//!
//! - [`parser`]: free text to [`DurationConstraint`]
//! - [`budget`]: day count to study hours
//! - [`constraint`]: the constraint value object itself

pub mod budget;
pub mod constraint;
pub mod parser;

pub use constraint::{ConstraintType, DurationConstraint};
pub use parser::{detect, is_hour_constrained, parse, TimeExpression, TimeUnit};
