#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod calculator;
mod calendar;
mod error;
mod exercise;
mod meal_plan;
mod name;
mod plan;
mod statistics;
mod store;
mod workout;

use std::slice::Iter;

pub use calculator::*;
pub use calendar::*;
pub use error::*;
pub use exercise::*;
pub use meal_plan::*;
pub use name::*;
pub use plan::*;
pub use statistics::*;
pub use store::*;
pub use workout::*;

/// Closed set of values with a display name.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
