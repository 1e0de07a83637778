pub mod calculator;
pub mod types;

pub use calculator::{sort_by_strength, AspectCalculator};
pub use types::{Aspect, AspectType, ASPECT_DEFINITIONS};
