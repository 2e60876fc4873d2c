pub mod diff;
pub mod distance;
