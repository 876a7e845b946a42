//! Geometry kernel for parametric road paths.
//!
//! Paths are cubic Béziers, straights (optionally open-ended) or chains of
//! both, all parameterized over `[0, 1]`. The kernel measures their length,
//! flattens them into length tables, projects points onto them and finds
//! where two paths cross on the horizontal plane.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, RoadpathError};
