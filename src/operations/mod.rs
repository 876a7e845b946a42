pub mod intersect;
pub mod query;
