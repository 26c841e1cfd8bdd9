//! HTTP handlers, grouped by resource.

pub mod export;
pub mod project;
pub mod submission;
