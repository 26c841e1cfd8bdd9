//! Repository layer: one stateless struct of associated functions per table.

pub mod project_repo;
pub mod submission_repo;

pub use project_repo::ProjectRepo;
pub use submission_repo::{GuardedInsert, SubmissionRepo};
