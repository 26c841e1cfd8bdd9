#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is the public handle the lookup used: a slug for projects
    /// and submissions, a stringified id elsewhere.
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The project-wide cumulative file cap would be exceeded.
    ///
    /// Carries the numbers the caller needs to adjust the request:
    /// the cap, the count already stored, and the remaining allowance.
    #[error("File limit exceeded: {existing} of {max} files already submitted, {remaining} remaining")]
    QuotaExceeded {
        max: i64,
        existing: i64,
        remaining: i64,
    },
}
