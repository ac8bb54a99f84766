use thiserror::Error;

/// Result alias for stage construction and table validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration problems detected when a stage is built. A stage that fails
/// validation is never constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{table} table needs at least two entries, found {found}")]
    TooFewEntries { table: &'static str, found: usize },

    #[error("desktop and mobile {table} tables differ in length ({desktop} vs {mobile})")]
    VariantLengthMismatch {
        table: &'static str,
        desktop: usize,
        mobile: usize,
    },

    #[error("{table} table has {found} entries but the page has {expected} sections")]
    SectionCountMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f32),

    #[error("tween duration must be positive, got {0} ms")]
    InvalidDuration(f64),
}
