//! Precondition failures reported by the spline builders.

pub type Result<T> = std::result::Result<T, SplineError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplineError {
    #[error("a spline needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("point window {begin}+{count} exceeds the {len} available points")]
    WindowOutOfBounds {
        begin: usize,
        count: usize,
        len: usize,
    },
}
