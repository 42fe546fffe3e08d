#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A linear range was built with its start after its end.
    #[error("invalid range: start {start} is after end {end}")]
    OutOfRange { start: String, end: String },

    /// Two linear ranges that neither overlap nor touch cannot be merged.
    #[error("cannot merge {left} with {right}: ranges are disjoint")]
    InvalidOperation { left: String, right: String },

    /// Two circular ranges that neither overlap nor touch.
    #[error("no single range covers both {left} and {right}")]
    Disjoint { left: String, right: String },

    #[error("invalid format pattern {0:?}")]
    Format(String),
}
