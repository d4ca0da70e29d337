use thiserror::Error;

/// Why a literal failed to match, for callers that prefer `Result` over
/// checking the source state.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Input differed from the literal or ran out before it was complete.
    #[error("input did not match literal")]
    Mismatch,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
