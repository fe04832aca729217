use crate::serial_terminal::TerminalError;

/// Everything that can go wrong between sending a query and summarizing the
/// resulting trace.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// A response line does not have the shape its positional layout requires.
    #[error("Malformed {query} response: {reason}")]
    MalformedResponse { query: &'static str, reason: String },

    #[error("Sample {index} is not numeric: '{token}'")]
    MalformedSample { index: usize, token: String },

    #[error("Preamble cannot be used for scaling: {reason}")]
    IncompatiblePreamble { reason: String },

    #[error("Preamble declares {declared} points but the curve holds {actual}")]
    SampleCountMismatch { declared: usize, actual: usize },

    #[error("Statistics requested over an empty series")]
    EmptySeries,

    #[error("Transport failure: {0}")]
    TransportFailure(#[from] TerminalError),
}

impl ScopeError {
    pub(crate) fn malformed(query: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            query,
            reason: reason.into(),
        }
    }
}
