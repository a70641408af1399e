use std::fmt;

/// Status value reported once the background job has finished.
pub const STATUS_DONE: &str = "done";
/// Status value reported when the job needs fresh credentials.
pub const STATUS_UNAUTHORIZED: &str = "unauthorized";

/// Result of one status check, as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Done,
    Unauthorized,
    /// Accepted response with a status that is neither done nor unauthorized.
    Pending { status: String },
    Failed(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The server answered but with a non-200 envelope code.
    Rejected {
        code: i64,
        status_text: String,
        message: String,
    },
    /// No usable answer reached us.
    Transport(TransportFailure),
}

impl FailureReason {
    /// Text surfaced to the user as the error message.
    pub fn status_text(&self) -> String {
        match self {
            FailureReason::Rejected { status_text, .. } => status_text.clone(),
            FailureReason::Transport(failure) => failure.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    Network,
    HttpStatus(u16),
    /// Body was not a status envelope.
    Malformed,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailure::Timeout => write!(f, "timeout"),
            TransportFailure::Network | TransportFailure::HttpStatus(_) => write!(f, "error"),
            TransportFailure::Malformed => write!(f, "parsererror"),
        }
    }
}
