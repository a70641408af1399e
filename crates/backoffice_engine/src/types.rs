use backoffice_core::{
    CheckOutcome, FailureReason, TransportFailure, STATUS_DONE, STATUS_UNAUTHORIZED,
};
use serde::Deserialize;

/// Envelope every backend AJAX action answers with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusEnvelope {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: StatusData,
    /// Reason phrase of the HTTP response carrying the envelope.
    #[serde(skip)]
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusData {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct StatusError {
    pub kind: TransportFailure,
    pub message: String,
}

impl StatusError {
    pub(crate) fn new(kind: TransportFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Maps a status call result onto the poll state machine's outcomes.
///
/// `unauthorized` wins over the envelope code; `done` only counts on a 200.
pub fn classify(result: Result<StatusEnvelope, StatusError>) -> CheckOutcome {
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(err) => return CheckOutcome::Failed(FailureReason::Transport(err.kind)),
    };

    if envelope.data.status == STATUS_UNAUTHORIZED {
        return CheckOutcome::Unauthorized;
    }
    if envelope.code != 200 {
        // The HTTP reason phrase is "OK" for any envelope that reached us;
        // the job's own status says more.
        let status_text = if envelope.data.status.is_empty() {
            envelope.status_text
        } else {
            envelope.data.status
        };
        return CheckOutcome::Failed(FailureReason::Rejected {
            code: envelope.code,
            status_text,
            message: envelope.message,
        });
    }
    if envelope.data.status == STATUS_DONE {
        CheckOutcome::Done
    } else {
        CheckOutcome::Pending {
            status: envelope.data.status,
        }
    }
}
