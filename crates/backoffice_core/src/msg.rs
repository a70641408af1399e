use crate::{CheckOutcome, PollTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page finished loading with a long loader present; begin watching the job.
    Start(PollTarget),
    /// Recurring timer fired.
    Tick,
    /// A status request finished, successfully or not.
    StatusChecked(CheckOutcome),
}
