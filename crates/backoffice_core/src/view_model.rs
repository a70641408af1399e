use crate::{PollPhase, PollTarget};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollViewModel {
    pub phase: PollPhase,
    pub target: Option<PollTarget>,
    pub ticks: u64,
    pub error_message: Option<String>,
    pub navigated_to: Option<String>,
}
