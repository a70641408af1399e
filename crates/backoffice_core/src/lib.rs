//! Backoffice core: pure poll state machine and dashboard chart builders.
pub mod chart;
mod effect;
mod msg;
mod outcome;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Panel};
pub use msg::Msg;
pub use outcome::{CheckOutcome, FailureReason, TransportFailure, STATUS_DONE, STATUS_UNAUTHORIZED};
pub use state::{
    PollPhase, PollSettings, PollState, PollTarget, RedirectSettings, DEFAULT_PAGE,
    DEFAULT_POLL_INTERVAL,
};
pub use update::update;
pub use view_model::PollViewModel;
