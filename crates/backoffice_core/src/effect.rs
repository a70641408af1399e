use std::time::Duration;

use crate::PollTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowPanel(Panel),
    HidePanel(Panel),
    ArmTimer { every: Duration },
    CancelTimer,
    SendStatusRequest(PollTarget),
    Navigate { url: String },
    /// User-visible error message in the page's message area.
    AddErrorMessage(String),
    /// Blocking alert, only emitted in debug mode.
    DebugAlert(String),
}

/// Page regions the poller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    LongLoader,
    StatusError,
    Loading,
}
