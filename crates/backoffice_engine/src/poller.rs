use std::collections::VecDeque;
use std::sync::Arc;

use backoffice_core::{
    update, CheckOutcome, Effect, Msg, Panel, PollPhase, PollSettings, PollState,
    PollTarget,
};
use backoffice_logging::{backoffice_debug, backoffice_info, backoffice_warn};
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::{classify, StatusClient};

/// The page the poller drives: panels, messages and navigation.
pub trait PageSurface: Send {
    /// Whether the long-running-operation indicator is on the page at all.
    fn has_long_loader(&self) -> bool;
    fn show(&mut self, panel: Panel);
    fn hide(&mut self, panel: Panel);
    fn add_error(&mut self, text: &str);
    fn alert(&mut self, text: &str);
    fn navigate(&mut self, url: &str);
}

/// Drives one page load's [`PollState`] against a live status endpoint.
pub struct StatusPoller<S: PageSurface> {
    state: PollState,
    client: Arc<dyn StatusClient>,
    surface: S,
}

impl<S: PageSurface> StatusPoller<S> {
    pub fn new(settings: PollSettings, client: Arc<dyn StatusClient>, surface: S) -> Self {
        Self {
            state: PollState::new(settings),
            client,
            surface,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Watches `target` until it redirects or fails.
    ///
    /// Returns immediately with [`PollPhase::Idle`] when the page has no long
    /// loader or the configured interval is zero. Checks may overlap; whichever terminal answer arrives first
    /// wins and later ones are dropped by the state machine.
    pub async fn run(&mut self, target: PollTarget) -> PollPhase {
        if !self.surface.has_long_loader() {
            backoffice_debug!("No long loader on page; status polling not started");
            return self.state.phase();
        }
        if self.state.settings().interval.is_zero() {
            backoffice_warn!("Poll interval is zero; status polling not started");
            return self.state.phase();
        }

        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<CheckOutcome>();
        let mut timer: Option<Interval> = None;
        let mut inbox = VecDeque::from([Msg::Start(target)]);

        loop {
            while let Some(msg) = inbox.pop_front() {
                let state = std::mem::take(&mut self.state);
                let (state, effects) = update(state, msg);
                self.state = state;
                for effect in effects {
                    self.apply(effect, &mut timer, &outcome_tx);
                }
            }

            let phase = self.state.phase();
            if phase.is_terminal() || timer.is_none() {
                backoffice_info!("Status polling finished in phase {:?}", phase);
                return phase;
            }

            tokio::select! {
                _ = next_tick(&mut timer) => inbox.push_back(Msg::Tick),
                Some(outcome) = outcome_rx.recv() => inbox.push_back(Msg::StatusChecked(outcome)),
            }
        }
    }

    fn apply(
        &mut self,
        effect: Effect,
        timer: &mut Option<Interval>,
        outcome_tx: &mpsc::UnboundedSender<CheckOutcome>,
    ) {
        match effect {
            Effect::ShowPanel(panel) => self.surface.show(panel),
            Effect::HidePanel(panel) => self.surface.hide(panel),
            Effect::ArmTimer { every } => {
                // First check fires one full interval after arming.
                let mut interval = tokio::time::interval_at(Instant::now() + every, every);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                *timer = Some(interval);
            }
            Effect::CancelTimer => {
                *timer = None;
            }
            Effect::SendStatusRequest(target) => {
                let client = self.client.clone();
                let outcome_tx = outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = classify(client.fetch_status(&target).await);
                    // The receiver is gone once polling has ended.
                    let _ = outcome_tx.send(outcome);
                });
            }
            Effect::Navigate { url } => {
                backoffice_info!("Redirecting to {}", url);
                self.surface.navigate(&url);
            }
            Effect::AddErrorMessage(text) => {
                backoffice_warn!("Status check failed: {}", text);
                self.surface.add_error(&text);
            }
            Effect::DebugAlert(text) => self.surface.alert(&text),
        }
    }
}

async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
