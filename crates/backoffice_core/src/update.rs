use crate::{CheckOutcome, Effect, FailureReason, Msg, Panel, PollPhase, PollState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PollState, msg: Msg) -> (PollState, Vec<Effect>) {
    let effects = match msg {
        Msg::Start(target) => {
            // A page load starts at most one watch; later calls change nothing.
            if state.phase() != PollPhase::Idle {
                return (state, Vec::new());
            }
            state.begin(target);
            vec![
                Effect::ShowPanel(Panel::LongLoader),
                Effect::ArmTimer {
                    every: state.settings().interval,
                },
            ]
        }
        Msg::Tick => match state.target() {
            Some(target) if state.timer_live() => {
                let target = target.clone();
                state.record_tick();
                vec![Effect::SendStatusRequest(target)]
            }
            _ => Vec::new(),
        },
        Msg::StatusChecked(outcome) => {
            // Late responses from overlapping requests land here after the
            // first terminal one; they must not touch the page again.
            if !state.timer_live() {
                return (state, Vec::new());
            }
            apply_outcome(&mut state, outcome)
        }
    };

    (state, effects)
}

fn apply_outcome(state: &mut PollState, outcome: CheckOutcome) -> Vec<Effect> {
    match outcome {
        CheckOutcome::Unauthorized => {
            let url = state.settings().redirect.settings_url.clone();
            state.redirect(url.clone());
            vec![Effect::CancelTimer, Effect::Navigate { url }]
        }
        CheckOutcome::Done => {
            let url = state.settings().redirect.completion_url();
            state.redirect(url.clone());
            vec![Effect::CancelTimer, Effect::Navigate { url }]
        }
        // Still running (or an unknown status): wait for the next tick.
        CheckOutcome::Pending { .. } => Vec::new(),
        CheckOutcome::Failed(reason) => {
            let debug = state.settings().debug;
            let status_text = reason.status_text();
            state.fail(status_text.clone());

            let mut effects = vec![Effect::CancelTimer];
            match &reason {
                FailureReason::Rejected { message, .. } => {
                    effects.push(Effect::ShowPanel(Panel::LongLoader));
                    effects.push(Effect::ShowPanel(Panel::StatusError));
                    effects.push(Effect::HidePanel(Panel::Loading));
                    effects.push(Effect::AddErrorMessage(status_text.clone()));
                    if debug {
                        effects.push(Effect::DebugAlert(status_text));
                        effects.push(Effect::DebugAlert(message.clone()));
                    }
                }
                FailureReason::Transport(_) => {
                    effects.push(Effect::ShowPanel(Panel::StatusError));
                    effects.push(Effect::HidePanel(Panel::Loading));
                    effects.push(Effect::HidePanel(Panel::LongLoader));
                    effects.push(Effect::AddErrorMessage(status_text.clone()));
                    if debug {
                        effects.push(Effect::DebugAlert(status_text));
                    }
                }
            }
            effects
        }
    }
}
