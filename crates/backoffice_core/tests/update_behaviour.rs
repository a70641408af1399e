use std::time::Duration;

use backoffice_core::{
    update, CheckOutcome, Effect, FailureReason, Msg, Panel, PollPhase, PollSettings,
    PollState, PollTarget, RedirectSettings, TransportFailure,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    backoffice_logging::initialize_for_tests();
}

fn settings(debug: bool) -> PollSettings {
    PollSettings {
        interval: Duration::from_millis(5000),
        redirect: RedirectSettings {
            origin: "https://cms.example.com".to_string(),
            redirect: Some("/private/en/analytics/index?identifier=42".to_string()),
            redirect_get: Some("page=2".to_string()),
            settings_url: "https://cms.example.com/private/en/analytics/settings".to_string(),
        },
        debug,
    }
}

fn polling(debug: bool) -> PollState {
    let (state, _) = update(
        PollState::new(settings(debug)),
        Msg::Start(PollTarget::new("index", "42")),
    );
    state
}

#[test]
fn start_shows_loader_and_arms_timer() {
    init_logging();
    let (state, effects) = update(
        PollState::new(settings(false)),
        Msg::Start(PollTarget::new("index", "42")),
    );

    assert_eq!(state.phase(), PollPhase::Polling);
    assert!(state.timer_live());
    assert_eq!(
        effects,
        vec![
            Effect::ShowPanel(Panel::LongLoader),
            Effect::ArmTimer {
                every: Duration::from_millis(5000)
            },
        ]
    );
}

#[test]
fn second_start_is_ignored() {
    init_logging();
    let state = polling(false);
    let (state, effects) = update(state, Msg::Start(PollTarget::new("other", "7")));

    assert!(effects.is_empty());
    assert_eq!(state.target(), Some(&PollTarget::new("index", "42")));
}

#[test]
fn tick_sends_request_for_stored_target() {
    init_logging();
    let (state, effects) = update(polling(false), Msg::Tick);

    assert_eq!(
        effects,
        vec![Effect::SendStatusRequest(PollTarget::new("index", "42"))]
    );
    assert_eq!(state.view().ticks, 1);
}

#[test]
fn tick_before_start_does_nothing() {
    init_logging();
    let (_, effects) = update(PollState::new(settings(false)), Msg::Tick);
    assert!(effects.is_empty());
}

#[test]
fn done_navigates_once_and_stops_ticking() {
    init_logging();
    let (state, effects) = update(polling(false), Msg::StatusChecked(CheckOutcome::Done));

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer,
            Effect::Navigate {
                url: "https://cms.example.com/private/en/analytics/index?identifier=42&page=2"
                    .to_string()
            },
        ]
    );
    assert_eq!(state.phase(), PollPhase::Redirected);

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    let (_, effects) = update(state, Msg::StatusChecked(CheckOutcome::Done));
    assert!(effects.is_empty());
}

#[test]
fn done_without_redirect_settings_goes_to_origin() {
    init_logging();
    let mut config = settings(false);
    config.redirect.redirect = None;
    config.redirect.redirect_get = None;
    let (state, _) = update(
        PollState::new(config),
        Msg::Start(PollTarget::new("index", "")),
    );

    let (_, effects) = update(state, Msg::StatusChecked(CheckOutcome::Done));
    assert_eq!(
        effects[1],
        Effect::Navigate {
            url: "https://cms.example.com".to_string()
        }
    );
}

#[test]
fn unauthorized_navigates_to_settings() {
    init_logging();
    let (state, effects) = update(polling(false), Msg::StatusChecked(CheckOutcome::Unauthorized));

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer,
            Effect::Navigate {
                url: "https://cms.example.com/private/en/analytics/settings".to_string()
            },
        ]
    );
    assert_eq!(state.phase(), PollPhase::Redirected);
}

// An accepted response with an unrecognised status is deliberately a silent
// no-op: polling carries on with the next tick.
#[test]
fn pending_status_keeps_polling_without_effects() {
    init_logging();
    let (state, effects) = update(
        polling(false),
        Msg::StatusChecked(CheckOutcome::Pending {
            status: "busy".to_string(),
        }),
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), PollPhase::Polling);
    assert!(state.timer_live());
}

#[test]
fn rejected_response_shows_error_without_navigation() {
    init_logging();
    let outcome = CheckOutcome::Failed(FailureReason::Rejected {
        code: 500,
        status_text: "success".to_string(),
        message: "quota exceeded".to_string(),
    });
    let (state, effects) = update(polling(false), Msg::StatusChecked(outcome));

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer,
            Effect::ShowPanel(Panel::LongLoader),
            Effect::ShowPanel(Panel::StatusError),
            Effect::HidePanel(Panel::Loading),
            Effect::AddErrorMessage("success".to_string()),
        ]
    );
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::Navigate { .. })));
    assert_eq!(state.phase(), PollPhase::Failed);
    assert!(!state.timer_live());
}

#[test]
fn rejected_response_in_debug_alerts_status_then_message() {
    init_logging();
    let outcome = CheckOutcome::Failed(FailureReason::Rejected {
        code: 403,
        status_text: "success".to_string(),
        message: "quota exceeded".to_string(),
    });
    let (_, effects) = update(polling(true), Msg::StatusChecked(outcome));

    let alerts: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::DebugAlert(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(alerts, vec!["success", "quota exceeded"]);
}

#[test]
fn transport_timeout_hides_loaders_and_reports_once() {
    init_logging();
    let outcome = CheckOutcome::Failed(FailureReason::Transport(TransportFailure::Timeout));
    let (state, effects) = update(polling(true), Msg::StatusChecked(outcome.clone()));

    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer,
            Effect::ShowPanel(Panel::StatusError),
            Effect::HidePanel(Panel::Loading),
            Effect::HidePanel(Panel::LongLoader),
            Effect::AddErrorMessage("timeout".to_string()),
            Effect::DebugAlert("timeout".to_string()),
        ]
    );
    assert_eq!(state.view().error_message.as_deref(), Some("timeout"));

    // A stale overlapping request failing later must not add a second message.
    let (state, effects) = update(state, Msg::StatusChecked(outcome));
    assert!(effects.is_empty());
    let (_, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
}

#[test]
fn late_done_after_failure_is_ignored() {
    init_logging();
    let failed = CheckOutcome::Failed(FailureReason::Transport(TransportFailure::Network));
    let (state, _) = update(polling(false), Msg::StatusChecked(failed));
    let (state, effects) = update(state, Msg::StatusChecked(CheckOutcome::Done));

    assert!(effects.is_empty());
    assert_eq!(state.phase(), PollPhase::Failed);
    assert_eq!(state.view().navigated_to, None);
}
