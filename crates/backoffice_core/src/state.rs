use std::time::Duration;

use url::Url;

use crate::view_model::PollViewModel;

/// Page polled when the page data does not name one.
pub const DEFAULT_PAGE: &str = "index";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// The job being watched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTarget {
    pub page: String,
    pub identifier: String,
}

impl PollTarget {
    pub fn new(page: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            identifier: identifier.into(),
        }
    }

    /// Builds a target from optional page data, falling back to the index page.
    pub fn from_page_data(page: Option<&str>, identifier: Option<&str>) -> Self {
        Self::new(page.unwrap_or(DEFAULT_PAGE), identifier.unwrap_or_default())
    }
}

/// Where to send the browser on a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedirectSettings {
    /// Scheme, host and port of the current page, e.g. `https://cms.example.com`.
    pub origin: String,
    pub redirect: Option<String>,
    pub redirect_get: Option<String>,
    pub settings_url: String,
}

impl RedirectSettings {
    /// Derives the origin from the URL of the page being displayed.
    pub fn from_page_url(
        page_url: &str,
        redirect: Option<String>,
        redirect_get: Option<String>,
        settings_url: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let origin = Url::parse(page_url)?.origin().ascii_serialization();
        Ok(Self {
            origin,
            redirect,
            redirect_get,
            settings_url: settings_url.into(),
        })
    }

    /// `origin + redirect + "&" + redirect_get`, skipping absent parts.
    pub fn completion_url(&self) -> String {
        let mut url = self.origin.clone();
        if let Some(redirect) = &self.redirect {
            url.push_str(redirect);
        }
        if let Some(get) = &self.redirect_get {
            url.push('&');
            url.push_str(get);
        }
        url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    /// Must be non-zero; drivers refuse to start a zero-period timer.
    pub interval: Duration,
    pub redirect: RedirectSettings,
    pub debug: bool,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            redirect: RedirectSettings::default(),
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    #[default]
    Idle,
    Polling,
    Redirected,
    Failed,
}

impl PollPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, PollPhase::Redirected | PollPhase::Failed)
    }
}

/// Per-page-load poll state. Owned by whoever drives the page; never global.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollState {
    settings: PollSettings,
    phase: PollPhase,
    target: Option<PollTarget>,
    ticks: u64,
    last_error: Option<String>,
    navigated_to: Option<String>,
}

impl PollState {
    pub fn new(settings: PollSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &PollSettings {
        &self.settings
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    pub fn target(&self) -> Option<&PollTarget> {
        self.target.as_ref()
    }

    /// Only `Polling` owns a live timer.
    pub fn timer_live(&self) -> bool {
        self.phase == PollPhase::Polling
    }

    pub fn view(&self) -> PollViewModel {
        PollViewModel {
            phase: self.phase,
            target: self.target.clone(),
            ticks: self.ticks,
            error_message: self.last_error.clone(),
            navigated_to: self.navigated_to.clone(),
        }
    }

    pub(crate) fn begin(&mut self, target: PollTarget) {
        self.target = Some(target);
        self.phase = PollPhase::Polling;
    }

    pub(crate) fn record_tick(&mut self) {
        self.ticks += 1;
    }

    pub(crate) fn redirect(&mut self, url: String) {
        self.phase = PollPhase::Redirected;
        self.navigated_to = Some(url);
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = PollPhase::Failed;
        self.last_error = Some(message);
    }
}
