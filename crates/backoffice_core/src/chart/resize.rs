use std::time::{Duration, Instant};

use super::ChartKind;

/// How long the window must stay still before charts are rebuilt.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// The window moved recently; check again after the given delay.
    Reschedule(Duration),
    Rebuild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildStep {
    Destroy(ChartKind),
    Create(ChartKind),
}

/// Debounces window resize events into a single chart rebuild.
///
/// Callers feed resize events with [`ResizeDebounce::on_resize`]; when it
/// returns a delay they schedule one call to [`ResizeDebounce::on_check`]
/// after it. At most one check is outstanding at a time.
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    quiet: Duration,
    last_resize: Option<Instant>,
    check_pending: bool,
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_PERIOD)
    }
}

impl ResizeDebounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_resize: None,
            check_pending: false,
        }
    }

    pub fn on_resize(&mut self, now: Instant) -> Option<Duration> {
        self.last_resize = Some(now);
        if self.check_pending {
            None
        } else {
            self.check_pending = true;
            Some(self.quiet)
        }
    }

    pub fn on_check(&mut self, now: Instant) -> ResizeDecision {
        match self.last_resize {
            Some(last) if now.saturating_duration_since(last) < self.quiet => {
                ResizeDecision::Reschedule(self.quiet)
            }
            _ => {
                self.check_pending = false;
                ResizeDecision::Rebuild
            }
        }
    }

    pub fn check_pending(&self) -> bool {
        self.check_pending
    }
}

/// Destroy-then-create steps for every chart on the page, in canonical order.
pub fn rebuild_steps(present: &[ChartKind]) -> Vec<RebuildStep> {
    ChartKind::ALL
        .iter()
        .filter(|kind| present.contains(kind))
        .flat_map(|kind| [RebuildStep::Destroy(*kind), RebuildStep::Create(*kind)])
        .collect()
}
