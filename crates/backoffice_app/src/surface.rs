use backoffice_core::Panel;
use backoffice_engine::PageSurface;

/// Renders poller page updates as terminal lines.
pub struct TerminalSurface {
    long_loader: bool,
    redirected_to: Option<String>,
}

impl TerminalSurface {
    pub fn new(long_loader: bool) -> Self {
        Self {
            long_loader,
            redirected_to: None,
        }
    }

    pub fn redirected_to(&self) -> Option<&str> {
        self.redirected_to.as_deref()
    }
}

fn panel_name(panel: Panel) -> &'static str {
    match panel {
        Panel::LongLoader => "long loader",
        Panel::StatusError => "status error",
        Panel::Loading => "loading",
    }
}

impl PageSurface for TerminalSurface {
    fn has_long_loader(&self) -> bool {
        self.long_loader
    }

    fn show(&mut self, panel: Panel) {
        println!("[show] {}", panel_name(panel));
    }

    fn hide(&mut self, panel: Panel) {
        println!("[hide] {}", panel_name(panel));
    }

    fn add_error(&mut self, text: &str) {
        println!("[error] {text}");
    }

    fn alert(&mut self, text: &str) {
        eprintln!("[alert] {text}");
    }

    fn navigate(&mut self, url: &str) {
        println!("[redirect] {url}");
        self.redirected_to = Some(url.to_string());
    }
}
