//! Paste interception: suppress the native paste, sanitize the HTML
//! flavor of the clipboard payload, and schedule the deferred insertion.

use std::time::{Duration, Instant};

use sanitize::Sanitize;

use crate::defer::DeferredQueue;

/// Clipboard flavor the interceptor consumes.
pub const HTML_FLAVOR: &str = "text/html";

/// Delay between event handling and the synthetic insertion, long enough
/// for the host's own (suppressed) paste cleanup to settle.
pub const DEFAULT_INSERT_DELAY: Duration = Duration::from_millis(10);

/// Flavored clipboard data as handed over by the host.
#[derive(Debug, Clone, Default)]
pub struct ClipboardPayload {
    entries: Vec<(String, String)>,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flavor(flavor: &str, data: &str) -> Self {
        let mut payload = Self::new();
        payload.set_data(flavor, data);
        payload
    }

    pub fn set_data(&mut self, flavor: &str, data: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| f == flavor) {
            entry.1 = data.to_string();
        } else {
            self.entries.push((flavor.to_string(), data.to_string()));
        }
    }

    pub fn get_data(&self, flavor: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == flavor)
            .map(|(_, d)| d.as_str())
    }
}

/// A paste event as delivered by the host.
///
/// `clipboard` is the standard per-event payload; `legacy_clipboard` models
/// the process-wide clipboard object older platforms expose. The standard
/// source wins whenever it is present at all, even if it lacks an HTML
/// flavor; the fallback only applies when the event carries no clipboard
/// object.
#[derive(Debug, Default)]
pub struct PasteEvent {
    clipboard: Option<ClipboardPayload>,
    legacy_clipboard: Option<ClipboardPayload>,
    default_prevented: bool,
}

impl PasteEvent {
    pub fn new(clipboard: Option<ClipboardPayload>, legacy_clipboard: Option<ClipboardPayload>) -> Self {
        Self {
            clipboard,
            legacy_clipboard,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn html_payload(&self) -> Option<&str> {
        let source = self.clipboard.as_ref().or(self.legacy_clipboard.as_ref())?;
        source.get_data(HTML_FLAVOR)
    }
}

/// Capturing paste handler for an editable region.
pub struct PasteInterceptor {
    sanitizer: Box<dyn Sanitize>,
    insert_delay: Duration,
}

impl PasteInterceptor {
    pub fn new(sanitizer: Box<dyn Sanitize>) -> Self {
        Self {
            sanitizer,
            insert_delay: DEFAULT_INSERT_DELAY,
        }
    }

    pub fn with_insert_delay(mut self, insert_delay: Duration) -> Self {
        self.insert_delay = insert_delay;
        self
    }

    /// Handle one paste event.
    ///
    /// The native paste is always suppressed, payload or not. A missing
    /// HTML flavor turns the paste into a no-op; there is no plain-text
    /// fallback. Otherwise the sanitized markup is scheduled on `queue`
    /// for insertion `insert_delay` after `now`.
    pub fn on_paste(&self, event: &mut PasteEvent, queue: &mut DeferredQueue, now: Instant) {
        event.prevent_default();

        let Some(raw) = event.html_payload() else {
            log::debug!(target: "editor.paste", "paste without an html payload, ignoring");
            return;
        };

        log::debug!(target: "editor.paste", "intercepted paste, {} bytes of html", raw.len());
        let clean = self.sanitizer.sanitize(raw);
        queue.schedule(now + self.insert_delay, clean);
    }
}
