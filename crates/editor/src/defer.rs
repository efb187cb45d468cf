//! Deferred insertion of sanitized markup.
//!
//! Insertion must not run inside the paste event turn: the host platform
//! may still be settling side effects of the suppressed native paste, so
//! each insertion carries a due instant and is delivered on a later flush.
//! Ordering is the only concurrency concern here; there are no threads and
//! no cancellation.

use std::time::Instant;

/// Where sanitized markup ends up: the editable region.
///
/// Implementations insert at the current caret or selection, the moral
/// equivalent of a rich-text "insert HTML" command. Returning `false`
/// means the insertion was rejected; the caller drops it silently.
pub trait EditSurface {
    fn insert_html_at_caret(&mut self, html: &str) -> bool;
}

#[derive(Debug)]
struct PendingInsert {
    due: Instant,
    html: String,
}

/// Pending insertions in schedule order.
///
/// The host flushes with [`DeferredQueue::run_due`] once per event-loop
/// turn; entries whose delay has elapsed are delivered in the order they
/// were scheduled.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: Vec<PendingInsert>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, html: String) {
        self.pending.push(PendingInsert { due, html });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due instant among pending insertions, for hosts that wake
    /// on a timer instead of polling every turn.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Deliver every insertion due at `now`. A rejected insertion is
    /// dropped, not retried; the paste simply becomes a no-op.
    pub fn run_due(&mut self, now: Instant, surface: &mut dyn EditSurface) {
        if self.pending.is_empty() {
            return;
        }
        let mut remaining = Vec::with_capacity(self.pending.len());
        for insert in self.pending.drain(..) {
            if insert.due <= now {
                if !surface.insert_html_at_caret(&insert.html) {
                    log::debug!(target: "editor.defer", "edit surface rejected insertion, dropping");
                }
            } else {
                remaining.push(insert);
            }
        }
        self.pending = remaining;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct RecordingSurface {
        inserted: Vec<String>,
        accept: bool,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                inserted: Vec::new(),
                accept: true,
            }
        }
    }

    impl EditSurface for RecordingSurface {
        fn insert_html_at_caret(&mut self, html: &str) -> bool {
            if self.accept {
                self.inserted.push(html.to_string());
            }
            self.accept
        }
    }

    #[test]
    fn insertions_wait_until_due() {
        let now = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut surface = RecordingSurface::new();

        queue.schedule(now + Duration::from_millis(10), "<p>a</p>".to_string());
        queue.run_due(now, &mut surface);
        assert!(surface.inserted.is_empty());
        assert_eq!(queue.len(), 1);

        queue.run_due(now + Duration::from_millis(10), &mut surface);
        assert_eq!(surface.inserted, vec!["<p>a</p>"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn due_insertions_deliver_in_schedule_order() {
        let now = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut surface = RecordingSurface::new();

        queue.schedule(now, "first".to_string());
        queue.schedule(now, "second".to_string());
        queue.run_due(now, &mut surface);
        assert_eq!(surface.inserted, vec!["first", "second"]);
    }

    #[test]
    fn rejected_insertions_are_dropped_without_retry() {
        let now = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut surface = RecordingSurface::new();
        surface.accept = false;

        queue.schedule(now, "x".to_string());
        queue.run_due(now, &mut surface);
        assert!(queue.is_empty());
        assert!(surface.inserted.is_empty());
    }

    #[test]
    fn next_due_reports_the_earliest_entry() {
        let now = Instant::now();
        let mut queue = DeferredQueue::new();
        assert_eq!(queue.next_due(), None);

        queue.schedule(now + Duration::from_millis(20), "a".to_string());
        queue.schedule(now + Duration::from_millis(5), "b".to_string());
        assert_eq!(queue.next_due(), Some(now + Duration::from_millis(5)));
    }
}
