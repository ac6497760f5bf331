//! In-memory session listener that captures events for assertions.

use std::sync::RwLock;

use crate::domain::session::SessionEvent;
use crate::ports::SessionListener;

/// Records every event it is notified of.
///
/// # Example
///
/// ```ignore
/// let log = Arc::new(RecordingListener::new());
/// controller.subscribe(log.clone());
/// // ... play ...
/// assert!(log.has_event("session.deck_exhausted.v1"));
/// ```
#[derive(Default)]
pub struct RecordingListener {
    events: RwLock<Vec<SessionEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.read().map(|e| e.clone()).unwrap_or_default()
    }

    /// Routing keys in notification order.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .read()
            .map(|events| events.iter().map(SessionEvent::event_type).collect())
            .unwrap_or_default()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.event_types().contains(&event_type)
    }

    pub fn count_of(&self, event_type: &str) -> usize {
        self.event_types()
            .into_iter()
            .filter(|t| *t == event_type)
            .count()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.write() {
            events.clear();
        }
    }
}

impl SessionListener for RecordingListener {
    fn notify(&self, event: &SessionEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::session::SessionEventKind;

    #[test]
    fn records_in_order() {
        let log = RecordingListener::new();
        let id = SessionId::new();
        log.notify(&SessionEvent::new(id, SessionEventKind::TurnEnded { turn_index: 0 }));
        log.notify(&SessionEvent::new(id, SessionEventKind::DeckExhausted { cards_played: 1 }));

        assert_eq!(
            log.event_types(),
            vec!["session.turn_ended.v1", "session.deck_exhausted.v1"]
        );
        assert_eq!(log.count_of("session.turn_ended.v1"), 1);

        log.clear();
        assert!(log.events().is_empty());
    }
}
