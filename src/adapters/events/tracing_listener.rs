//! Session listener that writes every event to the tracing subscriber.

use crate::domain::session::{SessionEvent, SessionEventKind};
use crate::ports::SessionListener;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl SessionListener for TracingListener {
    fn notify(&self, event: &SessionEvent) {
        let session_id = event.session_id.to_string();
        match &event.kind {
            SessionEventKind::ChoiceCommitted {
                turn_index,
                card_id,
                side,
                meter_a,
                meter_b,
                ..
            } => tracing::debug!(
                session_id = %session_id,
                turn_index,
                card_id = %card_id,
                side = %side,
                meter_a,
                meter_b,
                "choice committed"
            ),
            SessionEventKind::SessionFinished {
                alignment_percent, ..
            } => tracing::info!(session_id = %session_id, alignment_percent, "session finished"),
            SessionEventKind::PhaseChanged { from, to } => {
                tracing::info!(session_id = %session_id, from = %from, to = %to, "phase changed")
            }
            _ => tracing::debug!(session_id = %session_id, event_type = event.event_type(), "session event"),
        }
    }
}
