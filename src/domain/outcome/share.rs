//! Share text rendering.

use crate::domain::foundation::Percentage;

/// Challenge message a player can post after finishing a session.
pub fn share_message(alignment_percent: Percentage) -> String {
    format!(
        "I scored {} alignment with the Reform Agenda! Can you fix Washington?",
        alignment_percent
    )
}
