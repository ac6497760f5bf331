//! SessionListener port - Receives session events as they happen.
//!
//! Listeners are notified synchronously by the controller, in registration
//! order, after each state change has been applied.

use crate::domain::session::SessionEvent;

/// Observer of session events.
pub trait SessionListener: Send + Sync {
    fn notify(&self, event: &SessionEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SessionListener) {}
}
