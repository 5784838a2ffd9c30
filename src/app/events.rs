//! Event processing from the network backend

use std::time::Instant;

use super::SaltmereApp;
use crate::events;

impl SaltmereApp {
    /// Drain and apply all pending backend events.
    pub fn process_events(&mut self, now: Instant) {
        while let Ok(event) = self.event_rx.try_recv() {
            events::process_single_event(
                event,
                &mut self.auth,
                &mut self.dialogs,
                &mut self.toasts,
                &mut self.forms,
                &mut self.state,
                now,
            );
        }
    }
}
