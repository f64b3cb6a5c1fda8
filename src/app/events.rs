//! Event processing from backend

use super::ChatApp;
use crate::events;

impl ChatApp {
    pub fn process_events(&mut self) -> usize {
        events::process_events(&self.event_rx, &mut self.state)
    }
}
