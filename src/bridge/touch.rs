// src/bridge/touch.rs

use log::{debug, trace, warn};

use super::NativeBridge;
use crate::backend::Backend;
use crate::input::{self, InputState, RawPointerEvent};

impl<B: Backend> NativeBridge<B> {
    /// Normalizes a host pointer event and forwards it.
    ///
    /// Always returns `true`: every pointer event is consumed, so the host
    /// never dispatches it anywhere else.
    pub fn handle_event(&mut self, event: &RawPointerEvent) -> bool {
        if event.action.category().is_none() {
            warn!(
                "NativeBridge: unclassified pointer action {:?}, policy {:?}",
                event.action, self.config.input.unclassified
            );
        }

        let Some(canonical) = input::normalize(event, self.config.input.unclassified) else {
            return true;
        };

        if canonical.state == InputState::Motion {
            trace!(
                "NativeBridge: motion at ({}, {}) buttons {:?}",
                canonical.x, canonical.y, event.buttons
            );
        } else {
            debug!(
                "NativeBridge: {:?} {:?} at ({}, {}) from {:?}, buttons {:?}",
                canonical.button, canonical.state, canonical.x, canonical.y, event.action, event.buttons
            );
        }

        self.backend.notify_input(self.handle, canonical);
        true
    }
}
