// src/bridge/lifecycle.rs

use log::{debug, warn};

use super::NativeBridge;
use crate::backend::Backend;

/// Whether the host currently has a surface attached to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfacePhase {
    #[default]
    Detached,
    Attached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceTransition {
    Created,
    Changed,
    Destroyed,
}

impl SurfacePhase {
    /// Created -> Changed* -> Destroyed. Anything else yields `None`.
    fn advance(self, transition: SurfaceTransition) -> Option<SurfacePhase> {
        match (self, transition) {
            (SurfacePhase::Detached, SurfaceTransition::Created) => Some(SurfacePhase::Attached),
            (SurfacePhase::Attached, SurfaceTransition::Changed) => Some(SurfacePhase::Attached),
            (SurfacePhase::Attached, SurfaceTransition::Destroyed) => Some(SurfacePhase::Detached),
            _ => None,
        }
    }
}

impl<B: Backend> NativeBridge<B> {
    /// The host made a surface available for rendering.
    pub fn surface_created(&mut self, surface: &B::Surface) {
        if !self.admit(SurfaceTransition::Created) {
            return;
        }
        debug!("NativeBridge: surface created (handle {})", self.handle);
        self.backend.notify_surface_created(self.handle, surface);
    }

    /// The surface's pixel size or format changed. Identical sizes are
    /// forwarded again.
    pub fn surface_changed(&mut self, surface: &B::Surface, width: u32, height: u32) {
        if !self.admit(SurfaceTransition::Changed) {
            return;
        }
        debug!(
            "NativeBridge: surface changed to {}x{} (handle {})",
            width, height, self.handle
        );
        self.backend
            .notify_surface_changed(self.handle, surface, width, height);
    }

    /// The surface is going away. The bridge must not touch it afterwards.
    pub fn surface_destroyed(&mut self, surface: &B::Surface) {
        if !self.admit(SurfaceTransition::Destroyed) {
            return;
        }
        debug!("NativeBridge: surface destroyed (handle {})", self.handle);
        self.backend.notify_surface_destroyed(self.handle, surface);
    }

    fn admit(&mut self, transition: SurfaceTransition) -> bool {
        match self.phase.advance(transition) {
            Some(next) => {
                self.phase = next;
                true
            }
            None if self.config.lifecycle.enforce_ordering => {
                warn!(
                    "NativeBridge: dropping {:?} while {:?} (handle {})",
                    transition, self.phase, self.handle
                );
                false
            }
            None => {
                self.phase = match transition {
                    SurfaceTransition::Destroyed => SurfacePhase::Detached,
                    SurfaceTransition::Created | SurfaceTransition::Changed => {
                        SurfacePhase::Attached
                    }
                };
                true
            }
        }
    }
}
