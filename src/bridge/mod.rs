// src/bridge/mod.rs
//! NativeBridge - thin facade between a host display surface and a backend.
//!
//! ## Threading Model
//! - All callbacks arrive on the host's UI/event thread.
//! - No internal threads, locks or queues. Every backend call is synchronous.
//!
//! ## Lifecycle
//! 1. `new()` / `with_config()` - load the backend library (once per backend type),
//!    initialize the backend and validate its handle. Fails fast.
//! 2. Host callbacks - `surface_created`, `surface_changed`, `surface_destroyed`,
//!    `handle_event`, all scoped by the stored handle.
//! 3. `Drop` - releases the handle.

mod lifecycle;
mod touch;

pub use lifecycle::SurfacePhase;

use log::{info, warn};

use crate::backend::{Backend, BackendHandle};
use crate::config::Config;
use crate::error::BridgeError;
use crate::runtime;

/// Relays surface lifecycle and pointer input from the host to a backend.
///
/// Holds the backend, its handle and the config. The only derived state is
/// the `SurfacePhase`. Surface references are never kept.
pub struct NativeBridge<B: Backend> {
    backend: B,
    handle: BackendHandle,
    config: Config,
    phase: SurfacePhase,
}

impl<B: Backend + 'static> NativeBridge<B> {
    /// Builds a bridge with the default config.
    pub fn new(backend: B) -> Result<Self, BridgeError> {
        Self::with_config(backend, Config::default())
    }

    /// Builds a bridge. No bridge exists if the backend fails to hand out a
    /// valid handle, so no callback can ever reach it.
    pub fn with_config(mut backend: B, config: Config) -> Result<Self, BridgeError> {
        runtime::ensure_backend_library::<B>()?;

        let raw = backend.initialize().map_err(BridgeError::Init)?;
        let handle = BackendHandle::new(raw).ok_or(BridgeError::InvalidHandle)?;

        info!("NativeBridge: initialized with handle {}", handle);
        Ok(Self {
            backend,
            handle,
            config,
            phase: SurfacePhase::default(),
        })
    }
}

impl<B: Backend> NativeBridge<B> {
    pub fn handle(&self) -> BackendHandle {
        self.handle
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> Drop for NativeBridge<B> {
    fn drop(&mut self) {
        if self.phase == SurfacePhase::Attached {
            warn!(
                "NativeBridge: dropped with a surface still attached to handle {}",
                self.handle
            );
        }
        self.backend.release(self.handle);
        info!("NativeBridge: released handle {}", self.handle);
    }
}

#[cfg(test)]
mod tests;
