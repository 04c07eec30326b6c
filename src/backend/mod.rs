// src/backend/mod.rs

//! Defines the `Backend` trait: the calls this crate makes into the rendering
//! or display-server process, plus the opaque `BackendHandle` that scopes them.
//!
//! ## Call model
//! - `initialize()` runs once per bridge and must yield a non-zero handle.
//! - Every later call carries that handle unchanged.
//! - Notifications are fire-and-forget. Failures stay inside the backend.
//! - Calls run on the host's event thread and must return promptly.

use anyhow::Result;
use std::fmt;
use std::num::NonZeroU64;

use crate::input::CanonicalInputEvent;

pub mod recording;

pub use recording::{BackendCall, RecordingBackend, Transcript};

/// Opaque session token handed out by the backend.
///
/// A plain integer, not a reference. The backend may live in another memory
/// or security domain. Zero is never a valid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct BackendHandle(NonZeroU64);

impl BackendHandle {
    /// Returns `None` for the invalid zero handle.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(BackendHandle)
    }

    pub fn raw(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// The backend's side of the bridge.
pub trait Backend {
    /// The host's display-surface type. The bridge borrows it only for the
    /// length of a lifecycle callback.
    type Surface: ?Sized;

    /// One-time, process-wide library setup. Runs before the first
    /// `initialize()` in the process.
    fn load_library() -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }

    /// Opens a session and returns its raw handle. Zero means failure.
    fn initialize(&mut self) -> Result<u64>;

    /// The surface is available for rendering.
    fn notify_surface_created(&mut self, handle: BackendHandle, surface: &Self::Surface);

    /// The surface's pixel size or format changed. May repeat identical sizes.
    fn notify_surface_changed(
        &mut self,
        handle: BackendHandle,
        surface: &Self::Surface,
        width: u32,
        height: u32,
    );

    /// The surface is about to become invalid. Last call for that surface.
    fn notify_surface_destroyed(&mut self, handle: BackendHandle, surface: &Self::Surface);

    fn notify_input(&mut self, handle: BackendHandle, event: CanonicalInputEvent);

    /// Clean-shutdown release of the session. Hosts that cannot shut down
    /// cleanly never reach it.
    fn release(&mut self, _handle: BackendHandle) {}
}
