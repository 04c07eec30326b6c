// src/backend/recording.rs

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{Backend, BackendHandle};
use crate::input::CanonicalInputEvent;

/// One notification as observed by a `RecordingBackend`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum BackendCall<S> {
    SurfaceCreated {
        handle: BackendHandle,
        surface: S,
    },
    SurfaceChanged {
        handle: BackendHandle,
        surface: S,
        width: u32,
        height: u32,
    },
    SurfaceDestroyed {
        handle: BackendHandle,
        surface: S,
    },
    Input {
        handle: BackendHandle,
        event: CanonicalInputEvent,
    },
    Release {
        handle: BackendHandle,
    },
}

/// Shared, append-only view of the calls a `RecordingBackend` received.
///
/// Outlives the backend, so it can be inspected after a failed construction
/// or after the bridge was dropped.
#[derive(Debug)]
pub struct Transcript<S>(Rc<RefCell<Vec<BackendCall<S>>>>);

impl<S> Clone for Transcript<S> {
    fn clone(&self) -> Self {
        Transcript(Rc::clone(&self.0))
    }
}

impl<S: Clone> Transcript<S> {
    pub fn calls(&self) -> Vec<BackendCall<S>> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn push(&self, call: BackendCall<S>) {
        self.0.borrow_mut().push(call);
    }
}

/// In-process backend that records every notification instead of rendering.
pub struct RecordingBackend<S> {
    init_result: std::result::Result<u64, String>,
    transcript: Transcript<S>,
}

impl<S: Clone> RecordingBackend<S> {
    /// Hands out `raw_handle` on `initialize()`.
    pub fn with_handle(raw_handle: u64) -> Self {
        Self {
            init_result: Ok(raw_handle),
            transcript: Transcript(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    /// Fails `initialize()` with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            init_result: Err(reason.into()),
            transcript: Transcript(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    pub fn transcript(&self) -> Transcript<S> {
        self.transcript.clone()
    }
}

impl<S: Clone> Default for RecordingBackend<S> {
    fn default() -> Self {
        Self::with_handle(1)
    }
}

impl<S: Clone> Backend for RecordingBackend<S> {
    type Surface = S;

    fn initialize(&mut self) -> Result<u64> {
        self.init_result.clone().map_err(|reason| anyhow!(reason))
    }

    fn notify_surface_created(&mut self, handle: BackendHandle, surface: &S) {
        self.transcript.push(BackendCall::SurfaceCreated {
            handle,
            surface: surface.clone(),
        });
    }

    fn notify_surface_changed(&mut self, handle: BackendHandle, surface: &S, width: u32, height: u32) {
        self.transcript.push(BackendCall::SurfaceChanged {
            handle,
            surface: surface.clone(),
            width,
            height,
        });
    }

    fn notify_surface_destroyed(&mut self, handle: BackendHandle, surface: &S) {
        self.transcript.push(BackendCall::SurfaceDestroyed {
            handle,
            surface: surface.clone(),
        });
    }

    fn notify_input(&mut self, handle: BackendHandle, event: CanonicalInputEvent) {
        self.transcript.push(BackendCall::Input { handle, event });
    }

    fn release(&mut self, handle: BackendHandle) {
        self.transcript.push(BackendCall::Release { handle });
    }
}
