//! Shared harness for host-session tests.
//!
//! Wraps a `NativeBridge` over a `RecordingBackend` so a test can play the
//! host and then inspect what the backend observed.

use surface_bridge::backend::{BackendCall, BackendHandle, RecordingBackend, Transcript};
use surface_bridge::{Config, NativeBridge};

pub type Surface = u32;

pub const HANDLE: u64 = 0x51;

pub struct HostHarness {
    pub bridge: NativeBridge<RecordingBackend<Surface>>,
    pub transcript: Transcript<Surface>,
}

impl HostHarness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let backend = RecordingBackend::with_handle(HANDLE);
        let transcript = backend.transcript();
        let bridge = NativeBridge::with_config(backend, config).expect("bridge construction");
        Self { bridge, transcript }
    }

    pub fn calls(&self) -> Vec<BackendCall<Surface>> {
        self.transcript.calls()
    }
}

pub fn handle() -> BackendHandle {
    BackendHandle::new(HANDLE).expect("non-zero handle")
}
