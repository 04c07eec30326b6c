// src/lib.rs

//! Bridges a host display surface and its pointer input to a rendering or
//! display-server backend.
//!
//! - `bridge::NativeBridge` relays surface lifecycle and normalized input.
//! - `input` turns raw pointer events into the canonical `(button, state, x, y)` tuple.
//! - `backend::Backend` is the call interface the backend implements.

pub mod backend;
pub mod bridge;
pub mod config;
pub mod error;
pub mod input;
pub mod replay;
pub mod runtime;

pub use backend::{Backend, BackendHandle};
pub use bridge::{NativeBridge, SurfacePhase};
pub use config::Config;
pub use error::BridgeError;
pub use input::{Button, CanonicalInputEvent, InputState, PointerAction, PointerButtons, RawPointerEvent};
