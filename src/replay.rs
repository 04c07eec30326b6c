// src/replay.rs

//! Scripted host sessions.
//!
//! A script is a JSON list of host callbacks, replayed in order against a
//! `NativeBridge`. Useful for reproducing a host's callback sequence without
//! the host itself:
//!
//! ```json
//! { "events": [
//!     { "kind": "created", "surface": 1 },
//!     { "kind": "changed", "surface": 1, "width": 100, "height": 200 },
//!     { "kind": "touch", "action": "down", "x": 10.0, "y": 20.0 },
//!     { "kind": "destroyed", "surface": 1 }
//! ] }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::bridge::NativeBridge;
use crate::error::BridgeError;
use crate::input::{PointerAction, PointerButtons, RawPointerEvent};

/// Stand-in for a host display surface, identified by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplaySurface {
    pub id: u32,
}

/// One host callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    Created {
        surface: u32,
    },
    Changed {
        surface: u32,
        width: u32,
        height: u32,
    },
    Destroyed {
        surface: u32,
    },
    Touch {
        action: PointerAction,
        x: f32,
        y: f32,
        #[serde(default)]
        buttons: PointerButtons,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Script {
    pub events: Vec<HostEvent>,
}

impl Script {
    pub fn from_json_str(json: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Drives every event of `script` into `bridge`. Returns how many touch
/// events the bridge reported as consumed.
pub fn run<B>(bridge: &mut NativeBridge<B>, script: &Script) -> usize
where
    B: Backend<Surface = ReplaySurface>,
{
    let mut consumed = 0;
    for event in &script.events {
        debug!("replay: {:?}", event);
        match *event {
            HostEvent::Created { surface } => bridge.surface_created(&ReplaySurface { id: surface }),
            HostEvent::Changed {
                surface,
                width,
                height,
            } => bridge.surface_changed(&ReplaySurface { id: surface }, width, height),
            HostEvent::Destroyed { surface } => {
                bridge.surface_destroyed(&ReplaySurface { id: surface })
            }
            HostEvent::Touch {
                action,
                x,
                y,
                buttons,
            } => {
                let raw = RawPointerEvent::new(action, x, y).with_buttons(buttons);
                if bridge.handle_event(&raw) {
                    consumed += 1;
                }
            }
        }
    }
    consumed
}
