// src/input/mod.rs

//! Pointer input normalization.
//!
//! Raw host pointer events come in many flavours (touch, secondary pointers,
//! stylus and mouse buttons, hover). The backend only understands a single
//! canonical tuple: `(button, state, x, y)`. This module classifies a raw
//! action into one of three categories and builds that tuple.
//!
//! Classification is stateless. Each event is judged on its own, so a motion
//! with no preceding press, or two presses in a row, pass straight through.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::config::UnclassifiedActionPolicy;

/// Low byte of a raw action code. The high byte carries the pointer index.
const ACTION_MASK: i32 = 0xff;

/// A raw pointer action as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    /// Primary pointer went down.
    Down,
    /// Primary pointer went up.
    Up,
    Move,
    Cancel,
    Outside,
    /// A secondary pointer went down.
    PointerDown,
    /// A secondary pointer went up.
    PointerUp,
    HoverMove,
    Scroll,
    HoverEnter,
    HoverExit,
    ButtonPress,
    ButtonRelease,
    /// Any other action code. `from_raw` only produces it for codes outside
    /// 0..=12. A known code built into `Other` directly (or through serde)
    /// still classifies like its named variant.
    Other(i32),
}

impl PointerAction {
    /// Decodes a host action code, ignoring the pointer-index bits.
    pub fn from_raw(code: i32) -> Self {
        match code & ACTION_MASK {
            0 => PointerAction::Down,
            1 => PointerAction::Up,
            2 => PointerAction::Move,
            3 => PointerAction::Cancel,
            4 => PointerAction::Outside,
            5 => PointerAction::PointerDown,
            6 => PointerAction::PointerUp,
            7 => PointerAction::HoverMove,
            8 => PointerAction::Scroll,
            9 => PointerAction::HoverEnter,
            10 => PointerAction::HoverExit,
            11 => PointerAction::ButtonPress,
            12 => PointerAction::ButtonRelease,
            _ => PointerAction::Other(code),
        }
    }

    /// First match wins: release, then press, then move.
    pub fn category(self) -> Option<ActionCategory> {
        match self {
            PointerAction::Up | PointerAction::PointerUp | PointerAction::ButtonRelease => {
                Some(ActionCategory::Release)
            }
            PointerAction::Down | PointerAction::PointerDown | PointerAction::ButtonPress => {
                Some(ActionCategory::Press)
            }
            PointerAction::Move | PointerAction::HoverMove => Some(ActionCategory::Move),
            PointerAction::Other(code) => match PointerAction::from_raw(code) {
                PointerAction::Other(_) => None,
                known => known.category(),
            },
            _ => None,
        }
    }
}

impl From<i32> for PointerAction {
    fn from(code: i32) -> Self {
        PointerAction::from_raw(code)
    }
}

/// The three classes of raw action the backend cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Release,
    Press,
    Move,
}

bitflags! {
    /// Physical buttons held during a pointer event.
    ///
    /// Only logged. The canonical event always names `Button::Left`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PointerButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const TERTIARY = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
        const STYLUS_PRIMARY = 1 << 5;
        const STYLUS_SECONDARY = 1 << 6;
    }
}

/// A pointer event as delivered by the host, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
    pub buttons: PointerButtons,
}

impl RawPointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            x,
            y,
            buttons: PointerButtons::empty(),
        }
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Logical button understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Button {
    Left = 1,
}

impl Button {
    pub fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Canonical pointer state. Discriminants are the backend's wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum InputState {
    #[default]
    Up = 0,
    Down = 1,
    Motion = 2,
}

impl InputState {
    pub fn as_raw(self) -> u8 {
        self as u8
    }
}

impl From<ActionCategory> for InputState {
    fn from(category: ActionCategory) -> Self {
        match category {
            ActionCategory::Release => InputState::Up,
            ActionCategory::Press => InputState::Down,
            ActionCategory::Move => InputState::Motion,
        }
    }
}

/// The `(button, state, x, y)` tuple forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalInputEvent {
    pub button: Button,
    pub state: InputState,
    pub x: i32,
    pub y: i32,
}

impl CanonicalInputEvent {
    pub fn new(state: InputState, x: i32, y: i32) -> Self {
        Self {
            button: Button::Left,
            state,
            x,
            y,
        }
    }
}

/// Builds the canonical event for `event`, or `None` when `policy` suppresses it.
///
/// Coordinates are truncated toward zero. No scaling is applied.
pub fn normalize(
    event: &RawPointerEvent,
    policy: UnclassifiedActionPolicy,
) -> Option<CanonicalInputEvent> {
    let state = match event.action.category() {
        Some(category) => InputState::from(category),
        None => match policy {
            UnclassifiedActionPolicy::ForwardAsUp => InputState::default(),
            UnclassifiedActionPolicy::Suppress => return None,
        },
    };

    Some(CanonicalInputEvent::new(
        state,
        event.x as i32,
        event.y as i32,
    ))
}
