// src/bridge/tests.rs

use super::*;
use crate::backend::{BackendCall, BackendHandle, RecordingBackend, Transcript};
use crate::config::{Config, UnclassifiedActionPolicy};
use crate::error::BridgeError;
use crate::input::{CanonicalInputEvent, InputState, PointerAction, PointerButtons, RawPointerEvent};
use test_log::test;

type Surface = &'static str;

fn bridge_with(config: Config) -> (NativeBridge<RecordingBackend<Surface>>, Transcript<Surface>) {
    let backend = RecordingBackend::with_handle(0x2a);
    let transcript = backend.transcript();
    let bridge = NativeBridge::with_config(backend, config).unwrap();
    (bridge, transcript)
}

fn bridge() -> (NativeBridge<RecordingBackend<Surface>>, Transcript<Surface>) {
    bridge_with(Config::default())
}

fn ordered_bridge() -> (NativeBridge<RecordingBackend<Surface>>, Transcript<Surface>) {
    let mut config = Config::default();
    config.lifecycle.enforce_ordering = true;
    bridge_with(config)
}

fn handle() -> BackendHandle {
    BackendHandle::new(0x2a).unwrap()
}

fn input(state: InputState, x: i32, y: i32) -> BackendCall<Surface> {
    BackendCall::Input {
        handle: handle(),
        event: CanonicalInputEvent::new(state, x, y),
    }
}

#[test]
fn it_should_keep_the_handle_returned_by_the_backend() {
    let (bridge, transcript) = bridge();
    assert_eq!(bridge.handle().raw(), 0x2a);
    assert_eq!(bridge.phase(), SurfacePhase::Detached);
    assert!(transcript.is_empty());
}

#[test]
fn it_should_fail_fast_when_the_backend_returns_a_zero_handle() {
    let backend = RecordingBackend::<Surface>::with_handle(0);
    let transcript = backend.transcript();

    let err = NativeBridge::new(backend).err().unwrap();
    assert!(matches!(err, BridgeError::InvalidHandle));
    assert!(transcript.is_empty());
}

#[test]
fn it_should_fail_fast_when_the_backend_fails_to_initialize() {
    let backend = RecordingBackend::<Surface>::failing("no display server");
    let transcript = backend.transcript();

    let err = NativeBridge::new(backend).err().unwrap();
    match err {
        BridgeError::Init(source) => assert_eq!(source.to_string(), "no display server"),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(transcript.is_empty());
}

#[test]
fn it_should_relay_a_full_surface_lifecycle_in_order() {
    let (mut bridge, transcript) = bridge();

    bridge.surface_created(&"S1");
    assert_eq!(bridge.phase(), SurfacePhase::Attached);
    bridge.surface_changed(&"S1", 100, 200);
    bridge.surface_destroyed(&"S1");
    assert_eq!(bridge.phase(), SurfacePhase::Detached);

    assert_eq!(
        transcript.calls(),
        vec![
            BackendCall::SurfaceCreated { handle: handle(), surface: "S1" },
            BackendCall::SurfaceChanged { handle: handle(), surface: "S1", width: 100, height: 200 },
            BackendCall::SurfaceDestroyed { handle: handle(), surface: "S1" },
        ]
    );
}

#[test]
fn it_should_forward_repeated_identical_sizes() {
    let (mut bridge, transcript) = bridge();

    bridge.surface_created(&"S1");
    bridge.surface_changed(&"S1", 640, 480);
    bridge.surface_changed(&"S1", 640, 480);

    assert_eq!(transcript.len(), 3);
}

#[test]
fn it_should_drop_out_of_order_lifecycle_callbacks_when_ordering_is_enforced() {
    let (mut bridge, transcript) = ordered_bridge();

    bridge.surface_changed(&"S1", 10, 10);
    bridge.surface_destroyed(&"S1");
    assert!(transcript.is_empty());

    bridge.surface_created(&"S1");
    bridge.surface_created(&"S1");
    bridge.surface_destroyed(&"S1");
    bridge.surface_destroyed(&"S1");
    bridge.surface_changed(&"S1", 10, 10);

    assert_eq!(
        transcript.calls(),
        vec![
            BackendCall::SurfaceCreated { handle: handle(), surface: "S1" },
            BackendCall::SurfaceDestroyed { handle: handle(), surface: "S1" },
        ]
    );
}

#[test]
fn it_should_pass_every_lifecycle_callback_through_by_default() {
    let (mut bridge, transcript) = bridge();

    bridge.surface_changed(&"S1", 10, 10);
    bridge.surface_destroyed(&"S1");
    bridge.surface_destroyed(&"S1");

    assert_eq!(transcript.len(), 3);
    assert_eq!(bridge.phase(), SurfacePhase::Detached);
}

#[test]
fn it_should_track_surface_recreation() {
    let (mut bridge, transcript) = bridge();

    bridge.surface_created(&"S1");
    bridge.surface_destroyed(&"S1");
    bridge.surface_created(&"S2");
    bridge.surface_changed(&"S2", 1, 1);
    bridge.surface_destroyed(&"S2");

    assert_eq!(transcript.len(), 5);
    assert_eq!(
        transcript.calls()[2],
        BackendCall::SurfaceCreated { handle: handle(), surface: "S2" }
    );
}

#[test]
fn it_should_consume_and_forward_classified_pointer_events() {
    let (mut bridge, transcript) = bridge();

    assert!(bridge.handle_event(&RawPointerEvent::new(PointerAction::Down, 10.4, 20.6)));
    assert!(bridge.handle_event(&RawPointerEvent::new(PointerAction::HoverMove, 15.0, 25.0)));
    assert!(bridge.handle_event(&RawPointerEvent::new(PointerAction::PointerUp, 15.0, 25.0)));

    assert_eq!(
        transcript.calls(),
        vec![
            input(InputState::Down, 10, 20),
            input(InputState::Motion, 15, 25),
            input(InputState::Up, 15, 25),
        ]
    );
}

#[test]
fn it_should_forward_motion_and_repeated_presses_without_pairing() {
    let (mut bridge, transcript) = bridge();

    bridge.handle_event(&RawPointerEvent::new(PointerAction::Move, 1.0, 1.0));
    bridge.handle_event(&RawPointerEvent::new(PointerAction::Down, 2.0, 2.0));
    bridge.handle_event(&RawPointerEvent::new(PointerAction::ButtonPress, 3.0, 3.0));

    assert_eq!(
        transcript.calls(),
        vec![
            input(InputState::Motion, 1, 1),
            input(InputState::Down, 2, 2),
            input(InputState::Down, 3, 3),
        ]
    );
}

#[test]
fn it_should_forward_unclassified_actions_as_up_and_still_consume_them() {
    let (mut bridge, transcript) = bridge();

    let event = RawPointerEvent::new(PointerAction::Other(77), 5.0, 6.0)
        .with_buttons(PointerButtons::SECONDARY);
    assert!(bridge.handle_event(&event));

    assert_eq!(transcript.calls(), vec![input(InputState::Up, 5, 6)]);
}

#[test]
fn it_should_consume_but_not_forward_unclassified_actions_when_suppressed() {
    let mut config = Config::default();
    config.input.unclassified = UnclassifiedActionPolicy::Suppress;
    let (mut bridge, transcript) = bridge_with(config);

    assert!(bridge.handle_event(&RawPointerEvent::new(PointerAction::Cancel, 5.0, 6.0)));
    assert!(transcript.is_empty());
}

#[test]
fn it_should_release_the_handle_when_dropped() {
    let (mut bridge, transcript) = bridge();
    bridge.surface_created(&"S1");
    bridge.surface_destroyed(&"S1");
    drop(bridge);

    assert_eq!(
        transcript.calls().last(),
        Some(&BackendCall::Release { handle: handle() })
    );
}

#[test]
fn it_should_still_release_last_when_dropped_with_a_surface_attached() {
    let (mut bridge, transcript) = bridge();
    bridge.surface_created(&"S1");
    bridge.surface_changed(&"S1", 8, 8);
    assert_eq!(bridge.phase(), SurfacePhase::Attached);
    drop(bridge);

    // No destroy is made up on the host's behalf.
    assert_eq!(
        transcript.calls(),
        vec![
            BackendCall::SurfaceCreated { handle: handle(), surface: "S1" },
            BackendCall::SurfaceChanged { handle: handle(), surface: "S1", width: 8, height: 8 },
            BackendCall::Release { handle: handle() },
        ]
    );
}
