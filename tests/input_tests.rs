// Host-side tests for pointer drag tracking and wheel handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_reports_deltas_between_samples() {
    let mut d = DragState::default();
    assert_eq!(d.drag_to(1, 10.0, 10.0), None);
    d.begin(1, 10.0, 20.0);
    assert_eq!(d.drag_to(1, 15.0, 18.0), Some((5.0, -2.0)));
    assert_eq!(d.drag_to(1, 15.0, 18.0), Some((0.0, 0.0)));
}

#[test]
fn other_pointers_are_ignored_while_dragging() {
    let mut d = DragState::default();
    d.begin(7, 0.0, 0.0);
    assert_eq!(d.drag_to(8, 50.0, 50.0), None);
    assert!(!d.end(8));
    assert!(d.active);
    assert!(d.end(7));
    assert!(!d.active);
    assert!(!d.end(7));
    assert_eq!(d.drag_to(7, 1.0, 1.0), None);
}

#[test]
fn wheel_direction_ignores_magnitude() {
    assert_eq!(wheel_direction(-120.0), -1.0);
    assert_eq!(wheel_direction(-0.01), -1.0);
    assert_eq!(wheel_direction(3.0), 1.0);
    assert_eq!(wheel_direction(0.0), 0.0);
}
