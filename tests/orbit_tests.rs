// Host-side tests for the camera and orbit controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod clock_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
}

use clock_core::constants::*;
use clock_core::orbit::*;
use glam::{Vec3, Vec4Swizzles};

fn controls() -> OrbitControls {
    OrbitControls::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
}

#[test]
fn spherical_round_trips_an_offset() {
    let v = Vec3::new(3.0, -2.0, 5.0);
    let back = Spherical::from_offset(v).to_offset();
    assert!((back - v).length() < 1e-4);
}

#[test]
fn update_without_input_leaves_the_eye_in_place() {
    let mut c = controls();
    for _ in 0..10 {
        c.update();
    }
    assert!((c.eye() - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
}

#[test]
fn horizontal_drag_orbits_around_the_target() {
    let mut c = controls();
    // a quarter of the viewport height is a quarter turn
    c.rotate_by_pixels(-150.0, 0.0, 600.0);
    assert!(c.update());
    let eye = c.eye();
    assert!((eye - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-3, "{eye:?}");
    // deltas are consumed
    c.update();
    assert!((c.eye() - eye).length() < 1e-3);
}

#[test]
fn vertical_drag_stops_short_of_the_pole() {
    let mut c = controls();
    c.rotate_by_pixels(0.0, 2000.0, 600.0);
    c.update();
    let eye = c.eye();
    assert!(eye.y > 9.99 && eye.y <= 10.0);
    assert!((eye.length() - 10.0).abs() < 1e-3);
}

#[test]
fn wheel_dollies_within_limits() {
    let mut c = controls();
    c.dolly(-1.0);
    c.update();
    assert!((c.eye().length() - 10.0 * ORBIT_ZOOM_STEP).abs() < 1e-4);

    for _ in 0..200 {
        c.dolly(-1.0);
        c.update();
    }
    assert!((c.eye().length() - ORBIT_MIN_DISTANCE).abs() < 1e-4);

    for _ in 0..500 {
        c.dolly(1.0);
        c.update();
    }
    assert!((c.eye().length() - ORBIT_MAX_DISTANCE).abs() < 1e-2);
}

#[test]
fn zero_wheel_delta_does_nothing() {
    let mut c = controls();
    c.dolly(0.0);
    c.update();
    assert!((c.eye().length() - 10.0).abs() < 1e-4);
}

#[test]
fn camera_projects_the_target_to_the_screen_centre() {
    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, 10.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: 45f32.to_radians(),
        znear: 0.1,
        zfar: 1000.0,
    };
    let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
