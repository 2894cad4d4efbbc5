// Host-side tests for hand and tick placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod clock_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod placement {
        include!("../src/core/placement.rs");
    }
}

use clock_core::placement::*;
use clock_core::scene::Node;
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const EPS: f32 = 1e-5;

fn approx_mat(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPS)
}

#[test]
fn zero_angle_without_tilt_is_a_pure_translation() {
    let m = placement_matrix(0.0, Vec3::ZERO, Placement::new(1.0, 0.0));
    assert!(approx_mat(m, Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))));
}

#[test]
fn quarter_turn_points_to_three_o_clock() {
    let m = placement_matrix(FRAC_PI_2, Vec3::ZERO, Placement::new(1.5, 0.2));
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(1.5, 0.0, 0.2)).length() < EPS);
    // the bar's long axis now runs along +X
    let up = m.transform_vector3(Vec3::Y);
    assert!((up - Vec3::X).length() < EPS);
}

#[test]
fn reference_tilt_is_applied_after_the_dial_rotation() {
    let reference = Vec3::new(0.1, -0.2, 0.0);
    let placement = Placement::new(0.8, 0.1);
    let m = placement_matrix(PI / 3.0, reference, placement);
    let tilt = Mat4::from_quat(clock_core::scene::euler_quat(reference));
    let flat = placement_matrix(PI / 3.0, Vec3::ZERO, placement);
    assert!(approx_mat(m, tilt * flat));
}

#[test]
fn placing_twice_gives_the_same_transform() {
    let reference = Vec3::new(0.05, 0.03, 0.0);
    let placement = Placement::new(1.0, 0.0);
    let mut node = Node::default();
    place(&mut node, 1.0, reference, placement);
    let first = node.local_matrix();
    place(&mut node, 1.0, reference, placement);
    assert_eq!(first, node.local_matrix());
}

#[test]
fn placement_overrides_position_rotation_and_scale() {
    let mut node = Node::at(Vec3::new(5.0, 5.0, 5.0)).with_rotation(Vec3::new(1.0, 2.0, 3.0));
    node.scale = Vec3::splat(3.0);
    place(&mut node, 0.0, Vec3::ZERO, Placement::new(1.0, 0.0));
    assert!(node.has_explicit_transform());
    assert!(approx_mat(
        node.local_matrix(),
        Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))
    ));
    node.clear_world_transform();
    assert!(!node.has_explicit_transform());
    assert!((node.local_matrix().w_axis.truncate() - Vec3::splat(5.0)).length() < EPS);
}

#[test]
fn hour_angle_covers_a_full_turn_in_twelve_hours() {
    assert_eq!(hour_angle(0), 0.0);
    assert!((hour_angle(3) - FRAC_PI_2).abs() < EPS);
    assert!((hour_angle(6) - PI).abs() < EPS);
    assert!((hour_angle(12) - TAU).abs() < EPS);
    // afternoon hours are not reduced but land on the same dial position
    let m13 = placement_matrix(hour_angle(13), Vec3::ZERO, Placement::new(1.0, 0.0));
    let m1 = placement_matrix(hour_angle(1), Vec3::ZERO, Placement::new(1.0, 0.0));
    assert!(m13.abs_diff_eq(m1, 1e-4));
}

#[test]
fn minutes_and_seconds_step_by_a_sixtieth() {
    assert!((minute_angle(15) - FRAC_PI_2).abs() < EPS);
    assert!((second_angle(30) - PI).abs() < EPS);
    let a = HandAngles::from_wall_time(WallTime::new(6, 45, 59));
    assert!((a.hour - PI).abs() < EPS);
    assert!((a.minute - 0.75 * TAU).abs() < EPS);
    assert!((a.second - 59.0 / 60.0 * TAU).abs() < EPS);
}

#[test]
fn tick_angles_are_evenly_spaced() {
    for i in 0..12 {
        assert!((tick_angle(i) - i as f32 * TAU / 12.0).abs() < EPS);
    }
}
