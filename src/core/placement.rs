use super::constants::TICK_COUNT;
use super::scene::{euler_quat, Node};
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Local wall-clock reading. `hour` is 0..24 as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// Hand angles in radians, clockwise from twelve o'clock. Hands jump once
/// per unit; there is no interpolation between readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_wall_time(t: WallTime) -> Self {
        Self {
            hour: hour_angle(t.hour),
            minute: minute_angle(t.minute),
            second: second_angle(t.second),
        }
    }
}

#[inline]
pub fn hour_angle(hour: u32) -> f32 {
    hour as f32 / 12.0 * TAU
}

#[inline]
pub fn minute_angle(minute: u32) -> f32 {
    minute as f32 / 60.0 * TAU
}

#[inline]
pub fn second_angle(second: u32) -> f32 {
    second as f32 / 60.0 * TAU
}

#[inline]
pub fn tick_angle(index: usize) -> f32 {
    index as f32 / TICK_COUNT as f32 * TAU
}

/// Fixed offsets of a hand or tick from the clock centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub radial_offset: f32,
    pub depth_offset: f32,
}

impl Placement {
    pub const fn new(radial_offset: f32, depth_offset: f32) -> Self {
        Self {
            radial_offset,
            depth_offset,
        }
    }
}

/// `R(reference) * Rz(-angle) * T(0, radial, depth)`: push out to the ring
/// radius, turn clockwise to the dial angle, then tilt with the reference
/// ring. `reference` is an XYZ Euler orientation.
pub fn placement_matrix(angle: f32, reference: Vec3, placement: Placement) -> Mat4 {
    let translate = Mat4::from_translation(Vec3::new(
        0.0,
        placement.radial_offset,
        placement.depth_offset,
    ));
    let dial = Mat4::from_rotation_z(-angle);
    let tilt = Mat4::from_quat(euler_quat(reference));
    tilt * dial * translate
}

/// Recompute `node`'s transform from scratch and make it authoritative.
pub fn place(node: &mut Node, angle: f32, reference: Vec3, placement: Placement) {
    node.set_world_transform(placement_matrix(angle, reference, placement));
}
