use super::constants::{PARALLAX_BLEND, PARALLAX_RETAIN, POINTER_PARALLAX_SCALE};
use glam::{Vec2, Vec3};

/// Latest pointer offset from the viewport centre, in parallax units.
/// Written by the pointer listener, read once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map client pixel coordinates to parallax units relative to the
    /// centre of a `viewport_w` x `viewport_h` viewport.
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x: (client_x - viewport_w * 0.5) * POINTER_PARALLAX_SCALE,
            y: (client_y - viewport_h * 0.5) * POINTER_PARALLAX_SCALE,
        }
    }
}

/// How strongly, and in which direction, a ring follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxResponse {
    pub sensitivity: Vec2,
    pub inverted: bool,
}

impl ParallaxResponse {
    pub fn new(sensitivity: f32, inverted: bool) -> Self {
        Self {
            sensitivity: Vec2::splat(sensitivity),
            inverted,
        }
    }

    /// Steady-state (rot_x, rot_y) for a pointer held at `p`. Vertical
    /// pointer motion tips about X, horizontal about Y.
    pub fn target(&self, p: PointerState) -> Vec2 {
        let sign = if self.inverted { -1.0 } else { 1.0 };
        Vec2::new(p.y * self.sensitivity.y, p.x * self.sensitivity.x) * sign
    }
}

/// Advance one frame of the one-pole low-pass on a ring's X/Y rotation.
/// The Z rotation is left untouched.
pub fn smooth_rotation(rotation: &mut Vec3, response: &ParallaxResponse, pointer: PointerState) {
    let target = response.target(pointer);
    rotation.x = rotation.x * PARALLAX_RETAIN + target.x * PARALLAX_BLEND;
    rotation.y = rotation.y * PARALLAX_RETAIN + target.y * PARALLAX_BLEND;
}
