use super::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_STEP,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Eye position around a target in spherical coordinates (Y up).
/// `theta` is the azimuth measured from +Z toward +X, `phi` the polar angle
/// from +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Pointer-drag orbit controls. Input handlers accumulate deltas; `update`
/// applies them once per frame and clears them.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    eye: Vec3,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            target,
            eye,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: ORBIT_ROTATE_SPEED,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Queue a rotation for a drag of `(dx, dy)` pixels in a viewport
    /// `viewport_h` pixels tall. A full-height drag turns a full circle.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        let h = viewport_h.max(1.0);
        self.theta_delta -= TAU * dx / h * self.rotate_speed;
        self.phi_delta -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a dolly for a wheel event. Negative `delta_y` moves closer.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.scale /= ORBIT_ZOOM_STEP;
        }
    }

    /// Apply queued input. Returns whether the eye moved.
    pub fn update(&mut self) -> bool {
        let mut s = Spherical::from_offset(self.eye - self.target);
        s.theta += self.theta_delta;
        s.phi = (s.phi + self.phi_delta).clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let eye = self.target + s.to_offset();
        let moved = eye.distance_squared(self.eye) > 1e-12;
        self.eye = eye;
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;
        moved
    }
}
