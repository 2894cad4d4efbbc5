use glam::{Mat3, Mat4, Vec3};
use std::f32::consts::TAU;

/// GPU vertex: position and normal, 24 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list. Front faces wind counter-clockwise.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Axis-aligned box centred on the origin with extents `width` (x),
    /// `height` (y) and `depth` (z).
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(width, height, depth) * 0.5;
        // (normal, u, v) with u x v == normal
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];
        let mut g = Self::default();
        for (n, u, v) in faces {
            let base = g.vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let p = (n + u * su + v * sv) * half;
                g.vertices.push(Vertex::new(p, n));
            }
            g.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        g
    }

    /// Cylinder along +Y centred on the origin. With `open_ended` only the
    /// side wall is generated.
    pub fn cylinder(radius: f32, height: f32, radial_segments: u32, open_ended: bool) -> Self {
        let segments = radial_segments.max(3);
        let half_h = height * 0.5;
        let mut g = Self::default();

        // Side wall: a top and bottom vertex per column, seam duplicated
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            let n = Vec3::new(s, 0.0, c);
            g.vertices
                .push(Vertex::new(Vec3::new(radius * s, half_h, radius * c), n));
            g.vertices
                .push(Vertex::new(Vec3::new(radius * s, -half_h, radius * c), n));
        }
        for i in 0..segments {
            let a = i * 2;
            let b = a + 1;
            let c = a + 3;
            let d = a + 2;
            g.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }

        if !open_ended {
            g.push_cap(radius, half_h, segments, true);
            g.push_cap(radius, -half_h, segments, false);
        }
        g
    }

    fn push_cap(&mut self, radius: f32, y: f32, segments: u32, top: bool) {
        let n = if top { Vec3::Y } else { Vec3::NEG_Y };
        let center = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), n));
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            self.vertices
                .push(Vertex::new(Vec3::new(radius * s, y, radius * c), n));
        }
        for i in 0..segments {
            let p0 = center + 1 + i;
            let p1 = p0 + 1;
            if top {
                self.indices.extend_from_slice(&[center, p0, p1]);
            } else {
                self.indices.extend_from_slice(&[center, p1, p0]);
            }
        }
    }

    /// Flat ring in the XY plane facing +Z, spanning `inner..outer` radius.
    pub fn annulus(inner: f32, outer: f32, theta_segments: u32) -> Self {
        let segments = theta_segments.max(3);
        let mut g = Self::default();
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            g.vertices
                .push(Vertex::new(Vec3::new(inner * c, inner * s, 0.0), Vec3::Z));
            g.vertices
                .push(Vertex::new(Vec3::new(outer * c, outer * s, 0.0), Vec3::Z));
        }
        for i in 0..segments {
            let a = i * 2; // inner, this column
            let b = a + 1; // outer
            let c = a + 3; // outer, next column
            let d = a + 2; // inner, next column
            g.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
        g
    }

    /// Copy with positions moved by `m` and normals by its inverse transpose.
    pub fn transformed(&self, m: &Mat4) -> Self {
        let normal_m = Mat3::from_mat4(*m).inverse().transpose();
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let p = m.transform_point3(Vec3::from_array(v.position));
                let n = (normal_m * Vec3::from_array(v.normal)).normalize_or_zero();
                Vertex::new(p, n)
            })
            .collect();
        Self {
            vertices,
            indices: self.indices.clone(),
        }
    }

    /// Append `other`, re-basing its indices.
    pub fn append(&mut self, other: &Geometry) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Min and max distance from the Z axis over all vertices.
    pub fn radial_extent(&self) -> Option<(f32, f32)> {
        self.vertices.iter().fold(None, |acc, v| {
            let r = (v.position[0] * v.position[0] + v.position[1] * v.position[1]).sqrt();
            match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            }
        })
    }
}
