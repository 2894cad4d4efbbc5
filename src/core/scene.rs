use super::geometry::Geometry;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Transform of a scene node.
///
/// By default the local matrix is derived from `position`, `rotation`
/// (XYZ Euler angles, radians) and `scale`. [`Node::set_world_transform`]
/// replaces that derivation with an explicit matrix until
/// [`Node::clear_world_transform`] is called.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    explicit: Option<Mat4>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            explicit: None,
        }
    }
}

impl Node {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn quaternion(&self) -> Quat {
        euler_quat(self.rotation)
    }

    /// The authoritative local matrix: the explicit override when set,
    /// otherwise scale, then rotation, then translation.
    pub fn local_matrix(&self) -> Mat4 {
        match self.explicit {
            Some(m) => m,
            None => Mat4::from_scale_rotation_translation(self.scale, self.quaternion(), self.position),
        }
    }

    /// Use `m` verbatim as this node's transform. The position, rotation and
    /// scale fields are ignored while the override is in place.
    pub fn set_world_transform(&mut self, m: Mat4) {
        self.explicit = Some(m);
    }

    pub fn clear_world_transform(&mut self) {
        self.explicit = None;
    }

    #[inline]
    pub fn has_explicit_transform(&self) -> bool {
        self.explicit.is_some()
    }
}

#[inline]
pub fn euler_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Physically based surface description. Every surface in the clock is a
/// double-sided mirror lit only by the environment map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub roughness: f32,
    pub metalness: f32,
    pub env_intensity: f32,
    pub double_sided: bool,
}

impl Material {
    pub fn reflective(color: [f32; 3], env_intensity: f32) -> Self {
        Self {
            color: Vec3::from_array(color),
            roughness: 0.0,
            metalness: 1.0,
            env_intensity,
            double_sided: true,
        }
    }
}

/// One mesh primitive inside a group, positioned relative to the group.
#[derive(Clone, Debug)]
pub struct Part {
    pub geometry: Geometry,
    pub node: Node,
}

/// A rigid composite of parts sharing one material.
#[derive(Clone, Debug)]
pub struct Group {
    pub label: &'static str,
    pub material: Material,
    pub parts: Vec<Part>,
    pub node: Node,
}

impl Group {
    pub fn new(label: &'static str, material: Material) -> Self {
        Self {
            label,
            material,
            parts: Vec::new(),
            node: Node::default(),
        }
    }

    pub fn add(&mut self, geometry: Geometry, node: Node) {
        self.parts.push(Part { geometry, node });
    }

    /// All parts merged into group space. Part layout is static, so this is
    /// what gets uploaded to the GPU once.
    pub fn baked_geometry(&self) -> Geometry {
        let mut out = Geometry::default();
        for part in &self.parts {
            out.append(&part.geometry.transformed(&part.node.local_matrix()));
        }
        out
    }
}
