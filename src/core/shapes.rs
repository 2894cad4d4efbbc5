use super::constants::*;
use super::geometry::Geometry;
use super::scene::{Group, Material, Node};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Parameters of a capsule-like bar (clock hand or tick).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpec {
    pub height: f32,
    pub width: f32,
    pub depth: f32,
    pub color: [f32; 3],
    pub env_intensity: f32,
}

/// Box body plus two round end caps at `±height/2`, all sharing one
/// reflective material. The caps are cylinders of radius `width/2` turned
/// to face the viewer.
pub fn build_line(label: &'static str, spec: &LineSpec) -> Group {
    let mut group = Group::new(label, Material::reflective(spec.color, spec.env_intensity));
    let radius = spec.width * 0.5;
    let half_h = spec.height * 0.5;
    let cap_turn = Vec3::new(FRAC_PI_2, 0.0, 0.0);

    group.add(
        Geometry::cuboid(spec.width, spec.height, spec.depth),
        Node::default(),
    );
    group.add(
        Geometry::cylinder(radius, spec.depth, LINE_CAP_SEGMENTS, false),
        Node::at(Vec3::new(0.0, half_h, 0.0)).with_rotation(cap_turn),
    );
    group.add(
        Geometry::cylinder(radius, spec.depth, LINE_CAP_SEGMENTS, false),
        Node::at(Vec3::new(0.0, -half_h, 0.0)).with_rotation(cap_turn),
    );
    group
}

/// One bezel layer: front and back annulus faces plus outer and inner rims,
/// spanning radius `RING_INNER_RADIUS..RING_INNER_RADIUS + thickness`.
pub fn build_ring(label: &'static str, thickness: f32, color: [f32; 3]) -> Group {
    let mut group = Group::new(label, Material::reflective(color, RING_ENV_INTENSITY));
    let inner = RING_INNER_RADIUS;
    let outer = RING_INNER_RADIUS + thickness;
    let half_d = RING_DEPTH * 0.5;
    // Cylinders are built along +Y; stand them along the view axis
    let upright = Vec3::new(FRAC_PI_2, 0.0, 0.0);

    group.add(
        Geometry::annulus(inner, outer, RING_FACE_SEGMENTS),
        Node::at(Vec3::new(0.0, 0.0, half_d)),
    );
    group.add(
        Geometry::annulus(inner, outer, RING_FACE_SEGMENTS),
        Node::at(Vec3::new(0.0, 0.0, -half_d)),
    );
    group.add(
        Geometry::cylinder(outer, RING_DEPTH, RING_OUTER_RIM_SEGMENTS, true),
        Node::default().with_rotation(upright),
    );
    group.add(
        Geometry::cylinder(inner, RING_DEPTH, RING_INNER_RIM_SEGMENTS, true),
        Node::default().with_rotation(upright),
    );
    group
}

pub const TICK_SPEC: LineSpec = LineSpec {
    height: TICK_HEIGHT,
    width: TICK_WIDTH,
    depth: TICK_DEPTH,
    color: TICK_COLOR,
    env_intensity: TICK_ENV_INTENSITY,
};

/// The twelve hour ticks. Index `i` sits at `i/12` of a full turn once
/// placed.
#[derive(Clone, Debug)]
pub struct TickMarks {
    pub ticks: Vec<Group>,
}

impl TickMarks {
    pub fn build() -> Self {
        let ticks = (0..TICK_COUNT)
            .map(|_| build_line("tick", &TICK_SPEC))
            .collect();
        Self { ticks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
