// Host-side tests for mesh primitives and the line/ring builders.
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
    pub mod shapes {
        include!("../src/core/shapes.rs");
    }
}

use clock_core::constants::*;
use clock_core::geometry::*;
use clock_core::shapes::*;
use glam::Vec3;

const EPS: f32 = 1e-4;

fn bounds(g: &Geometry) -> (Vec3, Vec3) {
    g.vertices.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), v| {
            let p = Vec3::from_array(v.position);
            (lo.min(p), hi.max(p))
        },
    )
}

// Every triangle's winding must agree with its vertex normals.
fn assert_ccw_matches_normals(g: &Geometry) {
    for tri in g.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| g.vertices[i as usize]);
        let pa = Vec3::from_array(a.position);
        let face = (Vec3::from_array(b.position) - pa).cross(Vec3::from_array(c.position) - pa);
        if face.length_squared() < 1e-12 {
            continue;
        }
        let n = Vec3::from_array(a.normal) + Vec3::from_array(b.normal) + Vec3::from_array(c.normal);
        assert!(face.dot(n) > 0.0, "triangle {:?} winds against its normals", tri);
    }
}

#[test]
fn cuboid_has_requested_extents() {
    let g = Geometry::cuboid(0.5, 2.0, 0.1);
    let (lo, hi) = bounds(&g);
    assert!((hi - lo - Vec3::new(0.5, 2.0, 0.1)).abs().max_element() < EPS);
    assert!((lo + hi).abs().max_element() < EPS, "not centred");
    assert_eq!(g.vertices.len(), 24);
    assert_eq!(g.triangle_count(), 12);
    assert_ccw_matches_normals(&g);
}

#[test]
fn closed_cylinder_has_caps_and_open_one_does_not() {
    let closed = Geometry::cylinder(1.0, 2.0, 16, false);
    let open = Geometry::cylinder(1.0, 2.0, 16, true);
    assert_eq!(open.triangle_count(), 32);
    assert_eq!(closed.triangle_count(), 32 + 16 * 2);
    let (lo, hi) = bounds(&closed);
    assert!((lo.y + 1.0).abs() < EPS && (hi.y - 1.0).abs() < EPS);
    assert_ccw_matches_normals(&closed);
    assert_ccw_matches_normals(&open);
}

#[test]
fn annulus_spans_inner_to_outer_radius() {
    let g = Geometry::annulus(2.0, 2.5, 70);
    let (lo, hi) = g.radial_extent().unwrap();
    assert!((lo - 2.0).abs() < EPS);
    assert!((hi - 2.5).abs() < EPS);
    assert!(g.vertices.iter().all(|v| v.position[2] == 0.0));
    assert_eq!(g.triangle_count(), 140);
    assert_ccw_matches_normals(&g);
}

#[test]
fn append_rebases_indices() {
    let mut a = Geometry::cuboid(1.0, 1.0, 1.0);
    let b = Geometry::cuboid(1.0, 1.0, 1.0);
    a.append(&b);
    assert_eq!(a.vertices.len(), 48);
    assert_eq!(*a.indices.iter().max().unwrap(), 47);
}

#[test]
fn transformed_rotates_normals_with_positions() {
    let g = Geometry::annulus(1.0, 2.0, 8);
    let m = glam::Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2);
    let t = g.transformed(&m);
    for v in &t.vertices {
        assert!((Vec3::from_array(v.normal) - Vec3::NEG_Y).length() < EPS);
    }
}

#[test]
fn ring_parts_span_inner_radius_to_inner_plus_thickness() {
    let ring = build_ring("ring", 0.65, [1.0, 1.0, 1.0]);
    assert_eq!(ring.parts.len(), 4);
    let baked = ring.baked_geometry();
    let (lo, hi) = baked.radial_extent().unwrap();
    assert!((lo - 2.0).abs() < EPS, "inner radius {lo}");
    assert!((hi - 2.65).abs() < EPS, "outer radius {hi}");
}

#[test]
fn ring_faces_and_rims_share_the_depth_band() {
    let ring = build_ring("ring", 0.35, [0.2, 0.2, 0.2]);
    let (lo, hi) = bounds(&ring.baked_geometry());
    assert!((lo.z + RING_DEPTH * 0.5).abs() < EPS);
    assert!((hi.z - RING_DEPTH * 0.5).abs() < EPS);
    // front and back faces
    assert!((ring.parts[0].node.position.z - 0.125).abs() < EPS);
    assert!((ring.parts[1].node.position.z + 0.125).abs() < EPS);
}

#[test]
fn ring_material_is_a_double_sided_mirror() {
    let ring = build_ring("ring", 0.15, [0.65, 0.65, 0.65]);
    let m = ring.material;
    assert_eq!(m.roughness, 0.0);
    assert_eq!(m.metalness, 1.0);
    assert_eq!(m.env_intensity, 1.0);
    assert!(m.double_sided);
    assert_eq!(m.color, Vec3::splat(0.65));
}

#[test]
fn line_is_a_body_with_two_caps_at_its_ends() {
    let spec = LineSpec {
        height: 1.0,
        width: 0.2,
        depth: 0.05,
        color: [1.0, 0.0, 0.0],
        env_intensity: 0.5,
    };
    let line = build_line("hand", &spec);
    assert_eq!(line.parts.len(), 3);
    assert!((line.parts[1].node.position.y - 0.5).abs() < EPS);
    assert!((line.parts[2].node.position.y + 0.5).abs() < EPS);

    let (lo, hi) = bounds(&line.baked_geometry());
    // caps round off the ends by width/2
    assert!((hi.y - 0.6).abs() < EPS && (lo.y + 0.6).abs() < EPS);
    assert!((hi.x - 0.1).abs() < EPS);
    assert!((hi.z - 0.025).abs() < EPS && (lo.z + 0.025).abs() < EPS);
    assert_eq!(line.material.env_intensity, 0.5);
}

#[test]
fn tick_marks_are_twelve_identical_lines() {
    let ticks = TickMarks::build();
    assert_eq!(ticks.len(), 12);
    for t in &ticks.ticks {
        assert_eq!(t.parts.len(), 3);
        assert_eq!(t.material, ticks.ticks[0].material);
        assert_eq!(t.material.color, Vec3::from_array(TICK_COLOR));
    }
    assert_eq!(TICK_SPEC.height, 0.1);
    assert_eq!(TICK_SPEC.width, 0.075);
    assert_eq!(TICK_SPEC.depth, 0.025);
}
