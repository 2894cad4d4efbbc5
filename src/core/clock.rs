use super::constants::*;
use super::parallax::{smooth_rotation, ParallaxResponse, PointerState};
use super::placement::{place, tick_angle, HandAngles, Placement, WallTime};
use super::scene::Group;
use super::shapes::{build_line, build_ring, LineSpec, TickMarks};
use glam::Vec3;

/// A bezel layer and its pointer-driven tilt.
#[derive(Clone, Debug)]
pub struct RingAssembly {
    pub group: Group,
    pub response: ParallaxResponse,
}

impl RingAssembly {
    pub fn new(label: &'static str, layer: usize) -> Self {
        let mut group = build_ring(label, RING_THICKNESS[layer], RING_COLORS[layer]);
        group.node.scale = Vec3::splat(RING_SCALES[layer]);
        Self {
            group,
            response: ParallaxResponse::new(
                RING_PARALLAX_SENSITIVITY[layer],
                RING_PARALLAX_INVERTED[layer],
            ),
        }
    }

    #[inline]
    pub fn orientation(&self) -> Vec3 {
        self.group.node.rotation
    }

    pub fn smooth_toward(&mut self, pointer: PointerState) {
        smooth_rotation(&mut self.group.node.rotation, &self.response, pointer);
    }
}

/// A hand and where it sits relative to the dial.
#[derive(Clone, Debug)]
pub struct ClockHand {
    pub group: Group,
    pub placement: Placement,
}

impl ClockHand {
    fn new(label: &'static str, index: usize) -> Self {
        let spec = LineSpec {
            height: HAND_HEIGHTS[index],
            width: HAND_WIDTHS[index],
            depth: HAND_DEPTHS[index],
            color: HAND_COLORS[index],
            env_intensity: HAND_ENV_INTENSITY[index],
        };
        Self {
            group: build_line(label, &spec),
            placement: Placement::new(HAND_RADIAL_OFFSETS[index], HAND_DEPTH_OFFSETS[index]),
        }
    }

    fn place_at(&mut self, angle: f32, reference: Vec3) {
        place(&mut self.group.node, angle, reference, self.placement);
    }
}

pub const TICK_PLACEMENT: Placement = Placement::new(TICK_RADIAL_OFFSET, TICK_DEPTH_OFFSET);

/// The whole clock: three bezel layers, three hands, twelve ticks.
#[derive(Clone, Debug)]
pub struct ClockFace {
    pub rings: [RingAssembly; 3],
    pub hour_hand: ClockHand,
    pub minute_hand: ClockHand,
    pub second_hand: ClockHand,
    pub ticks: TickMarks,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockFace {
    pub fn new() -> Self {
        let mut face = Self {
            rings: [
                RingAssembly::new("ring_inner", 0),
                RingAssembly::new("ring_middle", 1),
                RingAssembly::new("ring_outer", 2),
            ],
            hour_hand: ClockHand::new("hour_hand", 0),
            minute_hand: ClockHand::new("minute_hand", 1),
            second_hand: ClockHand::new("second_hand", 2),
            ticks: TickMarks::build(),
        };
        // Hands and ticks are always drawn through an explicit transform
        face.place(WallTime::default());
        face
    }

    /// Reference orientation hands and ticks tilt with.
    #[inline]
    pub fn reference_orientation(&self) -> Vec3 {
        self.rings[0].orientation()
    }

    /// One frame of clock state: smooth the rings toward `pointer`, then
    /// re-place hands for `time` and all ticks against the first ring.
    pub fn advance(&mut self, pointer: PointerState, time: WallTime) {
        self.smooth_rings(pointer);
        self.place(time);
    }

    pub fn smooth_rings(&mut self, pointer: PointerState) {
        for ring in &mut self.rings {
            ring.smooth_toward(pointer);
        }
    }

    /// Derive every hand and tick transform fresh from `time` and the
    /// current reference orientation.
    pub fn place(&mut self, time: WallTime) {
        let reference = self.reference_orientation();
        let angles = HandAngles::from_wall_time(time);
        self.hour_hand.place_at(angles.hour, reference);
        self.minute_hand.place_at(angles.minute, reference);
        self.second_hand.place_at(angles.second, reference);
        for (i, tick) in self.ticks.ticks.iter_mut().enumerate() {
            place(&mut tick.node, tick_angle(i), reference, TICK_PLACEMENT);
        }
    }

    /// Every rigid group in a stable draw order: rings, hands, ticks.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.rings
            .iter()
            .map(|r| &r.group)
            .chain([
                &self.hour_hand.group,
                &self.minute_hand.group,
                &self.second_hand.group,
            ])
            .chain(self.ticks.ticks.iter())
    }

    pub fn group_count(&self) -> usize {
        self.rings.len() + 3 + self.ticks.len()
    }
}
