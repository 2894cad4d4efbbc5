// Clock layout and frame tuning constants.
//
// These express the intended look of the clock (layer radii, hand lengths,
// smoothing time constants) and keep magic numbers out of the builders.

// Bezel ring geometry shared by all three layers
pub const RING_INNER_RADIUS: f32 = 2.0;
pub const RING_DEPTH: f32 = 0.25; // distance between front and back faces
pub const RING_FACE_SEGMENTS: u32 = 70;
pub const RING_OUTER_RIM_SEGMENTS: u32 = 70;
pub const RING_INNER_RIM_SEGMENTS: u32 = 140;
pub const RING_ENV_INTENSITY: f32 = 1.0;

// Bezel layers, innermost-scaled first. Larger scale pairs with thinner and
// lighter rings; the third layer counter-rotates.
pub const RING_THICKNESS: [f32; 3] = [0.65, 0.35, 0.15];
pub const RING_COLORS: [[f32; 3]; 3] = [
    [1.0, 1.0, 1.0],    // white
    [0.2, 0.2, 0.2],    // dark gray
    [0.65, 0.65, 0.65], // light gray
];
pub const RING_SCALES: [f32; 3] = [0.75, 1.05, 1.3];
pub const RING_PARALLAX_SENSITIVITY: [f32; 3] = [1.2, 0.375, 0.275];
pub const RING_PARALLAX_INVERTED: [bool; 3] = [false, false, true];

// Capsule end caps
pub const LINE_CAP_SEGMENTS: u32 = 20;

// Hands: hour, minute, second
pub const HAND_HEIGHTS: [f32; 3] = [0.4, 0.8, 1.0];
pub const HAND_WIDTHS: [f32; 3] = [0.135, 0.135, 0.075];
pub const HAND_DEPTHS: [f32; 3] = [0.07, 0.07, 0.07];
pub const HAND_COLORS: [[f32; 3]; 3] = [
    [0.06, 0.06, 0.06], // near black
    [0.06, 0.06, 0.06],
    [1.0, 0.0, 0.0], // red seconds
];
pub const HAND_ENV_INTENSITY: [f32; 3] = [1.0, 1.0, 1.0];
pub const HAND_RADIAL_OFFSETS: [f32; 3] = [1.0, 0.8, 0.75];
pub const HAND_DEPTH_OFFSETS: [f32; 3] = [0.0, 0.1, -0.1]; // staggered to avoid z-fighting

// Hour ticks
pub const TICK_COUNT: usize = 12;
pub const TICK_HEIGHT: f32 = 0.1;
pub const TICK_WIDTH: f32 = 0.075;
pub const TICK_DEPTH: f32 = 0.025;
pub const TICK_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
pub const TICK_ENV_INTENSITY: f32 = 1.0;
pub const TICK_RADIAL_OFFSET: f32 = 1.72;
pub const TICK_DEPTH_OFFSET: f32 = 0.2;

// Parallax: one-pole low-pass, new = RETAIN*old + BLEND*target
pub const PARALLAX_RETAIN: f32 = 0.95;
pub const PARALLAX_BLEND: f32 = 0.05;
// Pointer offset from viewport centre (px) -> parallax input units
pub const POINTER_PARALLAX_SCALE: f32 = 0.0003;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // radius scale per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;
