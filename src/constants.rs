// Browser/renderer setup constants used by the web frontend.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Environment reflection map, Radiance HDR (equirectangular)
pub const ENV_MAP_PATH: &str = "./assets/modals/cannon_1k_blurred.hdr";

// Camera
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 10.0; // eye distance on +Z, looking at the origin

// Output
pub const BACKGROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // white
pub const TONE_MAPPING_EXPOSURE: f32 = 1.0;

/// Runtime setup parameters for the scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub canvas_id: &'static str,
    pub env_map_path: &'static str,
    pub background: [f32; 3],
    pub exposure: f32,
    pub camera_z: f32,
    pub fovy_deg: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID,
            env_map_path: ENV_MAP_PATH,
            background: BACKGROUND_COLOR,
            exposure: TONE_MAPPING_EXPOSURE,
            camera_z: CAMERA_Z,
            fovy_deg: CAMERA_FOVY_DEG,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}
