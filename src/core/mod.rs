pub mod clock;
pub mod constants;
pub mod envmap;
pub mod geometry;
pub mod orbit;
pub mod parallax;
pub mod placement;
pub mod scene;
pub mod shapes;

pub use clock::*;
pub use envmap::*;
pub use geometry::*;
pub use orbit::*;
pub use parallax::*;
pub use placement::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static COMPOSITE_WGSL: &str = include_str!("../../shaders/composite.wgsl");
