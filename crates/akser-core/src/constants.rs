use glam::Vec3;
use std::f32::consts::PI;

// Shared scene tuning constants used by both frontends.
//
// The terrain grid, the camera waypoints and the renderer all derive their
// world placement from these values; they must not be duplicated elsewhere.

// Terrain grid resolution (vertices per side)
pub const GRID_COLS: usize = 100;
pub const GRID_ROWS: usize = 100;

// Plane tilt applied by the model transform (radians about X)
pub const MESH_TILT_RAD: f32 = -(PI / 2.8);

// Ambient header terrain (slow wireframe backdrop)
pub const AMBIENT_PLANE_SIZE: f32 = 90.0;
pub const AMBIENT_MESH_SCALE: f32 = 1.6;
pub const AMBIENT_HEIGHT_SCALE: f32 = 18.0;
pub const AMBIENT_ORIGIN: Vec3 = Vec3::new(0.0, -15.0, -10.0);
// Fixed camera offset framing the ambient scene (no path; the camera holds)
pub const AMBIENT_EYE_OFFSET: Vec3 = Vec3::new(0.0, 90.0, 160.0);

// Journey terrain (fullscreen scroll-driven backdrop)
pub const JOURNEY_PLANE_SIZE: f32 = 100.0;
pub const JOURNEY_MESH_SCALE: f32 = 40.0;
pub const JOURNEY_HEIGHT_SCALE: f32 = 40.0;
pub const JOURNEY_ORIGIN: Vec3 = Vec3::new(0.0, -200.0, -100.0);

// Scroll-driven mesh parallax (world units / radians at progress = 100)
pub const PARALLAX_SHIFT_X: f32 = 200.0;
pub const PARALLAX_SHIFT_Y: f32 = 400.0;
pub const PARALLAX_ROLL_RAD: f32 = 0.3;

// Layered topo background parallax speed (1.0 = scrolls with the page)
pub const TOPO_PARALLAX_SPEED: f32 = 0.7;

// Camera framing
pub const CAMERA_FOV_Y_RAD: f32 = 65.0 * PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 5000.0;

// Eye offset from an anchor's surface point to its framing position
pub const ANCHOR_EYE_OFFSET: Vec3 = Vec3::new(0.0, 180.0, 420.0);
// Extra altitude for the flyover waypoints between anchors. Must exceed half
// the largest height difference between consecutive anchors, or a flyover
// ends up below the higher of its neighbours.
pub const TRANSITION_LIFT: f32 = 900.0;

// Fraction of the remaining distance the rendered camera covers per frame
pub const CAMERA_SMOOTHING: f32 = 0.025;

// Wave backdrop motion (hero section)
pub const WAVE_SPEED: f32 = 1.0;
pub const WAVE_AMPLITUDE: f32 = 1.2;
