//! Platform-free core of the Akser terrain journey.
//!
//! Everything here is pure logic over numeric input: the scroll-progress
//! mapping, the procedural height field, the waypoint camera path and the
//! static service content. No DOM, no GPU, no clocks — the frontends own
//! those and feed snapshots in, which keeps this crate testable with plain
//! `cargo test` on the host.

pub mod camera;
pub mod constants;
pub mod content;
pub mod frame;
pub mod scroll;
pub mod terrain;

// Wireframe shader bundled for both frontends
pub static TERRAIN_WGSL: &str = include_str!("../shaders/terrain.wgsl");

pub use camera::*;
pub use constants::*;
pub use content::*;
pub use frame::*;
pub use scroll::*;
pub use terrain::*;
