//! Procedural terrain height field and wireframe mesh.
//!
//! The height field is a fixed closed-form function: deterministic, pure and
//! continuous, so the mesh generator and the camera waypoint builder can both
//! sample it and agree on where the surface is. All world placement goes
//! through [`TerrainSpace`] so the two never drift apart.

use glam::{Mat4, Vec3};

use crate::constants::*;

// Summed-sinusoid coefficients (frequency pairs and weights). These are
// load-bearing for visual parity; change them and every saved camera framing
// moves.
const OCTAVES: [(f32, f32, f32); 3] = [
    (3.8, 2.5, 0.45),
    (7.5, -5.2, 0.25),
    (14.1, 10.3, 0.12),
];
const RIDGE_FREQ_X: f32 = 6.0;
const RIDGE_FREQ_Y: f32 = 7.0;
const RIDGE_WEIGHT: f32 = 0.33;
const PEAK_EXPONENT: f32 = 0.9;

/// Raw terrain height at normalized coordinates, before any scaling.
///
/// Output is non-negative and stays below ~1.14 (the sum of the term
/// weights raised to the peak exponent) for all inputs.
#[inline]
pub fn height_at(x: f32, y: f32) -> f32 {
    let mut n = 0.0;
    for (fx, fy, w) in OCTAVES {
        n += (x * fx + y * fy).sin() * w;
    }
    n += (x * RIDGE_FREQ_X * y * RIDGE_FREQ_Y).cos() * RIDGE_WEIGHT;
    n.abs().powf(PEAK_EXPONENT)
}

/// Time-animated wave displacement used by the hero backdrop.
///
/// `x`/`y` are plane-local coordinates, `scroll01` is scroll progress mapped
/// to \[0,1\]; the third term makes the swell react to scrolling.
#[inline]
pub fn wave_height_at(x: f32, y: f32, time: f32, scroll01: f32, amplitude: f32) -> f32 {
    let wave1 = (x * 0.3 + time).sin() * amplitude;
    let wave2 = (y * 0.4 + time * 0.7).sin() * amplitude * 0.6;
    let scroll_wave = (x * 0.2 + scroll01 * 10.0).sin() * scroll01 * 0.4;
    wave1 + wave2 + scroll_wave
}

/// Shared coordinate frame for one terrain scene.
///
/// Holds every constant that converts between normalized height-field
/// coordinates and world space. The mesh generator, the waypoint builder and
/// the renderer all take the same `TerrainSpace`; constructing two different
/// ones for the same scene is a bug.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSpace {
    /// Side length of the untransformed vertex grid, in local units.
    pub plane_size: f32,
    /// Uniform scale applied by the model transform.
    pub scale: f32,
    /// World-space translation of the mesh.
    pub origin: Vec3,
    /// Tilt about X applied by the model transform (radians).
    pub tilt: f32,
    /// Multiplier from raw height-field output to local Z.
    pub height_scale: f32,
    pub cols: usize,
    pub rows: usize,
}

impl TerrainSpace {
    /// Fullscreen scroll-driven journey backdrop.
    pub fn journey() -> Self {
        Self {
            plane_size: JOURNEY_PLANE_SIZE,
            scale: JOURNEY_MESH_SCALE,
            origin: JOURNEY_ORIGIN,
            tilt: MESH_TILT_RAD,
            height_scale: JOURNEY_HEIGHT_SCALE,
            cols: GRID_COLS,
            rows: GRID_ROWS,
        }
    }

    /// Small ambient header terrain.
    pub fn ambient() -> Self {
        Self {
            plane_size: AMBIENT_PLANE_SIZE,
            scale: AMBIENT_MESH_SCALE,
            origin: AMBIENT_ORIGIN,
            tilt: MESH_TILT_RAD,
            height_scale: AMBIENT_HEIGHT_SCALE,
            cols: GRID_COLS,
            rows: GRID_ROWS,
        }
    }

    /// Local-to-world model transform shared by mesh and waypoints.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.origin)
            * Mat4::from_rotation_x(self.tilt)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Model transform with a scroll-parallax offset and roll layered on.
    pub fn model_matrix_with(&self, offset: Vec3, roll: f32) -> Mat4 {
        Mat4::from_translation(self.origin + offset)
            * Mat4::from_rotation_z(roll)
            * Mat4::from_rotation_x(self.tilt)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Scaled local height at normalized coordinates.
    #[inline]
    pub fn surface_height(&self, nx: f32, ny: f32) -> f32 {
        height_at(nx, ny) * self.height_scale
    }

    /// World-space point on the surface at normalized coordinates.
    pub fn surface_point(&self, nx: f32, ny: f32) -> Vec3 {
        let local = Vec3::new(
            (nx - 0.5) * self.plane_size,
            (ny - 0.5) * self.plane_size,
            self.surface_height(nx, ny),
        );
        self.model_matrix().transform_point3(local)
    }
}

/// Vertex grid plus a line-list index buffer for wireframe drawing.
///
/// Vertices are row-major, `rows` rows of `cols` columns, in plane-local
/// coordinates; the renderer applies the model transform. `displace` rewrites
/// only the Z component in place, so the buffers are allocated once.
pub struct TerrainMesh {
    cols: usize,
    rows: usize,
    base_heights: Vec<f32>,
    pub vertices: Vec<Vec3>,
    pub wire_indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn generate(space: &TerrainSpace) -> Self {
        let (cols, rows) = (space.cols, space.rows);
        let mut base_heights = Vec::with_capacity(cols * rows);
        let mut vertices = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                // Sample at col/cols like the height-field contract expects;
                // positions span the plane edge to edge.
                let nx = col as f32 / cols as f32;
                let ny = row as f32 / rows as f32;
                let h = height_at(nx, ny);
                base_heights.push(h);
                vertices.push(Vec3::new(
                    (col as f32 / (cols - 1) as f32 - 0.5) * space.plane_size,
                    (row as f32 / (rows - 1) as f32 - 0.5) * space.plane_size,
                    h * space.height_scale,
                ));
            }
        }

        // One segment to the right and one downward per interior vertex.
        let seg_count = rows * (cols - 1) + cols * (rows - 1);
        let mut wire_indices = Vec::with_capacity(seg_count * 2);
        for row in 0..rows {
            for col in 0..cols {
                let i = (row * cols + col) as u32;
                if col + 1 < cols {
                    wire_indices.push(i);
                    wire_indices.push(i + 1);
                }
                if row + 1 < rows {
                    wire_indices.push(i);
                    wire_indices.push(i + cols as u32);
                }
            }
        }

        Self {
            cols,
            rows,
            base_heights,
            vertices,
            wire_indices,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Rewrite vertex Z values: static terrain plus the animated wave term.
    ///
    /// Call once per frame before uploading the vertex buffer.
    pub fn displace(&mut self, space: &TerrainSpace, time: f32, scroll01: f32, amplitude: f32) {
        for (v, h) in self.vertices.iter_mut().zip(&self.base_heights) {
            v.z = h * space.height_scale + wave_height_at(v.x, v.y, time, scroll01, amplitude);
        }
    }
}
