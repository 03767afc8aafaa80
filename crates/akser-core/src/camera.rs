//! Waypoint camera path over the terrain, driven by scroll progress.
//!
//! The path is fixed at construction: one anchor waypoint per service card,
//! framed on its surface point, interleaved with elevated flyover waypoints
//! at the midpoints between consecutive anchors. Querying a pose for a
//! progress value is pure and total — out-of-range input clamps, degenerate
//! paths return their only waypoint, and the output is always finite.
//!
//! The rendered camera does not snap to the queried pose; a separate
//! [`CameraRig`] stage glides toward it by a fixed fraction of the remaining
//! distance each frame.

use glam::{Mat4, Vec3};
use smallvec::SmallVec;

use crate::constants::*;
use crate::terrain::TerrainSpace;

/// Camera position plus look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    #[inline]
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.target.is_finite()
    }
}

/// One stop on the journey. Anchors frame a service card's surface point;
/// transitions are the flyover poses between them.
#[derive(Clone, Copy, Debug)]
pub struct Waypoint {
    pub position: Vec3,
    pub target: Vec3,
    pub is_anchor: bool,
}

impl Waypoint {
    #[inline]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }
}

/// Cubic ease-in-out over \[0,1\].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Immutable ordered waypoint sequence with progress-keyed interpolation.
pub struct CameraPath {
    waypoints: SmallVec<[Waypoint; 16]>,
}

impl CameraPath {
    /// Build the journey path from anchor map positions (normalized \[0,1\]²
    /// height-field coordinates, one per service card, in card order).
    ///
    /// N anchors yield 2N−1 waypoints: anchor, transition, anchor, ...,
    /// always starting and ending on an anchor. Surface points come from the
    /// same [`TerrainSpace`] the mesh is generated with, so anchors sit on
    /// the rendered terrain.
    pub fn from_anchors(space: &TerrainSpace, map_positions: &[[f32; 2]]) -> Self {
        let mut anchors: SmallVec<[Waypoint; 16]> = SmallVec::new();
        for &[nx, ny] in map_positions {
            let surface = space.surface_point(nx, ny);
            anchors.push(Waypoint {
                position: surface + ANCHOR_EYE_OFFSET,
                target: surface,
                is_anchor: true,
            });
        }

        let mut waypoints: SmallVec<[Waypoint; 16]> = SmallVec::new();
        for (i, anchor) in anchors.iter().enumerate() {
            if i > 0 {
                let prev = &anchors[i - 1];
                let mid_pos = (prev.position + anchor.position) * 0.5;
                let mid_target = (prev.target + anchor.target) * 0.5;
                waypoints.push(Waypoint {
                    position: mid_pos + Vec3::new(0.0, TRANSITION_LIFT, 0.0),
                    target: mid_target,
                    is_anchor: false,
                });
            }
            waypoints.push(*anchor);
        }

        log::debug!(
            "camera path built: {} anchors -> {} waypoints",
            map_positions.len(),
            waypoints.len()
        );
        Self { waypoints }
    }

    /// Path over explicit waypoints; used by tests and custom scenes.
    pub fn from_waypoints(waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        Self {
            waypoints: waypoints.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Interpolated pose for a progress value in \[0,100\].
    ///
    /// Progress divides evenly into `len()−1` segments; within a segment the
    /// local parameter is eased (cubic in-out) and position and target are
    /// lerped independently. Input outside \[0,100\] clamps to the endpoint
    /// poses. Returns `None` only for an empty path.
    pub fn pose_at(&self, progress: f32) -> Option<CameraPose> {
        let k = self.waypoints.len();
        if k == 0 {
            return None;
        }
        if k == 1 {
            return Some(self.waypoints[0].pose());
        }

        let progress = if progress.is_finite() {
            progress.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let segment = progress / (100.0 / (k - 1) as f32);
        let current = (segment.floor() as usize).min(k - 1);
        let next = (current + 1).min(k - 1);
        let t = ease_in_out_cubic(segment - current as f32);

        Some(
            self.waypoints[current]
                .pose()
                .lerp(&self.waypoints[next].pose(), t),
        )
    }
}

/// Per-frame exponential smoothing toward the queried pose.
///
/// Frame N's output depends on frame N−1's output: the rig keeps the
/// previous rendered pose and moves a fixed fraction of the remaining
/// distance toward the new target. The first sample snaps so the camera
/// never glides in from the world origin.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    current: Option<CameraPose>,
    smoothing: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::with_smoothing(CAMERA_SMOOTHING)
    }

    pub fn with_smoothing(smoothing: f32) -> Self {
        Self {
            current: None,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Advance one frame toward `target` and return the rendered pose.
    pub fn step(&mut self, target: &CameraPose) -> CameraPose {
        let next = match self.current {
            Some(cur) => cur.lerp(target, self.smoothing),
            None => *target,
        };
        self.current = Some(next);
        next
    }

    /// Last rendered pose, if a frame has run.
    pub fn pose(&self) -> Option<CameraPose> {
        self.current
    }

    /// Forget the previous pose; the next `step` snaps.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the anchor nearest to a progress value.
///
/// This is the single active-card rule: anchors divide progress evenly and
/// the closest one wins. Ties at segment midpoints round up, matching
/// `round`.
pub fn active_card_index(progress: f32, anchor_count: usize) -> usize {
    if anchor_count <= 1 {
        return 0;
    }
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let interval = 100.0 / (anchor_count - 1) as f32;
    ((progress / interval).round() as usize).min(anchor_count - 1)
}

/// Scroll-driven mesh drift for the journey backdrop: the terrain slides up
/// and sideways and rolls slightly as progress increases.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshParallax {
    /// World-space offset added to the terrain origin.
    pub offset: Vec3,
    /// Roll about the view axis (radians).
    pub roll: f32,
}

pub fn mesh_parallax(progress: f32) -> MeshParallax {
    let p = progress.clamp(0.0, 100.0) / 100.0;
    MeshParallax {
        offset: Vec3::new(p * PARALLAX_SHIFT_X, p * PARALLAX_SHIFT_Y, 0.0),
        roll: p * PARALLAX_ROLL_RAD,
    }
}

/// Right-handed perspective camera built from a rig pose.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: &CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_Y_RAD,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
