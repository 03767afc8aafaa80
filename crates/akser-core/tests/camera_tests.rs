use akser_core::camera::{
    active_card_index, ease_in_out_cubic, mesh_parallax, Camera, CameraPath, CameraPose,
    CameraRig, Waypoint,
};
use akser_core::constants::AMBIENT_EYE_OFFSET;
use akser_core::content::journey_anchor_positions;
use akser_core::terrain::TerrainSpace;
use glam::Vec3;

fn journey_path() -> CameraPath {
    CameraPath::from_anchors(&TerrainSpace::journey(), &journey_anchor_positions())
}

fn wp(x: f32, anchor: bool) -> Waypoint {
    Waypoint {
        position: Vec3::new(x, x * 2.0, -x),
        target: Vec3::new(x, 0.0, 0.0),
        is_anchor: anchor,
    }
}

#[test]
fn six_anchors_yield_eleven_alternating_waypoints() {
    let path = journey_path();
    assert_eq!(path.len(), 11);
    for (i, w) in path.waypoints().iter().enumerate() {
        assert_eq!(w.is_anchor, i % 2 == 0, "waypoint {i} alternation broken");
    }
    assert!(path.waypoints()[0].is_anchor);
    assert!(path.waypoints()[10].is_anchor);
}

#[test]
fn transitions_sit_above_their_neighbours() {
    let path = journey_path();
    let wps = path.waypoints();
    for i in (1..wps.len()).step_by(2) {
        assert!(!wps[i].is_anchor);
        assert!(
            wps[i].position.y > wps[i - 1].position.y && wps[i].position.y > wps[i + 1].position.y,
            "transition {i} is not elevated"
        );
    }
}

#[test]
fn anchors_look_at_the_terrain_surface() {
    let space = TerrainSpace::journey();
    let positions = journey_anchor_positions();
    let path = CameraPath::from_anchors(&space, &positions);
    for (anchor_idx, &[nx, ny]) in positions.iter().enumerate() {
        let w = path.waypoints()[anchor_idx * 2];
        assert!(w.target.distance(space.surface_point(nx, ny)) < 1e-3);
    }
}

#[test]
fn endpoints_are_exact() {
    let path = journey_path();
    let first = path.waypoints()[0].pose();
    let last = path.waypoints()[10].pose();
    assert_eq!(path.pose_at(0.0).unwrap(), first);
    assert_eq!(path.pose_at(100.0).unwrap(), last);
}

#[test]
fn out_of_range_progress_clamps_to_endpoints() {
    let path = journey_path();
    assert_eq!(path.pose_at(-25.0), path.pose_at(0.0));
    assert_eq!(path.pose_at(160.0), path.pose_at(100.0));
    let nan = path.pose_at(f32::NAN).unwrap();
    assert!(nan.is_finite());
}

#[test]
fn poses_are_finite_over_a_dense_sweep() {
    let path = journey_path();
    for i in 0..=2000 {
        let p = i as f32 * 0.05;
        let pose = path.pose_at(p).unwrap();
        assert!(pose.is_finite(), "non-finite pose at progress {p}");
    }
}

#[test]
fn path_is_continuous_across_segment_boundaries() {
    let path = journey_path();
    let max_hop = path
        .waypoints()
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .fold(0.0f32, f32::max);
    // Cubic in-out peaks at 3x the average segment speed; a progress step of
    // 0.05 covers 0.005 of a 10-unit segment.
    let bound = max_hop * 3.0 * 0.005 * 1.2;
    let mut prev = path.pose_at(0.0).unwrap();
    for i in 1..=2000 {
        let pose = path.pose_at(i as f32 * 0.05).unwrap();
        let d = pose.position.distance(prev.position);
        assert!(d <= bound, "position jump {d} > {bound} at step {i}");
        prev = pose;
    }
}

#[test]
fn midpoint_progress_lands_on_a_transition_waypoint() {
    // 6 anchors: segment = 50 / (100/10) = 5.0 exactly, so progress 50 is
    // waypoint 5 (a transition), about to interpolate toward waypoint 6.
    let path = journey_path();
    let pose = path.pose_at(50.0).unwrap();
    assert!(!path.waypoints()[5].is_anchor);
    assert_eq!(pose, path.waypoints()[5].pose());
}

#[test]
fn mid_segment_pose_is_the_eased_lerp() {
    let path = journey_path();
    // Progress 55 is halfway through segment 5..6; cubic in-out at 0.5 is 0.5.
    let expected = path.waypoints()[5]
        .pose()
        .lerp(&path.waypoints()[6].pose(), 0.5);
    let got = path.pose_at(55.0).unwrap();
    assert!(got.position.distance(expected.position) < 1e-2);
    assert!(got.target.distance(expected.target) < 1e-2);
}

#[test]
fn single_waypoint_path_is_a_fixed_pose() {
    let path = CameraPath::from_waypoints([wp(3.0, true)]);
    for p in [-10.0, 0.0, 37.0, 100.0, 400.0] {
        assert_eq!(path.pose_at(p).unwrap(), wp(3.0, true).pose());
    }
}

#[test]
fn empty_path_yields_no_pose() {
    let path = CameraPath::from_waypoints([]);
    assert!(path.pose_at(50.0).is_none());
}

#[test]
fn ease_curve_is_well_behaved() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_in_out_cubic(i as f32 / 100.0);
        assert!(e >= prev, "easing not monotonic at {i}");
        prev = e;
    }
    // Symmetry about the midpoint.
    for t in [0.1f32, 0.25, 0.4] {
        let s = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
        assert!((s - 1.0).abs() < 1e-5);
    }
}

#[test]
fn rig_first_step_snaps_to_target() {
    let mut rig = CameraRig::new();
    let target = CameraPose {
        position: Vec3::new(5.0, 6.0, 7.0),
        target: Vec3::ZERO,
    };
    assert_eq!(rig.step(&target), target);
}

#[test]
fn rig_moves_a_fixed_fraction_per_frame() {
    let mut rig = CameraRig::with_smoothing(0.025);
    let start = CameraPose {
        position: Vec3::ZERO,
        target: Vec3::ZERO,
    };
    let target = CameraPose {
        position: Vec3::new(100.0, 0.0, 0.0),
        target: Vec3::new(100.0, 0.0, 0.0),
    };
    rig.step(&start);
    let after = rig.step(&target);
    assert!((after.position.x - 2.5).abs() < 1e-4);
}

#[test]
fn rig_converges_onto_a_held_target() {
    let mut rig = CameraRig::new();
    rig.step(&CameraPose {
        position: Vec3::new(-2000.0, 800.0, 3000.0),
        target: Vec3::ZERO,
    });
    let target = CameraPose {
        position: Vec3::new(120.0, 300.0, 500.0),
        target: Vec3::new(10.0, 0.0, -40.0),
    };
    let mut pose = rig.step(&target);
    for _ in 0..2000 {
        pose = rig.step(&target);
    }
    assert!(pose.position.distance(target.position) < 1e-2);
    assert!(pose.target.distance(target.target) < 1e-2);
}

#[test]
fn rig_reset_snaps_again() {
    let mut rig = CameraRig::new();
    let a = CameraPose {
        position: Vec3::new(1.0, 2.0, 3.0),
        target: Vec3::ZERO,
    };
    let b = CameraPose {
        position: Vec3::new(-9.0, 0.0, 4.0),
        target: Vec3::ONE,
    };
    rig.step(&a);
    rig.reset();
    assert_eq!(rig.step(&b), b);
}

#[test]
fn active_card_follows_nearest_anchor() {
    // 6 anchors divide progress into 20-unit intervals.
    assert_eq!(active_card_index(0.0, 6), 0);
    assert_eq!(active_card_index(9.0, 6), 0);
    assert_eq!(active_card_index(11.0, 6), 1);
    assert_eq!(active_card_index(50.0, 6), 3); // rounds half away from zero
    assert_eq!(active_card_index(100.0, 6), 5);
    assert_eq!(active_card_index(250.0, 6), 5);
    assert_eq!(active_card_index(-3.0, 6), 0);
    assert_eq!(active_card_index(70.0, 1), 0);
    assert_eq!(active_card_index(70.0, 0), 0);
}

#[test]
fn mesh_parallax_scales_with_progress_and_clamps() {
    let idle = mesh_parallax(0.0);
    assert_eq!(idle.offset, Vec3::ZERO);
    assert_eq!(idle.roll, 0.0);

    let full = mesh_parallax(100.0);
    assert!((full.offset.x - 200.0).abs() < 1e-3);
    assert!((full.offset.y - 400.0).abs() < 1e-3);
    assert!((full.roll - 0.3).abs() < 1e-5);

    assert_eq!(mesh_parallax(250.0), full);

    let half = mesh_parallax(50.0);
    assert!((half.offset.x - 100.0).abs() < 1e-3);
}

#[test]
fn ambient_framing_keeps_the_header_terrain_in_view() {
    let space = TerrainSpace::ambient();
    let pose = CameraPose {
        position: space.origin + AMBIENT_EYE_OFFSET,
        target: space.origin,
    };
    let cam = Camera::from_pose(&pose, 16.0 / 9.0);
    let vp = cam.view_proj();
    for &(nx, ny) in &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)] {
        let ndc = vp.project_point3(space.surface_point(nx, ny));
        assert!(
            ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0,
            "surface point ({nx},{ny}) falls outside the frame: {ndc:?}"
        );
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}

#[test]
fn camera_matrices_are_finite() {
    let pose = CameraPose {
        position: Vec3::new(0.0, 180.0, 420.0),
        target: Vec3::new(0.0, -200.0, -100.0),
    };
    let cam = Camera::from_pose(&pose, 16.0 / 9.0);
    let vp = cam.view_proj();
    for c in vp.to_cols_array() {
        assert!(c.is_finite());
    }
}
