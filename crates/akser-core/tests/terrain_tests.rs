use akser_core::constants::WAVE_AMPLITUDE;
use akser_core::terrain::{height_at, wave_height_at, TerrainMesh, TerrainSpace};
use glam::Vec3;

#[test]
fn height_is_deterministic_bit_for_bit() {
    for &(x, y) in &[(0.0, 0.0), (0.13, 0.87), (0.5, 0.5), (0.99, 0.01)] {
        let a = height_at(x, y);
        let b = height_at(x, y);
        assert_eq!(a.to_bits(), b.to_bits(), "height differs at ({x},{y})");
    }
}

#[test]
fn height_stays_in_expected_range_over_unit_square() {
    // Bound is the sum of term weights (1.15) raised to the peak exponent.
    let max_bound = 1.15f32.powf(0.9);
    for i in 0..=200 {
        for j in 0..=200 {
            let x = i as f32 / 200.0;
            let y = j as f32 / 200.0;
            let h = height_at(x, y);
            assert!(h.is_finite(), "non-finite height at ({x},{y})");
            assert!(h >= 0.0, "negative height at ({x},{y})");
            assert!(h <= max_bound, "height {h} above bound at ({x},{y})");
        }
    }
}

#[test]
fn height_is_continuous_under_small_steps() {
    let eps = 1e-4f32;
    for i in 0..400 {
        let x = i as f32 / 400.0;
        let y = (i as f32 * 0.618) % 1.0;
        let d = (height_at(x + eps, y) - height_at(x, y)).abs();
        assert!(d < 0.01, "jump of {d} at ({x},{y})");
    }
}

#[test]
fn wave_height_is_deterministic_and_finite() {
    let a = wave_height_at(12.5, -3.0, 4.2, 0.6, 1.2);
    let b = wave_height_at(12.5, -3.0, 4.2, 0.6, 1.2);
    assert_eq!(a.to_bits(), b.to_bits());
    assert!(a.is_finite());
    // Zero amplitude and zero scroll leaves the surface untouched.
    assert_eq!(wave_height_at(12.5, -3.0, 4.2, 0.0, 0.0), 0.0);
}

#[test]
fn journey_and_ambient_spaces_share_the_grid() {
    let j = TerrainSpace::journey();
    let a = TerrainSpace::ambient();
    assert_eq!(j.cols, a.cols);
    assert_eq!(j.rows, a.rows);
    assert!(j.scale > a.scale);
}

#[test]
fn surface_point_agrees_with_model_transform() {
    let space = TerrainSpace::journey();
    for &(nx, ny) in &[(0.0, 0.0), (0.5, 0.5), (0.25, 0.8)] {
        let expected = space.model_matrix().transform_point3(Vec3::new(
            (nx - 0.5) * space.plane_size,
            (ny - 0.5) * space.plane_size,
            space.surface_height(nx, ny),
        ));
        let got = space.surface_point(nx, ny);
        assert!(
            got.distance(expected) < 1e-3,
            "surface point mismatch at ({nx},{ny}): {got:?} vs {expected:?}"
        );
    }
}

#[test]
fn parallax_model_with_zero_offset_matches_plain_model() {
    let space = TerrainSpace::journey();
    let plain = space.model_matrix();
    let layered = space.model_matrix_with(Vec3::ZERO, 0.0);
    let p = Vec3::new(10.0, -20.0, 5.0);
    assert!(plain
        .transform_point3(p)
        .distance(layered.transform_point3(p)) < 1e-3);
}

#[test]
fn mesh_has_full_grid_and_valid_wire_indices() {
    let space = TerrainSpace::ambient();
    let mesh = TerrainMesh::generate(&space);
    let count = space.cols * space.rows;
    assert_eq!(mesh.vertices.len(), count);

    let expected_segments = space.rows * (space.cols - 1) + space.cols * (space.rows - 1);
    assert_eq!(mesh.wire_indices.len(), expected_segments * 2);
    assert!(mesh.wire_indices.iter().all(|&i| (i as usize) < count));

    // Grid spans the plane edge to edge.
    let half = space.plane_size / 2.0;
    let first = mesh.vertices[0];
    let last = mesh.vertices[count - 1];
    assert!((first.x + half).abs() < 1e-3 && (first.y + half).abs() < 1e-3);
    assert!((last.x - half).abs() < 1e-3 && (last.y - half).abs() < 1e-3);
}

#[test]
fn mesh_heights_match_the_height_field() {
    let space = TerrainSpace::ambient();
    let mesh = TerrainMesh::generate(&space);
    for row in [0usize, 37, 99] {
        for col in [0usize, 50, 99] {
            let v = mesh.vertices[row * space.cols + col];
            let nx = col as f32 / space.cols as f32;
            let ny = row as f32 / space.rows as f32;
            assert!((v.z - space.surface_height(nx, ny)).abs() < 1e-4);
        }
    }
}

#[test]
fn displace_with_idle_inputs_restores_static_surface() {
    let space = TerrainSpace::journey();
    let mut mesh = TerrainMesh::generate(&space);
    let before: Vec<f32> = mesh.vertices.iter().map(|v| v.z).collect();

    mesh.displace(&space, 3.7, 0.8, 1.2);
    let moved = mesh
        .vertices
        .iter()
        .zip(&before)
        .any(|(v, z)| (v.z - z).abs() > 1e-5);
    assert!(moved, "wave displacement had no effect");

    // Zero amplitude and zero scroll at any time restores the base heights.
    mesh.displace(&space, 123.4, 0.0, 0.0);
    for (v, z) in mesh.vertices.iter().zip(&before) {
        assert!((v.z - z).abs() < 1e-4);
    }
}

#[test]
fn ambient_scene_waves_over_time() {
    // The header backdrop animates on time alone; scroll stays at zero.
    let space = TerrainSpace::ambient();
    let mut mesh = TerrainMesh::generate(&space);

    mesh.displace(&space, 0.5, 0.0, WAVE_AMPLITUDE);
    let early: Vec<f32> = mesh.vertices.iter().map(|v| v.z).collect();

    mesh.displace(&space, 1.5, 0.0, WAVE_AMPLITUDE);
    let moved = mesh
        .vertices
        .iter()
        .zip(&early)
        .any(|(v, z)| (v.z - z).abs() > 1e-3);
    assert!(moved, "ambient wave did not move between frames");
}

#[test]
fn displace_only_touches_z() {
    let space = TerrainSpace::journey();
    let mut mesh = TerrainMesh::generate(&space);
    let before: Vec<Vec3> = mesh.vertices.clone();
    mesh.displace(&space, 9.9, 0.5, 1.2);
    for (v, b) in mesh.vertices.iter().zip(&before) {
        assert_eq!(v.x.to_bits(), b.x.to_bits());
        assert_eq!(v.y.to_bits(), b.y.to_bits());
    }
}
