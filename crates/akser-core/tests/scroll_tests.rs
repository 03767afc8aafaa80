use akser_core::constants::TOPO_PARALLAX_SPEED;
use akser_core::scroll::{parallax_offset, progress_from_geometry, RegionGeometry, ScrollTracker};

/// Geometry for a page scrolled `scrolled` px past the hero's bottom edge.
fn scrolled_past_hero(scrolled: f32) -> RegionGeometry {
    let hero_height = 600.0;
    RegionGeometry {
        hero_bottom: -scrolled,
        hero_height,
        section_top: -(hero_height + scrolled),
        section_scroll_height: 3400.0,
        viewport_height: 800.0,
    }
}

#[test]
fn progress_is_zero_while_hero_is_visible() {
    // Hero bottom still below the viewport top: everything else is ignored.
    let g = RegionGeometry {
        hero_bottom: 250.0,
        hero_height: 600.0,
        section_top: -5000.0,
        section_scroll_height: 3400.0,
        viewport_height: 800.0,
    };
    assert_eq!(progress_from_geometry(&g), 0.0);
}

#[test]
fn progress_begins_once_hero_clears_the_viewport() {
    assert_eq!(progress_from_geometry(&scrolled_past_hero(0.0)), 0.0);
    // Content height = 3400 - 800 - 600 = 2000.
    assert!((progress_from_geometry(&scrolled_past_hero(500.0)) - 25.0).abs() < 1e-3);
    assert!((progress_from_geometry(&scrolled_past_hero(1000.0)) - 50.0).abs() < 1e-3);
    assert!((progress_from_geometry(&scrolled_past_hero(2000.0)) - 100.0).abs() < 1e-3);
}

#[test]
fn progress_clamps_at_both_ends() {
    assert_eq!(progress_from_geometry(&scrolled_past_hero(99_999.0)), 100.0);

    // Hero just cleared but the section has barely moved.
    let mut g = scrolled_past_hero(0.0);
    g.section_top = -100.0; // scrolled = -500, would be negative
    assert_eq!(progress_from_geometry(&g), 0.0);
}

#[test]
fn progress_is_monotonic_while_scrolling_down() {
    let mut prev = 0.0;
    for step in 0..200 {
        let p = progress_from_geometry(&scrolled_past_hero(step as f32 * 15.0));
        assert!(p >= prev, "progress decreased at step {step}");
        prev = p;
    }
}

#[test]
fn progress_recomputes_on_scroll_up() {
    // Pure function of geometry: going back up yields the earlier value.
    let down = progress_from_geometry(&scrolled_past_hero(1500.0));
    let up = progress_from_geometry(&scrolled_past_hero(300.0));
    let down_again = progress_from_geometry(&scrolled_past_hero(1500.0));
    assert!(up < down);
    assert_eq!(down, down_again);
}

#[test]
fn short_content_clamps_to_full_progress() {
    // Section no taller than hero + one viewport: no division by zero.
    let g = RegionGeometry {
        hero_bottom: -10.0,
        hero_height: 600.0,
        section_top: -610.0,
        section_scroll_height: 1200.0,
        viewport_height: 800.0,
    };
    assert_eq!(progress_from_geometry(&g), 100.0);
}

#[test]
fn tracker_holds_last_value_when_regions_are_missing() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.sample(None), 0.0);

    let p = tracker.sample(Some(&scrolled_past_hero(500.0)));
    assert!((p - 25.0).abs() < 1e-3);

    // Regions unmounted: hold, don't reset.
    assert_eq!(tracker.sample(None), p);
    assert_eq!(tracker.progress(), p);

    let p2 = tracker.sample(Some(&scrolled_past_hero(1000.0)));
    assert!(p2 > p);
}

#[test]
fn parallax_offset_matches_layer_speeds() {
    assert_eq!(parallax_offset(1000.0, 1.0), 0.0);
    assert!((parallax_offset(1000.0, 0.3) - 700.0).abs() < 1e-3);
    let topo = parallax_offset(1000.0, TOPO_PARALLAX_SPEED);
    assert!((topo - 300.0).abs() < 1e-3);
}
