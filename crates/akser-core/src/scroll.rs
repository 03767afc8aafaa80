//! Scroll-position to progress mapping.
//!
//! Progress is a pure function of a [`RegionGeometry`] snapshot taken by the
//! host, never of ambient window state, so it recomputes correctly in either
//! scroll direction and is testable without a viewport. The host is expected
//! to take at most one snapshot per displayed frame; coalescing scroll events
//! into the frame loop is its job, not this module's.

/// Layout snapshot of the two reference regions, in CSS pixels.
///
/// `hero_bottom` and `section_top` are viewport-relative (as returned by
/// `getBoundingClientRect`); heights are absolute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionGeometry {
    /// Bottom edge of the hero region relative to the viewport top.
    pub hero_bottom: f32,
    /// Layout height of the hero region.
    pub hero_height: f32,
    /// Top edge of the journey section relative to the viewport top.
    pub section_top: f32,
    /// Total scrollable height of the journey section.
    pub section_scroll_height: f32,
    pub viewport_height: f32,
}

/// Progress through the journey section, in \[0,100\].
///
/// Zero until the hero's bottom edge has passed the viewport top; after that,
/// the fraction of the section content (excluding the hero and one viewport)
/// that has scrolled by. Degenerate geometry (content no taller than a
/// viewport) clamps to 100 rather than dividing by zero.
pub fn progress_from_geometry(g: &RegionGeometry) -> f32 {
    if g.hero_bottom > 0.0 {
        return 0.0;
    }
    let content_height = g.section_scroll_height - g.viewport_height - g.hero_height;
    if content_height <= 0.0 {
        return 100.0;
    }
    let scrolled = -g.section_top - g.hero_height;
    (scrolled / content_height * 100.0).clamp(0.0, 100.0)
}

/// Holds the last valid progress value across frames.
///
/// Regions may not be mounted yet when the loop starts; sampling with `None`
/// keeps the previous value (0 before any valid sample) instead of jumping.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last: f32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, geometry: Option<&RegionGeometry>) -> f32 {
        if let Some(g) = geometry {
            self.last = progress_from_geometry(g);
        }
        self.last
    }

    pub fn progress(&self) -> f32 {
        self.last
    }
}

/// Vertical offset for a parallax layer scrolling slower than the page.
///
/// `speed` of 1.0 means no parallax; 0.3 means the layer keeps 70% of the
/// scroll distance, appearing far away.
#[inline]
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    scroll_y * (1.0 - speed)
}
