use serde::{Deserialize, Serialize};

use crate::load::LoadPhase;

/// Breakpoints and limits for widening/shrinking the scene on narrow viewports.
///
/// Below `full_width` the canvas is widened so the camera keeps the whole model
/// in frame, then scaled down so it does not look oversized on screen. Both
/// effects ramp linearly and saturate at `min_width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveProfile {
    /// Viewport width (px) at and above which the scene is rendered 1:1.
    pub full_width: f64,
    /// Viewport width (px) at which widening and shrinking saturate.
    pub min_width: f64,
    /// Extra canvas width at `min_width`, as a fraction of the container.
    pub max_widen: f64,
    /// Visual shrink at `min_width`, as a fraction of full size.
    pub max_shrink: f64,
}

impl Default for ResponsiveProfile {
    fn default() -> Self {
        Self { full_width: 1024.0, min_width: 320.0, max_widen: 0.8, max_shrink: 0.45 }
    }
}

impl ResponsiveProfile {
    /// Compute the scene geometry for the given viewport width.
    pub fn geometry_for(&self, viewport_width: f64) -> ViewportGeometry {
        if viewport_width >= self.full_width || self.full_width <= self.min_width {
            return ViewportGeometry::IDENTITY;
        }

        // f64::max ignores NaN, so an unreadable width behaves like the narrowest one.
        let t = (self.full_width - viewport_width.max(self.min_width)) / (self.full_width - self.min_width);
        let width_multiplier = 1.0 + t * self.max_widen;
        let visual_scale = 1.0 - t * self.max_shrink;

        if !width_multiplier.is_finite() || !visual_scale.is_finite() {
            tracing::warn!(viewport_width, profile = ?self, "non-finite scene geometry, using identity");
            return ViewportGeometry::IDENTITY;
        }

        ViewportGeometry { width_multiplier, visual_scale }
    }
}

/// Sizing factors applied to the embedded scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    pub width_multiplier: f64,
    pub visual_scale: f64,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportGeometry {
    pub const IDENTITY: Self = Self { width_multiplier: 1.0, visual_scale: 1.0 };

    pub fn width_percent(&self) -> f64 {
        self.width_multiplier * 100.0
    }

    /// Negative left margin that keeps the widened canvas centered.
    pub fn margin_left_percent(&self) -> f64 {
        (1.0 - self.width_multiplier) * 50.0
    }

    /// Inline style for the scene host in the given load phase.
    pub fn scene_style(&self, phase: LoadPhase) -> String {
        format!(
            "width:{}%;height:100%;margin-left:{}%;opacity:{};transition:opacity 0.8s ease-in-out;transform:scale({});",
            self.width_percent(),
            self.margin_left_percent(),
            phase.opacity(),
            self.visual_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geometry(width: f64) -> ViewportGeometry {
        ResponsiveProfile::default().geometry_for(width)
    }

    #[test]
    fn desktop_widths_are_identity() {
        for width in [1024.0, 1280.0, 1920.0, 3840.0, f64::INFINITY] {
            assert_eq!(geometry(width), ViewportGeometry::IDENTITY, "width {width}");
        }
    }

    #[test]
    fn narrowest_width_saturates() {
        let g = geometry(320.0);
        assert_relative_eq!(g.width_multiplier, 1.8, epsilon = 1e-12);
        assert_relative_eq!(g.visual_scale, 0.55, epsilon = 1e-12);
    }

    #[test]
    fn below_min_width_is_clamped() {
        assert_eq!(geometry(200.0), geometry(320.0));
        assert_eq!(geometry(0.0), geometry(320.0));
        assert_eq!(geometry(-50.0), geometry(320.0));
    }

    #[test]
    fn midpoint_interpolates_halfway() {
        let g = geometry(672.0);
        assert_relative_eq!(g.width_multiplier, 1.4, epsilon = 1e-12);
        assert_relative_eq!(g.visual_scale, 0.775, epsilon = 1e-12);
    }

    #[test]
    fn factors_are_monotonic_over_the_ramp() {
        let mut previous = geometry(320.0);
        for width in (321..=1024).map(f64::from) {
            let current = geometry(width);
            assert!(current.width_multiplier <= previous.width_multiplier, "multiplier grew at {width}");
            assert!(current.visual_scale >= previous.visual_scale, "scale shrank at {width}");
            previous = current;
        }
        assert_eq!(previous, ViewportGeometry::IDENTITY);
    }

    #[test]
    fn nan_width_stays_finite() {
        let g = geometry(f64::NAN);
        assert!(g.width_multiplier.is_finite());
        assert!(g.visual_scale.is_finite());
    }

    #[test]
    fn degenerate_profile_is_identity() {
        let profile = ResponsiveProfile { full_width: 300.0, min_width: 300.0, ..Default::default() };
        assert_eq!(profile.geometry_for(100.0), ViewportGeometry::IDENTITY);
    }

    #[test]
    fn style_hides_scene_until_loaded() {
        let style = ViewportGeometry::IDENTITY.scene_style(LoadPhase::Loading);
        assert!(style.contains("width:100%;"));
        assert!(style.contains("margin-left:0%;"));
        assert!(style.contains("opacity:0;"));
        assert!(style.contains("transform:scale(1);"));

        let style = ViewportGeometry::IDENTITY.scene_style(LoadPhase::Loaded);
        assert!(style.contains("opacity:1;"));
    }

    #[test]
    fn widened_canvas_is_recentered() {
        let g = geometry(320.0);
        assert_relative_eq!(g.width_percent(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(g.margin_left_percent(), -40.0, epsilon = 1e-9);
    }
}
