//! Viewport transform for the map content layer.
//!
//! The content layer is mapped into the pool (the clipping container) by
//! `screen = map * scale + offset`, rendered as a CSS
//! `translate(..) scale(..)` with `transform-origin: 0 0`.

/// Vertical gap between the pool's top edge and the root node after the
/// initial centering.
pub const ROOT_TOP_MARGIN: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Transform that centers the root node horizontally in the pool and
    /// places it `margin_top` below the pool's top edge, at scale 1.
    /// `root_left`/`root_top` are the node's map-local offsets.
    pub fn centered_on_root(
        pool_width: f64,
        root_left: f64,
        root_top: f64,
        root_width: f64,
        margin_top: f64,
    ) -> Self {
        Self {
            offset_x: pool_width / 2.0 - root_width / 2.0 - root_left,
            offset_y: margin_top - root_top,
            scale: 1.0,
        }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Multiply the scale by `factor`, keeping the map point under
    /// `(anchor_x, anchor_y)` (pool coordinates) visually stationary. The new
    /// scale is clamped to `[min_scale, max_scale]` before the offset is
    /// re-solved, so the anchor stays fixed even when the clamp truncates the
    /// factor.
    pub fn zoom_about(
        &mut self,
        anchor_x: f64,
        anchor_y: f64,
        factor: f64,
        min_scale: f64,
        max_scale: f64,
    ) {
        let (map_x, map_y) = self.screen_to_map(anchor_x, anchor_y);
        self.scale = (self.scale * factor).clamp(min_scale, max_scale);
        self.offset_x = anchor_x - map_x * self.scale;
        self.offset_y = anchor_y - map_y * self.scale;
    }

    pub fn screen_to_map(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.offset_x) / self.scale,
            (y - self.offset_y) / self.scale,
        )
    }

    pub fn map_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale + self.offset_x,
            y * self.scale + self.offset_y,
        )
    }

    /// CSS transform written to the content layer. Pure function of the
    /// viewport: equal viewports render equal strings.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn centering_places_root_under_top_margin() {
        let vp = Viewport::centered_on_root(800.0, 40.0, 20.0, 100.0, 50.0);
        assert!((vp.offset_x - 310.0).abs() < EPS);
        assert!((vp.offset_y - 30.0).abs() < EPS);
        assert!((vp.scale - 1.0).abs() < EPS);
    }

    #[test]
    fn wheel_zoom_worked_example() {
        let mut vp = Viewport::default();
        vp.zoom_about(100.0, 100.0, 1.1, 0.1, 10.0);
        assert!((vp.scale - 1.1).abs() < EPS);
        assert!((vp.offset_x - -10.0).abs() < EPS);
        assert!((vp.offset_y - -10.0).abs() < EPS);
    }

    #[test]
    fn zoom_keeps_anchor_stationary() {
        let mut vp = Viewport {
            offset_x: 37.0,
            offset_y: -120.5,
            scale: 1.7,
        };
        let anchor = (412.0, 233.0);
        let before = vp.screen_to_map(anchor.0, anchor.1);
        for factor in [1.25, 0.8, 1.1, 0.5] {
            vp.zoom_about(anchor.0, anchor.1, factor, 0.1, 10.0);
            let after = vp.map_to_screen(before.0, before.1);
            assert!((after.0 - anchor.0).abs() < 1e-6);
            assert!((after.1 - anchor.1).abs() < 1e-6);
        }
    }

    #[test]
    fn zoom_keeps_anchor_stationary_when_clamped() {
        let mut vp = Viewport {
            offset_x: -50.0,
            offset_y: 80.0,
            scale: 9.5,
        };
        let anchor = (200.0, 150.0);
        let before = vp.screen_to_map(anchor.0, anchor.1);
        // Factor would push past max_scale; clamp truncates it.
        vp.zoom_about(anchor.0, anchor.1, 2.0, 0.1, 10.0);
        assert!((vp.scale - 10.0).abs() < EPS);
        let after = vp.map_to_screen(before.0, before.1);
        assert!((after.0 - anchor.0).abs() < 1e-6);
        assert!((after.1 - anchor.1).abs() < 1e-6);
    }

    #[test]
    fn scale_stays_within_bounds() {
        let mut vp = Viewport::default();
        for _ in 0..100 {
            vp.zoom_about(0.0, 0.0, 0.5, 0.1, 10.0);
        }
        assert!((vp.scale - 0.1).abs() < EPS);
        for _ in 0..100 {
            vp.zoom_about(0.0, 0.0, 2.0, 0.1, 10.0);
        }
        assert!((vp.scale - 10.0).abs() < EPS);
        assert!(vp.scale > 0.0);
    }

    #[test]
    fn pan_deltas_compose() {
        let mut vp = Viewport {
            offset_x: 5.0,
            offset_y: -3.0,
            scale: 2.0,
        };
        let deltas = [(3.0, -1.0), (0.5, 0.5), (-7.25, 4.0), (10.0, 0.0)];
        for (dx, dy) in deltas {
            vp.pan_by(dx, dy);
        }
        let (sx, sy) = deltas
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy));
        assert!((vp.offset_x - (5.0 + sx)).abs() < EPS);
        assert!((vp.offset_y - (-3.0 + sy)).abs() < EPS);
        assert!((vp.scale - 2.0).abs() < EPS);
    }

    #[test]
    fn screen_map_round_trip() {
        let vp = Viewport {
            offset_x: 12.0,
            offset_y: 97.0,
            scale: 0.4,
        };
        let (mx, my) = vp.screen_to_map(250.0, -40.0);
        let (sx, sy) = vp.map_to_screen(mx, my);
        assert!((sx - 250.0).abs() < 1e-9);
        assert!((sy - -40.0).abs() < 1e-9);
    }

    #[test]
    fn render_is_idempotent() {
        let vp = Viewport {
            offset_x: 310.0,
            offset_y: 30.0,
            scale: 1.1,
        };
        assert_eq!(vp.css_transform(), vp.css_transform());
        assert_eq!(vp.css_transform(), "translate(310px, 30px) scale(1.1)");
    }
}
