//! Zoom model for the document preview.
//!
//! The control bar shows a slider over a fixed scale range plus an
//! "autoscale" toggle. While autoscale is on, the scale follows the viewport
//! height so a whole page fits on screen; moving the slider turns it off.

use crate::error::{Result, StateError};
use crate::types::DocumentSize;
use serde::Deserialize;

/// Slider range and granularity.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ZoomConfig {
    /// Reject ranges the slider cannot represent.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(StateError::InvalidOperation(format!(
                "zoom range {}..={} is empty or not finite",
                self.min, self.max
            )));
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(StateError::InvalidOperation(format!(
                "zoom step {} must be finite and not negative",
                self.step
            )));
        }
        Ok(())
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 1.5,
            step: 0.01,
        }
    }
}

/// Page chrome surrounding the preview, in rem unless noted.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// CSS pixels per rem.
    pub px_per_rem: f64,
    pub top_nav_bar_rem: f64,
    pub control_bar_rem: f64,
    /// Padding above and below the page (applied twice).
    pub resume_padding_rem: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            px_per_rem: 16.0,
            top_nav_bar_rem: 3.5,
            control_bar_rem: 3.0,
            resume_padding_rem: 1.5,
        }
    }
}

/// Scale at which one full page fits the viewport, rounded to 0.01.
///
/// Not clamped to the slider range: a very short or very tall window can
/// produce a scale the slider cannot show.
pub fn default_scale(viewport_height_px: f64, size: DocumentSize, metrics: &LayoutMetrics) -> f64 {
    let viewport_rem = viewport_height_px / metrics.px_per_rem;
    let available_rem = viewport_rem
        - metrics.top_nav_bar_rem
        - metrics.control_bar_rem
        - 2.0 * metrics.resume_padding_rem;
    let available_px = available_rem * metrics.px_per_rem;

    (available_px / size.height_px() * 100.0).round() / 100.0
}

/// Current zoom state of the preview.
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    metrics: LayoutMetrics,
    scale: f64,
    scale_on_resize: bool,
}

impl ZoomController {
    /// Start at scale 1.0 with autoscale on.
    pub fn new(config: ZoomConfig, metrics: LayoutMetrics) -> Self {
        Self {
            config,
            metrics,
            scale: 1.0,
            scale_on_resize: true,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn autoscale(&self) -> bool {
        self.scale_on_resize
    }

    /// Percentage shown next to the slider, e.g. `"85%"`.
    pub fn label(&self) -> String {
        format!("{}%", (self.scale * 100.0).round() as i64)
    }

    /// Slider moved by the user.
    ///
    /// Clamps to the slider range, snaps to the step and turns autoscale off.
    /// Non-finite input leaves the scale unchanged. Returns the new scale.
    pub fn set_scale(&mut self, value: f64) -> f64 {
        self.scale_on_resize = false;
        if value.is_finite() {
            self.scale = self.snap(value);
        }
        self.scale
    }

    /// Flip the autoscale checkbox. Returns the new setting.
    pub fn toggle_autoscale(&mut self) -> bool {
        self.scale_on_resize = !self.scale_on_resize;
        self.scale_on_resize
    }

    /// Viewport resized. Recomputes the scale only while autoscale is on.
    pub fn on_viewport_resize(&mut self, viewport_height_px: f64, size: DocumentSize) -> f64 {
        if self.scale_on_resize {
            self.scale = default_scale(viewport_height_px, size, &self.metrics);
        }
        self.scale
    }

    fn snap(&self, value: f64) -> f64 {
        let ZoomConfig { min, max, step } = self.config;
        // max/min instead of clamp: an inverted or NaN range must not panic
        let (lo, hi) = (min.min(max), min.max(max));
        let clamped = value.max(lo).min(hi);
        if !(step > 0.0 && step.is_finite()) || !lo.is_finite() {
            return clamped;
        }
        let snapped = lo + ((clamped - lo) / step).round() * step;
        // Drop float noise such as 0.7000000000000001
        (snapped.min(hi) * 1e9).round() / 1e9
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default(), LayoutMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_letter() {
        // 1000px viewport: 62.5rem - 3.5 - 3 - 3 = 53rem = 848px; 848 / 1056 = 0.803
        let scale = default_scale(1000.0, DocumentSize::Letter, &LayoutMetrics::default());
        assert_eq!(scale, 0.8);
    }

    #[test]
    fn test_default_scale_a4() {
        // 1200px viewport: 1200 - 152 = 1048px; 1048 / 1123 = 0.933
        let scale = default_scale(1200.0, DocumentSize::A4, &LayoutMetrics::default());
        assert_eq!(scale, 0.93);
    }

    #[test]
    fn test_set_scale_clamps_and_snaps() {
        let mut zoom = ZoomController::default();

        assert_eq!(zoom.set_scale(0.734), 0.73);
        assert_eq!(zoom.set_scale(3.0), 1.5);
        assert_eq!(zoom.set_scale(0.1), 0.5);
        assert_eq!(zoom.set_scale(f64::NAN), 0.5);
    }

    #[test]
    fn test_slider_disables_autoscale() {
        let mut zoom = ZoomController::default();
        assert!(zoom.autoscale());

        zoom.set_scale(1.2);
        assert!(!zoom.autoscale());

        // Resize no longer moves the scale
        assert_eq!(zoom.on_viewport_resize(1000.0, DocumentSize::Letter), 1.2);
    }

    #[test]
    fn test_resize_follows_viewport_while_autoscale() {
        let mut zoom = ZoomController::default();
        assert_eq!(zoom.on_viewport_resize(1000.0, DocumentSize::Letter), 0.8);

        zoom.toggle_autoscale();
        assert_eq!(zoom.on_viewport_resize(1200.0, DocumentSize::A4), 0.8);

        zoom.toggle_autoscale();
        assert_eq!(zoom.on_viewport_resize(1200.0, DocumentSize::A4), 0.93);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let config = ZoomConfig {
            min: 2.0,
            max: 1.5,
            step: 0.01,
        };
        let mut zoom = ZoomController::new(config, LayoutMetrics::default());

        assert_eq!(zoom.set_scale(1.0), 1.5);
        assert_eq!(zoom.set_scale(3.0), 2.0);
    }

    #[test]
    fn test_nan_bounds_do_not_panic() {
        let config = ZoomConfig {
            min: f64::NAN,
            max: f64::NAN,
            step: f64::NAN,
        };
        let mut zoom = ZoomController::new(config, LayoutMetrics::default());

        zoom.set_scale(1.0);
        assert!(!zoom.autoscale());
    }

    #[test]
    fn test_validate() {
        assert!(ZoomConfig::default().validate().is_ok());

        let inverted = ZoomConfig {
            min: 2.0,
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(StateError::InvalidOperation(_))));

        let infinite = ZoomConfig {
            max: f64::INFINITY,
            ..Default::default()
        };
        assert!(infinite.validate().is_err());

        let negative_step = ZoomConfig {
            step: -0.1,
            ..Default::default()
        };
        assert!(negative_step.validate().is_err());
    }

    #[test]
    fn test_label() {
        let mut zoom = ZoomController::default();
        assert_eq!(zoom.label(), "100%");

        zoom.set_scale(0.86);
        assert_eq!(zoom.label(), "86%");
    }
}
