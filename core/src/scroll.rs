use crate::tuning::Tuning;

pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Raw wheel deltas as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSample {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_mode: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn can_scroll_left(&self, tolerance: f64) -> bool {
        self.scroll_left > tolerance
    }

    pub fn can_scroll_right(&self, tolerance: f64) -> bool {
        self.scroll_left < self.max_scroll_left() - tolerance
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDecision {
    /// Leave the event to the browser.
    PassThrough,
    /// Swallow the event and add `scroll_by` pixels to `scroll_left`.
    Intercept { scroll_by: f64 },
}

/// Accumulates fractional scroll offsets so that sub-pixel wheel deltas still
/// move an element whose scroll position is integral.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollCarry {
    remainder: f64,
}

impl ScrollCarry {
    /// Adds `delta` and returns the whole pixels to apply now.
    pub fn take(&mut self, delta: f64) -> i32 {
        if !delta.is_finite() {
            return 0;
        }
        let total = self.remainder + delta;
        let whole = total.trunc();
        self.remainder = total - whole;
        whole as i32
    }
}

/// Converts line and page deltas to pixels. `page_px` is the container
/// width used for page-mode deltas.
pub fn normalize_wheel(sample: WheelSample, line_px: f64, page_px: f64) -> WheelSample {
    let scale = match sample.delta_mode {
        DOM_DELTA_LINE => line_px,
        DOM_DELTA_PAGE => page_px,
        _ => 1.0,
    };
    WheelSample {
        delta_x: sample.delta_x * scale,
        delta_y: sample.delta_y * scale,
        delta_mode: DOM_DELTA_PIXEL,
    }
}

pub fn scrolls_horizontally(item_count: usize, tuning: &Tuning) -> bool {
    item_count > tuning.horizontal_threshold
}

/// Whether the strip is in "active scroll" mode: hovered on desktop, or any
/// time on a touch device. Cards lie flat while this holds.
pub fn active_scroll(horizontal: bool, hovered: bool, touch_device: bool) -> bool {
    horizontal && (hovered || touch_device)
}

/// Decides whether a wheel event over the grid becomes horizontal scroll.
/// Horizontal gestures and gestures that would push past either edge of the
/// strip are left alone so trackpads and page scroll keep working.
pub fn decide_wheel(
    sample: WheelSample,
    metrics: ScrollMetrics,
    horizontal: bool,
    hovered: bool,
    tuning: &Tuning,
) -> WheelDecision {
    if !horizontal {
        return WheelDecision::PassThrough;
    }
    let sample = normalize_wheel(sample, tuning.wheel_line_height_px, metrics.client_width);
    if sample.delta_x.abs() > sample.delta_y.abs() {
        return WheelDecision::PassThrough;
    }
    if !hovered || sample.delta_y == 0.0 || !sample.delta_y.is_finite() {
        return WheelDecision::PassThrough;
    }
    let tolerance = tuning.edge_tolerance_px;
    let wants_right = sample.delta_y > 0.0;
    let has_travel = if wants_right {
        metrics.can_scroll_right(tolerance)
    } else {
        metrics.can_scroll_left(tolerance)
    };
    if !has_travel {
        return WheelDecision::PassThrough;
    }
    WheelDecision::Intercept {
        scroll_by: sample.delta_y * tuning.wheel_scroll_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_deltas_become_pixels() {
        let sample = normalize_wheel(
            WheelSample {
                delta_x: 1.0,
                delta_y: -3.0,
                delta_mode: DOM_DELTA_LINE,
            },
            16.0,
            800.0,
        );
        assert_eq!(sample.delta_x, 16.0);
        assert_eq!(sample.delta_y, -48.0);
        assert_eq!(sample.delta_mode, DOM_DELTA_PIXEL);
    }

    #[test]
    fn small_deltas_accumulate_into_pixels() {
        let mut carry = ScrollCarry::default();
        let moved: Vec<i32> = (0..5).map(|_| carry.take(0.25)).collect();
        assert_eq!(moved, vec![0, 0, 0, 1, 0]);
        let back: i32 = (0..5).map(|_| carry.take(-0.25)).sum();
        assert_eq!(back, -1);
        assert_eq!(carry.take(f64::NAN), 0);
        assert_eq!(carry.take(2.5), 2);
    }

    #[test]
    fn threshold_is_exclusive() {
        let tuning = Tuning::default();
        assert!(!scrolls_horizontally(4, &tuning));
        assert!(scrolls_horizontally(5, &tuning));
    }

    #[test]
    fn touch_enables_active_scroll_without_hover() {
        assert!(active_scroll(true, false, true));
        assert!(!active_scroll(true, false, false));
        assert!(!active_scroll(false, true, true));
    }
}
