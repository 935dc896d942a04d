/// Pointer-driven 3D rotation of the overlay image, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt { x: 0.0, y: 0.0 };

    pub fn is_rest(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn css_transform(&self) -> String {
        format!("rotateX({:.3}deg) rotateY({:.3}deg)", self.x, self.y)
    }
}

/// Pointer position relative to the top-left corner of the pane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanePointer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation proportional to the pointer's offset from the pane centre.
/// Vertical offset tilts around X (inverted so the near edge lifts), horizontal
/// offset tilts around Y. Both axes are clamped to `max_deg`.
pub fn tilt_for_pointer(pointer: PanePointer, max_deg: f64) -> Tilt {
    let center_x = pointer.width * 0.5;
    let center_y = pointer.height * 0.5;
    if center_x <= 0.0 || center_y <= 0.0 || !max_deg.is_finite() {
        return Tilt::REST;
    }
    let max_deg = max_deg.abs();
    let x = ((pointer.y - center_y) / center_y) * -max_deg;
    let y = ((pointer.x - center_x) / center_x) * max_deg;
    Tilt {
        x: clamp_deg(x, max_deg),
        y: clamp_deg(y, max_deg),
    }
}

/// Tilt follows a real mouse only: narrow viewports and touch devices (whose
/// taps synthesize mouse moves) keep the image flat.
pub fn pointer_tilt_enabled(narrow_viewport: bool, touch_device: bool) -> bool {
    !narrow_viewport && !touch_device
}

fn clamp_deg(value: f64, max_deg: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    // avoid -0.0 leaking into css
    let clamped = value.clamp(-max_deg, max_deg);
    if clamped == 0.0 {
        0.0
    } else {
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(x: f64, y: f64) -> PanePointer {
        PanePointer {
            x,
            y,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn centre_is_rest() {
        assert!(tilt_for_pointer(pointer(100.0, 50.0), 15.0).is_rest());
    }

    #[test]
    fn corners_reach_the_cap() {
        let tilt = tilt_for_pointer(pointer(200.0, 0.0), 15.0);
        assert_eq!(tilt, Tilt { x: 15.0, y: 15.0 });
        let tilt = tilt_for_pointer(pointer(0.0, 100.0), 15.0);
        assert_eq!(tilt, Tilt { x: -15.0, y: -15.0 });
    }

    #[test]
    fn pointer_outside_the_pane_is_capped() {
        let tilt = tilt_for_pointer(pointer(600.0, -300.0), 15.0);
        assert_eq!(tilt, Tilt { x: 15.0, y: 15.0 });
    }

    #[test]
    fn only_wide_mouse_viewports_tilt() {
        assert!(pointer_tilt_enabled(false, false));
        assert!(!pointer_tilt_enabled(false, true));
        assert!(!pointer_tilt_enabled(true, false));
        assert!(!pointer_tilt_enabled(true, true));
    }

    #[test]
    fn degenerate_pane_does_not_tilt() {
        let tilt = tilt_for_pointer(
            PanePointer {
                x: 10.0,
                y: 10.0,
                width: 0.0,
                height: 0.0,
            },
            15.0,
        );
        assert!(tilt.is_rest());
    }
}
