/// Maps a uniform sample in `[0, 1)` onto `[-range_deg, range_deg)`.
pub fn rotation_from_unit(unit: f64, range_deg: f64) -> f64 {
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.5 };
    let range_deg = range_deg.abs();
    unit * (2.0 * range_deg) - range_deg
}

/// Decorative card tilt. Starts unrealized (renders flat) and is drawn at
/// most once; later calls to [`CardRotation::realize_with`] keep the first angle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRotation {
    angle: Option<f64>,
}

impl CardRotation {
    pub const fn unrealized() -> Self {
        Self { angle: None }
    }

    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    pub fn realize_with<F>(&mut self, sample: F, range_deg: f64) -> f64
    where
        F: FnOnce() -> f64,
    {
        *self
            .angle
            .get_or_insert_with(|| rotation_from_unit(sample(), range_deg))
    }

    /// Angle to render. Flat while the strip is in active scroll.
    pub fn displayed(&self, active_scroll: bool) -> f64 {
        if active_scroll {
            0.0
        } else {
            self.angle.unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_bounds_map_to_range_edges() {
        assert_eq!(rotation_from_unit(0.0, 7.5), -7.5);
        assert_eq!(rotation_from_unit(0.5, 7.5), 0.0);
        assert!(rotation_from_unit(0.999_999, 7.5) < 7.5);
    }

    #[test]
    fn realize_is_idempotent() {
        let mut rotation = CardRotation::unrealized();
        assert_eq!(rotation.displayed(false), 0.0);
        let first = rotation.realize_with(|| 0.75, 7.5);
        let second = rotation.realize_with(|| panic!("sampled twice"), 7.5);
        assert_eq!(first, 3.75);
        assert_eq!(first, second);
        assert_eq!(rotation.displayed(false), 3.75);
        assert_eq!(rotation.displayed(true), 0.0);
        assert_eq!(rotation.displayed(false), 3.75);
    }
}
