use crate::tuning::Tuning;

/// Single-slide-per-view slider state. `target` moves as soon as a scroll is
/// requested; `selected` only follows once the view reports the motion has
/// settled, so UI driven by `selected` never runs ahead of the track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselEngine {
    len: usize,
    looped: bool,
    target: usize,
    selected: usize,
}

impl CarouselEngine {
    pub fn new(len: usize, looped: bool) -> Self {
        Self {
            len,
            looped,
            target: 0,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.len > 1 && (self.looped || self.target > 0)
    }

    pub fn can_scroll_next(&self) -> bool {
        self.len > 1 && (self.looped || self.target + 1 < self.len)
    }

    /// Moves the target one slide forward. Returns the new target, or `None`
    /// when nothing moved.
    pub fn scroll_next(&mut self) -> Option<usize> {
        if !self.can_scroll_next() {
            return None;
        }
        let next = (self.target + 1) % self.len;
        self.retarget(next)
    }

    pub fn scroll_prev(&mut self) -> Option<usize> {
        if !self.can_scroll_prev() {
            return None;
        }
        let prev = if self.target == 0 {
            self.len - 1
        } else {
            self.target - 1
        };
        self.retarget(prev)
    }

    /// Called when the track stops moving. Returns the newly selected index
    /// when it changed.
    pub fn settle(&mut self) -> Option<usize> {
        if self.selected == self.target {
            return None;
        }
        self.selected = self.target;
        Some(self.selected)
    }

    pub fn slide_opacity(&self, index: usize, tuning: &Tuning) -> f64 {
        match self.distance(index, self.selected) {
            0 => 1.0,
            1 => tuning.carousel_adjacent_opacity,
            _ => tuning.carousel_far_opacity,
        }
    }

    /// Slide distance, wrapping around the ends when looping.
    pub fn distance(&self, a: usize, b: usize) -> usize {
        let direct = a.abs_diff(b);
        if self.looped && self.len > 0 {
            direct.min(self.len - direct.min(self.len))
        } else {
            direct
        }
    }

    fn retarget(&mut self, index: usize) -> Option<usize> {
        if index == self.target {
            return None;
        }
        self.target = index;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_wraps_both_ways() {
        let mut engine = CarouselEngine::new(3, true);
        assert_eq!(engine.scroll_prev(), Some(2));
        assert_eq!(engine.settle(), Some(2));
        assert_eq!(engine.scroll_next(), Some(0));
        assert_eq!(engine.settle(), Some(0));
    }

    #[test]
    fn selection_waits_for_settle() {
        let mut engine = CarouselEngine::new(4, true);
        engine.scroll_next();
        engine.scroll_next();
        assert_eq!(engine.target(), 2);
        assert_eq!(engine.selected(), 0);
        assert_eq!(engine.settle(), Some(2));
        assert_eq!(engine.settle(), None);
    }

    #[test]
    fn unlooped_stops_at_edges() {
        let mut engine = CarouselEngine::new(2, false);
        assert_eq!(engine.scroll_prev(), None);
        assert_eq!(engine.scroll_next(), Some(1));
        assert_eq!(engine.scroll_next(), None);
    }

    #[test]
    fn single_slide_has_no_controls() {
        let mut engine = CarouselEngine::new(1, true);
        assert!(!engine.can_scroll_next());
        assert!(!engine.can_scroll_prev());
        assert_eq!(engine.scroll_next(), None);
    }

    #[test]
    fn opacity_falls_off_with_wrapped_distance() {
        let tuning = Tuning::default();
        let engine = CarouselEngine::new(5, true);
        assert_eq!(engine.slide_opacity(0, &tuning), 1.0);
        assert_eq!(engine.slide_opacity(1, &tuning), tuning.carousel_adjacent_opacity);
        assert_eq!(engine.slide_opacity(4, &tuning), tuning.carousel_adjacent_opacity);
        assert_eq!(engine.slide_opacity(2, &tuning), tuning.carousel_far_opacity);
        let unlooped = CarouselEngine::new(5, false);
        assert_eq!(unlooped.slide_opacity(4, &tuning), tuning.carousel_far_opacity);
    }
}
