/// Cubic ease-in-out. `p` is clamped to `[0, 1]`.
pub fn ease_in_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// One eased scroll from `start_offset` to `target_offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    start_offset: f64,
    target_offset: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl ScrollAnimation {
    /// `live_offset` must be read from the scroll container at call time.
    pub fn start(live_offset: f64, target_offset: f64, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            start_offset: live_offset,
            target_offset,
            start_ms: now_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let eased = ease_in_out_cubic(self.progress(now_ms));
        self.start_offset + (self.target_offset - self.start_offset) * eased
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Aims at `new_target` from wherever the animation currently is.
    pub fn retarget(&mut self, now_ms: f64, new_target: f64) {
        *self = Self::start(self.sample(now_ms), new_target, now_ms, self.duration_ms);
    }
}

/// Snapshot of a horizontal scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn can_scroll_right(&self) -> bool {
        self.scroll_left < self.scroll_width - self.client_width - 1.0
    }

    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

const MOBILE_BREAKPOINT: f64 = 768.0;

/// Card width and gap of the cards track for a given viewport width.
pub fn card_geometry(viewport_width: f64) -> (f64, f64) {
    if viewport_width < MOBILE_BREAKPOINT {
        (230.0, 4.0)
    } else {
        (384.0, 8.0)
    }
}

/// Scroll offset that puts the card at `index` at the left edge of the track.
pub fn card_offset(index: usize, viewport_width: f64) -> f64 {
    let (card_width, gap) = card_geometry(viewport_width);
    (card_width + gap) * index as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ease_boundaries() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn ease_clamps_input() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = ease_in_out_cubic(step as f64 / 100.0);
            assert!(value + EPS >= last);
            assert!((0.0..=1.0).contains(&value));
            last = value;
        }
    }

    #[test]
    fn animation_hits_target_without_overshoot() {
        let animation = ScrollAnimation::start(100.0, 400.0, 0.0, 500.0);
        for ms in (0..=600).step_by(16) {
            let offset = animation.sample(ms as f64);
            assert!((100.0..=400.0).contains(&offset));
        }
        assert!(animation.is_done(500.0));
        assert_eq!(animation.sample(500.0), 400.0);
        assert!(!animation.is_done(250.0));
        assert!((animation.sample(250.0) - 250.0).abs() < EPS);
    }

    #[test]
    fn retarget_starts_from_live_offset() {
        let mut animation = ScrollAnimation::start(0.0, 300.0, 0.0, 500.0);
        let live = animation.sample(100.0);
        animation.retarget(100.0, 900.0);

        assert!((animation.start_offset() - live).abs() < EPS);
        assert_eq!(animation.target_offset(), 900.0);
        // First frame after the retarget sits at the live offset, not at 300.
        assert!((animation.sample(100.0) - live).abs() < EPS);
        assert!(animation.sample(116.0) < 300.0);
    }

    #[test]
    fn same_target_completes_in_place() {
        let animation = ScrollAnimation::start(250.0, 250.0, 10.0, 500.0);
        assert_eq!(animation.sample(26.0), 250.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let animation = ScrollAnimation::start(0.0, 80.0, 5.0, 0.0);
        assert!(animation.is_done(5.0));
        assert_eq!(animation.sample(5.0), 80.0);
    }

    #[test]
    fn scrollability_at_edges() {
        let start = ScrollMetrics { scroll_left: 0.0, scroll_width: 2000.0, client_width: 800.0 };
        assert!(start.can_scroll_right());
        assert_eq!(start.max_scroll_left(), 1200.0);

        let end = ScrollMetrics { scroll_left: 1200.0, ..start };
        assert!(!end.can_scroll_right());

        let narrow = ScrollMetrics { scroll_left: 0.0, scroll_width: 500.0, client_width: 800.0 };
        assert_eq!(narrow.max_scroll_left(), 0.0);
    }

    #[test]
    fn card_offset_by_breakpoint() {
        assert_eq!(card_offset(0, 1024.0), 0.0);
        assert_eq!(card_offset(1, 1024.0), 392.0);
        assert_eq!(card_offset(3, 400.0), 702.0);
    }
}
