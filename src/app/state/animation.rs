//! Time-based tween used to animate smooth scroll commands.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl ScrollAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
    }

    /// Returns the offset for this frame, or `None` when idle. The final
    /// frame lands exactly on the target.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = self
            .started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or(self.duration);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * ease_in_out(t))
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_moves_monotonically_and_lands_on_target() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(Duration::from_millis(300));
        animator.start(0.0, 664.0, start);

        let mut previous = 0.0;
        for ms in (0..300).step_by(30) {
            let offset = animator
                .tick(start + Duration::from_millis(ms))
                .expect("active frame");
            assert!(offset >= previous);
            previous = offset;
        }
        assert_eq!(animator.tick(start + Duration::from_millis(300)), Some(664.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(start + Duration::from_millis(330)), None);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let now = Instant::now();
        let mut animator = ScrollAnimator::new(Duration::ZERO);
        animator.start(500.0, 0.0, now);
        assert_eq!(animator.tick(now), Some(0.0));
    }
}
