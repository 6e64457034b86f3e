/// Direction a completed horizontal swipe asks the carousel to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: reveal the next card.
    Next,
    /// Finger moved right: reveal the previous card.
    Previous,
}

/// Classify a horizontal swipe. The threshold is exclusive.
pub fn classify_swipe(delta_x: f32, threshold: f32) -> Option<SwipeDirection> {
    if !delta_x.is_finite() {
        return None;
    }
    if delta_x < -threshold {
        Some(SwipeDirection::Next)
    } else if delta_x > threshold {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Close the gesture and return its horizontal travel, if one was open.
    pub fn finish(&mut self, x: f32) -> Option<f32> {
        self.start_x.take().map(|start| x - start)
    }
}
