//! Layout math for the project carousel.
//!
//! Everything here is a pure function of measurements handed in through
//! [`LayoutProbe`], so the carousel never needs a live window to reason
//! about how many cards fit.

/// Read-only measurements the host page exposes to the carousel.
pub trait LayoutProbe {
    /// Current window width in logical pixels.
    fn viewport_width(&self) -> f32;
    /// Visible width of the scrollable card strip.
    fn container_width(&self) -> f32;
    /// Rendered width of a single card, without the gap.
    fn item_width(&self) -> f32;
    /// Horizontal spacing between neighbouring cards.
    fn gap(&self) -> f32;
    /// Current horizontal scroll offset of the strip.
    fn scroll_offset(&self) -> f32;
}

/// Window-width thresholds separating the viewport classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub small: f32,
    pub medium: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 576.0,
            medium: 992.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Small,
    Medium,
    Large,
}

impl ViewportClass {
    pub fn classify(viewport_width: f32, breakpoints: Breakpoints) -> Self {
        if viewport_width <= breakpoints.small {
            ViewportClass::Small
        } else if viewport_width <= breakpoints.medium {
            ViewportClass::Medium
        } else {
            ViewportClass::Large
        }
    }
}

/// Number of cards visible at once, always within `1..=item_count`.
pub fn items_per_view(probe: &impl LayoutProbe, breakpoints: Breakpoints, item_count: usize) -> usize {
    let upper = item_count.max(1);
    let raw = match ViewportClass::classify(probe.viewport_width(), breakpoints) {
        ViewportClass::Small => 1,
        ViewportClass::Medium => 2,
        ViewportClass::Large => {
            let gap = sanitize(probe.gap());
            let stride = sanitize(probe.item_width()) + gap;
            if stride <= f32::EPSILON {
                1
            } else {
                ((sanitize(probe.container_width()) + gap) / stride).floor() as usize
            }
        }
    };
    raw.clamp(1, upper)
}

/// Distance between the left edges of two neighbouring cards.
pub fn card_stride(probe: &impl LayoutProbe) -> f32 {
    sanitize(probe.item_width()) + sanitize(probe.gap())
}

/// Card width the host should render for a given viewport class.
///
/// Small and medium layouts stretch one or two cards across the strip; large
/// layouts keep the preferred width and let as many cards fit as they can.
pub fn responsive_card_width(
    class: ViewportClass,
    container_width: f32,
    gap: f32,
    preferred: f32,
) -> f32 {
    let container_width = sanitize(container_width);
    let gap = sanitize(gap);
    let width = match class {
        ViewportClass::Small => container_width,
        ViewportClass::Medium => (container_width - gap) / 2.0,
        ViewportClass::Large => preferred.min(container_width),
    };
    width.max(1.0)
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FixedLayout {
        pub viewport: f32,
        pub container: f32,
        pub item: f32,
        pub gap: f32,
        pub scroll: f32,
    }

    impl FixedLayout {
        pub(crate) fn large(container: f32, item: f32, gap: f32) -> Self {
            Self {
                viewport: 1400.0,
                container,
                item,
                gap,
                scroll: 0.0,
            }
        }
    }

    impl LayoutProbe for FixedLayout {
        fn viewport_width(&self) -> f32 {
            self.viewport
        }
        fn container_width(&self) -> f32 {
            self.container
        }
        fn item_width(&self) -> f32 {
            self.item
        }
        fn gap(&self) -> f32 {
            self.gap
        }
        fn scroll_offset(&self) -> f32 {
            self.scroll
        }
    }

    #[test]
    fn breakpoints_are_inclusive() {
        let bp = Breakpoints::default();
        assert_eq!(ViewportClass::classify(576.0, bp), ViewportClass::Small);
        assert_eq!(ViewportClass::classify(577.0, bp), ViewportClass::Medium);
        assert_eq!(ViewportClass::classify(992.0, bp), ViewportClass::Medium);
        assert_eq!(ViewportClass::classify(993.0, bp), ViewportClass::Large);
    }

    #[test]
    fn large_viewport_counts_whole_cards_with_gaps() {
        // (1000 + 32) / (300 + 32) = 3.1
        let layout = FixedLayout::large(1000.0, 300.0, 32.0);
        assert_eq!(items_per_view(&layout, Breakpoints::default(), 7), 3);
    }

    #[test]
    fn small_and_medium_viewports_use_fixed_counts() {
        let mut layout = FixedLayout::large(1000.0, 100.0, 0.0);
        layout.viewport = 400.0;
        assert_eq!(items_per_view(&layout, Breakpoints::default(), 7), 1);
        layout.viewport = 800.0;
        assert_eq!(items_per_view(&layout, Breakpoints::default(), 7), 2);
    }

    #[test]
    fn count_is_clamped_to_item_count_and_never_zero() {
        let wide = FixedLayout::large(5000.0, 100.0, 10.0);
        assert_eq!(items_per_view(&wide, Breakpoints::default(), 4), 4);

        let narrow = FixedLayout::large(50.0, 300.0, 32.0);
        assert_eq!(items_per_view(&narrow, Breakpoints::default(), 4), 1);

        let degenerate = FixedLayout::large(f32::NAN, 0.0, 0.0);
        assert_eq!(items_per_view(&degenerate, Breakpoints::default(), 4), 1);
    }

    #[test]
    fn medium_cards_split_the_strip_in_two() {
        let width = responsive_card_width(ViewportClass::Medium, 632.0, 32.0, 320.0);
        assert_eq!(width, 300.0);
        let width = responsive_card_width(ViewportClass::Large, 1200.0, 32.0, 320.0);
        assert_eq!(width, 320.0);
    }
}
