//! Project carousel controller.
//!
//! The carousel owns the only navigation state on the page: the index of the
//! first visible card. Every input (buttons, dots, swipes, free scrolling,
//! window resizes) funnels into `scroll_to_index` or into one of the two
//! debounced settle passes, and each path ends by refreshing the display
//! state the host renders from.
//!
//! The controller never touches the GUI. Layout comes in through
//! [`LayoutProbe`] and scrolling goes out as [`ScrollCommand`] values.

mod layout;
mod swipe;

pub use layout::{
    Breakpoints, LayoutProbe, ViewportClass, card_stride, items_per_view, responsive_card_width,
};
pub use swipe::{SwipeDirection, SwipeTracker, classify_swipe};

use crate::config::AppConfig;
use crate::debounce::Debouncer;
use std::time::Instant;
use tracing::debug;

/// Request to smoothly scroll to an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f32,
}

/// Which carousel controls the page actually provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct CarouselControls {
    #[serde(default = "present")]
    pub container: bool,
    #[serde(default = "present")]
    pub prev_button: bool,
    #[serde(default = "present")]
    pub next_button: bool,
    #[serde(default = "present")]
    pub dots: bool,
}

fn present() -> bool {
    true
}

impl Default for CarouselControls {
    fn default() -> Self {
        Self {
            container: true,
            prev_button: true,
            next_button: true,
            dots: true,
        }
    }
}

impl CarouselControls {
    pub fn is_complete(&self) -> bool {
        self.container && self.prev_button && self.next_button && self.dots
    }
}

/// Tunables for breakpoints, swipes and settle delays.
#[derive(Debug, Clone, Copy)]
pub struct CarouselSettings {
    pub breakpoints: Breakpoints,
    pub swipe_threshold: f32,
    pub scroll_settle_ms: u64,
    pub resize_settle_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            swipe_threshold: 50.0,
            scroll_settle_ms: 100,
            resize_settle_ms: 250,
        }
    }
}

impl From<&AppConfig> for CarouselSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            breakpoints: Breakpoints {
                small: config.small_breakpoint,
                medium: config.medium_breakpoint,
            },
            swipe_threshold: config.swipe_threshold,
            scroll_settle_ms: config.scroll_settle_ms,
            resize_settle_ms: config.resize_settle_ms,
        }
    }
}

/// Everything the host needs to draw the controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselDisplay {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub active_dots: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    items_per_view: usize,
    card_width: f32,
    current_index: usize,
    settings: CarouselSettings,
    scroll_settle: Debouncer,
    resize_settle: Debouncer,
    swipe: SwipeTracker,
    display: CarouselDisplay,
}

impl Carousel {
    /// Build the controller, or `None` when the page lacks cards or any of
    /// the controls the carousel depends on.
    pub fn mount(
        item_count: usize,
        controls: CarouselControls,
        settings: CarouselSettings,
        probe: &impl LayoutProbe,
    ) -> Option<Self> {
        if !controls.is_complete() {
            debug!(?controls, "Carousel controls incomplete; leaving cards static");
            return None;
        }
        if item_count == 0 {
            debug!("No project cards; carousel not mounted");
            return None;
        }

        let mut carousel = Carousel {
            item_count,
            items_per_view: items_per_view(probe, settings.breakpoints, item_count),
            card_width: card_stride(probe),
            current_index: 0,
            settings,
            scroll_settle: Debouncer::from_millis(settings.scroll_settle_ms),
            resize_settle: Debouncer::from_millis(settings.resize_settle_ms),
            swipe: SwipeTracker::default(),
            display: CarouselDisplay::default(),
        };
        carousel.refresh_buttons();
        carousel.refresh_dots();
        debug!(
            items = item_count,
            items_per_view = carousel.items_per_view,
            card_width = carousel.card_width,
            "Mounted project carousel"
        );
        Some(carousel)
    }

    #[cfg(test)]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn display(&self) -> &CarouselDisplay {
        &self.display
    }

    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    /// Clamp, move, and ask the host to scroll there.
    ///
    /// Any pending scroll settle is dropped: the strip is now headed for this
    /// index and must not be re-read mid-flight.
    pub fn scroll_to_index(&mut self, target: usize) -> ScrollCommand {
        self.current_index = target.min(self.max_index());
        self.scroll_settle.cancel();
        let command = ScrollCommand {
            offset: self.offset_for(self.current_index),
        };
        self.refresh_buttons();
        self.refresh_dots();
        debug!(
            index = self.current_index,
            offset = command.offset,
            "Carousel scrolling to card"
        );
        command
    }

    pub fn on_prev(&mut self) -> Option<ScrollCommand> {
        if self.current_index == 0 {
            return None;
        }
        Some(self.scroll_to_index(self.current_index - 1))
    }

    pub fn on_next(&mut self) -> Option<ScrollCommand> {
        if self.current_index >= self.max_index() {
            return None;
        }
        Some(self.scroll_to_index(self.current_index + 1))
    }

    pub fn on_dot_activate(&mut self, index: usize) -> Option<ScrollCommand> {
        if index >= self.item_count {
            return None;
        }
        Some(self.scroll_to_index(index))
    }

    /// The strip moved; settle the index once scrolling goes quiet.
    pub fn on_container_scroll(&mut self, now: Instant) {
        self.scroll_settle.schedule(now);
    }

    /// The window changed size; re-measure once resizing goes quiet.
    pub fn on_resize(&mut self, now: Instant) {
        self.resize_settle.schedule(now);
    }

    pub fn on_swipe(&mut self, delta_x: f32) -> Option<ScrollCommand> {
        match classify_swipe(delta_x, self.settings.swipe_threshold)? {
            SwipeDirection::Next => self.on_next(),
            SwipeDirection::Previous => self.on_prev(),
        }
    }

    pub fn on_touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn on_touch_end(&mut self, x: f32) -> Option<ScrollCommand> {
        let delta = self.swipe.finish(x)?;
        self.on_swipe(delta)
    }

    pub fn is_settling(&self) -> bool {
        self.scroll_settle.is_pending() || self.resize_settle.is_pending()
    }

    /// Run any settle pass whose quiet period has elapsed.
    ///
    /// Resize runs first so a scroll settle due in the same tick divides by
    /// the freshly measured card width.
    pub fn tick(&mut self, now: Instant, probe: &impl LayoutProbe) -> Option<ScrollCommand> {
        let mut command = None;
        if self.resize_settle.fire_if_due(now) {
            command = self.settle_resize(probe);
        }
        if self.scroll_settle.fire_if_due(now) {
            self.settle_scroll(probe);
        }
        command
    }

    pub(crate) fn settle_scroll(&mut self, probe: &impl LayoutProbe) {
        let offset = probe.scroll_offset();
        if self.card_width <= f32::EPSILON || !offset.is_finite() {
            return;
        }
        let nearest = (offset.max(0.0) / self.card_width).round() as usize;
        let new_index = nearest.min(self.max_index());
        if new_index != self.current_index {
            debug!(
                from = self.current_index,
                to = new_index,
                offset,
                "Carousel index settled from scroll position"
            );
            self.current_index = new_index;
            self.refresh_buttons();
            self.refresh_dots();
        }
    }

    pub(crate) fn settle_resize(&mut self, probe: &impl LayoutProbe) -> Option<ScrollCommand> {
        self.items_per_view = items_per_view(probe, self.settings.breakpoints, self.item_count);
        self.card_width = card_stride(probe);
        debug!(
            items_per_view = self.items_per_view,
            card_width = self.card_width,
            "Carousel re-measured after resize"
        );
        if self.current_index > self.max_index() {
            Some(self.scroll_to_index(self.max_index()))
        } else {
            self.refresh_buttons();
            self.refresh_dots();
            None
        }
    }

    pub fn refresh_buttons(&mut self) {
        self.display.prev_enabled = self.current_index > 0;
        self.display.next_enabled = self.current_index < self.max_index();
    }

    pub fn refresh_dots(&mut self) {
        let window = self.current_index..self.current_index + self.items_per_view;
        self.display.active_dots = (0..self.item_count)
            .map(|idx| window.contains(&idx))
            .collect();
    }

    fn offset_for(&self, index: usize) -> f32 {
        index as f32 * self.card_width
    }
}
