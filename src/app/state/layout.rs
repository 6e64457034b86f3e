use super::constants::{CONTROL_SPACING, CONTROL_WIDTH, PAGE_PADDING_X, SCROLLBAR_ALLOWANCE};
use crate::carousel::{Breakpoints, LayoutProbe, ViewportClass, responsive_card_width};
use crate::config::AppConfig;
use crate::page::{ContentPadding, SectionBounds, header_height_for, stacked_sections};

/// Live page geometry. The view renders from these numbers and the
/// controllers measure from them, so both always agree.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) page_scroll_y: f32,
    pub(in crate::app) carousel_scroll_x: f32,
    /// Header height as of the last padding pass.
    pub(in crate::app) header_height: f32,
    /// Two-row header, as of the last padding pass.
    compact_header: bool,
    breakpoints: Breakpoints,
    preferred_card_width: f32,
    card_gap: f32,
}

impl PageLayout {
    pub(in crate::app) fn new(config: &AppConfig) -> Self {
        let mut layout = PageLayout {
            viewport_width: config.window_width.max(1.0),
            viewport_height: config.window_height.max(1.0),
            page_scroll_y: 0.0,
            carousel_scroll_x: 0.0,
            header_height: config.header_height,
            compact_header: false,
            breakpoints: Breakpoints {
                small: config.small_breakpoint,
                medium: config.medium_breakpoint,
            },
            preferred_card_width: config.card_width,
            card_gap: config.card_gap,
        };
        layout.apply_header_height(config);
        layout
    }

    pub(in crate::app) fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = if width.is_finite() { width.max(1.0) } else { 1.0 };
        self.viewport_height = if height.is_finite() { height.max(1.0) } else { 1.0 };
    }

    pub(in crate::app) fn apply_header_height(&mut self, config: &AppConfig) {
        self.compact_header = self.viewport_class() == ViewportClass::Small;
        self.header_height = header_height_for(
            self.viewport_width,
            self.breakpoints.small,
            config.header_height,
            config.compact_header_height,
        );
    }

    pub(in crate::app) fn viewport_class(&self) -> ViewportClass {
        ViewportClass::classify(self.viewport_width, self.breakpoints)
    }

    /// Header layout matching `header_height`; both change only on the
    /// padding pass.
    pub(in crate::app) fn is_compact_header(&self) -> bool {
        self.compact_header
    }

    pub(in crate::app) fn padding(&self) -> ContentPadding {
        ContentPadding::for_header(self.header_height)
    }

    pub(in crate::app) fn section_height(&self, min_section_height: f32) -> f32 {
        (self.viewport_height - self.header_height).max(min_section_height)
    }

    pub(in crate::app) fn sections<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
        min_section_height: f32,
    ) -> Vec<SectionBounds> {
        stacked_sections(
            ids,
            self.padding().top,
            self.section_height(min_section_height),
        )
    }
}

impl LayoutProbe for PageLayout {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn container_width(&self) -> f32 {
        let chrome = 2.0 * PAGE_PADDING_X + 2.0 * (CONTROL_WIDTH + CONTROL_SPACING);
        (self.viewport_width - chrome - SCROLLBAR_ALLOWANCE).max(1.0)
    }

    fn item_width(&self) -> f32 {
        responsive_card_width(
            self.viewport_class(),
            self.container_width(),
            self.card_gap,
            self.preferred_card_width,
        )
    }

    fn gap(&self) -> f32 {
        self.card_gap
    }

    fn scroll_offset(&self) -> f32 {
        self.carousel_scroll_x
    }
}
