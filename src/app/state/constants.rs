use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Fixed pieces of the page chrome, in logical pixels.
pub(crate) const PAGE_PADDING_X: f32 = 40.0;
pub(crate) const SECTION_PADDING_Y: f32 = 24.0;
pub(crate) const CONTROL_WIDTH: f32 = 44.0;
pub(crate) const CONTROL_SPACING: f32 = 12.0;
pub(crate) const SCROLLBAR_ALLOWANCE: f32 = 12.0;
pub(crate) const CARD_IMAGE_HEIGHT: f32 = 160.0;
pub(crate) const DOT_SIZE: f32 = 12.0;
pub(crate) const TICK_INTERVAL_MS: u64 = 16;
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) static CAROUSEL_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("carousel-strip"));
