pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_small_breakpoint() -> f32 {
    576.0
}

pub(crate) fn default_medium_breakpoint() -> f32 {
    992.0
}

pub(crate) fn default_card_width() -> f32 {
    320.0
}

pub(crate) fn default_card_gap() -> f32 {
    32.0
}

pub(crate) fn default_swipe_threshold() -> f32 {
    50.0
}

pub(crate) fn default_scroll_settle_ms() -> u64 {
    100
}

pub(crate) fn default_resize_settle_ms() -> u64 {
    250
}

pub(crate) fn default_carousel_scroll_ms() -> u64 {
    350
}

pub(crate) fn default_nav_activation_offset() -> f32 {
    200.0
}

pub(crate) fn default_header_scroll_threshold() -> f32 {
    100.0
}

pub(crate) fn default_header_height() -> f32 {
    80.0
}

pub(crate) fn default_compact_header_height() -> f32 {
    124.0
}

pub(crate) fn default_min_section_height() -> f32 {
    640.0
}

pub(crate) fn default_page_scroll_ms() -> u64 {
    500
}

pub(crate) fn default_contact_endpoint() -> String {
    "https://formspree.io/f/xdkldazr".to_string()
}
