use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `config.toml`: one table per concern.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    carousel: CarouselConfig,
    #[serde(default)]
    page: PageConfig,
    #[serde(default)]
    contact: ContactConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            small_breakpoint: tables.carousel.small_breakpoint,
            medium_breakpoint: tables.carousel.medium_breakpoint,
            card_width: tables.carousel.card_width,
            card_gap: tables.carousel.card_gap,
            swipe_threshold: tables.carousel.swipe_threshold,
            scroll_settle_ms: tables.carousel.scroll_settle_ms,
            resize_settle_ms: tables.carousel.resize_settle_ms,
            carousel_scroll_ms: tables.carousel.scroll_duration_ms,
            nav_activation_offset: tables.page.nav_activation_offset,
            header_scroll_threshold: tables.page.header_scroll_threshold,
            header_height: tables.page.header_height,
            compact_header_height: tables.page.compact_header_height,
            min_section_height: tables.page.min_section_height,
            page_scroll_ms: tables.page.scroll_duration_ms,
            contact_endpoint: tables.contact.endpoint,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            carousel: CarouselConfig {
                small_breakpoint: config.small_breakpoint,
                medium_breakpoint: config.medium_breakpoint,
                card_width: config.card_width,
                card_gap: config.card_gap,
                swipe_threshold: config.swipe_threshold,
                scroll_settle_ms: config.scroll_settle_ms,
                resize_settle_ms: config.resize_settle_ms,
                scroll_duration_ms: config.carousel_scroll_ms,
            },
            page: PageConfig {
                nav_activation_offset: config.nav_activation_offset,
                header_scroll_threshold: config.header_scroll_threshold,
                header_height: config.header_height,
                compact_header_height: config.compact_header_height,
                min_section_height: config.min_section_height,
                scroll_duration_ms: config.page_scroll_ms,
            },
            contact: ContactConfig {
                endpoint: config.contact_endpoint.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct CarouselConfig {
    #[serde(default = "defaults::default_small_breakpoint")]
    small_breakpoint: f32,
    #[serde(default = "defaults::default_medium_breakpoint")]
    medium_breakpoint: f32,
    #[serde(default = "defaults::default_card_width")]
    card_width: f32,
    #[serde(default = "defaults::default_card_gap")]
    card_gap: f32,
    #[serde(default = "defaults::default_swipe_threshold")]
    swipe_threshold: f32,
    #[serde(default = "defaults::default_scroll_settle_ms")]
    scroll_settle_ms: u64,
    #[serde(default = "defaults::default_resize_settle_ms")]
    resize_settle_ms: u64,
    #[serde(default = "defaults::default_carousel_scroll_ms")]
    scroll_duration_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            small_breakpoint: defaults::default_small_breakpoint(),
            medium_breakpoint: defaults::default_medium_breakpoint(),
            card_width: defaults::default_card_width(),
            card_gap: defaults::default_card_gap(),
            swipe_threshold: defaults::default_swipe_threshold(),
            scroll_settle_ms: defaults::default_scroll_settle_ms(),
            resize_settle_ms: defaults::default_resize_settle_ms(),
            scroll_duration_ms: defaults::default_carousel_scroll_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PageConfig {
    #[serde(default = "defaults::default_nav_activation_offset")]
    nav_activation_offset: f32,
    #[serde(default = "defaults::default_header_scroll_threshold")]
    header_scroll_threshold: f32,
    #[serde(default = "defaults::default_header_height")]
    header_height: f32,
    #[serde(default = "defaults::default_compact_header_height")]
    compact_header_height: f32,
    #[serde(default = "defaults::default_min_section_height")]
    min_section_height: f32,
    #[serde(default = "defaults::default_page_scroll_ms")]
    scroll_duration_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            nav_activation_offset: defaults::default_nav_activation_offset(),
            header_scroll_threshold: defaults::default_header_scroll_threshold(),
            header_height: defaults::default_header_height(),
            compact_header_height: defaults::default_compact_header_height(),
            min_section_height: defaults::default_min_section_height(),
            scroll_duration_ms: defaults::default_page_scroll_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ContactConfig {
    #[serde(default = "defaults::default_contact_endpoint")]
    endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            endpoint: defaults::default_contact_endpoint(),
        }
    }
}
