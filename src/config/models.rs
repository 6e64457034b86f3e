use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_small_breakpoint")]
    pub small_breakpoint: f32,
    #[serde(default = "crate::config::defaults::default_medium_breakpoint")]
    pub medium_breakpoint: f32,
    #[serde(default = "crate::config::defaults::default_card_width")]
    pub card_width: f32,
    #[serde(default = "crate::config::defaults::default_card_gap")]
    pub card_gap: f32,
    #[serde(default = "crate::config::defaults::default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default = "crate::config::defaults::default_scroll_settle_ms")]
    pub scroll_settle_ms: u64,
    #[serde(default = "crate::config::defaults::default_resize_settle_ms")]
    pub resize_settle_ms: u64,
    #[serde(default = "crate::config::defaults::default_carousel_scroll_ms")]
    pub carousel_scroll_ms: u64,
    #[serde(default = "crate::config::defaults::default_nav_activation_offset")]
    pub nav_activation_offset: f32,
    #[serde(default = "crate::config::defaults::default_header_scroll_threshold")]
    pub header_scroll_threshold: f32,
    #[serde(default = "crate::config::defaults::default_header_height")]
    pub header_height: f32,
    #[serde(default = "crate::config::defaults::default_compact_header_height")]
    pub compact_header_height: f32,
    #[serde(default = "crate::config::defaults::default_min_section_height")]
    pub min_section_height: f32,
    #[serde(default = "crate::config::defaults::default_page_scroll_ms")]
    pub page_scroll_ms: u64,
    #[serde(default = "crate::config::defaults::default_contact_endpoint")]
    pub contact_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
            small_breakpoint: crate::config::defaults::default_small_breakpoint(),
            medium_breakpoint: crate::config::defaults::default_medium_breakpoint(),
            card_width: crate::config::defaults::default_card_width(),
            card_gap: crate::config::defaults::default_card_gap(),
            swipe_threshold: crate::config::defaults::default_swipe_threshold(),
            scroll_settle_ms: crate::config::defaults::default_scroll_settle_ms(),
            resize_settle_ms: crate::config::defaults::default_resize_settle_ms(),
            carousel_scroll_ms: crate::config::defaults::default_carousel_scroll_ms(),
            nav_activation_offset: crate::config::defaults::default_nav_activation_offset(),
            header_scroll_threshold: crate::config::defaults::default_header_scroll_threshold(),
            header_height: crate::config::defaults::default_header_height(),
            compact_header_height: crate::config::defaults::default_compact_header_height(),
            min_section_height: crate::config::defaults::default_min_section_height(),
            page_scroll_ms: crate::config::defaults::default_page_scroll_ms(),
            contact_endpoint: crate::config::defaults::default_contact_endpoint(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
