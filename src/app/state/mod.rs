mod animation;
mod constants;
mod layout;

use crate::carousel::{Carousel, CarouselControls, CarouselSettings};
use crate::config::AppConfig;
use crate::contact::{ContactForm, FAILURE_NOTICE, SUCCESS_NOTICE};
use crate::debounce::Debouncer;
use crate::page::{active_link_flags, active_section};
use crate::site::{SectionKind, SiteContent};
use iced::Task;
use std::time::Duration;

use super::messages::Message;

pub(in crate::app) use animation::ScrollAnimator;
pub(crate) use constants::*;
pub(in crate::app) use layout::PageLayout;

/// Which nav link is lit, derived from the page scroll position.
#[derive(Debug, Default)]
pub struct NavState {
    pub(in crate::app) current_section: Option<String>,
    pub(in crate::app) link_flags: Vec<bool>,
}

#[derive(Debug, Default)]
pub struct ContactState {
    pub(in crate::app) form: ContactForm,
    pub(in crate::app) in_flight: bool,
}

/// Modal message shown after a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Delivered,
    Failed,
}

impl Notice {
    pub(in crate::app) fn text(self) -> &'static str {
        match self {
            Notice::Delivered => SUCCESS_NOTICE,
            Notice::Failed => FAILURE_NOTICE,
        }
    }
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) site: SiteContent,
    pub(super) layout: PageLayout,
    pub(super) carousel: Option<Carousel>,
    pub(super) nav: NavState,
    pub(super) contact: ContactState,
    pub(super) notice: Option<Notice>,
    pub(super) padding_settle: Debouncer,
    pub(super) carousel_tween: ScrollAnimator,
    pub(super) page_tween: ScrollAnimator,
}

impl App {
    pub(super) fn bootstrap(site: SiteContent, mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let layout = PageLayout::new(&config);

        let has_strip = site
            .sections
            .iter()
            .any(|section| section.kind == SectionKind::Projects);
        let controls = CarouselControls {
            container: site.controls.container && has_strip,
            ..site.controls
        };
        let carousel = Carousel::mount(
            site.projects.len(),
            controls,
            CarouselSettings::from(&config),
            &layout,
        );

        let mut app = App {
            padding_settle: Debouncer::from_millis(config.resize_settle_ms),
            carousel_tween: ScrollAnimator::new(Duration::from_millis(config.carousel_scroll_ms)),
            page_tween: ScrollAnimator::new(Duration::from_millis(config.page_scroll_ms)),
            config,
            site,
            layout,
            carousel,
            nav: NavState::default(),
            contact: ContactState::default(),
            notice: None,
        };
        app.refresh_nav();
        tracing::info!(
            sections = app.site.sections.len(),
            carousel = app.carousel.is_some(),
            "Page initialized"
        );
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.site.title.clone()
    }

    /// Recompute the active section and the nav link flags.
    pub(super) fn refresh_nav(&mut self) {
        let sections = self
            .layout
            .sections(self.site.section_ids(), self.config.min_section_height);
        let current = active_section(
            &sections,
            self.layout.page_scroll_y,
            self.config.nav_activation_offset,
        )
        .map(str::to_string);
        self.nav.link_flags = active_link_flags(
            self.site.nav.iter().map(|link| link.href.as_str()),
            current.as_deref(),
        );
        if current != self.nav.current_section {
            tracing::debug!(section = ?current, "Active section changed");
            self.nav.current_section = current;
        }
    }

    /// True while a settle timer or a scroll tween still needs ticks.
    pub(super) fn needs_tick(&self) -> bool {
        self.padding_settle.is_pending()
            || self.carousel_tween.is_active()
            || self.page_tween.is_active()
            || self.carousel.as_ref().is_some_and(Carousel::is_settling)
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.medium_breakpoint = config.medium_breakpoint.max(config.small_breakpoint);
    config.card_width = config.card_width.clamp(120.0, 1200.0);
    config.card_gap = config.card_gap.clamp(0.0, 200.0);
    config.swipe_threshold = config.swipe_threshold.max(0.0);
    config.header_height = config.header_height.clamp(0.0, 400.0);
    config.compact_header_height = config.compact_header_height.clamp(0.0, 400.0);
    config.min_section_height = config.min_section_height.max(200.0);
}
