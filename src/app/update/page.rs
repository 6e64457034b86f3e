use super::super::state::App;
use super::Effect;
use crate::carousel::ScrollCommand;
use crate::page::anchor_target;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_page_scrolled(&mut self, offset_y: f32) {
        if !offset_y.is_finite() {
            return;
        }
        self.layout.page_scroll_y = offset_y.max(0.0);
        self.refresh_nav();
    }

    pub(super) fn handle_link_pressed(&mut self, href: &str, effects: &mut Vec<Effect>) {
        if !href.starts_with('#') {
            info!(%href, "External link pressed; not opened");
            return;
        }
        let sections = self
            .layout
            .sections(self.site.section_ids(), self.config.min_section_height);
        let margin = self.layout.padding().scroll_margin_top;
        match anchor_target(href, &sections, margin) {
            Some(offset) => {
                debug!(%href, offset, "Scrolling to section");
                effects.push(Effect::ScrollPage(ScrollCommand { offset }));
            }
            None => debug!(%href, "Anchor has no matching section"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::test_support::build_test_app;
    use super::*;
    use crate::page::HeaderStyle;

    #[test]
    fn nav_link_scrolls_section_just_below_header() {
        let mut app = build_test_app(3);
        // projects top = 80 + 2 * 720
        assert_eq!(
            app.reduce(Message::LinkPressed("#projects".to_string())),
            vec![Effect::ScrollPage(ScrollCommand { offset: 1440.0 })]
        );
        assert!(app.reduce(Message::LinkPressed("#".to_string())).is_empty());
        assert!(app.reduce(Message::LinkPressed("#nowhere".to_string())).is_empty());
        assert!(
            app.reduce(Message::LinkPressed("https://example.com".to_string()))
                .is_empty()
        );
    }

    #[test]
    fn scrolling_highlights_the_section_in_view() {
        let mut app = build_test_app(3);
        assert_eq!(app.nav.current_section.as_deref(), Some("home"));
        assert_eq!(app.nav.link_flags, vec![true, false, false, false]);

        // about top 800, lit from 600 with the 200px lead
        app.reduce(Message::PageScrolled { offset_y: 599.0 });
        assert_eq!(app.nav.current_section.as_deref(), Some("home"));
        app.reduce(Message::PageScrolled { offset_y: 600.0 });
        assert_eq!(app.nav.link_flags, vec![false, true, false, false]);

        app.reduce(Message::PageScrolled { offset_y: 5000.0 });
        assert_eq!(app.nav.current_section.as_deref(), Some("contact"));
    }

    #[test]
    fn header_gains_depth_once_scrolled() {
        let mut app = build_test_app(3);
        let threshold = app.config.header_scroll_threshold;
        assert_eq!(
            HeaderStyle::for_scroll(app.layout.page_scroll_y, threshold),
            HeaderStyle::BASE
        );
        app.reduce(Message::PageScrolled { offset_y: 150.0 });
        assert_eq!(
            HeaderStyle::for_scroll(app.layout.page_scroll_y, threshold),
            HeaderStyle::SCROLLED
        );
    }

    #[test]
    fn smooth_page_scroll_tweens_to_target() {
        let mut app = build_test_app(3);
        let effects = app.reduce(Message::LinkPressed("#about".to_string()));
        for effect in effects {
            let _task = app.run_effect(effect);
        }
        assert!(app.page_tween.is_active());
        assert!(app.needs_tick());

        let mut frames = Vec::new();
        let done = std::time::Instant::now() + std::time::Duration::from_secs(5);
        app.handle_tick(done, &mut frames);
        assert_eq!(frames, vec![Effect::SetPageOffset(720.0)]);
        assert_eq!(app.nav.current_section.as_deref(), Some("about"));
    }
}
