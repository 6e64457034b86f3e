use super::super::state::App;
use super::Effect;
use crate::site::SectionKind;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_carousel_prev(&mut self, effects: &mut Vec<Effect>) {
        if let Some(command) = self.carousel.as_mut().and_then(|c| c.on_prev()) {
            effects.push(Effect::ScrollCarousel(command));
        }
    }

    pub(super) fn handle_carousel_next(&mut self, effects: &mut Vec<Effect>) {
        if let Some(command) = self.carousel.as_mut().and_then(|c| c.on_next()) {
            effects.push(Effect::ScrollCarousel(command));
        }
    }

    pub(super) fn handle_carousel_dot(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if let Some(command) = self
            .carousel
            .as_mut()
            .and_then(|c| c.on_dot_activate(index))
        {
            effects.push(Effect::ScrollCarousel(command));
        }
    }

    pub(super) fn handle_carousel_scrolled(&mut self, offset_x: f32, now: Instant) {
        if !offset_x.is_finite() {
            return;
        }
        self.layout.carousel_scroll_x = offset_x.max(0.0);
        // Our own tween frames echo back as scroll events; only user scrolling
        // should restart the settle timer.
        if self.carousel_tween.is_active() {
            return;
        }
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.on_container_scroll(now);
        }
    }

    pub(super) fn handle_touch_started(&mut self, x: f32, y: f32) {
        if !self.touch_on_projects(y) {
            return;
        }
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.on_touch_start(x);
        }
    }

    pub(super) fn handle_touch_ended(&mut self, x: f32, effects: &mut Vec<Effect>) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        if let Some(command) = carousel.on_touch_end(x) {
            debug!(x, index = carousel.current_index(), "Swipe moved the carousel");
            effects.push(Effect::ScrollCarousel(command));
        }
    }

    /// Whether a window y coordinate falls inside the projects section.
    fn touch_on_projects(&self, y: f32) -> bool {
        let min_height = self.config.min_section_height;
        let section_height = self.layout.section_height(min_height);
        let content_y = y + self.layout.page_scroll_y;
        self.layout
            .sections(self.site.section_ids(), min_height)
            .iter()
            .zip(&self.site.sections)
            .filter(|(_, section)| section.kind == SectionKind::Projects)
            .any(|(bounds, _)| content_y >= bounds.top && content_y < bounds.top + section_height)
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32, now: Instant) {
        self.layout.resize(width, height);
        self.padding_settle.schedule(now);
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.on_resize(now);
        }
    }

    /// Debounced header pass: pick the header height for the new width and
    /// recompute section tops under it.
    pub(super) fn settle_padding(&mut self) {
        let before = self.layout.header_height;
        self.layout.apply_header_height(&self.config);
        if self.layout.header_height != before {
            debug!(
                from = before,
                to = self.layout.header_height,
                "Header height changed"
            );
        }
        self.refresh_nav();
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::test_support::build_test_app;
    use super::*;
    use crate::carousel::ScrollCommand;
    use std::time::Duration;

    fn scroll_carousel(offset: f32) -> Effect {
        Effect::ScrollCarousel(ScrollCommand { offset })
    }

    #[test]
    fn next_and_prev_move_one_card_and_stop_at_the_ends() {
        let mut app = build_test_app(6);
        assert!(app.reduce(Message::CarouselPrev).is_empty());

        assert_eq!(app.reduce(Message::CarouselNext), vec![scroll_carousel(352.0)]);
        assert_eq!(app.reduce(Message::CarouselNext), vec![scroll_carousel(704.0)]);
        assert_eq!(app.reduce(Message::CarouselNext), vec![scroll_carousel(1056.0)]);
        assert!(app.reduce(Message::CarouselNext).is_empty());

        let display = app.carousel.as_ref().expect("mounted").display();
        assert!(display.prev_enabled);
        assert!(!display.next_enabled);
        assert_eq!(
            display.active_dots,
            vec![false, false, false, true, true, true]
        );

        assert_eq!(app.reduce(Message::CarouselPrev), vec![scroll_carousel(704.0)]);
    }

    #[test]
    fn dot_past_the_end_clamps_to_last_full_view() {
        let mut app = build_test_app(6);
        assert_eq!(app.reduce(Message::CarouselDot(5)), vec![scroll_carousel(1056.0)]);
        assert!(app.reduce(Message::CarouselDot(6)).is_empty());
    }

    #[test]
    fn free_scroll_settles_to_nearest_card_after_quiet_period() {
        let mut app = build_test_app(6);
        let start = Instant::now();
        app.handle_carousel_scrolled(500.0, start);
        assert!(app.needs_tick());

        let mut effects = Vec::new();
        app.handle_tick(start + Duration::from_millis(50), &mut effects);
        assert_eq!(app.carousel.as_ref().expect("mounted").current_index(), 0);

        app.handle_tick(start + Duration::from_millis(100), &mut effects);
        assert!(effects.is_empty());
        // 500 / 352 rounds to 1
        assert_eq!(app.carousel.as_ref().expect("mounted").current_index(), 1);
        assert!(!app.needs_tick());
    }

    #[test]
    fn resize_to_small_viewport_shows_one_card_and_compact_header() {
        let mut app = build_test_app(6);
        let start = Instant::now();
        app.handle_window_resized(500.0, 800.0, start);
        assert_eq!(app.layout.header_height, 80.0);
        assert!(!app.layout.is_compact_header());

        let mut effects = Vec::new();
        app.handle_tick(start + Duration::from_millis(250), &mut effects);
        assert!(effects.is_empty());

        let carousel = app.carousel.as_ref().expect("mounted");
        assert_eq!(carousel.items_per_view(), 1);
        assert_eq!(carousel.display().active_dots.iter().filter(|on| **on).count(), 1);
        assert_eq!(app.layout.header_height, 124.0);
        assert!(app.layout.is_compact_header());
        assert!(!app.needs_tick());
    }

    #[test]
    fn widening_past_the_end_scrolls_back_into_range() {
        let mut app = build_test_app(6);
        let start = Instant::now();
        app.handle_window_resized(500.0, 800.0, start);
        let mut effects = Vec::new();
        app.handle_tick(start + Duration::from_millis(250), &mut effects);
        app.reduce(Message::CarouselDot(5));
        assert_eq!(app.carousel.as_ref().expect("mounted").current_index(), 5);

        let later = start + Duration::from_secs(1);
        app.handle_window_resized(1280.0, 800.0, later);
        effects.clear();
        app.handle_tick(later + Duration::from_millis(250), &mut effects);
        assert_eq!(effects, vec![scroll_carousel(1056.0)]);
        assert_eq!(app.carousel.as_ref().expect("mounted").current_index(), 3);
    }

    #[test]
    fn swipe_left_past_threshold_advances() {
        let mut app = build_test_app(6);
        // projects spans 1520..2240 in page coordinates
        app.reduce(Message::PageScrolled { offset_y: 1440.0 });
        app.reduce(Message::TouchStarted { x: 300.0, y: 300.0 });
        assert_eq!(
            app.reduce(Message::TouchEnded { x: 200.0 }),
            vec![scroll_carousel(352.0)]
        );

        app.reduce(Message::TouchStarted { x: 300.0, y: 300.0 });
        assert!(app.reduce(Message::TouchEnded { x: 260.0 }).is_empty());
    }

    #[test]
    fn swipes_outside_the_projects_section_are_ignored() {
        let mut app = build_test_app(6);
        // Viewing "about" (800..1520); the touch lands at page y 1000.
        app.reduce(Message::PageScrolled { offset_y: 720.0 });
        app.reduce(Message::TouchStarted { x: 300.0, y: 280.0 });
        assert!(app.reduce(Message::TouchEnded { x: 100.0 }).is_empty());
        assert_eq!(app.carousel.as_ref().expect("mounted").current_index(), 0);
    }

    #[test]
    fn button_press_during_pending_settle_keeps_the_new_index() {
        let mut app = build_test_app(6);
        let start = Instant::now();
        app.handle_carousel_scrolled(700.0, start);

        let effects = app.reduce(Message::CarouselNext);
        for effect in effects {
            let _task = app.run_effect(effect);
        }
        assert_eq!(app.carousel.as_ref().expect("mounted").current_index(), 1);

        // Drive the tween the way the runtime does, echoing each frame back
        // as a scroll event.
        let mut now = Instant::now();
        for _ in 0..60 {
            now += Duration::from_millis(16);
            let mut frames = Vec::new();
            app.handle_tick(now, &mut frames);
            for frame in frames {
                if let Effect::SetCarouselOffset(offset) = frame {
                    app.handle_carousel_scrolled(offset, now);
                }
            }
        }

        let carousel = app.carousel.as_ref().expect("mounted");
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(app.layout.carousel_scroll_x, 352.0);
        assert_eq!(
            carousel.display().active_dots,
            vec![false, true, true, true, false, false]
        );
    }

    #[test]
    fn tween_frames_do_not_restart_the_settle_timer() {
        let mut app = build_test_app(6);
        let now = Instant::now();
        app.carousel_tween.start(0.0, 352.0, now);
        app.handle_carousel_scrolled(120.0, now);
        assert_eq!(app.layout.carousel_scroll_x, 120.0);
        assert!(!app.carousel.as_ref().expect("mounted").is_settling());
    }

    #[test]
    fn static_cards_ignore_carousel_input() {
        let mut site = super::super::test_support::sample_site(4);
        site.controls.dots = false;
        let (mut app, _task) = App::bootstrap(site, crate::config::AppConfig::default());
        assert!(app.carousel.is_none());
        assert!(app.reduce(Message::CarouselNext).is_empty());
        assert!(app.reduce(Message::CarouselDot(1)).is_empty());
    }
}
