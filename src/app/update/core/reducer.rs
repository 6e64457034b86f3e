use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::LinkPressed(href) => self.handle_link_pressed(&href, &mut effects),
            Message::PageScrolled { offset_y } => self.handle_page_scrolled(offset_y),
            Message::CarouselScrolled { offset_x } => {
                self.handle_carousel_scrolled(offset_x, Instant::now());
            }
            Message::CarouselPrev => self.handle_carousel_prev(&mut effects),
            Message::CarouselNext => self.handle_carousel_next(&mut effects),
            Message::CarouselDot(index) => self.handle_carousel_dot(index, &mut effects),
            Message::TouchStarted { x, y } => self.handle_touch_started(x, y),
            Message::TouchEnded { x } => self.handle_touch_ended(x, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, Instant::now());
            }
            Message::ContactNameChanged(name) => self.contact.form.name = name,
            Message::ContactEmailChanged(email) => self.contact.form.email = email,
            Message::ContactMessageChanged(body) => self.contact.form.message = body,
            Message::ContactSubmit => self.handle_contact_submit(&mut effects),
            Message::ContactSubmitted { error } => self.handle_contact_submitted(error),
            Message::DismissNotice => self.notice = None,
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }

    pub(in crate::app) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.padding_settle.fire_if_due(now) {
            self.settle_padding();
        }

        let command = self
            .carousel
            .as_mut()
            .and_then(|carousel| carousel.tick(now, &self.layout));
        if let Some(command) = command {
            effects.push(Effect::ScrollCarousel(command));
        }

        if let Some(offset) = self.carousel_tween.tick(now) {
            self.layout.carousel_scroll_x = offset;
            effects.push(Effect::SetCarouselOffset(offset));
        }
        if let Some(offset) = self.page_tween.tick(now) {
            self.layout.page_scroll_y = offset;
            self.refresh_nav();
            effects.push(Effect::SetPageOffset(offset));
        }
    }
}
