use super::super::super::messages::Message;
use super::super::super::state::{App, CAROUSEL_SCROLL_ID, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::carousel::ScrollCommand;
use crate::contact;
use iced::Event;
use iced::Task;
use iced::event;
use iced::touch;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::time::Instant;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollCarousel(command) => self.scroll_carousel(command),
            Effect::ScrollPage(command) => self.scroll_page(command),
            Effect::SetCarouselOffset(offset) => carousel_offset_task(offset),
            Effect::SetPageOffset(offset) => page_offset_task(offset),
            Effect::SubmitContact(form) => {
                let endpoint = self.config.contact_endpoint.clone();
                Task::perform(contact::submit(endpoint, form), |result| {
                    Message::ContactSubmitted {
                        error: result.err().map(|err| format!("{err:#}")),
                    }
                })
            }
        }
    }

    fn scroll_carousel(&mut self, command: ScrollCommand) -> Task<Message> {
        self.carousel_tween
            .start(self.layout.carousel_scroll_x, command.offset, Instant::now());
        Task::none()
    }

    fn scroll_page(&mut self, command: ScrollCommand) -> Task<Message> {
        self.page_tween
            .start(self.layout.page_scroll_y, command.offset, Instant::now());
        Task::none()
    }
}

fn carousel_offset_task(offset: f32) -> Task<Message> {
    scrollable::scroll_to(
        CAROUSEL_SCROLL_ID.clone(),
        AbsoluteOffset { x: offset, y: 0.0 },
    )
}

fn page_offset_task(offset: f32) -> Task<Message> {
    scrollable::scroll_to(PAGE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: offset })
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Scrollables capture touch, so swipes are read before the status check.
    match &event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            return Some(Message::TouchStarted {
                x: position.x,
                y: position.y,
            });
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            return Some(Message::TouchEnded { x: position.x });
        }
        _ => {}
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    #[test]
    fn touch_is_read_even_when_captured() {
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(300.0, 40.0),
        });
        let message = runtime_event_to_message(pressed, event::Status::Captured, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::TouchStarted { x, y }) if x == 300.0 && y == 40.0
        ));

        let lifted = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: Point::new(200.0, 40.0),
        });
        let message = runtime_event_to_message(lifted, event::Status::Ignored, window::Id::unique());
        assert!(matches!(message, Some(Message::TouchEnded { x }) if x == 200.0));
    }

    #[test]
    fn resize_maps_to_window_message() {
        let resized = Event::Window(window::Event::Resized(Size::new(900.0, 700.0)));
        let message = runtime_event_to_message(resized, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 900.0 && height == 700.0
        ));
    }
}
