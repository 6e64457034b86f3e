use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(String),
    PageScrolled {
        offset_y: f32,
    },
    CarouselScrolled {
        offset_x: f32,
    },
    CarouselPrev,
    CarouselNext,
    CarouselDot(usize),
    TouchStarted {
        x: f32,
        y: f32,
    },
    TouchEnded {
        x: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactMessageChanged(String),
    ContactSubmit,
    ContactSubmitted {
        error: Option<String>,
    },
    DismissNotice,
    Tick(Instant),
}
