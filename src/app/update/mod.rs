use crate::carousel::ScrollCommand;
use crate::contact::ContactForm;

mod carousel;
mod contact;
mod core;
mod page;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ScrollCarousel(ScrollCommand),
    ScrollPage(ScrollCommand),
    /// One tween frame for the card strip.
    SetCarouselOffset(f32),
    /// One tween frame for the page.
    SetPageOffset(f32),
    SubmitContact(ContactForm),
}
