/// Drop shadow under the header, in CSS box-shadow terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderShadow {
    pub offset_y: f32,
    pub blur_radius: f32,
    pub alpha: f32,
}

/// Visual state of the fixed header. Depends on nothing but the scroll
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub shadow: HeaderShadow,
    /// Alpha of the white header background.
    pub background_alpha: f32,
    pub scrolled: bool,
}

impl HeaderStyle {
    pub const BASE: HeaderStyle = HeaderStyle {
        shadow: HeaderShadow {
            offset_y: 2.0,
            blur_radius: 15.0,
            alpha: 0.1,
        },
        background_alpha: 0.10,
        scrolled: false,
    };

    pub const SCROLLED: HeaderStyle = HeaderStyle {
        shadow: HeaderShadow {
            offset_y: 5.0,
            blur_radius: 15.0,
            alpha: 0.1,
        },
        background_alpha: 0.15,
        scrolled: true,
    };

    pub fn for_scroll(scroll_y: f32, threshold: f32) -> Self {
        if scroll_y > threshold {
            Self::SCROLLED
        } else {
            Self::BASE
        }
    }
}
