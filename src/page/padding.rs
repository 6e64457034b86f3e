/// Header height for a viewport width. At or below `compact_below` the
/// title and nav links stack on two rows.
pub fn header_height_for(
    viewport_width: f32,
    compact_below: f32,
    header_height: f32,
    compact_header_height: f32,
) -> f32 {
    if viewport_width <= compact_below {
        compact_header_height
    } else {
        header_height
    }
}

/// Offsets that keep page content clear of the fixed header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentPadding {
    /// Padding above the first section.
    pub top: f32,
    /// Margin left above every section when it is scrolled into view.
    pub scroll_margin_top: f32,
}

impl ContentPadding {
    pub fn for_header(header_height: f32) -> Self {
        let height = if header_height.is_finite() {
            header_height.max(0.0)
        } else {
            0.0
        };
        Self {
            top: height,
            scroll_margin_top: height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_header_below_small_breakpoint() {
        assert_eq!(header_height_for(400.0, 576.0, 80.0, 124.0), 124.0);
        assert_eq!(header_height_for(1024.0, 576.0, 80.0, 124.0), 80.0);
    }

    #[test]
    fn padding_matches_header_height() {
        let padding = ContentPadding::for_header(80.0);
        assert_eq!(padding.top, 80.0);
        assert_eq!(padding.scroll_margin_top, 80.0);
        assert_eq!(ContentPadding::for_header(f32::NAN).top, 0.0);
    }
}
