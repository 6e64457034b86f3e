//! Page-level scroll behaviors: nav highlighting, anchor jumps, the header
//! transition, and content padding under the fixed header.

mod anchor;
mod header;
mod nav;
mod padding;

pub use anchor::anchor_target;
pub use header::HeaderStyle;
pub use nav::{active_link_flags, active_section};
pub use padding::{ContentPadding, header_height_for};

/// Top edge of a page section in scroll coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f32) -> Self {
        Self { id: id.into(), top }
    }
}

/// Stack equally tall sections below a leading padding.
pub fn stacked_sections<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    leading: f32,
    section_height: f32,
) -> Vec<SectionBounds> {
    ids.into_iter()
        .enumerate()
        .map(|(idx, id)| SectionBounds::new(id, leading + idx as f32 * section_height))
        .collect()
}
