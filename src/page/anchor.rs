use super::SectionBounds;

/// Scroll offset for an in-page link, or `None` when the link is not an
/// anchor, is the bare `#`, or names no section.
pub fn anchor_target(href: &str, sections: &[SectionBounds], header_height: f32) -> Option<f32> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    let section = sections.iter().find(|section| section.id == id)?;
    Some((section.top - header_height).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_sits_just_below_the_header() {
        let sections = vec![
            SectionBounds::new("home", 80.0),
            SectionBounds::new("contact", 2480.0),
        ];
        assert_eq!(anchor_target("#contact", &sections, 80.0), Some(2400.0));
        assert_eq!(anchor_target("#home", &sections, 120.0), Some(0.0));
    }

    #[test]
    fn non_anchors_and_unknown_ids_are_ignored() {
        let sections = vec![SectionBounds::new("home", 0.0)];
        assert_eq!(anchor_target("#", &sections, 80.0), None);
        assert_eq!(anchor_target("#missing", &sections, 80.0), None);
        assert_eq!(anchor_target("https://example.com", &sections, 80.0), None);
    }
}
