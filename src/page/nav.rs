use super::SectionBounds;

/// The last section, in document order, whose top (less `lead`) has been
/// scrolled past.
pub fn active_section(sections: &[SectionBounds], scroll_y: f32, lead: f32) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - lead)
        .last()
        .map(|section| section.id.as_str())
}

/// One flag per nav link target; only links pointing at `current` are set.
pub fn active_link_flags<'a>(
    targets: impl IntoIterator<Item = &'a str>,
    current: Option<&str>,
) -> Vec<bool> {
    targets
        .into_iter()
        .map(|target| {
            let target = target.strip_prefix('#').unwrap_or(target);
            !target.is_empty() && Some(target) == current
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0),
            SectionBounds::new("about", 800.0),
            SectionBounds::new("projects", 1600.0),
        ]
    }

    #[test]
    fn section_activates_two_hundred_pixels_early() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 599.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 600.0, 200.0), Some("about"));
        assert_eq!(active_section(&sections, 5000.0, 200.0), Some("projects"));
    }

    #[test]
    fn nothing_is_active_above_the_first_section() {
        let sections = vec![SectionBounds::new("about", 900.0)];
        assert_eq!(active_section(&sections, 10.0, 200.0), None);
    }

    #[test]
    fn exactly_the_matching_link_is_flagged() {
        let flags = active_link_flags(["#home", "#about", "#projects"], Some("about"));
        assert_eq!(flags, vec![false, true, false]);

        let none = active_link_flags(["#", "#about"], None);
        assert_eq!(none, vec![false, false]);
    }
}
