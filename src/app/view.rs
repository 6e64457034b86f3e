use super::messages::Message;
use super::state::{
    App, CARD_IMAGE_HEIGHT, CAROUSEL_SCROLL_ID, CONTROL_SPACING, CONTROL_WIDTH, DOT_SIZE,
    PAGE_PADDING_X, PAGE_SCROLL_ID, SECTION_PADDING_Y,
};
use crate::carousel::{CarouselDisplay, LayoutProbe};
use crate::page::HeaderStyle;
use crate::site::{Project, Section, SectionKind};
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Column, Row, Space, button, column, container, horizontal_space, image, mouse_area, opaque, row,
    scrollable, stack, text, text_input,
};
use iced::{Color, ContentFit, Element, Length, Shadow, Theme, Vector};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let section_height = self.layout.section_height(self.config.min_section_height);
        let padding = self.layout.padding();

        let mut sections: Column<'_, Message> =
            column![Space::with_height(Length::Fixed(padding.top))];
        for section in &self.site.sections {
            sections = sections.push(
                container(self.section_view(section))
                    .width(Length::Fill)
                    .height(Length::Fixed(section_height))
                    .padding([SECTION_PADDING_Y, PAGE_PADDING_X]),
            );
        }

        let page = scrollable(sections.width(Length::Fill))
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::PageScrolled {
                offset_y: viewport.absolute_offset().y,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = stack![page, self.header_view()];
        if let Some(notice) = self.notice {
            layers = layers.push(notice_overlay(notice.text()));
        }
        layers.into()
    }

    fn header_view(&self) -> Element<'_, Message> {
        let style = HeaderStyle::for_scroll(
            self.layout.page_scroll_y,
            self.config.header_scroll_threshold,
        );

        let links = self
            .site
            .nav
            .iter()
            .zip(self.nav.link_flags.iter().copied())
            .map(|(link, active)| {
                let look: ButtonStyle = if active {
                    button::primary
                } else {
                    button::text
                };
                button(text(link.label.as_str()))
                    .style(look)
                    .on_press(Message::LinkPressed(link.href.clone()))
                    .into()
            })
            .collect::<Vec<Element<'_, Message>>>();
        let nav = Row::with_children(links).spacing(8).align_y(Vertical::Center);
        let title = text(self.site.title.as_str()).size(22);

        let bar: Element<'_, Message> = if self.layout.is_compact_header() {
            column![title, nav].spacing(12).into()
        } else {
            row![title, horizontal_space(), nav]
                .align_y(Vertical::Center)
                .into()
        };

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(self.layout.header_height))
            .padding([16.0, PAGE_PADDING_X])
            .align_y(Vertical::Center)
            .style(move |theme: &Theme| header_style(theme, style))
            .into()
    }

    fn section_view<'a>(&'a self, section: &'a Section) -> Element<'a, Message> {
        let heading = text(section.title.as_str()).size(match section.kind {
            SectionKind::Hero => 44,
            _ => 30,
        });
        let mut content: Column<'a, Message> = column![heading].spacing(16);

        if section.kind == SectionKind::Hero && !self.site.tagline.is_empty() {
            content = content.push(text(self.site.tagline.as_str()).size(20));
        }
        if !section.body.is_empty() {
            content = content.push(text(section.body.as_str()).size(16));
        }
        match section.kind {
            SectionKind::Projects => content = content.push(self.projects_view()),
            SectionKind::Contact => content = content.push(self.contact_view()),
            SectionKind::Hero | SectionKind::Text => {}
        }
        content.into()
    }

    fn projects_view(&self) -> Element<'_, Message> {
        let card_width = self.layout.item_width();
        let cards = Row::with_children(
            self.site
                .projects
                .iter()
                .map(|project| project_card(project, card_width)),
        )
        .spacing(self.layout.gap());

        let Some(carousel) = self.carousel.as_ref() else {
            // No controller: the cards still scroll, just without controls.
            return scrollable(cards)
                .direction(Direction::Horizontal(Scrollbar::new()))
                .width(Length::Fill)
                .into();
        };

        let display = carousel.display();
        let strip = scrollable(cards)
            .direction(Direction::Horizontal(Scrollbar::new()))
            .id(CAROUSEL_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::CarouselScrolled {
                offset_x: viewport.absolute_offset().x,
            })
            .width(Length::Fixed(self.layout.container_width()));

        let prev = button(text("<").size(20))
            .width(Length::Fixed(CONTROL_WIDTH))
            .on_press_maybe(display.prev_enabled.then_some(Message::CarouselPrev));
        let next = button(text(">").size(20))
            .width(Length::Fixed(CONTROL_WIDTH))
            .on_press_maybe(display.next_enabled.then_some(Message::CarouselNext));

        column![
            row![prev, strip, next]
                .spacing(CONTROL_SPACING)
                .align_y(Vertical::Center),
            dots_view(display),
        ]
        .spacing(16)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
    }

    fn contact_view(&self) -> Element<'_, Message> {
        let form = &self.contact.form;
        let submit_label = if self.contact.in_flight {
            "Sending..."
        } else {
            "Send Message"
        };
        column![
            text_input("Your name", &form.name).on_input(Message::ContactNameChanged),
            text_input("Your email", &form.email).on_input(Message::ContactEmailChanged),
            text_input("Your message", &form.message)
                .on_input(Message::ContactMessageChanged)
                .on_submit(Message::ContactSubmit),
            button(submit_label)
                .style(button::primary)
                .on_press_maybe((!self.contact.in_flight).then_some(Message::ContactSubmit)),
        ]
        .spacing(12)
        .max_width(560.0)
        .into()
    }
}

fn project_card(project: &Project, width: f32) -> Element<'_, Message> {
    let mut card: Column<'_, Message> = column![].spacing(8);
    if let Some(path) = project.image.as_ref() {
        card = card.push(
            image(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fixed(CARD_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }
    card = card.push(text(project.title.as_str()).size(20));
    if !project.summary.is_empty() {
        card = card.push(text(project.summary.as_str()).size(14));
    }
    if !project.tags.is_empty() {
        card = card.push(text(project.tags.join(" · ")).size(12));
    }
    if let Some(link) = project.link.as_ref() {
        card = card.push(
            button(text("View project"))
                .style(button::secondary)
                .on_press(Message::LinkPressed(link.clone())),
        );
    }

    container(card)
        .width(Length::Fixed(width))
        .padding(16)
        .style(container::rounded_box)
        .into()
}

fn dots_view(display: &CarouselDisplay) -> Element<'_, Message> {
    let dots = display
        .active_dots
        .iter()
        .enumerate()
        .map(|(idx, active)| {
            let look: ButtonStyle = if *active {
                button::primary
            } else {
                button::secondary
            };
            button(text(""))
                .width(Length::Fixed(DOT_SIZE))
                .height(Length::Fixed(DOT_SIZE))
                .padding(0)
                .style(look)
                .on_press(Message::CarouselDot(idx))
                .into()
        })
        .collect::<Vec<Element<'_, Message>>>();
    Row::with_children(dots).spacing(8).into()
}

fn header_style(theme: &Theme, style: HeaderStyle) -> container::Style {
    let palette = theme.extended_palette();
    // Mostly opaque so the title stays readable over content; scrolling
    // deepens both the tint and the shadow.
    let background = Color {
        a: 0.85 + style.background_alpha,
        ..palette.background.base.color
    };
    container::Style {
        background: Some(background.into()),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, style.shadow.alpha),
            offset: Vector::new(0.0, style.shadow.offset_y),
            blur_radius: style.shadow.blur_radius,
        },
        ..container::Style::default()
    }
}

fn notice_overlay(message: &str) -> Element<'_, Message> {
    let dialog = container(
        column![
            text(message).size(18),
            button("OK")
                .style(button::primary)
                .on_press(Message::DismissNotice),
        ]
        .spacing(16)
        .align_x(iced::alignment::Horizontal::Center),
    )
    .padding(24)
    .max_width(420.0)
    .style(container::rounded_box);

    opaque(
        mouse_area(
            container(opaque(dialog))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
                    ..container::Style::default()
                }),
        )
        .on_press(Message::DismissNotice),
    )
}
