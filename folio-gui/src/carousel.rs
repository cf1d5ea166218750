use std::time::Duration;

use folio_core::{PaginationState, Section, SlideTransition};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::sections::palette;

const ARROW_WIDTH: f32 = 44.0;
const GRID_SPACING: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    Previous,
    Next,
    GoTo(usize),
}

/// Windowed carousel state for one section: pagination plus the slide
/// that plays after each accepted navigation
#[derive(Debug, Clone)]
pub struct Carousel {
    section: Section,
    pagination: PaginationState,
    transition: SlideTransition,
}

impl Carousel {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            pagination: section.options().pagination(),
            transition: SlideTransition::mounted(),
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Apply a navigation request. Rejected requests change nothing.
    pub fn update(&mut self, message: CarouselMessage, total_items: usize) -> bool {
        let from_page = self.pagination.current_page();
        let accepted = match message {
            CarouselMessage::Previous => self.pagination.previous(total_items),
            CarouselMessage::Next => self.pagination.next(total_items),
            CarouselMessage::GoTo(page) => self.pagination.go_to(page, total_items),
        };

        if accepted {
            log::debug!(
                "{} carousel: page {} -> {} ({:?})",
                self.section.id(),
                from_page,
                self.pagination.current_page(),
                self.pagination.direction()
            );
            self.transition
                .begin(self.pagination.direction(), from_page);
        }
        accepted
    }

    /// Collection was replaced (e.g. after a reload)
    pub fn reset_items(&mut self, total_items: usize) {
        self.pagination.clamp_to(total_items);
        self.transition = SlideTransition::mounted();
    }

    pub fn is_animating(&self, total_items: usize) -> bool {
        self.transition.is_animating(self.visible_len(total_items))
    }

    pub fn tick(&mut self, dt: Duration, total_items: usize) {
        let len = self.visible_len(total_items);
        self.transition.tick(dt, len);
    }

    fn visible_page(&self) -> usize {
        self.transition
            .outgoing_page()
            .unwrap_or(self.pagination.current_page())
    }

    fn visible_len(&self, total_items: usize) -> usize {
        let (start, end) = self.pagination.window_range(total_items);
        end - start
    }

    /// Arrows, sliding grid and dots. `render` receives each item, its
    /// index within the window and the opacity it should be drawn with.
    pub fn view<'a, T, F>(&self, items: &'a [T], columns: usize, render: F) -> Element<'a, Message>
    where
        F: Fn(&'a T, usize, f32) -> Element<'a, Message>,
    {
        let window = self.pagination.page_window(self.visible_page(), items);
        let window_opacity = self.transition.opacity();

        let cells: Vec<Element<'a, Message>> = window
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let alpha = window_opacity * self.transition.item_opacity(index);
                render(item, index, alpha)
            })
            .collect();
        let grid = grid(cells, columns);

        // horizontal slide expressed as uneven side spacing
        let offset = self.transition.offset();
        let sliding = row![
            Space::with_width(Length::Fixed(offset.max(0.0))),
            grid,
            Space::with_width(Length::Fixed((-offset).max(0.0))),
        ]
        .width(Length::Fill);

        let total = items.len();
        let show_controls = self.pagination.show_controls(total);

        let previous: Element<'a, Message> = if show_controls && self.pagination.has_previous() {
            self.arrow("‹", CarouselMessage::Previous)
        } else {
            Space::with_width(Length::Fixed(ARROW_WIDTH)).into()
        };
        let next: Element<'a, Message> = if show_controls && self.pagination.has_next(total) {
            self.arrow("›", CarouselMessage::Next)
        } else {
            Space::with_width(Length::Fixed(ARROW_WIDTH)).into()
        };

        let body = row![previous, sliding, next]
            .spacing(12)
            .align_y(Alignment::Center);

        if !show_controls {
            return body.into();
        }

        column![body, self.dots(total)]
            .spacing(32)
            .align_x(Alignment::Center)
            .into()
    }

    fn arrow<'a>(&self, glyph: &'a str, message: CarouselMessage) -> Element<'a, Message> {
        button(text(glyph).size(28).color(palette::TEXT))
            .on_press(Message::Carousel(self.section, message))
            .style(button::secondary)
            .width(Length::Fixed(ARROW_WIDTH))
            .padding(6)
            .into()
    }

    fn dots<'a>(&self, total_items: usize) -> Element<'a, Message> {
        let current = self.pagination.current_page();
        let dots = (1..=self.pagination.page_count(total_items)).map(|page| -> Element<'a, Message> {
            let (glyph, color) = if page == current {
                ("●", palette::ACCENT)
            } else {
                ("○", palette::MUTED)
            };
            button(text(glyph).size(16).color(color))
                .on_press(Message::Carousel(
                    self.section,
                    CarouselMessage::GoTo(page),
                ))
                .style(button::text)
                .padding(2)
                .into()
        });
        row(dots).spacing(8).align_y(Alignment::Center).into()
    }
}

/// Lay `cells` out in rows of `columns`, padding the last row so widths line up
pub fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut current: Vec<Element<'a, Message>> = Vec::with_capacity(columns);

    for cell in cells {
        current.push(
            container(cell)
                .width(Length::FillPortion(1))
                .into(),
        );
        if current.len() == columns {
            rows.push(row(std::mem::take(&mut current)).spacing(GRID_SPACING).into());
        }
    }
    if !current.is_empty() {
        while current.len() < columns {
            current.push(Space::with_width(Length::FillPortion(1)).into());
        }
        rows.push(row(current).spacing(GRID_SPACING).into());
    }

    column(rows)
        .spacing(GRID_SPACING)
        .width(Length::Fill)
        .into()
}
