use std::time::Duration;

use folio_core::motion::{experience_delay, hero_skill_delay, reveal_progress, stagger_delay};
use folio_core::{
    Achievement, BackgroundTone, Certification, Experience, Icon, IconSet, NAV_LINKS,
    PortfolioData, Project, Section, SectionLayout, SocialKind, SocialLink, footer_text,
};
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Color, Element, Length};

use crate::app::{Carousels, Message, page_scroll_id};
use crate::carousel::grid;

pub mod palette {
    use iced::Color;

    pub const TEXT: Color = Color::from_rgb(0.16, 0.15, 0.14);
    pub const BODY: Color = Color::from_rgb(0.34, 0.33, 0.31);
    pub const SUBTLE: Color = Color::from_rgb(0.47, 0.44, 0.42);
    pub const MUTED: Color = Color::from_rgb(0.66, 0.64, 0.62);
    pub const ACCENT: Color = Color::from_rgb(0.05, 0.58, 0.53);
    pub const BORDER: Color = Color::from_rgb(0.91, 0.90, 0.89);
    pub const SURFACE: Color = Color::WHITE;
    pub const ALTERNATE: Color = Color::from_rgb(0.98, 0.98, 0.98);
    pub const ERROR: Color = Color::from_rgb(0.73, 0.11, 0.11);
}

const CONTENT_WIDTH: f32 = 1100.0;
const SINGLE_CARD_WIDTH: f32 = 440.0;

/// Everything the page needs besides the message type
pub struct PageContext<'a> {
    pub data: &'a PortfolioData,
    pub carousels: &'a Carousels,
    pub since_load: Duration,
    pub notice: Option<&'a str>,
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(palette::SURFACE.into()),
            border: Border {
                color: palette::BORDER,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn link<'a>(label: String, url: &str, alpha: f32) -> Element<'a, Message> {
    button(text(label).size(14).color(fade(palette::ACCENT, alpha)))
        .on_press(Message::CopyLink(url.to_string()))
        .style(button::text)
        .padding(0)
        .into()
}

pub fn loading<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Loading portfolio...").size(22).color(palette::SUBTLE),
            text("Fetching profile, projects and experience").size(14).color(palette::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

pub fn failed(message: &str) -> Element<'_, Message> {
    container(
        column![
            text("Something went wrong").size(26).color(palette::TEXT),
            text(message).size(15).color(palette::ERROR),
            button(text("Try Again").size(16))
                .on_press(Message::Retry)
                .style(button::primary)
                .padding([10, 24]),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .max_width(560),
    )
    .center(Length::Fill)
    .into()
}

pub fn page<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let mut body = column![hero(ctx)].spacing(0);

    if let Some(section) = achievements(ctx) {
        body = body.push(section);
    }
    if let Some(section) = projects(ctx) {
        body = body.push(section);
    }
    if let Some(section) = experience(ctx) {
        body = body.push(section);
    }
    if let Some(section) = certifications(ctx) {
        body = body.push(section);
    }
    body = body.push(contact(ctx)).push(footer(ctx));

    column![
        header(ctx.data),
        scrollable(body).id(page_scroll_id()).height(Length::Fill),
    ]
    .into()
}

/// Sections actually drawn for `data`, in page order
pub fn visible_sections(data: &PortfolioData) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| data.layout(*section) != SectionLayout::Hidden)
        .collect()
}

/// Profiles linked from the header bar
fn header_socials(data: &PortfolioData) -> Vec<SocialLink> {
    data.social
        .present()
        .into_iter()
        .filter(|link| matches!(link.kind, SocialKind::GitHub | SocialKind::LinkedIn))
        .collect()
}

fn header<'a>(data: &'a PortfolioData) -> Element<'a, Message> {
    let brand = data.name.split_whitespace().next().unwrap_or_default();

    let nav = NAV_LINKS.iter().map(|(label, section)| -> Element<'a, Message> {
        button(text(*label).size(15).color(palette::BODY))
            .on_press(Message::ScrollTo(*section))
            .style(button::text)
            .into()
    });

    let socials = header_socials(data)
        .into_iter()
        .map(|link| -> Element<'a, Message> {
            button(text(link.icon().glyph()).size(18).color(palette::SUBTLE))
                .on_press(Message::CopyLink(link.url))
                .style(button::text)
                .into()
        });

    container(
        container(
            row![
                button(text(brand).size(22).color(palette::TEXT))
                    .on_press(Message::ScrollTo(Section::Hero))
                    .style(button::text),
                Space::with_width(Length::Fill),
                iced::widget::row(nav).spacing(12),
                Space::with_width(16),
                iced::widget::row(socials).spacing(4),
            ]
            .align_y(Alignment::Center),
        )
        .max_width(CONTENT_WIDTH),
    )
    .padding([12, 24])
    .center_x(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(palette::SURFACE.into()),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn section_frame<'a>(
    section: Section,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut inner = column![].spacing(40).align_x(Alignment::Center);
    if let Some(title) = section.title() {
        inner = inner.push(text(title).size(32).color(palette::TEXT));
    }
    inner = inner.push(content);

    let background = match section.options().background_tone {
        BackgroundTone::Base => palette::SURFACE,
        BackgroundTone::Alternate => palette::ALTERNATE,
    };

    container(inner.max_width(CONTENT_WIDTH))
        .padding([72, 24])
        .center_x(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

/// Shared layout switch for the three card sections
fn card_section<'a, T>(
    ctx: &PageContext<'a>,
    section: Section,
    items: &'a [T],
    render: fn(&'a T, usize, f32) -> Element<'a, Message>,
) -> Option<Element<'a, Message>> {
    let since_load = ctx.since_load;
    let content = match ctx.data.layout(section) {
        SectionLayout::Hidden => return None,
        SectionLayout::Paginated { columns } => match ctx.carousels.get(section) {
            Some(carousel) => carousel.view(items, columns, render),
            None => static_grid(items, columns, since_load, render),
        },
        SectionLayout::Unpaginated { columns } => {
            let grid = static_grid(items, columns, since_load, render);
            if columns == 1 {
                container(container(grid).max_width(SINGLE_CARD_WIDTH))
                    .center_x(Length::Fill)
                    .into()
            } else {
                grid
            }
        }
    };
    Some(section_frame(section, content))
}

fn static_grid<'a, T>(
    items: &'a [T],
    columns: usize,
    since_load: Duration,
    render: fn(&'a T, usize, f32) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let cells = items
        .iter()
        .enumerate()
        .map(|(index, item)| render(item, index, reveal_progress(since_load, stagger_delay(index))))
        .collect();
    grid(cells, columns)
}

fn hero<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let data = ctx.data;

    let skills = data.skills.iter().enumerate().map(|(i, skill)| -> Element<'a, Message> {
        let alpha = reveal_progress(ctx.since_load, hero_skill_delay(i));
        let icon = IconSet::Skill.resolve(&skill.icon);
        container(
            row![
                text(icon.glyph()).size(16).color(fade(palette::ACCENT, alpha)),
                text(&skill.name).size(14).color(fade(palette::BODY, alpha)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding([6, 14])
        .style(move |_theme| container::Style {
            background: Some(fade(palette::ALTERNATE, alpha).into()),
            border: Border {
                color: fade(palette::BORDER, alpha),
                width: 1.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        })
        .into()
    });

    let mut actions = row![
        button(text(format!("View My Work {}", Icon::ArrowRight.glyph())).size(16))
            .on_press(Message::ScrollTo(Section::Projects))
            .style(button::primary)
            .padding([12, 24]),
    ]
    .spacing(16);
    if let Some(mailto) = data.mailto() {
        actions = actions.push(
            button(text(format!("Get In Touch {}", Icon::Mail.glyph())).size(16))
                .on_press(Message::CopyLink(mailto))
                .style(button::secondary)
                .padding([12, 24]),
        );
    }

    let mut intro = column![
        text(format!("Hi, I'm {}.", data.name)).size(44).color(palette::SUBTLE),
        text(format!("A {}.", data.title)).size(44).color(palette::TEXT),
        text(&data.bio).size(18).color(palette::BODY),
    ]
    .spacing(12)
    .width(Length::FillPortion(3));

    if !data.skills.is_empty() {
        intro = intro.push(Space::with_height(16)).push(
            column![
                text("CORE TECHNOLOGIES").size(13).color(palette::SUBTLE),
                iced::widget::row(skills).spacing(10),
            ]
            .spacing(12),
        );
    }
    intro = intro.push(Space::with_height(24)).push(actions);

    let initials: String = data
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    let avatar = container(text(initials).size(64).color(palette::ACCENT))
        .center(Length::Fixed(220.0))
        .style(|_theme| container::Style {
            background: Some(palette::ALTERNATE.into()),
            border: Border {
                color: palette::ACCENT,
                width: 3.0,
                radius: 110.0.into(),
            },
            ..Default::default()
        });

    container(
        container(
            row![intro, container(avatar).center_x(Length::FillPortion(2))]
                .spacing(48)
                .align_y(Alignment::Center),
        )
        .max_width(CONTENT_WIDTH),
    )
    .padding([96, 24])
    .center_x(Length::Fill)
    .into()
}

fn achievements<'a>(ctx: &PageContext<'a>) -> Option<Element<'a, Message>> {
    card_section(
        ctx,
        Section::Achievements,
        &ctx.data.achievements,
        achievement_card,
    )
}

fn achievement_card(item: &Achievement, _index: usize, alpha: f32) -> Element<'_, Message> {
    let icon = IconSet::Achievement.resolve(&item.icon);
    let mut content = column![
        text(icon.glyph()).size(28).color(fade(palette::ACCENT, alpha)),
        text(&item.title).size(20).color(fade(palette::TEXT, alpha)),
        text(&item.description).size(15).color(fade(palette::BODY, alpha)),
    ]
    .spacing(12);
    if !item.url.trim().is_empty() {
        content = content.push(link(
            format!("View Proof {}", Icon::ArrowRight.glyph()),
            &item.url,
            alpha,
        ));
    }
    card(content)
}

fn projects<'a>(ctx: &PageContext<'a>) -> Option<Element<'a, Message>> {
    card_section(ctx, Section::Projects, &ctx.data.projects, project_card)
}

fn project_card(item: &Project, _index: usize, alpha: f32) -> Element<'_, Message> {
    let mut content = column![
        text(&item.title).size(20).color(fade(palette::TEXT, alpha)),
        text(&item.description).size(15).color(fade(palette::BODY, alpha)),
    ]
    .spacing(12);

    if !item.tags.is_empty() {
        content = content.push(
            text(item.tags.join("  ·  "))
                .size(13)
                .color(fade(palette::ACCENT, alpha)),
        );
    }

    let mut links = row![].spacing(20);
    if !item.repo_url.trim().is_empty() {
        links = links.push(link(
            format!("{} Source", Icon::GitHub.glyph()),
            &item.repo_url,
            alpha,
        ));
    }
    if !item.live_url.trim().is_empty() {
        links = links.push(link(
            format!("Live Demo {}", Icon::ArrowRight.glyph()),
            &item.live_url,
            alpha,
        ));
    }
    card(content.push(links))
}

fn certifications<'a>(ctx: &PageContext<'a>) -> Option<Element<'a, Message>> {
    card_section(
        ctx,
        Section::Certifications,
        &ctx.data.certifications,
        certification_card,
    )
}

fn certification_card(item: &Certification, _index: usize, alpha: f32) -> Element<'_, Message> {
    let icon = IconSet::Achievement.resolve(&item.icon);
    let mut content = column![
        text(icon.glyph()).size(26).color(fade(palette::ACCENT, alpha)),
        text(&item.name).size(19).color(fade(palette::TEXT, alpha)),
        text(&item.issuer).size(15).color(fade(palette::SUBTLE, alpha)),
        text(&item.year).size(13).color(fade(palette::MUTED, alpha)),
    ]
    .spacing(8);
    if !item.url.trim().is_empty() {
        content = content.push(link(
            format!("Verify Credential {}", Icon::ArrowRight.glyph()),
            &item.url,
            alpha,
        ));
    }
    card(content)
}

fn experience<'a>(ctx: &PageContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.data.layout(Section::Experience) == SectionLayout::Hidden {
        return None;
    }

    let entries = ctx
        .data
        .experience
        .iter()
        .enumerate()
        .map(|(i, job)| timeline_entry(job, reveal_progress(ctx.since_load, experience_delay(i))));

    Some(section_frame(
        Section::Experience,
        column(entries).spacing(32).max_width(760),
    ))
}

fn timeline_entry(job: &Experience, alpha: f32) -> Element<'_, Message> {
    let mut details = column![
        text(&job.duration).size(14).color(fade(palette::ACCENT, alpha)),
        text(&job.role).size(20).color(fade(palette::TEXT, alpha)),
        text(&job.company).size(15).color(fade(palette::SUBTLE, alpha)),
        text(&job.description).size(15).color(fade(palette::BODY, alpha)),
    ]
    .spacing(6);

    for responsibility in &job.responsibilities {
        details = details.push(
            row![
                text(Icon::CheckCircle.glyph()).size(13).color(fade(palette::ACCENT, alpha)),
                text(responsibility).size(14).color(fade(palette::SUBTLE, alpha)),
            ]
            .spacing(8),
        );
    }

    row![
        text(Icon::Briefcase.glyph()).size(22).color(fade(palette::ACCENT, alpha)),
        card(details),
    ]
    .spacing(16)
    .into()
}

fn contact<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let data = ctx.data;
    let mut content = column![
        text("● Available for new opportunities").size(14).color(palette::ACCENT),
        text("Let's Connect").size(36).color(palette::TEXT),
        text(
            "I'm currently open to new opportunities and collaborations. \
             Feel free to reach out if you want to build something amazing together."
        )
        .size(17)
        .color(palette::BODY),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .max_width(640);

    if let Some(mailto) = data.mailto() {
        content = content.push(
            button(text(format!("{} Say Hello", Icon::Mail.glyph())).size(18))
                .on_press(Message::CopyLink(mailto))
                .style(button::primary)
                .padding([14, 32]),
        );
    }

    let socials = data.social.present();
    if !socials.is_empty() {
        let buttons = socials.into_iter().map(|social| -> Element<'a, Message> {
            button(
                text(format!("{} {}", social.icon().glyph(), social.kind.name()))
                    .size(15)
                    .color(palette::BODY),
            )
            .on_press(Message::CopyLink(social.url))
            .style(button::secondary)
            .padding([8, 16])
            .into()
        });
        content = content.push(iced::widget::row(buttons).spacing(12));
    }

    section_frame(Section::Contact, content)
}

fn footer<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let mut content = column![text(footer_text(&ctx.data.name)).size(13).color(palette::MUTED)]
        .spacing(6)
        .align_x(Alignment::Center);
    if let Some(notice) = ctx.notice {
        content = content.push(text(notice).size(12).color(palette::SUBTLE));
    }
    container(content)
        .padding(24)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_sections_skip_empty_collections() {
        let mut data = PortfolioData {
            name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(
            visible_sections(&data),
            vec![Section::Hero, Section::Experience, Section::Contact]
        );

        data.projects.push(Project::default());
        assert_eq!(
            visible_sections(&data),
            vec![
                Section::Hero,
                Section::Projects,
                Section::Experience,
                Section::Contact
            ]
        );
    }

    #[test]
    fn test_header_links_github_and_linkedin_only() {
        let mut data = PortfolioData::default();
        assert!(header_socials(&data).is_empty());

        data.social.github = Some("https://github.com/ada".to_string());
        data.social.twitter = Some("https://twitter.com/ada".to_string());
        data.social.linkedin = Some("https://linkedin.com/in/ada".to_string());
        let kinds: Vec<SocialKind> = header_socials(&data).iter().map(|link| link.kind).collect();
        assert_eq!(kinds, vec![SocialKind::GitHub, SocialKind::LinkedIn]);
    }

    #[test]
    fn test_fade_scales_alpha() {
        assert_eq!(fade(palette::ACCENT, 0.5).a, 0.5);
        assert_eq!(fade(palette::ACCENT, 1.0), palette::ACCENT);
    }
}
