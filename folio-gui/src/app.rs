use std::time::{Duration, Instant};

use folio_core::motion::{
    FADE_DURATION, experience_delay, hero_skill_delay, stagger_delay,
};
use folio_core::{FetchState, FolioConfig, PortfolioData, Section, fetch_portfolio};
use iced::widget::scrollable::{self, RelativeOffset};
use iced::{Element, Subscription, Task};

use crate::carousel::{Carousel, CarouselMessage};
use crate::sections::{self, PageContext};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("portfolio-page")
}

#[derive(Debug, Clone)]
pub enum Message {
    PortfolioLoaded(Result<PortfolioData, String>),
    Retry,

    // Carousel navigation
    Carousel(Section, CarouselMessage),

    ScrollTo(Section),
    CopyLink(String),
    Tick(Instant),
}

/// One carousel per pageable section
#[derive(Debug, Clone)]
pub struct Carousels {
    achievements: Carousel,
    projects: Carousel,
    certifications: Carousel,
}

impl Carousels {
    fn new() -> Self {
        Self {
            achievements: Carousel::new(Section::Achievements),
            projects: Carousel::new(Section::Projects),
            certifications: Carousel::new(Section::Certifications),
        }
    }

    pub fn get(&self, section: Section) -> Option<&Carousel> {
        match section {
            Section::Achievements => Some(&self.achievements),
            Section::Projects => Some(&self.projects),
            Section::Certifications => Some(&self.certifications),
            _ => None,
        }
    }

    fn get_mut(&mut self, section: Section) -> Option<&mut Carousel> {
        match section {
            Section::Achievements => Some(&mut self.achievements),
            Section::Projects => Some(&mut self.projects),
            Section::Certifications => Some(&mut self.certifications),
            _ => None,
        }
    }

    fn all_mut(&mut self) -> [(Section, &mut Carousel); 3] {
        [
            (Section::Achievements, &mut self.achievements),
            (Section::Projects, &mut self.projects),
            (Section::Certifications, &mut self.certifications),
        ]
    }
}

pub struct AppState {
    config: FolioConfig,
    portfolio: FetchState<PortfolioData>,
    carousels: Carousels,
    since_load: Duration,
    last_tick: Option<Instant>,
    notice: Option<String>,
}

impl AppState {
    pub fn new(config: FolioConfig) -> Self {
        Self {
            config,
            portfolio: FetchState::Loading,
            carousels: Carousels::new(),
            since_load: Duration::ZERO,
            last_tick: None,
            notice: None,
        }
    }

    /// Anything still moving: entrance reveals or a carousel slide
    fn is_animating(&self) -> bool {
        let Some(data) = self.portfolio.data() else {
            return false;
        };
        if self.since_load < intro_duration(data) {
            return true;
        }
        Section::ALL
            .into_iter()
            .filter(|section| section.is_pageable() && data.layout(*section).is_paginated())
            .filter_map(|section| {
                self.carousels
                    .get(section)
                    .map(|carousel| carousel.is_animating(data.section_len(section)))
            })
            .any(|animating| animating)
    }
}

/// Time until every staggered entrance reveal has finished
fn intro_duration(data: &PortfolioData) -> Duration {
    let last = |len: usize| len.saturating_sub(1);
    let card_sections = [
        data.achievements.len(),
        data.projects.len(),
        data.certifications.len(),
    ]
    .into_iter()
    .map(|len| stagger_delay(last(len.min(folio_core::DEFAULT_PAGE_SIZE))))
    .max()
    .unwrap_or_default();

    card_sections
        .max(hero_skill_delay(last(data.skills.len())))
        .max(experience_delay(last(data.experience.len())))
        + FADE_DURATION
}

fn load(config: FolioConfig) -> Task<Message> {
    Task::perform(
        async move { fetch_portfolio(config).await.map_err(|e| e.to_string()) },
        Message::PortfolioLoaded,
    )
}

pub fn initialize() -> (AppState, Task<Message>) {
    let config = FolioConfig::from_env();
    let task = load(config.clone());
    (AppState::new(config), task)
}

pub fn title(state: &AppState) -> String {
    match state.portfolio.data() {
        Some(data) if !data.name.is_empty() => format!("{} | Portfolio", data.name),
        _ => "Portfolio".to_string(),
    }
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::PortfolioLoaded(result) => {
            match &result {
                Ok(data) => {
                    log::info!("Portfolio for '{}' ready", data.name);
                    for (section, carousel) in state.carousels.all_mut() {
                        carousel.reset_items(data.section_len(section));
                    }
                }
                Err(e) => log::error!("Failed to load portfolio: {}", e),
            }
            state.portfolio = FetchState::from_result(result);
            state.since_load = Duration::ZERO;
            state.last_tick = None;
        }
        Message::Retry => {
            state.portfolio = FetchState::Loading;
            state.notice = None;
            return load(state.config.clone());
        }
        Message::Carousel(section, carousel_message) => {
            let Some(data) = state.portfolio.data() else {
                return Task::none();
            };
            let total = data.section_len(section);
            if let Some(carousel) = state.carousels.get_mut(section) {
                if carousel.update(carousel_message, total) {
                    state.last_tick = None;
                }
            }
        }
        Message::ScrollTo(section) => {
            let Some(data) = state.portfolio.data() else {
                return Task::none();
            };
            // sections differ in height, so this lands near rather than exactly on the anchor
            let visible = sections::visible_sections(data);
            let Some(position) = visible.iter().position(|s| *s == section) else {
                return Task::none();
            };
            let y = if visible.len() > 1 {
                position as f32 / (visible.len() - 1) as f32
            } else {
                0.0
            };
            return scrollable::snap_to(page_scroll_id(), RelativeOffset { x: 0.0, y });
        }
        Message::CopyLink(url) => {
            state.notice = Some(format!("Copied {} to the clipboard", url));
            return iced::clipboard::write(url);
        }
        Message::Tick(now) => {
            let dt = state
                .last_tick
                .map(|last| now.saturating_duration_since(last))
                .unwrap_or(FRAME_INTERVAL);
            state.last_tick = Some(now);
            state.since_load = state.since_load.saturating_add(dt);

            if let Some(data) = state.portfolio.data() {
                let lengths: Vec<(Section, usize)> = Section::ALL
                    .into_iter()
                    .filter(|section| section.is_pageable())
                    .map(|section| (section, data.section_len(section)))
                    .collect();
                for (section, total) in lengths {
                    if let Some(carousel) = state.carousels.get_mut(section) {
                        carousel.tick(dt, total);
                    }
                }
            }
        }
    }

    Task::none()
}

pub fn subscription(state: &AppState) -> Subscription<Message> {
    if state.is_animating() {
        iced::time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

pub fn view(state: &AppState) -> Element<Message> {
    match &state.portfolio {
        FetchState::Loading => sections::loading(),
        FetchState::Failed(message) => sections::failed(message),
        FetchState::Loaded(data) => sections::page(&PageContext {
            data,
            carousels: &state.carousels,
            since_load: state.since_load,
            notice: state.notice.as_deref(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Achievement, Skill};

    fn loaded_state(achievements: usize) -> AppState {
        let mut state = AppState::new(FolioConfig::default());
        let data = PortfolioData {
            name: "Ada Lovelace".to_string(),
            achievements: (0..achievements).map(|_| Achievement::default()).collect(),
            ..Default::default()
        };
        let _ = update(&mut state, Message::PortfolioLoaded(Ok(data)));
        state
    }

    #[test]
    fn test_failed_load_then_retry() {
        let mut state = AppState::new(FolioConfig::default());
        let _ = update(
            &mut state,
            Message::PortfolioLoaded(Err("Network error: timeout".to_string())),
        );
        assert_eq!(state.portfolio.error(), Some("Network error: timeout"));
        assert!(!state.is_animating());

        let _ = update(&mut state, Message::Retry);
        assert!(state.portfolio.is_loading());
    }

    #[test]
    fn test_carousel_navigation_through_messages() {
        let mut state = loaded_state(7);
        let _ = update(
            &mut state,
            Message::Carousel(Section::Achievements, CarouselMessage::GoTo(3)),
        );
        let carousel = state.carousels.get(Section::Achievements).unwrap();
        assert_eq!(carousel.pagination().current_page(), 3);

        // out of range is ignored
        let _ = update(
            &mut state,
            Message::Carousel(Section::Achievements, CarouselMessage::Next),
        );
        let carousel = state.carousels.get(Section::Achievements).unwrap();
        assert_eq!(carousel.pagination().current_page(), 3);
    }

    #[test]
    fn test_reload_clamps_carousel_pages() {
        let mut state = loaded_state(12);
        let _ = update(
            &mut state,
            Message::Carousel(Section::Achievements, CarouselMessage::GoTo(4)),
        );
        let data = PortfolioData {
            achievements: vec![Achievement::default(); 5],
            ..Default::default()
        };
        let _ = update(&mut state, Message::PortfolioLoaded(Ok(data)));
        let carousel = state.carousels.get(Section::Achievements).unwrap();
        assert_eq!(carousel.pagination().current_page(), 2);
    }

    #[test]
    fn test_animation_stops_after_intro() {
        let mut state = loaded_state(2);
        assert!(state.is_animating());

        let start = Instant::now();
        for frame in 1..=120 {
            let _ = update(&mut state, Message::Tick(start + FRAME_INTERVAL * frame));
        }
        assert!(!state.is_animating());
    }

    #[test]
    fn test_intro_duration_accounts_for_skills() {
        let data = PortfolioData {
            skills: vec![Skill::default(); 3],
            ..Default::default()
        };
        assert_eq!(
            intro_duration(&data),
            Duration::from_millis(1000) + FADE_DURATION
        );
    }

    #[test]
    fn test_title_uses_name() {
        let state = loaded_state(0);
        assert_eq!(title(&state), "Ada Lovelace | Portfolio");
        assert_eq!(title(&AppState::new(FolioConfig::default())), "Portfolio");
    }
}
