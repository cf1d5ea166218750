use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationState};

/// Collections shorter than this are laid out in full without a carousel
pub const PAGINATION_THRESHOLD: usize = 4;

const PAGINATED_COLUMNS: usize = 3;
const CERTIFICATION_COLUMNS: usize = 2;

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Achievements,
    Projects,
    Experience,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Achievements,
        Section::Projects,
        Section::Experience,
        Section::Certifications,
        Section::Contact,
    ];

    /// Anchor id used by the header links
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Achievements => "achievements",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    /// Heading shown above the section; the hero has none
    pub fn title(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::Achievements => Some("Key Achievements"),
            Section::Projects => Some("Featured Projects"),
            Section::Experience => Some("Work Experience"),
            Section::Certifications => Some("Certifications & Training"),
            Section::Contact => Some("Get In Touch"),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
    }

    /// Sections driven by a [`PaginationState`] once they are long enough
    pub fn is_pageable(self) -> bool {
        matches!(
            self,
            Section::Achievements | Section::Projects | Section::Certifications
        )
    }

    /// Carousel settings of this section
    pub fn options(self) -> SectionOptions {
        match self {
            Section::Achievements => SectionOptions {
                background_tone: BackgroundTone::Alternate,
                ..SectionOptions::default()
            },
            Section::Certifications => SectionOptions {
                grid_columns: CERTIFICATION_COLUMNS,
                background_tone: BackgroundTone::Alternate,
                ..SectionOptions::default()
            },
            _ => SectionOptions::default(),
        }
    }
}

/// How a section arranges its items for a given count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    Hidden,
    /// Every item at once, no arrows, no dots
    Unpaginated { columns: usize },
    /// Windowed carousel; controls still depend on the page count
    Paginated { columns: usize },
}

impl SectionLayout {
    pub fn is_paginated(self) -> bool {
        matches!(self, SectionLayout::Paginated { .. })
    }

    pub fn columns(self) -> usize {
        match self {
            SectionLayout::Hidden => 0,
            SectionLayout::Unpaginated { columns } | SectionLayout::Paginated { columns } => {
                columns
            }
        }
    }
}

/// Decide the layout of `section` holding `count` items.
/// Paginated sections take their column count from [`Section::options`].
pub fn layout_for(section: Section, count: usize) -> SectionLayout {
    let paginated = SectionLayout::Paginated {
        columns: section.options().grid_columns,
    };

    match section {
        // the timeline heading stays even without entries
        Section::Experience => SectionLayout::Unpaginated { columns: 1 },
        _ if count == 0 => SectionLayout::Hidden,
        Section::Hero | Section::Contact => SectionLayout::Unpaginated { columns: 1 },
        // projects always go through the carousel, controls hide themselves
        Section::Projects => paginated,
        Section::Achievements if count < PAGINATION_THRESHOLD => {
            SectionLayout::Unpaginated { columns: count }
        }
        Section::Certifications if count < PAGINATION_THRESHOLD => SectionLayout::Unpaginated {
            columns: count.min(CERTIFICATION_COLUMNS),
        },
        Section::Achievements | Section::Certifications => paginated,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundTone {
    #[default]
    Base,
    Alternate,
}

/// Per-section carousel settings. Only `page_size` affects pagination;
/// `grid_columns` sets how many cards a paginated window puts side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOptions {
    pub page_size: usize,
    pub grid_columns: usize,
    pub background_tone: BackgroundTone,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            grid_columns: PAGINATED_COLUMNS,
            background_tone: BackgroundTone::Base,
        }
    }
}

impl SectionOptions {
    pub fn pagination(&self) -> PaginationState {
        PaginationState::new(self.page_size)
    }
}

/// Header links as (label, section)
pub const NAV_LINKS: [(&str, Section); 4] = [
    ("Achievements", Section::Achievements),
    ("Projects", Section::Projects),
    ("Experience", Section::Experience),
    ("Contact", Section::Contact),
];

pub fn footer_text(name: &str) -> String {
    footer_text_for_year(time::OffsetDateTime::now_utc().year(), name)
}

fn footer_text_for_year(year: i32, name: &str) -> String {
    format!("© {} {}. All Rights Reserved.", year, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_are_hidden() {
        for section in Section::ALL {
            if section == Section::Experience {
                continue;
            }
            assert_eq!(layout_for(section, 0), SectionLayout::Hidden);
        }
    }

    #[test]
    fn test_achievement_layouts() {
        assert_eq!(
            layout_for(Section::Achievements, 1),
            SectionLayout::Unpaginated { columns: 1 }
        );
        assert_eq!(
            layout_for(Section::Achievements, 2),
            SectionLayout::Unpaginated { columns: 2 }
        );
        assert_eq!(
            layout_for(Section::Achievements, 3),
            SectionLayout::Unpaginated { columns: 3 }
        );
        assert_eq!(
            layout_for(Section::Achievements, 4),
            SectionLayout::Paginated { columns: 3 }
        );
        assert_eq!(
            layout_for(Section::Achievements, 10),
            SectionLayout::Paginated { columns: 3 }
        );
    }

    #[test]
    fn test_certification_layouts() {
        assert_eq!(
            layout_for(Section::Certifications, 1),
            SectionLayout::Unpaginated { columns: 1 }
        );
        assert_eq!(
            layout_for(Section::Certifications, 2),
            SectionLayout::Unpaginated { columns: 2 }
        );
        assert_eq!(
            layout_for(Section::Certifications, 3),
            SectionLayout::Unpaginated { columns: 2 }
        );
        assert_eq!(
            layout_for(Section::Certifications, 4),
            SectionLayout::Paginated { columns: 2 }
        );
        assert_eq!(
            layout_for(Section::Certifications, 9),
            SectionLayout::Paginated { columns: 2 }
        );
    }

    #[test]
    fn test_projects_always_paginate_but_hide_controls_when_short() {
        let layout = layout_for(Section::Projects, 2);
        assert!(layout.is_paginated());
        let options = Section::Projects.options();
        assert!(!options.pagination().show_controls(2));
        assert!(options.pagination().show_controls(4));
    }

    #[test]
    fn test_experience_is_a_plain_list() {
        assert_eq!(
            layout_for(Section::Experience, 0),
            SectionLayout::Unpaginated { columns: 1 }
        );
        assert_eq!(
            layout_for(Section::Experience, 7),
            SectionLayout::Unpaginated { columns: 1 }
        );
    }

    #[test]
    fn test_section_ids_and_titles() {
        assert_eq!(Section::Achievements.title(), Some("Key Achievements"));
        assert_eq!(
            Section::Certifications.title(),
            Some("Certifications & Training")
        );
        assert_eq!(Section::Hero.title(), None);
        assert_eq!(Section::from_id("Projects"), Some(Section::Projects));
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(
            NAV_LINKS.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
            vec!["Achievements", "Projects", "Experience", "Contact"]
        );
    }

    #[test]
    fn test_options_only_hint_presentation() {
        let options = Section::Certifications.options();
        assert_eq!(options.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(options.grid_columns, 2);
        assert_eq!(options.background_tone, BackgroundTone::Alternate);
        assert_eq!(Section::Projects.options().grid_columns, 3);
        assert_eq!(Section::Projects.options().background_tone, BackgroundTone::Base);
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text_for_year(2025, "Ada Lovelace"),
            "© 2025 Ada Lovelace. All Rights Reserved."
        );
        assert!(footer_text("Ada").ends_with(" Ada. All Rights Reserved."));
    }
}
