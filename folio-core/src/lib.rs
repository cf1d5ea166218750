pub mod config;
pub mod error;
pub mod firestore;
pub mod icons;
pub mod layout;
pub mod models;
pub mod motion;
pub mod pagination;
pub mod provider;

pub use config::FolioConfig;
pub use error::FolioError;
pub use firestore::FirestoreClient;
pub use icons::{Icon, IconSet, SocialKind};
pub use layout::{
    BackgroundTone, NAV_LINKS, PAGINATION_THRESHOLD, Section, SectionLayout, SectionOptions,
    footer_text, layout_for,
};
pub use models::{
    Achievement, BlogPost, Certification, Experience, MainInfo, PortfolioData, Project, Skill,
    SocialLink, SocialLinks,
};
pub use motion::{SlidePhase, SlideTransition, SpringConfig};
pub use pagination::{DEFAULT_PAGE_SIZE, Direction, PaginationState, WindowedPaginator};
pub use provider::{CollectionName, FetchState, PortfolioSource, fetch_portfolio, load_portfolio};

impl PortfolioData {
    /// Number of items a section displays
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Hero | Section::Contact => 1,
            Section::Achievements => self.achievements.len(),
            Section::Projects => self.projects.len(),
            Section::Experience => self.experience.len(),
            Section::Certifications => self.certifications.len(),
        }
    }

    pub fn layout(&self, section: Section) -> SectionLayout {
        layout_for(section, self.section_len(section))
    }
}
