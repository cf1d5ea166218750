use clap::{Args, Parser, Subcommand};
use folio_core::{
    Achievement, Certification, CollectionName, DEFAULT_PAGE_SIZE, Experience, FolioConfig,
    IconSet, PortfolioData, Project, Section, SectionLayout, WindowedPaginator, fetch_portfolio,
    footer_text,
};

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(about = "Fetch a Firestore-backed portfolio and print its sections")]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Firestore project id
    #[arg(long, global = true, env = folio_core::config::ENV_PROJECT)]
    project: Option<String>,
    /// Web API key appended to every request
    #[arg(long, global = true, env = folio_core::config::ENV_API_KEY)]
    api_key: Option<String>,
    /// Firestore REST base URL (e.g. an emulator)
    #[arg(long, global = true, env = folio_core::config::ENV_FIRESTORE_URL)]
    base_url: Option<String>,
    /// Database id
    #[arg(long, global = true, env = folio_core::config::ENV_DATABASE)]
    database: Option<String>,
}

impl SourceArgs {
    fn into_config(self) -> FolioConfig {
        let mut config = FolioConfig::from_env();
        if let Some(project) = self.project {
            config.project_id = project;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = Some(api_key);
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the name, title and how many items each collection holds
    Summary,
    /// Print one section, windowed like the carousel shows it
    Section {
        /// hero, achievements, projects, experience, certifications or contact
        name: String,
        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Print every page of a section in order
    Pages {
        name: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    // Validate the section name before hitting the network
    let action = match cli.command {
        Commands::Summary => None,
        Commands::Section {
            name,
            page,
            page_size,
        } => Some((parse_section(&name), SectionView::Page(page), page_size)),
        Commands::Pages { name, page_size } => {
            Some((parse_section(&name), SectionView::AllPages, page_size))
        }
    };

    let config = cli.source.into_config();
    let data = match fetch_portfolio(config).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load portfolio: {}", e);
            std::process::exit(1);
        }
    };

    match action {
        None => print_summary(&data),
        Some((section, view, page_size)) => print_section(&data, section, view, page_size),
    }

    Ok(())
}

fn parse_section(name: &str) -> Section {
    match Section::from_id(name) {
        Some(section) => section,
        None => {
            eprintln!(
                "Unknown section '{}'. Expected one of: {}",
                name,
                Section::ALL.map(Section::id).join(", ")
            );
            std::process::exit(1);
        }
    }
}

fn print_summary(data: &PortfolioData) {
    println!("{}", data.name);
    if !data.title.is_empty() {
        println!("{}", data.title);
    }
    println!();
    for collection in CollectionName::ALL {
        let count = match collection {
            CollectionName::Achievements => data.achievements.len(),
            CollectionName::Projects => data.projects.len(),
            CollectionName::BlogPosts => data.blog_posts.len(),
            CollectionName::Certifications => data.certifications.len(),
            CollectionName::Experience => data.experience.len(),
            CollectionName::Skills => data.skills.len(),
        };
        println!("  {:<16} {}", collection.as_str(), count);
    }
    println!();
    println!("{}", footer_text(&data.name));
}

#[derive(Clone, Copy)]
enum SectionView {
    Page(usize),
    AllPages,
}

fn print_section(data: &PortfolioData, section: Section, view: SectionView, page_size: usize) {
    if let Some(title) = section.title() {
        println!("{}", title);
        println!("{}", "=".repeat(title.chars().count()));
    }

    match section {
        Section::Hero => print_hero(data),
        Section::Contact => print_contact(data),
        Section::Achievements => print_items(
            data.layout(section),
            &data.achievements,
            view,
            page_size,
            describe_achievement,
        ),
        Section::Projects => print_items(
            data.layout(section),
            &data.projects,
            view,
            page_size,
            describe_project,
        ),
        Section::Experience => print_items(
            data.layout(section),
            &data.experience,
            view,
            page_size,
            describe_experience,
        ),
        Section::Certifications => print_items(
            data.layout(section),
            &data.certifications,
            view,
            page_size,
            describe_certification,
        ),
    }
}

fn print_items<T: Clone>(
    layout: SectionLayout,
    items: &[T],
    view: SectionView,
    page_size: usize,
    render: fn(&T, usize) -> Vec<String>,
) {
    match layout {
        SectionLayout::Hidden => {
            println!("(section hidden, no items)");
            return;
        }
        SectionLayout::Unpaginated { columns } => {
            println!("{} items, {} column(s), not paginated", items.len(), columns);
            println!();
            print_window(items, render);
            return;
        }
        SectionLayout::Paginated { .. } => {}
    }

    let mut paginator = WindowedPaginator::new(items.to_vec(), page_size);
    match view {
        SectionView::Page(page) => {
            if page != 1 && !paginator.go_to(page) {
                log::warn!(
                    "Page {} is out of range (1..={}), staying on page 1",
                    page,
                    paginator.page_count()
                );
            }
            print_page(&paginator, render);
        }
        SectionView::AllPages => {
            for (i, window) in paginator.pages().enumerate() {
                println!("-- page {} of {} --", i + 1, paginator.page_count());
                print_window(window, render);
            }
        }
    }
}

fn print_page<T>(paginator: &WindowedPaginator<T>, render: fn(&T, usize) -> Vec<String>) {
    println!(
        "page {} of {}",
        paginator.current_page(),
        paginator.page_count()
    );
    println!();
    print_window(paginator.current_window(), render);

    if paginator.show_controls() {
        let previous = if paginator.has_previous() { "‹ previous" } else { "" };
        let next = if paginator.has_next() { "next ›" } else { "" };
        println!("{:<12}{:>12}", previous, next);
        println!("{}", page_dots(paginator.current_page(), paginator.page_count()));
    }
}

fn print_window<T>(window: &[T], render: fn(&T, usize) -> Vec<String>) {
    for (index, item) in window.iter().enumerate() {
        for line in render(item, index) {
            println!("  {}", line);
        }
        println!();
    }
}

/// `●` for the current page, `○` for the others
fn page_dots(current: usize, count: usize) -> String {
    (1..=count)
        .map(|page| if page == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_achievement(item: &Achievement, _index: usize) -> Vec<String> {
    let icon = IconSet::Achievement.resolve(&item.icon);
    let mut lines = vec![format!("{} {}", icon.glyph(), item.title)];
    push_non_empty(&mut lines, &item.description);
    push_non_empty(&mut lines, &item.url);
    lines
}

fn describe_project(item: &Project, _index: usize) -> Vec<String> {
    let mut lines = vec![item.title.clone()];
    push_non_empty(&mut lines, &item.description);
    if !item.tags.is_empty() {
        lines.push(format!("[{}]", item.tags.join(", ")));
    }
    push_non_empty(&mut lines, &item.repo_url);
    push_non_empty(&mut lines, &item.live_url);
    lines
}

fn describe_experience(item: &Experience, _index: usize) -> Vec<String> {
    let mut lines = vec![
        format!("{} @ {}", item.role, item.company),
        item.duration.clone(),
    ];
    push_non_empty(&mut lines, &item.description);
    lines.extend(item.responsibilities.iter().map(|r| format!("  - {}", r)));
    lines
}

fn describe_certification(item: &Certification, _index: usize) -> Vec<String> {
    let mut lines = vec![item.name.clone()];
    let issued = [item.issuer.as_str(), item.year.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    push_non_empty(&mut lines, &issued);
    push_non_empty(&mut lines, &item.url);
    lines
}

fn push_non_empty(lines: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(value.to_string());
    }
}

fn print_hero(data: &PortfolioData) {
    println!("Hi, I'm {}.", data.name);
    println!("A {}.", data.title);
    if !data.bio.is_empty() {
        println!();
        println!("{}", data.bio);
    }
    if !data.skills.is_empty() {
        println!();
        println!("Core Technologies:");
        for skill in &data.skills {
            let icon = IconSet::Skill.resolve(&skill.icon);
            println!("  {} {}", icon.glyph(), skill.name);
        }
    }
}

fn print_contact(data: &PortfolioData) {
    match data.mailto() {
        Some(mailto) => println!("Say Hello: {}", mailto),
        None => println!("No email configured"),
    }
    for link in data.social.present() {
        println!("  {} {}: {}", link.icon().glyph(), link.kind.name(), link.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_dots() {
        assert_eq!(page_dots(2, 3), "○ ● ○");
        assert_eq!(page_dots(1, 1), "●");
        assert_eq!(page_dots(1, 0), "");
    }

    #[test]
    fn test_source_args_override_env() {
        let args = SourceArgs {
            project: Some("demo".to_string()),
            api_key: None,
            base_url: Some("http://localhost:8080/v1".to_string()),
            database: None,
        };
        let config = args.into_config();
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_describe_certification_skips_blank_parts() {
        let cert = Certification {
            name: "Cloud Architect".to_string(),
            year: "2024".to_string(),
            ..Default::default()
        };
        assert_eq!(
            describe_certification(&cert, 0),
            vec!["Cloud Architect".to_string(), "2024".to_string()]
        );
    }

    #[test]
    fn test_cli_parses_section_command() {
        let cli = Cli::parse_from([
            "folio-cli",
            "--project",
            "demo",
            "section",
            "projects",
            "--page",
            "2",
        ]);
        match cli.command {
            Commands::Section {
                name,
                page,
                page_size,
            } => {
                assert_eq!(name, "projects");
                assert_eq!(page, 2);
                assert_eq!(page_size, DEFAULT_PAGE_SIZE);
            }
            _ => panic!("Expected section command"),
        }
        assert_eq!(cli.source.project.as_deref(), Some("demo"));
    }
}
