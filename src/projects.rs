use dioxus::prelude::*;
use dioxus_router::Link;

use crate::image_fallback::{placeholder_initial, ImageFallbacks};
use crate::layout::{Placeholder, SectionHeader};
use crate::routes::Route;

pub const PAGE_SIZE: usize = 4;
const CARD_TECH_LIMIT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    WebApps,
    LandingPages,
    Saas,
    AiAutomation,
    ECommerce,
    Blockchain,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::WebApps,
        Category::LandingPages,
        Category::Saas,
        Category::AiAutomation,
        Category::ECommerce,
        Category::Blockchain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::WebApps => "Web Apps",
            Category::LandingPages => "Landing Pages",
            Category::Saas => "SaaS",
            Category::AiAutomation => "AI/Automation",
            Category::ECommerce => "E-commerce",
            Category::Blockchain => "Blockchain",
        }
    }

    fn admits(self, tag: Category) -> bool {
        self == Category::All || self == tag
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub live_link: &'static str,
    pub github_link: &'static str,
    pub category: Category,
    pub featured: bool,
}

const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "ProjectFlow",
        description: "An AI-powered project management webapp for developers with GitHub integration and real-time sync to collaborate with team members.",
        technologies: &["React", "Node.js", "AI/ML", "GitHub API", "WebSockets"],
        image: "/projectflow.png",
        live_link: "https://projectflowww.netlify.app",
        github_link: "https://github.com/BanjoTech/projectflow",
        category: Category::Saas,
        featured: true,
    },
    Project {
        id: 2,
        name: "OralRealtor",
        description: "A real estate webapp that connects real-estate investors and agents with seamless property listings and management.",
        technologies: &["HTML", "CSS", "JavaScript"],
        image: "/oralrealtor.png",
        live_link: "https://oralrealtor.netlify.app/",
        github_link: "https://github.com/BanjoTech/OralRealtorRealEstateWebApp.git",
        category: Category::WebApps,
        featured: false,
    },
    Project {
        id: 3,
        name: "Herbivore",
        description: "An SEO-optimized landing page for vegetarians featuring beautiful design and engaging content.",
        technologies: &["HTML", "CSS"],
        image: "/herbivore.png",
        live_link: "https://herbivoree.netlify.app/",
        github_link: "https://github.com/BanjoTech/Herbivore-Landing-page.git",
        category: Category::LandingPages,
        featured: false,
    },
];

pub fn all_projects() -> &'static [Project] {
    PROJECTS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gallery {
    category: Category,
    show_all: bool,
    page_size: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryView<'a> {
    pub visible: Vec<&'a Project>,
    pub matched: usize,
    pub empty: bool,
    pub can_expand: bool,
    pub show_all: bool,
}

impl Gallery {
    pub fn paged() -> Self {
        Self {
            category: Category::All,
            show_all: false,
            page_size: Some(PAGE_SIZE),
        }
    }

    pub fn unpaged() -> Self {
        Self {
            page_size: None,
            ..Self::paged()
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn select(&mut self, category: Category) {
        self.category = category;
        self.show_all = false;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn filtered<'a>(&self, items: &'a [Project]) -> Vec<&'a Project> {
        items
            .iter()
            .filter(|item| self.category.admits(item.category))
            .collect()
    }

    pub fn view<'a>(&self, items: &'a [Project]) -> GalleryView<'a> {
        let filtered = self.filtered(items);
        let matched = filtered.len();
        let limit = match self.page_size {
            Some(size) if !self.show_all => size,
            _ => matched,
        };
        GalleryView {
            visible: filtered.into_iter().take(limit).collect(),
            matched,
            empty: matched == 0,
            can_expand: self.page_size.is_some_and(|size| matched > size),
            show_all: self.show_all,
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "section section-muted",
            div { class: "container",
                SectionHeader {
                    eyebrow: Some("Portfolio".to_string()),
                    title: "Our Projects".to_string(),
                    subtitle: Some("Explore our recent works across different categories".to_string()),
                }
                ProjectGallery { paged: true }
                div { class: "text-center gallery-footer",
                    Link { to: Route::Projects {}, class: "muted-link",
                        "View all projects on dedicated page →"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectGallery(paged: bool) -> Element {
    let mut gallery = use_signal(move || if paged { Gallery::paged() } else { Gallery::unpaged() });
    let fallbacks = use_signal(ImageFallbacks::default);
    let state = gallery();
    let view = state.view(all_projects());

    rsx! {
        div { class: "category-tabs",
            for category in Category::ALL {
                button {
                    key: "{category.label()}",
                    r#type: "button",
                    class: if state.category() == category { "category-tab active" } else { "category-tab" },
                    onclick: move |_| gallery.write().select(category),
                    "{category.label()}"
                }
            }
        }
        div { class: "project-grid",
            for project in view.visible.iter() {
                ProjectCard { key: "{project.id}", project: (*project).clone(), fallbacks }
            }
        }
        if view.empty {
            div { class: "empty-state",
                p { "No projects in this category yet. Check back soon!" }
            }
        }
        if view.can_expand {
            div { class: "text-center",
                button {
                    r#type: "button",
                    class: "outline-button",
                    onclick: move |_| gallery.write().toggle_show_all(),
                    if view.show_all { "Show Less" } else { "View More Projects" }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, fallbacks: Signal<ImageFallbacks>) -> Element {
    let id = project.id;
    let show_image = fallbacks.read().show_remote(id);
    let initial = placeholder_initial(project.name);
    let shown_tech = &project.technologies[..project.technologies.len().min(CARD_TECH_LIMIT)];
    let hidden_tech = project.technologies.len().saturating_sub(CARD_TECH_LIMIT);

    rsx! {
        article { class: if project.featured { "project-card featured" } else { "project-card" },
            if project.featured {
                div { class: "featured-badge", "✦ Featured" }
            }
            div { class: "project-media",
                Placeholder { glyph: initial, class: Some("project-placeholder".to_string()) }
                if show_image {
                    img {
                        src: "{project.image}",
                        alt: "{project.name}",
                        class: "project-image",
                        onerror: move |_| {
                            let mut fallbacks = fallbacks;
                            fallbacks.write().mark_failed(id);
                        },
                    }
                }
                div { class: "project-overlay",
                    a {
                        href: "{project.live_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "primary-button small",
                        "Live Demo"
                    }
                    a {
                        href: "{project.github_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "ghost-button small",
                        "Code"
                    }
                }
            }
            div { class: "project-info",
                span { class: "project-category", "{project.category.label()}" }
                h3 { class: "project-name", "{project.name}" }
                p { class: "project-description", "{project.description}" }
                div { class: "tech-tags",
                    for tech in shown_tech.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                    if hidden_tech > 0 {
                        span { class: "tech-more", "+{hidden_tech} more" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: u32, category: Category) -> Project {
        Project {
            id,
            name: "Sample",
            description: "",
            technologies: &[],
            image: "",
            live_link: "",
            github_link: "",
            category,
            featured: false,
        }
    }

    fn ids(view: &GalleryView<'_>) -> Vec<u32> {
        view.visible.iter().map(|project| project.id).collect()
    }

    fn six_web_apps_and_others() -> Vec<Project> {
        let mut items: Vec<Project> = (1..=6).map(|id| project(id, Category::WebApps)).collect();
        items.insert(2, project(100, Category::Saas));
        items.push(project(101, Category::LandingPages));
        items
    }

    #[test]
    fn all_passes_every_item_through() {
        let items = six_web_apps_and_others();
        let gallery = Gallery::paged();
        assert_eq!(gallery.filtered(&items).len(), items.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let items = six_web_apps_and_others();
        let mut gallery = Gallery::unpaged();
        gallery.select(Category::Saas);
        assert_eq!(ids(&gallery.view(&items)), vec![100]);
    }

    #[test]
    fn selection_sequence_keeps_page_limit_and_resets_show_all() {
        let items = six_web_apps_and_others();
        let mut gallery = Gallery::paged();
        let picks = [
            Category::WebApps,
            Category::All,
            Category::Blockchain,
            Category::WebApps,
            Category::Saas,
            Category::All,
        ];
        for pick in picks {
            gallery.toggle_show_all();
            gallery.select(pick);
            assert!(!gallery.show_all());
            assert!(gallery.view(&items).visible.len() <= PAGE_SIZE);
        }
    }

    #[test]
    fn show_more_then_less_restores_first_page_in_order() {
        let items = six_web_apps_and_others();
        let mut gallery = Gallery::paged();
        gallery.select(Category::WebApps);
        assert_eq!(ids(&gallery.view(&items)), vec![1, 2, 3, 4]);
        assert!(gallery.view(&items).can_expand);

        gallery.toggle_show_all();
        assert_eq!(ids(&gallery.view(&items)), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(gallery.category(), Category::WebApps);

        gallery.toggle_show_all();
        assert_eq!(ids(&gallery.view(&items)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn small_result_offers_no_expand() {
        let items = six_web_apps_and_others();
        let mut gallery = Gallery::paged();
        gallery.select(Category::LandingPages);
        let view = gallery.view(&items);
        assert_eq!(view.matched, 1);
        assert!(!view.can_expand);
        assert!(!view.empty);
    }

    #[test]
    fn empty_category_is_signalled() {
        let items = six_web_apps_and_others();
        let mut gallery = Gallery::paged();
        gallery.select(Category::Blockchain);
        let view = gallery.view(&items);
        assert!(view.empty);
        assert!(view.visible.is_empty());
        assert!(!view.can_expand);
    }

    #[test]
    fn unpaged_gallery_shows_every_match() {
        let items = six_web_apps_and_others();
        let gallery = Gallery::unpaged();
        let view = gallery.view(&items);
        assert_eq!(view.visible.len(), items.len());
        assert!(!view.can_expand);
    }

    #[test]
    fn catalog_uses_known_categories_and_unique_ids() {
        let projects = all_projects();
        assert!(projects.iter().all(|p| p.category != Category::All));
        let mut seen: Vec<u32> = projects.iter().map(|p| p.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), projects.len());
    }
}
