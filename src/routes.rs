use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, Router};
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::about::AboutSection;
use crate::config::use_runtime_config;
use crate::contact::ContactSection;
use crate::faq::FaqSection;
use crate::footer::Footer;
use crate::hero::Hero;
use crate::intro::{IntroLoader, LoadSequence, RevealGate, SeenIntroFlag};
use crate::layout::PageHero;
use crate::nav::Navbar;
use crate::projects::{ProjectGallery, ProjectsSection};
use crate::services::{ServicesCatalog, ServicesSection};
use crate::theme::ThemeProvider;
use crate::whatsapp::WhatsAppWidget;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "BanjoTech" }
                div { class: "page loading",
                    h1 { "Loading config..." }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            return rsx! {
                document::Title { "BanjoTech" }
                div { class: "page loading",
                    h1 { "Config load failed" }
                    p { "{message}" }
                }
            }
        }
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#4ade80" }
        ThemeProvider {
            IntroGate {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn IntroGate(children: Element) -> Element {
    let sequence = use_signal(|| LoadSequence::start(&SeenIntroFlag));
    let intro_enabled = cfg!(target_arch = "wasm32");
    let mut gate = use_signal(|| RevealGate::at_mount(&sequence.peek(), intro_enabled));
    let mut finished = use_signal(|| false);

    use_effect(move || {
        if !finished() {
            return;
        }
        let Some(delay) = gate.write().intro_finished() else {
            return;
        };
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            TimeoutFuture::new(delay).await;
            gate.write().delay_elapsed();
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = delay;
            gate.write().delay_elapsed();
        }
    });

    rsx! {
        if intro_enabled && sequence.read().should_render() {
            IntroLoader { sequence, on_complete: move |_| finished.set(true) }
        }
        if gate.read().is_shown() {
            div { class: "site", {children} }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/projects")]
    Projects {},
    #[route("/contact")]
    Contact {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or(Route::Home {})
    }
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        Navbar {}
        main {
            Outlet::<Route> {}
            Footer {}
        }
        WhatsAppWidget {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        document::Title { "BanjoTech - Fullstack Development & AI Solutions Agency" }
        Hero {}
        AboutSection {}
        ServicesSection {}
        ProjectsSection {}
        FaqSection {}
        ContactSection {}
    }
}

#[component]
fn About() -> Element {
    rsx! {
        document::Title { "About - BanjoTech | Who We Are" }
        div { class: "page-offset",
            AboutSection {}
        }
    }
}

#[component]
fn Services() -> Element {
    rsx! {
        document::Title { "Services - BanjoTech | Web Development & AI Solutions" }
        ServicesCatalog {}
    }
}

#[component]
fn Projects() -> Element {
    rsx! {
        document::Title { "Projects - BanjoTech | Our Portfolio" }
        PageHero {
            eyebrow: Some("Portfolio".to_string()),
            title: "Our Projects".to_string(),
            subtitle: Some("Explore our complete portfolio of work across different categories".to_string()),
        }
        section { class: "section",
            div { class: "container",
                ProjectGallery { paged: false }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        document::Title { "Contact - BanjoTech | Get In Touch" }
        div { class: "page-offset",
            ContactSection {}
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found - BanjoTech" }
        section { class: "section page-offset",
            div { class: "container narrow text-center",
                h1 { class: "page-hero-title", "404" }
                p { class: "muted", "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "primary-button", "Back to Home" }
            }
        }
    }
}
