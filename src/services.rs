use dioxus::prelude::*;
use dioxus_router::Link;

use crate::config::RuntimeConfig;
use crate::layout::{PageHero, SectionHeader};
use crate::routes::Route;
use crate::whatsapp::{quote_message, whatsapp_link, CONSULTATION_MESSAGE};

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub glyph: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub accent: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        id: 1,
        glyph: "</>",
        title: "Web Development",
        summary: "Custom websites and web applications with modern tech.",
        description: "Custom websites and web applications built with modern technologies like React, Next.js, and Node.js. From landing pages to complex platforms.",
        features: &[
            "Responsive Design",
            "Performance Optimized",
            "SEO Friendly",
            "Cross-browser Compatible",
        ],
        accent: "accent-blue",
    },
    Service {
        id: 2,
        glyph: "◆",
        title: "Software Engineering",
        summary: "Scalable software solutions with clean architecture.",
        description: "End-to-end software solutions designed for scalability and maintainability. Clean architecture and best practices.",
        features: &[
            "System Architecture",
            "API Development",
            "Database Design",
            "Cloud Deployment",
        ],
        accent: "accent-purple",
    },
    Service {
        id: 3,
        glyph: "✦",
        title: "Consulting",
        summary: "Strategic technical guidance for your projects.",
        description: "Strategic technical guidance for your projects. Code reviews, architecture decisions, and technology recommendations.",
        features: &[
            "Technical Audit",
            "Code Review",
            "Tech Stack Advice",
            "Project Planning",
        ],
        accent: "accent-yellow",
    },
    Service {
        id: 4,
        glyph: "⚙",
        title: "AI Automation",
        summary: "Intelligent automation for business processes.",
        description: "Streamline your business processes with intelligent automation. From chatbots to workflow automation.",
        features: &[
            "Process Automation",
            "Chatbot Development",
            "Workflow Optimization",
            "Integration Services",
        ],
        accent: "accent-green",
    },
    Service {
        id: 5,
        glyph: "◎",
        title: "AI Engineering",
        summary: "Custom AI & ML solutions for your needs.",
        description: "Custom AI solutions including machine learning models, natural language processing, and intelligent systems.",
        features: &[
            "ML Model Development",
            "NLP Solutions",
            "Computer Vision",
            "AI Integration",
        ],
        accent: "accent-red",
    },
];

pub fn all_services() -> &'static [Service] {
    SERVICES
}

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { id: "services", class: "section",
            div { class: "container",
                SectionHeader {
                    eyebrow: Some("What We Do".to_string()),
                    title: "Our Services".to_string(),
                    subtitle: None,
                }
                div { class: "service-grid compact",
                    for service in all_services().iter() {
                        Link { key: "{service.id}", to: Route::Services {}, class: "service-card",
                            div { class: "service-icon {service.accent}", "{service.glyph}" }
                            h3 { "{service.title}" }
                            p { class: "muted", "{service.summary}" }
                        }
                    }
                }
                div { class: "text-center",
                    Link { to: Route::Services {}, class: "outline-button", "View All Services →" }
                }
            }
        }
    }
}

#[component]
pub fn ServicesCatalog() -> Element {
    let config = use_context::<RuntimeConfig>();
    let consultation = whatsapp_link(&config.whatsapp_number, CONSULTATION_MESSAGE);

    rsx! {
        PageHero {
            eyebrow: Some("What We Offer".to_string()),
            title: "Our Services".to_string(),
            subtitle: Some("We deliver cutting-edge solutions tailored to your business needs. From concept to deployment, we've got you covered.".to_string()),
        }
        section { class: "section",
            div { class: "container",
                div { class: "service-grid",
                    for service in all_services().iter() {
                        article { key: "{service.id}", class: "service-card detailed",
                            div { class: "service-icon {service.accent}", "{service.glyph}" }
                            h3 { "{service.title}" }
                            p { class: "muted", "{service.description}" }
                            ul { class: "feature-list",
                                for feature in service.features.iter() {
                                    li { key: "{feature}", "{feature}" }
                                }
                            }
                            a {
                                href: whatsapp_link(&config.whatsapp_number, &quote_message(service.title)),
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "quote-link",
                                "Get a Quote →"
                            }
                        }
                    }
                }
                div { class: "cta-panel",
                    h2 { "Ready to Start Your Project?" }
                    p { class: "muted",
                        "Let's discuss your ideas and create something amazing together. Get a free consultation today."
                    }
                    a {
                        href: "{consultation}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "primary-button large",
                        "Chat on WhatsApp"
                    }
                }
            }
        }
    }
}
