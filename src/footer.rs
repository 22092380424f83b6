use dioxus::prelude::*;
use dioxus_router::Link;

use crate::date::current_year;
use crate::routes::Route;

struct SocialLink {
    name: &'static str,
    glyph: &'static str,
    url: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        glyph: "GH",
        url: "https://github.com/BanjoTech",
    },
    SocialLink {
        name: "LinkedIn",
        glyph: "in",
        url: "https://www.linkedin.com/in/banjo-yinka-313b48236/",
    },
    SocialLink {
        name: "Twitter",
        glyph: "X",
        url: "https://x.com/heis_banjo",
    },
    SocialLink {
        name: "Instagram",
        glyph: "IG",
        url: "https://www.instagram.com/heis_banjo/?hl=en",
    },
    SocialLink {
        name: "Email",
        glyph: "@",
        url: "mailto:banjoyinka0022@gmail.com",
    },
];

#[component]
pub fn Footer() -> Element {
    let year = current_year();
    rsx! {
        footer { class: "footer",
            div { class: "container footer-grid",
                div {
                    Link { to: Route::Home {}, class: "navbar-brand",
                        "Banjo"
                        span { class: "text-accent", "Tech" }
                    }
                    p { class: "muted",
                        "Fullstack Web Developer passionate about creating beautiful, functional web applications."
                    }
                }
                div {
                    h3 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-links",
                        li { Link { to: Route::Home {}, "Home" } }
                        li { Link { to: Route::About {}, "About" } }
                        li { Link { to: Route::Projects {}, "Projects" } }
                        li { Link { to: Route::Contact {}, "Contact" } }
                    }
                }
                div {
                    h3 { class: "footer-heading", "Connect" }
                    div { class: "social-links",
                        for social in SOCIAL_LINKS.iter() {
                            a {
                                key: "{social.name}",
                                href: "{social.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "{social.name}",
                                class: "social-link",
                                "{social.glyph}"
                            }
                        }
                    }
                }
            }
            div { class: "container footer-bottom",
                p { "© {year} Banjo Yinka. All rights reserved." }
            }
        }
    }
}
