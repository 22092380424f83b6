use dioxus::prelude::*;

use crate::image_fallback::ImageFallbacks;
use crate::layout::Placeholder;
use crate::typewriter::TypedHeadline;

const PORTRAIT_ID: u32 = 0;
const PORTRAIT_SRC: &str = "/profile.jpg";

#[component]
pub fn Hero() -> Element {
    let mut fallbacks = use_signal(ImageFallbacks::default);
    let show_portrait = fallbacks.read().show_remote(PORTRAIT_ID);

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container hero-grid",
                div { class: "hero-copy",
                    span { class: "badge", "🚀 Tech Agency" }
                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "text-accent", "Banjo Yinka" }
                    }
                    TypedHeadline {}
                    p { class: "hero-lead",
                        "Leading a team of experts in web development, AI engineering, and digital solutions. We turn your ideas into powerful digital products."
                    }
                    div { class: "hero-actions",
                        a { href: "#projects", class: "primary-button", "View My Work" }
                        a {
                            href: "/resume.pdf",
                            download: "Banjo_Yinka_Resume.pdf",
                            class: "outline-button",
                            "My Resume"
                        }
                    }
                }
                div { class: "hero-portrait",
                    Placeholder { glyph: "BY".to_string(), class: Some("portrait-initials".to_string()) }
                    if show_portrait {
                        img {
                            src: PORTRAIT_SRC,
                            alt: "Banjo Yinka",
                            class: "portrait-image",
                            onerror: move |_| {
                                fallbacks.write().mark_failed(PORTRAIT_ID);
                            },
                        }
                    }
                }
            }
        }
    }
}
