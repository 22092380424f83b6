use dioxus::prelude::*;

#[component]
pub fn SectionHeader(eyebrow: Option<String>, title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-header",
            if let Some(eyebrow) = eyebrow {
                span { class: "section-eyebrow", "{eyebrow}" }
            }
            h2 { class: "section-title", "{title}" }
            div { class: "section-rule" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn PageHero(eyebrow: Option<String>, title: String, subtitle: Option<String>) -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container text-center",
                if let Some(eyebrow) = eyebrow {
                    span { class: "section-eyebrow", "{eyebrow}" }
                }
                h1 { class: "page-hero-title", "{title}" }
                div { class: "section-rule" }
                if let Some(subtitle) = subtitle {
                    p { class: "section-subtitle", "{subtitle}" }
                }
            }
        }
    }
}

#[component]
pub fn Placeholder(glyph: String, class: Option<String>) -> Element {
    let class = class.unwrap_or_else(|| "placeholder".to_string());
    rsx! {
        div { class: "{class}", aria_hidden: "true",
            span { "{glyph}" }
        }
    }
}
