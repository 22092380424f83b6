use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::routes::Route;
use crate::theme::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { path: "/", label: "Home" },
    NavEntry { path: "/about", label: "About" },
    NavEntry { path: "/services", label: "Services" },
    NavEntry { path: "/projects", label: "Projects" },
    NavEntry { path: "/contact", label: "Contact" },
];

pub fn active_entry(current: &str, entries: &[NavEntry]) -> Option<usize> {
    entries.iter().position(|entry| entry.path == current)
}

#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let current = route.to_string();
    let active = active_entry(&current, NAV_ENTRIES);
    let theme = use_theme();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand",
                    "Banjo"
                    span { class: "text-accent", "Tech" }
                }
                div { class: "navbar-links",
                    for (index, entry) in NAV_ENTRIES.iter().enumerate() {
                        NavItem { key: "{entry.path}", entry: *entry, active: active == Some(index), mobile: false }
                    }
                }
                div { class: "navbar-actions",
                    button {
                        r#type: "button",
                        class: "icon-button",
                        aria_label: "Toggle theme",
                        onclick: move |_| theme.toggle_theme(),
                        if theme.is_dark() { "☀" } else { "☾" }
                    }
                    button {
                        r#type: "button",
                        class: "icon-button navbar-menu-toggle",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }
        if menu_open() {
            div { class: "mobile-overlay", onclick: move |_| menu_open.set(false) }
            div { class: "mobile-panel",
                div { class: "mobile-panel-header",
                    button {
                        r#type: "button",
                        class: "icon-button",
                        aria_label: "Close menu",
                        onclick: move |_| menu_open.set(false),
                        "✕"
                    }
                }
                nav { class: "mobile-links",
                    for (index, entry) in NAV_ENTRIES.iter().enumerate() {
                        div { key: "{entry.path}", onclick: move |_| menu_open.set(false),
                            NavItem { entry: *entry, active: active == Some(index), mobile: true }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry, active: bool, mobile: bool) -> Element {
    let target = Route::from_path(entry.path);
    let class = match (mobile, active) {
        (true, true) => "nav-link nav-link-mobile active",
        (true, false) => "nav-link nav-link-mobile",
        (false, true) => "nav-link active",
        (false, false) => "nav-link",
    };
    rsx! {
        Link { to: target, class: "{class}",
            "{entry.label}"
            if !mobile {
                span { class: "nav-underline" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_path_is_active() {
        assert_eq!(active_entry("/", NAV_ENTRIES), Some(0));
        assert_eq!(active_entry("/projects", NAV_ENTRIES), Some(3));
        assert_eq!(active_entry("/contact", NAV_ENTRIES), Some(4));
    }

    #[test]
    fn unknown_path_highlights_nothing() {
        assert_eq!(active_entry("/blog", NAV_ENTRIES), None);
        assert_eq!(active_entry("", NAV_ENTRIES), None);
    }

    #[test]
    fn no_prefix_matching() {
        assert_eq!(active_entry("/projects/extra", NAV_ENTRIES), None);
        assert_eq!(active_entry("/about/", NAV_ENTRIES), None);
    }

    #[test]
    fn at_most_one_entry_is_active() {
        for entry in NAV_ENTRIES {
            let hits = NAV_ENTRIES
                .iter()
                .enumerate()
                .filter(|(index, _)| active_entry(entry.path, NAV_ENTRIES) == Some(*index))
                .count();
            assert_eq!(hits, 1);
        }
    }
}
