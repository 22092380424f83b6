use dioxus::prelude::*;

use crate::image_fallback::ImageFallbacks;
use crate::layout::{Placeholder, SectionHeader};

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub image: Option<&'static str>,
    pub initials: &'static str,
    pub accent: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        id: 1,
        name: "Banjo Yinka",
        role: "Founder & Lead Developer",
        image: Some("/profile.jpg"),
        initials: "BY",
        accent: "accent-green",
    },
    TeamMember {
        id: 2,
        name: "Adelaide Badmus",
        role: "UI/UX Designer",
        image: None,
        initials: "AB",
        accent: "accent-purple",
    },
    TeamMember {
        id: 3,
        name: "Chukwuma Chigozie",
        role: "Backend Developer",
        image: None,
        initials: "CC",
        accent: "accent-blue",
    },
    TeamMember {
        id: 4,
        name: "Mr. Lanre",
        role: "Security Expert",
        image: None,
        initials: "ML",
        accent: "accent-red",
    },
];

struct SkillGroup {
    category: &'static str,
    items: &'static [&'static str],
}

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React", "JavaScript", "HTML/CSS", "Tailwind CSS", "SCSS"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Express", "REST APIs", "MongoDB"],
    },
    SkillGroup {
        category: "Tools",
        items: &["Git", "VS Code", "Vite", "Figma"],
    },
];

#[component]
pub fn AboutSection() -> Element {
    let fallbacks = use_signal(ImageFallbacks::default);

    rsx! {
        section { id: "about", class: "section",
            div { class: "container",
                SectionHeader {
                    eyebrow: Some("Who We Are".to_string()),
                    title: "About Us".to_string(),
                    subtitle: None,
                }
                div { class: "about-story",
                    h3 { "Our Story" }
                    p {
                        "BanjoTech is a tech agency passionate about creating beautiful, functional digital solutions that solve real problems. What started as a solo journey has evolved into a team of dedicated experts committed to crafting exceptional digital experiences."
                    }
                    p {
                        "We specialize in building modern web applications, AI-powered solutions, and secure software systems. Our team believes in writing clean, maintainable code and creating user interfaces that are both intuitive and visually stunning."
                    }
                }
                div { class: "about-team",
                    h3 { "Meet Our Team" }
                    p { class: "muted",
                        "A diverse group of talented individuals working together to deliver exceptional results for our clients."
                    }
                    div { class: "team-grid",
                        for member in TEAM.iter() {
                            TeamCard { key: "{member.id}", member: member.clone(), fallbacks }
                        }
                    }
                }
                div { class: "about-skills",
                    h3 { "My Tech Stack" }
                    div { class: "skills-grid",
                        for group in SKILLS.iter() {
                            div { key: "{group.category}", class: "skill-card",
                                h4 { "{group.category}" }
                                ul {
                                    for skill in group.items.iter() {
                                        li { key: "{skill}", span { class: "skill-dot" } "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamCard(member: TeamMember, fallbacks: Signal<ImageFallbacks>) -> Element {
    let id = member.id;
    let remote = member
        .image
        .filter(|_| fallbacks.read().show_remote(id));

    rsx! {
        div { class: "team-card",
            div { class: "team-avatar {member.accent}",
                Placeholder { glyph: member.initials.to_string(), class: Some("avatar-initials".to_string()) }
                if let Some(src) = remote {
                    img {
                        src: "{src}",
                        alt: "{member.name}",
                        class: "avatar-image",
                        onerror: move |_| {
                            let mut fallbacks = fallbacks;
                            fallbacks.write().mark_failed(id);
                        },
                    }
                }
            }
            h4 { class: "team-name", "{member.name}" }
            p { class: "team-role", "{member.role}" }
        }
    }
}
