use dioxus::prelude::*;

use crate::layout::SectionHeader;

#[derive(Clone, Debug, PartialEq)]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQS: &[Faq] = &[
    Faq {
        id: 1,
        question: "Do you collaborate with other developers or agencies?",
        answer: "Yes, we do! We believe in the power of collaboration. Whether you're a freelancer needing extra hands, an agency looking for specialized skills, or a business wanting to co-develop a project, we're open to partnerships. Our team seamlessly integrates with external collaborators to deliver exceptional results.",
    },
    Faq {
        id: 2,
        question: "Do you provide after-sales support and maintenance?",
        answer: "Absolutely! After-sales support is one of our core strengths and a major reason why our existing clients love working with us and consistently refer us to others. We offer ongoing maintenance, updates, bug fixes, and technical support to ensure your project continues to perform optimally long after launch.",
    },
    Faq {
        id: 3,
        question: "How many years of experience does BanjoTech have?",
        answer: "BanjoTech is led by Banjo Yinka, who has 2 years of hands-on experience in fullstack development and software engineering. Combined with our team of specialists in UI/UX, backend development, and security, we bring a diverse range of expertise to every project we undertake.",
    },
    Faq {
        id: 4,
        question: "Do you work with tech stacks not listed on your site?",
        answer: "Yes! While we specialize in React, Node.js, and modern web technologies, we approach every problem based on the tools that best fit the solution. Whether it's Python, PHP, mobile development, or emerging technologies, we adapt our approach to meet your project's specific requirements.",
    },
];

pub fn all_faqs() -> &'static [Faq] {
    FAQS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn activate(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[component]
pub fn FaqSection() -> Element {
    let faqs = all_faqs();
    let mut accordion = use_signal(|| Accordion::new(faqs.len()));

    rsx! {
        section { id: "faq", class: "section",
            div { class: "container narrow",
                SectionHeader {
                    eyebrow: Some("Got Questions?".to_string()),
                    title: "Frequently Asked Questions".to_string(),
                    subtitle: Some("Find answers to common questions about working with us".to_string()),
                }
                div { class: "faq-list",
                    for (index, faq) in faqs.iter().enumerate() {
                        div {
                            key: "{faq.id}",
                            class: if accordion.read().is_open(index) { "faq-item open" } else { "faq-item" },
                            button {
                                r#type: "button",
                                class: "faq-question",
                                aria_expanded: "{accordion.read().is_open(index)}",
                                aria_controls: "faq-answer-{faq.id}",
                                onclick: move |_| accordion.write().activate(index),
                                span { class: "faq-icon", "?" }
                                span { class: "faq-question-text", "{faq.question}" }
                                span { class: "faq-toggle",
                                    if accordion.read().is_open(index) { "−" } else { "+" }
                                }
                            }
                            if accordion.read().is_open(index) {
                                div { id: "faq-answer-{faq.id}", class: "faq-answer",
                                    p { "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
                div { class: "faq-cta text-center",
                    p { class: "muted", "Still have questions? We're here to help!" }
                    a { href: "#contact", class: "primary-button", "Contact Us" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_closed() {
        let accordion = Accordion::new(4);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let mut accordion = Accordion::new(4);
        accordion.activate(1);
        accordion.activate(3);
        assert_eq!(accordion.open_index(), Some(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn reactivating_open_entry_closes_it() {
        let mut accordion = Accordion::new(4);
        accordion.activate(2);
        accordion.activate(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = Accordion::new(4);
        accordion.activate(0);
        accordion.activate(4);
        assert_eq!(accordion.open_index(), Some(0));
    }

    #[test]
    fn activation_sequences_keep_a_single_entry_open() {
        let mut accordion = Accordion::new(4);
        let presses = [0, 0, 1, 2, 2, 3, 1, 1, 0, 3, 3, 2];
        for press in presses {
            let before = accordion.open_index();
            accordion.activate(press);
            let open = (0..4).filter(|index| accordion.is_open(*index)).count();
            assert!(open <= 1);
            if before == Some(press) {
                assert_eq!(accordion.open_index(), None);
            } else {
                assert_eq!(accordion.open_index(), Some(press));
            }
        }
    }

    #[test]
    fn faq_catalog_matches_accordion_size() {
        assert_eq!(all_faqs().len(), 4);
    }
}
