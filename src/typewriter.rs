use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

pub const TYPE_SPEED_MS: u32 = 100;
pub const HERO_TEXT: &str =
    "I Build Digital Solutions for Businesses and Organisations with BanjoTech Agency.";
pub const HIGHLIGHT: &str = "BanjoTech";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
    cancelled: bool,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            shown: 0,
            cancelled: false,
        }
    }

    pub fn visible(&self) -> &'static str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map_or(self.text.len(), |(index, _)| index);
        &self.text[..end]
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    pub fn next_delay(&self) -> Option<u32> {
        if self.cancelled || self.is_done() {
            None
        } else {
            Some(TYPE_SPEED_MS)
        }
    }

    pub fn tick(&mut self) {
        if self.next_delay().is_some() {
            self.shown += 1;
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Splits around the first full occurrence of `word`. `None` until the
/// word has been typed completely.
pub fn split_highlight<'a>(text: &'a str, word: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let start = text.find(word)?;
    let end = start + word.len();
    Some((&text[..start], &text[start..end], &text[end..]))
}

#[component]
pub fn TypedHeadline() -> Element {
    let mut typewriter = use_signal(|| Typewriter::new(HERO_TEXT));

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        let mut typewriter = typewriter;
        while let Some(delay) = typewriter.peek().next_delay() {
            TimeoutFuture::new(delay).await;
            typewriter.write().tick();
        }
    });

    use_drop(move || {
        if let Ok(mut state) = typewriter.try_write() {
            state.cancel();
        };
    });

    let visible = typewriter.read().visible();
    rsx! {
        p { class: "hero-typed",
            if let Some((before, word, after)) = split_highlight(visible, HIGHLIGHT) {
                "{before}"
                span { class: "text-accent", "{word}" }
                "{after}"
            } else {
                "{visible}"
            }
            span { class: "typing-cursor", "|" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut typewriter = Typewriter::new("abc");
        assert_eq!(typewriter.visible(), "");
        typewriter.tick();
        assert_eq!(typewriter.visible(), "a");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.visible(), "abc");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.next_delay(), None);
        typewriter.tick();
        assert_eq!(typewriter.visible(), "abc");
    }

    #[test]
    fn cancel_freezes_progress() {
        let mut typewriter = Typewriter::new(HERO_TEXT);
        typewriter.tick();
        typewriter.cancel();
        typewriter.tick();
        assert_eq!(typewriter.visible(), "I");
        assert_eq!(typewriter.next_delay(), None);
    }

    #[test]
    fn highlight_waits_for_the_whole_word() {
        assert_eq!(split_highlight("with Banjo", HIGHLIGHT), None);
        assert_eq!(
            split_highlight("with BanjoTech Ag", HIGHLIGHT),
            Some(("with ", "BanjoTech", " Ag"))
        );
    }

    #[test]
    fn full_hero_text_highlights_once_typed() {
        let mut typewriter = Typewriter::new(HERO_TEXT);
        while typewriter.next_delay().is_some() {
            typewriter.tick();
        }
        assert_eq!(typewriter.visible(), HERO_TEXT);
        let (_, word, after) = split_highlight(typewriter.visible(), HIGHLIGHT).unwrap();
        assert_eq!(word, "BanjoTech");
        assert_eq!(after, " Agency.");
    }
}
