use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{SessionStorage, Storage};
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

pub const SEEN_STORAGE_KEY: &str = "hasSeenLoader";
pub const TICK_MS: u32 = 30;
pub const STEP: u8 = 2;
pub const COMPLETION_DELAY_MS: u32 = 500;
pub const REVEAL_DELAY_MS: u32 = 300;

pub trait SessionFlag {
    fn is_set(&self) -> bool;
    fn set(&self);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SeenIntroFlag;

impl SessionFlag for SeenIntroFlag {
    fn is_set(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            SessionStorage::get::<bool>(SEEN_STORAGE_KEY).unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn set(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Err(err) = SessionStorage::set(SEEN_STORAGE_KEY, true) {
            tracing::warn!("intro: failed to persist session flag: {err}");
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Running,
    // progress hit 100, waiting out the completion delay
    Settling,
    Complete,
    Skipped,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadSequence {
    progress: u8,
    phase: LoadPhase,
}

impl LoadSequence {
    pub fn start(flag: &impl SessionFlag) -> Self {
        let phase = if flag.is_set() {
            LoadPhase::Skipped
        } else {
            LoadPhase::Running
        };
        Self { progress: 0, phase }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn should_render(&self) -> bool {
        matches!(self.phase, LoadPhase::Running | LoadPhase::Settling)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, LoadPhase::Complete | LoadPhase::Skipped)
    }

    pub fn next_delay(&self) -> Option<u32> {
        match self.phase {
            LoadPhase::Running => Some(TICK_MS),
            LoadPhase::Settling => Some(COMPLETION_DELAY_MS),
            _ => None,
        }
    }

    pub fn tick(&mut self) {
        if self.phase != LoadPhase::Running {
            return;
        }
        self.progress = self.progress.saturating_add(STEP).min(100);
        if self.progress == 100 {
            self.phase = LoadPhase::Settling;
        }
    }

    /// True exactly once per sequence, after the session flag is written.
    pub fn settle(&mut self, flag: &impl SessionFlag) -> bool {
        if self.phase != LoadPhase::Settling {
            return false;
        }
        flag.set();
        self.phase = LoadPhase::Complete;
        true
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, LoadPhase::Running | LoadPhase::Settling) {
            self.phase = LoadPhase::Cancelled;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Pending,
    Shown,
}

/// Whether page content is mounted behind the intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealGate {
    state: Reveal,
}

impl RevealGate {
    pub fn at_mount(sequence: &LoadSequence, intro_enabled: bool) -> Self {
        let state = if !intro_enabled || sequence.is_complete() {
            Reveal::Shown
        } else {
            Reveal::Hidden
        };
        Self { state }
    }

    pub fn state(&self) -> Reveal {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == Reveal::Shown
    }

    /// The intro completed. Returns the wait before content may appear,
    /// only on the first call.
    pub fn intro_finished(&mut self) -> Option<u32> {
        if self.state != Reveal::Hidden {
            return None;
        }
        self.state = Reveal::Pending;
        Some(REVEAL_DELAY_MS)
    }

    pub fn delay_elapsed(&mut self) {
        if self.state == Reveal::Pending {
            self.state = Reveal::Shown;
        }
    }
}

#[component]
pub fn IntroLoader(sequence: Signal<LoadSequence>, on_complete: EventHandler<()>) -> Element {
    let mut sequence = sequence;

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        tracing::debug!("intro: start sequence");
        loop {
            let Some(delay) = sequence.peek().next_delay() else {
                break;
            };
            TimeoutFuture::new(delay).await;
            let mut state = sequence.write();
            match state.phase() {
                LoadPhase::Running => state.tick(),
                LoadPhase::Settling => {
                    if state.settle(&SeenIntroFlag) {
                        drop(state);
                        tracing::debug!("intro: sequence complete");
                        on_complete.call(());
                    }
                }
                _ => {}
            }
        }
    });

    use_drop(move || {
        if let Ok(mut state) = sequence.try_write() {
            state.cancel();
        };
    });

    let progress = sequence.read().progress();
    rsx! {
        div { class: "intro-loader", role: "status", aria_label: "Loading",
            div { class: "intro-hexagon",
                svg { view_box: "0 0 100 100", class: "intro-hexagon-svg",
                    polygon { points: "50 1 95 25 95 75 50 99 5 75 5 25" }
                }
                div { class: "intro-core" }
            }
            div { class: "intro-progress",
                div { class: "intro-percent", "{progress}%" }
                div { class: "intro-bar",
                    div { class: "intro-bar-fill", style: "width: {progress}%" }
                }
                p { class: "intro-caption", "Enter the Matrix....." }
            }
        }
    }
}
