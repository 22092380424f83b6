use dioxus::prelude::*;

pub const DARK_CLASS: &str = "dark";

pub trait ThemeMarker {
    fn apply(&self, dark: bool);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRootMarker;

impl ThemeMarker for DocumentRootMarker {
    fn apply(&self, dark: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            let result = if dark {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
            if result.is_err() {
                tracing::warn!("theme: failed to update root class list");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dark;
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeState<M: ThemeMarker> {
    is_dark: bool,
    marker: M,
}

impl<M: ThemeMarker> ThemeState<M> {
    pub fn new(marker: M) -> Self {
        marker.apply(false);
        Self {
            is_dark: false,
            marker,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn toggle(&mut self) -> bool {
        let next = !self.is_dark;
        self.marker.apply(next);
        self.is_dark = next;
        next
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: Signal<ThemeState<DocumentRootMarker>>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.state.read().is_dark()
    }

    pub fn toggle_theme(&self) {
        let mut state = self.state;
        let dark = state.write().toggle();
        tracing::debug!("theme: dark={dark}");
    }
}

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let state = use_signal(|| ThemeState::new(DocumentRootMarker));
    use_context_provider(|| ThemeContext { state });
    rsx! { {children} }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingMarker {
        applied: Rc<RefCell<Vec<bool>>>,
    }

    impl RecordingMarker {
        fn present(&self) -> bool {
            self.applied.borrow().last().copied().unwrap_or(false)
        }
    }

    impl ThemeMarker for RecordingMarker {
        fn apply(&self, dark: bool) {
            self.applied.borrow_mut().push(dark);
        }
    }

    #[test]
    fn starts_light_with_marker_absent() {
        let marker = RecordingMarker::default();
        let state = ThemeState::new(marker.clone());
        assert!(!state.is_dark());
        assert!(!marker.present());
    }

    #[test]
    fn double_toggle_round_trips() {
        let marker = RecordingMarker::default();
        let mut state = ThemeState::new(marker.clone());

        assert!(state.toggle());
        assert_eq!(state.is_dark(), marker.present());
        assert!(!state.toggle());
        assert_eq!(state.is_dark(), marker.present());
        assert!(!state.is_dark());
        assert_eq!(*marker.applied.borrow(), vec![false, true, false]);
    }

    #[test]
    fn marker_tracks_flag_on_every_toggle() {
        let marker = RecordingMarker::default();
        let mut state = ThemeState::new(marker.clone());
        for _ in 0..7 {
            state.toggle();
            assert_eq!(marker.present(), state.is_dark());
        }
        assert!(state.is_dark());
    }
}
