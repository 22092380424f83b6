use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::config::RuntimeConfig;

pub const SHOW_AFTER_MS: u32 = 3000;
pub const HIDE_AFTER_MS: u32 = 5000;
pub const CONSULTATION_MESSAGE: &str =
    "Hello BanjoTech! I'd like to discuss a project and get a consultation.";

/// `https://wa.me/` deep link. Only the digits of `phone` are kept.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(message)
    )
}

pub fn quote_message(service: &str) -> String {
    format!(
        "Hello BanjoTech! I'm interested in your {service} services. I'd like to get a quote and discuss my project requirements."
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AutoCycle {
    Waiting,
    Showing,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    AutoShown,
    UserShown,
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipTimer {
    cycle: AutoCycle,
    hovered: bool,
    dismissed: bool,
    cancelled: bool,
}

impl Default for TooltipTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipTimer {
    pub fn new() -> Self {
        Self {
            cycle: AutoCycle::Waiting,
            hovered: false,
            dismissed: false,
            cancelled: false,
        }
    }

    pub fn next_delay(&self) -> Option<u32> {
        if self.dismissed || self.cancelled {
            return None;
        }
        match self.cycle {
            AutoCycle::Waiting => Some(SHOW_AFTER_MS),
            AutoCycle::Showing => Some(HIDE_AFTER_MS),
            AutoCycle::Done => None,
        }
    }

    pub fn delay_elapsed(&mut self) {
        if self.dismissed || self.cancelled {
            return;
        }
        self.cycle = match self.cycle {
            AutoCycle::Waiting => AutoCycle::Showing,
            AutoCycle::Showing | AutoCycle::Done => AutoCycle::Done,
        };
    }

    pub fn hover_in(&mut self) {
        self.hovered = true;
    }

    pub fn hover_out(&mut self) {
        self.hovered = false;
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn state(&self) -> TooltipState {
        if self.dismissed {
            TooltipState::Dismissed
        } else if self.hovered {
            TooltipState::UserShown
        } else if self.cycle == AutoCycle::Showing {
            TooltipState::AutoShown
        } else {
            TooltipState::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(
            self.state(),
            TooltipState::AutoShown | TooltipState::UserShown
        )
    }
}

#[component]
pub fn WhatsAppWidget() -> Element {
    let config = use_context::<RuntimeConfig>();
    let link = whatsapp_link(&config.whatsapp_number, &config.whatsapp_message);
    let mut tooltip = use_signal(TooltipTimer::new);

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        let mut tooltip = tooltip;
        loop {
            let Some(delay) = tooltip.peek().next_delay() else {
                break;
            };
            TimeoutFuture::new(delay).await;
            tooltip.write().delay_elapsed();
        }
    });

    use_drop(move || {
        if let Ok(mut state) = tooltip.try_write() {
            state.cancel();
        };
    });

    rsx! {
        div { class: "whatsapp-widget",
            if tooltip.read().is_visible() {
                div { class: "whatsapp-tooltip",
                    div { class: "whatsapp-tooltip-pointer" }
                    button {
                        r#type: "button",
                        class: "whatsapp-tooltip-close",
                        aria_label: "Close tooltip",
                        onclick: move |event| {
                            event.stop_propagation();
                            tooltip.write().dismiss();
                        },
                        "✕"
                    }
                    p { class: "whatsapp-tooltip-title", "👋 Need help with your project?" }
                    p { class: "whatsapp-tooltip-body", "Chat with us on WhatsApp!" }
                }
            }
            a {
                href: "{link}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "whatsapp-button",
                aria_label: "Chat on WhatsApp",
                onmouseenter: move |_| tooltip.write().hover_in(),
                onmouseleave: move |_| tooltip.write().hover_out(),
                onclick: move |_| tooltip.write().dismiss(),
                span { class: "whatsapp-pulse" }
                span { class: "whatsapp-pulse delayed" }
                span { class: "whatsapp-icon", "✆" }
            }
        }
    }
}
