mod about;
mod config;
mod contact;
mod date;
mod email;
mod faq;
mod footer;
mod hero;
mod image_fallback;
mod intro;
mod layout;
mod nav;
mod projects;
mod routes;
mod services;
mod theme;
mod typewriter;
mod whatsapp;

fn main() {
    dioxus::launch(routes::App);
}
