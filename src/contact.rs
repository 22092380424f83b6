use dioxus::prelude::*;
use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::email::{ContactPayload, DeliveryError, EmailJsClient, EmailSender};
use crate::layout::SectionHeader;

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("required fields are missing")]
    Validation,
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: FormStatus,
    status_message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    fn has_blank_field(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|value| value.is_empty())
    }

    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::InFlight);
        }
        if self.has_blank_field() {
            self.status = FormStatus::Error;
            self.status_message = VALIDATION_MESSAGE.to_string();
            return Err(SubmitRejected::Validation);
        }
        self.status = FormStatus::Sending;
        self.status_message.clear();
        Ok(ContactPayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn complete(&mut self, result: Result<(), DeliveryError>) {
        if !self.is_sending() {
            return;
        }
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = FormStatus::Success;
                self.status_message = SUCCESS_MESSAGE.to_string();
            }
            Err(err) => {
                tracing::warn!("contact: delivery failed: {err}");
                self.status = FormStatus::Error;
                self.status_message = FAILURE_MESSAGE.to_string();
            }
        }
    }
}

/// Sends `payload` once and hands the outcome to `settle`.
pub async fn deliver(
    sender: &impl EmailSender,
    payload: ContactPayload,
    mut settle: impl FnMut(Result<(), DeliveryError>),
) {
    settle(sender.send(&payload).await);
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut form = use_signal(ContactForm::default);
    let state = form();
    let sending = state.is_sending();

    rsx! {
        section { id: "contact", class: "section section-muted",
            div { class: "container narrow",
                SectionHeader {
                    eyebrow: None,
                    title: "Get In Touch".to_string(),
                    subtitle: Some("Have a project in mind? Let's work together!".to_string()),
                }
                form {
                    class: "contact-form",
                    onsubmit: move |event| {
                        event.prevent_default();
                        let attempt = form.write().begin_submit();
                        match attempt {
                            Ok(payload) => {
                                let client = EmailJsClient::from_config(&config);
                                spawn(async move {
                                    deliver(&client, payload, |result| form.write().complete(result)).await;
                                });
                            }
                            Err(rejected) => tracing::debug!("contact: submit rejected: {rejected}"),
                        }
                    },
                    div { class: "form-field",
                        label { r#for: "from_name", "Your Name" }
                        input {
                            id: "from_name",
                            name: "from_name",
                            r#type: "text",
                            placeholder: "Your Name",
                            value: "{state.value(Field::Name)}",
                            oninput: move |event| form.write().set_field(Field::Name, event.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "from_email", "Your Email" }
                        input {
                            id: "from_email",
                            name: "from_email",
                            r#type: "email",
                            placeholder: "john@example.com",
                            value: "{state.value(Field::Email)}",
                            oninput: move |event| form.write().set_field(Field::Email, event.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "message", "Your Message" }
                        textarea {
                            id: "message",
                            name: "message",
                            rows: "6",
                            placeholder: "Tell me about your project...",
                            value: "{state.value(Field::Message)}",
                            oninput: move |event| form.write().set_field(Field::Message, event.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "primary-button wide",
                        disabled: sending,
                        if sending { "Sending..." } else { "Send Message" }
                    }
                    if !state.status_message().is_empty() {
                        div {
                            class: if state.status() == FormStatus::Error { "form-status error" } else { "form-status success" },
                            role: "status",
                            "{state.status_message()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    struct CountingSender {
        calls: Cell<usize>,
        last: RefCell<Option<ContactPayload>>,
        outcome: Result<(), DeliveryError>,
    }

    impl CountingSender {
        fn new(outcome: Result<(), DeliveryError>) -> Self {
            Self {
                calls: Cell::new(0),
                last: RefCell::new(None),
                outcome,
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailSender for CountingSender {
        async fn send(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Build me a site".to_string());
        form
    }

    fn submit(form: &mut ContactForm, sender: &CountingSender) {
        if let Ok(payload) = form.begin_submit() {
            block_on(deliver(sender, payload, |result| form.complete(result)));
        }
    }

    #[test]
    fn empty_message_is_rejected_without_sending() {
        let mut form = filled();
        form.set_field(Field::Message, String::new());
        let sender = CountingSender::new(Ok(()));

        assert_eq!(form.begin_submit(), Err(SubmitRejected::Validation));
        submit(&mut form, &sender);

        assert_eq!(sender.calls.get(), 0);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.status_message(), VALIDATION_MESSAGE);
    }

    #[test]
    fn whitespace_only_message_is_sent_as_typed() {
        let mut form = filled();
        form.set_field(Field::Message, "   ".to_string());
        let sender = CountingSender::new(Ok(()));
        submit(&mut form, &sender);

        assert_eq!(sender.calls.get(), 1);
        assert_eq!(
            sender.last.borrow().as_ref().map(|payload| payload.message.clone()),
            Some("   ".to_string())
        );
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn deliver_settles_the_form_exactly_once() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        let sender = CountingSender::new(Err(DeliveryError::Request("offline".to_string())));
        let mut settled = 0;
        block_on(deliver(&sender, payload, |result| {
            settled += 1;
            form.complete(result);
        }));

        assert_eq!(settled, 1);
        assert_eq!(sender.calls.get(), 1);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.value(Field::Message), "Build me a site");
    }

    #[test]
    fn successful_send_clears_fields() {
        let mut form = filled();
        let sender = CountingSender::new(Ok(()));
        submit(&mut form, &sender);

        assert_eq!(sender.calls.get(), 1);
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.status_message(), SUCCESS_MESSAGE);
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
        assert_eq!(
            sender.last.borrow().clone(),
            Some(ContactPayload {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Build me a site".to_string(),
            })
        );
    }

    #[test]
    fn failed_send_keeps_fields_for_retry() {
        let mut form = filled();
        let before = filled();
        let sender = CountingSender::new(Err(DeliveryError::Status(500)));
        submit(&mut form, &sender);

        assert_eq!(sender.calls.get(), 1);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.status_message(), FAILURE_MESSAGE);
        for field in [Field::Name, Field::Email, Field::Message] {
            assert_eq!(form.value(field), before.value(field));
        }
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn form_can_be_resubmitted_after_failure() {
        let mut form = filled();
        submit(&mut form, &CountingSender::new(Err(DeliveryError::NotConfigured)));
        let sender = CountingSender::new(Ok(()));
        submit(&mut form, &sender);
        assert_eq!(sender.calls.get(), 1);
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form, filled());
    }
}
