//! Contact Form Component
//!
//! Client-side validation plus a send through the configured transport.
//! While a send is in flight the submit button is disabled and shows a
//! spinner; its previous markup comes back afterwards whatever happened.
//! Result messages clear themselves after the configured lifetime.

use dioxus::prelude::*;
use folio_core::{
    expire_message, submit_form, FormHandle, FormMachine, FormSubmission,
};

use crate::context::{use_scroll_context, use_transport};

/// Submit button markup, icon included.
const SUBMIT_LABEL: &str = r#"<i class="fas fa-paper-plane"></i> Send Message"#;

/// Lets the shared submission driver update the component's signal.
struct FormSignal(Signal<FormMachine>);

impl FormHandle for FormSignal {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormMachine) -> R) -> R {
        f(&mut self.0.write())
    }
}

#[component]
pub fn ContactForm() -> Element {
    let ctx = use_scroll_context();
    let transport = use_transport();
    let machine = use_signal(|| FormMachine::new(SUBMIT_LABEL));

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = FormSubmission {
            name: name(),
            email: email(),
            subject: subject(),
            message: message(),
        };
        let transport = transport.clone();
        let ttl = ctx.read().settings.message_ttl();

        spawn(async move {
            let mut handle = FormSignal(machine);
            let outcome = submit_form(&mut handle, &transport, &form).await;

            if outcome.clears_fields() {
                name.set(String::new());
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());
            }
            if let Some(generation) = outcome.generation() {
                expire_message(&mut handle, generation, ttl).await;
            }
        });
    };

    let state = machine.read();
    let button = state.button().clone();
    let result = state.message().clone();
    drop(state);

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form",
            "novalidate": "novalidate",
            onsubmit: onsubmit,

            div { class: "form-row",
                div { class: "form-group",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
            }
            div { class: "form-group",
                label { r#for: "subject", "Subject" }
                input {
                    id: "subject",
                    name: "subject",
                    r#type: "text",
                    placeholder: "What is it about?",
                    value: "{subject}",
                    oninput: move |e| subject.set(e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "6",
                    placeholder: "Tell me about your project...",
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }
            }

            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: button.disabled,
                dangerous_inner_html: "{button.label}",
            }

            div {
                id: "formMessage",
                class: "{result.class()}",
                role: "status",
                "{result.text}"
            }
        }
    }
}
