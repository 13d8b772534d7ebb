//! Contact section: inquiry form with simulated submission, direct contact
//! details, and the "Who We Serve" list.
//!
//! Submission is local-only: the form never leaves the machine. The status
//! signal walks Idle -> Submitting -> Success and then resets itself.

use std::time::Duration;

use dioxus::prelude::*;
use sentra_catalog::{ContactForm, FormStatus, INTEREST_OPTIONS};

use crate::components::icons;

const SERVED_AUDIENCES: [&str; 4] = [
    "Government Security Agencies",
    "Defense Forces",
    "Critical Infrastructure Protection",
    "Global Corporations with Security Needs",
];

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit_label = match *status.read() {
        FormStatus::Idle => "Submit Inquiry",
        FormStatus::Submitting => "Processing...",
        FormStatus::Success => "Message Sent",
    };
    let submit_class = if *status.read() == FormStatus::Success {
        "submit-btn success"
    } else {
        "submit-btn"
    };
    let disabled = status.read().is_busy() || !form.read().is_complete();

    let submit = move |_| {
        if status.read().is_busy() || !form.read().is_complete() {
            return;
        }
        tracing::info!(interest = %form.read().interest, "contact form submitted");
        spawn(async move {
            status.set(FormStatus::Submitting);
            tokio::time::sleep(Duration::from_millis(1500)).await;
            status.set(FormStatus::Success);
            tokio::time::sleep(Duration::from_secs(5)).await;
            form.write().reset();
            status.set(FormStatus::Idle);
        });
    };

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "Contact Us" }
                    div { class: "section-rule" }
                    p {
                        class: "section-lead",
                        "Reach out to discuss how SentraIntel can support your \
                         security objectives. All inquiries are handled with strict \
                         confidentiality."
                    }
                }

                div {
                    class: "contact-grid",
                    div {
                        class: "contact-card",
                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { class: "form-label", "Full Name *" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    placeholder: "Your name",
                                    value: "{form.read().name}",
                                    oninput: move |evt| form.write().name = evt.value(),
                                }
                            }
                            div {
                                class: "form-field",
                                label { class: "form-label", "Organization" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    placeholder: "Your organization",
                                    value: "{form.read().organization}",
                                    oninput: move |evt| form.write().organization = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { class: "form-label", "Email Address *" }
                                input {
                                    class: "form-input",
                                    r#type: "email",
                                    placeholder: "you@organization.gov",
                                    value: "{form.read().email}",
                                    oninput: move |evt| form.write().email = evt.value(),
                                }
                            }
                            div {
                                class: "form-field",
                                label { class: "form-label", "Phone Number" }
                                input {
                                    class: "form-input",
                                    r#type: "tel",
                                    placeholder: "Optional",
                                    value: "{form.read().phone}",
                                    oninput: move |evt| form.write().phone = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "form-field",
                            style: "margin-bottom: 24px;",
                            label { class: "form-label", "Area of Interest" }
                            select {
                                class: "form-select",
                                value: "{form.read().interest}",
                                onchange: move |evt| form.write().interest = evt.value(),
                                for option in INTEREST_OPTIONS {
                                    option { value: "{option}", "{option}" }
                                }
                            }
                        }
                        div {
                            class: "form-field",
                            label { class: "form-label", "Message *" }
                            textarea {
                                class: "form-textarea",
                                placeholder: "How can we help?",
                                value: "{form.read().message}",
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                        }
                        div {
                            class: "form-note",
                            span { class: "lock-icon", {icons::lock_icon(16)} }
                            span {
                                "Your information is encrypted and secure. We respect \
                                 your privacy and will never share your details."
                            }
                        }
                        button {
                            class: "{submit_class}",
                            disabled: disabled,
                            onclick: submit,
                            if *status.read() == FormStatus::Success {
                                {icons::check_icon(16)}
                            }
                            "{submit_label}"
                        }
                    }

                    div {
                        div {
                            class: "contact-card",
                            h3 { class: "prose-heading", "Direct Contact" }
                            div {
                                class: "direct-contact-row",
                                span { class: "contact-icon", {icons::mail_icon(18)} }
                                div {
                                    div { class: "direct-contact-label", "Email" }
                                    div { "contact@sentraintel.com" }
                                }
                            }
                            div {
                                class: "direct-contact-row",
                                span { class: "contact-icon", {icons::phone_icon(18)} }
                                div {
                                    div { class: "direct-contact-label", "Phone" }
                                    div { "+1 (646) 329 4054" }
                                }
                            }
                            div {
                                class: "direct-contact-row",
                                span { class: "contact-icon", {icons::map_pin_icon(18)} }
                                div {
                                    div { class: "direct-contact-label", "Headquarters" }
                                    div { "358 8th Street Apt 301, Manhattan, NY" }
                                }
                            }
                        }
                        div {
                            class: "contact-card",
                            h3 { class: "prose-heading", "Who We Serve" }
                            ul {
                                class: "check-list",
                                for audience in SERVED_AUDIENCES {
                                    li {
                                        class: "check-item",
                                        span { class: "check-dot", {icons::check_icon(12)} }
                                        span { "{audience}" }
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
