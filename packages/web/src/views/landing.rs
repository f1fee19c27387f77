//! Public landing page: hero, feature cards and a contact form.

use api::ContactMessage;
use dioxus::prelude::*;
use ui::icons::{FaCar, FaChartLine, FaShieldHalved};
use ui::{use_app, Icon};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ContactState {
    Idle,
    Submitting,
    Sent,
    Failed,
}

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        section {
            class: "max-w-7xl mx-auto px-4 py-20 grid gap-12 md:grid-cols-2 items-center",
            div {
                h1 {
                    class: "text-5xl font-extrabold tracking-tight mb-6",
                    "Manage your fleet with "
                    span { class: "text-blue-600", "CarFleet" }
                }
                p {
                    class: "text-lg text-gray-600 dark:text-gray-300 mb-8",
                    "Keep every listing, photo and dealer in one place. Search, update and share your inventory in seconds."
                }
                div {
                    class: "flex gap-4",
                    button {
                        class: "px-6 py-3 rounded-md bg-blue-600 text-white font-medium hover:bg-blue-700",
                        onclick: move |_| {
                            nav.push(Route::Register {});
                        },
                        "Get Started"
                    }
                    button {
                        class: "px-6 py-3 rounded-md border border-gray-300 dark:border-gray-600 font-medium hover:bg-gray-100 dark:hover:bg-gray-800",
                        onclick: move |_| {
                            nav.push(Route::Login {});
                        },
                        "Login"
                    }
                }
            }
            div {
                class: "hero-panel h-80 rounded-2xl flex items-center justify-center",
                Icon { icon: FaCar, width: 120, height: 120, fill: "white" }
            }
        }

        section {
            class: "bg-white dark:bg-gray-800 py-16",
            div {
                class: "max-w-7xl mx-auto px-4 grid gap-8 md:grid-cols-3",
                FeatureCard {
                    title: "Fleet tracking",
                    body: "Every car with its type, company, dealer, tags and a gallery of images.",
                    Icon { icon: FaCar, width: 28, height: 28 }
                }
                FeatureCard {
                    title: "Analytics",
                    body: "Find any vehicle instantly with search across titles, descriptions and tags.",
                    Icon { icon: FaChartLine, width: 28, height: 28 }
                }
                FeatureCard {
                    title: "Security",
                    body: "Token based sign in keeps each fleet private to its owner.",
                    Icon { icon: FaShieldHalved, width: 28, height: 28 }
                }
            }
        }

        ContactForm {}
    }
}

#[component]
fn FeatureCard(title: String, body: String, children: Element) -> Element {
    rsx! {
        div {
            class: "p-6 rounded-xl bg-gray-50 dark:bg-gray-900 shadow-sm",
            div { class: "text-blue-600 mb-4", {children} }
            h3 { class: "text-xl font-semibold mb-2", "{title}" }
            p { class: "text-gray-600 dark:text-gray-400", "{body}" }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let app = use_app();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut state = use_signal(|| ContactState::Idle);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            state.set(ContactState::Submitting);
            let msg = ContactMessage {
                name: name(),
                email: email(),
                message: message(),
            };
            match app.client.send_contact(&app.config.contact.endpoint, &msg).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    state.set(ContactState::Sent);
                }
                Err(_) => state.set(ContactState::Failed),
            }
        });
    };

    let submitting = state() == ContactState::Submitting;

    rsx! {
        section {
            class: "max-w-xl mx-auto px-4 py-16",
            h2 { class: "text-3xl font-bold mb-6 text-center", "Get in touch" }
            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_submit,
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Name",
                    required: true,
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                textarea {
                    class: "form-input h-32",
                    placeholder: "Message",
                    required: true,
                    value: message(),
                    oninput: move |evt| message.set(evt.value()),
                }
                button {
                    class: "px-6 py-3 rounded-md bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Sending..." } else { "Send Message" }
                }
                match state() {
                    ContactState::Sent => rsx! {
                        p { class: "text-green-600", "Thanks! We'll be in touch soon." }
                    },
                    ContactState::Failed => rsx! {
                        p { class: "text-red-600", "Something went wrong. Please try again." }
                    },
                    _ => rsx! {},
                }
            }
        }
    }
}
