//! Create and edit form for a single car.

use dioxus::prelude::*;
use ui::car_form::{load_draft, submit, CarDraft, FormMode};
use ui::{use_app, use_toast, ToastOptions};

use crate::Route;

#[component]
pub fn NewCar() -> Element {
    rsx! {
        CarForm { mode: FormMode::Create }
    }
}

#[component]
pub fn EditCar(id: String) -> Element {
    rsx! {
        CarForm { key: "{id}", mode: FormMode::Edit(id.clone()) }
    }
}

#[component]
fn CarForm(mode: FormMode) -> Element {
    let app = use_app();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut draft = use_signal(CarDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut loading = use_signal(|| matches!(mode, FormMode::Edit(_)));

    // Seed the fields once in edit mode.
    let client = app.client.clone();
    let seed_mode = mode.clone();
    use_hook(move || {
        if let FormMode::Edit(id) = seed_mode {
            spawn(async move {
                match load_draft(&client, &id).await {
                    Ok(loaded) => {
                        draft.set(loaded);
                        loading.set(false);
                    }
                    Err(message) => {
                        tracing::warn!("Cannot edit car {id}: {message}");
                        toast_api.error(message.to_string(), ToastOptions::new());
                        nav.replace(Route::Dashboard {});
                    }
                }
            });
        }
    });

    let client = app.client.clone();
    let submit_mode = mode.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mode = submit_mode.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            let current = draft.peek().clone();
            match submit(&client, &mode, &current).await {
                Ok(_) => {
                    toast_api.success(mode.success_message().to_string(), ToastOptions::new());
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "flex justify-center py-20",
                div { class: "spinner" }
            }
        };
    }

    let current = draft();
    let heading = mode.heading();
    let submit_label = mode.submit_label();

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-4 py-8",
            h1 { class: "text-3xl font-bold mb-6", "{heading}" }

            form {
                class: "flex flex-col gap-4 bg-white dark:bg-gray-800 p-6 rounded-xl shadow",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div {
                        class: "px-3 py-2 bg-red-50 border border-red-200 rounded text-red-600 text-sm",
                        "{err}"
                    }
                }

                Field {
                    label: "Title",
                    value: current.title,
                    oninput: move |v| draft.write().title = v,
                }
                div {
                    class: "flex flex-col gap-1",
                    label { class: "text-sm font-medium", "Description" }
                    textarea {
                        class: "form-input h-28",
                        value: current.description,
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                div {
                    class: "grid gap-4 sm:grid-cols-3",
                    Field {
                        label: "Car type",
                        value: current.car_type,
                        oninput: move |v| draft.write().car_type = v,
                    }
                    Field {
                        label: "Company",
                        value: current.company,
                        oninput: move |v| draft.write().company = v,
                    }
                    Field {
                        label: "Dealer",
                        value: current.dealer,
                        oninput: move |v| draft.write().dealer = v,
                    }
                }
                Field {
                    label: "Tags (comma-separated)",
                    value: current.tags,
                    oninput: move |v| draft.write().tags = v,
                }
                Field {
                    label: "Image URLs (comma-separated)",
                    value: current.images,
                    oninput: move |v| draft.write().images = v,
                }

                div {
                    class: "flex justify-end gap-3 pt-2",
                    button {
                        class: "px-4 py-2 rounded-md border border-gray-300 dark:border-gray-600",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push(Route::Dashboard {});
                        },
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "{submit_label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Field(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1",
            label { class: "text-sm font-medium", "{label}" }
            input {
                class: "form-input",
                r#type: "text",
                value: value,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
