//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::session::{register, validate_registration};
use ui::{use_app, use_auth, use_toast, ToastOptions};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let app = use_app();
    let auth = use_auth();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);

            let user = match validate_registration(
                &username(),
                &email(),
                &password(),
                &confirm_password(),
            ) {
                Ok(user) => user,
                Err(e) => {
                    error.set(Some(e));
                    return;
                }
            };

            loading.set(true);
            match register(&app.client, &user).await {
                Ok(_) => {
                    toast_api.success(
                        "Registration successful! Please log in.".to_string(),
                        ToastOptions::new(),
                    );
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            h1 {
                class: "mb-2 font-bold text-[1.75rem]",
                "Create Account"
            }

            p {
                class: "mb-8 text-gray-600 dark:text-gray-400 text-[0.9375rem]",
                "Sign up for CarFleet"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }

                button {
                    class: "w-full py-2 rounded-md bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-gray-600 dark:text-gray-400",
                "Already have an account? "
                Link {
                    class: "text-blue-600",
                    to: Route::Login {},
                    "Sign in"
                }
            }
        }
    }
}
