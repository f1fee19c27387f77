//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{sign_in, use_app, use_auth};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let app = use_app();
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match sign_in(&app, auth, &email(), &password()).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
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
                "Sign in"
            }

            p {
                class: "mb-8 text-gray-600 dark:text-gray-400 text-[0.9375rem]",
                "Welcome back to CarFleet"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
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

                button {
                    class: "w-full py-2 rounded-md bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-gray-600 dark:text-gray-400",
                "Don't have an account? "
                Link {
                    class: "text-blue-600",
                    to: Route::Register {},
                    "Sign up"
                }
            }
        }
    }
}
