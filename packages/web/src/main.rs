use dioxus::prelude::*;

use store::ClientConfig;
use ui::{AppContext, AuthProvider, Navbar, RequireSession, ThemeSignal, ToastProvider};
use views::{CarDetail, Dashboard, EditCar, Landing, Login, NewCar, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(Guarded)]
            #[route("/cars")]
            Dashboard {},
            #[route("/cars/new")]
            NewCar {},
            #[route("/cars/:id")]
            CarDetail { id: String },
            #[route("/cars/:id/edit")]
            EditCar { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Embedded at build time; `CARFLEET_API_URL` overrides the API base.
const CONFIG_TOML: &str = include_str!("../carfleet.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("{e}; using defaults");
        ClientConfig::default()
    });
    config.with_api_url(option_env!("CARFLEET_API_URL"))
}

#[component]
fn App() -> Element {
    let app = use_context_provider(|| AppContext::new(load_config()));

    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(true));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    tracing::debug!("API at {}", app.config.api.endpoint("/"));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                default_duration: Some(app.config.timing.toast_lifetime()),
                Router::<Route> {}
            }
        }
    }
}

/// Navbar above every page.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100",
            Navbar {
                on_home: move |_| {
                    nav.push(Route::Dashboard {});
                },
                on_add_car: move |_| {
                    nav.push(Route::NewCar {});
                },
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            Outlet::<Route> {}
        }
    }
}

/// Pages below this layout need a session.
#[component]
fn Guarded() -> Element {
    let login = Route::Login {}.to_string();

    rsx! {
        RequireSession {
            login_path: login,
            Outlet::<Route> {}
        }
    }
}
