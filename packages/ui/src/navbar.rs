use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaCar, FaPlus, FaRightFromBracket};
use crate::theme::ThemeToggle;
use crate::Icon;

/// Top bar for signed-in users. Renders nothing without a session.
///
/// Navigation is left to the caller so this crate stays router-agnostic.
#[component]
pub fn Navbar(
    #[props(default = "CarFleet".to_string())] brand: String,
    on_home: EventHandler<()>,
    on_add_car: EventHandler<()>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    if !auth().is_authenticated() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "bg-white dark:bg-gray-800 shadow",
            div {
                class: "max-w-7xl mx-auto px-4 h-16 flex items-center justify-between",
                button {
                    class: "flex items-center gap-2 text-xl font-bold text-gray-900 dark:text-white",
                    onclick: move |_| on_home.call(()),
                    Icon { icon: FaCar, width: 20, height: 20 }
                    "{brand}"
                }
                div {
                    class: "flex items-center gap-3",
                    ThemeToggle {
                        class: "p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700",
                    }
                    button {
                        class: "flex items-center gap-2 px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700",
                        onclick: move |_| on_add_car.call(()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Add Car"
                    }
                    LogoutButton {
                        class: "flex items-center gap-2 px-4 py-2 rounded-md bg-red-600 text-white hover:bg-red-700",
                        on_logged_out: move |_| on_logged_out.call(()),
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
