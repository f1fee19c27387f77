//! Dark mode context.
//!
//! The flag lives in a `Signal<bool>` provided by the root component. It is
//! persisted under `darkMode` and mirrored as the `dark` class on `<html>`.

use dioxus::prelude::*;
use store::session::{load_dark_mode, save_dark_mode};
use store::KeyValueStore;

use crate::icons::{FaMoon, FaSun};
use crate::platform::make_store;
use crate::Icon;

pub type ThemeSignal = Signal<bool>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Read the persisted flag into `theme` and apply it to the document.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let dark = load_dark_mode(&make_store());
    theme.set(dark);
    apply_theme(dark);
}

/// Toggle the `dark` class on the document root.
pub fn apply_theme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
                tracing::warn!("Failed to apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Theme set to {}", if dark { "dark" } else { "light" });
}

/// Flip `current`, persist the result and return it.
pub fn flip_dark_mode(store: &impl KeyValueStore, current: bool) -> bool {
    let dark = !current;
    save_dark_mode(store, dark);
    dark
}

pub fn toggle_dark_mode(theme: &mut ThemeSignal) {
    let dark = flip_dark_mode(&make_store(), *theme.peek());
    theme.set(dark);
    apply_theme(dark);
}

#[component]
pub fn ThemeToggle(#[props(default = "".to_string())] class: String) -> Element {
    let mut theme = use_theme();
    let dark = theme();

    rsx! {
        button {
            class: "{class}",
            title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| toggle_dark_mode(&mut theme),
            if dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
