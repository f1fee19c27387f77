//! This crate contains all shared UI for the workspace.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`app`] | `AppContext`: configuration and the API client |
//! | [`session`], [`auth`] | Session state, login/logout, `AuthProvider` |
//! | [`guard`] | `RequireSession` route guard |
//! | [`theme`] | Dark mode context |
//! | [`notify`] | Toast notifications |
//! | [`carousel`], [`debounce`] | Image carousel and debounced input |
//! | [`car_form`], [`car_detail`], [`dashboard`] | Form validation/submission, car lookup, delete flow |

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod app;
pub use app::{use_app, AppContext};

pub mod platform;

pub mod session;
pub use session::Session;

pub mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, LogoutButton};

pub mod guard;
pub use guard::RequireSession;

pub mod theme;
pub use theme::{apply_theme, load_theme_from_storage, toggle_dark_mode, ThemeSignal, ThemeToggle};

pub mod notify;
pub use notify::{use_toast, ToastOptions, ToastProvider};

mod navbar;
pub use navbar::Navbar;

pub mod carousel;
pub use carousel::ImageCarousel;

pub mod debounce;
pub use debounce::use_debounced;

pub mod car_detail;
pub mod car_form;
pub mod dashboard;

#[cfg(test)]
mod testing;
