//! # Toast notifications
//!
//! Toasts come from `dioxus-primitives`. [`ToastProvider`] is mounted once at
//! the root with the configured `toast_secs` as its default lifetime, and
//! views raise toasts through [`use_toast`]:
//!
//! ```ignore
//! let toast_api = use_toast();
//! toast_api.success("Car created successfully".to_string(), ToastOptions::new());
//! ```

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider, Toasts};
