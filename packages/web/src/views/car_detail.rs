//! Read-only view of one car.

use api::CarLookup;
use dioxus::prelude::*;
use ui::car_detail::use_car_lookup;
use ui::icons::FaXmark;
use ui::{use_app, use_toast, Icon, ImageCarousel, ToastOptions};

use crate::Route;

#[component]
pub fn CarDetail(id: String) -> Element {
    let app = use_app();
    let nav = use_navigator();
    let toast_api = use_toast();
    let lookup = use_car_lookup(app.client.clone(), id);

    use_effect(move || {
        if let Some(CarLookup::NotFound | CarLookup::TransportError(_)) = &*lookup.read() {
            toast_api.error("Failed to fetch car details".to_string(), ToastOptions::new());
            nav.replace(Route::Dashboard {});
        }
    });

    let Some(CarLookup::Found(car)) = lookup() else {
        return rsx! {
            div {
                class: "flex justify-center py-20",
                div { class: "spinner" }
            }
        };
    };

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-8",
            div {
                class: "bg-white dark:bg-gray-800 rounded-xl shadow overflow-hidden",
                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-gray-200 dark:border-gray-700",
                    h1 { class: "text-2xl font-bold", "{car.title}" }
                    button {
                        class: "p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-700",
                        title: "Close",
                        onclick: move |_| {
                            nav.push(Route::Dashboard {});
                        },
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                ImageCarousel {
                    images: car.images.clone(),
                    alt: car.title.clone(),
                    empty_label: "No images available".to_string(),
                    class: "h-80",
                }
                div {
                    class: "p-6 flex flex-col gap-4",
                    p { class: "text-gray-700 dark:text-gray-300 whitespace-pre-line", "{car.description}" }
                    dl {
                        class: "grid grid-cols-3 gap-4 text-sm",
                        Detail { label: "Type", value: car.car_type.clone() }
                        Detail { label: "Company", value: car.company.clone() }
                        Detail { label: "Dealer", value: car.dealer.clone() }
                    }
                    if !car.tags.is_empty() {
                        div {
                            class: "flex flex-wrap gap-2",
                            for tag in car.tags.iter() {
                                span {
                                    class: "px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
                                    "{tag}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Detail(label: String, value: String) -> Element {
    rsx! {
        div {
            dt { class: "text-gray-500 dark:text-gray-400", "{label}" }
            dd { class: "font-medium", "{value}" }
        }
    }
}
