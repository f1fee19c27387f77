//! Searchable list of cars with delete.

use api::{ApiError, Car, CarApi};
use dioxus::prelude::*;
use ui::dashboard::{delete_and_refresh, DeleteOutcome};
use ui::icons::{FaEye, FaMagnifyingGlass, FaPen, FaPlus, FaTrash};
use ui::{platform, use_app, use_debounced, use_toast};
use ui::{Icon, ImageCarousel, ToastOptions};

use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum Listing {
    Loading,
    Loaded(Vec<Car>),
    Failed,
}

impl From<Result<Vec<Car>, ApiError>> for Listing {
    fn from(result: Result<Vec<Car>, ApiError>) -> Self {
        match result {
            Ok(cars) => Listing::Loaded(cars),
            Err(e) => {
                tracing::error!("Error fetching cars: {e}");
                Listing::Failed
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let toast_api = use_toast();
    let mut search = use_signal(String::new);
    let committed = use_debounced(search, app.config.timing.search_debounce());
    let mut listing = use_signal(|| Listing::Loading);
    let interval = app.config.timing.carousel_interval_secs;

    // Restarting the resource drops the previous fetch.
    let client = app.client.clone();
    let _fetch = use_resource(move || {
        let client = client.clone();
        let term = committed();
        async move {
            listing.set(Listing::Loading);
            listing.set(client.list_cars(&term).await.into());
        }
    });

    let client = app.client.clone();
    let on_delete = move |id: String| {
        let client = client.clone();
        spawn(async move {
            let term = committed.peek().clone();
            match delete_and_refresh(&client, &id, &term, platform::confirm).await {
                DeleteOutcome::Cancelled => {}
                DeleteOutcome::Deleted(list) => {
                    toast_api.success("Car deleted successfully".to_string(), ToastOptions::new());
                    listing.set(list.into());
                }
                DeleteOutcome::Failed(e) => {
                    tracing::error!("Error deleting car: {e}");
                    toast_api.error(e.message_or("Failed to delete car"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 py-8",
            div {
                class: "flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8",
                h1 { class: "text-3xl font-bold", "My Cars" }
                div {
                    class: "relative w-full md:w-80",
                    span {
                        class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-400",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    }
                    input {
                        class: "form-input pl-9",
                        r#type: "search",
                        placeholder: "Search cars...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
            }

            match listing() {
                Listing::Loading => rsx! {
                    div {
                        class: "flex justify-center py-20",
                        div { class: "spinner" }
                    }
                },
                Listing::Failed => rsx! {
                    div {
                        class: "px-4 py-3 bg-red-50 border border-red-200 rounded text-red-600",
                        "Failed to fetch cars"
                    }
                },
                Listing::Loaded(cars) if cars.is_empty() => rsx! {
                    div {
                        class: "text-center py-20",
                        p { class: "text-gray-500 dark:text-gray-400 mb-6", "No cars found." }
                        button {
                            class: "inline-flex items-center gap-2 px-6 py-3 rounded-md bg-blue-600 text-white hover:bg-blue-700",
                            onclick: move |_| {
                                nav.push(Route::NewCar {});
                            },
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            "Add New Car"
                        }
                    }
                },
                Listing::Loaded(cars) => rsx! {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for car in cars {
                            CarCard {
                                key: "{car.id}",
                                car: car.clone(),
                                interval,
                                on_delete: on_delete.clone(),
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CarCard(car: Car, interval: u64, on_delete: EventHandler<String>) -> Element {
    let nav = use_navigator();
    let view_id = car.id.clone();
    let edit_id = car.id.clone();
    let delete_id = car.id.clone();

    rsx! {
        div {
            class: "bg-white dark:bg-gray-800 rounded-xl shadow overflow-hidden flex flex-col",
            ImageCarousel {
                images: car.images.clone(),
                alt: car.title.clone(),
                auto_advance_secs: interval,
            }
            div {
                class: "p-4 flex-1 flex flex-col",
                h2 { class: "text-xl font-semibold mb-1", "{car.title}" }
                p { class: "text-sm text-gray-500 dark:text-gray-400 mb-2", "{car.company} · {car.car_type}" }
                p { class: "text-gray-600 dark:text-gray-300 line-clamp-2 mb-3", "{car.description}" }
                div {
                    class: "flex flex-wrap gap-2 mb-4",
                    for tag in car.tags.iter() {
                        span {
                            class: "px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
                            "{tag}"
                        }
                    }
                }
                div {
                    class: "mt-auto flex gap-2",
                    button {
                        class: "card-action",
                        title: "View",
                        onclick: move |_| {
                            nav.push(Route::CarDetail { id: view_id.clone() });
                        },
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                    button {
                        class: "card-action",
                        title: "Edit",
                        onclick: move |_| {
                            nav.push(Route::EditCar { id: edit_id.clone() });
                        },
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "card-action text-red-600",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
