//! Loading one car for the read-only detail view.

use api::{CarApi, CarLookup};
use dioxus::prelude::*;

/// Fetch the car with `id`, again whenever `id` changes.
///
/// `None` while a request is in flight. A superseded request is dropped
/// before it can overwrite the newer result.
pub fn use_car_lookup<A>(api: A, id: String) -> Signal<Option<CarLookup>>
where
    A: CarApi + Clone + 'static,
{
    let mut lookup = use_signal(|| None);

    let _fetch = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move {
            lookup.set(None);
            lookup.set(Some(api.get_car(&id).await));
        }
    }));

    lookup
}
