//! Dashboard delete flow.

use api::{ApiError, Car, CarApi};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this car?";

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the prompt. Nothing was sent.
    Cancelled,
    /// Deleted; carries the re-fetched list.
    Deleted(Result<Vec<Car>, ApiError>),
    /// The delete call failed. The current list stays as it is.
    Failed(ApiError),
}

/// Confirm, delete, then re-fetch the list for the active search term.
pub async fn delete_and_refresh<A: CarApi>(
    api: &A,
    id: &str,
    search: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> DeleteOutcome {
    if !confirm(DELETE_PROMPT) {
        return DeleteOutcome::Cancelled;
    }
    match api.delete_car(id).await {
        Ok(()) => DeleteOutcome::Deleted(api.list_cars(search).await),
        Err(e) => DeleteOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{car, FakeApi};

    fn fleet() -> FakeApi {
        FakeApi::with_cars(vec![car("c1", "Roadster"), car("c2", "Pickup")])
    }

    #[tokio::test]
    async fn test_cancel_issues_no_call() {
        let api = fleet();
        let mut asked = None;
        let outcome = delete_and_refresh(&api, "c1", "", |prompt| {
            asked = Some(prompt.to_string());
            false
        })
        .await;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(asked.as_deref(), Some(DELETE_PROMPT));
        assert!(api.calls().is_empty());
        assert_eq!(api.car_ids(), vec!["c1", "c2"]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_refreshes_list() {
        let api = fleet();
        let outcome = delete_and_refresh(&api, "c1", "", |_| true).await;

        let DeleteOutcome::Deleted(Ok(cars)) = outcome else {
            panic!("expected refreshed list, got {outcome:?}");
        };
        assert!(cars.iter().all(|c| c.id != "c1"));
        assert_eq!(cars.len(), 1);
        assert_eq!(api.calls(), vec!["delete:c1", "list:"]);
    }

    #[tokio::test]
    async fn test_refresh_keeps_search_term() {
        let api = fleet();
        let outcome = delete_and_refresh(&api, "c2", "road", |_| true).await;
        let DeleteOutcome::Deleted(Ok(cars)) = outcome else {
            panic!("expected refreshed list");
        };
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].id, "c1");
        assert_eq!(api.calls(), vec!["delete:c2", "list:road"]);
    }

    #[tokio::test]
    async fn test_failed_delete_skips_refresh() {
        let api = fleet().failing_deletes();
        let outcome = delete_and_refresh(&api, "c1", "", |_| true).await;

        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert_eq!(api.calls(), vec!["delete:c1"]);
        assert_eq!(api.car_ids(), vec!["c1", "c2"]);
    }
}
