//! Repository Integration Tests
//!
//! Tests for StockRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, StockItem};
    use crate::repository::{init_db, Repository, StockRepository};
    use std::path::PathBuf;

    async fn setup_test_repo() -> StockRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        StockRepository::new(db_state.conn)
    }

    fn sample(brand: &str, quantity: i64) -> StockItem {
        StockItem::new(brand.to_string(), quantity, 120.0, None)
    }

    #[tokio::test]
    async fn test_create_stock_item() {
        let repo = setup_test_repo().await;

        let item = sample("Vanilla", 10);
        let created = repo.create(&item).await.expect("Failed to create");

        assert_eq!(created.id, item.id);
        assert_eq!(created.brand, "Vanilla");
        assert_eq!(created.quantity, 10);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_repo().await;

        let created = repo.create(&sample("Chocolate", 5)).await.unwrap();

        let found = repo.find_by_id(&created.id).await.expect("Find failed");
        assert!(found.is_some());
        assert_eq!(found.unwrap().brand, "Chocolate");

        let missing = repo.find_by_id(&"nope".to_string()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_ordered_newest_first() {
        let repo = setup_test_repo().await;

        let mut first = sample("Older", 1);
        first.created_at = 1_000;
        let mut second = sample("Newer", 2);
        second.created_at = 2_000;

        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let items = repo.list().await.expect("List failed");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].brand, "Newer");
        assert_eq!(items[1].brand, "Older");
    }

    #[tokio::test]
    async fn test_update_stock_item() {
        let repo = setup_test_repo().await;

        let mut created = repo.create(&sample("Original", 3)).await.unwrap();
        created.brand = "Renamed".to_string();
        created.price = 99.5;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.brand, "Renamed");

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.brand, "Renamed");
        assert_eq!(found.price, 99.5);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = setup_test_repo().await;

        let ghost = sample("Ghost", 0);
        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_stock_item() {
        let repo = setup_test_repo().await;

        let created = repo.create(&sample("To delete", 1)).await.unwrap();
        repo.delete(&created.id).await.expect("Delete failed");

        let found = repo.find_by_id(&created.id).await.unwrap();
        assert!(found.is_none());

        let err = repo.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_set_quantity() {
        let repo = setup_test_repo().await;

        let created = repo.create(&sample("Counted", 5)).await.unwrap();
        repo.set_quantity(&created.id, 13).await.expect("Set failed");

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.quantity, 13);
        assert!(found.updated_at >= created.updated_at);

        let err = repo.set_quantity("missing", 1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_description_roundtrip() {
        let repo = setup_test_repo().await;

        let mut item = sample("Described", 2);
        item.description = Some("family pack".to_string());
        repo.create(&item).await.unwrap();

        let found = repo.find_by_id(&item.id).await.unwrap().unwrap();
        assert_eq!(found.description.as_deref(), Some("family pack"));
    }
}
