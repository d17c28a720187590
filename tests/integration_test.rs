use order_desk::clients::ActorClient;
use order_desk::config::{AppConfig, StorageConfig};
use order_desk::lifecycle::OrderSystem;
use order_desk::model::{OrderDraft, OrderStatus};
use order_desk::storage::{FileStorage, StorageInterface};
use order_desk::views::OrderViews;
use std::sync::Arc;

fn pizza() -> OrderDraft {
    OrderDraft {
        kind_of_food: "Pizza".to_string(),
        quantity: "2".to_string(),
        pickup_date_time: "18:00".to_string(),
        personal_info: "Jo".to_string(),
        phone_number: "555".to_string(),
        address: "1 Main St".to_string(),
    }
}

fn file_config(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        storage: StorageConfig::File {
            path: dir.path().to_path_buf(),
        },
        ..AppConfig::default()
    }
}

/// Full system test: create, cancel, complete, purge against the file backend.
#[tokio::test]
async fn test_pizza_order_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let system = OrderSystem::from_config(&file_config(&dir)).unwrap();
    let client = &system.order_client;

    let a = client.create_order(pizza()).await.unwrap();
    let orders = client.orders().await.unwrap();
    let views = OrderViews::new(&orders);
    assert_eq!(views.all().len(), 1);
    assert_eq!(views.pending()[0].id, a);

    client.mark_cancelled(a).await.unwrap();
    let orders = client.orders().await.unwrap();
    let views = OrderViews::new(&orders);
    assert!(views.pending().is_empty());
    assert_eq!(views.cancelled()[0].id, a);
    assert!(views.completed_display().is_empty());

    client.mark_completed(a).await.unwrap();
    let orders = client.orders().await.unwrap();
    let views = OrderViews::new(&orders);
    assert_eq!(views.cancelled()[0].id, a);
    assert!(views.completed_display().is_empty());
    assert_eq!(orders[0].status(), OrderStatus::Cancelled);

    assert_eq!(client.delete_completed_orders().await.unwrap(), 1);
    assert!(client.orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let system = OrderSystem::from_config(&config).unwrap();
    let first = system.order_client.create_order(pizza()).await.unwrap();
    let mut sushi = pizza();
    sushi.kind_of_food = "Sushi".to_string();
    system.order_client.create_order(sushi).await.unwrap();
    system.order_client.mark_completed(first).await.unwrap();
    let before = system.order_client.orders().await.unwrap();
    system.shutdown().await.unwrap();

    assert!(dir.path().join("orders.json").exists());

    let system = OrderSystem::from_config(&config).unwrap();
    assert_eq!(system.order_client.orders().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_is_camel_case_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let system = OrderSystem::from_config(&file_config(&dir)).unwrap();
    let id = system.order_client.create_order(pizza()).await.unwrap();
    system.shutdown().await.unwrap();

    let storage = FileStorage::new(dir.path());
    let bytes = storage.get_bytes("orders").await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json[0]["id"], serde_json::json!(id.0));
    assert_eq!(json[0]["kindOfFood"], "Pizza");
    assert_eq!(json[0]["pickupDateTime"], "18:00");
    assert_eq!(json[0]["completed"], false);
    assert_eq!(json[0]["cancelled"], false);
}

#[tokio::test]
async fn test_legacy_snapshot_without_cancelled_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("orders.json"),
        r#"[{"id":1,"kindOfFood":"Soup","quantity":"1","pickupDateTime":"noon",
            "personalInfo":"Al","phoneNumber":"1","address":"here","completed":true}]"#,
    )
    .unwrap();

    let system = OrderSystem::from_config(&file_config(&dir)).unwrap();
    let orders = system.order_client.orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert!(orders[0].completed);
    assert!(!orders[0].cancelled);

    // New ids continue after the restored ones.
    let id = system.order_client.create_order(pizza()).await.unwrap();
    assert!(id.0 > 1);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("orders.json"), "[{\"id\": ").unwrap();

    let system = OrderSystem::from_config(&file_config(&dir)).unwrap();
    assert!(system.order_client.orders().await.unwrap().is_empty());

    // The next write replaces the unreadable snapshot.
    system.order_client.create_order(pizza()).await.unwrap();
    system.shutdown().await.unwrap();

    let system = OrderSystem::from_config(&file_config(&dir)).unwrap();
    assert_eq!(system.order_client.orders().await.unwrap().len(), 1);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_memory_system_shutdown() {
    let system = OrderSystem::new(Arc::new(order_desk::storage::MemoryStorage::new()), 4);
    let id = system.order_client.create_order(pizza()).await.unwrap();
    assert!(system.order_client.get(id).await.unwrap().is_some());
    assert!(system.shutdown().await.is_ok());
}
