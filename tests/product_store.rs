use product_api::{
    config::DatabaseConfig, AppError, DatabaseManager, NewProduct, ProductService,
};
use tempfile::tempdir;

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{} description", name),
        price: 9.99,
        qty: 5,
    }
}

async fn memory_service() -> ProductService {
    let db = DatabaseManager::in_memory().await.unwrap();
    ProductService::new(db.get_pool().clone())
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let service = memory_service().await;

    let first = service.insert(new_product("Widget")).await.unwrap();
    let second = service.insert(new_product("Gadget")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(service.count().await.unwrap(), 2);

    let names: Vec<String> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Widget", "Gadget"]);
}

#[tokio::test]
async fn test_get_by_id_absent_is_none() {
    let service = memory_service().await;
    assert!(service.get_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_name_is_constraint_violation() {
    let service = memory_service().await;
    service.insert(new_product("Widget")).await.unwrap();

    let err = service.insert(new_product("Widget")).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_keeps_id() {
    let service = memory_service().await;
    let created = service.insert(new_product("Widget")).await.unwrap();

    let updated = service
        .update(
            created.id,
            NewProduct {
                name: "Sprocket".to_string(),
                description: "changed".to_string(),
                price: 3.25,
                qty: 0,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(service.get_by_id(created.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_update_and_delete_absent_are_not_found() {
    let service = memory_service().await;

    let err = service.update(4, new_product("Widget")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref id) if id == "4"));

    let err = service.delete(4).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref id) if id == "4"));
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let service = memory_service().await;
    let created = service.insert(new_product("Widget")).await.unwrap();

    let deleted = service.delete(created.id).await.unwrap();
    assert_eq!(deleted, created);
    assert!(service.get_by_id(created.id).await.unwrap().is_none());
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("db.sqlite"),
        max_connections: 2,
    };

    let db = DatabaseManager::new(&config).await.unwrap();
    let created = ProductService::new(db.get_pool().clone())
        .insert(new_product("Widget"))
        .await
        .unwrap();
    db.close().await;

    let db = DatabaseManager::new(&config).await.unwrap();
    let service = ProductService::new(db.get_pool().clone());
    assert_eq!(service.get_by_id(created.id).await.unwrap(), Some(created));
    db.close().await;
}
