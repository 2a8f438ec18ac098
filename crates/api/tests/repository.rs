//! Repository tests against an in-memory SQLite database.
//!
//! Each test opens its own `sqlite::memory:` pool and runs the embedded
//! migrations, so tests are fully isolated and need no external services.

#![allow(clippy::unwrap_used)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use brewdex_api::db::{self, CafeRepository, RepositoryError};
use brewdex_api::models::cafe::NewCafe;
use brewdex_core::{Amenities, CafeId};

/// Open an in-memory database with the schema applied.
///
/// Pooled connections do not share an in-memory database, so the pool is
/// pinned to a single connection.
async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn sample(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: name.to_owned(),
        map_url: format!("https://maps.example.com/{name}"),
        img_url: format!("https://img.example.com/{name}.jpg"),
        location: location.to_owned(),
        seats: "20-30".to_owned(),
        amenities: Amenities {
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
        },
        coffee_price: "£2.50".to_owned(),
    }
}

#[tokio::test]
async fn create_assigns_fresh_ids_and_persists() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let first = repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();
    assert_eq!(first.id, CafeId::new(1));
    assert_eq!(first.name, "Blue Bottle");
    assert_eq!(first.coffee_price, "£2.50");

    let second = repo.create(&sample("Monmouth", "Borough")).await.unwrap();
    assert_ne!(first.id, second.id);

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|c| c.id == first.id && c.name == "Blue Bottle"));
}

#[tokio::test]
async fn duplicate_name_is_rejected_without_mutating_the_store() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();

    let err = repo
        .create(&sample("Blue Bottle", "Borough"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_check_trims_surrounding_whitespace() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();

    let err = repo
        .create(&sample("  Blue Bottle  ", "Borough"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
async fn list_all_is_sorted_by_name_regardless_of_insertion_order() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    repo.create(&sample("Zebra Coffee", "Hackney")).await.unwrap();
    repo.create(&sample("Attendant", "Fitzrovia")).await.unwrap();
    repo.create(&sample("Monmouth", "Borough")).await.unwrap();

    let names: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Attendant", "Monmouth", "Zebra Coffee"]);
}

#[tokio::test]
async fn find_by_location_is_case_sensitive_exact_match() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    repo.create(&sample("Cafe Une", "Paris")).await.unwrap();
    repo.create(&sample("Cafe Deux", "paris")).await.unwrap();
    repo.create(&sample("Cafe Trois", "Paris 11e")).await.unwrap();

    let found = repo.find_by_location("Paris").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found.first().unwrap().name, "Cafe Une");

    assert!(repo.find_by_location("Lyon").await.unwrap().is_empty());
}

#[tokio::test]
async fn update_price_changes_only_the_price() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let created = repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();

    let updated = repo.update_price(created.id, "£3.10").await.unwrap();
    assert_eq!(updated.coffee_price, "£3.10");

    // Every other field is untouched.
    let mut expected = created;
    expected.coffee_price = "£3.10".to_owned();
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn update_price_rejects_empty_price() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let created = repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();

    let err = repo.update_price(created.id, "").await.unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidInput(_)));

    // Store untouched
    let all = repo.list_all().await.unwrap();
    assert_eq!(all.first().unwrap().coffee_price, "£2.50");
}

#[tokio::test]
async fn update_price_on_unknown_id_is_not_found() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let err = repo.update_price(CafeId::new(99), "£3.10").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn delete_removes_exactly_the_targeted_record() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let keep = repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();
    let gone = repo.create(&sample("Monmouth", "Borough")).await.unwrap();

    repo.delete(gone.id).await.unwrap();

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all.first().unwrap().id, keep.id);
}

#[tokio::test]
async fn delete_on_unknown_id_is_not_found() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let err = repo.delete(CafeId::new(42)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let first = repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();
    repo.delete(first.id).await.unwrap();

    let second = repo.create(&sample("Monmouth", "Borough")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn get_random_on_empty_store_is_an_explicit_error() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    let err = repo.get_random().await.unwrap_err();
    assert!(matches!(err, RepositoryError::Empty));
}

#[tokio::test]
async fn get_random_returns_one_of_the_stored_cafes() {
    let pool = memory_pool().await;
    let repo = CafeRepository::new(&pool);

    repo.create(&sample("Blue Bottle", "Shoreditch")).await.unwrap();
    repo.create(&sample("Monmouth", "Borough")).await.unwrap();

    for _ in 0..10 {
        let cafe = repo.get_random().await.unwrap();
        assert!(cafe.name == "Blue Bottle" || cafe.name == "Monmouth");
    }
}
