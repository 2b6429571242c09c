//! SQLite store tests, including a simulated restart:
//! 1) Open the store on a fresh file and write rows.
//! 2) Drop the pool (simulated restart).
//! 3) Re-open the same file; the table is not recreated and rows are still there.

mod common;

use driver_service::{Driver, DriverStore};

fn driver(first: &str, last: &str) -> Driver {
    Driver {
        id: 0,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@driver.com", first, last),
        phone_number: "888-1234".to_string(),
    }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::sqlite_store(&dir).await;

    let a = store.insert(&driver("Anna", "Smith")).await.unwrap();
    let b = store.insert(&driver("Bob", "Stone")).await.unwrap();
    assert!(a > 0);
    assert!(b > a);

    let fetched = store.get_by_id(a).await.unwrap().unwrap();
    assert_eq!(fetched, Driver { id: a, ..driver("Anna", "Smith") });
    assert!(store.get_by_id(b + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_by_first_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::sqlite_store(&dir).await;

    assert!(store.list_all().await.unwrap().is_empty());
    for first in ["Zoe", "Adam", "Mia"] {
        store.insert(&driver(first, "Doe")).await.unwrap();
    }
    let names: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.first_name)
        .collect();
    assert_eq!(names, vec!["Adam", "Mia", "Zoe"]);
}

#[tokio::test]
async fn test_update_delete_exists() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::sqlite_store(&dir).await;

    let id = store.insert(&driver("Anna", "Smith")).await.unwrap();
    assert!(store.exists(id).await.unwrap());
    assert!(!store.exists(id + 1).await.unwrap());

    let changed = Driver { id, ..driver("Hanna", "Smythe") };
    assert_eq!(store.update(&changed).await.unwrap(), 1);
    assert_eq!(store.get_by_id(id).await.unwrap(), Some(changed));

    // Unknown id: no row touched.
    let ghost = Driver { id: id + 50, ..driver("Ghost", "Rider") };
    assert_eq!(store.update(&ghost).await.unwrap(), 0);

    assert_eq!(store.delete(id).await.unwrap(), 1);
    assert!(!store.exists(id).await.unwrap());
    assert_eq!(store.delete(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_values_are_bound_not_interpolated() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::sqlite_store(&dir).await;

    let nasty = driver("Robert'); DROP TABLE Drivers;--", "O'Brien");
    let id = store.insert(&nasty).await.unwrap();
    let fetched = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.first_name, nasty.first_name);
    assert_eq!(fetched.last_name, "O'Brien");
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_restart_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let store = common::sqlite_store(&dir).await;
        let id = store.insert(&driver("Anna", "Smith")).await.unwrap();
        store.pool().close().await;
        id
    };

    let store = common::sqlite_store(&dir).await;
    store.ping().await.unwrap();
    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);

    // AUTOINCREMENT never reuses ids, even after a delete and a restart.
    store.delete(id).await.unwrap();
    let next = store.insert(&driver("Bob", "Stone")).await.unwrap();
    assert!(next > id);
}
