// ==========================================
// ProductRepository integration tests
// ==========================================
// Store contract over a real on-disk SQLite file: CRUD, conflict
// surfacing, batch atomicity.
// ==========================================

mod test_helpers;

use inventory_console::logging;
use inventory_console::repository::RepositoryError;
use test_helpers::{create_test_repo, product};

#[test]
fn test_crud_cycle() {
    logging::init_test();
    let (_db, repo) = create_test_repo().unwrap();

    repo.insert(&product("B101", "Pen", 10.0, 100)).unwrap();
    assert_eq!(repo.count().unwrap(), 1);

    let mut pen = repo.find_by_id("B101").unwrap().unwrap();
    pen.price = 12.0;
    repo.update(&pen).unwrap();
    assert_eq!(repo.find_by_id("B101").unwrap().unwrap().price, 12.0);

    repo.delete("B101").unwrap();
    assert_eq!(repo.count().unwrap(), 0);
    assert!(matches!(
        repo.delete("B101"),
        Err(RepositoryError::NotFound { .. })
    ));
}

#[test]
fn test_insert_conflict_is_surfaced_not_overwritten() {
    logging::init_test();
    let (_db, repo) = create_test_repo().unwrap();

    repo.insert(&product("B101", "Pen", 10.0, 100)).unwrap();
    let result = repo.insert(&product("B101", "Imposter", 99.0, 1));

    assert!(matches!(
        result,
        Err(RepositoryError::UniqueConstraintViolation(_))
    ));
    // original record intact
    assert_eq!(repo.find_by_id("B101").unwrap().unwrap().name, "Pen");
}

#[test]
fn test_fetch_all_ordered_by_id() {
    logging::init_test();
    let (_db, repo) = create_test_repo().unwrap();

    repo.insert(&product("B300", "Ruler", 15.0, 25)).unwrap();
    repo.insert(&product("B100", "Pen", 10.0, 100)).unwrap();
    repo.insert(&product("B200", "Stapler", 150.0, 5)).unwrap();

    let ids: Vec<String> = repo
        .fetch_all()
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["B100", "B200", "B300"]);
}

#[test]
fn test_upsert_batch_is_atomic() {
    logging::init_test();
    let (_db, repo) = create_test_repo().unwrap();
    repo.insert(&product("B101", "Pen", 10.0, 100)).unwrap();

    // second row violates the store-level CHECK backstop, so the whole
    // batch must roll back, including the first row's replacement
    let batch = vec![
        product("B101", "Gel Pen", 12.0, 90),
        product("B102", "Broken", -1.0, 5),
    ];
    let result = repo.upsert_batch(&batch);

    assert!(result.is_err());
    let pen = repo.find_by_id("B101").unwrap().unwrap();
    assert_eq!(pen.name, "Pen");
    assert_eq!(pen.price, 10.0);
    assert!(repo.find_by_id("B102").unwrap().is_none());
}

#[test]
fn test_replace_all_is_atomic() {
    logging::init_test();
    let (_db, repo) = create_test_repo().unwrap();
    repo.insert(&product("B101", "Pen", 10.0, 100)).unwrap();

    let batch = vec![
        product("B200", "Stapler", 150.0, 5),
        product("B201", "Broken", 5.0, -3),
    ];
    let result = repo.replace_all(&batch);

    // the DELETE must roll back too: prior state fully intact
    assert!(result.is_err());
    assert_eq!(repo.count().unwrap(), 1);
    assert_eq!(repo.find_by_id("B101").unwrap().unwrap().name, "Pen");
}

#[test]
fn test_upsert_batch_empty_is_noop() {
    logging::init_test();
    let (_db, repo) = create_test_repo().unwrap();
    repo.insert(&product("B101", "Pen", 10.0, 100)).unwrap();

    let written = repo.upsert_batch(&[]).unwrap();
    assert_eq!(written, 0);
    assert_eq!(repo.count().unwrap(), 1);
}
