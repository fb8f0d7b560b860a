//! Integration tests against a local MongoDB.
//!
//! These require a `mongod` listening on `mongodb://localhost:27017`. Each
//! test uses a throwaway database and drops it afterwards.
//!
//! Run with: `cargo test -p redactia-store --test status -- --ignored`

use redactia_core::models::status::StatusCheck;
use redactia_store::{client, status};

async fn throwaway_db() -> mongodb::Database {
    let db_name = format!("redactia_test_{}", uuid::Uuid::new_v4().simple());
    client::connect("mongodb://localhost:27017", &db_name)
        .await
        .expect("connection string should parse")
}

#[tokio::test]
#[ignore]
async fn append_then_list_round_trips_exactly() {
    let db = throwaway_db().await;

    let check = StatusCheck::new("client-a".to_string());
    status::append_status_check(&db, &check)
        .await
        .expect("insert should succeed");

    let listed = status::list_status_checks(&db)
        .await
        .expect("list should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, check.id);
    assert_eq!(listed[0].client_name, "client-a");
    assert_eq!(listed[0].timestamp, check.timestamp);

    db.drop().await.expect("drop throwaway db");
}

#[tokio::test]
#[ignore]
async fn listing_preserves_insertion_order() {
    let db = throwaway_db().await;

    for name in ["first", "second", "third"] {
        let check = StatusCheck::new(name.to_string());
        status::append_status_check(&db, &check)
            .await
            .expect("insert should succeed");
    }

    let listed = status::list_status_checks(&db)
        .await
        .expect("list should succeed");

    let names: Vec<&str> = listed.iter().map(|c| c.client_name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);

    db.drop().await.expect("drop throwaway db");
}

#[tokio::test]
#[ignore]
async fn empty_collection_lists_nothing() {
    let db = throwaway_db().await;

    let listed = status::list_status_checks(&db)
        .await
        .expect("list should succeed");
    assert!(listed.is_empty());

    db.drop().await.expect("drop throwaway db");
}

/// A malformed connection string is the one failure `connect` can report.
#[tokio::test]
async fn malformed_uri_fails_fast() {
    let result = client::connect("not a mongo uri", "redactia").await;
    assert!(result.is_err());
}
