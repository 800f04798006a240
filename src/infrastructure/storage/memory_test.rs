use anyhow::Result;

use super::MemoryStorage;
use crate::domain::models::Storage;

#[tokio::test]
async fn it_returns_none_for_missing_keys() -> Result<()> {
    let storage = MemoryStorage::default();
    assert!(storage.get("mathmentor_data").await?.is_none());
    return Ok(());
}

#[tokio::test]
async fn it_sets_and_gets() -> Result<()> {
    let storage = MemoryStorage::default();
    storage.set("mathmentor_data", r#"{"students":[]}"#).await?;
    storage.set("mathmentor_data", r#"{"students":[1]}"#).await?;

    assert_eq!(
        storage.get("mathmentor_data").await?,
        Some(r#"{"students":[1]}"#.to_string())
    );
    return Ok(());
}

#[tokio::test]
async fn it_reports_its_location() -> Result<()> {
    let storage = MemoryStorage::default();
    storage.set("mathmentor_data", "[]").await?;

    assert!(storage.get("mathmentor_chat_teacher").await?.is_none());
    assert_eq!(storage.location(), "memory");
    return Ok(());
}
