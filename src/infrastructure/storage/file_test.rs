use std::env;
use std::path;

use anyhow::Result;
use uuid::Uuid;

use super::FileStorage;
use crate::domain::models::Storage;

fn temp_dir() -> path::PathBuf {
    return env::temp_dir().join(format!("mathmentor-test-{}", Uuid::new_v4()));
}

#[tokio::test]
async fn it_returns_none_before_first_write() -> Result<()> {
    let storage = FileStorage::new(&temp_dir());
    assert!(storage.get("mathmentor_data").await?.is_none());
    assert!(!storage.data_dir.exists());
    return Ok(());
}

#[tokio::test]
async fn it_writes_one_file_per_key() -> Result<()> {
    let dir = temp_dir();
    let storage = FileStorage::new(&dir);
    storage.set("mathmentor_data", r#"{"students":[]}"#).await?;
    storage.set("mathmentor_chat_teacher", "[]").await?;

    assert!(dir.join("mathmentor_data.json").exists());
    assert!(dir.join("mathmentor_chat_teacher.json").exists());
    assert!(!dir.join("mathmentor_data.json.tmp").exists());
    assert_eq!(
        storage.get("mathmentor_data").await?,
        Some(r#"{"students":[]}"#.to_string())
    );

    std::fs::remove_dir_all(dir)?;
    return Ok(());
}

#[tokio::test]
async fn it_overwrites_documents() -> Result<()> {
    let dir = temp_dir();
    let storage = FileStorage::new(&dir);
    storage.set("mathmentor_chat_teacher", "[]").await?;
    storage
        .set("mathmentor_chat_teacher", r#"[{"role":"user","content":"hi"}]"#)
        .await?;
    assert_eq!(
        storage.get("mathmentor_chat_teacher").await?,
        Some(r#"[{"role":"user","content":"hi"}]"#.to_string())
    );

    assert_eq!(storage.location(), dir.to_string_lossy().to_string());

    std::fs::remove_dir_all(dir)?;
    return Ok(());
}
