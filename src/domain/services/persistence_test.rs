use anyhow::Result;
use test_utils::chat_fixture;
use test_utils::roster_fixture;

use super::Persistence;
use super::CHAT_KEY;
use super::ROSTER_KEY;
use crate::domain::models::CorruptDataPolicy;
use crate::domain::models::Level;
use crate::domain::models::Roster;
use crate::domain::models::Storage;
use crate::domain::models::Student;
use crate::infrastructure::storage::file::FileStorage;
use crate::infrastructure::storage::memory::MemoryStorage;

async fn persistence_with(
    documents: Vec<(&str, &str)>,
    policy: CorruptDataPolicy,
) -> Result<Persistence> {
    let storage = MemoryStorage::default();
    for (key, value) in documents {
        storage.set(key, value).await?;
    }

    return Ok(Persistence::new(Box::new(storage), policy));
}

#[tokio::test]
async fn it_defaults_when_nothing_is_stored() -> Result<()> {
    let persistence = persistence_with(vec![], CorruptDataPolicy::Fail).await?;

    assert_eq!(persistence.load_roster().await?, Roster::default());
    assert!(persistence.load_chat().await?.is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_loads_stored_documents() -> Result<()> {
    let persistence = persistence_with(
        vec![(ROSTER_KEY, roster_fixture()), (CHAT_KEY, chat_fixture())],
        CorruptDataPolicy::Fail,
    )
    .await?;

    assert_eq!(persistence.load_roster().await?.len(), 2);
    assert_eq!(persistence.load_chat().await?.len(), 2);
    return Ok(());
}

#[tokio::test]
async fn it_round_trips_the_roster() -> Result<()> {
    let persistence = persistence_with(vec![], CorruptDataPolicy::Fail).await?;
    let mut roster: Roster = serde_json::from_str(roster_fixture())?;
    roster.add(Student::new(
        "Marta Diaz",
        11,
        Level::Two,
        chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
    ));

    persistence.save_roster(&roster).await?;
    assert_eq!(persistence.load_roster().await?, roster);
    return Ok(());
}

#[tokio::test]
async fn it_keeps_roster_and_chat_independent() -> Result<()> {
    let persistence =
        persistence_with(vec![(ROSTER_KEY, roster_fixture())], CorruptDataPolicy::Fail).await?;
    persistence.save_chat(&[]).await?;

    assert_eq!(persistence.load_roster().await?.len(), 2);
    assert_eq!(
        persistence.storage().get(CHAT_KEY).await?,
        Some("[]".to_string())
    );
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_corrupt_data() -> Result<()> {
    let persistence =
        persistence_with(vec![(ROSTER_KEY, "{\"students\": [")], CorruptDataPolicy::Fail).await?;

    let err = persistence.load_roster().await.unwrap_err();
    assert!(err.to_string().starts_with("Stored data for 'mathmentor_data' in memory"));
    assert!(err.to_string().contains("--on-corrupt-data reset"));
    return Ok(());
}

#[tokio::test]
async fn it_resets_corrupt_data_keeping_a_backup() -> Result<()> {
    let persistence =
        persistence_with(vec![(CHAT_KEY, "not json")], CorruptDataPolicy::Reset).await?;

    assert!(persistence.load_chat().await?.is_empty());
    assert_eq!(
        persistence
            .storage()
            .get("mathmentor_chat_teacher.corrupt")
            .await?,
        Some("not json".to_string())
    );
    return Ok(());
}

#[tokio::test]
async fn it_resets_corrupt_files_keeping_a_backup_file() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("mathmentor-test-{}", uuid::Uuid::new_v4()));
    let storage = FileStorage::new(&dir);
    storage.set(ROSTER_KEY, "{\"students\": [").await?;
    let persistence = Persistence::new(Box::new(storage), CorruptDataPolicy::Reset);

    assert_eq!(persistence.load_roster().await?, Roster::default());
    assert_eq!(
        std::fs::read_to_string(dir.join("mathmentor_data.corrupt.json"))?,
        "{\"students\": ["
    );
    assert!(dir.join("mathmentor_data.json").exists());

    std::fs::remove_dir_all(dir)?;
    return Ok(());
}
