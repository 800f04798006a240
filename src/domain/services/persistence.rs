#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CorruptDataPolicy;
use crate::domain::models::Message;
use crate::domain::models::Roster;
use crate::domain::models::StorageBox;
use crate::domain::models::StorageName;
use crate::infrastructure::storage::StorageManager;

pub const ROSTER_KEY: &str = "mathmentor_data";
pub const CHAT_KEY: &str = "mathmentor_chat_teacher";

/// Reads and writes the JSON documents backing the app. The roster and the
/// teacher chat are independent roots and never share a key.
pub struct Persistence {
    storage: StorageBox,
    corrupt_data_policy: CorruptDataPolicy,
}

impl Persistence {
    pub fn new(storage: StorageBox, corrupt_data_policy: CorruptDataPolicy) -> Persistence {
        return Persistence {
            storage,
            corrupt_data_policy,
        };
    }

    /// Builds the storage backend and corrupt data policy selected in
    /// the loaded configuration.
    pub fn from_config() -> Result<Persistence> {
        let storage_name_str = Config::get(ConfigKey::Storage);
        let storage_name = match StorageName::parse(storage_name_str.to_string()) {
            Some(name) => name,
            None => bail!(format!("No storage implemented for {storage_name_str}")),
        };

        let policy_str = Config::get(ConfigKey::OnCorruptData);
        let policy = match CorruptDataPolicy::parse(policy_str.to_string()) {
            Some(policy) => policy,
            None => bail!(format!("Unknown corrupt data policy {policy_str}")),
        };

        let data_dir = path::PathBuf::from(Config::get(ConfigKey::DataDir));
        let storage = StorageManager::get(storage_name, &data_dir)?;

        return Ok(Persistence::new(storage, policy));
    }

    pub fn storage(&self) -> &StorageBox {
        return &self.storage;
    }

    pub async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let payload = match self.storage.get(key).await? {
            Some(payload) => payload,
            None => return Ok(T::default()),
        };

        let err = match serde_json::from_str::<T>(&payload) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if self.corrupt_data_policy == CorruptDataPolicy::Fail {
            tracing::error!(key, error = %err, "Stored data is corrupt");
            bail!(format!(
                "Stored data for '{key}' in {} could not be read: {err}\nFix or remove it, or start with --on-corrupt-data {}",
                self.storage.location(),
                CorruptDataPolicy::Reset
            ));
        }

        let backup_key = format!("{key}.corrupt");
        self.storage.set(&backup_key, &payload).await?;
        tracing::warn!(key, backup_key = %backup_key, error = %err, "Stored data is corrupt, starting over");

        return Ok(T::default());
    }

    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string_pretty(value)?;
        self.storage.set(key, &payload).await?;

        return Ok(());
    }

    pub async fn load_roster(&self) -> Result<Roster> {
        return self.load(ROSTER_KEY).await;
    }

    pub async fn save_roster(&self, roster: &Roster) -> Result<()> {
        return self.save(ROSTER_KEY, roster).await;
    }

    pub async fn load_chat(&self) -> Result<Vec<Message>> {
        return self.load(CHAT_KEY).await;
    }

    pub async fn save_chat(&self, messages: &[Message]) -> Result<()> {
        return self.save(CHAT_KEY, &messages).await;
    }
}
