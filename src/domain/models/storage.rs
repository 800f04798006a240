#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StorageName {
    File,
    Memory,
}

impl StorageName {
    pub fn parse(text: String) -> Option<StorageName> {
        return StorageName::iter().find(|e| return e.to_string() == text);
    }
}

/// What to do when a stored document exists but cannot be deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CorruptDataPolicy {
    /// Abort start-up with an error naming the key.
    Fail,
    /// Back up the raw value under `<key>.corrupt` and start from defaults.
    Reset,
}

impl CorruptDataPolicy {
    pub fn parse(text: String) -> Option<CorruptDataPolicy> {
        return CorruptDataPolicy::iter().find(|e| return e.to_string() == text);
    }
}

/// A profile-scoped key-value store holding serialized documents.
#[async_trait]
pub trait Storage {
    /// Human readable location of the store, printed by `data dir`.
    fn location(&self) -> String;

    /// Returns the raw document stored under `key`, or `None` when the key
    /// has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub type StorageBox = Box<dyn Storage + Send + Sync>;
