#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::models::Storage;

/// Keeps documents for the lifetime of the process only. Handy for trying
/// the app out without touching the data directory.
#[derive(Default)]
pub struct MemoryStorage {
    documents: DashMap<String, String>,
}

#[async_trait]
impl Storage for MemoryStorage {
    fn location(&self) -> String {
        return "memory".to_string();
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        return Ok(self.documents.get(key).map(|e| return e.value().to_string()));
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.documents.insert(key.to_string(), value.to_string());
        return Ok(());
    }
}
