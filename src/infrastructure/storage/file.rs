#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path;

use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::models::Storage;

/// Stores each key as `<key>.json` inside a single data directory.
pub struct FileStorage {
    pub data_dir: path::PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: &path::Path) -> FileStorage {
        return FileStorage {
            data_dir: data_dir.to_path_buf(),
        };
    }

    fn get_file_path(&self, key: &str) -> path::PathBuf {
        return self.data_dir.join(format!("{key}.json"));
    }
}

#[async_trait]
impl Storage for FileStorage {
    fn location(&self) -> String {
        return self.data_dir.to_string_lossy().to_string();
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.get_file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&file_path)
            .await
            .with_context(|| return format!("Failed to read {}", file_path.display()))?;

        return Ok(Some(payload));
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).await?;
        }

        // Written next to the target first so a crash never leaves half a
        // document behind.
        let file_path = self.get_file_path(key);
        let tmp_path = self.data_dir.join(format!("{key}.json.tmp"));
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&tmp_path, &file_path)
            .await
            .with_context(|| return format!("Failed to write {}", file_path.display()))?;

        tracing::debug!(key, path = %file_path.display(), "Stored document");
        return Ok(());
    }
}
