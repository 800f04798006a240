pub mod file;
pub mod memory;

use std::path;

use anyhow::Result;

use crate::domain::models::StorageBox;
use crate::domain::models::StorageName;

pub struct StorageManager {}

impl StorageManager {
    pub fn get(name: StorageName, data_dir: &path::Path) -> Result<StorageBox> {
        match name {
            StorageName::File => return Ok(Box::new(file::FileStorage::new(data_dir))),
            StorageName::Memory => return Ok(Box::<memory::MemoryStorage>::default()),
        }
    }
}
