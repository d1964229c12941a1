//! Content registry: static lookup from content key to record

use std::collections::HashMap;

use super::record::ContentRecord;
use crate::error::{FolioError, FolioResult};

/// Validated, read-only set of content records.
///
/// Declaration order is kept for listing; lookups go through a key index.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    records: Vec<ContentRecord>,
    index: HashMap<String, usize>,
}

impl ContentRegistry {
    /// Build a registry, rejecting records that fail presence checks or
    /// reuse a key.
    pub fn from_records(records: Vec<ContentRecord>) -> FolioResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            record.validate().map_err(FolioError::InvalidContent)?;
            if index.insert(record.key.clone(), i).is_some() {
                return Err(FolioError::InvalidContent(format!(
                    "duplicate record key '{}'",
                    record.key
                )));
            }
        }
        Ok(Self { records, index })
    }

    /// Look up a record. Callers must not render on `RecordNotFound`.
    pub fn resolve(&self, key: &str) -> FolioResult<&ContentRecord> {
        self.index
            .get(key)
            .map(|&i| &self.records[i])
            .ok_or_else(|| FolioError::RecordNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Records in declaration order
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
