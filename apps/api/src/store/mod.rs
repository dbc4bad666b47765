//! Example Store — the persisted pool of marketing copy used for few-shot prompting.
//!
//! The whole collection lives in memory and is rewritten to a single JSON file on
//! every append. Writes go to a temp file in the same directory followed by an
//! atomic rename, so an interrupted write leaves the previous file intact.
//!
//! Retrieval is a deterministic prefix of each category, not a similarity search.

pub mod handlers;
pub mod seed;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::example::{Example, CONTENT_KEY};

/// Category name → examples in insertion order.
pub type ExampleCollection = BTreeMap<String, Vec<Example>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read example store {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The file exists but is not a valid store. Never replaced with an empty collection.
    #[error("Example store {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize example store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write example store {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Metadata would collide with the example's own `content` field on disk.
    #[error("Metadata key '{0}' is reserved")]
    ReservedMetadataKey(String),
}

#[derive(Debug)]
pub struct ExampleStore {
    path: PathBuf,
    examples: ExampleCollection,
}

impl ExampleStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is initialized with the seed examples and written out
    /// immediately. A file that exists but cannot be parsed is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let examples = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<ExampleCollection>(&raw).map_err(|source| {
                StoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No example store at {}, seeding defaults", path.display());
                let store = Self {
                    path,
                    examples: seed::default_examples(),
                };
                store.persist()?;
                return Ok(store);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        info!(
            "Loaded example store {} ({} categories)",
            path.display(),
            examples.len()
        );
        Ok(Self { path, examples })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the first `n` examples of a category in stored order.
    /// Unknown categories yield an empty slice.
    pub fn find(&self, content_type: &str, n: usize) -> &[Example] {
        self.examples
            .get(content_type)
            .map(|examples| &examples[..n.min(examples.len())])
            .unwrap_or(&[])
    }

    /// Appends an example and rewrites the store file.
    ///
    /// Every call appends, even for identical content. If the write fails the
    /// in-memory collection is restored to its previous state. Metadata may not
    /// use the key `content`.
    pub fn add(
        &mut self,
        content_type: &str,
        content: impl Into<String>,
        metadata: BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        if metadata.contains_key(CONTENT_KEY) {
            return Err(StoreError::ReservedMetadataKey(CONTENT_KEY.to_string()));
        }

        let created_category = !self.examples.contains_key(content_type);
        self.examples
            .entry(content_type.to_string())
            .or_default()
            .push(Example::new(content, metadata));

        if let Err(e) = self.persist() {
            if created_category {
                self.examples.remove(content_type);
            } else if let Some(category) = self.examples.get_mut(content_type) {
                category.pop();
            }
            return Err(e);
        }

        info!("Added new example to {content_type}");
        Ok(())
    }

    /// Example count per category.
    pub fn stats(&self) -> BTreeMap<String, usize> {
        self.examples
            .iter()
            .map(|(content_type, examples)| (content_type.clone(), examples.len()))
            .collect()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.examples)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| self.write_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
