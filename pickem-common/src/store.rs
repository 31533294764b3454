//! File-backed catalog store
//!
//! The catalog is held in memory behind a `tokio::sync::RwLock` and persisted
//! as a JSON document. Readers take a read guard and see one consistent
//! snapshot for as long as they hold it. Writers take the write guard, apply
//! the change to a copy, persist the copy, and only then publish it, so a
//! failed write leaves the in-memory catalog untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

use crate::models::{Category, ItemPatch};
use crate::{Catalog, Item, Result};

/// Read access the picker needs from a store
pub trait ItemSource {
    /// Items of `category` in store order; empty if the category is absent
    fn items_in(&self, category: &str) -> &[Item];
}

impl ItemSource for Catalog {
    fn items_in(&self, category: &str) -> &[Item] {
        Catalog::items_in(self, category)
    }
}

/// Shared, file-backed catalog
#[derive(Clone)]
pub struct CatalogStore {
    path: PathBuf,
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogStore {
    /// Wrap an already-loaded catalog; nothing is written until the first mutation
    pub fn new(path: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            path: path.into(),
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Load the catalog from `path`
    ///
    /// A missing file yields an empty catalog; the file is created on the
    /// first commit. A malformed file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let catalog = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let catalog = Catalog::from_json(&content)?;
                info!(
                    "Loaded {} categories from {}",
                    catalog.categories().len(),
                    path.display()
                );
                catalog
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Catalog file {} not found, starting empty", path.display());
                Catalog::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self::new(path, catalog))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consistent read-only snapshot, held until the guard is dropped
    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    /// Add an item and persist; returns the updated category
    pub async fn add_item(&self, category: &str, item: Item) -> Result<Category> {
        self.mutate(|catalog| catalog.add_item(category, item).cloned())
            .await
    }

    /// Edit an item's tiers and persist; returns the updated item
    pub async fn edit_item(&self, category: &str, name: &str, patch: ItemPatch) -> Result<Item> {
        self.mutate(|catalog| catalog.edit_item(category, name, patch).cloned())
            .await
    }

    /// Remove an item and persist
    ///
    /// Returns the removed item and the catalog exactly as committed.
    pub async fn remove_item(&self, category: &str, name: &str) -> Result<(Item, Catalog)> {
        self.mutate(|catalog| {
            let removed = catalog.remove_item(category, name)?;
            Ok((removed, catalog.clone()))
        })
        .await
    }

    /// Apply `change` to a copy, commit it, then publish it
    async fn mutate<T>(&self, change: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T> {
        let mut guard = self.catalog.write().await;
        let mut next = guard.clone();
        let outcome = change(&mut next)?;
        self.commit(&next).await?;
        *guard = next;
        Ok(outcome)
    }

    /// Persist via a sibling temp file and rename
    async fn commit(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = catalog.to_json()?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("Committed catalog to {}", self.path.display());
        Ok(())
    }
}
