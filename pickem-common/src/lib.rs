//! # Pick'em Common Library
//!
//! Shared code for the Pick'em service including:
//! - Tier scale (interest / effort levels and their weights)
//! - Catalog models (categories and items)
//! - File-backed catalog store
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tier;

pub use error::{Error, Result};
pub use models::{Catalog, Category, Item};
pub use store::{CatalogStore, ItemSource};
pub use tier::Tier;
