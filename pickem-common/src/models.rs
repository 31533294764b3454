//! Catalog models
//!
//! A catalog is an ordered list of categories, each holding an ordered list of
//! items. Order is file order and then creation order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Error, Result, Tier};

/// One activity in a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub interest: Tier,
    pub effort: Tier,
}

impl Item {
    pub fn new(name: impl Into<String>, interest: Tier, effort: Tier) -> Self {
        Self {
            name: name.into(),
            interest,
            effort,
        }
    }
}

/// Named group of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub choices: Vec<Item>,
}

impl Category {
    fn position(&self, item_name: &str) -> Option<usize> {
        self.choices.iter().position(|item| item.name == item_name)
    }
}

/// Changes applied by an edit; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub interest: Option<Tier>,
    pub effort: Option<Tier>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.interest.is_none() && self.effort.is_none()
    }
}

/// On-disk document layout
///
/// Older files hold a bare list of categories; everything written by this
/// crate uses the wrapped form.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { categories: Vec<Category> },
    Bare(Vec<Category>),
}

#[derive(Serialize)]
struct CatalogDocumentRef<'a> {
    categories: &'a [Category],
}

/// Full set of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate category or item names
    ///
    /// Categories without items are dropped: a category only exists while it
    /// holds at least one item.
    pub fn new(mut categories: Vec<Category>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for category in &categories {
                if !seen.insert(category.name.as_str()) {
                    return Err(Error::InvalidInput(format!(
                        "Duplicate category '{}'",
                        category.name
                    )));
                }
                let mut names = HashSet::new();
                for item in &category.choices {
                    if !names.insert(item.name.as_str()) {
                        return Err(Error::InvalidInput(format!(
                            "Duplicate item '{}' in category '{}'",
                            item.name, category.name
                        )));
                    }
                }
            }
        }
        categories.retain(|category| !category.choices.is_empty());
        Ok(Self { categories })
    }

    /// Parse a catalog document (wrapped or bare form)
    pub fn from_json(content: &str) -> Result<Self> {
        let categories = match serde_json::from_str::<CatalogDocument>(content)? {
            CatalogDocument::Wrapped { categories } => categories,
            CatalogDocument::Bare(categories) => categories,
        };
        Self::new(categories)
    }

    /// Serialize in the wrapped form, 4-space indented
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        CatalogDocumentRef {
            categories: &self.categories,
        }
        .serialize(&mut serializer)?;
        String::from_utf8(out).map_err(|e| Error::Internal(e.to_string()))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Items of a category in store order; empty if the category is absent
    pub fn items_in(&self, category: &str) -> &[Item] {
        self.category(category)
            .map(|c| c.choices.as_slice())
            .unwrap_or(&[])
    }

    /// Append an item, creating the category if needed
    pub fn add_item(&mut self, category: &str, item: Item) -> Result<&Category> {
        if category.trim().is_empty() {
            return Err(Error::InvalidInput("Category name must not be empty".to_string()));
        }
        if item.name.trim().is_empty() {
            return Err(Error::InvalidInput("Item name must not be empty".to_string()));
        }
        // Edit and remove paths decode `+` to a space, so such a name could
        // never be addressed again
        if item.name.contains('+') {
            return Err(Error::InvalidInput(format!(
                "Item name '{}' must not contain '+'",
                item.name
            )));
        }

        let index = match self.categories.iter().position(|c| c.name == category) {
            Some(index) => index,
            None => {
                self.categories.push(Category {
                    name: category.to_string(),
                    choices: Vec::new(),
                });
                self.categories.len() - 1
            }
        };

        let target = &mut self.categories[index];
        if target.position(&item.name).is_some() {
            return Err(Error::Conflict(format!(
                "Item '{}' already exists in category '{}'",
                item.name, category
            )));
        }
        target.choices.push(item);
        Ok(&self.categories[index])
    }

    /// Update an item's tiers in place
    pub fn edit_item(&mut self, category: &str, name: &str, patch: ItemPatch) -> Result<&Item> {
        let target = self
            .category_mut(category)
            .ok_or_else(|| Error::NotFound(format!("Category '{}'", category)))?;
        let index = target
            .position(name)
            .ok_or_else(|| Error::NotFound(format!("Item '{}' in category '{}'", name, category)))?;

        let item = &mut target.choices[index];
        if let Some(interest) = patch.interest {
            item.interest = interest;
        }
        if let Some(effort) = patch.effort {
            item.effort = effort;
        }
        Ok(&*item)
    }

    /// Remove an item; the category goes away with its last item
    pub fn remove_item(&mut self, category: &str, name: &str) -> Result<Item> {
        let cat_index = self
            .categories
            .iter()
            .position(|c| c.name == category)
            .ok_or_else(|| Error::NotFound(format!("Category '{}'", category)))?;
        let target = &mut self.categories[cat_index];
        let index = target
            .position(name)
            .ok_or_else(|| Error::NotFound(format!("Item '{}' in category '{}'", name, category)))?;

        let removed = target.choices.remove(index);
        if target.choices.is_empty() {
            self.categories.remove(cat_index);
        }
        Ok(removed)
    }
}
