//! Hook catalog entries

use serde::{Deserialize, Serialize};

use crate::Result;

/// A single interception point, as published by the hook catalog.
///
/// Hooks are immutable and compared by id alone; the group name is a
/// display/bulk-toggle category and never part of the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    id: String,
    group: String,
}

impl Hook {
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> &str {
        &self.group
    }
}

impl PartialEq for Hook {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Hook {}

impl std::hash::Hash for Hook {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Source of the full hook set known for an application.
///
/// The catalog is read-only input; a fresh fetch fully replaces any prior
/// view of the hook set.
pub trait CatalogProvider: Send + Sync {
    fn hooks_for(&self, package_name: &str) -> Result<Vec<Hook>>;
}

/// In-memory catalog serving the same hook set for every package.
pub struct StaticCatalog {
    hooks: Vec<Hook>,
}

impl StaticCatalog {
    pub fn new(hooks: Vec<Hook>) -> Self {
        Self { hooks }
    }
}

impl CatalogProvider for StaticCatalog {
    fn hooks_for(&self, _package_name: &str) -> Result<Vec<Hook>> {
        Ok(self.hooks.clone())
    }
}
