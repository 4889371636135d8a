//! Display-name resolution for the weak references a registration carries.
//!
//! Directories are built from the current collection snapshots once per
//! render pass and thrown away afterwards; they are never kept in sync with
//! the store.

use crate::core::{Client, Portal};
use crate::storage::Keyed;
use std::collections::HashMap;

/// What a dangling reference resolves to. Never an error.
pub const FALLBACK_NAME: &str = "N/A";

/// Anything with a human-readable display name.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for Client {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Portal {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// An id -> display-name map over one collection snapshot.
#[derive(Debug, Clone, Default)]
pub struct NameDirectory {
    names: HashMap<String, String>,
}

impl NameDirectory {
    pub fn from_collection<'a, T, I>(items: I) -> Self
    where
        T: Keyed + Named + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let names = items
            .into_iter()
            .map(|item| (item.key().to_string(), item.display_name().to_string()))
            .collect();
        Self { names }
    }

    /// Resolve an id to its display name, falling back to [`FALLBACK_NAME`]
    /// exactly when the id is absent.
    pub fn resolve(&self, id: &str) -> &str {
        self.names.get(id).map(String::as_str).unwrap_or(FALLBACK_NAME)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The pair of directories a registration row needs.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDirectory {
    pub clients: NameDirectory,
    pub portals: NameDirectory,
}

impl RegistrationDirectory {
    pub fn client_name(&self, id: &str) -> &str {
        self.clients.resolve(id)
    }

    pub fn portal_name(&self, id: &str) -> &str {
        self.portals.resolve(id)
    }
}
