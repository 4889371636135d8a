use crate::core::{Client, Portal, Registration};
use im::Vector;

/// Anything stored in a collection and addressed by its identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Client {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Portal {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Registration {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Create-if-absent, replace-if-present, keyed by identifier.
///
/// A replaced item keeps its position; a new item is appended, so insertion
/// order is preserved for display. Returns a new snapshot; the input
/// collection is untouched.
pub fn upsert<T: Keyed + Clone>(collection: &Vector<T>, item: T) -> Vector<T> {
    match collection.iter().position(|existing| existing.key() == item.key()) {
        Some(index) => collection.update(index, item),
        None => {
            let mut next = collection.clone();
            next.push_back(item);
            next
        }
    }
}

/// Exclude the matching-id item. Unknown ids return the collection
/// unchanged, never an error.
pub fn remove<T: Keyed + Clone>(collection: &Vector<T>, id: &str) -> Vector<T> {
    match collection.iter().position(|existing| existing.key() == id) {
        Some(index) => {
            let mut next = collection.clone();
            next.remove(index);
            next
        }
        None => collection.clone(),
    }
}
