use crate::constants::header;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Read-only view over the request headers handed to the evaluator.
///
/// Lookups are exact. Normalizing header name case is up to the caller.
pub trait RequestMetadata {
    fn header(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> RequestMetadata for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> RequestMetadata for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V, S> RequestMetadata for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<T: RequestMetadata + ?Sized> RequestMetadata for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

/// Returns the declared `Origin`, or `""` when it is missing or empty.
pub fn request_origin<M: RequestMetadata + ?Sized>(metadata: &M) -> &str {
    match metadata.header(header::ORIGIN) {
        Some(origin) if !origin.is_empty() => origin,
        _ => "",
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
