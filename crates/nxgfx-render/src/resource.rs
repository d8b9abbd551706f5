//! Name-keyed resource cache.
//!
//! A [`ResourceCache`] hands out `Arc`s to resources registered under a string
//! name. The cache keeps a strong reference to every entry; an entry is
//! considered unused once the cache holds the only reference, and
//! [`ResourceCache::evict_unused`] drops all such entries in one sweep.
//! Nothing is evicted implicitly.

use std::sync::Arc;

use nxgfx_core::alloc::HashMap;
use nxgfx_core::profiling::profile_function;

/// A cache of shared resources keyed by name.
pub struct ResourceCache<T> {
    entries: HashMap<String, Arc<T>>,
}

impl<T> ResourceCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the resource registered under `name`, creating it with `create`
    /// when absent.
    pub fn load_with<F>(&mut self, name: &str, create: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        profile_function!();
        if let Some(existing) = self.entries.get(name) {
            return existing.clone();
        }

        let resource = Arc::new(create());
        self.entries.insert(name.to_owned(), resource.clone());
        resource
    }

    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<T>> {
        self.entries.remove(name)
    }

    /// Drop every entry nobody outside the cache still holds.
    ///
    /// Returns the number of evicted entries.
    pub fn evict_unused(&mut self) -> usize {
        profile_function!();
        let before = self.entries.len();
        self.entries.retain(|_, resource| Arc::strong_count(resource) > 1);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} unused resources ({} remain)", evicted, self.entries.len());
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
