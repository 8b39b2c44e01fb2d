//! Catalog Data Store
//!
//! Network-owned state (reference list + detail cache) held in a
//! reactive_stores Store so cache writes notify the derived-view memo
//! with field-level granularity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache::DetailCache;
use crate::models::{Pokemon, PokemonList, PokemonRef};

/// Everything the remote catalog client has fetched so far.
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Reference list, in upstream order. Empty until the list resolves.
    pub references: Vec<PokemonRef>,
    /// Upstream total reported by the list endpoint.
    pub upstream_count: u32,
    /// Append-only detail cache, populated as detail fetches settle.
    pub cache: DetailCache,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a resolved list response.
pub fn store_set_references(store: &CatalogStore, list: PokemonList) {
    store.upstream_count().set(list.count);
    store.references().set(list.results);
}

/// Claim a reference for fetching; false when already claimed.
pub fn store_begin_fetch(store: &CatalogStore, url: &str) -> bool {
    store.cache().write().begin_fetch(url)
}

/// Record one resolved detail fetch.
pub fn store_resolve_detail(store: &CatalogStore, url: String, pokemon: Pokemon) {
    store.cache().write().resolve(url, pokemon);
}

/// Record one failed detail fetch.
pub fn store_fail_detail(store: &CatalogStore, url: &str, reason: String) {
    store.cache().write().fail(url, reason);
}
