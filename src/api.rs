//! Catalog API Client
//!
//! Fetch wrappers for the PokeAPI list and detail endpoints.

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{Pokemon, PokemonList};

/// Base URL of the list endpoint.
pub const API_BASE: &str = "https://pokeapi.co/api/v2/pokemon";
/// How many references the initial list request asks for.
pub const LIST_LIMIT: u32 = 100;

/// Failure of a single request. Per-item failures stay scoped to their
/// cache entry; only the list fetch blocks the UI.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// List endpoint URL for a given window.
pub fn list_url(base: &str, limit: u32, offset: u32) -> String {
    format!("{base}?limit={limit}&offset={offset}")
}

/// Fetch the reference list once per session.
pub async fn fetch_list(url: &str) -> Result<PokemonList, FetchError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(response.json().await?)
}

/// Fetch one detail record by its reference url.
pub async fn fetch_detail(url: &str) -> Result<Pokemon, FetchError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(response.json().await?)
}
