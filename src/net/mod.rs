// Network module.
// Provides the HTTP client and the cache-through fetch functions built on it.

pub mod client;
pub mod fetch;

pub use client::HttpClient;
pub use fetch::{fetch_api, fetch_page};
