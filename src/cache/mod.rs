// Cache module for local response snapshots.
// Keeps fetched pages and API bodies across sessions.

#![allow(dead_code)]

pub mod paths;
pub mod store;

pub use paths::CachePaths;
pub use store::ResponseCache;
