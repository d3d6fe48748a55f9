// National parks site module.
// Resolves the state directory, state listings and per-site records from nps.gov pages.

pub mod directory;
pub mod listing;
pub mod record;

pub use directory::{StateDirectory, resolve_states};
pub use listing::list_sites;
pub use record::SiteRecord;

use scraper::{ElementRef, Selector};

/// Parse a CSS selector written in this crate.
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("invalid selector")
}

/// Trimmed text content of an element.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
