// State directory resolution.
// Maps lowercase state names to their listing pages, read from the home page menu.

use std::collections::BTreeMap;

use scraper::Html;
use url::Url;

use crate::error::{Result, ScoutError};
use crate::net::HttpClient;

use super::{element_text, selector};

const STATE_MENU: &str = "ul.dropdown-menu.SearchBar-keywordSearch";

/// Lowercase state name -> absolute listing URL. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateDirectory {
    states: BTreeMap<String, Url>,
}

impl StateDirectory {
    /// Look up a state by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Url> {
        self.states.get(&name.trim().to_lowercase())
    }

    /// State names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<(String, Url)> for StateDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Url)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

/// Read the state menu out of the home page.
///
/// There is no degraded mode: a page without the menu is an error.
pub fn parse_state_directory(html: &str, base: &Url) -> Result<StateDirectory> {
    let document = Html::parse_document(html);
    let menu = document
        .select(&selector(STATE_MENU))
        .next()
        .ok_or_else(|| ScoutError::StructureChanged("state menu".to_string()))?;

    let link = selector("a[href]");
    let mut states = BTreeMap::new();

    for item in menu.select(&selector("li")) {
        let Some(href) = item
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            tracing::debug!(entry = %element_text(item), "state entry without link");
            continue;
        };

        let name = element_text(item).to_lowercase();
        match base.join(href) {
            Ok(url) => {
                states.insert(name, url);
            }
            Err(e) => tracing::debug!(entry = %name, href, error = %e, "skipping malformed state link"),
        }
    }

    Ok(StateDirectory { states })
}

/// Fetch the home page (never cached) and build the directory.
pub async fn resolve_states(client: &HttpClient, base: &Url) -> Result<StateDirectory> {
    tracing::info!(%base, "resolving state directory");
    let home = client.get_text(base).await?;
    let directory = parse_state_directory(&home, base)?;
    tracing::info!(states = directory.len(), "state directory ready");
    Ok(directory)
}
