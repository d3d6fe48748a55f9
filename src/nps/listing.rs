// State listing resolution.
// Reads the ordered park list for a state and builds a record for each site.

use scraper::Html;
use url::Url;

use crate::cache::ResponseCache;
use crate::error::{Result, ScoutError};
use crate::net::{HttpClient, fetch_page};

use super::record::{self, SiteRecord};
use super::selector;

/// Detail page links from a state listing, in page order.
pub fn parse_site_links(html: &str, base: &Url) -> Result<Vec<Url>> {
    let document = Html::parse_document(html);
    let list = document
        .select(&selector("ul#list_parks"))
        .next()
        .ok_or_else(|| ScoutError::StructureChanged("park list".to_string()))?;

    let link = selector("a[href]");
    let mut links = Vec::new();

    for heading in list.select(&selector("h3")) {
        match heading
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) => match base.join(href) {
                Ok(url) => links.push(url),
                Err(e) => tracing::debug!(href, error = %e, "skipping malformed park link"),
            },
            None => tracing::debug!("park heading without link"),
        }
    }

    Ok(links)
}

/// Fetch a state listing and extract every site on it, in listing order.
///
/// The listing itself is always fetched live; detail pages go through
/// `page_cache`. An unreachable detail page yields an empty record in its
/// slot so positions stay stable.
pub async fn list_sites(
    client: &HttpClient,
    base: &Url,
    state_url: &Url,
    page_cache: &mut ResponseCache,
) -> Result<Vec<SiteRecord>> {
    let listing = client.get_text(state_url).await?;
    let links = parse_site_links(&listing, base)?;
    tracing::info!(%state_url, sites = links.len(), "listing sites");

    let mut sites = Vec::with_capacity(links.len());
    for url in &links {
        let page = match fetch_page(client, url, page_cache).await {
            Ok(page) => page,
            Err(ScoutError::Http(e)) => {
                tracing::warn!(%url, error = %e, "detail page unreachable");
                String::new()
            }
            Err(e) => return Err(e),
        };
        sites.push(record::extract(&page));
    }

    Ok(sites)
}
