// Site record extraction.
// Turns one park detail page into a SiteRecord, field by field.

use std::fmt;

use scraper::Html;

use super::{element_text, selector};

/// One national site as shown on its detail page.
///
/// Every field is always present; a field the page did not provide is the
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRecord {
    /// Designation such as "National Park"; some sites have none.
    pub category: String,
    pub name: String,
    /// "{city}, {state}", either half possibly empty.
    pub address: String,
    /// 5-digit or ZIP+4, used verbatim as the nearby-search origin.
    pub zipcode: String,
    pub phone: String,
}

impl fmt::Display for SiteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

/// Join city and state the way the listing displays them.
pub fn compose_address(city: &str, state: &str) -> String {
    format!("{}, {}", city, state)
}

/// Build a record from a site page. Never fails: each missing field
/// becomes an empty string without affecting the others.
pub fn extract(page: &str) -> SiteRecord {
    let document = Html::parse_document(page);

    let field = |value: Option<String>, label: &'static str| {
        value.unwrap_or_else(|| {
            tracing::trace!(field = label, "field not found, using empty string");
            String::new()
        })
    };

    let locality = field(city(&document), "city");
    let region = field(state(&document), "state");

    SiteRecord {
        category: field(category(&document), "category"),
        name: field(name(&document), "name"),
        address: compose_address(&locality, &region),
        zipcode: field(zipcode(&document), "zipcode"),
        phone: field(phone(&document), "phone"),
    }
}

fn first_text(document: &Html, css: &'static str) -> Option<String> {
    document.select(&selector(css)).next().map(element_text)
}

pub fn category(document: &Html) -> Option<String> {
    first_text(document, "span.Hero-designation")
}

pub fn name(document: &Html) -> Option<String> {
    first_text(document, "a.Hero-title")
}

pub fn city(document: &Html) -> Option<String> {
    first_text(document, r#"span[itemprop="addressLocality"]"#)
}

pub fn state(document: &Html) -> Option<String> {
    first_text(document, r#"span[itemprop="addressRegion"]"#)
}

pub fn zipcode(document: &Html) -> Option<String> {
    first_text(document, r#"span[itemprop="postalCode"]"#)
}

pub fn phone(document: &Html) -> Option<String> {
    first_text(document, "span.tel")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISLE_ROYALE: &str = r#"
        <html><body>
            <div class="Hero-titleContainer">
                <a href="/isro/" class="Hero-title">Isle Royale</a>
                <span class="Hero-designation"> National Park </span>
            </div>
            <div itemprop="address">
                <span itemprop="streetAddress">800 East Lakeshore Drive</span>
                <span itemprop="addressLocality">Houghton</span>,
                <span itemprop="addressRegion">MI</span>
                <span itemprop="postalCode">49931</span>
            </div>
            <span class="tel" itemprop="telephone">
                (906) 482-0984
            </span>
        </body></html>
    "#;

    #[test]
    fn test_extract_full_page() {
        let record = extract(ISLE_ROYALE);
        assert_eq!(
            record,
            SiteRecord {
                category: "National Park".to_string(),
                name: "Isle Royale".to_string(),
                address: "Houghton, MI".to_string(),
                zipcode: "49931".to_string(),
                phone: "(906) 482-0984".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_postal_code_leaves_other_fields() {
        let page = ISLE_ROYALE.replace(r#"<span itemprop="postalCode">49931</span>"#, "");
        let record = extract(&page);

        assert_eq!(record.zipcode, "");
        assert_eq!(record.name, "Isle Royale");
        assert_eq!(record.category, "National Park");
        assert_eq!(record.address, "Houghton, MI");
        assert_eq!(record.phone, "(906) 482-0984");
    }

    #[test]
    fn test_missing_city_gives_degenerate_address() {
        let page = ISLE_ROYALE.replace(r#"<span itemprop="addressLocality">Houghton</span>"#, "");
        assert_eq!(extract(&page).address, ", MI");
    }

    #[test]
    fn test_empty_page_yields_empty_record() {
        let record = extract("");
        assert_eq!(record.category, "");
        assert_eq!(record.name, "");
        assert_eq!(record.address, ", ");
        assert_eq!(record.zipcode, "");
        assert_eq!(record.phone, "");
    }

    #[test]
    fn test_compose_address() {
        assert_eq!(compose_address("Houghton", "MI"), "Houghton, MI");
        assert_eq!(compose_address("", "MI"), ", MI");
        assert_eq!(compose_address("", ""), ", ");
    }

    #[test]
    fn test_field_extractors_are_independent() {
        let document = Html::parse_document(r#"<span class="tel">307-344-7381</span>"#);
        assert_eq!(phone(&document).as_deref(), Some("307-344-7381"));
        assert_eq!(name(&document), None);
        assert_eq!(zipcode(&document), None);
    }

    #[test]
    fn test_display_info() {
        let record = extract(ISLE_ROYALE);
        assert_eq!(
            record.to_string(),
            "Isle Royale (National Park): Houghton, MI 49931"
        );
    }
}
