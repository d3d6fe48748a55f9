// List rendering for states, sites and nearby places.
// Provides styled list views with loading, error and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::nps::{SiteRecord, StateDirectory};
use crate::places::PlaceResult;
use crate::state::{LoadingState, SelectableList};

/// One line of the site list: 1-based position, then the site info.
pub fn site_line(index: usize, site: &SiteRecord) -> String {
    format!("[{}] {}", index + 1, site)
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the state names available for selection.
pub fn render_states_list(frame: &mut Frame, directory: &StateDirectory, area: Rect) {
    if directory.is_empty() {
        render_empty(frame, area, "No states found");
        return;
    }

    let items: Vec<ListItem> = directory.names().map(ListItem::new).collect();
    let list_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" States ({}) ", directory.len())),
    );
    frame.render_widget(list_widget, area);
}

/// Render the numbered site list.
pub fn render_sites_list(
    frame: &mut Frame,
    list: &mut SelectableList<SiteRecord>,
    title: &str,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, "Enter a state name"),
        LoadingState::Loading => render_loading(frame, area, "Loading sites"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(sites) => {
            if sites.is_empty() {
                render_empty(frame, area, "No national sites listed");
                return;
            }

            let items: Vec<ListItem> = sites
                .iter()
                .enumerate()
                .map(|(i, site)| ListItem::new(site_line(i, site)))
                .collect();

            let list_widget = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", title)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut list.list_state);
        }
    }
}

/// Render places near the selected site.
pub fn render_places_list(
    frame: &mut Frame,
    places: &LoadingState<Vec<PlaceResult>>,
    title: &str,
    area: Rect,
) {
    match places {
        LoadingState::Idle => render_empty(frame, area, "Choose a site number"),
        LoadingState::Loading => render_loading(frame, area, "Searching nearby"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(places) => {
            if places.is_empty() {
                render_empty(frame, area, "No places found nearby");
                return;
            }

            let items: Vec<ListItem> = places
                .iter()
                .map(|place| ListItem::new(place.to_string()))
                .collect();

            let list_widget = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title)),
            );
            frame.render_widget(list_widget, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_line_is_one_based() {
        let site = SiteRecord {
            category: "National Park".to_string(),
            name: "Isle Royale".to_string(),
            address: "Houghton, MI".to_string(),
            zipcode: "49931".to_string(),
            phone: String::new(),
        };
        assert_eq!(
            site_line(0, &site),
            "[1] Isle Royale (National Park): Houghton, MI 49931"
        );
    }

    #[test]
    fn test_duplicate_sites_keep_their_positions() {
        let site = SiteRecord::default();
        assert!(site_line(0, &site).starts_with("[1] "));
        assert!(site_line(1, &site).starts_with("[2] "));
    }
}
