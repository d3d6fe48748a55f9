// UI module for rendering the TUI.
// Lays out the breadcrumb, main list, console, input line and status bar.

mod breadcrumb;
mod list;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{ConsoleLevel, ViewLevel};

const CONSOLE_LINES: u16 = 4;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                 // Breadcrumb
            Constraint::Min(1),                    // Main content
            Constraint::Length(CONSOLE_LINES + 2), // Console
            Constraint::Length(3),                 // Input line
            Constraint::Length(1),                 // Status bar
        ])
        .split(frame.area());

    breadcrumb::draw_breadcrumb(frame, &app.nav.breadcrumbs(), chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_console(frame, app, chunks[2]);
    draw_input(frame, app, chunks[3]);
    draw_status_bar(frame, app, chunks[4]);
}

/// Draw the main content area for the current view level.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let level = app.nav.current().clone();
    match &level {
        ViewLevel::States => list::render_states_list(frame, &app.directory, area),
        ViewLevel::Sites { .. } => {
            list::render_sites_list(frame, &mut app.sites, &level.title(), area);
        }
        ViewLevel::Places { state, .. } => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(area);

            let sites_title = ViewLevel::Sites {
                state: state.clone(),
            }
            .title();
            list::render_sites_list(frame, &mut app.sites, &sites_title, chunks[0]);
            list::render_places_list(frame, &app.places, &level.title(), chunks[1]);
        }
    }
}

/// Draw the most recent console messages.
fn draw_console(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .console
        .recent(CONSOLE_LINES as usize)
        .map(|msg| {
            let color = match msg.level {
                ConsoleLevel::Info => Color::Gray,
                ConsoleLevel::Warn => Color::Yellow,
                ConsoleLevel::Error => Color::Red,
            };
            let time = msg.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S");
            Line::from(vec![
                Span::styled(format!("{} ", time), Style::default().fg(Color::DarkGray)),
                Span::styled(msg.message.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    let console = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Console "),
    );
    frame.render_widget(console, area);
}

/// Draw the input line with its prompt.
fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let prompt = if app.nav.current().is_site_selection() {
        "Choose the number for detail search or \"exit\" or \"back\": "
    } else {
        "Enter a state name (e.g. Michigan, michigan) or \"exit\": "
    };

    let input_line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::DarkGray)),
        Span::raw(app.input.as_str()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, area);
}

/// Draw the status bar with key hints and cache counts.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.is_busy() {
        "Fetching..."
    } else if app.nav.current().is_site_selection() {
        "↑/↓ highlight · Enter open · Esc back · Ctrl-C quit"
    } else {
        "Enter submit · Ctrl-C quit"
    };

    let stats = app.session().cache_stats();
    let cache = format!("cache: {} pages · {} places ", stats.pages, stats.places);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(cache.chars().count() as u16)])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {}", hints)).style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(cache)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
