// App state and main event loop.
// Turns typed commands into navigation changes and runs the fetches they need.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use url::Url;

use crate::error::Result;
use crate::nps::{SiteRecord, StateDirectory};
use crate::places::PlaceResult;
use crate::session::Session;
use crate::state::{
    Action, Console, ConsoleMessage, LoadingState, NavigationStack, SelectableList, interpret,
};
use crate::ui;

/// Network work queued by a command, run after the loading state is drawn.
#[derive(Debug, Clone)]
enum Job {
    Sites { state: String, url: Url },
    Places { site: SiteRecord },
}

/// Main application state.
pub struct App {
    session: Session,
    /// State name -> listing URL, resolved before the loop starts.
    pub directory: StateDirectory,
    pub nav: NavigationStack,
    /// Sites of the open state, in listing order.
    pub sites: SelectableList<SiteRecord>,
    /// Places near the open site.
    pub places: LoadingState<Vec<PlaceResult>>,
    /// Current contents of the input line.
    pub input: String,
    pub console: Console,
    pending: Option<Job>,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, directory: StateDirectory) -> Self {
        let mut console = Console::default();
        console.push(ConsoleMessage::info(format!(
            "Loaded {} states. Enter a state name (e.g. Michigan, michigan) or \"exit\".",
            directory.len()
        )));

        Self {
            session,
            directory,
            nav: NavigationStack::default(),
            sites: SelectableList::new(),
            places: LoadingState::Idle,
            input: String::new(),
            console,
            pending: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a fetch is queued or running.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if self.is_busy() {
                self.run_pending().await;
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                if self.input.is_empty() {
                    self.apply(Action::Back);
                } else {
                    self.input.clear();
                }
            }
            KeyCode::Up => self.sites.select_prev(),
            KeyCode::Down => self.sites.select_next(),
            _ => {}
        }
    }

    /// Interpret the input line at the current level.
    pub fn submit(&mut self) {
        let mut line = std::mem::take(&mut self.input);

        // Enter on an empty line picks the highlighted site.
        if line.trim().is_empty() && self.nav.current().is_site_selection() {
            if let Some(index) = self.sites.selected() {
                line = (index + 1).to_string();
            }
        }

        match interpret(self.nav.current(), &line, &self.directory, self.sites.len()) {
            Ok(action) => self.apply(action),
            Err(err) => {
                tracing::debug!(?err, "rejected input");
                self.console.push(ConsoleMessage::warn(err.to_string()));
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => {
                self.nav.reset();
                self.sites.clear();
                self.places = LoadingState::Idle;
            }
            Action::OpenState { name, url } => {
                self.nav.open_state(&name);
                self.sites.set_loading();
                self.places = LoadingState::Idle;
                self.pending = Some(Job::Sites { state: name, url });
            }
            Action::OpenSite { index } => {
                let Some(site) = self.sites.get(index).cloned() else {
                    return;
                };
                self.sites.select(index);
                self.nav.open_site(&site.name);
                self.places = LoadingState::Loading;
                self.pending = Some(Job::Places { site });
            }
        }
    }

    /// Run the queued fetch, if any.
    pub async fn run_pending(&mut self) {
        let Some(job) = self.pending.take() else {
            return;
        };

        match job {
            Job::Sites { state, url } => match self.session.list_sites(&url).await {
                Ok(sites) => {
                    self.console.push(ConsoleMessage::info(format!(
                        "List of national sites in {}: {}",
                        state,
                        sites.len()
                    )));
                    self.sites.set_loaded(sites);
                }
                Err(err) => {
                    tracing::error!(%state, %err, "listing failed");
                    self.console.push(ConsoleMessage::error(err.to_string()));
                    self.sites.set_error(err.to_string());
                }
            },
            Job::Places { site } => match self.session.lookup_nearby(&site).await {
                Ok(places) => {
                    self.console.push(ConsoleMessage::info(format!(
                        "Places near {}: {}",
                        site.name,
                        places.len()
                    )));
                    self.places = LoadingState::Loaded(places);
                }
                Err(err) => {
                    tracing::error!(site = %site.name, %err, "nearby lookup failed");
                    self.console.push(ConsoleMessage::error(err.to_string()));
                    self.places = LoadingState::Error(err.to_string());
                }
            },
        }
    }
}
