// List state for the sites and places views.
// Tracks loading progress and the highlighted row.

use ratatui::widgets::ListState;

/// Loading state for fetched data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded items (0 while loading or failed).
    pub fn len(&self) -> usize {
        self.data.data().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Item at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.data()?.get(index)
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i, // Stay at end
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if self.is_empty() {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    /// Highlight a specific row.
    pub fn select(&mut self, index: usize) {
        if index < self.len() {
            self.list_state.select(Some(index));
        }
    }

    /// Set loaded data and highlight the first row.
    pub fn set_loaded(&mut self, items: Vec<T>) {
        let first = if items.is_empty() { None } else { Some(0) };
        self.data = LoadingState::Loaded(items);
        self.list_state.select(first);
    }

    /// Set loading state.
    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
        self.list_state.select(None);
    }

    /// Set error state.
    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.list_state.select(None);
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.data = LoadingState::Idle;
        self.list_state.select(None);
    }
}
