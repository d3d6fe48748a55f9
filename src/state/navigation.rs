// Navigation state management.
// Tracks where the user is: choosing a state, choosing a site, or viewing nearby places.

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
}

/// The current view level in the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLevel {
    /// Top level: waiting for a state name
    States,
    /// Sites listed for a state, waiting for a 1-based selection
    Sites { state: String },
    /// Places near one site of the state
    Places { state: String, site: String },
}

impl ViewLevel {
    /// Get the display title for this view level.
    pub fn title(&self) -> String {
        match self {
            ViewLevel::States => "States".to_string(),
            ViewLevel::Sites { state } => format!("National sites in {}", state),
            ViewLevel::Places { site, .. } => format!("Places near {}", site),
        }
    }

    /// Whether the user is picking a site (sites list or places of a site).
    pub fn is_site_selection(&self) -> bool {
        !matches!(self, ViewLevel::States)
    }

    /// Create a breadcrumb node for this view level.
    pub fn to_breadcrumb(&self) -> BreadcrumbNode {
        let label = match self {
            ViewLevel::States => "States".to_string(),
            ViewLevel::Sites { state } => state.clone(),
            ViewLevel::Places { site, .. } => site.clone(),
        };
        BreadcrumbNode { label }
    }
}

/// Navigation stack (bottom = state selection, top = current view).
#[derive(Debug, Clone)]
pub struct NavigationStack {
    stack: Vec<ViewLevel>,
}

impl NavigationStack {
    /// Create a new navigation stack starting at the given level.
    pub fn new(root: ViewLevel) -> Self {
        Self { stack: vec![root] }
    }

    /// Get the current view level.
    pub fn current(&self) -> &ViewLevel {
        self.stack.last().expect("Stack should never be empty")
    }

    /// Push a new view level onto the stack (drill down).
    pub fn push(&mut self, level: ViewLevel) {
        self.stack.push(level);
    }

    /// Pop the current view level. Returns false if at root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Open a state's site list, replacing anything above the root.
    pub fn open_state(&mut self, state: &str) {
        self.reset();
        self.push(ViewLevel::Sites {
            state: state.to_string(),
        });
    }

    /// Show places for a site; a site already on top is replaced.
    pub fn open_site(&mut self, site: &str) {
        if let ViewLevel::Places { .. } = self.current() {
            self.pop();
        }
        let state = match self.current() {
            ViewLevel::Sites { state } => state.clone(),
            _ => return,
        };
        self.push(ViewLevel::Places {
            state,
            site: site.to_string(),
        });
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        self.stack
            .iter()
            .map(|level| level.to_breadcrumb())
            .collect()
    }

    /// Reset to root level.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    /// Get the depth of the navigation stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(ViewLevel::States)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stack() {
        let mut nav = NavigationStack::default();
        assert_eq!(nav.depth(), 1);
        assert!(!nav.current().is_site_selection());

        nav.open_state("michigan");
        assert_eq!(nav.depth(), 2);
        assert!(nav.current().is_site_selection());

        nav.open_site("Isle Royale");
        assert_eq!(nav.depth(), 3);

        // Picking another site replaces the places view
        nav.open_site("Pictured Rocks");
        assert_eq!(nav.depth(), 3);
        assert_eq!(
            nav.current(),
            &ViewLevel::Places {
                state: "michigan".to_string(),
                site: "Pictured Rocks".to_string(),
            }
        );

        // Can't pop past root
        nav.reset();
        assert!(!nav.pop());
        assert_eq!(nav.current(), &ViewLevel::States);
    }

    #[test]
    fn test_open_site_needs_a_state() {
        let mut nav = NavigationStack::default();
        nav.open_site("Isle Royale");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_breadcrumbs() {
        let mut nav = NavigationStack::default();
        nav.open_state("michigan");
        nav.open_site("Isle Royale");

        let breadcrumbs = nav.breadcrumbs();
        assert_eq!(breadcrumbs.len(), 3);
        assert_eq!(breadcrumbs[0].label, "States");
        assert_eq!(breadcrumbs[1].label, "michigan");
        assert_eq!(breadcrumbs[2].label, "Isle Royale");
        assert_eq!(nav.current().title(), "Places near Isle Royale");
    }
}
