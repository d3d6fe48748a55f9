// Command interpretation for the input line.
// Two levels: pick a state by name, then pick a site by its 1-based number.

use thiserror::Error;
use url::Url;

use crate::nps::StateDirectory;

use super::navigation::ViewLevel;

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Return to state selection.
    Back,
    OpenState { name: String, url: Url },
    /// 0-based position in the current site list.
    OpenSite { index: usize },
}

/// Input that does not fit the current level. Shown to the user; the loop
/// continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("[Error] Enter proper state name")]
    UnknownState(String),

    #[error("[Error] Invalid input")]
    InvalidSelection(String),
}

/// Interpret one line of input at `level`.
pub fn interpret(
    level: &ViewLevel,
    input: &str,
    directory: &StateDirectory,
    site_count: usize,
) -> Result<Action, InputError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("exit") {
        return Ok(Action::Quit);
    }

    if !level.is_site_selection() {
        let name = input.to_lowercase();
        return match directory.get(&name) {
            Some(url) => Ok(Action::OpenState {
                name,
                url: url.clone(),
            }),
            None => Err(InputError::UnknownState(input.to_string())),
        };
    }

    if input.eq_ignore_ascii_case("back") {
        return Ok(Action::Back);
    }

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::InvalidSelection(input.to_string()));
    }

    match input.parse::<usize>() {
        Ok(number) if (1..=site_count).contains(&number) => Ok(Action::OpenSite { index: number - 1 }),
        _ => Err(InputError::InvalidSelection(input.to_string())),
    }
}
