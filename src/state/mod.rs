// State management module.
// Handles navigation, input interpretation, list state and the message console.

#![allow(dead_code)]

pub mod console;
pub mod lists;
pub mod navigation;
pub mod shell;

pub use console::{Console, ConsoleLevel, ConsoleMessage};
pub use lists::{LoadingState, SelectableList};
pub use navigation::{BreadcrumbNode, NavigationStack, ViewLevel};
pub use shell::{Action, InputError, interpret};
