//! Session Module
//!
//! Interactive menu on top of the record store.
//!
//! ## Responsibilities
//! - Print the numbered menu and read a choice
//! - Prompt for the values each action needs
//! - Call the record store and render outcomes as user messages
//!
//! Holds no storage logic of its own.

mod command;
mod controller;
mod prompt;

pub use command::{MenuChoice, MENU};
pub use controller::Session;
pub use prompt::Prompter;
