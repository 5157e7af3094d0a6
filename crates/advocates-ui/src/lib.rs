//! Directory UI: a terminal browser over the advocate search API.
//!
//! [`Directory`] holds all view state and is driven with explicit timestamps,
//! so the debounce and request ordering can be exercised without a terminal.
//! The [`tui`] module wires it to crossterm/ratatui and a fetch worker thread.

mod client;
mod config;
mod debounce;
mod directory;
mod input;
mod specialties;
pub mod tui;
mod worker;

pub use client::{advocates_url, DirectoryClient};
pub use config::{UiConfig, DEFAULT_API_URL};
pub use debounce::{Debouncer, DEBOUNCE_DELAY};
pub use directory::{Directory, FetchRequest, FetchResponse};
pub use input::{KeyOutcome, TextInput};
pub use specialties::{visible_specialties, SpecialtyDisplay, MAX_VISIBLE_SPECIALTIES};
pub use worker::spawn_fetch_worker;
