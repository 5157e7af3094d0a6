//! Interactive directory browser
//!
//! Architecture:
//! - Main thread: renders the [`Directory`](crate::Directory) and handles input
//! - Worker thread: performs HTTP fetches against the search API
//! - Communication via mpsc channels (requests -> worker, responses <- worker)
//!
//! Layout:
//! ```text
//! ▌ anx█
//!
//!   Name          City     Degree  Specialties                      Years  Phone
//! ▶ Jane Doe      Austin   MD      [anxiety]                        4      5551234567
//!
//!  1 advocate │ Tab: tags │ Enter: pick tag │ Esc: quit
//! ```

mod app;
mod ui;

pub use app::{run, App};
pub use ui::render;
