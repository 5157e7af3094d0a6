//! Advocate records and the free-text search over them.
//!
//! The store keeps advocates in a single SQLite table and answers two kinds of
//! reads: "everything" and "everything loosely matching a term". Matching is a
//! case-insensitive substring test against three renderings of a record:
//!
//! - `first_name last_name city degree`
//! - the specialties list as stored JSON text
//! - years of experience as text

mod error;
mod model;
mod query;
pub mod seed;
mod store;

pub use error::{Result, StoreError};
pub use model::Advocate;
pub use query::{AdvocateQuery, SearchTerm, SEARCH_TEXT_EXPR};
pub use store::{AdvocateSource, AdvocateStore};
