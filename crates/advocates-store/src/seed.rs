//! Seed data import
//!
//! Seed files are JSON arrays in the same camelCase shape the search API
//! returns. Any `id`/`createdAt` keys are ignored.

use crate::{Advocate, Result, StoreError};
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../data/advocates.json");

/// The sample directory shipped with the crate.
pub fn builtin() -> Result<Vec<Advocate>> {
    parse(BUILTIN_SEED, "built-in seed data")
}

pub fn load(path: &Path) -> Result<Vec<Advocate>> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, &path.display().to_string())
}

fn parse(text: &str, origin: &str) -> Result<Vec<Advocate>> {
    serde_json::from_str(text).map_err(|source| StoreError::Seed {
        origin: origin.to_string(),
        source,
    })
}
