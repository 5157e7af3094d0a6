use crate::settings;
use advocates_store::{seed, AdvocateStore};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    /// SQLite database file [env: ADVOCATES_DB] [default: advocates.db]
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub db: Option<PathBuf>,

    /// JSON array of advocates to import instead of the built-in sample set
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

pub fn execute(args: SeedArgs) -> Result<()> {
    let advocates = match &args.file {
        Some(path) => seed::load(path)?,
        None => seed::builtin()?,
    };

    let db_path = settings::db_path(args.db);
    let store = AdvocateStore::open(&db_path)
        .with_context(|| format!("Failed to open {}", db_path.display()))?;
    let inserted = store
        .insert_all(&advocates)
        .context("Failed to import advocates")?;
    let total = store.count()?;

    log::debug!("Seeded {inserted} advocates into {}", db_path.display());
    println!(
        "{} {inserted} advocates into {} ({total} total)",
        "Seeded".green(),
        db_path.display()
    );
    Ok(())
}
