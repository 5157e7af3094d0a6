use crate::settings;
use advocates_api::AdvocatesResponse;
use advocates_store::{Advocate, AdvocateSource, AdvocateStore, SearchTerm};
use advocates_ui::{visible_specialties, DirectoryClient};
use anyhow::{Context, Result};
use clap::Args;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text term; omit to list everyone
    #[arg(value_name = "TERM")]
    pub term: Option<String>,

    /// Search a local SQLite database [env: ADVOCATES_DB] [default: advocates.db]
    #[arg(long, value_name = "PATH", conflicts_with = "api_url")]
    pub db: Option<PathBuf>,

    /// Query a running search API instead of a local database
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Print the API response body as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let advocates = match &args.api_url {
        Some(url) => {
            let term = args.term.as_deref().unwrap_or_default();
            DirectoryClient::new(url.as_str())?.fetch(term)?.data
        }
        None => search_local(settings::db_path(args.db.clone()), args.term.as_deref())?,
    };

    let mut writer = io::stdout().lock();
    if args.json {
        let body = serde_json::to_string_pretty(&AdvocatesResponse::found(advocates))?;
        writeln!(writer, "{body}")?;
    } else if advocates.is_empty() {
        writeln!(writer, "No advocates found")?;
    } else {
        write_advocate_table(&advocates, writer)?;
    }
    Ok(())
}

fn search_local(db_path: PathBuf, term: Option<&str>) -> Result<Vec<Advocate>> {
    let store = AdvocateStore::open(&db_path)
        .with_context(|| format!("Failed to open {}", db_path.display()))?;
    let result = match SearchTerm::parse(term) {
        Some(term) => store.search(&term),
        None => store.all(),
    };
    result.context("Search failed")
}

fn write_advocate_table<W: Write>(advocates: &[Advocate], mut writer: W) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::DynamicFullWidth);
    table.set_header(vec![
        "Name",
        "City",
        "Degree",
        "Specialties",
        "Years",
        "Phone",
    ]);

    for advocate in advocates {
        let display = visible_specialties(&advocate.specialties);
        let mut specialties = display.visible.join(", ");
        if let Some(label) = display.overflow_label() {
            specialties = format!("{specialties} {label}");
        }
        table.add_row(vec![
            advocate.full_name(),
            advocate.city.clone(),
            advocate.degree.clone(),
            specialties,
            advocate.years_of_experience.to_string(),
            advocate.phone_number.to_string(),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}
