use crate::{Advocate, AdvocateQuery, Result, SearchTerm, StoreError, SEARCH_TEXT_EXPR};
use chrono::NaiveDateTime;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::path::Path;
use std::time::Duration;

/// Bump when the table layout changes.
const SCHEMA_VERSION: i32 = 1;

/// Read access to advocate records.
///
/// The search API depends on this rather than on [`AdvocateStore`] so a
/// failing backend can be substituted.
pub trait AdvocateSource: Send + Sync {
    /// Every advocate, in storage order.
    fn all(&self) -> Result<Vec<Advocate>>;

    /// Advocates loosely matching `term`, in storage order.
    fn search(&self, term: &SearchTerm) -> Result<Vec<Advocate>>;
}

pub struct AdvocateStore {
    pool: Pool<SqliteConnectionManager>,
}

impl AdvocateStore {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            // Pooled readers must not block on a concurrent seed import
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.busy_timeout(Duration::from_secs(5))?;
            register_functions(conn)
        });
        let pool = Pool::new(manager)?;
        log::debug!("Opened advocate store at {}", path.display());

        let store = Self { pool };
        store.migrate()?;
        Ok(store)
    }

    /// Private in-memory database. The pool holds a single connection so
    /// every caller sees the same data.
    pub fn open_in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory().with_init(register_functions);
        let pool = Pool::builder().max_size(1).build(manager)?;
        let store = Self { pool };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        let conn = self.pool.get()?;
        let current: i32 = conn.pragma_query_value(None, "user_version", |r| r.get(0))?;
        if current != SCHEMA_VERSION {
            log::debug!("Migrating advocate schema from v{current} to v{SCHEMA_VERSION}");
        }
        conn.execute_batch(&schema_sql())?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(())
    }

    /// Insert records in a single transaction. Ids and timestamps on the
    /// input are ignored; the store assigns both.
    pub fn insert_all(&self, advocates: &[Advocate]) -> Result<usize> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO advocates
                    (first_name, last_name, city, degree, specialties, years_of_experience, phone_number)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for advocate in advocates {
                stmt.execute(params![
                    advocate.first_name,
                    advocate.last_name,
                    advocate.city,
                    advocate.degree,
                    advocate.specialties_text(),
                    advocate.years_of_experience,
                    advocate.phone_number,
                ])?;
            }
        }
        tx.commit()?;
        Ok(advocates.len())
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM advocates", [], |r| r.get(0))?)
    }

    pub fn query(&self, query: &AdvocateQuery) -> Result<Vec<Advocate>> {
        let conn = self.pool.get()?;
        run_query(&conn, query)
    }

    /// Run raw SQL against a pooled connection. Only meant for tests that need
    /// to break the store on purpose.
    #[doc(hidden)]
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute_batch(sql)?;
        Ok(())
    }
}

impl AdvocateSource for AdvocateStore {
    fn all(&self) -> Result<Vec<Advocate>> {
        self.query(&AdvocateQuery::All)
    }

    fn search(&self, term: &SearchTerm) -> Result<Vec<Advocate>> {
        self.query(&AdvocateQuery::Matching(term.clone()))
    }
}

/// `fold(text)`: Unicode lowercase, matching [`SearchTerm::matches`]. NULL stays NULL.
fn register_functions(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|text| text.to_lowercase())),
    )
}

fn schema_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS advocates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            city TEXT NOT NULL,
            degree TEXT NOT NULL,
            specialties TEXT NOT NULL DEFAULT '[]' CHECK (json_valid(specialties)),
            years_of_experience INTEGER NOT NULL CHECK (years_of_experience >= 0),
            phone_number INTEGER NOT NULL,
            created_at TEXT DEFAULT CURRENT_TIMESTAMP
        );
        CREATE INDEX IF NOT EXISTS advocates_search_idx ON advocates ({SEARCH_TEXT_EXPR});"
    )
}

fn run_query(conn: &Connection, query: &AdvocateQuery) -> Result<Vec<Advocate>> {
    let mut stmt = conn.prepare(&query.sql())?;
    let rows = stmt.query_map(params_from_iter(query.params()), AdvocateRow::from_row)?;
    rows.map(|row| row.map_err(StoreError::from).and_then(AdvocateRow::into_advocate))
        .collect()
}

/// A row as read from SQLite, before the specialties JSON is decoded.
struct AdvocateRow {
    id: i64,
    first_name: String,
    last_name: String,
    city: String,
    degree: String,
    specialties: String,
    years_of_experience: u32,
    phone_number: i64,
    created_at: Option<NaiveDateTime>,
}

impl AdvocateRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            city: row.get(3)?,
            degree: row.get(4)?,
            specialties: row.get(5)?,
            years_of_experience: row.get(6)?,
            phone_number: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    fn into_advocate(self) -> Result<Advocate> {
        let specialties = serde_json::from_str(&self.specialties).map_err(|source| {
            StoreError::Specialties {
                id: self.id,
                source,
            }
        })?;
        Ok(Advocate {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
            created_at: self.created_at,
        })
    }
}
