//! Canned advocates and stores in known states.

use advocates_store::{Advocate, AdvocateSource, AdvocateStore, Result, SearchTerm, StoreError};

pub fn jane_doe() -> Advocate {
    Advocate::new("Jane", "Doe", "Austin", "MD")
        .with_specialties(["anxiety"])
        .with_years_of_experience(4)
        .with_phone_number(5551234567)
}

/// A small directory with one advocate per interesting shape.
pub fn sample_advocates() -> Vec<Advocate> {
    vec![
        jane_doe(),
        Advocate::new("Sam", "Lee", "Boston", "PhD")
            .with_specialties(["grief", "couples"])
            .with_years_of_experience(14)
            .with_phone_number(5559876543),
        Advocate::new("Ana", "Ruiz", "San Antonio", "MSW")
            .with_specialties([
                "Trauma & PTSD",
                "ADHD",
                "Eating disorders",
                "Sleep issues",
                "Chronic pain",
            ])
            .with_years_of_experience(9)
            .with_phone_number(15552223333),
        Advocate::new("Ravi", "Patel", "Denver", "MD").with_phone_number(5550001111),
    ]
}

/// In-memory store holding [`sample_advocates`].
pub fn seeded_store() -> AdvocateStore {
    let store = AdvocateStore::open_in_memory().expect("open in-memory store");
    store
        .insert_all(&sample_advocates())
        .expect("seed in-memory store");
    store
}

/// In-memory store whose `advocates` table has been dropped, so every read fails.
pub fn broken_store() -> AdvocateStore {
    let store = seeded_store();
    store
        .execute_batch("DROP TABLE advocates;")
        .expect("drop advocates table");
    store
}

/// Source that fails every read without touching SQLite.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSource;

impl AdvocateSource for FailingSource {
    fn all(&self) -> Result<Vec<Advocate>> {
        Err(unavailable())
    }

    fn search(&self, _term: &SearchTerm) -> Result<Vec<Advocate>> {
        Err(unavailable())
    }
}

fn unavailable() -> StoreError {
    StoreError::Io {
        path: "advocates.db".into(),
        source: std::io::Error::other("storage unavailable"),
    }
}

/// Serialize advocates to the seed file format.
pub fn seed_json(advocates: &[Advocate]) -> String {
    serde_json::to_string_pretty(advocates).expect("serialize seed")
}
