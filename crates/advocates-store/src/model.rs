use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single advocate listed in the directory.
///
/// Serializes to the wire shape of the search API: camelCase keys, with the
/// store-assigned `id` and `created_at` left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Sequential row id, `None` until the record is stored
    #[serde(skip)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered tag list; duplicates are allowed
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: i64,
    /// Insertion time assigned by the store
    #[serde(skip)]
    pub created_at: Option<NaiveDateTime>,
}

impl Advocate {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            degree: degree.into(),
            specialties: Vec::new(),
            years_of_experience: 0,
            phone_number: 0,
            created_at: None,
        }
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years_of_experience(mut self, years: u32) -> Self {
        self.years_of_experience = years;
        self
    }

    pub fn with_phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = phone_number;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Name, city and degree joined by single spaces.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.first_name, self.last_name, self.city, self.degree
        )
    }

    /// Specialties as JSON text with `", "` between items (`["a", "b"]`), the
    /// form persisted in the `specialties` column and searched.
    pub fn specialties_text(&self) -> String {
        let items: Vec<String> = self
            .specialties
            .iter()
            .map(|s| serde_json::Value::from(s.as_str()).to_string())
            .collect();
        format!("[{}]", items.join(", "))
    }
}
