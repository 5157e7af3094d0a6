//! SQL construction for advocate lookups

use crate::Advocate;

/// Concatenated name, city and degree, the first of the three matched renderings.
pub const SEARCH_TEXT_EXPR: &str =
    "(first_name || ' ' || last_name || ' ' || city || ' ' || degree)";

const SELECT_ADVOCATES: &str = "SELECT id, first_name, last_name, city, degree, specialties, \
     years_of_experience, phone_number, created_at FROM advocates";

/// A non-empty free-text search term, kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Absent and empty terms both mean "no filter". Whitespace is significant.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(term) if !term.is_empty() => Some(Self(term.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The term as passed to SQL, case-folded the same way as the haystacks.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }

    /// In-memory evaluation of the search predicate.
    ///
    /// Folds case with [`str::to_lowercase`], the same folding the store's
    /// `fold()` SQL function applies, so it agrees with [`AdvocateQuery`] row for row.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        let needle = self.folded();
        [
            advocate.search_text(),
            advocate.specialties_text(),
            advocate.years_of_experience.to_string(),
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }
}

/// The two read shapes the directory supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvocateQuery {
    All,
    Matching(SearchTerm),
}

impl AdvocateQuery {
    pub fn new(term: Option<SearchTerm>) -> Self {
        match term {
            Some(term) => AdvocateQuery::Matching(term),
            None => AdvocateQuery::All,
        }
    }

    pub fn sql(&self) -> String {
        match self {
            AdvocateQuery::All => SELECT_ADVOCATES.to_string(),
            AdvocateQuery::Matching(_) => format!(
                "{SELECT_ADVOCATES} WHERE instr(fold({SEARCH_TEXT_EXPR}), ?1) > 0 \
                 OR instr(fold(specialties), ?1) > 0 \
                 OR instr(fold(CAST(years_of_experience AS TEXT)), ?1) > 0"
            ),
        }
    }

    pub fn params(&self) -> Vec<String> {
        match self {
            AdvocateQuery::All => Vec::new(),
            AdvocateQuery::Matching(term) => vec![term.folded()],
        }
    }
}
