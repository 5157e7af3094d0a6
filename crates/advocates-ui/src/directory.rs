//! View state of the directory screen.

use crate::debounce::Debouncer;
use crate::input::{KeyOutcome, TextInput};
use crate::specialties::visible_specialties;
use advocates_store::Advocate;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

/// A search the UI wants performed. An empty `term` lists everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub seq: u64,
    pub result: Result<Vec<Advocate>, String>,
}

#[derive(Debug, Default)]
pub struct Directory {
    advocates: Vec<Advocate>,
    search: TextInput,
    selected: usize,
    /// Index into the selected row's visible specialties
    focused_tag: Option<usize>,
    debounce: Debouncer<String>,
    latest_seq: u64,
    last_error: Option<String>,
    loaded: bool,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial unfiltered request, issued without waiting for the debounce.
    pub fn mount(&mut self) -> FetchRequest {
        self.issue(String::new())
    }

    /// Record that the search box text changed.
    pub fn on_search_edited(&mut self, now: Instant) {
        self.focused_tag = None;
        self.debounce.schedule(self.search.text().to_string(), now);
    }

    pub fn set_search_term(&mut self, text: impl Into<String>, now: Instant) {
        self.search.set(text);
        self.on_search_edited(now);
    }

    pub fn select_specialty(&mut self, tag: &str, now: Instant) {
        log::debug!("Selected specialty {tag:?}");
        self.set_search_term(tag, now);
    }

    /// Feed a key to the search box; schedules a search if the text changed.
    pub fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) -> bool {
        match self.search.handle_key(code, modifiers) {
            KeyOutcome::Edited => {
                self.on_search_edited(now);
                true
            }
            KeyOutcome::Moved => true,
            KeyOutcome::Ignored => false,
        }
    }

    /// Issue the debounced search once it is due.
    pub fn poll(&mut self, now: Instant) -> Option<FetchRequest> {
        let term = self.debounce.take_due(now)?;
        Some(self.issue(term))
    }

    fn issue(&mut self, term: String) -> FetchRequest {
        self.latest_seq += 1;
        FetchRequest {
            seq: self.latest_seq,
            term,
        }
    }

    /// Apply a response if it answers the latest request. Returns false for stale ones.
    pub fn apply(&mut self, response: FetchResponse) -> bool {
        if response.seq != self.latest_seq {
            log::debug!(
                "Discarding stale response #{} (latest #{})",
                response.seq,
                self.latest_seq
            );
            return false;
        }

        match response.result {
            Ok(advocates) => {
                self.advocates = advocates;
                self.last_error = None;
            }
            Err(e) => {
                self.advocates.clear();
                self.last_error = Some(e);
            }
        }
        self.loaded = true;
        self.selected = self.selected.min(self.advocates.len().saturating_sub(1));
        self.focused_tag = None;
        true
    }

    pub fn teardown(&mut self) {
        self.debounce.cancel();
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.advocates.len() {
            self.selected += 1;
            self.focused_tag = None;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.focused_tag = None;
        }
    }

    /// Move tag focus across the selected row's visible specialties, wrapping
    /// through "no tag focused".
    pub fn cycle_tag(&mut self, forward: bool) {
        let count = self
            .selected_advocate()
            .map_or(0, |a| visible_specialties(&a.specialties).visible.len());
        if count == 0 {
            self.focused_tag = None;
            return;
        }

        self.focused_tag = match (self.focused_tag, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(i), false) if i > 0 => Some(i - 1),
            (Some(_), _) => None,
        };
    }

    /// Select the focused tag, if any. Returns whether one was selected.
    pub fn select_focused_tag(&mut self, now: Instant) -> bool {
        let tag = self.focused_tag.and_then(|i| {
            self.selected_advocate()
                .and_then(|a| visible_specialties(&a.specialties).visible.get(i).cloned())
        });
        match tag {
            Some(tag) => {
                self.select_specialty(&tag, now);
                true
            }
            None => false,
        }
    }

    pub fn advocates(&self) -> &[Advocate] {
        &self.advocates
    }

    pub fn search(&self) -> &TextInput {
        &self.search
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.advocates.is_empty()).then_some(self.selected)
    }

    pub fn selected_advocate(&self) -> Option<&Advocate> {
        self.advocates.get(self.selected)
    }

    pub fn focused_tag(&self) -> Option<usize> {
        self.focused_tag
    }

    pub fn is_search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether any response has been applied yet
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::DEBOUNCE_DELAY;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn advocate(first: &str, specialties: &[&str]) -> Advocate {
        Advocate::new(first, "Doe", "Austin", "MD").with_specialties(specialties.iter().copied())
    }

    fn loaded(advocates: Vec<Advocate>) -> Directory {
        let mut dir = Directory::new();
        let req = dir.mount();
        assert!(dir.apply(FetchResponse {
            seq: req.seq,
            result: Ok(advocates),
        }));
        dir
    }

    #[test]
    fn test_mount_issues_unfiltered_request() {
        let mut dir = Directory::new();
        let req = dir.mount();
        assert_eq!(req, FetchRequest { seq: 1, term: String::new() });
        assert!(!dir.is_search_pending());
    }

    #[test]
    fn test_burst_of_typing_issues_one_request() {
        let t0 = Instant::now();
        let mut dir = loaded(vec![]);

        let mut issued = Vec::new();
        for (i, c) in "abc".chars().enumerate() {
            let now = t0 + ms(100 * i as u64);
            dir.handle_search_key(KeyCode::Char(c), KeyModifiers::NONE, now);
            issued.extend(dir.poll(now));
        }
        assert_eq!(dir.search_text(), "abc");
        assert!(issued.is_empty());

        // 300ms after the last keystroke, not after the first
        assert_eq!(dir.poll(t0 + ms(499)), None);
        issued.extend(dir.poll(t0 + ms(200) + DEBOUNCE_DELAY));
        issued.extend(dir.poll(t0 + ms(2000)));

        assert_eq!(issued, vec![FetchRequest { seq: 2, term: "abc".into() }]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let t0 = Instant::now();
        let mut dir = loaded(vec![]);

        dir.set_search_term("a", t0);
        let first = dir.poll(t0 + DEBOUNCE_DELAY).unwrap();
        dir.set_search_term("ab", t0 + ms(400));
        let second = dir.poll(t0 + ms(400) + DEBOUNCE_DELAY).unwrap();
        assert!(second.seq > first.seq);

        let jane = advocate("Jane", &["anxiety"]);
        let bob = advocate("Bob", &[]);

        // latest resolves first, then the older one arrives late
        assert!(dir.apply(FetchResponse { seq: second.seq, result: Ok(vec![jane.clone()]) }));
        assert!(!dir.apply(FetchResponse { seq: first.seq, result: Ok(vec![bob]) }));
        assert_eq!(dir.advocates(), &[jane]);
    }

    #[test]
    fn test_failure_shows_empty_list() {
        let mut dir = loaded(vec![advocate("Jane", &[])]);
        let t0 = Instant::now();
        dir.set_search_term("x", t0);
        let req = dir.poll(t0 + DEBOUNCE_DELAY).unwrap();

        assert!(dir.apply(FetchResponse {
            seq: req.seq,
            result: Err("connection refused".into()),
        }));
        assert!(dir.advocates().is_empty());
        assert_eq!(dir.selected(), None);
        assert_eq!(dir.last_error(), Some("connection refused"));
    }

    #[test]
    fn test_mount_failure_shows_empty_list() {
        let mut dir = Directory::new();
        let req = dir.mount();
        assert!(dir.apply(FetchResponse { seq: req.seq, result: Err("down".into()) }));
        assert!(dir.is_loaded());
        assert!(dir.advocates().is_empty());
    }

    #[test]
    fn test_tag_selection_sets_exact_text_and_requests_it() {
        let t0 = Instant::now();
        let mut dir = loaded(vec![advocate("Jane", &["Trauma & PTSD", "grief"])]);
        dir.set_search_term("zz", t0);

        dir.cycle_tag(true);
        assert_eq!(dir.focused_tag(), Some(0));
        assert!(dir.select_focused_tag(t0 + ms(50)));
        assert_eq!(dir.search_text(), "Trauma & PTSD");
        assert_eq!(dir.search().cursor(), "Trauma & PTSD".len());

        // the earlier "zz" timer was replaced
        assert_eq!(dir.poll(t0 + DEBOUNCE_DELAY), None);
        let req = dir.poll(t0 + ms(50) + DEBOUNCE_DELAY).unwrap();
        assert_eq!(req.term, "Trauma & PTSD");
    }

    #[test]
    fn test_tag_focus_only_covers_visible_tags() {
        let mut dir = loaded(vec![advocate("Jane", &["a", "b", "c", "d", "e"])]);
        for expected in [Some(0), Some(1), Some(2), None, Some(0)] {
            dir.cycle_tag(true);
            assert_eq!(dir.focused_tag(), expected);
        }
        dir.cycle_tag(false);
        assert_eq!(dir.focused_tag(), None);
        dir.cycle_tag(false);
        assert_eq!(dir.focused_tag(), Some(2));
    }

    #[test]
    fn test_selection_clamps_to_new_results() {
        let t0 = Instant::now();
        let mut dir = loaded(vec![advocate("A", &[]), advocate("B", &[]), advocate("C", &[])]);
        dir.select_next();
        dir.select_next();
        dir.select_next();
        assert_eq!(dir.selected(), Some(2));

        dir.set_search_term("a", t0);
        let req = dir.poll(t0 + DEBOUNCE_DELAY).unwrap();
        dir.apply(FetchResponse { seq: req.seq, result: Ok(vec![advocate("A", &[])]) });
        assert_eq!(dir.selected(), Some(0));
    }

    #[test]
    fn test_teardown_cancels_pending_search() {
        let t0 = Instant::now();
        let mut dir = loaded(vec![]);
        dir.set_search_term("anx", t0);
        assert!(dir.is_search_pending());

        dir.teardown();
        assert!(!dir.is_search_pending());
        assert_eq!(dir.poll(t0 + ms(10_000)), None);
    }
}
