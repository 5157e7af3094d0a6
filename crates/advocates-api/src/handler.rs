use crate::wire::AdvocatesResponse;
use advocates_store::{Advocate, AdvocateSource, SearchTerm};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn AdvocateSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn AdvocateSource>) -> Self {
        Self { source }
    }
}

/// Result of one search, before it becomes an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<Advocate>),
    Failed,
}

impl IntoResponse for SearchOutcome {
    fn into_response(self) -> Response {
        match self {
            SearchOutcome::Found(data) => {
                (StatusCode::OK, Json(AdvocatesResponse::found(data))).into_response()
            }
            SearchOutcome::Failed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AdvocatesResponse::failed()),
            )
                .into_response(),
        }
    }
}

/// Run one search against `source`. `None` lists every advocate.
///
/// Storage errors are logged here and never reach the caller.
pub fn search_advocates(source: &dyn AdvocateSource, term: Option<&SearchTerm>) -> SearchOutcome {
    let result = match term {
        Some(term) => source.search(term),
        None => source.all(),
    };

    match result {
        Ok(advocates) => SearchOutcome::Found(advocates),
        Err(e) => {
            match term {
                Some(term) => log::error!("Advocate search for {:?} failed: {e}", term.as_str()),
                None => log::error!("Advocate listing failed: {e}"),
            }
            SearchOutcome::Failed
        }
    }
}

/// First `search` value in the query string. Repeats and unknown keys are ignored.
fn search_param(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value)
}

pub(crate) async fn advocates_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> SearchOutcome {
    let term = SearchTerm::parse(search_param(params).as_deref());
    let source = Arc::clone(&state.source);
    let start = Instant::now();

    let outcome = tokio::task::spawn_blocking(move || {
        let outcome = search_advocates(source.as_ref(), term.as_ref());
        (term, outcome)
    })
    .await;

    match outcome {
        Ok((term, outcome)) => {
            if let SearchOutcome::Found(ref data) = outcome {
                log::debug!(
                    "GET {} search={:?}: {} advocates in {:?}",
                    crate::ADVOCATES_PATH,
                    term.as_ref().map(SearchTerm::as_str),
                    data.len(),
                    start.elapsed()
                );
            }
            outcome
        }
        Err(e) => {
            log::error!("Advocate search task panicked: {e}");
            SearchOutcome::Failed
        }
    }
}
