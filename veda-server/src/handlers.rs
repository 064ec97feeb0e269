//! Route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use veda_core::{DataElementQuery, DataElementResult, PurposeQuery, QueryParams};

use crate::{
    AppState,
    response::{self, json, not_found},
};

/// Decoded query string, repeated keys preserved in request order.
type RawQuery = Query<Vec<(String, String)>>;

pub(crate) async fn data_elements(
    State(state): State<AppState>,
    Query(pairs): RawQuery,
) -> Response {
    let query = DataElementQuery::from_params(&QueryParams::from_pairs(pairs));
    match state.engine().data_elements(&query) {
        DataElementResult::Page(page) => json(StatusCode::OK, &page),
        DataElementResult::Found(element) => json(StatusCode::OK, &element),
        DataElementResult::NotFound => not_found(),
    }
}

pub(crate) async fn purposes(State(state): State<AppState>, Query(pairs): RawQuery) -> Response {
    let query = PurposeQuery::from_params(&QueryParams::from_pairs(pairs));
    json(StatusCode::OK, &state.engine().purposes(&query))
}

pub(crate) async fn method_not_allowed() -> Response {
    response::method_not_allowed()
}
