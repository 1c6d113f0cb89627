// Request-side helpers: pagination, redirects, URL splitting and 404 lookups
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, UtilsError};
use crate::misc::parse::int_or_none;
use axum::extract::Query;
use axum::http::{header, HeaderMap, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// `?page=` query parameters, usable with `axum::extract::Query`.
///
/// The raw string is kept so that a malformed value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.as_deref().and_then(int_or_none).unwrap_or(1)
    }
}

/// Page number from a raw query map, defaulting to 1.
pub fn page_from_query(params: &HashMap<String, String>) -> i64 {
    params
        .get("page")
        .map(String::as_str)
        .and_then(int_or_none)
        .unwrap_or(1)
}

/// Serialize `results` and return the slice belonging to `page` (1-based).
///
/// Pages below 1 and pages past the end yield an empty vector.
pub fn paginate_results<I, T>(page: i64, results: I, result_per_page: usize) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    if page < 1 || result_per_page == 0 {
        return Ok(Vec::new());
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(result_per_page));
    let Some(start) = start else {
        return Ok(Vec::new());
    };

    results
        .into_iter()
        .skip(start)
        .take(result_per_page)
        .map(|item| serde_json::to_value(item).map_err(UtilsError::from))
        .collect()
}

/// Split a URL on `/`, keeping empty segments.
pub fn url_parts(url: &str) -> Vec<&str> {
    url.split('/').collect()
}

/// Something that resolves to zero or one result.
pub trait OneOrNone {
    type Output;

    fn one_or_none(self) -> Result<Option<Self::Output>>;
}

impl<T> OneOrNone for Option<T> {
    type Output = T;

    fn one_or_none(self) -> Result<Option<T>> {
        Ok(self)
    }
}

impl<T> OneOrNone for Result<Option<T>> {
    type Output = T;

    fn one_or_none(self) -> Result<Option<T>> {
        self
    }
}

/// Resolve `query`, mapping an empty result to [`UtilsError::NotFound`]
/// (rendered as HTTP 404 by axum).
pub fn get_or_404<Q: OneOrNone>(query: Q) -> Result<Q::Output> {
    query.one_or_none()?.ok_or(UtilsError::NotFound)
}

/// Pick where to send the user next: the `next` parameter, then the
/// referrer, then `default`. Empty values are skipped.
pub fn redirect_url(next: Option<&str>, referrer: Option<&str>, default: &str) -> String {
    next.filter(|s| !s.is_empty())
        .or_else(|| referrer.filter(|s| !s.is_empty()))
        .unwrap_or(default)
        .to_string()
}

/// [`redirect_url`] fed from request parts.
pub fn redirect_target(uri: &Uri, headers: &HeaderMap, default: &str) -> String {
    let next = Query::<HashMap<String, String>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(mut params)| params.remove("next"));
    let referrer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    redirect_url(next.as_deref(), referrer, default)
}
