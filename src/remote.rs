//! Remote suggestion lookup: one GET per request, JSON array responses.

use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use crate::{
    error::{Error, LookupError, Result},
    widget::Suggestion,
};

/// A lookup the widget asked the host to run. Carries everything needed to
/// fetch and parse, so the widget itself never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Endpoint URL without the query parameter.
    pub source: String,
    /// The input value this request was issued for.
    pub query: String,
    /// Label field for object-shaped results.
    pub property: String,
}

/// Fetch and parse suggestions for one request.
///
/// The query term is attached as a url-encoded `query` parameter. A
/// non-success status or an unparseable body is an error; the caller
/// reports it and keeps its current dropdown.
pub async fn fetch_suggestions(client: &Client, request: &LookupRequest) -> Result<Vec<Suggestion>> {
    let response = client
        .get(&request.source)
        .query(&[("query", request.query.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            url: request.source.clone(),
        }
        .into());
    }

    let body = response.text().await?;
    parse_suggestions(&body, &request.property)
}

/// Parse a response body into suggestions.
///
/// The body must be a JSON array. String elements become plain labels.
/// Object elements contribute the `property` field as label and the whole
/// object as payload; records without a string label are dropped entirely,
/// label and payload together, so the positional pairing stays aligned.
pub fn parse_suggestions(body: &str, property: &str) -> Result<Vec<Suggestion>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(elements) = value else {
        return Err(Error::Lookup(LookupError::NotAnArray));
    };

    let mut suggestions = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            Value::String(label) => suggestions.push(Suggestion::new(label)),
            Value::Object(ref record) => match record.get(property).and_then(Value::as_str) {
                Some(label) => {
                    suggestions.push(Suggestion::with_payload(label.to_string(), element.clone()));
                }
                None => warn!("dropping record without string property {property:?}: {element}"),
            },
            other => warn!("dropping non-record element: {other}"),
        }
    }

    Ok(suggestions)
}
