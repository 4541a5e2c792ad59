use thiserror::Error;

use crate::model::PageType;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{kind} source request failed for {id}: {source}")]
    Request {
        kind: &'static str,
        id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind} source returned HTTP {status} for {id}")]
    Status {
        kind: &'static str,
        id: String,
        status: reqwest::StatusCode,
    },

    #[error("{kind} source returned an unusable body for {id}: {detail}")]
    BadBody {
        kind: &'static str,
        id: String,
        detail: String,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing {variable} in environment, required for the {kind} source")]
    MissingCredentials {
        kind: &'static str,
        variable: &'static str,
    },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
#[error("invalid page type override: {0:?} (expected \"cost\" or \"city\")")]
pub struct InvalidPageType(pub String);

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("scoring request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("scoring service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("scoring service returned an unparsable response: {0}")]
    Unparsable(String),

    #[error("scoring service returned an out-of-range score: {0}")]
    OutOfRange(i64),
}

#[derive(Debug, Error)]
#[error("checklist evaluation produced zero item scores for a {} page", .0.as_str())]
pub struct EmptyChecklist(pub PageType);
