use serde::Serialize;

use crate::error::ApiError;

/// State of one remotely fetched data source, as seen by the templates.
///
/// Serializes with a `status` tag so a template can branch on
/// `loading` / `error` / `ready`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Remote<T> {
    Loading,
    Error { message: String },
    Ready { data: T },
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T> Remote<T> {
    /// Resolves a fetch. The detailed error goes to the log; the page only
    /// gets "Failed to fetch <source>".
    pub fn from_result(result: Result<T, ApiError>, source: &str) -> Self {
        match result {
            Ok(data) => Remote::Ready { data },
            Err(e) => {
                tracing::warn!(error = %e, source, "fetch failed");
                Remote::Error {
                    message: format!("Failed to fetch {source}"),
                }
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready { data } => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Remote::Loading => Remote::Loading,
            Remote::Error { message } => Remote::Error { message },
            Remote::Ready { data } => Remote::Ready { data: f(data) },
        }
    }
}
