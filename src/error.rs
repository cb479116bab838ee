//! Error taxonomy for browser glue and network calls.
//!
//! Pure state modules never fail; everything that touches the DOM, storage,
//! or the network reports through [`ClientError`] so controllers can log and
//! carry on instead of aborting the page script.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A required element is absent from the page.
    #[error("missing element: #{0}")]
    MissingElement(&'static str),
    /// A browser API threw; carries the stringified `JsValue`.
    #[error("browser api error: {0}")]
    Js(String),
    /// The request never produced a response.
    #[error("http transport error: {0}")]
    Http(String),
    #[error("unexpected http status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ClientError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            other => Self::Http(other.to_string()),
        }
    }
}
