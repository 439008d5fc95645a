//! Error taxonomy is deliberately shallow: parse errors from the schema
//! document, construction errors from the declaration builder. Everything is
//! fatal to the single compile call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON or a schema missing required fields, with the JSON
    /// path where deserialization stopped.
    #[error("at JSON path {path} → {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The declaration builder refuses to name a declaration with an empty
    /// identifier.
    #[error("empty identifier for {what}")]
    EmptyIdentifier { what: &'static str },
}
