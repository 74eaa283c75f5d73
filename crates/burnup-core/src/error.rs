// File: crates/burnup-core/src/error.rs
// Summary: Error type for chart discovery, path parsing and document loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no series matched `{0}`")]
    NoSeries(String),
    #[error("<{element}> has no `{name}` attribute")]
    MissingAttribute { element: String, name: String },
    #[error("path has no coordinate pairs: {0:?}")]
    EmptyPath(String),
    #[error("bad coordinate `{token}` in path")]
    MalformedPath { token: String },
    #[error("no chart root matched `{0}`")]
    MissingRoot(String),
    #[error("`{name}` is not a number: {value:?}")]
    InvalidDimension { name: String, value: String },
    #[error("series element is detached from the tree")]
    Detached,
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: &'static str },
    #[error("invalid viewBox {0:?}")]
    ViewBox(String),
    #[error("failed to parse document: {0}")]
    Xml(#[from] roxmltree::Error),
}
