//! Explicit outcome of a backend read.

use crate::domain::backend::BackendResult;

/// Result of a read that separates legitimate emptiness from failure.
///
/// Backend failures on the dashboard never abort rendering. They are kept as
/// [`Fetched::Failed`] so the page (and tests) can tell "nothing there" apart
/// from "could not ask".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    Data(T),
    Empty,
    Failed(String),
}

impl<T> Fetched<T> {
    /// Maps an optional lookup: `Some` is data, `None` is empty.
    pub fn from_optional(result: BackendResult<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Self::Data(value),
            Ok(None) => Self::Empty,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> Fetched<Vec<T>> {
    /// Maps a listing: a non-empty vector is data, an empty one is empty.
    pub fn from_list(result: BackendResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Data(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
