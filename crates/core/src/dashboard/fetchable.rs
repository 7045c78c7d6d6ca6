//! Tri-state wrapper for data a view has to fetch before it can render.

use std::fmt;

use serde::Serialize;

/// The load state of one view's whole dataset.
///
/// A view holds exactly one `Fetchable` for everything it shows: either
/// the data is still on its way, or every fetch succeeded, or the view
/// failed as a whole. There is no partially loaded dashboard; a view with
/// three fetches where one fails renders the error, not two thirds of
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Fetchable<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Fetchable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The loaded data, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Applies `f` to the loaded data, carrying the other states through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetchable<U> {
        match self {
            Self::Loading => Fetchable::Loading,
            Self::Error(message) => Fetchable::Error(message),
            Self::Ready(data) => Fetchable::Ready(f(data)),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Fetchable<T> {
    /// A finished fetch is never `Loading`: success is `Ready`, failure is
    /// `Error` with the rendered message.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}
