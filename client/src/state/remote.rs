//! Load state for data fetched from the backend.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

/// A value being fetched, fetched, or failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

impl<T> Remote<Vec<T>> {
    /// Items when loaded, empty otherwise.
    pub fn items(&self) -> &[T] {
        self.ready().map_or(&[], Vec::as_slice)
    }
}
