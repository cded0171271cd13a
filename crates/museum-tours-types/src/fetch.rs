//! Load-on-mount state shared by every page
//!
//! `Loading` → `Ready(data)` | `Failed(message)`. The first resolution wins;
//! there is no transition back to `Loading`.

use std::fmt::Display;

/// State of a single page data fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    /// Combine two concurrent fetches. Ready only when both succeeded;
    /// otherwise the first failure (left before right) is reported.
    pub fn join<U, E: Display>(left: Result<T, E>, right: Result<U, E>) -> FetchState<(T, U)> {
        match (left, right) {
            (Ok(l), Ok(r)) => FetchState::Ready((l, r)),
            (Err(e), _) | (_, Err(e)) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(data) => FetchState::Ready(f(data)),
            FetchState::Failed(message) => FetchState::Failed(message),
        }
    }

    /// Turn a `Ready` value into a failure when `check` rejects it
    pub fn require(self, check: impl FnOnce(&T) -> bool, message: &str) -> Self {
        match self {
            FetchState::Ready(data) if !check(&data) => FetchState::Failed(message.to_string()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_default_is_loading() {
        let state: FetchState<u32> = FetchState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: FetchState<u32> = FetchState::from_result(Ok::<_, ApiError>(7));
        assert_eq!(ok.ready(), Some(&7));

        let failed: FetchState<u32> =
            FetchState::from_result(Err(ApiError::network("connection refused")));
        assert_eq!(failed.error(), Some("Network error: connection refused"));
    }

    #[test]
    fn test_join_requires_both() {
        let both = FetchState::join(Ok::<_, ApiError>("theme"), Ok(vec![1, 2]));
        assert_eq!(both.ready(), Some(&("theme", vec![1, 2])));

        let right_failed =
            FetchState::join(Ok::<&str, _>("theme"), Err::<Vec<u8>, _>(ApiError::network("x")));
        assert!(right_failed.ready().is_none());
        assert_eq!(right_failed.error(), Some("Network error: x"));

        let left_failed =
            FetchState::join(Err::<&str, _>(ApiError::network("left")), Ok::<_, ApiError>(1));
        assert_eq!(left_failed.error(), Some("Network error: left"));
    }

    #[test]
    fn test_require_rejects_empty() {
        let state = FetchState::<Vec<u8>>::Ready(Vec::new()).require(|v| !v.is_empty(), "Tour not found");
        assert_eq!(state.error(), Some("Tour not found"));

        let kept = FetchState::Ready(vec![1u8]).require(|v| !v.is_empty(), "Tour not found");
        assert_eq!(kept.ready(), Some(&vec![1u8]));
    }

    #[test]
    fn test_map_preserves_failure() {
        let state: FetchState<u32> = FetchState::Failed("Tour not found".into());
        assert_eq!(state.map(|n| n * 2).error(), Some("Tour not found"));

        let ready = FetchState::Ready(3u32).map(|n| n * 2);
        assert_eq!(ready.ready(), Some(&6));
    }
}
