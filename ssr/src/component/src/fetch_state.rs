use thiserror::Error;

/// The single failure kind surfaced by the remote service: transport
/// errors, non-2xx statuses and body-decode errors all collapse into it.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct FetchError(pub String);

/// Per-view fetch lifecycle. Each view resets to `Loading` on mount (and
/// on route-parameter change) and commits exactly one transition per
/// fetch cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(outcome: Result<T, FetchError>) -> Self {
        match outcome {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Monotonic counter guarding against stale fetches: a token is taken
/// when a request is issued, and the completion is discarded unless the
/// token is still current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_state_from_result() {
        let ok: FetchState<u32> = Ok(7).into();
        assert_eq!(ok, FetchState::Ready(7));

        let err: FetchState<u32> = Err(FetchError("service returned 500".into())).into();
        assert_eq!(err, FetchState::Failed("service returned 500".into()));
    }

    #[test]
    fn stale_token_is_rejected() {
        let mut gen = RequestGeneration::default();
        let first = gen.advance();
        assert!(gen.is_current(first));

        // a newer request supersedes the old token
        let second = gen.advance();
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));
    }
}
