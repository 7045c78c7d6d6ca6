//! Process-wide bearer-token store.
//!
//! The dashboard API authenticates with a single bearer token per process.
//! The token lives in one place so every request picks up the same
//! credential and a 401 can revoke it for all callers at once.
//!
//! The store is in-memory only. Nothing is written to disk or to an OS
//! keyring; the process starts unauthenticated unless the embedding
//! application seeds a token.

use std::sync::RwLock;

static TOKEN: RwLock<Option<String>> = RwLock::new(None);

/// Store the bearer token used for subsequent requests.
pub fn set_token(token: impl Into<String>) {
    let mut guard = TOKEN.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(token.into());
}

/// Remove the stored token. Subsequent requests go out unauthenticated.
///
/// Clearing an empty store is fine.
pub fn clear_token() {
    let mut guard = TOKEN.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

/// The currently stored token, if any.
pub fn current_token() -> Option<String> {
    let guard = TOKEN.read().unwrap_or_else(|e| e.into_inner());
    guard.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test for the whole lifecycle: the store is process-global, so
    // separate tests mutating it would race under the parallel test runner.
    #[test]
    fn test_token_lifecycle() {
        assert_eq!(current_token(), None);

        set_token("token-a");
        assert_eq!(current_token(), Some("token-a".to_string()));

        // Overwrite replaces, not appends.
        set_token("token-b".to_string());
        assert_eq!(current_token(), Some("token-b".to_string()));

        clear_token();
        assert_eq!(current_token(), None);

        // Clearing again is harmless.
        clear_token();
        assert_eq!(current_token(), None);
    }
}
