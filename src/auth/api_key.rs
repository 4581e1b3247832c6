use subtle::ConstantTimeEq;

/// Shared-secret gate in front of the statistics endpoint.
///
/// The secret is handed in at construction; nothing here reads the
/// environment. With no secret configured every caller is accepted, the
/// open mode that deployments without a key have always relied on. Startup
/// logs a warning when that mode is active.
#[derive(Clone, Debug)]
pub struct ApiKeyGuard {
    secret: Option<String>,
}

impl ApiKeyGuard {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }

    pub fn open_mode(&self) -> bool {
        self.secret.is_none()
    }

    /// Check a request's credentials. The first credential actually
    /// presented wins: bearer token, then the X-API-Key header, then the
    /// query parameter. Comparison is constant-time.
    pub fn verify(&self, bearer: Option<&str>, header: Option<&str>, query: Option<&str>) -> bool {
        let Some(secret) = self.secret.as_deref() else {
            return true;
        };

        let Some(candidate) = bearer.or(header).or(query) else {
            return false;
        };

        secret.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "stats_secret_for_tests";

    fn guarded() -> ApiKeyGuard {
        ApiKeyGuard::new(Some(KEY.to_string()))
    }

    #[test]
    fn test_open_mode_accepts_anything() {
        let guard = ApiKeyGuard::new(None);
        assert!(guard.open_mode());
        assert!(guard.verify(None, None, None));
        assert!(guard.verify(Some("whatever"), None, None));
    }

    #[test]
    fn test_bearer_token_accepted() {
        assert!(guarded().verify(Some(KEY), None, None));
    }

    #[test]
    fn test_header_accepted() {
        assert!(guarded().verify(None, Some(KEY), None));
    }

    #[test]
    fn test_query_param_accepted() {
        assert!(guarded().verify(None, None, Some(KEY)));
    }

    #[test]
    fn test_wrong_key_rejected() {
        assert!(!guarded().verify(Some("nope"), None, None));
        assert!(!guarded().verify(None, Some("nope"), None));
        assert!(!guarded().verify(None, None, Some("nope")));
    }

    #[test]
    fn test_missing_credentials_rejected() {
        assert!(!guarded().verify(None, None, None));
    }

    #[test]
    fn test_first_presented_credential_wins() {
        // A wrong bearer token is not rescued by a correct header or query
        // parameter behind it.
        assert!(!guarded().verify(Some("nope"), Some(KEY), Some(KEY)));
        assert!(!guarded().verify(None, Some("nope"), Some(KEY)));
    }
}
