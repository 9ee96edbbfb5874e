//! Authentication boundary.
//!
//! Identity is owned by an external provider. Pages only ever ask two
//! questions of it: is the visitor signed in, and where does signing in
//! start.

/// Entry point of the provider's sign-in flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInAction {
    pub url: String,
}

/// Capability interface over an external identity provider
pub trait IdentityProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn sign_in(&self) -> SignInAction;
}

/// Provider with a fixed answer, for builds and tests
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    signed_in: bool,
    sign_in_url: String,
}

impl StaticIdentity {
    pub fn signed_in() -> Self {
        Self {
            signed_in: true,
            sign_in_url: "/sign-in".to_string(),
        }
    }

    pub fn signed_out(sign_in_url: impl Into<String>) -> Self {
        Self {
            signed_in: false,
            sign_in_url: sign_in_url.into(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn is_authenticated(&self) -> bool {
        self.signed_in
    }

    fn sign_in(&self) -> SignInAction {
        SignInAction {
            url: self.sign_in_url.clone(),
        }
    }
}

/// Treats the presence of the provider's session cookie as signed in.
///
/// The cookie value is opaque here; verifying it is the provider's job.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    signed_in: bool,
    sign_in_url: String,
}

impl SessionCookie {
    /// Inspect a raw `Cookie` request header for `cookie_name`
    pub fn from_header(cookie_header: Option<&str>, cookie_name: &str, sign_in_url: &str) -> Self {
        let signed_in = cookie_header
            .map(|header| has_cookie(header, cookie_name))
            .unwrap_or(false);

        Self {
            signed_in,
            sign_in_url: sign_in_url.to_string(),
        }
    }
}

impl IdentityProvider for SessionCookie {
    fn is_authenticated(&self) -> bool {
        self.signed_in
    }

    fn sign_in(&self) -> SignInAction {
        SignInAction {
            url: self.sign_in_url.clone(),
        }
    }
}

fn has_cookie(header: &str, name: &str) -> bool {
    header.split(';').any(|pair| match pair.trim().split_once('=') {
        Some((key, value)) => key == name && !value.is_empty(),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_identity() {
        assert!(StaticIdentity::signed_in().is_authenticated());

        let visitor = StaticIdentity::signed_out("https://accounts.example.com/sign-in");
        assert!(!visitor.is_authenticated());
        assert_eq!(visitor.sign_in().url, "https://accounts.example.com/sign-in");
    }

    #[test]
    fn test_session_cookie_present() {
        let identity = SessionCookie::from_header(
            Some("theme=dark; __session=eyJhbGciOi; lang=en"),
            "__session",
            "/login",
        );
        assert!(identity.is_authenticated());
        assert_eq!(identity.sign_in().url, "/login");
    }

    #[test]
    fn test_session_cookie_absent_or_empty() {
        assert!(!SessionCookie::from_header(None, "__session", "/login").is_authenticated());
        assert!(!SessionCookie::from_header(Some("theme=dark"), "__session", "/login").is_authenticated());
        assert!(!SessionCookie::from_header(Some("__session="), "__session", "/login").is_authenticated());
    }

    #[test]
    fn test_session_cookie_name_is_exact() {
        let identity = SessionCookie::from_header(Some("__session_old=abc"), "__session", "/login");
        assert!(!identity.is_authenticated());
    }
}
