//! Authentication overlay for gated page content.

use crate::html::html_escape;
use recipe_viewer_core::{AuthConfig, IdentityProvider, SiteConfig};

/// How gated content is shown
#[derive(Clone, Copy)]
pub enum AuthOverlay<'a> {
    /// No identity provider configured; everything is visible
    Open,
    /// Static output: both states are emitted and the browser picks one
    /// from the provider's session cookie
    Deferred(&'a AuthConfig),
    /// The visitor's state is already known (preview server, tests)
    Resolved(&'a dyn IdentityProvider),
}

const DEFERRED_SCRIPT: &str = r#"<script>
        (function () {
            var prefix = '__COOKIE__=';
            var signedIn = document.cookie.split('; ').some(function (c) {
                return c.indexOf(prefix) === 0 && c.length > prefix.length;
            });
            document.querySelectorAll('[data-auth]').forEach(function (el) {
                el.hidden = (el.getAttribute('data-auth') === 'signed-in') !== signedIn;
            });
        })();
    </script>"#;

impl<'a> AuthOverlay<'a> {
    /// Overlay for a static build of `site`
    pub fn for_site(site: &'a SiteConfig) -> Self {
        match &site.auth {
            Some(auth) => AuthOverlay::Deferred(auth),
            None => AuthOverlay::Open,
        }
    }

    /// Show `content` only to signed-in visitors
    pub fn gate(&self, content: &str) -> String {
        match self {
            AuthOverlay::Open => content.to_string(),
            AuthOverlay::Resolved(identity) => {
                if identity.is_authenticated() {
                    content.to_string()
                } else {
                    sign_in_prompt(&identity.sign_in().url)
                }
            }
            AuthOverlay::Deferred(auth) => format!(
                r#"<div data-auth="signed-in" hidden>{}</div>
        <div data-auth="signed-out">{}</div>"#,
                content,
                sign_in_prompt(&auth.sign_in_url)
            ),
        }
    }

    /// Script the page needs for this overlay, if any
    pub fn script(&self) -> String {
        match self {
            AuthOverlay::Deferred(auth) => DEFERRED_SCRIPT.replace("__COOKIE__", &auth.session_cookie),
            _ => String::new(),
        }
    }
}

fn sign_in_prompt(sign_in_url: &str) -> String {
    format!(
        r#"<div class="sign-in-prompt">
            <p>Sign in to view this recipe.</p>
            <a class="button" href="{}">Sign in</a>
        </div>"#,
        html_escape(sign_in_url)
    )
}
