//! URL composition
//!
//! Pure functions: no I/O, no validation beyond what rendering needs.

use super::types::{set_param, AuthOverride, FeedSource, SourceOverrides};
use url::form_urlencoded;

/// Build a URL from an endpoint's defaults and per-request overrides
pub fn build_url(defaults: &FeedSource, overrides: SourceOverrides) -> String {
    defaults.clone().merge(overrides).url()
}

/// Prefix a non-root path with exactly one separator
///
/// The empty path and `/` are returned unchanged.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return path.to_string();
    }
    format!("/{}", path.trim_start_matches('/'))
}

impl FeedSource {
    /// Apply overrides on top of these parts
    #[must_use]
    pub fn merge(mut self, overrides: SourceOverrides) -> Self {
        if let Some(scheme) = overrides.scheme {
            self.scheme = scheme;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(path) = overrides.path {
            self.path = path;
        }
        match overrides.auth {
            AuthOverride::Inherit => {}
            AuthOverride::Disabled => self.auth = None,
            AuthOverride::Use(credentials) => self.auth = Some(credentials),
        }
        for (key, value) in overrides.params {
            set_param(&mut self.params, key, value);
        }
        if let Some(decoding) = overrides.decoding {
            self.decoding = decoding;
        }
        self
    }

    /// Render the full URL, credentials included
    pub fn url(&self) -> String {
        self.render(true)
    }

    /// Render the URL without credentials, for logging
    pub fn redacted_url(&self) -> String {
        self.render(false)
    }

    fn render(&self, with_auth: bool) -> String {
        let mut out = format!("{}://", self.scheme);

        if with_auth {
            if let Some(auth) = self.auth.as_ref().filter(|a| !a.username.is_empty()) {
                out.push_str(&auth.userinfo());
                out.push('@');
            }
        }

        out.push_str(&self.host);
        out.push_str(&normalize_path(&self.path));

        if !self.params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.params.iter())
                .finish();
            out.push('?');
            out.push_str(&query);
        }

        out
    }
}
