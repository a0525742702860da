//! Endpoint types
//!
//! Request parts and the overrides applied on top of an endpoint's defaults.

use serde::{Deserialize, Serialize};

/// Basic-auth credential pair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Render as URL userinfo (`user:pass`), both parts percent-encoded
    pub fn userinfo(&self) -> String {
        format!(
            "{}:{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Decoding layer applied to a fetched body before it is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDecoding {
    /// Body is plain XML
    #[default]
    Identity,
    /// Body may be gzip-compressed (decoded when the gzip magic is present)
    Gzip,
}

/// How an override treats the default credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthOverride {
    /// Keep whatever the defaults carry
    #[default]
    Inherit,
    /// Render no credentials in the URL
    Disabled,
    /// Replace the credentials
    Use(Credentials),
}

/// The parts of one remote request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    /// URL scheme (`http`, `https`)
    pub scheme: String,
    /// Host, optionally with port
    pub host: String,
    /// Request path (normalized when rendered)
    pub path: String,
    /// Credentials embedded in the authority
    pub auth: Option<Credentials>,
    /// Query parameters in insertion order
    pub params: Vec<(String, String)>,
    /// Decoding applied to the body
    pub decoding: ContentDecoding,
}

impl FeedSource {
    /// Create a source for the root path of a host
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: "/".to_string(),
            auth: None,
            params: Vec::new(),
            decoding: ContentDecoding::Identity,
        }
    }

    /// Set the path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the embedded credentials
    #[must_use]
    pub fn with_auth(mut self, auth: Option<Credentials>) -> Self {
        self.auth = auth;
        self
    }

    /// Set or replace a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_param(&mut self.params, key.into(), value.into());
        self
    }

    /// Set the body decoding
    #[must_use]
    pub fn with_decoding(mut self, decoding: ContentDecoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Look up a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Field-by-field replacements for a [`FeedSource`]
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: Option<String>,
    pub auth: AuthOverride,
    /// Merged by key into the default parameters
    pub params: Vec<(String, String)>,
    pub decoding: Option<ContentDecoding>,
}

impl SourceOverrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Drop the default credentials from the URL
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.auth = AuthOverride::Disabled;
        self
    }

    #[must_use]
    pub fn auth(mut self, credentials: Credentials) -> Self {
        self.auth = AuthOverride::Use(credentials);
        self
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_param(&mut self.params, key.into(), value.into());
        self
    }

    #[must_use]
    pub fn decoding(mut self, decoding: ContentDecoding) -> Self {
        self.decoding = Some(decoding);
        self
    }
}

pub(crate) fn set_param(params: &mut Vec<(String, String)>, key: String, value: String) {
    match params.iter_mut().find(|(k, _)| *k == key) {
        Some(existing) => existing.1 = value,
        None => params.push((key, value)),
    }
}
