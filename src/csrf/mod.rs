//! CSRF token state shared between responses and outgoing requests.
//!
//! The host feeds tokens in from response envelopes or headers; URL and
//! form helpers read the `(param, token)` pair back out when building
//! requests.

use serde::{Deserialize, Serialize};

/// Current CSRF token and the request parameter it travels under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrfState {
    token: Option<String>,
    param: Option<String>,
}

impl CsrfState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a rotated token; empty strings are ignored.
    pub fn set_token(&mut self, token: &str) {
        if !token.is_empty() {
            self.token = Some(token.to_string());
        }
    }

    /// Stores the parameter name the token travels under; empty strings
    /// are ignored.
    pub fn set_param(&mut self, param: &str) {
        if !param.is_empty() {
            self.param = Some(param.to_string());
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Whether a token has been seen yet.
    pub fn has(&self) -> bool {
        self.token.is_some()
    }

    /// The `(param, token)` query pair, available once both halves are
    /// known.
    pub fn pair(&self) -> Option<(String, String)> {
        match (&self.param, &self.token) {
            (Some(param), Some(token)) => Some((param.clone(), token.clone())),
            _ => None,
        }
    }
}
