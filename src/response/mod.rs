//! HTTP response envelope helpers.
//!
//! Rock responses may carry out-of-band data in a reserved envelope
//! attribute (`_extend` by default): CSRF rotation, pagination, debug
//! information. Hosts strip the envelope before handing payloads to views
//! and feed the CSRF half into [`CsrfState`]. Interceptor wiring stays
//! host-side; this module only owns the data transforms.

use serde_json::Value;

use crate::alerts;
use crate::csrf::CsrfState;

/// Envelope attribute looked up when none is configured.
pub const DEFAULT_EXTEND_ATTRIBUTE: &str = "_extend";

/// Message key used when a failed response carries no message at all.
pub const DEFAULT_FAIL_MSG: &str = "lang.failHTTPRequest";

/// Normalizes response payloads for display.
#[derive(Debug, Clone)]
pub struct ResponseNormalizer {
    /// Name of the reserved envelope attribute.
    pub extend_attribute: String,
    /// Fallback message (or host translation key) for empty messages.
    pub default_msg: String,
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self {
            extend_attribute: DEFAULT_EXTEND_ATTRIBUTE.to_string(),
            default_msg: DEFAULT_FAIL_MSG.to_string(),
        }
    }
}

impl ResponseNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole envelope, when present on an object payload.
    pub fn extend<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        data.as_object()?.get(&self.extend_attribute)
    }

    /// One attribute of the envelope.
    pub fn extend_field<'a>(&self, data: &'a Value, attribute: &str) -> Option<&'a Value> {
        self.extend(data)?.as_object()?.get(attribute)
    }

    /// Removes the envelope from an object payload in place.
    pub fn strip_extend(&self, data: &mut Value) {
        if let Some(map) = data.as_object_mut() {
            map.remove(&self.extend_attribute);
        }
    }

    /// Absorbs an envelope CSRF rotation into `csrf`.
    ///
    /// Returns whether the payload carried one; callers fall back to the
    /// response header when it did not.
    pub fn propagate_csrf(&self, data: &Value, csrf: &mut CsrfState) -> bool {
        let Some(rotation) = self.extend_field(data, "csrf") else {
            return false;
        };
        if let Some(token) = rotation.get("token").and_then(Value::as_str) {
            csrf.set_token(token);
        }
        if let Some(param) = rotation.get("param").and_then(Value::as_str) {
            csrf.set_param(param);
        }
        true
    }

    /// Display-ready messages from a raw payload, envelope stripped.
    pub fn normalize_alerts(&self, messages: Option<&Value>, unique: bool) -> Vec<String> {
        match messages {
            Some(value) if value.is_object() => {
                let mut owned = value.clone();
                self.strip_extend(&mut owned);
                alerts::normalize_alerts(Some(&owned), unique, &self.default_msg)
            }
            other => alerts::normalize_alerts(other, unique, &self.default_msg),
        }
    }
}

/// Alert translation key for a failed response status.
///
/// Validation statuses (400, 422) carry field errors handled by the form
/// layer and produce no alert of their own.
pub fn status_alert_key(status: u16) -> Option<&'static str> {
    match status {
        403 => Some("lang.failAccess"),
        404 => Some("lang.notPage"),
        500 => Some("lang.failServer"),
        _ => None,
    }
}
