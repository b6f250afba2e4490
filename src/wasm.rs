//! WASM bindings for the browser front-end.

use wasm_bindgen::prelude::*;

use crate::alerts;
use crate::csrf::CsrfState;
use crate::password_strength::{score_password, StrengthScore};
use crate::path_alias;
use crate::response::{status_alert_key, ResponseNormalizer};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Path Alias WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Path alias registry, exported as a JS class so the host bootstrap can
/// own one instance for the page lifetime.
#[wasm_bindgen(js_name = AliasResolver)]
#[derive(Default)]
pub struct JsAliasResolver {
    inner: path_alias::AliasResolver,
}

#[wasm_bindgen(js_class = AliasResolver)]
impl JsAliasResolver {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` -> `path`; a `null` path deletes the entry.
    pub fn set(&mut self, alias: &str, path: Option<String>) -> Result<(), JsValue> {
        self.inner
            .set(alias, path.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Resolves an alias. Unknown aliases log a debug line and return
    /// `undefined` so callers can fall back to the literal string.
    pub fn get(&self, alias: &str) -> Option<String> {
        match self.inner.get(alias) {
            Ok(path) => Some(path),
            Err(e) => {
                log(&e.to_string());
                None
            }
        }
    }

    /// Drops a whole root entry, nested aliases included.
    pub fn remove(&mut self, alias: &str) {
        self.inner.remove(alias);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Password Strength WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Score a password for the strength meter widget.
///
/// Returns a `{value, class}` object.
#[wasm_bindgen(js_name = scorePassword)]
pub fn score_password_js(password: &str) -> Result<JsValue, JsValue> {
    let score: StrengthScore = score_password(password);
    serde_wasm_bindgen::to_value(&score)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Score a password and return the result as a JSON string (alternative API).
#[wasm_bindgen(js_name = scorePasswordJson)]
pub fn score_password_json_js(password: &str) -> Result<String, JsValue> {
    crate::password_strength::score_password_json(password)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Alert WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// Alert list shared by the page's notification area.
#[wasm_bindgen(js_name = AlertStore)]
#[derive(Default)]
pub struct JsAlertStore {
    inner: alerts::AlertStore,
}

#[wasm_bindgen(js_class = AlertStore)]
impl JsAlertStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch: an array of plain strings or `{msg, level}` objects.
    pub fn merge(&mut self, messages: JsValue) -> Result<(), JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(messages)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;
        self.inner.merge(alerts::alerts_from_value(&value));
        Ok(())
    }

    /// Removes the alert at `index`; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        self.inner.remove(index);
    }

    #[wasm_bindgen(js_name = removeAll)]
    pub fn remove_all(&mut self) {
        self.inner.clear();
    }

    /// Current list as an array of `{msg, level}` objects.
    #[wasm_bindgen(js_name = getAll)]
    pub fn get_all(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.all())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
    }

    pub fn exists(&self) -> bool {
        !self.inner.is_empty()
    }
}

/// Normalize raw server messages into a display-ready array of strings.
#[wasm_bindgen(js_name = normalizeAlerts)]
pub fn normalize_alerts_js(
    messages: JsValue,
    unique: Option<bool>,
    default_msg: Option<String>,
) -> Result<Vec<String>, JsValue> {
    let value: Option<serde_json::Value> = if messages.is_undefined() || messages.is_null() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value(messages)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?,
        )
    };
    let normalizer = match default_msg {
        Some(default_msg) => ResponseNormalizer {
            default_msg,
            ..ResponseNormalizer::default()
        },
        None => ResponseNormalizer::default(),
    };
    Ok(normalizer.normalize_alerts(value.as_ref(), unique.unwrap_or(true)))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Response Envelope WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// One attribute of the response envelope, or the whole envelope when
/// `attribute` is omitted.
#[wasm_bindgen(js_name = getExtend)]
pub fn get_extend_js(data: JsValue, attribute: Option<String>) -> Result<JsValue, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(data)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;
    let normalizer = ResponseNormalizer::default();
    let found = match attribute {
        Some(attribute) => normalizer.extend_field(&value, &attribute),
        None => normalizer.extend(&value),
    };
    match found {
        Some(found) => serde_wasm_bindgen::to_value(found)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e))),
        None => Ok(JsValue::NULL),
    }
}

/// Envelope-stripped copy of a payload.
#[wasm_bindgen(js_name = removeExtend)]
pub fn remove_extend_js(data: JsValue) -> Result<JsValue, JsValue> {
    let mut value: serde_json::Value = serde_wasm_bindgen::from_value(data)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;
    ResponseNormalizer::default().strip_extend(&mut value);
    serde_wasm_bindgen::to_value(&value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
}

/// Alert translation key for an HTTP failure status, or `undefined`.
#[wasm_bindgen(js_name = statusAlertKey)]
pub fn status_alert_key_js(status: u16) -> Option<String> {
    status_alert_key(status).map(String::from)
}

// ═══════════════════════════════════════════════════════════════════════════════
// CSRF WASM Bindings
// ═══════════════════════════════════════════════════════════════════════════════

/// CSRF state, exported as a JS class the host interceptor feeds.
#[wasm_bindgen(js_name = CsrfState)]
#[derive(Default)]
pub struct JsCsrfState {
    inner: CsrfState,
}

#[wasm_bindgen(js_class = CsrfState)]
impl JsCsrfState {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = addToken)]
    pub fn add_token(&mut self, token: &str) {
        self.inner.set_token(token);
    }

    #[wasm_bindgen(js_name = addParam)]
    pub fn add_param(&mut self, param: &str) {
        self.inner.set_param(param);
    }

    #[wasm_bindgen(js_name = getToken)]
    pub fn token(&self) -> Option<String> {
        self.inner.token().map(String::from)
    }

    #[wasm_bindgen(js_name = getParam)]
    pub fn param(&self) -> Option<String> {
        self.inner.param().map(String::from)
    }

    pub fn has(&self) -> bool {
        self.inner.has()
    }

    /// `{param: token}` search object for URL helpers, or `null` until both
    /// halves are known.
    pub fn get(&self) -> Result<JsValue, JsValue> {
        match self.inner.pair() {
            Some((param, token)) => {
                let mut map = serde_json::Map::new();
                map.insert(param, serde_json::Value::String(token));
                serde_wasm_bindgen::to_value(&map)
                    .map_err(|e| JsValue::from_str(&format!("Failed to serialize output: {}", e)))
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Absorbs a CSRF rotation from a response envelope; returns whether
    /// the payload carried one.
    #[wasm_bindgen(js_name = absorbResponse)]
    pub fn absorb_response(&mut self, data: JsValue) -> Result<bool, JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(data)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse input: {}", e)))?;
        Ok(ResponseNormalizer::default().propagate_csrf(&value, &mut self.inner))
    }
}
