//! Rock Core Library
//!
//! Cross-platform core functionality for the Rock front-end, including:
//! - **path_alias**: hierarchical `@alias` path resolution
//! - **password_strength**: heuristic 0-100 scoring for the strength meter
//! - **alerts**: alert store and server message normalization
//! - **response**: `_extend` envelope helpers and CSRF propagation
//! - **csrf**: CSRF token state
//!
//! This library holds the pure logic only. Each host (browser via WASM, or
//! a native embedding) handles its own I/O, rendering and binding, and
//! calls this library for the core behavior.
//!
//! # Example (conceptual)
//! ```ignore
//! // Bootstrap registers path shortcuts once at startup
//! let mut aliases = AliasResolver::new();
//! aliases.set("@app", Some("/var/www/app"))?;
//! aliases.set("@app/views", Some("@app/templates"))?;
//! let path = aliases.get("@app/views/site")?;
//!
//! // The strength meter widget scores on every keystroke
//! let score = score_password("K9!mQ2@pX");
//! render_progress(score.value, score.class.css_class());
//!
//! // Form handlers normalize server messages before display
//! let messages = normalize_alerts(Some(&payload), true, "lang.failHTTPRequest");
//! ```

pub mod alerts;
pub mod csrf;
pub mod error;
pub mod password_strength;
pub mod path_alias;
pub mod response;
pub mod text;

pub use alerts::{alerts_from_value, normalize_alerts, Alert, AlertLevel, AlertStore};
pub use csrf::CsrfState;
pub use error::{RockError, RockResult};
pub use password_strength::{
    score_password, score_password_json, StrengthClass, StrengthScore,
};
pub use path_alias::{AliasEntry, AliasResolver};
pub use response::{status_alert_key, ResponseNormalizer};

// WASM bindings
#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;
