//! Alert message store and normalization.
//!
//! The data half of the front-end notification pipeline. Hosts render the
//! list however they like; this module owns ordering, levels and the
//! cleanup of raw server messages into display-ready text.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::text;

/// Display level of an alert, named after the contextual classes the host
/// widget binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// A single alert message.
///
/// `msg` may be display text or a host translation key; the host resolves
/// keys before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub msg: String,
    #[serde(default)]
    pub level: AlertLevel,
}

impl Alert {
    pub fn new(msg: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            msg: msg.into(),
            level,
        }
    }
}

/// Ordered list of alerts accumulated for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of alerts, preserving order.
    pub fn merge(&mut self, messages: Vec<Alert>) {
        self.alerts.extend(messages);
    }

    pub fn push(&mut self, msg: impl Into<String>, level: AlertLevel) {
        self.alerts.push(Alert::new(msg, level));
    }

    /// Removes the alert at `index`; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.alerts.len() {
            self.alerts.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Builds alerts from a raw JSON batch: an array of plain strings (which
/// become `Info` alerts) or of `{msg, level}` objects.
pub fn alerts_from_value(data: &Value) -> Vec<Alert> {
    match data {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(msg) => Some(Alert::new(msg.clone(), AlertLevel::Info)),
                other => serde_json::from_value(other.clone()).ok(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Flattens raw server messages into a display-ready list.
///
/// `messages` may be a single string, an array, or an object keyed by field
/// name, nested arbitrarily; scalar leaves are collected depth-first. Every
/// message is passed through [`prepare_message`]. With `unique`, later
/// duplicates are dropped, keeping first-seen order. Missing, null or empty
/// input falls back to `default_msg`.
pub fn normalize_alerts(messages: Option<&Value>, unique: bool, default_msg: &str) -> Vec<String> {
    let use_default = match messages {
        None | Some(Value::Null) => true,
        Some(Value::String(msg)) => msg.is_empty(),
        _ => false,
    };

    let mut flat = Vec::new();
    if use_default {
        flat.push(prepare_message(default_msg));
    } else if let Some(value) = messages {
        flatten_into(value, &mut flat);
    }

    if unique {
        let mut seen = HashSet::new();
        flat.retain(|msg| seen.insert(msg.clone()));
    }
    flat
}

/// Uppercases the first letter and ensures a trailing period.
pub fn prepare_message(message: &str) -> String {
    let message = text::upper_first(message);
    if message.ends_with('.') {
        message
    } else {
        format!("{}.", message)
    }
}

/// Depth-first collection of scalar leaves, normalized on the way out.
fn flatten_into(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(msg) => out.push(prepare_message(msg)),
        Value::Number(n) => out.push(prepare_message(&n.to_string())),
        Value::Bool(b) => out.push(prepare_message(&b.to_string())),
        Value::Array(items) => items.iter().for_each(|item| flatten_into(item, out)),
        Value::Object(map) => map.values().for_each(|item| flatten_into(item, out)),
        Value::Null => {}
    }
}
