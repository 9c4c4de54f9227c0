//! Minimal owned mirror of the page DOM.
//!
//! The host content layer serializes the forms it sees into this model,
//! runs detection/fill against it, and applies recorded values and events
//! back to the real elements.

use serde::{Deserialize, Serialize};

/// Input element type, as far as the heuristics care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    /// Any other input type — never a fill target.
    #[serde(other)]
    Other,
}

/// DOM-level notification events the fill layer synthesizes so reactive
/// frameworks observe programmatic writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntheticEvent {
    Input,
    Change,
    KeyDown,
    KeyUp,
}

/// One `<input>` element. Attribute strings default to empty, matching
/// elements that lack them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    #[serde(rename = "type")]
    pub kind: InputKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub value: String,
    /// Events recorded by a fill, in dispatch order. Not part of the host
    /// snapshot — output only.
    #[serde(skip)]
    pub events: Vec<SyntheticEvent>,
}

impl InputField {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }
}

/// One `<form>` element: its inputs in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    pub inputs: Vec<InputField>,
}

impl FormElement {
    pub fn new(inputs: Vec<InputField>) -> Self {
        Self { inputs }
    }
}

/// A page snapshot: all forms in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub forms: Vec<FormElement>,
}

impl Document {
    pub fn new(forms: Vec<FormElement>) -> Self {
        Self { forms }
    }
}
