//! Wireframe Data Model - Explicit Types Over Loose Dictionaries
//!
//! Every field the renderers read has a documented default. Decoding is the only
//! fallible step: a value that is not a well-formed wireframe fails once, here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::pipeline::SynthesisError;

/// Open-ended component tag. Unknown tags are valid and render generically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct ComponentType(String);

impl ComponentType {
    pub const GENERIC: &'static str = "generic";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, tag: &str) -> bool {
        self.0 == tag
    }

    /// Upper-cased tag shown as the component's label
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl Default for ComponentType {
    fn default() -> Self {
        Self(Self::GENERIC.to_string())
    }
}

impl From<Option<String>> for ComponentType {
    fn from(tag: Option<String>) -> Self {
        tag.map(Self).unwrap_or_default()
    }
}

impl From<ComponentType> for String {
    fn from(kind: ComponentType) -> Self {
        kind.0
    }
}

impl From<&str> for ComponentType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared placement. Absent fields are resolved by [`crate::geometry::resolve`].
///
/// Numbers keep their JSON form and unrecognized keys are retained, so the
/// position passes through to the specification exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Position {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: number(x),
            y: number(y),
            width: number(width),
            height: number(height),
            extra: Map::new(),
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.x.as_ref().and_then(Number::as_f64)
    }

    pub fn y(&self) -> Option<f64> {
        self.y.as_ref().and_then(Number::as_f64)
    }

    pub fn width(&self) -> Option<f64> {
        self.width.as_ref().and_then(Number::as_f64)
    }

    pub fn height(&self) -> Option<f64> {
        self.height.as_ref().and_then(Number::as_f64)
    }
}

/// Integral values are stored as JSON integers
fn number(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ComponentType,
    #[serde(default)]
    pub position: Position,
    /// Style overrides keyed by property name (backgroundColor, borderRadius, ...)
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default = "default_states")]
    pub states: Vec<String>,
    #[serde(default)]
    pub interactions: Vec<Value>,
}

fn default_states() -> Vec<String> {
    vec!["default".to_string()]
}

impl Component {
    pub fn new(id: impl Into<String>, kind: impl Into<ComponentType>, position: Position) -> Self {
        Self {
            id: Some(id.into()),
            kind: kind.into(),
            position,
            properties: BTreeMap::new(),
            content: None,
            states: default_states(),
            interactions: vec![],
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "componentId", default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Annotation {
    pub fn new(component_id: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            component_id: Some(component_id.into()),
            note: Some(note.into()),
            kind: None,
        }
    }

    /// The referenced component id, if one is present and non-empty
    pub fn target(&self) -> Option<&str> {
        self.component_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("general")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutHint {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<String>>,
}

/// The abstract wireframe: positioned components plus design annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wireframe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub layout: LayoutHint,
    /// Opaque steps, passed through to the specification verbatim
    #[serde(default)]
    pub user_flow: Vec<Value>,
}

impl Wireframe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Decode a raw JSON value. This is the single malformed-input gate.
    pub fn from_value(value: Value) -> Result<Self, SynthesisError> {
        if !value.is_object() {
            return Err(SynthesisError::MalformedInput(format!(
                "wireframe must be a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| SynthesisError::MalformedInput(e.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SynthesisError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| SynthesisError::MalformedInput(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode a blob handed over by storage. A blob that does not parse degrades
    /// to an empty wireframe instead of failing.
    pub fn from_stored_blob(blob: &str) -> Self {
        match Self::from_json_str(blob) {
            Ok(wireframe) => wireframe,
            Err(e) => {
                log::warn!("stored wireframe blob did not parse, using empty wireframe: {}", e);
                Self::default()
            }
        }
    }

    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
