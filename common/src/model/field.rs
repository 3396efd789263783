//! Field schema primitives shared by the editable record types and the
//! public forms.
//!
//! Records describe their editable surface as a static list of
//! [`FieldSpec`] entries; drafts and forms carry the typed values as
//! [`FieldValue`]. Keeping the schema data-driven is what lets one admin
//! component serve products, blog posts and reviews alike.

use serde_json::Value;

/// Input widget and wire shape of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Number,
    /// Boolean flag rendered as a checkbox (e.g. review approval).
    Toggle,
    /// Single choice out of a fixed option list.
    Select(&'static [&'static str]),
    /// Masked text input; value travels like `Text`.
    Password,
    /// Single image URL, replaced by a fresh upload.
    Image,
    /// Growing list of image URLs; uploads append.
    Gallery,
    /// Single video URL.
    Video,
}

impl FieldKind {
    /// Which asset-host kind an attachment on this field uploads as, or
    /// `None` when the field takes no attachments.
    pub fn media_kind(&self) -> Option<MediaKind> {
        match self {
            FieldKind::Image | FieldKind::Gallery => Some(MediaKind::Image),
            FieldKind::Video => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// Uploads append to the current list instead of replacing it.
    pub fn appends(&self) -> bool {
        matches!(self, FieldKind::Gallery)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Typed value of one field as held in drafts and forms.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Text content, empty for non-text values.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            _ => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Number(_) | FieldValue::Flag(_) => false,
        }
    }

    /// Wire representation used when building mutation payloads.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Number(number) => serde_json::json!(number),
            FieldValue::Flag(flag) => Value::Bool(*flag),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// One entry in a record's static field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also the key in draft change sets.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}
