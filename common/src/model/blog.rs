use serde::{Deserialize, Serialize};

use crate::model::field::{FieldKind, FieldSpec, FieldValue};
use crate::record::Record;

/// A company news post. `content` is markdown, rendered on the public
/// blog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "author",
        label: "Author",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "excerpt",
        label: "Excerpt",
        kind: FieldKind::Multiline,
        required: false,
    },
    FieldSpec {
        name: "content",
        label: "Content (markdown)",
        kind: FieldKind::Multiline,
        required: true,
    },
    FieldSpec {
        name: "cover",
        label: "Cover image",
        kind: FieldKind::Image,
        required: false,
    },
];

impl Record for BlogPost {
    const RESOURCE: &'static str = "blogs";

    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "author" => Some(FieldValue::Text(self.author.clone())),
            "excerpt" => Some(FieldValue::Text(self.excerpt.clone())),
            "content" => Some(FieldValue::Text(self.content.clone())),
            "cover" => Some(FieldValue::Text(self.cover.clone())),
            _ => None,
        }
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}
