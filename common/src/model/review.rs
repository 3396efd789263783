use serde::{Deserialize, Serialize};

use crate::model::field::{FieldKind, FieldSpec, FieldValue};
use crate::record::Record;

/// A customer review. Submitted from the public reviews page, held back
/// until `approved` is set from the moderation screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "company",
        label: "Company",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "rating",
        label: "Rating",
        kind: FieldKind::Number,
        required: true,
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::Multiline,
        required: true,
    },
    FieldSpec {
        name: "approved",
        label: "Approved",
        kind: FieldKind::Toggle,
        required: false,
    },
];

impl Record for Review {
    const RESOURCE: &'static str = "reviews";

    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "company" => Some(FieldValue::Text(self.company.clone())),
            "rating" => Some(FieldValue::Number(self.rating)),
            "message" => Some(FieldValue::Text(self.message.clone())),
            "approved" => Some(FieldValue::Flag(self.approved)),
            _ => None,
        }
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
