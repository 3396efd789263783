use serde::{Deserialize, Serialize};

use crate::model::field::{FieldKind, FieldSpec, FieldValue};
use crate::record::Record;

/// Trade categories offered on the public catalogue.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Agriculture",
    "Textiles",
    "Machinery",
    "Electronics",
    "Food & Beverage",
    "Raw Materials",
];

/// A catalogue entry shown on the public products page and managed from
/// the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub description: String,
    /// Cover image URL on the asset host.
    #[serde(default)]
    pub image: String,
    /// Additional gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Assigned by the backend on create.
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
        name: "category",
        label: "Category",
        kind: FieldKind::Select(PRODUCT_CATEGORIES),
        required: true,
    },
    FieldSpec {
        name: "origin",
        label: "Country of origin",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "description",
        label: "Description",
        kind: FieldKind::Multiline,
        required: true,
    },
    FieldSpec {
        name: "image",
        label: "Cover image",
        kind: FieldKind::Image,
        required: false,
    },
    FieldSpec {
        name: "images",
        label: "Gallery",
        kind: FieldKind::Gallery,
        required: false,
    },
    FieldSpec {
        name: "video",
        label: "Video",
        kind: FieldKind::Video,
        required: false,
    },
];

impl Record for Product {
    const RESOURCE: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "category" => Some(FieldValue::Text(self.category.clone())),
            "origin" => Some(FieldValue::Text(self.origin.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "image" => Some(FieldValue::Text(self.image.clone())),
            "images" => Some(FieldValue::List(self.images.clone())),
            "video" => Some(FieldValue::Text(self.video.clone().unwrap_or_default())),
            _ => None,
        }
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}
