use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::field::{FieldSpec, FieldValue};

/// A backend collection entity managed through the admin console.
///
/// A record with an empty id only ever exists server-side at creation
/// time; everything the client caches carries the server-assigned id.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Path segment of the backing REST resource, e.g. `"products"`.
    const RESOURCE: &'static str;

    fn id(&self) -> &str;

    /// Editable fields in display order. Server-computed fields such as
    /// `id` and `created_at` are not part of the schema.
    fn fields() -> &'static [FieldSpec];

    /// Current value of one editable field, copied out by value.
    fn value(&self, field: &str) -> Option<FieldValue>;

    /// Short label identifying the record in lists and confirmations.
    fn label(&self) -> String;
}
