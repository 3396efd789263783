use yew::prelude::*;

use common::form::FormConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct FormProps {
    /// Field schema and behavior flags, declared as a const next to the
    /// page that owns the form.
    pub config: &'static FormConfig,
    /// Backend path the payload is posted to, relative to the API base.
    pub endpoint: &'static str,
    /// Invoked with the response body after a successful submission
    /// (the sign-in page stores the returned token here).
    #[prop_or_default]
    pub on_success: Callback<serde_json::Value>,
}
