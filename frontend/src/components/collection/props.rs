use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CollectionProps {
    /// Heading shown above the manager.
    pub title: AttrValue,
    /// Moderation screens hide the create button; entries then only
    /// arrive through the public site.
    #[prop_or(true)]
    pub can_create: bool,
}
