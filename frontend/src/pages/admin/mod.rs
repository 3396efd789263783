//! Admin console pages: thin shells around the generic collection
//! manager, one per resource. The session gate lives here; the
//! components themselves never look at storage.

use yew::prelude::*;

use crate::session::{redirect_to, Session};

mod blogs;
mod login;
mod products;
mod reviews;

pub use blogs::AdminBlogsPage;
pub use login::AdminLoginPage;
pub use products::AdminProductsPage;
pub use reviews::AdminReviewsPage;

/// Privileged screens render only with a session present; everyone
/// else is sent to the sign-in page.
fn guard(session: Option<Session>) -> bool {
    match session {
        Some(session) if session.admin => true,
        _ => {
            redirect_to("/admin/login");
            false
        }
    }
}

fn session_of<C: Component>(ctx: &Context<C>) -> Option<Session> {
    ctx.link()
        .context::<Session>(Callback::noop())
        .map(|(session, _)| session)
}

fn admin_nav(active: &'static str) -> Html {
    let item = |label: &'static str, href: &'static str, slug: &'static str| {
        html! {
            <a class={classes!("nav-link", (active == slug).then_some("active"))} href={href}>
                { label }
            </a>
        }
    };
    html! {
        <nav class="admin-nav">
            { item("Products", "/admin/products", "products") }
            { item("News", "/admin/blogs", "blogs") }
            { item("Reviews", "/admin/reviews", "reviews") }
        </nav>
    }
}
