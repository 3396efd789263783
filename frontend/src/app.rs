use yew::prelude::*;

use crate::pages::admin::{AdminBlogsPage, AdminLoginPage, AdminProductsPage, AdminReviewsPage};
use crate::pages::{about::AboutPage, blog::BlogPage, blog_post::BlogPostPage,
    careers::CareersPage, contact::ContactPage, home::HomePage, layout, legal::LegalPage,
    products::ProductsPage, reviews::ReviewsPage, services::ServicesPage, trade::TradePage};
use crate::route::Route;
use crate::session::Session;

/// Root component: resolves the route and session once at mount and
/// injects the session so privileged pages consume it as context.
pub struct App {
    route: Route,
    session: Session,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::current(),
            session: Session::load(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Session> context={self.session.clone()}>
                { layout::site_header(&self.route) }
                <main class="site-main">{ self.page() }</main>
                { layout::site_footer() }
            </ContextProvider<Session>>
        }
    }
}

impl App {
    fn page(&self) -> Html {
        match &self.route {
            Route::Home => html! { <HomePage /> },
            Route::About => html! { <AboutPage /> },
            Route::Services => html! { <ServicesPage /> },
            Route::Products => html! { <ProductsPage /> },
            Route::Blog => html! { <BlogPage /> },
            Route::BlogPost(id) => html! { <BlogPostPage id={id.clone()} /> },
            Route::Reviews => html! { <ReviewsPage /> },
            Route::Trade => html! { <TradePage /> },
            Route::Contact => html! { <ContactPage /> },
            Route::Careers => html! { <CareersPage /> },
            Route::Legal => html! { <LegalPage /> },
            Route::AdminLogin => html! { <AdminLoginPage /> },
            Route::AdminProducts => html! { <AdminProductsPage /> },
            Route::AdminBlogs => html! { <AdminBlogsPage /> },
            Route::AdminReviews => html! { <AdminReviewsPage /> },
            Route::NotFound => html! {
                <section class="page">
                    <h1>{"Page not found"}</h1>
                    <a class="link" href="/">{"Back to home"}</a>
                </section>
            },
        }
    }
}
