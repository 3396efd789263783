//! Site chrome shared by every page.

use yew::prelude::*;

use crate::route::Route;

pub const COMPANY: &str = "Meridian Impex";

pub fn site_header(active: &Route) -> Html {
    html! {
        <header class="site-header">
            <a class="brand" href="/">{ COMPANY }</a>
            <nav class="site-nav">
                { nav_link("Home", "/", *active == Route::Home) }
                { nav_link("About", "/about", *active == Route::About) }
                { nav_link("Services", "/services", *active == Route::Services) }
                { nav_link("Products", "/products", *active == Route::Products) }
                { nav_link("News", "/blog", matches!(active, Route::Blog | Route::BlogPost(_))) }
                { nav_link("Reviews", "/reviews", *active == Route::Reviews) }
                { nav_link("Buy / Sell", "/trade", *active == Route::Trade) }
                { nav_link("Contact", "/contact", *active == Route::Contact) }
            </nav>
        </header>
    }
}

pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-col">
                <strong>{ COMPANY }</strong>
                <p>{"House 14, Road 2, Agrabad C/A"}</p>
                <p>{"Chattogram 4100"}</p>
            </div>
            <div class="footer-col">
                <a href="/careers">{"Careers"}</a>
                <a href="/legal">{"Terms & privacy"}</a>
                <a href="/admin/login">{"Staff sign-in"}</a>
            </div>
            <p class="footer-note">{ format!("© 2024 {COMPANY}. All rights reserved.") }</p>
        </footer>
    }
}

fn nav_link(label: &'static str, href: &'static str, active: bool) -> Html {
    html! {
        <a class={classes!("nav-link", active.then_some("active"))} href={href}>
            { label }
        </a>
    }
}
