//! Path table of the site.
//!
//! The hosting layer serves the bundle at every path and anchors
//! navigate with full page loads, so the route is resolved once from
//! the location when the app mounts.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Products,
    Blog,
    BlogPost(String),
    Reviews,
    Trade,
    Contact,
    Careers,
    Legal,
    AdminLogin,
    AdminProducts,
    AdminBlogs,
    AdminReviews,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let mut parts = path.split('/').filter(|part| !part.is_empty());
        match (parts.next(), parts.next()) {
            (None, _) => Route::Home,
            (Some("about"), None) => Route::About,
            (Some("services"), None) => Route::Services,
            (Some("products"), None) => Route::Products,
            (Some("blog"), None) => Route::Blog,
            (Some("blog"), Some(id)) => Route::BlogPost(id.to_string()),
            (Some("reviews"), None) => Route::Reviews,
            (Some("trade"), None) => Route::Trade,
            (Some("contact"), None) => Route::Contact,
            (Some("careers"), None) => Route::Careers,
            (Some("legal"), None) => Route::Legal,
            (Some("admin"), None) => Route::AdminProducts,
            (Some("admin"), Some("login")) => Route::AdminLogin,
            (Some("admin"), Some("products")) => Route::AdminProducts,
            (Some("admin"), Some("blogs")) => Route::AdminBlogs,
            (Some("admin"), Some("reviews")) => Route::AdminReviews,
            _ => Route::NotFound,
        }
    }

    pub fn current() -> Self {
        let path = web_sys::window()
            .map(|window| window.location().pathname().unwrap_or_default())
            .unwrap_or_default();
        Route::from_path(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn public_paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(
            Route::from_path("/blog/port-update"),
            Route::BlogPost("port-update".into())
        );
    }

    #[test]
    fn admin_paths_resolve() {
        assert_eq!(Route::from_path("/admin"), Route::AdminProducts);
        assert_eq!(Route::from_path("/admin/login"), Route::AdminLogin);
        assert_eq!(Route::from_path("/admin/reviews"), Route::AdminReviews);
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::from_path("/warehouse"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/users"), Route::NotFound);
    }
}
