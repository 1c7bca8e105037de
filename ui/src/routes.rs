//! URL map. Everything under [`ProtectedLayout`] requires a session.

use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::context::use_session;
use crate::views::{Auth, Dashboard, Expert, Landing, Market, NotFound, Schemes, Weather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth?:mode")]
    Auth { mode: String },
    #[layout(ProtectedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/weather")]
        Weather {},
        #[route("/market")]
        Market {},
        #[route("/schemes")]
        Schemes {},
        #[route("/expert")]
        Expert {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Which form the auth page shows, carried in `?mode=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    /// Anything other than `signup` opens the login form.
    pub fn from_query(query: &str) -> Self {
        match query {
            "signup" => AuthMode::Signup,
            _ => AuthMode::Login,
        }
    }

    pub fn query(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }

    pub fn route(self) -> Route {
        Route::Auth {
            mode: self.query().to_string(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Sends signed-out visitors to the login form; renders the nav header and
/// the routed page otherwise.
#[component]
fn ProtectedLayout() -> Element {
    let session = use_session();
    let nav = navigator();

    use_effect(move || {
        if !session.read().is_authenticated() {
            nav.replace(AuthMode::Login.route());
        }
    });

    if !session.read().is_authenticated() {
        return rsx! {};
    }

    rsx! {
        AppNavbar {}
        main { class: "page-shell",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_mode_defaults_to_login() {
        assert_eq!(AuthMode::from_query("signup"), AuthMode::Signup);
        assert_eq!(AuthMode::from_query("login"), AuthMode::Login);
        assert_eq!(AuthMode::from_query(""), AuthMode::Login);
        assert_eq!(AuthMode::from_query("SIGNUP"), AuthMode::Login);
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
    }

    #[test]
    fn routes_render_to_expected_paths() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Expert {}.to_string(), "/expert");
        assert_eq!(
            AuthMode::Signup.route(),
            Route::Auth {
                mode: "signup".into()
            }
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/does/not/exist".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));

        let route: Route = "/weather".parse().unwrap();
        assert_eq!(route, Route::Weather {});
    }
}
