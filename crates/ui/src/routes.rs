use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::components::{ParticleField, ToastSurface};
use crate::store::use_ui_state;
use crate::views::{DashboardView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", LoginView)] Login {},
        #[route("/dashboard", DashboardView)] Dashboard {},
}

/// Root container carrying the theme palette and the portal mode class.
#[component]
fn Shell() -> Element {
    let ui = use_ui_state();
    let session = ui.session.read();
    let palette = session.theme().palette().css_vars();
    let portal_class = session.portal().body_class().unwrap_or_default();
    let theme_class = if session.dark_mode() { "dark" } else { "" };

    rsx! {
        div { class: "app-root {portal_class} {theme_class}", style: "{palette}",
            ParticleField {}
            Outlet::<Route> {}
            ToastSurface {}
        }
    }
}
