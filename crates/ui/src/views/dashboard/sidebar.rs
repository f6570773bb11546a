use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::SessionService;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{DashboardPhase, LoginPhase, UiState, use_ui_state};
use crate::vm::{map_nav_items, sidebar_vm};

#[component]
pub(super) fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let navigator = use_navigator();
    let viewport = (ui.viewport)();

    let (vm, items) = {
        let session = ui.session.read();
        let nav = ui.nav.read();
        (
            sidebar_vm(&session, viewport.is_compact(), nav.overlay_open()),
            map_nav_items(session.portal(), nav.active()),
        )
    };

    let service = ctx.session();
    let on_logout = move |_| {
        start_logout(ui, Arc::clone(&service), move || {
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        aside { class: "{vm.class}",
            div { class: "sidebar-profile",
                div { class: "sidebar-avatar", "{vm.avatar}" }
                div {
                    div { class: "sidebar-name", "{vm.name}" }
                    div { class: "sidebar-role", "{vm.role}" }
                }
            }
            nav { class: "sidebar-nav",
                for item in items {
                    button {
                        key: "{item.section.id()}",
                        r#type: "button",
                        class: if item.active { "nav-item active" } else { "nav-item" },
                        onclick: move |_| {
                            let mut nav = ui.nav;
                            let viewport = *ui.viewport.peek();
                            let outcome = nav.write().navigate(item.section.id(), viewport);
                            ui.replay(outcome.cues);
                        },
                        span { "{item.icon}" }
                        span { "{item.label}" }
                    }
                }
            }
            button { class: "logout-btn", r#type: "button", onclick: on_logout, "🚪 Logout" }
        }
    }
}

/// Fade the dashboard out, then reset the session and hand over to the login page.
pub(crate) fn start_logout(
    ui: UiState,
    service: Arc<SessionService>,
    on_leave: impl FnOnce() + 'static,
) {
    let mut dashboard_phase = ui.dashboard_phase;
    if *dashboard_phase.peek() == DashboardPhase::Leaving {
        return;
    }
    dashboard_phase.set(DashboardPhase::Leaving);
    spawn_forever(async move {
        tokio::time::sleep(service.config().logout_fade).await;
        on_leave();

        let (mut session, mut form, mut nav) = (ui.session, ui.login_form, ui.nav);
        service.logout(&mut session.write(), &mut form.write(), &mut nav.write());
        let (mut password_visible, mut login_phase) = (ui.password_visible, ui.login_phase);
        password_visible.set(false);
        login_phase.set(LoginPhase::Idle);
        dashboard_phase.set(DashboardPhase::Active);
    });
}
