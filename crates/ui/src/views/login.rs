use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use gram_core::model::{Portal, Section};
use services::{SessionService, ToastTone};

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{LoginPhase, UiState, WelcomeLine, use_ui_state};
use crate::views::ViewError;
use crate::vm::login_card_vm;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let navigator = use_navigator();
    let mut login_form = ui.login_form;
    let mut password_visible = ui.password_visible;

    let portal = ui.session.read().portal();
    let vm = login_card_vm(portal, (ui.login_phase)(), password_visible());
    let (username, password) = {
        let form = login_form.read();
        (form.username.clone(), form.password.clone())
    };
    let page_class = if vm.leaving { "login-page leaving" } else { "login-page" };

    let submit_service = ctx.session();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_login(ui, Arc::clone(&submit_service), move || {
            navigator.push(Route::Dashboard {});
        });
    };

    rsx! {
        div { class: "{page_class}",
            div { class: "login-brand",
                h1 { "🌾 GramShiksha" }
                p { "Learning for every village" }
            }
            div { class: "portal-switch",
                for option in Portal::ALL {
                    button {
                        key: "{option}",
                        r#type: "button",
                        class: if option == portal { "portal-btn active" } else { "portal-btn" },
                        onclick: {
                            let service = ctx.session();
                            move |_| {
                                ui.update_session(|state| service.switch_portal(state, option));
                            }
                        },
                        "{option.switch_label()}"
                    }
                }
            }
            div { class: "login-card",
                div { class: "login-avatar", "{vm.avatar}" }
                h2 { class: "login-title", "{vm.title}" }
                p { class: "login-subtitle", "{vm.subtitle}" }
                form { class: "login-form", onsubmit: on_submit,
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        placeholder: "{vm.username_placeholder}",
                        value: "{username}",
                        disabled: vm.busy,
                        oninput: move |evt| login_form.write().username = evt.value(),
                    }
                    label { r#for: "password", "Password" }
                    div { class: "password-field",
                        input {
                            id: "password",
                            r#type: "{vm.password_input_type}",
                            placeholder: "Enter your password",
                            value: "{password}",
                            disabled: vm.busy,
                            oninput: move |evt| login_form.write().password = evt.value(),
                        }
                        button {
                            r#type: "button",
                            class: "password-toggle",
                            onclick: move |_| password_visible.toggle(),
                            "{vm.password_toggle_icon}"
                        }
                    }
                    button {
                        class: "login-btn",
                        r#type: "submit",
                        disabled: vm.busy,
                        if vm.busy {
                            span { class: "btn-loader", "⏳ Signing in..." }
                        } else {
                            span { class: "btn-text", "Login 🚀" }
                        }
                    }
                }
            }
        }
    }
}

/// Validate, wait on the gateway and hand over to the dashboard through `on_enter`.
pub(crate) fn submit_login(
    ui: UiState,
    service: Arc<SessionService>,
    on_enter: impl FnOnce() + 'static,
) {
    let toast_duration = service.config().toast_duration;
    if *ui.login_phase.peek() != LoginPhase::Idle {
        return;
    }
    let draft = ui.login_form.peek().clone();
    if draft.validate().is_err() {
        tracing::debug!("login form incomplete");
        ui.show_toast(ViewError::EmptyFields.message(), ToastTone::Warning, toast_duration);
        return;
    }

    let mut login_phase = ui.login_phase;
    login_phase.set(LoginPhase::Submitting);
    let portal = ui.session.peek().portal();

    spawn_forever(async move {
        match service.sign_in(portal, &draft).await {
            Ok(profile) => {
                ui.update_session(|state| service.complete_sign_in(state, &profile));
                let mut welcome = ui.welcome;
                welcome.set(WelcomeLine::Greeting(service.greeting()));
                let mut nav = ui.nav;
                nav.write().reset();

                login_phase.set(LoginPhase::Leaving);
                tokio::time::sleep(service.config().login_fade).await;
                on_enter();
                login_phase.set(LoginPhase::Idle);

                ui.replay(Section::Overview.cues());
                ui.show_toast(
                    SessionService::welcome_toast(&profile),
                    ToastTone::Success,
                    toast_duration,
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                login_phase.set(LoginPhase::Idle);
                ui.show_toast(ViewError::from(&err).message(), ToastTone::Warning, toast_duration);
            }
        }
    });
}
