use dioxus::prelude::*;
use services::ToastTone;

use crate::context::AppContext;
use crate::store::{WelcomeLine, use_ui_state};

#[component]
pub(super) fn SettingsPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let mut display_name = use_signal(|| ui.session.read().username().to_string());
    let dark = ui.session.read().dark_mode();
    let toggle_class = if dark { "toggle on" } else { "toggle" };

    let theme_service = ctx.session();
    let on_theme = move |_| {
        ui.update_session(|state| theme_service.toggle_theme(state));
    };

    let save_service = ctx.session();
    let on_save = move |_| {
        let name = display_name.read().clone();
        let outcome = ui.update_session(|state| save_service.save_settings(state, &name));
        if outcome.renamed.is_some() {
            let mut welcome = ui.welcome;
            welcome.set(WelcomeLine::Returning);
        }
        ui.show_toast(outcome.toast, ToastTone::Success, save_service.config().toast_duration);
    };

    rsx! {
        section { class: "section active", id: "settings",
            div { class: "settings-card",
                label { r#for: "dispName", "Display name" }
                input {
                    id: "dispName",
                    r#type: "text",
                    value: "{display_name}",
                    oninput: move |evt| display_name.set(evt.value()),
                }
            }
            div { class: "settings-card settings-row",
                span { "🌙 Dark mode" }
                button {
                    id: "darkToggle",
                    r#type: "button",
                    class: "{toggle_class}",
                    aria_pressed: "{dark}",
                    onclick: on_theme,
                }
            }
            button { class: "save-btn", r#type: "button", onclick: on_save, "💾 Save Settings" }
        }
    }
}
