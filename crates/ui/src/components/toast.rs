use dioxus::prelude::*;

use crate::store::use_ui_state;

#[component]
pub fn ToastSurface() -> Element {
    let ui = use_ui_state();
    let queue = ui.toast.read();
    match queue.current() {
        Some(toast) => {
            let tone = toast.tone.class();
            let message = toast.message.clone();
            rsx! {
                div { class: "toast show {tone}", role: "status", "{message}" }
            }
        }
        None => rsx! {
            div { class: "toast", role: "status" }
        },
    }
}
