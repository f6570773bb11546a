use std::time::Duration;

use dioxus::prelude::*;

use crate::store::use_ui_state;

/// Bar that starts empty and transitions to `percent` after `delay`.
///
/// The fill restarts from zero each time the bars epoch moves.
#[component]
pub fn ProgressBar(percent: f64, delay: Duration, fill_class: &'static str) -> Element {
    let ui = use_ui_state();
    let bars_epoch = ui.bars_epoch;
    let mut width = use_signal(|| 0.0_f64);

    let _fill = use_resource(move || async move {
        let _epoch = bars_epoch();
        width.set(0.0);
        tokio::time::sleep(delay).await;
        width.set(percent.clamp(0.0, 100.0));
    });

    let width = width();
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill {fill_class}", style: "width: {width:.1}%;" }
        }
    }
}
