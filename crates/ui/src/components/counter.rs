use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use gram_core::anim::{CounterTween, FRAME_INTERVAL, format_stat};

use crate::store::use_ui_state;

/// Stat value that counts up from zero whenever the counters epoch moves.
///
/// A new target within the same epoch, such as XP from a badge, is shown
/// straight away instead of counting up from zero again.
#[component]
pub fn AnimatedCounter(target: f64) -> Element {
    let ui = use_ui_state();
    let counters_epoch = ui.counters_epoch;
    let mut shown = use_signal(move || {
        if CounterTween::should_animate(target) {
            CounterTween::new(target).display_at(Duration::ZERO)
        } else {
            format_stat(target)
        }
    });
    let animated_epoch = use_hook(|| Rc::new(Cell::new(None::<u32>)));

    let _ticker = use_resource(use_reactive((&target,), move |(target,)| {
        let animated_epoch = Rc::clone(&animated_epoch);
        async move {
            let epoch = counters_epoch();
            let fresh = animated_epoch.replace(Some(epoch)) != Some(epoch);
            if !fresh || !CounterTween::should_animate(target) {
                shown.set(format_stat(target));
                return;
            }
            let tween = CounterTween::new(target);
            let started = tokio::time::Instant::now();
            loop {
                let elapsed = started.elapsed();
                shown.set(tween.display_at(elapsed));
                if tween.is_finished(elapsed) {
                    break;
                }
                tokio::time::sleep(FRAME_INTERVAL).await;
            }
        }
    }));

    rsx! {
        span { class: "stat-val", "{shown}" }
    }
}
