use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use dioxus_router::Router;
use services::Viewport;

use crate::context::AppContext;
use crate::routes::Route;
use crate::store::{provide_ui_state, use_ui_state};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    provide_ui_state(
        session.initial_state(),
        session.greeting(),
        ctx.config().viewport,
    );

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "GramShiksha" }

        WindowSizeTracker {}

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "fatal",
                    h1 { "Something went wrong" }
                    pre { "{errors:?}" }
                }
            },
            Router::<Route> {}
        }
    }
}

/// Feeds window resizes into the UI viewport.
#[component]
fn WindowSizeTracker() -> Element {
    let ui = use_ui_state();
    let window = use_window();

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let logical = size.to_logical::<f64>(window.scale_factor());
            ui.resize(Viewport::new(logical.width.round() as u32));
        }
    });

    rsx! {}
}
